//! Experience gap analysis across every bullet of the tailored resume.

use serde::{Deserialize, Serialize};

use crate::analysis::bullet::{analyze_bullet, BulletAnalysis};
use crate::models::resume::Resume;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceAnalysis {
    pub total_bullets: u32,
    pub relevant_bullets: u32,
    pub weak_bullets: Vec<BulletAnalysis>,
    pub missing_keywords: Vec<String>,
    pub bullet_quality_score: u32,
}

/// Walks every responsibility bullet, marking it relevant when any job keyword
/// appears in it (case-insensitive substring) and collecting weak bullets.
///
/// `bullet_quality_score` is the share of non-weak bullets, or 0 when the
/// resume has no bullets at all.
pub fn analyze_experience(tailored: &Resume, job_keywords: &[String]) -> ExperienceAnalysis {
    let keywords: Vec<String> = job_keywords.iter().map(|k| k.to_lowercase()).collect();
    let mut found = vec![false; keywords.len()];

    let mut total_bullets = 0u32;
    let mut relevant_bullets = 0u32;
    let mut weak_bullets = Vec::new();

    for bullet in tailored.bullets() {
        total_bullets += 1;
        let text = bullet.description.to_lowercase();

        let mut relevant = false;
        for (idx, keyword) in keywords.iter().enumerate() {
            if !keyword.is_empty() && text.contains(keyword.as_str()) {
                relevant = true;
                found[idx] = true;
            }
        }
        if relevant {
            relevant_bullets += 1;
        }

        let analysis = analyze_bullet(&bullet.description);
        if analysis.is_weak() {
            weak_bullets.push(analysis);
        }
    }

    let missing_keywords: Vec<String> = job_keywords
        .iter()
        .zip(found.iter())
        .filter(|(_, hit)| !**hit)
        .map(|(keyword, _)| keyword.clone())
        .collect();

    let bullet_quality_score = if total_bullets == 0 {
        0
    } else {
        let strong = total_bullets - weak_bullets.len() as u32;
        ((strong as f64 / total_bullets as f64) * 100.0).round() as u32
    };

    ExperienceAnalysis {
        total_bullets,
        relevant_bullets,
        weak_bullets,
        missing_keywords,
        bullet_quality_score,
    }
}
