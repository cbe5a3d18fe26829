//! ATS score: keyword density over the flattened tailored resume plus
//! formatting checks.

use serde::{Deserialize, Serialize};

use crate::models::resume::Resume;

/// Keywords longer than this are expected fewer times.
const LONG_KEYWORD_LEN: usize = 8;
const LONG_KEYWORD_OPTIMAL: u32 = 2;
const SHORT_KEYWORD_OPTIMAL: u32 = 3;

const FORMAT_PENALTY: f64 = 10.0;
const MIN_SUMMARY_CHARS: usize = 50;
const MIN_SKILLS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DensityStatus {
    Low,
    Good,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordDensity {
    pub keyword: String,
    pub count: u32,
    pub optimal: u32,
    pub status: DensityStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsScore {
    pub score: u32,
    pub keyword_density: Vec<KeywordDensity>,
    pub formatting_issues: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Expected occurrence count for a keyword.
pub fn optimal_count(keyword: &str) -> u32 {
    if keyword.chars().count() > LONG_KEYWORD_LEN {
        LONG_KEYWORD_OPTIMAL
    } else {
        SHORT_KEYWORD_OPTIMAL
    }
}

/// `low` below optimal (including zero), `high` above twice optimal.
pub fn classify_density(count: u32, optimal: u32) -> DensityStatus {
    if count == 0 || count < optimal {
        DensityStatus::Low
    } else if count > optimal * 2 {
        DensityStatus::High
    } else {
        DensityStatus::Good
    }
}

/// Lower-cased text an ATS would index: summary, skill names, role, company
/// and bullet text, project titles and descriptions.
pub fn resume_text(resume: &Resume) -> String {
    let mut parts: Vec<&str> = Vec::new();
    if let Some(summary) = resume.summary.as_deref() {
        parts.push(summary);
    }
    parts.extend(resume.skills.iter().map(|s| s.name.as_str()));
    for entry in &resume.experience {
        parts.push(&entry.role);
        parts.push(&entry.company);
        parts.extend(entry.responsibilities.iter().map(|b| b.description.as_str()));
    }
    for project in &resume.projects {
        parts.push(&project.title);
        parts.push(&project.description);
    }
    parts.join(" ").to_lowercase()
}

fn count_occurrences(text: &str, keyword: &str) -> u32 {
    let keyword = keyword.trim().to_lowercase();
    if keyword.is_empty() {
        return 0;
    }
    text.matches(keyword.as_str()).count() as u32
}

/// Scores the tailored resume against job keywords.
///
/// `score = max(0, round(good / total * 100 - 10 * formatting_issues))`, with
/// the keyword part taken as 0 when there are no keywords.
pub fn calculate_ats_score(tailored: &Resume, job_keywords: &[String]) -> AtsScore {
    let text = resume_text(tailored);

    let mut keyword_density = Vec::with_capacity(job_keywords.len());
    let mut suggestions = Vec::new();

    for keyword in job_keywords {
        let count = count_occurrences(&text, keyword);
        let optimal = optimal_count(keyword);
        let status = classify_density(count, optimal);

        match status {
            DensityStatus::Low => suggestions.push(format!(
                "Use \"{keyword}\" more often (found {count}, aim for {optimal})"
            )),
            DensityStatus::High => suggestions.push(format!(
                "Reduce use of \"{keyword}\" (found {count}, more than {} looks like keyword stuffing)",
                optimal * 2
            )),
            DensityStatus::Good => {}
        }

        keyword_density.push(KeywordDensity {
            keyword: keyword.clone(),
            count,
            optimal,
            status,
        });
    }

    let formatting_issues = formatting_issues(tailored);

    let keyword_score = if keyword_density.is_empty() {
        0.0
    } else {
        let good = keyword_density
            .iter()
            .filter(|k| k.status == DensityStatus::Good)
            .count();
        good as f64 / keyword_density.len() as f64 * 100.0
    };
    let penalty = formatting_issues.len() as f64 * FORMAT_PENALTY;
    let score = (keyword_score - penalty).round().max(0.0) as u32;

    AtsScore {
        score,
        keyword_density,
        formatting_issues,
        suggestions,
    }
}

fn formatting_issues(resume: &Resume) -> Vec<String> {
    let mut issues = Vec::new();

    if is_blank(resume.contact.email.as_deref()) {
        issues.push("Missing email address".to_string());
    }
    if is_blank(resume.contact.phone.as_deref()) {
        issues.push("Missing phone number".to_string());
    }

    let summary_len = resume
        .summary
        .as_deref()
        .map(|s| s.trim().chars().count())
        .unwrap_or(0);
    if summary_len < MIN_SUMMARY_CHARS {
        issues.push(format!(
            "Professional summary is too short (under {MIN_SUMMARY_CHARS} characters)"
        ));
    }

    if resume.skills.len() < MIN_SKILLS {
        issues.push(format!(
            "Fewer than {MIN_SKILLS} skills listed ({})",
            resume.skills.len()
        ));
    }

    issues
}

fn is_blank(value: Option<&str>) -> bool {
    value.map(|v| v.trim().is_empty()).unwrap_or(true)
}
