//! Skill comparator: required skills vs the master and tailored skill lists.

use serde::{Deserialize, Serialize};

use crate::analysis::extractor::skill_key;
use crate::analysis::taxonomy::transferable_for;
use crate::models::resume::{Resume, SkillRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillStatus {
    Matched,
    Partial,
    Missing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillMatch {
    pub name: String,
    pub status: SkillStatus,
    pub in_master: bool,
    pub in_tailored: bool,
    /// Transferable skills from the master resume that can stand in.
    pub alternatives: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsAnalysis {
    pub required_skills: Vec<SkillMatch>,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub match_percentage: u32,
}

/// Compares required skills against both resumes.
///
/// The required set is the job's extracted skills unioned with every skill
/// already placed in the tailored resume, deduplicated on [`skill_key`] with
/// job skills first. Resume lookups use the same key, so "Golang" on a resume
/// satisfies a job asking for "Go".
///
/// Status rules:
/// - `matched`: listed in both master and tailored
/// - `partial`: listed in master only, or a transferable alternative is in master
/// - `missing`: otherwise
pub fn compare_skills(master: &Resume, tailored: &Resume, job_skills: &[String]) -> SkillsAnalysis {
    let mut required: Vec<(String, String)> = Vec::new();
    let candidates = job_skills
        .iter()
        .map(|s| s.trim().to_string())
        .chain(tailored.skills.iter().map(|s| s.name.trim().to_string()));
    for name in candidates {
        if name.is_empty() {
            continue;
        }
        let key = skill_key(&name);
        if !required.iter().any(|(k, _)| *k == key) {
            required.push((key, name));
        }
    }

    let required_skills: Vec<SkillMatch> = required
        .into_iter()
        .map(|(key, name)| match_skill(master, tailored, &key, name))
        .collect();

    let matched_skills: Vec<String> = required_skills
        .iter()
        .filter(|m| m.status == SkillStatus::Matched)
        .map(|m| m.name.clone())
        .collect();
    let missing_skills: Vec<String> = required_skills
        .iter()
        .filter(|m| m.status == SkillStatus::Missing)
        .map(|m| m.name.clone())
        .collect();

    let match_percentage = if required_skills.is_empty() {
        100
    } else {
        ((matched_skills.len() as f64 / required_skills.len() as f64) * 100.0).round() as u32
    };

    SkillsAnalysis {
        required_skills,
        matched_skills,
        missing_skills,
        match_percentage,
    }
}

fn find_by_key<'a>(resume: &'a Resume, key: &str) -> Option<&'a SkillRecord> {
    resume.skills.iter().find(|s| skill_key(&s.name) == key)
}

fn match_skill(master: &Resume, tailored: &Resume, key: &str, name: String) -> SkillMatch {
    let in_master = find_by_key(master, key).is_some();
    let in_tailored = find_by_key(tailored, key).is_some();

    let mut alternatives: Vec<String> = Vec::new();
    if !(in_master && in_tailored) {
        for alt in transferable_for(key) {
            let alt_key = skill_key(alt);
            if alt_key == key {
                continue;
            }
            if let Some(found) = find_by_key(master, &alt_key) {
                if !alternatives.contains(&found.name) {
                    alternatives.push(found.name.clone());
                }
            }
        }
    }

    let status = if in_master && in_tailored {
        SkillStatus::Matched
    } else if in_master || !alternatives.is_empty() {
        SkillStatus::Partial
    } else {
        SkillStatus::Missing
    };

    SkillMatch {
        name,
        status,
        in_master,
        in_tailored,
        alternatives,
    }
}
