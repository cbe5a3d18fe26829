//! Heuristic tailoring: ranks and filters master-resume content against a
//! job description to produce a tailored resume without an AI call.
//!
//! The master is only read; the tailored resume is a new value.

use serde::{Deserialize, Serialize};

use crate::analysis::extractor::{
    extract_keywords, extract_skills, group_skills_by_category, skill_key, SkillGroup,
};
use crate::models::resume::{ExperienceEntry, ProjectEntry, Resume, SkillRecord, SkillTag};

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// An item left out of the tailored resume, with the reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exclusion {
    pub item: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TailoringResult {
    pub resume: Resume,
    pub excluded: Vec<Exclusion>,
    pub skill_groups: Vec<SkillGroup>,
    pub job_keywords: Vec<String>,
    pub job_skills: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Selection algorithm
// ────────────────────────────────────────────────────────────────────────────

const EXPERIENCE_LIMIT: usize = 8;
const BULLETS_PER_ENTRY_LIMIT: usize = 5;
const PROJECT_LIMIT: usize = 4;

/// Added to an item's relevance when one of its tags matches a focus tag,
/// a job keyword or a job skill.
const TAG_BOOST: f64 = 0.5;

/// Job signals every item is scored against.
struct JobSignals<'a> {
    keywords: &'a [String],
    skills: &'a [String],
    focus_tags: &'a [String],
}

impl JobSignals<'_> {
    fn is_empty(&self) -> bool {
        self.keywords.is_empty() && self.skills.is_empty() && self.focus_tags.is_empty()
    }

    /// Fraction of job keywords found in `text` (case-insensitive substring).
    fn text_relevance(&self, text: &str) -> f64 {
        if self.keywords.is_empty() {
            return 0.0;
        }
        let text = text.to_lowercase();
        let hits = self
            .keywords
            .iter()
            .filter(|k| text.contains(k.as_str()))
            .count();
        hits as f64 / self.keywords.len() as f64
    }

    fn tag_matches(&self, tags: &[SkillTag]) -> bool {
        tags.iter().any(|tag| {
            self.focus_tags.iter().any(|f| tag.matches(f))
                || self.keywords.iter().any(|k| tag.matches(k))
                || self.skills.iter().any(|s| tag.matches(s))
        })
    }

    fn relevance(&self, text: &str, tags: &[SkillTag]) -> f64 {
        let boost = if self.tag_matches(tags) { TAG_BOOST } else { 0.0 };
        self.text_relevance(text) + boost
    }
}

/// Builds a tailored resume from the master for one job description.
///
/// Algorithm:
/// 1. Extract job keywords and skills
/// 2. Keep skills named in the job, matching a keyword, or carrying a matching tag
/// 3. Re-rank bullets per experience entry by relevance, cap at 5 per entry
/// 4. Keep the first 8 experience entries in master order
/// 5. Rank projects by relevance, cap at 4
///
/// With no keywords, skills or focus tags to score against, the master is
/// returned unchanged.
pub fn tailor_resume(master: &Resume, job_description: &str, focus_tags: &[String]) -> TailoringResult {
    let job_keywords = extract_keywords(job_description);
    let job_skills = extract_skills(job_description);
    let focus_tags: Vec<String> = focus_tags
        .iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    let signals = JobSignals {
        keywords: &job_keywords,
        skills: &job_skills,
        focus_tags: &focus_tags,
    };

    if signals.is_empty() {
        let skill_names: Vec<String> = master.skills.iter().map(|s| s.name.clone()).collect();
        return TailoringResult {
            resume: master.clone(),
            excluded: Vec::new(),
            skill_groups: group_skills_by_category(&skill_names),
            job_keywords,
            job_skills,
        };
    }

    let mut excluded = Vec::new();

    let skills = select_skills(&master.skills, &signals, &mut excluded);
    let experience = select_experience(&master.experience, &signals, &mut excluded);
    let projects = select_projects(&master.projects, &signals, &mut excluded);

    let skill_names: Vec<String> = skills.iter().map(|s| s.name.clone()).collect();
    let skill_groups = group_skills_by_category(&skill_names);

    let resume = Resume {
        contact: master.contact.clone(),
        summary: master.summary.clone(),
        skills,
        experience,
        education: master.education.clone(),
        certifications: master.certifications.clone(),
        projects,
        volunteer: master.volunteer.clone(),
    };

    TailoringResult {
        resume,
        excluded,
        skill_groups,
        job_keywords,
        job_skills,
    }
}

/// Job-named skills come first, then keyword/tag matches, each in master order.
fn select_skills(
    skills: &[SkillRecord],
    signals: &JobSignals<'_>,
    excluded: &mut Vec<Exclusion>,
) -> Vec<SkillRecord> {
    let mut named = Vec::new();
    let mut related = Vec::new();

    for skill in skills {
        let key = skill_key(&skill.name);
        let lowered = skill.name.trim().to_lowercase();
        if signals.skills.iter().any(|s| skill_key(s) == key) {
            named.push(skill.clone());
        } else if signals.keywords.iter().any(|k| *k == lowered) || signals.tag_matches(&skill.tags)
        {
            related.push(skill.clone());
        } else {
            excluded.push(Exclusion {
                item: format!("skill: {}", skill.name),
                reason: "Not relevant to the job description".to_string(),
            });
        }
    }

    named.extend(related);
    named
}

fn select_experience(
    entries: &[ExperienceEntry],
    signals: &JobSignals<'_>,
    excluded: &mut Vec<Exclusion>,
) -> Vec<ExperienceEntry> {
    let mut selected = Vec::new();

    for (idx, entry) in entries.iter().enumerate() {
        let label = format!("{} at {}", entry.role, entry.company);
        if idx >= EXPERIENCE_LIMIT {
            excluded.push(Exclusion {
                item: format!("experience: {label}"),
                reason: format!("Section limit reached ({EXPERIENCE_LIMIT} max for experience)"),
            });
            continue;
        }

        let mut ranked: Vec<(f64, usize)> = entry
            .responsibilities
            .iter()
            .enumerate()
            .map(|(i, b)| (signals.relevance(&b.description, &b.tags), i))
            .collect();
        // Sort descending, most relevant bullet first, ties keep master order
        ranked.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

        let mut responsibilities = Vec::new();
        for (rank, (_, i)) in ranked.into_iter().enumerate() {
            let bullet = &entry.responsibilities[i];
            if rank < BULLETS_PER_ENTRY_LIMIT {
                responsibilities.push(bullet.clone());
            } else {
                excluded.push(Exclusion {
                    item: format!("bullet: {}", bullet.description),
                    reason: format!(
                        "Ranked below the top {BULLETS_PER_ENTRY_LIMIT} bullets for {label}"
                    ),
                });
            }
        }

        selected.push(ExperienceEntry {
            responsibilities,
            ..entry.clone()
        });
    }

    selected
}

fn select_projects(
    projects: &[ProjectEntry],
    signals: &JobSignals<'_>,
    excluded: &mut Vec<Exclusion>,
) -> Vec<ProjectEntry> {
    let mut ranked: Vec<(f64, &ProjectEntry)> = projects
        .iter()
        .map(|p| {
            let text = format!("{} {}", p.title, p.description);
            (signals.relevance(&text, &p.tags), p)
        })
        .collect();
    ranked.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

    let mut selected = Vec::new();
    for (rank, (_, project)) in ranked.into_iter().enumerate() {
        if rank < PROJECT_LIMIT {
            selected.push(project.clone());
        } else {
            excluded.push(Exclusion {
                item: format!("project: {}", project.title),
                reason: format!("Section limit reached ({PROJECT_LIMIT} max for projects)"),
            });
        }
    }
    selected
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
