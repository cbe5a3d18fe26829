//! Keyword and skill extraction from free text (job descriptions, bullets).

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::taxonomy::{
    is_stop_word, rewrite_for, SkillCategory, COMPILED_SKILL_PATTERNS, MAX_KEYWORDS,
    MIN_KEYWORD_LEN, SKILL_REWRITES,
};

static NON_WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s]").expect("valid punctuation regex"));

/// Skills sharing a display category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<String>,
}

const OTHER_CATEGORY: &str = "Other";

/// Returns the most frequent non-stop-word tokens, highest count first.
///
/// Tokens shorter than `MIN_KEYWORD_LEN` and pure numbers are dropped. Ties
/// keep first-seen order so the output is deterministic.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let cleaned = NON_WORD_RE.replace_all(&lowered, " ");

    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for word in cleaned.split_whitespace() {
        if word.chars().count() < MIN_KEYWORD_LEN
            || is_stop_word(word)
            || word.chars().all(|c| c.is_ascii_digit())
        {
            continue;
        }
        let count = counts.entry(word.to_string()).or_insert(0);
        if *count == 0 {
            order.push(word.to_string());
        }
        *count += 1;
    }

    // sort_by is stable: equal counts stay in first-seen order
    order.sort_by(|a, b| counts[b].cmp(&counts[a]));
    order.truncate(MAX_KEYWORDS);
    order
}

/// Returns the normalized names of every taxonomy skill mentioned in `text`.
pub fn extract_skills(text: &str) -> Vec<String> {
    let mut skills: Vec<String> = Vec::new();
    for pattern in COMPILED_SKILL_PATTERNS.iter() {
        let found = pattern
            .regex
            .captures(text)
            .and_then(|caps| caps.name("skill"))
            .map(|m| normalize_skill_name(m.as_str()));

        if let Some(name) = found {
            if !skills.contains(&name) {
                skills.push(name);
            }
        }
    }
    skills
}

/// Canonical display spelling for a skill: special-case rewrites first
/// (`nodejs` -> `Node.js`, `k8s` -> `Kubernetes`), then title case.
pub fn normalize_skill_name(raw: &str) -> String {
    let key = raw.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
    if let Some(rewrite) = rewrite_for(&key) {
        return rewrite.to_string();
    }
    key.split(' ')
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Identity of a skill for comparisons: aliases such as "k8s" and
/// "Kubernetes" share one key.
pub fn skill_key(name: &str) -> String {
    normalize_skill_name(name).to_lowercase()
}

fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Taxonomy category of a skill name, if the name is a known skill.
pub fn skill_category(name: &str) -> Option<SkillCategory> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Rewritten names ("Go") are found through their source spellings ("golang").
    let lowered = trimmed.to_lowercase();
    let mut candidates = vec![trimmed.to_string()];
    candidates.extend(
        SKILL_REWRITES
            .iter()
            .filter(|(_, to)| to.to_lowercase() == lowered)
            .map(|(from, _)| from.to_string()),
    );

    COMPILED_SKILL_PATTERNS
        .iter()
        .find(|pattern| {
            candidates.iter().any(|candidate| {
                pattern
                    .regex
                    .captures(candidate)
                    .and_then(|caps| caps.name("skill"))
                    .map(|m| m.as_str().len() == candidate.len())
                    .unwrap_or(false)
            })
        })
        .map(|pattern| pattern.category)
}

/// Groups skill names by category in taxonomy order; unknown skills go last
/// under "Other". Empty groups are omitted.
pub fn group_skills_by_category(names: &[String]) -> Vec<SkillGroup> {
    let mut buckets: Vec<(Option<SkillCategory>, Vec<String>)> = SkillCategory::ALL
        .iter()
        .map(|c| (Some(*c), Vec::new()))
        .collect();
    buckets.push((None, Vec::new()));

    for name in names {
        let category = skill_category(name);
        if let Some((_, skills)) = buckets.iter_mut().find(|(c, _)| *c == category) {
            skills.push(name.clone());
        }
    }

    buckets
        .into_iter()
        .filter(|(_, skills)| !skills.is_empty())
        .map(|(category, skills)| SkillGroup {
            category: category
                .map(|c| c.display_name())
                .unwrap_or(OTHER_CATEGORY)
                .to_string(),
            skills,
        })
        .collect()
}
