//! Bullet-quality rubric for a single achievement bullet.
//!
//! Additive score, each check contributes its weight only when it passes:
//! - leading action verb: 20
//! - quantification (digit, `%`, `$`, or scale word): 30
//! - impact/outcome language: 25
//! - length of 10–25 words: 15
//! - technical term: 10

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::taxonomy::{ACTION_VERBS, IMPACT_STEMS, TECHNICAL_TERMS};

pub const ACTION_VERB_POINTS: u32 = 20;
pub const QUANTIFICATION_POINTS: u32 = 30;
pub const IMPACT_POINTS: u32 = 25;
pub const LENGTH_POINTS: u32 = 15;
pub const TECHNICAL_POINTS: u32 = 10;

pub const MIN_WORDS: usize = 10;
pub const MAX_WORDS: usize = 25;

/// Bullets scoring below this are reported as weak.
pub const WEAK_BULLET_THRESHOLD: u32 = 60;

static QUANTIFICATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\d|%|\$|\b(?:million|millions|billion|billions|thousand|thousands|hundreds|dozens)\b")
        .expect("valid quantification regex")
});

static IMPACT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\b(?:{})\w*", IMPACT_STEMS.join("|"))).expect("valid impact regex")
});

static TECHNICAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\b(?:{})\b", TECHNICAL_TERMS.join("|")))
        .expect("valid technical term regex")
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulletAnalysis {
    pub description: String,
    pub score: u32,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
}

impl BulletAnalysis {
    pub fn is_weak(&self) -> bool {
        self.score < WEAK_BULLET_THRESHOLD
    }
}

/// Scores one bullet against the rubric. Never fails; an empty description
/// scores 0 with every issue reported.
pub fn analyze_bullet(description: &str) -> BulletAnalysis {
    let mut score = 0u32;
    let mut issues = Vec::new();
    let mut suggestions = Vec::new();

    if starts_with_action_verb(description) {
        score += ACTION_VERB_POINTS;
    } else {
        issues.push("Does not start with a strong action verb".to_string());
        suggestions.push(
            "Start with an action verb such as 'Led', 'Built', 'Reduced' or 'Delivered'."
                .to_string(),
        );
    }

    if QUANTIFICATION_RE.is_match(description) {
        score += QUANTIFICATION_POINTS;
    } else {
        issues.push("Missing quantifiable results".to_string());
        suggestions.push(
            "Add a number, percentage, dollar amount or scale (e.g. '40%', '$200K', '12 services')."
                .to_string(),
        );
    }

    if IMPACT_RE.is_match(description) {
        score += IMPACT_POINTS;
    } else {
        issues.push("Missing impact or outcome".to_string());
        suggestions.push(
            "State the outcome: what increased, decreased, improved or was saved.".to_string(),
        );
    }

    let word_count = description.split_whitespace().count();
    if (MIN_WORDS..=MAX_WORDS).contains(&word_count) {
        score += LENGTH_POINTS;
    } else if word_count < MIN_WORDS {
        issues.push(format!("Too brief ({word_count} words)"));
        suggestions.push(format!(
            "Expand to {MIN_WORDS}-{MAX_WORDS} words with context on scope and result."
        ));
    } else {
        issues.push(format!("Too long ({word_count} words)"));
        suggestions.push(format!(
            "Tighten to at most {MAX_WORDS} words; split into two bullets if needed."
        ));
    }

    if TECHNICAL_RE.is_match(description) {
        score += TECHNICAL_POINTS;
    } else {
        suggestions.push("Mention the technology, system or platform involved.".to_string());
    }

    BulletAnalysis {
        description: description.to_string(),
        score: score.min(100),
        issues,
        suggestions,
    }
}

/// Checks the first real word, skipping list markers such as `-`, `*` or `•`.
fn starts_with_action_verb(description: &str) -> bool {
    description
        .split_whitespace()
        .find(|token| token.chars().any(char::is_alphanumeric))
        .map(|word| {
            let word = word
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase();
            ACTION_VERBS.contains(&word.as_str())
        })
        .unwrap_or(false)
}

/// Scores a batch of bullets in order.
pub fn analyze_bullets(bullets: &[String]) -> Vec<BulletAnalysis> {
    bullets.iter().map(|b| analyze_bullet(b)).collect()
}
