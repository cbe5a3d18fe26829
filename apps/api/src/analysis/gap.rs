//! Gap analysis orchestrator: composes extraction, skill comparison,
//! experience analysis, ATS scoring and recommendations into one report.
//!
//! Default: `HeuristicGapAnalyzer` (pure, deterministic, no I/O).
//! `AppState` holds an `Arc<dyn GapAnalyzer>` so another backend can be
//! swapped in without touching handlers.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::ats::{calculate_ats_score, AtsScore};
use crate::analysis::experience::{analyze_experience, ExperienceAnalysis};
use crate::analysis::extractor::{extract_keywords, extract_skills};
use crate::analysis::recommendations::{generate_recommendations, Recommendation};
use crate::analysis::skills::{compare_skills, SkillsAnalysis};
use crate::models::resume::Resume;

// ────────────────────────────────────────────────────────────────────────────
// Report
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GapAnalysisReport {
    pub overall_score: u32, // 0 – 100
    pub skills_analysis: SkillsAnalysis,
    pub experience_analysis: ExperienceAnalysis,
    pub ats_score: AtsScore,
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Clone)]
pub struct ScoreWeights {
    pub skills_match: f64,
    pub bullet_quality: f64,
    pub ats: f64,
    pub experience_present: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            skills_match: 0.35,
            bullet_quality: 0.30,
            ats: 0.20,
            experience_present: 0.15,
        }
    }
}

/// Weighted overall score: 0.35*skills + 0.30*bullets + 0.20*ats + 0.15*experience,
/// where experience is 100 when the tailored resume lists any experience.
pub fn compute_overall_score(
    match_percentage: u32,
    bullet_quality_score: u32,
    ats_score: u32,
    has_experience: bool,
    weights: &ScoreWeights,
) -> u32 {
    let experience = if has_experience { 100.0 } else { 0.0 };
    let score = weights.skills_match * match_percentage as f64
        + weights.bullet_quality * bullet_quality_score as f64
        + weights.ats * ats_score as f64
        + weights.experience_present * experience;
    score.round().clamp(0.0, 100.0) as u32
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

pub trait GapAnalyzer: Send + Sync {
    fn analyze(&self, master: &Resume, tailored: &Resume, job_description: &str)
        -> GapAnalysisReport;

    /// Label reported in logs, e.g. "heuristic".
    fn backend(&self) -> &'static str;
}

/// Rules-based analyzer built from the fixed taxonomy and rubric tables.
pub struct HeuristicGapAnalyzer;

impl GapAnalyzer for HeuristicGapAnalyzer {
    fn analyze(
        &self,
        master: &Resume,
        tailored: &Resume,
        job_description: &str,
    ) -> GapAnalysisReport {
        analyze_gaps(master, tailored, job_description)
    }

    fn backend(&self) -> &'static str {
        "heuristic"
    }
}

/// Runs the full analysis. Stateless: identical inputs give identical reports.
pub fn analyze_gaps(master: &Resume, tailored: &Resume, job_description: &str) -> GapAnalysisReport {
    let job_keywords = extract_keywords(job_description);
    let job_skills = extract_skills(job_description);

    let skills_analysis = compare_skills(master, tailored, &job_skills);
    let experience_analysis = analyze_experience(tailored, &job_keywords);
    let ats_score = calculate_ats_score(tailored, &job_keywords);
    let recommendations =
        generate_recommendations(&skills_analysis, &experience_analysis, &ats_score);

    let overall_score = compute_overall_score(
        skills_analysis.match_percentage,
        experience_analysis.bullet_quality_score,
        ats_score.score,
        !tailored.experience.is_empty(),
        &ScoreWeights::default(),
    );

    debug!(
        keywords = job_keywords.len(),
        skills = job_skills.len(),
        bullets = experience_analysis.total_bullets,
        recommendations = recommendations.len(),
        overall_score,
        "Gap analysis complete"
    );

    GapAnalysisReport {
        overall_score,
        skills_analysis,
        experience_analysis,
        ats_score,
        recommendations,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::recommendations::Priority;
    use crate::analysis::skills::SkillStatus;
    use crate::models::resume::{
        ContactInfo, ExperienceEntry, ResponsibilityBullet, SkillRecord,
    };

    const JOB_DESCRIPTION: &str = r#"
        Backend Engineer — Payments Platform
        Design and operate Kubernetes services written in Rust and Python.
        Own PostgreSQL schemas and Kafka pipelines. Kubernetes experience required.
        Experience with React dashboards is a plus.
    "#;

    fn bullet(text: &str) -> ResponsibilityBullet {
        ResponsibilityBullet {
            description: text.to_string(),
            tags: vec![],
        }
    }

    fn master_resume() -> Resume {
        Resume {
            contact: ContactInfo {
                name: Some("Sam Rivera".to_string()),
                email: Some("sam@example.com".to_string()),
                phone: Some("+1 555 0100".to_string()),
                ..Default::default()
            },
            summary: Some(
                "Backend engineer focused on payments infrastructure and Kubernetes platforms."
                    .to_string(),
            ),
            skills: ["Rust", "Python", "PostgreSQL", "Kubernetes", "Angular", "Docker"]
                .iter()
                .map(|s| SkillRecord::new(*s))
                .collect(),
            experience: vec![ExperienceEntry {
                role: "Senior Engineer".to_string(),
                company: "Ledgerly".to_string(),
                start: Some("2021-03".to_string()),
                end: None,
                responsibilities: vec![
                    bullet("Led migration of 12 microservices to Kubernetes, reducing latency by 40% and saving $200K annually"),
                    bullet("Led a team."),
                    bullet("Built Rust payment services processing 3 million transactions daily, improving throughput by 25%"),
                ],
            }],
            ..Default::default()
        }
    }

    fn tailored_resume() -> Resume {
        let mut tailored = master_resume();
        tailored
            .skills
            .retain(|s| ["Rust", "Kubernetes", "PostgreSQL"].contains(&s.name.as_str()));
        tailored
    }

    #[test]
    fn test_overall_weights_sum_to_one() {
        let w = ScoreWeights::default();
        let sum = w.skills_match + w.bullet_quality + w.ats + w.experience_present;
        assert!((sum - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_overall_score_formula() {
        let w = ScoreWeights::default();
        // 0.35*100 + 0.30*50 + 0.20*40 + 0.15*100 = 35 + 15 + 8 + 15 = 73
        assert_eq!(compute_overall_score(100, 50, 40, true, &w), 73);
        assert_eq!(compute_overall_score(100, 100, 100, true, &w), 100);
        assert_eq!(compute_overall_score(0, 0, 0, false, &w), 0);
    }

    #[test]
    fn test_overall_score_clamped() {
        let w = ScoreWeights {
            skills_match: 2.0,
            bullet_quality: 0.0,
            ats: 0.0,
            experience_present: 0.0,
        };
        assert_eq!(compute_overall_score(100, 0, 0, false, &w), 100);
    }

    #[test]
    fn test_end_to_end_report() {
        let report = analyze_gaps(&master_resume(), &tailored_resume(), JOB_DESCRIPTION);

        let status = |name: &str| {
            report
                .skills_analysis
                .required_skills
                .iter()
                .find(|m| m.name == name)
                .map(|m| m.status)
        };
        assert_eq!(status("Rust"), Some(SkillStatus::Matched));
        assert_eq!(status("Kubernetes"), Some(SkillStatus::Matched));
        assert_eq!(status("Python"), Some(SkillStatus::Partial));
        assert_eq!(status("React"), Some(SkillStatus::Partial), "Angular is transferable");

        assert_eq!(report.experience_analysis.total_bullets, 3);
        assert_eq!(report.experience_analysis.weak_bullets.len(), 1);
        assert_eq!(report.experience_analysis.bullet_quality_score, 67);

        assert!(report.overall_score <= 100);
        assert!(!report.recommendations.is_empty());
        let first = &report.recommendations[0];
        assert!(report
            .recommendations
            .iter()
            .all(|r| r.priority >= first.priority));
    }

    #[test]
    fn test_idempotent() {
        let master = master_resume();
        let tailored = tailored_resume();
        let a = analyze_gaps(&master, &tailored, JOB_DESCRIPTION);
        let b = analyze_gaps(&master, &tailored, JOB_DESCRIPTION);
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_inputs_degrade_gracefully() {
        let report = analyze_gaps(&Resume::default(), &Resume::default(), "");
        assert_eq!(report.skills_analysis.match_percentage, 100);
        assert_eq!(report.experience_analysis.bullet_quality_score, 0);
        assert_eq!(report.ats_score.score, 0);
        // 0.35 * 100 only
        assert_eq!(report.overall_score, 35);
        assert!(report
            .recommendations
            .iter()
            .all(|r| r.priority == Priority::Low));
    }

    #[test]
    fn test_trait_delegates_to_analyze_gaps() {
        let analyzer = HeuristicGapAnalyzer;
        let master = master_resume();
        let tailored = tailored_resume();
        assert_eq!(analyzer.backend(), "heuristic");
        assert_eq!(
            analyzer.analyze(&master, &tailored, JOB_DESCRIPTION),
            analyze_gaps(&master, &tailored, JOB_DESCRIPTION)
        );
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let report = analyze_gaps(&master_resume(), &tailored_resume(), JOB_DESCRIPTION);
        let value = serde_json::to_value(&report).unwrap();
        assert!(value.get("overallScore").is_some());
        assert!(value["skillsAnalysis"].get("matchPercentage").is_some());
        assert!(value["experienceAnalysis"].get("bulletQualityScore").is_some());
        assert!(value["atsScore"].get("keywordDensity").is_some());
    }
}
