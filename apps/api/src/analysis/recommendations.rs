//! Turns the skill, experience and ATS analyses into a prioritized action list.

use serde::{Deserialize, Serialize};

use crate::analysis::ats::{AtsScore, DensityStatus};
use crate::analysis::experience::ExperienceAnalysis;
use crate::analysis::skills::{SkillStatus, SkillsAnalysis};

/// Weak bullets beyond this many are not turned into recommendations.
const MAX_BULLET_RECOMMENDATIONS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationType {
    Skill,
    Experience,
    Keyword,
    Formatting,
}

/// Declaration order is sort order: critical first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationType,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    /// `false` when acting on it needs more than editing the resume.
    pub actionable: bool,
}

pub fn generate_recommendations(
    skills: &SkillsAnalysis,
    experience: &ExperienceAnalysis,
    ats: &AtsScore,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    for skill in &skills.required_skills {
        match skill.status {
            SkillStatus::Missing => recommendations.push(Recommendation {
                kind: RecommendationType::Skill,
                priority: Priority::Critical,
                title: format!("Missing skill: {}", skill.name),
                description: format!(
                    "The job calls for {} and it does not appear in your master resume. \
                     Consider gaining experience with it or addressing it in your cover letter.",
                    skill.name
                ),
                actionable: false,
            }),
            SkillStatus::Partial => recommendations.push(Recommendation {
                kind: RecommendationType::Skill,
                priority: Priority::High,
                title: format!("Strengthen skill: {}", skill.name),
                description: partial_skill_description(
                    &skill.name,
                    skill.in_master,
                    &skill.alternatives,
                ),
                actionable: true,
            }),
            SkillStatus::Matched => {}
        }
    }

    for bullet in experience.weak_bullets.iter().take(MAX_BULLET_RECOMMENDATIONS) {
        let reasons = if bullet.issues.is_empty() {
            "it scores below the quality bar".to_string()
        } else {
            bullet.issues.join("; ").to_lowercase()
        };
        recommendations.push(Recommendation {
            kind: RecommendationType::Experience,
            priority: Priority::High,
            title: "Improve weak bullet point".to_string(),
            description: format!(
                "\"{}\" scored {}/100: {}.",
                bullet.description, bullet.score, reasons
            ),
            actionable: true,
        });
    }

    if !experience.missing_keywords.is_empty() {
        recommendations.push(Recommendation {
            kind: RecommendationType::Keyword,
            priority: Priority::Medium,
            title: "Add missing keywords to experience".to_string(),
            description: format!(
                "None of your bullets mention: {}.",
                experience.missing_keywords.join(", ")
            ),
            actionable: true,
        });
    }

    let underused: Vec<&str> = ats
        .keyword_density
        .iter()
        .filter(|k| k.status == DensityStatus::Low)
        .map(|k| k.keyword.as_str())
        .collect();
    if !underused.is_empty() {
        recommendations.push(Recommendation {
            kind: RecommendationType::Keyword,
            priority: Priority::Medium,
            title: "Increase keyword usage for ATS".to_string(),
            description: format!(
                "These job keywords appear less often than applicant tracking systems expect: {}.",
                underused.join(", ")
            ),
            actionable: true,
        });
    }

    for issue in &ats.formatting_issues {
        recommendations.push(Recommendation {
            kind: RecommendationType::Formatting,
            priority: Priority::Low,
            title: "Fix formatting issue".to_string(),
            description: issue.clone(),
            actionable: true,
        });
    }

    // stable: insertion order is kept within a priority
    recommendations.sort_by_key(|r| r.priority);
    recommendations
}

fn partial_skill_description(name: &str, in_master: bool, alternatives: &[String]) -> String {
    if in_master {
        format!("{name} is in your master resume but not in this tailored version. Add it back.")
    } else {
        format!(
            "You don't list {name}, but your experience with {} is transferable. Highlight it.",
            alternatives.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::ats::KeywordDensity;
    use crate::analysis::bullet::analyze_bullet;
    use crate::analysis::skills::SkillMatch;

    fn skill(name: &str, status: SkillStatus, in_master: bool, alternatives: &[&str]) -> SkillMatch {
        SkillMatch {
            name: name.to_string(),
            status,
            in_master,
            in_tailored: status == SkillStatus::Matched,
            alternatives: alternatives.iter().map(|a| a.to_string()).collect(),
        }
    }

    fn skills_analysis(required: Vec<SkillMatch>) -> SkillsAnalysis {
        SkillsAnalysis {
            required_skills: required,
            matched_skills: vec![],
            missing_skills: vec![],
            match_percentage: 0,
        }
    }

    fn empty_experience() -> ExperienceAnalysis {
        ExperienceAnalysis {
            total_bullets: 0,
            relevant_bullets: 0,
            weak_bullets: vec![],
            missing_keywords: vec![],
            bullet_quality_score: 0,
        }
    }

    fn empty_ats() -> AtsScore {
        AtsScore {
            score: 100,
            keyword_density: vec![],
            formatting_issues: vec![],
            suggestions: vec![],
        }
    }

    #[test]
    fn test_nothing_to_recommend() {
        let recs = generate_recommendations(
            &skills_analysis(vec![skill("Rust", SkillStatus::Matched, true, &[])]),
            &empty_experience(),
            &empty_ats(),
        );
        assert!(recs.is_empty());
    }

    #[test]
    fn test_sorted_by_priority() {
        let mut ats = empty_ats();
        ats.formatting_issues.push("Missing phone number".to_string());
        ats.keyword_density.push(KeywordDensity {
            keyword: "kafka".to_string(),
            count: 0,
            optimal: 3,
            status: DensityStatus::Low,
        });
        let mut experience = empty_experience();
        experience.missing_keywords.push("kafka".to_string());
        experience.weak_bullets.push(analyze_bullet("Led a team."));

        let recs = generate_recommendations(
            &skills_analysis(vec![
                skill("Go", SkillStatus::Partial, true, &[]),
                skill("Kafka", SkillStatus::Missing, false, &[]),
            ]),
            &experience,
            &ats,
        );

        let priorities: Vec<Priority> = recs.iter().map(|r| r.priority).collect();
        assert_eq!(
            priorities,
            vec![
                Priority::Critical,
                Priority::High,
                Priority::High,
                Priority::Medium,
                Priority::Medium,
                Priority::Low,
            ]
        );
        assert_eq!(recs[0].title, "Missing skill: Kafka");
        assert!(!recs[0].actionable);
        // stable within a priority: skill before bullet
        assert_eq!(recs[1].kind, RecommendationType::Skill);
        assert_eq!(recs[2].kind, RecommendationType::Experience);
    }

    #[test]
    fn test_weak_bullet_recommendations_capped_at_five() {
        let mut experience = empty_experience();
        for _ in 0..8 {
            experience.weak_bullets.push(analyze_bullet("Did stuff"));
        }
        let recs = generate_recommendations(&skills_analysis(vec![]), &experience, &empty_ats());
        let bullet_recs = recs
            .iter()
            .filter(|r| r.kind == RecommendationType::Experience)
            .count();
        assert_eq!(bullet_recs, 5);
    }

    #[test]
    fn test_missing_keywords_aggregated_once() {
        let mut experience = empty_experience();
        experience.missing_keywords = vec!["kafka".to_string(), "terraform".to_string()];
        let recs = generate_recommendations(&skills_analysis(vec![]), &experience, &empty_ats());
        assert_eq!(recs.len(), 1);
        assert!(recs[0].description.contains("kafka, terraform"));
    }

    #[test]
    fn test_partial_with_alternative_mentions_it() {
        let recs = generate_recommendations(
            &skills_analysis(vec![skill("React", SkillStatus::Partial, false, &["Angular"])]),
            &empty_experience(),
            &empty_ats(),
        );
        assert!(recs[0].description.contains("Angular"));
        assert_eq!(recs[0].priority, Priority::High);
    }

    #[test]
    fn test_type_field_serializes_as_type() {
        let rec = Recommendation {
            kind: RecommendationType::Formatting,
            priority: Priority::Low,
            title: "t".to_string(),
            description: "d".to_string(),
            actionable: true,
        };
        let value = serde_json::to_value(&rec).unwrap();
        assert_eq!(value["type"], "formatting");
        assert_eq!(value["priority"], "low");
    }
}
