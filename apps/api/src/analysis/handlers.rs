//! Axum route handlers for the Analysis API.

use std::sync::Arc;

use anyhow::Context;
use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::analysis::bullet::{analyze_bullets, BulletAnalysis};
use crate::analysis::extractor::{
    extract_keywords, extract_skills, group_skills_by_category, SkillGroup,
};
use crate::analysis::gap::GapAnalysisReport;
use crate::errors::AppError;
use crate::models::resume::Resume;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GapAnalysisRequest {
    pub master_resume: Resume,
    pub tailored_resume: Resume,
    pub job_description: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GapAnalysisResponse {
    pub analysis_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub report: GapAnalysisReport,
}

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractResponse {
    pub keywords: Vec<String>,
    pub skills: Vec<String>,
    pub skill_groups: Vec<SkillGroup>,
}

#[derive(Debug, Deserialize)]
pub struct BulletsRequest {
    pub bullets: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulletsResponse {
    pub results: Vec<BulletAnalysis>,
    pub weak_count: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/gap-analysis
///
/// Full report for a tailored resume against a job description. The report
/// is recomputed on every call; only the envelope id and timestamp differ.
pub async fn handle_gap_analysis(
    State(state): State<AppState>,
    Json(request): Json<GapAnalysisRequest>,
) -> Result<Json<GapAnalysisResponse>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "jobDescription cannot be empty".to_string(),
        ));
    }

    let analyzer = Arc::clone(&state.analyzer);
    let backend = analyzer.backend();
    let report = tokio::task::spawn_blocking(move || {
        analyzer.analyze(
            &request.master_resume,
            &request.tailored_resume,
            &request.job_description,
        )
    })
    .await
    .context("gap analysis task failed")?;

    let analysis_id = Uuid::new_v4();
    info!(
        "Gap analysis {analysis_id} ({backend}): overall score {}, {} recommendations",
        report.overall_score,
        report.recommendations.len()
    );

    Ok(Json(GapAnalysisResponse {
        analysis_id,
        generated_at: Utc::now(),
        report,
    }))
}

/// POST /api/v1/keywords
///
/// Previews keyword and skill extraction for a job description.
pub async fn handle_extract(
    Json(request): Json<ExtractRequest>,
) -> Result<Json<ExtractResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let response = tokio::task::spawn_blocking(move || {
        let keywords = extract_keywords(&request.text);
        let skills = extract_skills(&request.text);
        let skill_groups = group_skills_by_category(&skills);
        ExtractResponse {
            keywords,
            skills,
            skill_groups,
        }
    })
    .await
    .context("keyword extraction task failed")?;

    Ok(Json(response))
}

/// POST /api/v1/bullets/analyze
///
/// Scores a batch of bullets against the quality rubric.
pub async fn handle_analyze_bullets(
    Json(request): Json<BulletsRequest>,
) -> Result<Json<BulletsResponse>, AppError> {
    if request.bullets.is_empty() {
        return Err(AppError::Validation("bullets cannot be empty".to_string()));
    }

    let results = tokio::task::spawn_blocking(move || analyze_bullets(&request.bullets))
        .await
        .context("bullet analysis task failed")?;
    let weak_count = results.iter().filter(|r| r.is_weak()).count();

    Ok(Json(BulletsResponse {
        results,
        weak_count,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::gap::HeuristicGapAnalyzer;
    use crate::config::Config;

    fn test_state() -> AppState {
        AppState {
            config: Config::default(),
            analyzer: Arc::new(HeuristicGapAnalyzer),
        }
    }

    #[tokio::test]
    async fn test_gap_analysis_rejects_blank_job_description() {
        let request = GapAnalysisRequest {
            master_resume: Resume::default(),
            tailored_resume: Resume::default(),
            job_description: "  \n ".to_string(),
        };
        let err = handle_gap_analysis(State(test_state()), Json(request))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_gap_analysis_returns_report() {
        let request = GapAnalysisRequest {
            master_resume: Resume::default(),
            tailored_resume: Resume::default(),
            job_description: "Senior Rust engineer with Kubernetes".to_string(),
        };
        let Json(response) = handle_gap_analysis(State(test_state()), Json(request))
            .await
            .unwrap();
        assert!(response.report.overall_score <= 100);
        assert_eq!(response.report.skills_analysis.missing_skills, vec!["Rust", "Kubernetes"]);
    }

    #[tokio::test]
    async fn test_extract_returns_keywords_and_skills() {
        let request = ExtractRequest {
            text: "Kubernetes Kubernetes and React".to_string(),
        };
        let Json(response) = handle_extract(Json(request)).await.unwrap();
        assert_eq!(response.keywords[0], "kubernetes");
        assert_eq!(response.skills, vec!["React", "Kubernetes"]);
        assert_eq!(response.skill_groups.len(), 2);
    }

    #[tokio::test]
    async fn test_extract_rejects_blank_text() {
        let err = handle_extract(Json(ExtractRequest {
            text: String::new(),
        }))
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_analyze_bullets_counts_weak() {
        let request = BulletsRequest {
            bullets: vec![
                "Led a team.".to_string(),
                "Led migration of 12 microservices to Kubernetes, reducing latency by 40% and saving $200K annually".to_string(),
            ],
        };
        let Json(response) = handle_analyze_bullets(Json(request)).await.unwrap();
        assert_eq!(response.results.len(), 2);
        assert_eq!(response.weak_count, 1);
    }

    #[tokio::test]
    async fn test_analyze_bullets_keeps_order_with_list_markers() {
        let strong = "Led migration of 12 microservices to Kubernetes, reducing latency by 40% and saving $200K annually";
        let request = BulletsRequest {
            bullets: vec![format!("- {strong}"), format!("• {strong}"), "Did stuff".to_string()],
        };
        let Json(response) = handle_analyze_bullets(Json(request)).await.unwrap();
        let scores: Vec<u32> = response.results.iter().map(|r| r.score).collect();
        assert_eq!(scores[..2], [100, 100]);
        assert_eq!(response.results[2].description, "Did stuff");
        assert_eq!(response.weak_count, 1);
    }

    #[tokio::test]
    async fn test_analyze_bullets_rejects_empty_batch() {
        let err = handle_analyze_bullets(Json(BulletsRequest { bullets: vec![] }))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
