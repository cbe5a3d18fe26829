//! Axum route handlers for the Tailoring API.

use anyhow::Context;
use axum::Json;
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::resume::Resume;
use crate::tailoring::selector::{tailor_resume, TailoringResult};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TailorRequest {
    pub master_resume: Resume,
    pub job_description: String,
    #[serde(default)]
    pub focus_tags: Vec<String>,
}

/// POST /api/v1/tailor
///
/// Produces a tailored resume from the master without an AI call. The result
/// can be passed straight back to `/api/v1/gap-analysis`.
pub async fn handle_tailor(
    Json(request): Json<TailorRequest>,
) -> Result<Json<TailoringResult>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "jobDescription cannot be empty".to_string(),
        ));
    }

    let result = tokio::task::spawn_blocking(move || {
        tailor_resume(
            &request.master_resume,
            &request.job_description,
            &request.focus_tags,
        )
    })
    .await
    .context("tailoring task failed")?;

    info!(
        "Tailored resume: {} skills kept, {} items excluded",
        result.resume.skills.len(),
        result.excluded.len()
    );

    Ok(Json(result))
}
