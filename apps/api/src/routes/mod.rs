pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;
use crate::tailoring::handlers::handle_tailor;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_body_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/api/v1/gap-analysis", post(handlers::handle_gap_analysis))
        .route("/api/v1/keywords", post(handlers::handle_extract))
        .route(
            "/api/v1/bullets/analyze",
            post(handlers::handle_analyze_bullets),
        )
        // Tailoring API
        .route("/api/v1/tailor", post(handle_tailor))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
