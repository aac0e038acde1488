pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::scan::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Resume API
        .route(
            "/api/v1/resume/calculate-ats",
            post(handlers::handle_calculate_ats),
        )
        .route(
            "/api/v1/resume/extract-skills",
            post(handlers::handle_extract_skills),
        )
        .route(
            "/api/v1/resume/analyse-resume",
            post(handlers::handle_analyse_resume),
        )
        .route("/api/v1/resume/scans", get(handlers::handle_list_scans))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
