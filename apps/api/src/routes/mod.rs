pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::parser::handlers;
use crate::state::AppState;

/// Uploaded resumes are small; 20 MiB leaves headroom for scanned PDFs.
const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/parse", post(handlers::handle_parse))
        .route("/api/v1/score", post(handlers::handle_score))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
