use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/dashboard", get(handlers::dashboard))
        .route("/dashboard/reset", post(handlers::reset))
        .route("/report", get(handlers::report))
        .route("/upload", get(handlers::upload_page).post(handlers::upload))
        .route("/verify", get(handlers::verify))
        .route("/healthz", get(handlers::health))
        .with_state(state)
}
