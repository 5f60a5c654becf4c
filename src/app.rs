use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/challenge/start", post(handlers::start_form))
        .route("/challenge/stop", post(handlers::stop_form))
        .route("/challenge/reset", post(handlers::reset_form))
        .route("/api/challenge", get(handlers::get_challenge))
        .route("/api/challenge/start", post(handlers::start))
        .route("/api/challenge/stop", post(handlers::stop))
        .route("/audio/:file", get(handlers::audio))
        .with_state(state)
}
