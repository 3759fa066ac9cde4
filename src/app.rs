use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/sign", get(handlers::sign).post(handlers::sign))
        .route("/api/calendar", get(handlers::get_calendar))
        .with_state(state)
}
