use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};
use tower_http::cors::CorsLayer;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/probe/run", post(handlers::run_probe))
        .route("/api/probe", get(handlers::get_probe))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/add-quote", post(handlers::add_quote))
        .route("/api/settings", post(handlers::update_settings))
        .route("/api/latest-tweet", get(handlers::latest_quote))
        .route("/api/scheduler-status", get(handlers::get_scheduler_status))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
