use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/health", get(handlers::health))
        .route("/api/calculate-footprint", post(handlers::calculate_footprint))
        .route("/api/calculate-general", post(handlers::calculate_general))
        .route("/api/ai-situation", post(handlers::ai_situation))
        .route("/api/analyze-receipt", post(handlers::analyze_receipt))
        .route("/api/sector-analysis", post(handlers::sector_analysis))
        .with_state(state)
}
