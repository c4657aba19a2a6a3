use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::state::AppState;

/// Build the axum router with all LunchVote endpoints.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/v1/health", get(handler::health_handler))
        .route("/v1/menus/today", get(handler::menus_today_handler))
        .route("/v1/votes", post(handler::submit_vote_handler))
        .route("/v1/votes/results", get(handler::vote_results_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
