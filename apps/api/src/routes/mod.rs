pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::estimator::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/salary/estimate", post(handlers::handle_estimate))
        .route("/api/v1/salary/reference", get(handlers::handle_reference))
        .with_state(state)
}
