use std::sync::Arc;

use crate::config::Config;
use crate::estimator::predict::SalaryEstimator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable estimation backend. Default: HeuristicEstimator.
    pub estimator: Arc<dyn SalaryEstimator>,
}
