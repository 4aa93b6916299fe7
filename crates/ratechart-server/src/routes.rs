//! Route definitions.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::config::ServerConfig;
use crate::handlers::{self, AppState};
use crate::service::ChartService;

/// Create the API router.
///
/// # Arguments
/// * `config` - Server configuration; supplies the API version segment
/// * `charts` - The chart generation service
pub fn create_router(config: &ServerConfig, charts: ChartService) -> Router {
    let state = Arc::new(AppState { charts });

    Router::new()
        // Health
        .route("/health", get(handlers::health))
        // Functional API
        .route(&config.chart_path(), get(handlers::random_chart))
        .route(&config.mask_path(), post(handlers::mask))
        .with_state(state)
}
