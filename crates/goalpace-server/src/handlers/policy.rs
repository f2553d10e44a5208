//! Health and policy handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;
use goalpace_core::OptimizerConfig;

/// Response for the health check
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /api/health - Liveness check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /api/policy - Effective optimizer policy
pub async fn get_policy(State(state): State<Arc<AppState>>) -> Json<OptimizerConfig> {
    Json(state.optimizer.config().clone())
}
