//! Health handler

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::{AppError, AppState};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Number of stored simulations
    pub simulations: i64,
    /// Model name of the configured advisor, if any
    pub advisor: Option<String>,
}

/// GET /api/health - service liveness plus a quick database check
pub async fn health(
    State(state): State<Arc<AppState>>,
) -> Result<Json<HealthResponse>, AppError> {
    let simulations = state.db.count_simulations()?;

    Ok(Json(HealthResponse {
        status: "ok",
        simulations,
        advisor: state.advisor.as_ref().map(|a| {
            use nestegg_core::advisor::AdvisorBackend;
            a.model().to_string()
        }),
    }))
}
