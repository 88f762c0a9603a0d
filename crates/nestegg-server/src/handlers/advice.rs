//! Advice handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use tracing::warn;

use crate::{AppError, AppState};
use nestegg_core::advisor::AdvisorBackend;

/// Response carrying generated advice
#[derive(Debug, Serialize)]
pub struct AdviceResponse {
    pub id: i64,
    pub advice: String,
    pub model: String,
}

/// POST /api/simulations/:id/advice - request free-text advice from the
/// configured advisor backend and store it on the simulation
///
/// Advisor failures come back as 503 without touching the stored record;
/// the computed numbers are never lost to a model outage.
pub async fn generate_advice(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<AdviceResponse>, AppError> {
    let record = state
        .db
        .get_simulation(id)?
        .ok_or_else(|| AppError::not_found("Simulation not found"))?;

    let advisor = state
        .advisor
        .as_ref()
        .ok_or_else(|| AppError::service_unavailable("No advisor backend configured"))?;

    let advice = advisor.advise(&record).await.map_err(|e| {
        warn!(simulation = id, error = %e, "Advisor request failed");
        AppError::service_unavailable("Advisor backend did not return advice")
    })?;

    state.db.set_simulation_advice(id, &advice)?;

    Ok(Json(AdviceResponse {
        id,
        advice,
        model: advisor.model().to_string(),
    }))
}
