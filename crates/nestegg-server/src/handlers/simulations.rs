//! Simulation handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{AppError, AppState, SuccessResponse, MAX_PAGE_LIMIT};
use nestegg_core::error::Error as CoreError;
use nestegg_core::models::{EmploymentType, SimulationInput, SimulationRecord};
use nestegg_core::planner::{self, SimulationOutcome};

/// Request body for creating a simulation
#[derive(Debug, Deserialize)]
pub struct CreateSimulationRequest {
    pub monthly_expense: f64,
    /// Employment label; anything not recognized as salaried counts as
    /// self-employed
    pub employment: String,
    #[serde(default)]
    pub dependents: u32,
    #[serde(default)]
    pub current_value: f64,
    pub goal_amount: f64,
    pub horizon_years: f64,
    #[serde(default)]
    pub monthly_contribution: f64,
    #[serde(default)]
    pub annual_return_pct: f64,
    /// Store the result in history (default true)
    #[serde(default = "default_save")]
    pub save: bool,
}

fn default_save() -> bool {
    true
}

/// Response for a freshly computed simulation
#[derive(Debug, Serialize)]
pub struct SimulationResponse {
    /// Row id when the simulation was saved
    pub id: Option<i64>,
    pub input: SimulationInput,
    pub outcome: SimulationOutcome,
}

/// Query parameters for listing simulations
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    50
}

/// Reject negative or non-finite scalars with a 400
fn validate_non_negative(name: &str, value: f64) -> Result<(), AppError> {
    if value < 0.0 || !value.is_finite() {
        return Err(AppError::bad_request(&format!(
            "{} must be a non-negative number",
            name
        )));
    }
    Ok(())
}

/// POST /api/simulations - compute reserve, required contribution and
/// time to goal; optionally persist the result
pub async fn create_simulation(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateSimulationRequest>,
) -> Result<Json<SimulationResponse>, AppError> {
    validate_non_negative("monthly_expense", request.monthly_expense)?;
    validate_non_negative("current_value", request.current_value)?;
    validate_non_negative("goal_amount", request.goal_amount)?;
    validate_non_negative("horizon_years", request.horizon_years)?;
    validate_non_negative("monthly_contribution", request.monthly_contribution)?;
    validate_non_negative("annual_return_pct", request.annual_return_pct)?;

    let input = SimulationInput {
        monthly_expense: request.monthly_expense,
        employment: EmploymentType::from_label(&request.employment),
        dependents: request.dependents,
        current_value: request.current_value,
        goal_amount: request.goal_amount,
        horizon_years: request.horizon_years,
        monthly_contribution: request.monthly_contribution,
        annual_return_pct: request.annual_return_pct,
    };

    let outcome = planner::simulate(&input);

    let id = if request.save {
        Some(state.db.insert_simulation(&input, &outcome)?)
    } else {
        None
    };

    Ok(Json(SimulationResponse { id, input, outcome }))
}

/// GET /api/simulations - list stored simulations, newest first
pub async fn list_simulations(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListQuery>,
) -> Result<Json<Vec<SimulationRecord>>, AppError> {
    if params.limit < 1 || params.limit > MAX_PAGE_LIMIT {
        return Err(AppError::bad_request(&format!(
            "limit must be between 1 and {}",
            MAX_PAGE_LIMIT
        )));
    }

    let records = state.db.list_simulations(params.limit)?;
    Ok(Json(records))
}

/// GET /api/simulations/:id - get a stored simulation
pub async fn get_simulation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<SimulationRecord>, AppError> {
    let record = state
        .db
        .get_simulation(id)?
        .ok_or_else(|| AppError::not_found("Simulation not found"))?;

    Ok(Json(record))
}

/// DELETE /api/simulations/:id - delete a stored simulation
pub async fn delete_simulation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<SuccessResponse>, AppError> {
    match state.db.delete_simulation(id) {
        Ok(()) => Ok(Json(SuccessResponse { success: true })),
        Err(CoreError::NotFound(_)) => Err(AppError::not_found("Simulation not found")),
        Err(e) => Err(e.into()),
    }
}
