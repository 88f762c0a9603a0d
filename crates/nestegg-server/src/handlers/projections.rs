//! Projection handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::{AppError, AppState, MAX_SCENARIO_AXIS};
use nestegg_core::planner::{
    projection_table, DepositTiming, ProjectionCell, ProjectionTable,
};

/// Request body for a projection
#[derive(Debug, Deserialize)]
pub struct ProjectionRequest {
    pub monthly_contribution: f64,
    /// Annual rates in percent, one row each (order preserved)
    pub rates_pct: Vec<f64>,
    /// Horizons in years, one column each
    pub horizons_years: Vec<f64>,
    /// Deposit timing; defaults to period_end (grow, then deposit)
    #[serde(default)]
    pub timing: DepositTiming,
    /// Return flattened (rate, horizon) cells instead of rows
    #[serde(default)]
    pub flat: bool,
}

/// Either a full table or its flattened cell view
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ProjectionResponse {
    Table(ProjectionTable),
    Cells(Vec<ProjectionCell>),
}

/// POST /api/projections - accumulated-value table across rates and
/// horizons
pub async fn create_projection(
    State(_state): State<Arc<AppState>>,
    Json(request): Json<ProjectionRequest>,
) -> Result<Json<ProjectionResponse>, AppError> {
    if request.monthly_contribution < 0.0 || !request.monthly_contribution.is_finite() {
        return Err(AppError::bad_request(
            "monthly_contribution must be a non-negative number",
        ));
    }
    if request.rates_pct.is_empty() || request.horizons_years.is_empty() {
        return Err(AppError::bad_request(
            "rates_pct and horizons_years must be non-empty",
        ));
    }
    if request.rates_pct.len() > MAX_SCENARIO_AXIS
        || request.horizons_years.len() > MAX_SCENARIO_AXIS
    {
        return Err(AppError::bad_request(&format!(
            "at most {} rates and horizons per request",
            MAX_SCENARIO_AXIS
        )));
    }
    for &rate in &request.rates_pct {
        if rate < 0.0 || !rate.is_finite() {
            return Err(AppError::bad_request("rates_pct must be non-negative"));
        }
    }
    for &horizon in &request.horizons_years {
        if horizon < 0.0 || !horizon.is_finite() {
            return Err(AppError::bad_request("horizons_years must be non-negative"));
        }
    }

    let table = projection_table(
        request.monthly_contribution,
        &request.rates_pct,
        &request.horizons_years,
        request.timing,
    );

    let response = if request.flat {
        ProjectionResponse::Cells(table.cells())
    } else {
        ProjectionResponse::Table(table)
    };

    Ok(Json(response))
}
