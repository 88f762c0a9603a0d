//! Planner value types
//!
//! Immutable inputs/outputs of the pure calculation functions.

use serde::{Deserialize, Serialize};

/// When a monthly contribution is credited relative to that month's growth.
///
/// The two conventions are NOT interchangeable: for the same inputs,
/// `PeriodStart` deposits earn one extra month of growth each, so the
/// accumulated total is strictly higher at any positive rate. Call sites
/// pick one and stick with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DepositTiming {
    /// Deposit first, then apply the month's growth (annuity-due).
    PeriodStart,
    /// Apply the month's growth, then deposit (ordinary annuity).
    #[default]
    PeriodEnd,
}

impl DepositTiming {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PeriodStart => "period_start",
            Self::PeriodEnd => "period_end",
        }
    }
}

impl std::str::FromStr for DepositTiming {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "period_start" | "start" | "due" => Ok(Self::PeriodStart),
            "period_end" | "end" | "ordinary" => Ok(Self::PeriodEnd),
            _ => Err(format!("Unknown deposit timing: {}", s)),
        }
    }
}

impl std::fmt::Display for DepositTiming {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The three headline numbers computed for one simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Ideal emergency-fund size
    pub reserve_target: f64,
    /// Monthly contribution required to hit the goal by the deadline
    pub required_contribution: f64,
    /// Years until the goal at the current pace, rounded to 1 decimal
    pub years_to_goal: f64,
}

/// One (horizon, accumulated value) point in a projection row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub horizon_years: f64,
    /// Accumulated value, rounded to 2 decimals
    pub value: f64,
}

/// Projection for a single rate across all requested horizons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRow {
    /// Annual rate as a percentage (7.5 means 7.5%)
    pub rate_pct: f64,
    /// Display label for the rate, e.g. "7.5%"
    pub label: String,
    pub points: Vec<ProjectionPoint>,
}

/// Full projection table: one row per requested rate, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionTable {
    pub timing: DepositTiming,
    pub rows: Vec<ProjectionRow>,
}

/// One (rate, horizon) cell, for bar-style display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionCell {
    pub label: String,
    pub horizon_years: f64,
    pub value: f64,
}

impl ProjectionTable {
    /// Flatten to one cell per (rate, horizon) pair, preserving row order.
    pub fn cells(&self) -> Vec<ProjectionCell> {
        self.rows
            .iter()
            .flat_map(|row| {
                row.points.iter().map(|p| ProjectionCell {
                    label: row.label.clone(),
                    horizon_years: p.horizon_years,
                    value: p.value,
                })
            })
            .collect()
    }
}
