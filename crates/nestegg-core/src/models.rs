//! Domain models for nestegg

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Employment situation, used to size the emergency reserve.
///
/// Salaried workers get a 6-month reserve target; everyone else
/// (freelancers, business owners, gig workers) gets 12 months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    Salaried,
    SelfEmployed,
}

impl EmploymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Salaried => "salaried",
            Self::SelfEmployed => "self_employed",
        }
    }

    /// Months of expenses the reserve should cover.
    pub fn reserve_months(&self) -> u32 {
        match self {
            Self::Salaried => 6,
            Self::SelfEmployed => 12,
        }
    }

    /// Parse a user-supplied label. Total: anything that doesn't read as
    /// salaried employment is treated as self-employed (the conservative
    /// 12-month reserve).
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "salaried" | "salary" | "clt" | "employee" | "w2" => Self::Salaried,
            _ => Self::SelfEmployed,
        }
    }
}

impl std::str::FromStr for EmploymentType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}

impl std::fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One complete set of planner inputs.
///
/// Owned by the caller and passed by value into the planner; the core
/// never holds form state. All monetary fields are non-negative by
/// contract — surfaces validate before constructing this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationInput {
    /// Total monthly expenses (rent, food, transport, ...)
    pub monthly_expense: f64,
    pub employment: EmploymentType,
    /// People financially dependent on the user
    pub dependents: u32,
    /// Amount already invested toward the goal
    pub current_value: f64,
    /// Target amount to accumulate
    pub goal_amount: f64,
    /// Deadline for the goal, in years (may be fractional)
    pub horizon_years: f64,
    /// What the user currently invests per month
    pub monthly_contribution: f64,
    /// Expected annual return, as a percentage (7.5 means 7.5%)
    pub annual_return_pct: f64,
}

/// A persisted simulation: inputs, computed outputs, and optional advice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRecord {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub monthly_expense: f64,
    pub employment: EmploymentType,
    pub dependents: u32,
    pub current_value: f64,
    pub goal_amount: f64,
    pub horizon_years: f64,
    pub monthly_contribution: f64,
    pub annual_return_pct: f64,
    pub reserve_target: f64,
    pub required_contribution: f64,
    pub years_to_goal: f64,
    /// Free-text advice from the advisor backend, if requested
    pub advice: Option<String>,
}

impl SimulationRecord {
    /// The input portion of this record, for re-running the planner.
    pub fn input(&self) -> SimulationInput {
        SimulationInput {
            monthly_expense: self.monthly_expense,
            employment: self.employment,
            dependents: self.dependents,
            current_value: self.current_value,
            goal_amount: self.goal_amount,
            horizon_years: self.horizon_years,
            monthly_contribution: self.monthly_contribution,
            annual_return_pct: self.annual_return_pct,
        }
    }
}
