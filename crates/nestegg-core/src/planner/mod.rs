//! Planner engine - the financial calculation core
//!
//! Pure, deterministic functions over non-negative scalars:
//!
//! - **Reserve sizing** - ideal emergency-fund target
//! - **Sinking fund** - monthly contribution required to reach a goal
//! - **Time to goal** - years until a goal is reached at the current pace
//! - **Projection** - accumulated value tables across rates and horizons
//!
//! Nothing here touches the database, the advisor, or any other state;
//! every result is fully determined by the explicit arguments. Callers
//! may invoke these from any number of threads.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use nestegg_core::planner;
//!
//! let outcome = planner::simulate(&input);
//! println!("reserve: {:.2}", outcome.reserve_target);
//! ```

pub mod projection;
pub mod reserve;
pub mod sinking_fund;
pub mod time_to_goal;
pub mod types;

pub use projection::{projection_closed_form, projection_table};
pub use reserve::{reserve_target, DEPENDENT_BUFFER};
pub use sinking_fund::required_contribution;
pub use time_to_goal::{years_to_goal, years_to_goal_with_ceiling, DEFAULT_MAX_MONTHS};
pub use types::{
    DepositTiming, ProjectionCell, ProjectionPoint, ProjectionRow, ProjectionTable,
    SimulationOutcome,
};

use crate::models::SimulationInput;

/// Evaluate the three headline numbers for one set of inputs.
///
/// Both the CLI and the server go through this so every surface computes
/// identically.
pub fn simulate(input: &SimulationInput) -> SimulationOutcome {
    SimulationOutcome {
        reserve_target: reserve_target(
            input.monthly_expense,
            input.employment,
            input.dependents,
        ),
        required_contribution: required_contribution(
            input.goal_amount,
            input.horizon_years,
            input.annual_return_pct,
        ),
        years_to_goal: years_to_goal(
            input.current_value,
            input.monthly_contribution,
            input.annual_return_pct,
            input.goal_amount,
        ),
    }
}

/// Monthly rate as a fraction, from an annual percentage.
pub(crate) fn monthly_rate(annual_rate_pct: f64) -> f64 {
    annual_rate_pct / 12.0 / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmploymentType;

    fn sample_input() -> SimulationInput {
        SimulationInput {
            monthly_expense: 3000.0,
            employment: EmploymentType::Salaried,
            dependents: 1,
            current_value: 20000.0,
            goal_amount: 100000.0,
            horizon_years: 10.0,
            monthly_contribution: 500.0,
            annual_return_pct: 8.0,
        }
    }

    #[test]
    fn test_simulate_combines_all_three() {
        let input = sample_input();
        let outcome = simulate(&input);

        assert_eq!(outcome.reserve_target, 3000.0 * 6.0 + 1000.0);
        assert_eq!(
            outcome.required_contribution,
            required_contribution(100000.0, 10.0, 8.0)
        );
        assert_eq!(
            outcome.years_to_goal,
            years_to_goal(20000.0, 500.0, 8.0, 100000.0)
        );
    }

    #[test]
    fn test_simulate_is_deterministic() {
        let input = sample_input();
        let a = simulate(&input);
        let b = simulate(&input);
        assert_eq!(a.reserve_target.to_bits(), b.reserve_target.to_bits());
        assert_eq!(
            a.required_contribution.to_bits(),
            b.required_contribution.to_bits()
        );
        assert_eq!(a.years_to_goal.to_bits(), b.years_to_goal.to_bits());
    }
}
