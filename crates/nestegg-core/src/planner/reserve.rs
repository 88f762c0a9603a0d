//! Emergency reserve sizing

use crate::models::EmploymentType;

/// Fixed buffer added to the reserve per financial dependent, in currency
/// units.
pub const DEPENDENT_BUFFER: f64 = 1000.0;

/// Ideal emergency-fund size: months of expenses plus a per-dependent
/// buffer.
///
/// Salaried employment covers 6 months of expenses, anything else 12
/// (income is assumed less predictable). Inputs are non-negative by
/// contract; validation happens at the boundary.
pub fn reserve_target(monthly_expense: f64, employment: EmploymentType, dependents: u32) -> f64 {
    monthly_expense * f64::from(employment.reserve_months()) + f64::from(dependents) * DEPENDENT_BUFFER
}
