//! Compound-growth projection tables

use super::monthly_rate;
use super::types::{DepositTiming, ProjectionPoint, ProjectionRow, ProjectionTable};

/// Accumulated value of a constant monthly contribution after
/// `horizon_years` at `annual_rate_pct`, for the given deposit timing.
///
/// Closed-form annuity future value. With `i = annual_rate_pct / 12 / 100`
/// and `n = horizon_years * 12`:
///
/// - `PeriodEnd` (ordinary annuity): `c * ((1+i)^n - 1) / i`
/// - `PeriodStart` (annuity-due): the same times `(1 + i)` - every
///   deposit earns one extra month of growth
///
/// Both collapse to `c * n` at zero rate. The result is NOT rounded;
/// [`projection_table`] rounds to 2 decimals for display.
pub fn projection_closed_form(
    monthly_contribution: f64,
    annual_rate_pct: f64,
    horizon_years: f64,
    timing: DepositTiming,
) -> f64 {
    let i = monthly_rate(annual_rate_pct);
    let n = horizon_years * 12.0;

    if i == 0.0 {
        return monthly_contribution * n;
    }

    let ordinary = monthly_contribution * ((1.0 + i).powf(n) - 1.0) / i;
    match timing {
        DepositTiming::PeriodEnd => ordinary,
        DepositTiming::PeriodStart => ordinary * (1.0 + i),
    }
}

/// Build a projection table: one row per rate (input order preserved),
/// one point per horizon, values rounded to 2 decimal places.
///
/// Rates are annual percentages; labels are formed from them ("5%",
/// "7.5%"). A zero contribution yields an all-zero table.
pub fn projection_table(
    monthly_contribution: f64,
    rates_pct: &[f64],
    horizons_years: &[f64],
    timing: DepositTiming,
) -> ProjectionTable {
    let rows = rates_pct
        .iter()
        .map(|&rate_pct| ProjectionRow {
            rate_pct,
            label: format!("{}%", rate_pct),
            points: horizons_years
                .iter()
                .map(|&horizon_years| ProjectionPoint {
                    horizon_years,
                    value: round2(projection_closed_form(
                        monthly_contribution,
                        rate_pct,
                        horizon_years,
                        timing,
                    )),
                })
                .collect(),
        })
        .collect();

    ProjectionTable { timing, rows }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
