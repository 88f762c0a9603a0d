//! Required-contribution solver (sinking fund)

use super::monthly_rate;

/// Monthly contribution required to accumulate `goal` within
/// `horizon_years`, assuming contributions compound at
/// `annual_rate_pct / 12 / 100` per month.
///
/// This is the standard future-value-of-annuity inversion:
/// `goal * i / ((1 + i)^n - 1)` with `n = horizon_years * 12`.
/// `n` may be fractional and is not rounded.
///
/// Degenerate cases return a defined value rather than erroring:
/// a zero horizon yields `0.0` (there is no time to contribute, so goal
/// sizing is undefined), and a zero rate falls back to the straight-line
/// `goal / n`.
pub fn required_contribution(goal: f64, horizon_years: f64, annual_rate_pct: f64) -> f64 {
    let i = monthly_rate(annual_rate_pct);
    let n = horizon_years * 12.0;

    if n == 0.0 {
        return 0.0;
    }
    if i == 0.0 {
        return goal / n;
    }
    goal * i / ((1.0 + i).powf(n) - 1.0)
}
