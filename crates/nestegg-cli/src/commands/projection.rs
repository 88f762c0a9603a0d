//! Projection table command

use anyhow::{Context, Result};

use nestegg_core::planner::{projection_table, DepositTiming};

use super::require_non_negative;

pub fn cmd_projection(
    contribution: f64,
    rates: &[f64],
    horizons: &[f64],
    timing: &str,
    flat: bool,
    json: bool,
) -> Result<()> {
    require_non_negative("--contribution", contribution)?;
    for &rate in rates {
        require_non_negative("--rate", rate)?;
    }
    for &horizon in horizons {
        require_non_negative("--horizon", horizon)?;
    }

    let timing: DepositTiming = timing
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))
        .context("Invalid --timing (use period_start or period_end)")?;

    let table = projection_table(contribution, rates, horizons, timing);

    if json {
        if flat {
            println!("{}", serde_json::to_string_pretty(&table.cells())?);
        } else {
            println!("{}", serde_json::to_string_pretty(&table)?);
        }
        return Ok(());
    }

    println!();
    println!(
        "📈 Projection: {:.2}/month, deposits at {}",
        contribution,
        match timing {
            DepositTiming::PeriodStart => "start of month",
            DepositTiming::PeriodEnd => "end of month",
        }
    );
    println!("   ─────────────────────────────────────────────────────────────");

    if flat {
        for cell in table.cells() {
            println!(
                "   {:>6} over {:>5} years: {:>14.2}",
                cell.label, cell.horizon_years, cell.value
            );
        }
        println!();
        return Ok(());
    }

    // Header: one column per horizon
    print!("   {:>6}", "rate");
    for horizon in horizons {
        print!(" {:>13}", format!("{}y", horizon));
    }
    println!();

    for row in &table.rows {
        print!("   {:>6}", row.label);
        for point in &row.points {
            print!(" {:>13.2}", point.value);
        }
        println!();
    }
    println!();

    Ok(())
}
