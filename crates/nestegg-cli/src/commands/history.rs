//! Stored-simulation commands (list, show, delete)

use anyhow::Result;

use nestegg_core::db::Database;

use super::truncate;

pub fn cmd_history_list(db: &Database, limit: i64) -> Result<()> {
    let records = db.list_simulations(limit)?;

    if records.is_empty() {
        println!("No simulations stored yet. Run one with:");
        println!("  nestegg simulate --expense 2500 --goal 100000 --horizon 10 --rate 7");
        return Ok(());
    }

    println!();
    println!("🗂  Simulation History");
    println!("   ────────────────────────────────────────────────────────────────");
    println!(
        "   {:>4}  {:16}  {:>12}  {:>10}  {:>8}  advice",
        "id", "created", "goal", "required", "years"
    );

    for record in &records {
        let years = if record.years_to_goal >= 83.0 {
            "—".to_string()
        } else {
            format!("{:.1}", record.years_to_goal)
        };
        println!(
            "   {:>4}  {:16}  {:>12.2}  {:>10.2}  {:>8}  {}",
            record.id,
            record.created_at.format("%Y-%m-%d %H:%M"),
            record.goal_amount,
            record.required_contribution,
            years,
            record
                .advice
                .as_deref()
                .map(|a| truncate(a, 30))
                .unwrap_or_else(|| "-".to_string()),
        );
    }
    println!();

    Ok(())
}

pub fn cmd_history_show(db: &Database, id: i64, json: bool) -> Result<()> {
    let record = db
        .get_simulation(id)?
        .ok_or_else(|| anyhow::anyhow!("Simulation {} not found", id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    println!();
    println!("📋 Simulation #{}", record.id);
    println!("   Created: {}", record.created_at.format("%Y-%m-%d %H:%M:%S"));
    println!();
    println!("   Inputs");
    println!("     Monthly expenses:       {:>12.2}", record.monthly_expense);
    println!("     Employment:             {:>12}", record.employment.as_str());
    println!("     Dependents:             {:>12}", record.dependents);
    println!("     Current value:          {:>12.2}", record.current_value);
    println!("     Goal amount:            {:>12.2}", record.goal_amount);
    println!("     Horizon (years):        {:>12}", record.horizon_years);
    println!("     Monthly contribution:   {:>12.2}", record.monthly_contribution);
    println!("     Annual return (%):      {:>12}", record.annual_return_pct);
    println!();
    println!("   Results");
    println!("     Reserve target:         {:>12.2}", record.reserve_target);
    println!("     Required contribution:  {:>12.2}", record.required_contribution);
    println!("     Years to goal:          {:>12.1}", record.years_to_goal);

    if let Some(advice) = &record.advice {
        println!();
        println!("   Advice");
        println!("     {}", advice);
    }
    println!();

    Ok(())
}

pub fn cmd_history_delete(db: &Database, id: i64) -> Result<()> {
    db.delete_simulation(id)?;
    println!("✅ Deleted simulation #{}", id);
    Ok(())
}
