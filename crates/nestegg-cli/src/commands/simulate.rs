//! Full simulation command

use std::path::Path;

use anyhow::Result;
use tracing::warn;

use nestegg_core::advisor::{AdvisorBackend, AdvisorClient};
use nestegg_core::models::{EmploymentType, SimulationInput, SimulationRecord};
use nestegg_core::planner;

use super::{open_db, require_non_negative};

#[allow(clippy::too_many_arguments)]
pub async fn cmd_simulate(
    db_path: &Path,
    expense: f64,
    employment: &str,
    dependents: u32,
    current: f64,
    goal: f64,
    horizon: f64,
    contribution: f64,
    rate: f64,
    advice: bool,
    no_save: bool,
    no_encrypt: bool,
) -> Result<()> {
    require_non_negative("--expense", expense)?;
    require_non_negative("--current", current)?;
    require_non_negative("--goal", goal)?;
    require_non_negative("--horizon", horizon)?;
    require_non_negative("--contribution", contribution)?;
    require_non_negative("--rate", rate)?;

    let input = SimulationInput {
        monthly_expense: expense,
        employment: EmploymentType::from_label(employment),
        dependents,
        current_value: current,
        goal_amount: goal,
        horizon_years: horizon,
        monthly_contribution: contribution,
        annual_return_pct: rate,
    };

    let outcome = planner::simulate(&input);

    println!();
    println!("💰 Simulation Results");
    println!("   ─────────────────────────────────────────────");
    println!("   Emergency reserve target:    {:>12.2}", outcome.reserve_target);
    println!(
        "   Required monthly contribution: {:>10.2}",
        outcome.required_contribution
    );
    if outcome.years_to_goal >= 83.0 {
        println!("   Years to goal (current pace):  ⚠️  not reachable in a practical horizon");
    } else {
        println!(
            "   Years to goal (current pace):  {:>10.1}",
            outcome.years_to_goal
        );
    }

    if input.goal_amount > 0.0 {
        let progress = (input.current_value / input.goal_amount).min(1.0);
        println!();
        println!("   Goal progress: {}", progress_bar(progress, 30));
    }
    println!();

    // Persistence and advice are best-effort: a failure in either still
    // leaves the numbers above on screen.
    let mut saved: Option<SimulationRecord> = None;
    if !no_save {
        match open_db(db_path, no_encrypt) {
            Ok(db) => match db.insert_simulation(&input, &outcome) {
                Ok(id) => {
                    saved = db.get_simulation(id)?;
                    println!("   Saved as simulation #{} (nestegg history show {})", id, id);
                }
                Err(e) => warn!(error = %e, "Failed to save simulation"),
            },
            Err(e) => warn!(error = %e, "Failed to open database; simulation not saved"),
        }
    }

    if advice {
        match AdvisorClient::from_env() {
            Some(client) => {
                let record = match saved {
                    Some(record) => record,
                    // Unsaved runs still get advice; fabricate a transient record
                    None => SimulationRecord {
                        id: 0,
                        created_at: chrono::Utc::now(),
                        monthly_expense: input.monthly_expense,
                        employment: input.employment,
                        dependents: input.dependents,
                        current_value: input.current_value,
                        goal_amount: input.goal_amount,
                        horizon_years: input.horizon_years,
                        monthly_contribution: input.monthly_contribution,
                        annual_return_pct: input.annual_return_pct,
                        reserve_target: outcome.reserve_target,
                        required_contribution: outcome.required_contribution,
                        years_to_goal: outcome.years_to_goal,
                        advice: None,
                    },
                };

                match client.advise(&record).await {
                    Ok(text) => {
                        println!();
                        println!("🤖 Advice ({})", client.model());
                        for line in textwrap(&text, 72) {
                            println!("   {}", line);
                        }
                        if record.id > 0 {
                            if let Ok(db) = open_db(db_path, no_encrypt) {
                                if let Err(e) = db.set_simulation_advice(record.id, &text) {
                                    warn!(error = %e, "Failed to store advice");
                                }
                            }
                        }
                    }
                    Err(e) => {
                        println!();
                        println!("⚠️  Advisor request failed: {}", e);
                    }
                }
            }
            None => {
                println!();
                println!("ℹ️  No advisor configured (set OLLAMA_HOST to enable advice)");
            }
        }
    }

    Ok(())
}

/// Simple text progress bar, e.g. "[██████────────] 42%"
fn progress_bar(fraction: f64, width: usize) -> String {
    let filled = (fraction * width as f64).round() as usize;
    let filled = filled.min(width);
    format!(
        "[{}{}] {:.0}%",
        "█".repeat(filled),
        "─".repeat(width - filled),
        fraction * 100.0
    )
}

/// Greedy word wrap for terminal output
fn textwrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.len() + word.len() + 1 > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
