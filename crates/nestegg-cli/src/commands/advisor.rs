//! Advisor backend commands

use anyhow::Result;
use chrono::Utc;

use nestegg_core::advisor::{AdvisorBackend, AdvisorClient};
use nestegg_core::models::{EmploymentType, SimulationInput, SimulationRecord};
use nestegg_core::planner;

pub async fn cmd_advisor_test() -> Result<()> {
    let client = match AdvisorClient::from_env() {
        Some(client) => client,
        None => {
            println!("ℹ️  No advisor configured.");
            println!("   Set OLLAMA_HOST (and optionally OLLAMA_MODEL), or");
            println!("   ADVISOR_BACKEND=openai_compatible with OPENAI_COMPATIBLE_HOST.");
            return Ok(());
        }
    };

    println!();
    println!("🤖 Advisor: {} (model: {})", client.host(), client.model());

    if !client.health_check().await {
        println!("   ❌ Backend not responding");
        return Ok(());
    }
    println!("   ✅ Backend reachable");

    // Request advice for a representative plan
    let input = SimulationInput {
        monthly_expense: 2500.0,
        employment: EmploymentType::Salaried,
        dependents: 1,
        current_value: 8000.0,
        goal_amount: 100000.0,
        horizon_years: 10.0,
        monthly_contribution: 400.0,
        annual_return_pct: 7.0,
    };
    let outcome = planner::simulate(&input);
    let record = SimulationRecord {
        id: 0,
        created_at: Utc::now(),
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
    };

    match client.advise(&record).await {
        Ok(text) => {
            println!();
            println!("   Sample advice:");
            println!("   {}", text);
        }
        Err(e) => {
            println!("   ❌ Advice request failed: {}", e);
        }
    }
    println!();

    Ok(())
}
