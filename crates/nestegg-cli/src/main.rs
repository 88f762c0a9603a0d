//! Nestegg CLI - financial goal planner
//!
//! Usage:
//!   nestegg init                          Initialize database
//!   nestegg simulate --goal 100000 ...    Run a simulation
//!   nestegg projection --contribution 500 Projection tables
//!   nestegg serve --port 3000             Start the REST API

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Init => commands::cmd_init(&cli.db, cli.no_encrypt),
        Commands::Simulate {
            expense,
            employment,
            dependents,
            current,
            goal,
            horizon,
            contribution,
            rate,
            advice,
            no_save,
        } => {
            commands::cmd_simulate(
                &cli.db,
                expense,
                &employment,
                dependents,
                current,
                goal,
                horizon,
                contribution,
                rate,
                advice,
                no_save,
                cli.no_encrypt,
            )
            .await
        }
        Commands::Projection {
            contribution,
            rates,
            horizons,
            timing,
            flat,
            json,
        } => commands::cmd_projection(contribution, &rates, &horizons, &timing, flat, json),
        Commands::History { action } => {
            let db = commands::open_db(&cli.db, cli.no_encrypt)?;
            match action {
                None => commands::cmd_history_list(&db, 20),
                Some(HistoryAction::List { limit }) => commands::cmd_history_list(&db, limit),
                Some(HistoryAction::Show { id, json }) => commands::cmd_history_show(&db, id, json),
                Some(HistoryAction::Delete { id }) => commands::cmd_history_delete(&db, id),
            }
        }
        Commands::Status => commands::cmd_status(&cli.db, cli.no_encrypt),
        Commands::Advisor { action } => match action {
            AdvisorAction::Test => commands::cmd_advisor_test().await,
        },
        Commands::Serve {
            port,
            host,
            no_auth,
            api_keys,
        } => commands::cmd_serve(&cli.db, &host, port, no_auth, api_keys, cli.no_encrypt).await,
        Commands::Reset { soft, yes } => commands::cmd_reset(&cli.db, soft, yes, cli.no_encrypt),
    }
}
