//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Nestegg - plan savings goals and emergency reserves
#[derive(Parser)]
#[command(name = "nestegg")]
#[command(about = "Self-hosted financial goal planner", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path
    #[arg(long, default_value = "nestegg.db", global = true)]
    pub db: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable database encryption (not recommended for production)
    ///
    /// By default, the database is encrypted using SQLCipher.
    /// Set NESTEGG_DB_KEY environment variable with your passphrase.
    /// Use --no-encrypt only for development or testing.
    #[arg(long, global = true)]
    pub no_encrypt: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database
    Init,

    /// Run a full simulation: reserve, required contribution, time to goal
    Simulate {
        /// Total monthly expenses
        #[arg(long)]
        expense: f64,

        /// Employment type: salaried or self-employed
        /// (anything unrecognized counts as self-employed)
        #[arg(long, default_value = "salaried")]
        employment: String,

        /// Number of financial dependents
        #[arg(long, default_value = "0")]
        dependents: u32,

        /// Amount already invested toward the goal
        #[arg(long, default_value = "0")]
        current: f64,

        /// Goal amount to accumulate
        #[arg(long)]
        goal: f64,

        /// Deadline in years (may be fractional)
        #[arg(long)]
        horizon: f64,

        /// Current monthly contribution
        #[arg(long, default_value = "0")]
        contribution: f64,

        /// Expected annual return in percent (7.5 means 7.5%)
        #[arg(long, default_value = "0")]
        rate: f64,

        /// Request free-text advice from the configured advisor backend
        #[arg(long)]
        advice: bool,

        /// Compute only; do not store the simulation in history
        #[arg(long)]
        no_save: bool,
    },

    /// Project accumulated value across rates and horizons
    Projection {
        /// Monthly contribution to project
        #[arg(long)]
        contribution: f64,

        /// Annual rate in percent; repeat for multiple scenarios
        #[arg(long = "rate", default_values_t = vec![4.0, 8.0, 12.0])]
        rates: Vec<f64>,

        /// Horizon in years; repeat for multiple columns
        #[arg(long = "horizon", default_values_t = vec![1.0, 5.0, 10.0, 20.0])]
        horizons: Vec<f64>,

        /// Deposit timing: period_start (deposit then grow) or
        /// period_end (grow then deposit)
        #[arg(long, default_value = "period_end")]
        timing: String,

        /// Flatten to one line per (rate, horizon) pair (bar-style view)
        #[arg(long)]
        flat: bool,

        /// Emit the table as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Browse stored simulations
    History {
        #[command(subcommand)]
        action: Option<HistoryAction>,
    },

    /// Show database status (encryption, size, counts)
    Status,

    /// Advisor backend utilities
    Advisor {
        #[command(subcommand)]
        action: AdvisorAction,
    },

    /// Start the REST API server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Disable authentication (for local development only)
        ///
        /// WARNING: do not use this flag when exposing the server to a
        /// network. By default the server requires a bearer API key.
        #[arg(long)]
        no_auth: bool,

        /// API key accepted as "Authorization: Bearer <key>"; repeatable
        #[arg(long = "api-key")]
        api_keys: Vec<String>,
    },

    /// Reset the database
    Reset {
        /// Clear simulation history but keep the database file
        #[arg(long)]
        soft: bool,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum HistoryAction {
    /// List stored simulations (default)
    List {
        /// Maximum rows to show
        #[arg(long, default_value = "20")]
        limit: i64,
    },

    /// Show one simulation in full
    Show {
        /// Simulation id
        id: i64,

        /// Emit the record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a simulation
    Delete {
        /// Simulation id
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum AdvisorAction {
    /// Check the configured backend and request advice for a sample plan
    Test,
}
