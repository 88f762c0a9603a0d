//! Nestegg Core Library
//!
//! Shared functionality for the nestegg financial goal planner:
//! - Planner engine: reserve sizing, sinking-fund solving, time-to-goal,
//!   compound-growth projection tables
//! - Database access and migrations for simulation history
//! - Pluggable local advisor backends (Ollama, OpenAI-compatible servers)
//! - Prompt library for the customizable advice template

pub mod advisor;
pub mod db;
pub mod error;
pub mod models;
pub mod planner;
pub mod prompts;

/// Test utilities including the mock Ollama server
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use advisor::{
    AdvisorBackend, AdvisorClient, MockBackend, OllamaBackend, OpenAICompatibleBackend,
};
pub use db::Database;
pub use error::{Error, Result};
pub use models::{EmploymentType, SimulationInput, SimulationRecord};
pub use planner::{
    DepositTiming, ProjectionCell, ProjectionPoint, ProjectionRow, ProjectionTable,
    SimulationOutcome,
};
pub use prompts::{Prompt, PromptId, PromptLibrary};
