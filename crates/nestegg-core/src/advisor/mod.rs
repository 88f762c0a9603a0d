//! Pluggable local advisor backend abstraction
//!
//! A backend-agnostic interface for the one AI operation this tool
//! needs: turning a finished simulation into a few sentences of
//! free-text advice. All backends run locally (no cloud APIs) - Ollama,
//! OpenAI-compatible servers, etc.
//!
//! # Architecture
//!
//! - `AdvisorBackend` trait: the interface every backend implements
//! - `AdvisorClient` enum: concrete wrapper providing Clone +
//!   compile-time dispatch
//! - Backend implementations: `OllamaBackend`, `OpenAICompatibleBackend`,
//!   `MockBackend`
//!
//! The advisor has no contract with the model output beyond "free text";
//! failures surface as messages and never abort the computation that
//! produced the numbers.
//!
//! # Configuration
//!
//! Environment variables:
//! - `ADVISOR_BACKEND`: Backend to use (ollama, openai_compatible, mock).
//!   Default: ollama
//! - `OLLAMA_HOST`: Ollama server URL (required for ollama backend)
//! - `OLLAMA_MODEL`: Model name (default: llama3.2)
//! - `OPENAI_COMPATIBLE_HOST`: Server URL (required for openai_compatible)
//! - `OPENAI_COMPATIBLE_MODEL`: Model name (default: gpt-3.5-turbo)
//! - `OPENAI_COMPATIBLE_API_KEY`: API key if required (optional)

mod mock;
mod ollama;
mod openai_compatible;

pub use mock::MockBackend;
pub use ollama::OllamaBackend;
pub use openai_compatible::OpenAICompatibleBackend;

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::SimulationRecord;
use crate::prompts::{Prompt, PromptId, PromptLibrary};

/// Trait defining the interface for all advisor backends
#[async_trait]
pub trait AdvisorBackend: Send + Sync {
    /// Produce free-text advice for a completed simulation
    async fn advise(&self, record: &SimulationRecord) -> Result<String>;

    /// Check if the backend is reachable
    async fn health_check(&self) -> bool;

    /// Get the model name (for display)
    fn model(&self) -> &str;

    /// Get the host URL (for logging)
    fn host(&self) -> &str;
}

/// Concrete advisor client enum
///
/// Provides Clone and compile-time dispatch without Box<dyn> overhead.
#[derive(Clone)]
pub enum AdvisorClient {
    /// Ollama backend (HTTP API)
    Ollama(OllamaBackend),
    /// OpenAI-compatible backend (vLLM, LocalAI, llama-server, etc.)
    OpenAICompatible(OpenAICompatibleBackend),
    /// Mock backend for testing
    Mock(MockBackend),
}

impl AdvisorClient {
    /// Create an advisor client from environment variables
    ///
    /// Checks `ADVISOR_BACKEND` to determine which backend to use:
    /// - `ollama` (default): uses OLLAMA_HOST and OLLAMA_MODEL
    /// - `openai_compatible`: uses OPENAI_COMPATIBLE_HOST and friends
    /// - `mock`: a mock backend for testing
    ///
    /// Returns None if the required environment variables are not set.
    pub fn from_env() -> Option<Self> {
        let backend = std::env::var("ADVISOR_BACKEND").unwrap_or_else(|_| "ollama".to_string());

        match backend.to_lowercase().as_str() {
            "ollama" => OllamaBackend::from_env().map(AdvisorClient::Ollama),
            "openai_compatible" | "openai" | "vllm" | "localai" | "llamacpp" => {
                OpenAICompatibleBackend::from_env().map(AdvisorClient::OpenAICompatible)
            }
            "mock" => Some(AdvisorClient::Mock(MockBackend::new())),
            _ => {
                tracing::warn!(backend = %backend, "Unknown ADVISOR_BACKEND, falling back to ollama");
                OllamaBackend::from_env().map(AdvisorClient::Ollama)
            }
        }
    }

    /// Create an Ollama backend directly
    pub fn ollama(host: &str, model: &str) -> Self {
        AdvisorClient::Ollama(OllamaBackend::new(host, model))
    }

    /// Create a mock backend for testing
    pub fn mock() -> Self {
        AdvisorClient::Mock(MockBackend::new())
    }
}

#[async_trait]
impl AdvisorBackend for AdvisorClient {
    async fn advise(&self, record: &SimulationRecord) -> Result<String> {
        match self {
            AdvisorClient::Ollama(b) => b.advise(record).await,
            AdvisorClient::OpenAICompatible(b) => b.advise(record).await,
            AdvisorClient::Mock(b) => b.advise(record).await,
        }
    }

    async fn health_check(&self) -> bool {
        match self {
            AdvisorClient::Ollama(b) => b.health_check().await,
            AdvisorClient::OpenAICompatible(b) => b.health_check().await,
            AdvisorClient::Mock(b) => b.health_check().await,
        }
    }

    fn model(&self) -> &str {
        match self {
            AdvisorClient::Ollama(b) => b.model(),
            AdvisorClient::OpenAICompatible(b) => b.model(),
            AdvisorClient::Mock(b) => b.model(),
        }
    }

    fn host(&self) -> &str {
        match self {
            AdvisorClient::Ollama(b) => b.host(),
            AdvisorClient::OpenAICompatible(b) => b.host(),
            AdvisorClient::Mock(b) => b.host(),
        }
    }
}

/// Template variables for the advice prompt, from a simulation record.
///
/// Currency values are rendered with 2 decimals so the model sees the
/// same numbers the user does.
pub(crate) fn advice_vars(record: &SimulationRecord) -> HashMap<&'static str, String> {
    let mut vars = HashMap::new();
    vars.insert("monthly_expense", format!("{:.2}", record.monthly_expense));
    vars.insert("employment", record.employment.to_string());
    vars.insert("dependents", record.dependents.to_string());
    vars.insert("current_value", format!("{:.2}", record.current_value));
    vars.insert("goal_amount", format!("{:.2}", record.goal_amount));
    vars.insert("horizon_years", record.horizon_years.to_string());
    vars.insert(
        "monthly_contribution",
        format!("{:.2}", record.monthly_contribution),
    );
    vars.insert("annual_return_pct", record.annual_return_pct.to_string());
    vars.insert("reserve_target", format!("{:.2}", record.reserve_target));
    vars.insert(
        "required_contribution",
        format!("{:.2}", record.required_contribution),
    );
    vars.insert("years_to_goal", format!("{:.1}", record.years_to_goal));
    vars
}

/// Render the advice prompt (user section) for a record.
pub(crate) fn render_advice_prompt(prompt: &Prompt, record: &SimulationRecord) -> String {
    prompt.render_user(&advice_vars(record))
}

/// Load and render the advice prompt through a library handle.
pub(crate) fn advice_prompt_from(
    prompts: &std::sync::RwLock<PromptLibrary>,
    record: &SimulationRecord,
) -> Result<String> {
    let mut prompts = prompts
        .write()
        .map_err(|_| crate::error::Error::InvalidData("Failed to acquire prompt library lock".into()))?;
    let template = prompts.get(PromptId::Advise)?;
    Ok(render_advice_prompt(template, record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::models::EmploymentType;

    fn sample_record() -> SimulationRecord {
        SimulationRecord {
            id: 1,
            created_at: Utc::now(),
            monthly_expense: 3000.0,
            employment: EmploymentType::Salaried,
            dependents: 2,
            current_value: 15000.0,
            goal_amount: 120000.0,
            horizon_years: 10.0,
            monthly_contribution: 600.0,
            annual_return_pct: 8.0,
            reserve_target: 20000.0,
            required_contribution: 655.97,
            years_to_goal: 11.2,
            advice: None,
        }
    }

    #[test]
    fn test_advisor_client_mock() {
        let client = AdvisorClient::mock();
        assert_eq!(client.model(), "mock");
        assert_eq!(client.host(), "mock://localhost");
    }

    #[tokio::test]
    async fn test_mock_health_check() {
        let client = AdvisorClient::mock();
        assert!(client.health_check().await);
    }

    #[tokio::test]
    async fn test_mock_advise() {
        let client = AdvisorClient::mock();
        let advice = client.advise(&sample_record()).await.unwrap();
        assert!(!advice.is_empty());
    }

    #[test]
    fn test_advice_vars_cover_template() {
        let mut lib = PromptLibrary::embedded_only();
        let prompt = lib.get(PromptId::Advise).unwrap().clone();
        let rendered = render_advice_prompt(&prompt, &sample_record());

        // Every placeholder must have been substituted
        assert!(!rendered.contains("{{"), "unsubstituted vars: {rendered}");
        assert!(rendered.contains("120000.00"));
        assert!(rendered.contains("11.2"));
        assert!(rendered.contains("salaried"));
    }
}
