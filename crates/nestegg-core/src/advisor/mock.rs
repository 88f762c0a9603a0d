//! Mock backend for testing
//!
//! Produces deterministic advice from the record's own numbers, so tests
//! and development work without a running LLM server.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::SimulationRecord;

use super::AdvisorBackend;

/// Mock advisor backend for testing
#[derive(Clone, Default)]
pub struct MockBackend {
    /// Whether health_check should return true
    pub healthy: bool,
}

impl MockBackend {
    /// Create a new mock backend (healthy by default)
    pub fn new() -> Self {
        Self { healthy: true }
    }

    /// Create an unhealthy mock backend
    pub fn unhealthy() -> Self {
        Self { healthy: false }
    }
}

#[async_trait]
impl AdvisorBackend for MockBackend {
    async fn advise(&self, record: &SimulationRecord) -> Result<String> {
        let gap = record.required_contribution - record.monthly_contribution;
        let pace = if gap > 0.0 {
            format!(
                "You are contributing {:.2} below what the goal needs; raising your monthly \
                 contribution to {:.2} keeps the deadline realistic.",
                gap, record.required_contribution
            )
        } else {
            "Your current contribution already covers what the goal needs.".to_string()
        };

        let reserve = if record.current_value < record.reserve_target {
            format!(
                " Build the emergency reserve of {:.2} before accelerating goal investments.",
                record.reserve_target
            )
        } else {
            " Your emergency reserve is funded; surplus can go toward the goal.".to_string()
        };

        Ok(format!("{}{}", pace, reserve))
    }

    async fn health_check(&self) -> bool {
        self.healthy
    }

    fn model(&self) -> &str {
        "mock"
    }

    fn host(&self) -> &str {
        "mock://localhost"
    }
}
