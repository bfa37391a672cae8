use serde::{Deserialize, Serialize};

/// How a single case ended.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CaseOutcome {
    Passed,

    /// Assertion failure, driver error or wait timeout, as raised
    Failed { message: String },

    /// Never ran because the scenario's browser could not be set up
    Skipped { reason: String },
}

/// Result of running one case of a scenario.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseResult {
    /// Scenario the case belongs to, e.g. `negative_login`
    pub scenario: String,

    /// Case label; equals the scenario name for unparameterized scenarios
    pub case: String,

    pub description: String,

    pub outcome: CaseOutcome,

    pub duration_ms: u128,
}

impl CaseResult {
    pub fn passed(&self) -> bool {
        matches!(self.outcome, CaseOutcome::Passed)
    }

    pub fn skipped(&self) -> bool {
        matches!(self.outcome, CaseOutcome::Skipped { .. })
    }

    /// Failure message or skip reason.
    pub fn detail(&self) -> Option<&str> {
        match &self.outcome {
            CaseOutcome::Passed => None,
            CaseOutcome::Failed { message } => Some(message),
            CaseOutcome::Skipped { reason } => Some(reason),
        }
    }
}
