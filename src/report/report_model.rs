use serde::{Deserialize, Serialize};

use crate::suite::result::CaseResult;

// ============================================================================
// Suite report: aggregates the case results of one run
// ============================================================================

/// Aggregated report for a suite run.
///
/// Built from a `Vec<CaseResult>` via `from_results()`. Consumed by the
/// console and JUnit reporters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteReport {
    pub suite_name: String,

    pub total: usize,

    pub passed: usize,

    pub failed: usize,

    pub skipped: usize,

    /// Wall-clock duration of the run in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u128>,

    pub case_results: Vec<CaseResult>,
}

impl SuiteReport {
    /// Build a report, computing the totals.
    pub fn from_results(suite_name: &str, results: Vec<CaseResult>) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed()).count();
        let skipped = results.iter().filter(|r| r.skipped()).count();
        Self {
            suite_name: suite_name.to_string(),
            total,
            passed,
            failed: total - passed - skipped,
            skipped,
            duration_ms: None,
            case_results: results,
        }
    }

    pub fn with_duration(mut self, duration_ms: u128) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    /// Skipped cases count as not passed.
    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }
}
