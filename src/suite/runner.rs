use std::time::Instant;

use tracing::{error, info, warn};

use crate::browser::driver::Driver;
use crate::error::SuiteResult;
use crate::pages::base_page::PageTiming;
use crate::suite::fixture::SuiteFixture;
use crate::suite::result::{CaseOutcome, CaseResult};
use crate::suite::scenario::Scenario;

/// Runs scenarios one after another, each with a fresh browser.
pub struct SuiteRunner {
    base_url: String,
    timing: PageTiming,
}

impl SuiteRunner {
    pub fn new(base_url: &str, timing: PageTiming) -> Self {
        SuiteRunner {
            base_url: base_url.to_string(),
            timing,
        }
    }

    /// Run every scenario, opening a browser per scenario with `connect`.
    pub fn run<D, F>(&self, scenarios: &[Scenario], mut connect: F) -> Vec<CaseResult>
    where
        D: Driver,
        F: FnMut() -> SuiteResult<D>,
    {
        scenarios
            .iter()
            .flat_map(|scenario| self.run_scenario(*scenario, &mut connect))
            .collect()
    }

    /// Set up, run each case in order, tear down.
    ///
    /// A failing case does not stop the following ones; they continue on
    /// whatever page the browser was left on. If the browser cannot be set
    /// up, every case is reported as skipped.
    pub fn run_scenario<D, F>(&self, scenario: Scenario, connect: &mut F) -> Vec<CaseResult>
    where
        D: Driver,
        F: FnMut() -> SuiteResult<D>,
    {
        let cases = scenario.cases();
        info!(scenario = scenario.name(), cases = cases.len(), "running scenario");

        let mut fixture = match connect()
            .and_then(|driver| SuiteFixture::set_up(driver, &self.base_url, self.timing))
        {
            Ok(fixture) => fixture,
            Err(e) => {
                error!(scenario = scenario.name(), error = %e, "set-up failed, skipping scenario");
                let reason = format!("set-up failed: {}", e);
                return cases
                    .into_iter()
                    .map(|case| CaseResult {
                        scenario: scenario.name().to_string(),
                        case: case.label,
                        description: scenario.description().to_string(),
                        outcome: CaseOutcome::Skipped {
                            reason: reason.clone(),
                        },
                        duration_ms: 0,
                    })
                    .collect();
            }
        };

        let mut results = Vec::with_capacity(cases.len());
        for case in cases {
            let start = Instant::now();
            let timing = fixture.timing();
            let outcome = match scenario.execute(&case, fixture.driver(), timing) {
                Ok(()) => {
                    info!(case = %case.label, "passed");
                    CaseOutcome::Passed
                }
                Err(e) => {
                    let page = fixture
                        .driver()
                        .current_url()
                        .unwrap_or_else(|url_err| format!("unknown ({})", url_err));
                    warn!(case = %case.label, page = %page, error = %e, "failed");
                    CaseOutcome::Failed {
                        message: e.to_string(),
                    }
                }
            };
            results.push(CaseResult {
                scenario: scenario.name().to_string(),
                case: case.label,
                description: scenario.description().to_string(),
                outcome,
                duration_ms: start.elapsed().as_millis(),
            });
        }

        let (_driver, teardown) = fixture.tear_down();
        if let Err(e) = teardown {
            warn!(scenario = scenario.name(), error = %e, "tear-down failed");
        }

        results
    }
}
