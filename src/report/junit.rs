use crate::report::report_model::SuiteReport;
use crate::suite::result::CaseOutcome;

// ============================================================================
// JUnit XML reporter: standard CI integration format
// ============================================================================

/// Generate a JUnit XML report for CI systems.
///
/// Scenarios become `classname`s, cases become `<testcase>`s:
/// ```xml
/// <?xml version="1.0" encoding="UTF-8"?>
/// <testsuite name="toolshop" tests="3" failures="1" skipped="1" time="31.400">
///   <testcase name="category" classname="category" time="2.300" />
///   <testcase name="cart" classname="cart" time="15.100">
///     <failure message="Adding and checking items in the cart" type="ScenarioFailure">timed out ...</failure>
///   </testcase>
///   <testcase name="wishlist" classname="wishlist" time="0.000">
///     <skipped message="set-up failed: ..." />
///   </testcase>
/// </testsuite>
/// ```
pub fn generate_junit_xml(report: &SuiteReport) -> String {
    let time_attr = report
        .duration_ms
        .map(|ms| format!(" time=\"{:.3}\"", ms as f64 / 1000.0))
        .unwrap_or_default();

    let mut cases = String::new();
    for result in &report.case_results {
        let open = format!(
            "  <testcase name=\"{name}\" classname=\"{class}\" time=\"{time:.3}\"",
            name = escape_xml(&result.case),
            class = escape_xml(&result.scenario),
            time = result.duration_ms as f64 / 1000.0,
        );

        match &result.outcome {
            CaseOutcome::Passed => {
                cases.push_str(&open);
                cases.push_str(" />\n");
            }
            CaseOutcome::Failed { message } => {
                cases.push_str(&format!(
                    "{open}>\n    <failure message=\"{summary}\" type=\"ScenarioFailure\">{body}</failure>\n  </testcase>\n",
                    open = open,
                    summary = escape_xml(&result.description),
                    body = escape_xml(message),
                ));
            }
            CaseOutcome::Skipped { reason } => {
                cases.push_str(&format!(
                    "{open}>\n    <skipped message=\"{reason}\" />\n  </testcase>\n",
                    open = open,
                    reason = escape_xml(reason),
                ));
            }
        }
    }

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<testsuite name=\"{name}\" tests=\"{tests}\" failures=\"{failures}\" skipped=\"{skipped}\"{time}>\n{cases}</testsuite>\n",
        name = escape_xml(&report.suite_name),
        tests = report.total,
        failures = report.failed,
        skipped = report.skipped,
        time = time_attr,
        cases = cases,
    )
}

/// Escape XML special characters.
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
