use crate::report::report_model::SuiteReport;
use crate::suite::result::CaseOutcome;

// ============================================================================
// Console reporter: formatted terminal output
// ============================================================================

/// Format a suite report for terminal output.
///
/// Produces output like:
/// ```text
/// === Test Suite: toolshop ===
///
/// ✓ PASS  category (2.3s)
/// ✗ FAIL  cart (15.1s)
///     timed out after 15s waiting for visibility of element located by By.id: order-confirmation
/// - SKIP  wishlist
///     set-up failed: failed to spawn chromedriver
///
/// === Results: 1 passed, 1 failed, 1 skipped (3 total) ===
/// ```
pub fn format_console_report(report: &SuiteReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== Test Suite: {} ===\n\n", report.suite_name));

    for result in &report.case_results {
        let marker = match result.outcome {
            CaseOutcome::Passed => "\u{2713} PASS",
            CaseOutcome::Failed { .. } => "\u{2717} FAIL",
            CaseOutcome::Skipped { .. } => "- SKIP",
        };

        if result.skipped() {
            out.push_str(&format!("{}  {}\n", marker, result.case));
        } else {
            out.push_str(&format!(
                "{}  {} ({:.1}s)\n",
                marker,
                result.case,
                result.duration_ms as f64 / 1000.0
            ));
        }

        if let Some(detail) = result.detail() {
            out.push_str(&format!("    {}\n", detail));
        }
    }

    out.push_str(&format!(
        "\n=== Results: {} passed, {} failed, {} skipped ({} total)",
        report.passed, report.failed, report.skipped, report.total
    ));

    if let Some(ms) = report.duration_ms {
        let secs = ms as f64 / 1000.0;
        out.push_str(&format!(" in {:.1}s", secs));
    }

    out.push_str(" ===\n");

    out
}
