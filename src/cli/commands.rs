use tracing::info;

use crate::browser::session::BrowserSession;
use crate::cli::config::{AppConfig, DEFAULT_BASE_URL};
use crate::report::console::format_console_report;
use crate::report::junit::generate_junit_xml;
use crate::report::report_model::SuiteReport;
use crate::suite::runner::SuiteRunner;
use crate::suite::scenario::{Scenario, select_scenarios};

// ============================================================================
// run subcommand
// ============================================================================

/// Run the selected scenarios against the live site and return whether all passed.
pub fn cmd_run(config: &AppConfig, scenario_names: &[String]) -> Result<bool, Box<dyn std::error::Error>> {
    let scenarios = select_scenarios(scenario_names)?;
    let base_url = config.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);

    info!(
        base_url,
        webdriver = config.webdriver.server_url(),
        scenarios = scenarios.len(),
        "starting run"
    );

    let runner = SuiteRunner::new(base_url, config.timeouts.page_timing());
    let start = std::time::Instant::now();
    let results = runner.run(&scenarios, || BrowserSession::launch(&config.webdriver));
    let duration = start.elapsed().as_millis();

    let report = SuiteReport::from_results("toolshop-e2e", results).with_duration(duration);
    let all_passed = report.all_passed();

    let output_content = render_report(&report, &config.run.format);

    match config.run.output.as_deref() {
        Some(path) => std::fs::write(path, &output_content)?,
        None => print!("{}", output_content),
    }

    Ok(all_passed)
}

/// Render a report in `format`; anything but `junit` gets the console layout.
pub fn render_report(report: &SuiteReport, format: &str) -> String {
    match format {
        "junit" => generate_junit_xml(report),
        _ => format_console_report(report),
    }
}

// ============================================================================
// list subcommand
// ============================================================================

/// One line per scenario: name, case count, description.
pub fn cmd_list() -> String {
    Scenario::ALL
        .iter()
        .map(|s| {
            format!(
                "{:<16} {} case(s)  {}\n",
                s.name(),
                s.cases().len(),
                s.description()
            )
        })
        .collect()
}
