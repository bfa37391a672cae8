use std::time::Duration;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::browser::wait::Wait;
use crate::pages::base_page::PageTiming;

pub const DEFAULT_BASE_URL: &str = "https://practicesoftwaretesting.com";
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:9515";
pub const DEFAULT_CONFIG_FILE: &str = "toolshop-e2e.yaml";

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "toolshop-e2e",
    version,
    about = "End-to-end browser tests for the Practice Software Testing toolshop"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: toolshop-e2e.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Site under test
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// WebDriver server URL
    #[arg(long, global = true)]
    pub webdriver_url: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run scenarios against the live site
    Run {
        /// Scenario to run (repeatable, default: all)
        #[arg(long = "scenario", short = 's')]
        scenarios: Vec<String>,

        /// Output format: console, junit
        #[arg(long)]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Run Chrome without a window
        #[arg(long)]
        headless: bool,
    },

    /// List available scenarios
    List,
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `toolshop-e2e.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub base_url: Option<String>,
    #[serde(default)]
    pub webdriver: WebDriverConfig,
    #[serde(default)]
    pub timeouts: TimeoutConfig,
    #[serde(default)]
    pub run: RunConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebDriverConfig {
    /// Unset means "not given in the file"; see [`WebDriverConfig::server_url`]
    #[serde(default)]
    pub url: Option<String>,

    /// chromedriver executable, used when `spawn` is set
    #[serde(default = "default_binary")]
    pub binary: String,

    /// Start the driver process ourselves instead of attaching to a running one
    #[serde(default = "default_true")]
    pub spawn: bool,

    #[serde(default)]
    pub headless: bool,

    #[serde(default = "default_startup_timeout")]
    pub startup_timeout_secs: u64,

    /// HTTP timeout for a single WebDriver command
    #[serde(default = "default_command_timeout")]
    pub command_timeout_secs: u64,

    /// Extra Chrome command-line switches
    #[serde(default)]
    pub args: Vec<String>,
}

impl WebDriverConfig {
    pub fn server_url(&self) -> &str {
        self.url.as_deref().unwrap_or(DEFAULT_WEBDRIVER_URL)
    }
}

impl Default for WebDriverConfig {
    fn default() -> Self {
        Self {
            url: None,
            binary: default_binary(),
            spawn: true,
            headless: false,
            startup_timeout_secs: default_startup_timeout(),
            command_timeout_secs: default_command_timeout(),
            args: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeoutConfig {
    #[serde(default = "default_explicit_wait")]
    pub explicit_wait_secs: u64,

    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,

    /// Fixed pause used where the UI gives nothing to wait on
    #[serde(default = "default_settle_pause")]
    pub settle_pause_ms: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            explicit_wait_secs: default_explicit_wait(),
            poll_interval_ms: default_poll_interval(),
            settle_pause_ms: default_settle_pause(),
        }
    }
}

impl TimeoutConfig {
    pub fn page_timing(&self) -> PageTiming {
        PageTiming {
            wait: Wait::new(
                Duration::from_secs(self.explicit_wait_secs),
                Duration::from_millis(self.poll_interval_ms),
            ),
            settle: Duration::from_millis(self.settle_pause_ms),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default = "default_console")]
    pub format: String,

    pub output: Option<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            format: default_console(),
            output: None,
        }
    }
}

// Serde default helpers
fn default_binary() -> String { "chromedriver".to_string() }
fn default_true() -> bool { true }
fn default_startup_timeout() -> u64 { 10 }
fn default_command_timeout() -> u64 { 60 }
fn default_explicit_wait() -> u64 { 15 }
fn default_poll_interval() -> u64 { 500 }
fn default_settle_pause() -> u64 { 1000 }
fn default_console() -> String { "console".to_string() }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or(DEFAULT_CONFIG_FILE);
    match std::fs::read_to_string(config_path) {
        Ok(content) => match serde_yaml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = config_path, error = %e, "ignoring malformed config file");
                AppConfig::default()
            }
        },
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Setting resolution: CLI > config > env > defaults
// ============================================================================

pub fn resolve_setting(
    cli: Option<&str>,
    config: Option<&str>,
    env: Option<&str>,
    default: &str,
) -> String {
    cli.or(config).or(env).unwrap_or(default).to_string()
}

/// Fold CLI flags and environment (`TARGET_URL`, `WEBDRIVER_URL`) into the
/// file config.
pub fn resolve_config(cli: &Cli, config: AppConfig) -> AppConfig {
    resolve_config_with_env(cli, config, |key| std::env::var(key).ok())
}

/// [`resolve_config`] with the environment lookup supplied by the caller.
pub fn resolve_config_with_env<E>(cli: &Cli, mut config: AppConfig, env: E) -> AppConfig
where
    E: Fn(&str) -> Option<String>,
{
    let env_base = env("TARGET_URL");
    let env_driver = env("WEBDRIVER_URL");

    config.base_url = Some(resolve_setting(
        cli.base_url.as_deref(),
        config.base_url.as_deref(),
        env_base.as_deref(),
        DEFAULT_BASE_URL,
    ));

    config.webdriver.url = Some(resolve_setting(
        cli.webdriver_url.as_deref(),
        config.webdriver.url.as_deref(),
        env_driver.as_deref(),
        DEFAULT_WEBDRIVER_URL,
    ));

    if let Commands::Run {
        format,
        output,
        headless,
        ..
    } = &cli.command
    {
        if let Some(format) = format {
            config.run.format = format.clone();
        }
        if output.is_some() {
            config.run.output = output.clone();
        }
        config.webdriver.headless |= *headless;
    }

    config
}
