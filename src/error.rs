use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SuiteError {
    /// WebDriver server answered a command with a W3C error payload
    #[error("WebDriver command '{command}' failed ({error}): {message}")]
    WebDriver {
        command: String,
        error: String,
        message: String,
    },

    /// No element matched the locator
    #[error("no element matches {locator}")]
    NoSuchElement { locator: String },

    /// Element reference no longer attached to the DOM
    #[error("stale element reference: {0}")]
    StaleElement(String),

    /// Explicit wait gave up
    #[error("timed out after {waited:?} waiting for {condition}")]
    Timeout { condition: String, waited: Duration },

    /// UI state did not match the expectation
    #[error("assertion failed ({context}): expected '{expected}', actual '{actual}'")]
    Assertion {
        context: String,
        expected: String,
        actual: String,
    },

    #[error("HTTP error talking to WebDriver: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error ({context}): {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// chromedriver process could not be started
    #[error("failed to spawn {binary} (is it installed and on PATH?): {source}")]
    DriverSpawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    /// WebDriver server never became ready, or refused to open a session
    #[error("WebDriver startup failed: {0}")]
    DriverStartup(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SuiteError {
    /// Errors an explicit wait treats as "condition not met yet".
    pub fn is_transient_lookup(&self) -> bool {
        matches!(
            self,
            SuiteError::NoSuchElement { .. } | SuiteError::StaleElement(_)
        )
    }

    pub fn assertion(
        context: impl Into<String>,
        expected: impl ToString,
        actual: impl ToString,
    ) -> Self {
        SuiteError::Assertion {
            context: context.into(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}

pub type SuiteResult<T> = Result<T, SuiteError>;
