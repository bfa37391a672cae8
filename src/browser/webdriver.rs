//! Driver-server plumbing around `thirtyfour`: the `GET /status` readiness
//! payload and the mapping of WebDriver errors onto `SuiteError`.

use serde::Deserialize;
use serde_json::Value;
use thirtyfour::error::{WebDriverError, WebDriverErrorInner};

use crate::error::{SuiteError, SuiteResult};

/// Every WebDriver response wraps its payload in `value`.
#[derive(Debug, Deserialize)]
pub struct WireResponse {
    #[serde(default)]
    pub value: Value,
}

/// `value` of a failed command.
#[derive(Debug, Deserialize)]
pub struct WireError {
    pub error: String,
    #[serde(default)]
    pub message: String,
}

/// `value` of `GET /status`.
#[derive(Debug, Deserialize)]
pub struct StatusValue {
    #[serde(default)]
    pub ready: bool,
    #[serde(default)]
    pub message: String,
}

/// Decode a raw HTTP response into its `value`, turning W3C error payloads
/// and non-JSON error pages into `SuiteError`s.
pub fn decode_response(command: &str, http_status: u16, body: &str) -> SuiteResult<Value> {
    let success = (200..300).contains(&http_status);

    let response: WireResponse = if body.trim().is_empty() {
        WireResponse { value: Value::Null }
    } else {
        match serde_json::from_str(body) {
            Ok(response) => response,
            Err(_) if !success => return Err(http_error(command, http_status, body)),
            Err(e) => {
                return Err(SuiteError::Json {
                    context: format!("{} response", command),
                    source: e,
                });
            }
        }
    };

    if let Some(err) = as_wire_error(&response.value) {
        return Err(map_wire_error(command, err));
    }

    if !success {
        return Err(http_error(command, http_status, body));
    }

    Ok(response.value)
}

fn http_error(command: &str, http_status: u16, body: &str) -> SuiteError {
    SuiteError::WebDriver {
        command: command.to_string(),
        error: format!("http {}", http_status),
        message: body.trim().to_string(),
    }
}

fn as_wire_error(value: &Value) -> Option<WireError> {
    if value.get("error").is_some() {
        serde_json::from_value(value.clone()).ok()
    } else {
        None
    }
}

/// Map a W3C error code onto the variants waits and pages care about.
pub fn map_wire_error(command: &str, err: WireError) -> SuiteError {
    match err.error.as_str() {
        "no such element" => SuiteError::NoSuchElement {
            locator: first_line(&err.message),
        },
        "stale element reference" => SuiteError::StaleElement(first_line(&err.message)),
        _ => SuiteError::WebDriver {
            command: command.to_string(),
            error: err.error,
            message: first_line(&err.message),
        },
    }
}

/// Map a `thirtyfour` error the same way. Its messages read `"<code>: <detail>"`.
pub fn map_driver_error(command: &str, err: WebDriverError) -> SuiteError {
    let text = err.to_string();
    match err.as_inner() {
        WebDriverErrorInner::NoSuchElement(..) => SuiteError::NoSuchElement {
            locator: first_line(&text),
        },
        WebDriverErrorInner::StaleElementReference(..) => SuiteError::StaleElement(first_line(&text)),
        _ => {
            let line = first_line(&text);
            let (error, message) = match line.split_once(": ") {
                Some((code, detail)) => (code.to_string(), detail.to_string()),
                None => ("webdriver error".to_string(), line),
            };
            SuiteError::WebDriver {
                command: command.to_string(),
                error,
                message,
            }
        }
    }
}

/// chromedriver appends a multi-line session info block to messages.
fn first_line(message: &str) -> String {
    message.lines().next().unwrap_or("").trim().to_string()
}
