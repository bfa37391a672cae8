use std::collections::HashMap;
use std::future::Future;
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use reqwest::Url;
use thirtyfour::error::WebDriverResult;
use thirtyfour::{
    ChromeCapabilities, ChromiumLikeCapabilities, DesiredCapabilities, WebDriver, WebElement,
};
use tokio::runtime::Runtime;
use tracing::{debug, info, warn};

use crate::browser::driver::{Driver, ElementRef};
use crate::browser::locator::Locator;
use crate::browser::webdriver::{StatusValue, decode_response, map_driver_error};
use crate::cli::config::WebDriverConfig;
use crate::error::{SuiteError, SuiteResult};

/// A live Chrome session on a WebDriver server, driven through `thirtyfour`.
///
/// Commands block on a private tokio runtime. When configured to, the
/// session owns the chromedriver process as well and kills it on quit.
pub struct BrowserSession {
    driver: Option<WebDriver>,
    /// Elements handed out as `ElementRef`s, keyed by their ref id
    elements: HashMap<String, WebElement>,
    next_element: u64,
    server_url: String,
    command_timeout: Duration,
    driver_process: Option<Child>,
    runtime: Runtime,
}

impl BrowserSession {
    /// Start (or attach to) the WebDriver server and open a Chrome session.
    pub fn launch(config: &WebDriverConfig) -> SuiteResult<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;

        let server_url = config.server_url().trim_end_matches('/').to_string();

        let driver_process = if config.spawn {
            Some(spawn_driver(&config.binary, &server_url)?)
        } else {
            None
        };

        let mut session = BrowserSession {
            driver: None,
            elements: HashMap::new(),
            next_element: 0,
            server_url,
            command_timeout: Duration::from_secs(config.command_timeout_secs),
            driver_process,
            runtime,
        };

        session.wait_ready(Duration::from_secs(config.startup_timeout_secs))?;

        let caps = chrome_capabilities(config.headless, &config.args)?;
        let driver = session.block(
            "new_session",
            WebDriver::new(session.server_url.as_str(), caps),
        )?;

        info!(server = %session.server_url, headless = config.headless, "browser session started");
        session.driver = Some(driver);
        Ok(session)
    }

    /// Poll `GET /status` until the server reports ready.
    fn wait_ready(&mut self, timeout: Duration) -> SuiteResult<()> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(2))
            .build()?;
        let status_url = format!("{}/status", self.server_url);
        let deadline = Instant::now() + timeout;
        let mut last_problem = String::from("no response");

        loop {
            match fetch_status(&client, &status_url) {
                Ok(status) if status.ready => return Ok(()),
                Ok(status) => last_problem = status.message,
                Err(e) => last_problem = e.to_string(),
            }
            debug!(server = %self.server_url, problem = %last_problem, "driver not ready");

            if let Some(child) = self.driver_process.as_mut() {
                if let Ok(Some(exit)) = child.try_wait() {
                    return Err(SuiteError::DriverStartup(format!(
                        "driver process exited early with {}",
                        exit
                    )));
                }
            }

            if Instant::now() >= deadline {
                return Err(SuiteError::DriverStartup(format!(
                    "{} not ready after {:?}: {}",
                    self.server_url, timeout, last_problem
                )));
            }
            thread::sleep(Duration::from_millis(100));
        }
    }

    /// Run one `thirtyfour` command to completion, bounded by the command timeout.
    fn block<T, F>(&self, command: &str, future: F) -> SuiteResult<T>
    where
        F: Future<Output = WebDriverResult<T>>,
    {
        debug!(command, "webdriver command");
        let limit = self.command_timeout;
        match self
            .runtime
            .block_on(async { tokio::time::timeout(limit, future).await })
        {
            Ok(result) => result.map_err(|e| map_driver_error(command, e)),
            Err(_) => Err(SuiteError::Timeout {
                condition: format!("response to '{}'", command),
                waited: limit,
            }),
        }
    }

    fn webdriver(&self) -> SuiteResult<&WebDriver> {
        self.driver
            .as_ref()
            .ok_or_else(|| SuiteError::DriverStartup("browser session is not open".into()))
    }

    fn register(&mut self, element: WebElement) -> ElementRef {
        self.next_element += 1;
        let id = format!("e{}", self.next_element);
        self.elements.insert(id.clone(), element);
        ElementRef(id)
    }

    fn element(&self, element: &ElementRef) -> SuiteResult<WebElement> {
        self.elements
            .get(element.id())
            .cloned()
            .ok_or_else(|| SuiteError::StaleElement(format!("unknown element {}", element.id())))
    }

    /// Whether a session is open on the server.
    pub fn is_open(&self) -> bool {
        self.driver.is_some()
    }
}

impl Driver for BrowserSession {
    fn navigate(&mut self, url: &str) -> SuiteResult<()> {
        self.block("navigate", self.webdriver()?.goto(url))
    }

    fn maximize_window(&mut self) -> SuiteResult<()> {
        self.block("maximize_window", self.webdriver()?.maximize_window())
    }

    fn current_url(&mut self) -> SuiteResult<String> {
        self.block("current_url", self.webdriver()?.current_url())
            .map(|url| url.to_string())
    }

    fn title(&mut self) -> SuiteResult<String> {
        self.block("title", self.webdriver()?.title())
    }

    fn find_element(&mut self, locator: &Locator) -> SuiteResult<ElementRef> {
        let element = self
            .block("find_element", self.webdriver()?.find(locator.to_by()))
            .map_err(|e| match e {
                SuiteError::NoSuchElement { .. } => SuiteError::NoSuchElement {
                    locator: locator.to_string(),
                },
                other => other,
            })?;
        Ok(self.register(element))
    }

    fn find_elements(&mut self, locator: &Locator) -> SuiteResult<Vec<ElementRef>> {
        let elements = self.block("find_elements", self.webdriver()?.find_all(locator.to_by()))?;
        Ok(elements.into_iter().map(|e| self.register(e)).collect())
    }

    fn click(&mut self, element: &ElementRef) -> SuiteResult<()> {
        let element = self.element(element)?;
        self.block("click", element.click())
    }

    fn clear(&mut self, element: &ElementRef) -> SuiteResult<()> {
        let element = self.element(element)?;
        self.block("clear", element.clear())
    }

    fn send_keys(&mut self, element: &ElementRef, text: &str) -> SuiteResult<()> {
        let element = self.element(element)?;
        self.block("send_keys", element.send_keys(text))
    }

    fn text(&mut self, element: &ElementRef) -> SuiteResult<String> {
        let element = self.element(element)?;
        self.block("text", element.text()).map(|t| t.trim().to_string())
    }

    fn is_displayed(&mut self, element: &ElementRef) -> SuiteResult<bool> {
        let element = self.element(element)?;
        self.block("is_displayed", element.is_displayed())
    }

    fn is_enabled(&mut self, element: &ElementRef) -> SuiteResult<bool> {
        let element = self.element(element)?;
        self.block("is_enabled", element.is_enabled())
    }

    fn quit(&mut self) -> SuiteResult<()> {
        self.elements.clear();
        let result = match self.driver.take() {
            Some(driver) => self
                .block("quit", driver.quit())
                .map(|_| info!(server = %self.server_url, "browser session closed")),
            None => Ok(()),
        };

        if let Some(mut child) = self.driver_process.take() {
            if let Err(e) = child.kill() {
                warn!(error = %e, "failed to kill driver process");
            }
            let _ = child.wait();
        }

        result
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        if let Err(e) = self.quit() {
            warn!(error = %e, "browser session cleanup failed");
        }
    }
}

/// Chrome capabilities with `goog:chromeOptions.args`.
pub fn chrome_capabilities(headless: bool, extra_args: &[String]) -> SuiteResult<ChromeCapabilities> {
    let mut caps = DesiredCapabilities::chrome();
    let mut args: Vec<&str> = Vec::new();
    if headless {
        args.push("--headless=new");
        // Headless windows cannot be maximized, give them a desktop size
        args.push("--window-size=1920,1080");
    }
    args.extend(extra_args.iter().map(String::as_str));

    for arg in args {
        caps.add_arg(arg)
            .map_err(|e| map_driver_error("capabilities", e))?;
    }
    Ok(caps)
}

fn fetch_status(client: &reqwest::blocking::Client, status_url: &str) -> SuiteResult<StatusValue> {
    let response = client.get(status_url).send()?;
    let status = response.status().as_u16();
    let body = response.text()?;
    let value = decode_response("status", status, &body)?;
    serde_json::from_value(value).map_err(|e| SuiteError::Json {
        context: "status response".into(),
        source: e,
    })
}

/// Spawn chromedriver on the port taken from `server_url`.
fn spawn_driver(binary: &str, server_url: &str) -> SuiteResult<Child> {
    let port = port_of(server_url)?;
    info!(binary, port, "starting driver process");

    Command::new(binary)
        .arg(format!("--port={}", port))
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| SuiteError::DriverSpawn {
            binary: binary.to_string(),
            source: e,
        })
}

/// Port of the driver server, falling back to the scheme's default.
pub fn port_of(server_url: &str) -> SuiteResult<u16> {
    let url = Url::parse(server_url)
        .map_err(|e| SuiteError::Config(format!("invalid webdriver url '{}': {}", server_url, e)))?;
    url.port_or_known_default().ok_or_else(|| {
        SuiteError::Config(format!(
            "webdriver url '{}' has no port to spawn the driver on",
            server_url
        ))
    })
}
