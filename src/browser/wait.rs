use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::browser::driver::{Driver, ElementRef};
use crate::browser::locator::Locator;
use crate::error::{SuiteError, SuiteResult};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Explicit wait: re-evaluate a condition until it holds or the timeout runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wait {
    pub timeout: Duration,
    pub poll_interval: Duration,
}

impl Default for Wait {
    fn default() -> Self {
        Wait {
            timeout: DEFAULT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl Wait {
    pub fn new(timeout: Duration, poll_interval: Duration) -> Self {
        Wait {
            timeout,
            poll_interval,
        }
    }

    /// Poll `condition` until it returns `Some`.
    ///
    /// Lookup misses and stale references count as "not yet"; any other
    /// error aborts the wait. The condition runs at least once even with a
    /// zero timeout.
    pub fn until<D, T, F>(&self, driver: &mut D, description: &str, mut condition: F) -> SuiteResult<T>
    where
        D: Driver + ?Sized,
        F: FnMut(&mut D) -> SuiteResult<Option<T>>,
    {
        let start = Instant::now();
        loop {
            match condition(driver) {
                Ok(Some(value)) => return Ok(value),
                Ok(None) => {}
                Err(e) if e.is_transient_lookup() => {}
                Err(e) => return Err(e),
            }

            let waited = start.elapsed();
            if waited >= self.timeout {
                debug!(condition = description, ?waited, "wait timed out");
                return Err(SuiteError::Timeout {
                    condition: description.to_string(),
                    waited,
                });
            }
            thread::sleep(self.poll_interval.min(self.timeout - waited));
        }
    }

    pub fn until_visible<D: Driver + ?Sized>(&self, driver: &mut D, locator: &Locator) -> SuiteResult<ElementRef> {
        self.until(
            driver,
            &format!("visibility of element located by {}", locator),
            |d| visibility_of_element_located(d, locator),
        )
    }

    pub fn until_text_present<D: Driver + ?Sized>(
        &self,
        driver: &mut D,
        element: &ElementRef,
        text: &str,
    ) -> SuiteResult<()> {
        self.until(
            driver,
            &format!("text '{}' to be present in element {}", text, element.id()),
            |d| text_to_be_present_in_element(d, element, text),
        )
    }

    pub fn until_invisible<D: Driver + ?Sized>(&self, driver: &mut D, locator: &Locator) -> SuiteResult<()> {
        self.until(
            driver,
            &format!("invisibility of element located by {}", locator),
            |d| invisibility_of_element_located(d, locator),
        )
    }

    pub fn until_clickable<D: Driver + ?Sized>(&self, driver: &mut D, locator: &Locator) -> SuiteResult<ElementRef> {
        self.until(
            driver,
            &format!("element to be clickable: {}", locator),
            |d| element_to_be_clickable(d, locator),
        )
    }
}

// ============================================================================
// Expected conditions
// ============================================================================

/// Element is present and displayed.
pub fn visibility_of_element_located<D: Driver + ?Sized>(
    driver: &mut D,
    locator: &Locator,
) -> SuiteResult<Option<ElementRef>> {
    let element = driver.find_element(locator)?;
    Ok(driver.is_displayed(&element)?.then_some(element))
}

/// Element's text contains `text`.
pub fn text_to_be_present_in_element<D: Driver + ?Sized>(
    driver: &mut D,
    element: &ElementRef,
    text: &str,
) -> SuiteResult<Option<()>> {
    Ok(driver.text(element)?.contains(text).then_some(()))
}

/// Element is absent, detached, or hidden.
pub fn invisibility_of_element_located<D: Driver + ?Sized>(
    driver: &mut D,
    locator: &Locator,
) -> SuiteResult<Option<()>> {
    let element = match driver.find_element(locator) {
        Ok(element) => element,
        Err(e) if e.is_transient_lookup() => return Ok(Some(())),
        Err(e) => return Err(e),
    };
    match driver.is_displayed(&element) {
        Ok(displayed) => Ok((!displayed).then_some(())),
        Err(SuiteError::StaleElement(_)) => Ok(Some(())),
        Err(e) => Err(e),
    }
}

/// Element is displayed and enabled.
pub fn element_to_be_clickable<D: Driver + ?Sized>(
    driver: &mut D,
    locator: &Locator,
) -> SuiteResult<Option<ElementRef>> {
    match visibility_of_element_located(driver, locator)? {
        Some(element) if driver.is_enabled(&element)? => Ok(Some(element)),
        _ => Ok(None),
    }
}

/// Unconditional sleep, for steps where the UI has no reliable signal to wait on.
pub fn pause(duration: Duration) {
    if duration.is_zero() {
        return;
    }
    debug!(?duration, "fixed pause");
    thread::sleep(duration);
}
