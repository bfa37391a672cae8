use std::time::Duration;

use tracing::debug;

use crate::browser::driver::{Driver, ElementRef};
use crate::browser::locator::Locator;
use crate::browser::wait::{Wait, pause};
use crate::error::{SuiteError, SuiteResult};

/// Wait settings shared by every page of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTiming {
    pub wait: Wait,
    /// Length of the fixed pauses some flows need
    pub settle: Duration,
}

impl Default for PageTiming {
    fn default() -> Self {
        PageTiming {
            wait: Wait::default(),
            settle: Duration::from_secs(1),
        }
    }
}

/// Element helpers every page object is built on.
///
/// Borrows the driver for as long as the page lives; pages compose other
/// pages through [`BasePage::reborrow`].
pub struct BasePage<'a, D: Driver + ?Sized> {
    driver: &'a mut D,
    timing: PageTiming,
}

impl<'a, D: Driver + ?Sized> BasePage<'a, D> {
    pub fn new(driver: &'a mut D, timing: PageTiming) -> Self {
        BasePage { driver, timing }
    }

    /// A shorter-lived base on the same driver, for building another page.
    pub fn reborrow(&mut self) -> BasePage<'_, D> {
        BasePage {
            driver: &mut *self.driver,
            timing: self.timing,
        }
    }

    pub fn driver(&mut self) -> &mut D {
        self.driver
    }

    pub fn timing(&self) -> PageTiming {
        self.timing
    }

    // ---- waits ----

    pub fn wait_visibility(&mut self, locator: &Locator) -> SuiteResult<ElementRef> {
        self.timing.wait.until_visible(self.driver, locator)
    }

    /// Wait for the element to show up, then for its text to contain `text`.
    pub fn wait_for_text_to_be_loaded(&mut self, locator: &Locator, text: &str) -> SuiteResult<()> {
        self.wait_visibility(locator)?;
        let element = self.driver.find_element(locator)?;
        self.timing.wait.until_text_present(self.driver, &element, text)
    }

    pub fn wait_invisibility(&mut self, locator: &Locator) -> SuiteResult<()> {
        self.timing.wait.until_invisible(self.driver, locator)
    }

    pub fn wait_to_be_clickable(&mut self, locator: &Locator) -> SuiteResult<ElementRef> {
        self.timing.wait.until_clickable(self.driver, locator)
    }

    pub fn pause(&self) {
        pause(self.timing.settle);
    }

    // ---- interactions ----

    fn get_element(&mut self, locator: &Locator) -> SuiteResult<ElementRef> {
        self.driver.find_element(locator)
    }

    pub fn get_elements(&mut self, locator: &Locator) -> SuiteResult<Vec<ElementRef>> {
        self.driver.find_elements(locator)
    }

    pub fn click_element(&mut self, locator: &Locator) -> SuiteResult<()> {
        debug!(%locator, "click");
        let element = self.get_element(locator)?;
        self.driver.click(&element)
    }

    pub fn clear_text(&mut self, locator: &Locator) -> SuiteResult<()> {
        let element = self.get_element(locator)?;
        self.driver.clear(&element)
    }

    /// Replace the field's content with `text`.
    pub fn type_in(&mut self, locator: &Locator, text: &str) -> SuiteResult<()> {
        debug!(%locator, text, "type");
        let element = self.get_element(locator)?;
        self.clear_text(locator)?;
        self.driver.send_keys(&element, text)
    }

    pub fn get_text(&mut self, locator: &Locator) -> SuiteResult<String> {
        let element = self.get_element(locator)?;
        self.driver.text(&element)
    }

    pub fn get_number_of_elements(&mut self, locator: &Locator) -> SuiteResult<usize> {
        Ok(self.get_elements(locator)?.len())
    }

    // ---- assertions ----

    pub fn assert_strings_equal(&self, actual: &str, expected: &str) -> SuiteResult<()> {
        if actual == expected {
            Ok(())
        } else {
            Err(SuiteError::assertion("strings differ", expected, actual))
        }
    }

    pub fn assert_element_displayed(&mut self, locator: &Locator) -> SuiteResult<()> {
        let element = self.get_element(locator)?;
        if self.driver.is_displayed(&element)? {
            Ok(())
        } else {
            Err(SuiteError::assertion(
                format!("{} displayed", locator),
                "displayed",
                "hidden",
            ))
        }
    }
}
