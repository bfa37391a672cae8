use tracing::info;

use crate::browser::driver::Driver;
use crate::error::SuiteResult;
use crate::pages::base_page::PageTiming;

/// One browser per scenario: opened on the site before the first case,
/// quit after the last one.
pub struct SuiteFixture<D: Driver> {
    driver: D,
    timing: PageTiming,
}

impl<D: Driver> SuiteFixture<D> {
    /// Maximize the window and open `base_url`.
    pub fn set_up(mut driver: D, base_url: &str, timing: PageTiming) -> SuiteResult<Self> {
        driver.maximize_window()?;
        driver.navigate(base_url)?;
        info!(base_url, "fixture ready");
        Ok(SuiteFixture { driver, timing })
    }

    pub fn driver(&mut self) -> &mut D {
        &mut self.driver
    }

    pub fn timing(&self) -> PageTiming {
        self.timing
    }

    /// Quit the browser, handing the driver back for inspection.
    pub fn tear_down(mut self) -> (D, SuiteResult<()>) {
        let result = self.driver.quit();
        (self.driver, result)
    }
}
