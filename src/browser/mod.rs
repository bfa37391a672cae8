pub mod driver;
pub mod locator;
pub mod session;
pub mod wait;
pub mod webdriver;
