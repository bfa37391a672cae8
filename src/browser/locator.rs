use std::fmt;

use thirtyfour::By;

/// How a page finds one of its elements. Pages keep these as `const`s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locator {
    Id(&'static str),
    Css(&'static str),
    XPath(&'static str),
}

impl Locator {
    /// The `thirtyfour` selector for this locator.
    pub fn to_by(&self) -> By {
        match *self {
            Locator::Id(id) => By::Id(id),
            Locator::Css(css) => By::Css(css),
            Locator::XPath(xpath) => By::XPath(xpath),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Id(v) => write!(f, "By.id: {}", v),
            Locator::Css(v) => write!(f, "By.cssSelector: {}", v),
            Locator::XPath(v) => write!(f, "By.xpath: {}", v),
        }
    }
}
