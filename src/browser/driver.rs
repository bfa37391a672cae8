use crate::browser::locator::Locator;
use crate::error::SuiteResult;

/// Opaque WebDriver element id, valid for the session that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementRef(pub String);

impl ElementRef {
    pub fn id(&self) -> &str {
        &self.0
    }
}

/// The browser primitives page objects are built on.
///
/// `find_element` must return `SuiteError::NoSuchElement` when nothing
/// matches, and element operations must return `SuiteError::StaleElement`
/// for detached elements; explicit waits rely on both.
pub trait Driver {
    fn navigate(&mut self, url: &str) -> SuiteResult<()>;

    fn maximize_window(&mut self) -> SuiteResult<()>;

    fn current_url(&mut self) -> SuiteResult<String>;

    fn title(&mut self) -> SuiteResult<String>;

    fn find_element(&mut self, locator: &Locator) -> SuiteResult<ElementRef>;

    /// Empty when nothing matches.
    fn find_elements(&mut self, locator: &Locator) -> SuiteResult<Vec<ElementRef>>;

    fn click(&mut self, element: &ElementRef) -> SuiteResult<()>;

    fn clear(&mut self, element: &ElementRef) -> SuiteResult<()>;

    fn send_keys(&mut self, element: &ElementRef, text: &str) -> SuiteResult<()>;

    /// Rendered, whitespace-trimmed text of the element.
    fn text(&mut self, element: &ElementRef) -> SuiteResult<String>;

    fn is_displayed(&mut self, element: &ElementRef) -> SuiteResult<bool>;

    fn is_enabled(&mut self, element: &ElementRef) -> SuiteResult<bool>;

    /// End the browser session. Calling it twice is a no-op.
    fn quit(&mut self) -> SuiteResult<()>;
}
