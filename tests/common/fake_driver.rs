use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use toolshop_e2e::browser::driver::{Driver, ElementRef};
use toolshop_e2e::browser::locator::Locator;
use toolshop_e2e::error::{SuiteError, SuiteResult};

/// One fake DOM node.
#[derive(Debug, Clone)]
pub struct FakeElement {
    pub text: String,
    pub value: String,
    pub displayed: bool,
    pub enabled: bool,
    /// Lookups left before the node detaches itself (toasts)
    pub ttl: Option<u32>,
}

impl FakeElement {
    pub fn visible(text: &str) -> Self {
        FakeElement {
            text: text.to_string(),
            value: String::new(),
            displayed: true,
            enabled: true,
            ttl: None,
        }
    }

    pub fn hidden(text: &str) -> Self {
        FakeElement {
            displayed: false,
            ..FakeElement::visible(text)
        }
    }

    pub fn disabled(text: &str) -> Self {
        FakeElement {
            enabled: false,
            ..FakeElement::visible(text)
        }
    }

    pub fn expiring(text: &str, lookups: u32) -> Self {
        FakeElement {
            ttl: Some(lookups),
            ..FakeElement::visible(text)
        }
    }
}

/// Locator-addressed page content.
#[derive(Default)]
pub struct FakeDom {
    pub url: String,
    pub title: String,
    elements: HashMap<Locator, Vec<FakeElement>>,
}

impl FakeDom {
    pub fn put(&mut self, locator: Locator, element: FakeElement) {
        self.elements.insert(locator, vec![element]);
    }

    pub fn put_many(&mut self, locator: Locator, count: usize) {
        self.elements
            .insert(locator, vec![FakeElement::visible(""); count]);
    }

    pub fn remove(&mut self, locator: &Locator) {
        self.elements.remove(locator);
    }

    pub fn get(&self, locator: &Locator) -> Option<&FakeElement> {
        self.elements.get(locator).and_then(|v| v.first())
    }

    pub fn get_mut(&mut self, locator: &Locator) -> Option<&mut FakeElement> {
        self.elements.get_mut(locator).and_then(|v| v.first_mut())
    }

    pub fn set_text(&mut self, locator: &Locator, text: &str) {
        if let Some(el) = self.get_mut(locator) {
            el.text = text.to_string();
        }
    }

    pub fn value_of(&self, locator: &Locator) -> String {
        self.get(locator).map(|e| e.value.clone()).unwrap_or_default()
    }

    pub fn count(&self, locator: &Locator) -> usize {
        self.elements.get(locator).map_or(0, Vec::len)
    }
}

type ClickHandler = Box<dyn FnMut(&mut FakeDom)>;

#[derive(Default)]
pub struct FakeState {
    pub dom: FakeDom,
    /// Every command received, in order
    pub log: Vec<String>,
    pub quit_calls: usize,
    /// Command name that fails with a WebDriver error
    pub fail_command: Option<String>,
    handlers: HashMap<Locator, ClickHandler>,
    refs: HashMap<String, (Locator, usize)>,
    next_ref: usize,
}

/// Scripted in-memory [`Driver`]. Clones share state, so a test can keep a
/// handle after giving the driver away.
#[derive(Clone, Default)]
pub struct FakeDriver {
    state: Rc<RefCell<FakeState>>,
}

impl FakeDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dom(&self, f: impl FnOnce(&mut FakeDom)) {
        f(&mut self.state.borrow_mut().dom);
    }

    pub fn on_click(&self, locator: Locator, handler: impl FnMut(&mut FakeDom) + 'static) {
        self.state
            .borrow_mut()
            .handlers
            .insert(locator, Box::new(handler));
    }

    pub fn fail_command(&self, command: &str) {
        self.state.borrow_mut().fail_command = Some(command.to_string());
    }

    pub fn log(&self) -> Vec<String> {
        self.state.borrow().log.clone()
    }

    pub fn quit_calls(&self) -> usize {
        self.state.borrow().quit_calls
    }

    pub fn value_of(&self, locator: &Locator) -> String {
        self.state.borrow().dom.value_of(locator)
    }

    fn record(&self, command: &str, entry: String) -> SuiteResult<()> {
        let mut state = self.state.borrow_mut();
        state.log.push(entry);
        if state.fail_command.as_deref() == Some(command) {
            return Err(SuiteError::WebDriver {
                command: command.to_string(),
                error: "unknown error".into(),
                message: "scripted failure".into(),
            });
        }
        Ok(())
    }

    fn resolve(&self, element: &ElementRef) -> SuiteResult<(Locator, usize)> {
        let state = self.state.borrow();
        let (locator, index) = state
            .refs
            .get(element.id())
            .copied()
            .ok_or_else(|| SuiteError::StaleElement(element.id().to_string()))?;
        if index < state.dom.count(&locator) {
            Ok((locator, index))
        } else {
            Err(SuiteError::StaleElement(element.id().to_string()))
        }
    }

    fn with_element<T>(
        &self,
        element: &ElementRef,
        f: impl FnOnce(&mut FakeElement) -> T,
    ) -> SuiteResult<T> {
        let (locator, index) = self.resolve(element)?;
        let mut state = self.state.borrow_mut();
        let nodes = state
            .dom
            .elements
            .get_mut(&locator)
            .ok_or_else(|| SuiteError::StaleElement(element.id().to_string()))?;
        Ok(f(&mut nodes[index]))
    }

    fn issue_ref(&self, locator: Locator, index: usize) -> ElementRef {
        let mut state = self.state.borrow_mut();
        state.next_ref += 1;
        let id = format!("el-{}", state.next_ref);
        state.refs.insert(id.clone(), (locator, index));
        ElementRef(id)
    }

    /// Age expiring nodes on lookup, dropping the ones whose time is up.
    fn tick(&self, locator: &Locator) {
        let mut state = self.state.borrow_mut();
        let expired = match state.dom.elements.get_mut(locator) {
            Some(nodes) => {
                for node in nodes.iter_mut() {
                    if let Some(ttl) = node.ttl.as_mut() {
                        *ttl = ttl.saturating_sub(1);
                    }
                }
                nodes.iter().any(|n| n.ttl == Some(0))
            }
            None => false,
        };
        if expired {
            state.dom.elements.remove(locator);
        }
    }
}

impl Driver for FakeDriver {
    fn navigate(&mut self, url: &str) -> SuiteResult<()> {
        self.record("navigate", format!("navigate {}", url))?;
        self.state.borrow_mut().dom.url = url.to_string();
        Ok(())
    }

    fn maximize_window(&mut self) -> SuiteResult<()> {
        self.record("maximize_window", "maximize".into())
    }

    fn current_url(&mut self) -> SuiteResult<String> {
        self.record("current_url", "current_url".into())?;
        Ok(self.state.borrow().dom.url.clone())
    }

    fn title(&mut self) -> SuiteResult<String> {
        Ok(self.state.borrow().dom.title.clone())
    }

    fn find_element(&mut self, locator: &Locator) -> SuiteResult<ElementRef> {
        self.record("find_element", format!("find {}", locator))?;
        self.tick(locator);
        if self.state.borrow().dom.count(locator) == 0 {
            return Err(SuiteError::NoSuchElement {
                locator: locator.to_string(),
            });
        }
        Ok(self.issue_ref(*locator, 0))
    }

    fn find_elements(&mut self, locator: &Locator) -> SuiteResult<Vec<ElementRef>> {
        self.record("find_elements", format!("find all {}", locator))?;
        let count = self.state.borrow().dom.count(locator);
        Ok((0..count).map(|i| self.issue_ref(*locator, i)).collect())
    }

    fn click(&mut self, element: &ElementRef) -> SuiteResult<()> {
        let (locator, _) = self.resolve(element)?;
        self.record("click", format!("click {}", locator))?;

        let interactable = self.with_element(element, |e| e.displayed && e.enabled)?;
        if !interactable {
            return Err(SuiteError::WebDriver {
                command: "click".into(),
                error: "element not interactable".into(),
                message: locator.to_string(),
            });
        }

        let handler = self.state.borrow_mut().handlers.remove(&locator);
        if let Some(mut handler) = handler {
            handler(&mut self.state.borrow_mut().dom);
            self.state.borrow_mut().handlers.insert(locator, handler);
        }
        Ok(())
    }

    fn clear(&mut self, element: &ElementRef) -> SuiteResult<()> {
        let (locator, _) = self.resolve(element)?;
        self.record("clear", format!("clear {}", locator))?;
        self.with_element(element, |e| e.value.clear())
    }

    fn send_keys(&mut self, element: &ElementRef, text: &str) -> SuiteResult<()> {
        let (locator, _) = self.resolve(element)?;
        self.record("send_keys", format!("type {} <- {}", locator, text))?;
        self.with_element(element, |e| e.value.push_str(text))
    }

    fn text(&mut self, element: &ElementRef) -> SuiteResult<String> {
        self.with_element(element, |e| e.text.trim().to_string())
    }

    fn is_displayed(&mut self, element: &ElementRef) -> SuiteResult<bool> {
        self.with_element(element, |e| e.displayed)
    }

    fn is_enabled(&mut self, element: &ElementRef) -> SuiteResult<bool> {
        self.with_element(element, |e| e.enabled)
    }

    fn quit(&mut self) -> SuiteResult<()> {
        self.state.borrow_mut().quit_calls += 1;
        self.record("quit", "quit".into())
    }
}
