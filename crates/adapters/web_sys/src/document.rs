//! DOM implementation of the document ports.

use studsafe_app::ports::{PageDocument, PageElement};
use studsafe_domain::error::StudsafeError;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, HtmlElement};

use crate::error::WebError;

/// Handle to a live DOM element.
#[derive(Debug, Clone, PartialEq)]
pub struct WebElement {
    element: Element,
}

impl WebElement {
    #[must_use]
    pub fn new(element: Element) -> Self {
        Self { element }
    }
}

impl PageElement for WebElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.element.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), StudsafeError> {
        self.element
            .set_attribute(name, value)
            .map_err(|err| WebError::dom(&err).into())
    }

    fn text_content(&self) -> String {
        self.element.text_content().unwrap_or_default()
    }

    fn set_text_content(&self, text: &str) {
        self.element.set_text_content(Some(text));
    }

    fn set_style_property(&self, property: &str, value: &str) -> Result<(), StudsafeError> {
        let html = self
            .element
            .dyn_ref::<HtmlElement>()
            .ok_or(WebError::NotHtmlElement)?;
        html.style()
            .set_property(property, value)
            .map_err(|err| WebError::dom(&err).into())
    }

    fn query_selector(&self, selector: &str) -> Option<Self> {
        match self.element.query_selector(selector) {
            Ok(found) => found.map(Self::new),
            Err(err) => {
                tracing::warn!(selector, error = %WebError::dom(&err), "invalid selector");
                None
            }
        }
    }

    fn parent_element(&self) -> Option<Self> {
        self.element.parent_element().map(Self::new)
    }

    fn is_connected(&self) -> bool {
        self.element.is_connected()
    }

    fn remove(&self) {
        self.element.remove();
    }

    fn on_click(&self, handler: Box<dyn FnMut()>) -> Result<(), StudsafeError> {
        let listener = Closure::wrap(handler);
        self.element
            .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
            .map_err(|err| WebError::dom(&err))?;
        // The listener lives as long as the page.
        listener.forget();
        Ok(())
    }
}

/// Handle to the page's `document`.
#[derive(Debug, Clone)]
pub struct WebDocument {
    document: Document,
}

impl WebDocument {
    /// The document of the global window.
    ///
    /// # Errors
    ///
    /// Returns [`WebError::NoWindow`] outside a browser main thread, or
    /// [`WebError::NoDocument`] if the window has no document.
    pub fn current() -> Result<Self, WebError> {
        let window = web_sys::window().ok_or(WebError::NoWindow)?;
        let document = window.document().ok_or(WebError::NoDocument)?;
        Ok(Self { document })
    }

    fn is_loading(&self) -> bool {
        self.document.ready_state() == "loading"
    }
}

impl PageDocument for WebDocument {
    type Element = WebElement;

    fn root_element(&self) -> Option<WebElement> {
        self.document.document_element().map(WebElement::new)
    }

    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        self.document.get_element_by_id(id).map(WebElement::new)
    }

    fn query_selector_all(&self, selector: &str) -> Vec<WebElement> {
        let nodes = match self.document.query_selector_all(selector) {
            Ok(nodes) => nodes,
            Err(err) => {
                tracing::warn!(selector, error = %WebError::dom(&err), "invalid selector");
                return Vec::new();
            }
        };
        (0..nodes.length())
            .filter_map(|index| nodes.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(WebElement::new)
            .collect()
    }

    fn on_ready(&self, handler: Box<dyn FnOnce()>) -> Result<(), StudsafeError> {
        if !self.is_loading() {
            handler();
            return Ok(());
        }
        let listener = Closure::once_into_js(move || handler());
        self.document
            .add_event_listener_with_callback("DOMContentLoaded", listener.unchecked_ref())
            .map_err(|err| WebError::dom(&err).into())
    }
}
