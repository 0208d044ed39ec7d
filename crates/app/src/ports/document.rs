//! Document port — the slice of the DOM the page behaviours read and mutate.

use studsafe_domain::error::StudsafeError;

/// A handle to one element. Cloning yields another handle to the same node.
pub trait PageElement: Clone + 'static {
    /// Current value of attribute `name`.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Set attribute `name` to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`StudsafeError::Document`] if the platform rejects the name.
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), StudsafeError>;

    /// Concatenated text of the element and its descendants.
    fn text_content(&self) -> String;

    /// Replace the element's children with a single text node.
    fn set_text_content(&self, text: &str);

    /// Set an inline style property.
    ///
    /// # Errors
    ///
    /// Returns [`StudsafeError::Document`] if the element has no inline style
    /// or the platform rejects the value.
    fn set_style_property(&self, property: &str, value: &str) -> Result<(), StudsafeError>;

    /// First descendant matching `selector`.
    fn query_selector(&self, selector: &str) -> Option<Self>;

    /// Immediate parent element, `None` for the root or a detached node.
    fn parent_element(&self) -> Option<Self>;

    /// Whether the element is still attached to the document.
    fn is_connected(&self) -> bool;

    /// Detach the element from the document. A no-op when already detached.
    fn remove(&self);

    /// Run `handler` every time the element is activated.
    ///
    /// # Errors
    ///
    /// Returns [`StudsafeError::Document`] if the listener cannot be attached.
    fn on_click(&self, handler: Box<dyn FnMut()>) -> Result<(), StudsafeError>;
}

/// The page document.
pub trait PageDocument: Clone + 'static {
    type Element: PageElement;

    /// The `<html>` element.
    fn root_element(&self) -> Option<Self::Element>;

    /// Element with the given `id` attribute.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Every element matching `selector` at the time of the call.
    fn query_selector_all(&self, selector: &str) -> Vec<Self::Element>;

    /// Run `handler` once the document has been parsed.
    ///
    /// If parsing already finished, the handler runs immediately.
    ///
    /// # Errors
    ///
    /// Returns [`StudsafeError::Document`] if the listener cannot be attached.
    fn on_ready(&self, handler: Box<dyn FnOnce()>) -> Result<(), StudsafeError>;
}
