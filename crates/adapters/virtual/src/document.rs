//! Virtual element tree implementing the document ports.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

use studsafe_app::ports::{PageDocument, PageElement};
use studsafe_domain::error::StudsafeError;

use crate::error::VirtualError;
use crate::selector::Selector;

type ClickListener = Rc<RefCell<Box<dyn FnMut()>>>;

#[derive(Default)]
struct Node {
    tag: String,
    attributes: BTreeMap<String, String>,
    style: BTreeMap<String, String>,
    text: String,
    parent: Weak<RefCell<Node>>,
    children: Vec<VirtualElement>,
    listeners: Vec<ClickListener>,
    is_document_root: bool,
}

/// Handle to a node in a virtual tree. Clones point at the same node.
#[derive(Clone)]
pub struct VirtualElement {
    node: Rc<RefCell<Node>>,
}

impl fmt::Debug for VirtualElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.node.borrow();
        f.debug_struct("VirtualElement")
            .field("tag", &node.tag)
            .field("attributes", &node.attributes)
            .field("children", &node.children.len())
            .finish_non_exhaustive()
    }
}

impl VirtualElement {
    /// Create a detached element.
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            node: Rc::new(RefCell::new(Node {
                tag: tag.to_ascii_lowercase(),
                ..Node::default()
            })),
        }
    }

    /// Set the `id` attribute.
    #[must_use]
    pub fn with_id(self, id: &str) -> Self {
        self.with_attribute("id", id)
    }

    /// Add a class to the `class` attribute.
    #[must_use]
    pub fn with_class(self, class: &str) -> Self {
        {
            let mut node = self.node.borrow_mut();
            let classes = node.attributes.entry("class".to_string()).or_default();
            if !classes.is_empty() {
                classes.push(' ');
            }
            classes.push_str(class);
        }
        self
    }

    /// Set an arbitrary attribute.
    #[must_use]
    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.node
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
        self
    }

    /// Set the text content.
    #[must_use]
    pub fn with_text(self, text: &str) -> Self {
        self.node.borrow_mut().text = text.to_string();
        self
    }

    /// Append `child`, moving it out of its current parent first.
    pub fn append_child(&self, child: &VirtualElement) {
        child.remove();
        child.node.borrow_mut().parent = Rc::downgrade(&self.node);
        self.node.borrow_mut().children.push(child.clone());
    }

    /// Lowercase tag name.
    #[must_use]
    pub fn tag(&self) -> String {
        self.node.borrow().tag.clone()
    }

    /// Current text content.
    #[must_use]
    pub fn text(&self) -> String {
        self.node.borrow().text.clone()
    }

    /// Inline style property, if set.
    #[must_use]
    pub fn style(&self, property: &str) -> Option<String> {
        self.node.borrow().style.get(property).cloned()
    }

    /// Number of direct children.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.node.borrow().children.len()
    }

    /// Simulate a user activation, running every click listener.
    pub fn click(&self) {
        let listeners = self.node.borrow().listeners.clone();
        for listener in listeners {
            (listener.borrow_mut())();
        }
    }

    fn matches(&self, selector: &Selector) -> bool {
        let node = self.node.borrow();
        selector.matches(
            &node.tag,
            node.attributes.get("id").map(String::as_str),
            node.attributes.get("class").map(String::as_str),
        )
    }

    fn parent(&self) -> Option<VirtualElement> {
        self.node
            .borrow()
            .parent
            .upgrade()
            .map(|node| VirtualElement { node })
    }

    /// Descendants in document order, excluding `self`.
    fn descendants(&self) -> Vec<VirtualElement> {
        let mut out = Vec::new();
        let mut stack: Vec<VirtualElement> =
            self.node.borrow().children.iter().rev().cloned().collect();
        while let Some(element) = stack.pop() {
            stack.extend(element.node.borrow().children.iter().rev().cloned());
            out.push(element);
        }
        out
    }

    fn find_all(&self, selector: &str) -> Vec<VirtualElement> {
        let Some(selector) = Selector::parse(selector) else {
            tracing::debug!(selector, "unsupported selector");
            return Vec::new();
        };
        self.descendants()
            .into_iter()
            .filter(|element| element.matches(&selector))
            .collect()
    }
}

impl PageElement for VirtualElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.node.borrow().attributes.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), StudsafeError> {
        if name.is_empty() {
            return Err(VirtualError::EmptyName("attribute").into());
        }
        self.node
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn text_content(&self) -> String {
        let node = self.node.borrow();
        let mut text = node.text.clone();
        for child in &node.children {
            text.push_str(&child.text_content());
        }
        text
    }

    fn set_text_content(&self, text: &str) {
        let children = {
            let mut node = self.node.borrow_mut();
            node.text = text.to_string();
            std::mem::take(&mut node.children)
        };
        for child in children {
            child.node.borrow_mut().parent = Weak::new();
        }
    }

    fn set_style_property(&self, property: &str, value: &str) -> Result<(), StudsafeError> {
        if property.is_empty() {
            return Err(VirtualError::EmptyName("style").into());
        }
        let mut node = self.node.borrow_mut();
        if value.is_empty() {
            node.style.remove(property);
        } else {
            node.style.insert(property.to_string(), value.to_string());
        }
        Ok(())
    }

    fn query_selector(&self, selector: &str) -> Option<Self> {
        self.find_all(selector).into_iter().next()
    }

    fn parent_element(&self) -> Option<Self> {
        self.parent()
    }

    fn is_connected(&self) -> bool {
        let mut current = Some(self.clone());
        while let Some(element) = current {
            if element.node.borrow().is_document_root {
                return true;
            }
            current = element.parent();
        }
        false
    }

    fn remove(&self) {
        let Some(parent) = self.parent() else {
            return;
        };
        parent
            .node
            .borrow_mut()
            .children
            .retain(|child| !Rc::ptr_eq(&child.node, &self.node));
        self.node.borrow_mut().parent = Weak::new();
    }

    fn on_click(&self, handler: Box<dyn FnMut()>) -> Result<(), StudsafeError> {
        self.node
            .borrow_mut()
            .listeners
            .push(Rc::new(RefCell::new(handler)));
        Ok(())
    }
}

struct DocumentState {
    root: VirtualElement,
    body: VirtualElement,
    ready: Cell<bool>,
    ready_handlers: RefCell<Vec<Box<dyn FnOnce()>>>,
}

/// A virtual document: `<html>` with a `<head>` and a `<body>`.
///
/// Starts in the loading state; [`finish_loading`](Self::finish_loading)
/// plays the part of `DOMContentLoaded`.
#[derive(Clone)]
pub struct VirtualDocument {
    state: Rc<DocumentState>,
}

impl Default for VirtualDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualDocument {
    /// An empty, still-loading document.
    #[must_use]
    pub fn new() -> Self {
        let root = VirtualElement::new("html");
        root.node.borrow_mut().is_document_root = true;
        let head = VirtualElement::new("head");
        let body = VirtualElement::new("body");
        root.append_child(&head);
        root.append_child(&body);
        Self {
            state: Rc::new(DocumentState {
                root,
                body,
                ready: Cell::new(false),
                ready_handlers: RefCell::new(Vec::new()),
            }),
        }
    }

    /// The `<html>` element.
    #[must_use]
    pub fn root(&self) -> VirtualElement {
        self.state.root.clone()
    }

    /// The `<body>` element.
    #[must_use]
    pub fn body(&self) -> VirtualElement {
        self.state.body.clone()
    }

    /// Whether [`finish_loading`](Self::finish_loading) has run.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.state.ready.get()
    }

    /// Mark the document parsed and run the pending ready handlers in
    /// registration order. Returns how many ran; zero on a second call.
    pub fn finish_loading(&self) -> usize {
        if self.state.ready.replace(true) {
            return 0;
        }
        let handlers = std::mem::take(&mut *self.state.ready_handlers.borrow_mut());
        let count = handlers.len();
        for handler in handlers {
            handler();
        }
        count
    }
}

impl PageDocument for VirtualDocument {
    type Element = VirtualElement;

    fn root_element(&self) -> Option<VirtualElement> {
        Some(self.root())
    }

    fn element_by_id(&self, id: &str) -> Option<VirtualElement> {
        self.state
            .root
            .descendants()
            .into_iter()
            .find(|element| element.attribute("id").as_deref() == Some(id))
    }

    fn query_selector_all(&self, selector: &str) -> Vec<VirtualElement> {
        let Some(parsed) = Selector::parse(selector) else {
            tracing::debug!(selector, "unsupported selector");
            return Vec::new();
        };
        let root = self.root();
        let mut found: Vec<VirtualElement> = Vec::new();
        if root.matches(&parsed) {
            found.push(root.clone());
        }
        found.extend(root.find_all(selector));
        found
    }

    fn on_ready(&self, handler: Box<dyn FnOnce()>) -> Result<(), StudsafeError> {
        if self.is_ready() {
            handler();
        } else {
            self.state.ready_handlers.borrow_mut().push(handler);
        }
        Ok(())
    }
}
