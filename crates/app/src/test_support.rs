//! In-memory port fakes shared by the unit tests of this crate.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::{Rc, Weak};
use std::time::Duration;

use studsafe_domain::error::StudsafeError;

use crate::ports::{PageDocument, PageElement, PreferenceStore, TaskScheduler};

#[derive(Clone, Default)]
pub struct FakeStore {
    values: Rc<RefCell<HashMap<String, String>>>,
    failing: bool,
}

impl FakeStore {
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn unavailable() -> StudsafeError {
        StudsafeError::Storage(Box::new(std::io::Error::other("storage disabled")))
    }
}

impl PreferenceStore for FakeStore {
    fn load(&self, key: &str) -> Result<Option<String>, StudsafeError> {
        if self.failing {
            return Err(Self::unavailable());
        }
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StudsafeError> {
        if self.failing {
            return Err(Self::unavailable());
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

type ClickHandler = Rc<RefCell<Box<dyn FnMut()>>>;

#[derive(Default)]
struct Node {
    id: Option<String>,
    class: Option<String>,
    is_root: bool,
    attributes: HashMap<String, String>,
    styles: HashMap<String, String>,
    text: String,
    parent: Option<Weak<RefCell<Node>>>,
    children: Vec<FakeElement>,
    handlers: Vec<ClickHandler>,
}

#[derive(Clone, Default)]
pub struct FakeElement(Rc<RefCell<Node>>);

impl FakeElement {
    pub fn with_id(id: &str) -> Self {
        let element = Self::default();
        element.0.borrow_mut().id = Some(id.to_string());
        element
    }

    pub fn with_class(class: &str) -> Self {
        let element = Self::default();
        element.0.borrow_mut().class = Some(class.to_string());
        element
    }

    pub fn append(&self, child: &FakeElement) {
        child.0.borrow_mut().parent = Some(Rc::downgrade(&self.0));
        self.0.borrow_mut().children.push(child.clone());
    }

    pub fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.0.borrow().styles.get(property).cloned()
    }

    pub fn click(&self) {
        let handlers = self.0.borrow().handlers.clone();
        for handler in handlers {
            (handler.borrow_mut())();
        }
    }

    fn matches(&self, selector: &str) -> bool {
        let node = self.0.borrow();
        if let Some(id) = selector.strip_prefix('#') {
            node.id.as_deref() == Some(id)
        } else if let Some(class) = selector.strip_prefix('.') {
            node.class.as_deref() == Some(class)
        } else {
            false
        }
    }

    fn collect(&self, selector: &str, out: &mut Vec<FakeElement>) {
        let children = self.0.borrow().children.clone();
        for child in children {
            if child.matches(selector) {
                out.push(child.clone());
            }
            child.collect(selector, out);
        }
    }

    fn parent(&self) -> Option<Rc<RefCell<Node>>> {
        self.0.borrow().parent.as_ref().and_then(Weak::upgrade)
    }
}

impl PageElement for FakeElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), StudsafeError> {
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn text_content(&self) -> String {
        self.text()
    }

    fn set_text_content(&self, text: &str) {
        self.0.borrow_mut().text = text.to_string();
    }

    fn set_style_property(&self, property: &str, value: &str) -> Result<(), StudsafeError> {
        self.0
            .borrow_mut()
            .styles
            .insert(property.to_string(), value.to_string());
        Ok(())
    }

    fn query_selector(&self, selector: &str) -> Option<Self> {
        let mut found = Vec::new();
        self.collect(selector, &mut found);
        found.into_iter().next()
    }

    fn parent_element(&self) -> Option<Self> {
        self.parent().map(FakeElement)
    }

    fn is_connected(&self) -> bool {
        if self.0.borrow().is_root {
            return true;
        }
        self.parent_element()
            .is_some_and(|parent| parent.is_connected())
    }

    fn remove(&self) {
        let Some(parent) = self.parent() else {
            return;
        };
        parent
            .borrow_mut()
            .children
            .retain(|child| !Rc::ptr_eq(&child.0, &self.0));
        self.0.borrow_mut().parent = None;
    }

    fn on_click(&self, handler: Box<dyn FnMut()>) -> Result<(), StudsafeError> {
        self.0
            .borrow_mut()
            .handlers
            .push(Rc::new(RefCell::new(handler)));
        Ok(())
    }
}

#[derive(Clone)]
pub struct FakeDocument {
    root: FakeElement,
    body: FakeElement,
    ready: Rc<RefCell<Vec<Box<dyn FnOnce()>>>>,
}

impl FakeDocument {
    pub fn new() -> Self {
        let root = FakeElement::default();
        root.0.borrow_mut().is_root = true;
        let body = FakeElement::default();
        root.append(&body);
        Self {
            root,
            body,
            ready: Rc::default(),
        }
    }

    pub fn root(&self) -> FakeElement {
        self.root.clone()
    }

    pub fn body(&self) -> FakeElement {
        self.body.clone()
    }

    pub fn fire_ready(&self) {
        let handlers: Vec<_> = self.ready.borrow_mut().drain(..).collect();
        for handler in handlers {
            handler();
        }
    }
}

impl PageDocument for FakeDocument {
    type Element = FakeElement;

    fn root_element(&self) -> Option<FakeElement> {
        Some(self.root.clone())
    }

    fn element_by_id(&self, id: &str) -> Option<FakeElement> {
        self.root.query_selector(&format!("#{id}"))
    }

    fn query_selector_all(&self, selector: &str) -> Vec<FakeElement> {
        let mut found = Vec::new();
        self.root.collect(selector, &mut found);
        found
    }

    fn on_ready(&self, handler: Box<dyn FnOnce()>) -> Result<(), StudsafeError> {
        self.ready.borrow_mut().push(handler);
        Ok(())
    }
}

type Task = (Duration, Box<dyn FnOnce()>);

/// Runs tasks in scheduling order, ignoring their delays.
#[derive(Clone, Default)]
pub struct FakeScheduler {
    queue: Rc<RefCell<VecDeque<Task>>>,
}

impl FakeScheduler {
    pub fn pending_delays(&self) -> Vec<Duration> {
        self.queue.borrow().iter().map(|(delay, _)| *delay).collect()
    }

    pub fn run_next(&self) {
        let next = self.queue.borrow_mut().pop_front();
        if let Some((_, task)) = next {
            task();
        }
    }
}

impl TaskScheduler for FakeScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        self.queue.borrow_mut().push_back((delay, task));
    }
}
