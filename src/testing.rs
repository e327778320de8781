//! In-memory stand-ins for the element traits in [`crate::dom`].

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::dom::{AttributeSource, Location, SelectionSource, TextSlot, ValueSlot};
use crate::error::PageError;

#[derive(Debug, Default)]
pub struct FakeInput {
    pub value: RefCell<Option<String>>,
}

impl ValueSlot for FakeInput {
    fn set_value(&self, value: &str) {
        *self.value.borrow_mut() = Some(value.to_owned());
    }
}

#[derive(Debug)]
pub struct FakeText {
    text: RefCell<String>,
    pub writes: Cell<usize>,
}

impl FakeText {
    pub fn new(text: &str) -> Self {
        Self { text: RefCell::new(text.to_owned()), writes: Cell::new(0) }
    }

    pub fn current(&self) -> String {
        self.text.borrow().clone()
    }
}

impl TextSlot for FakeText {
    fn text(&self) -> String {
        self.current()
    }

    fn set_text(&self, text: &str) {
        *self.text.borrow_mut() = text.to_owned();
        self.writes.set(self.writes.get() + 1);
    }
}

#[derive(Debug, Default)]
pub struct FakeSelection(pub Option<String>);

impl FakeSelection {
    pub fn empty() -> Self {
        Self(Some(String::new()))
    }

    pub fn with_text(text: &str) -> Self {
        Self(Some(text.to_owned()))
    }
}

impl SelectionSource for FakeSelection {
    fn selected_text(&self) -> Option<String> {
        self.0.clone()
    }
}

#[derive(Debug, Default)]
pub struct FakeLocation {
    pub visits: RefCell<Vec<String>>,
    pub reject: bool,
}

impl FakeLocation {
    pub fn rejecting() -> Self {
        Self { visits: RefCell::new(Vec::new()), reject: true }
    }

    pub fn visits(&self) -> Vec<String> {
        self.visits.borrow().clone()
    }
}

impl Location for FakeLocation {
    fn assign(&self, url: &str) -> Result<(), PageError> {
        if self.reject {
            return Err(PageError::Navigation { url: url.to_owned(), message: "blocked".into() });
        }
        self.visits.borrow_mut().push(url.to_owned());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct FakeElement {
    attributes: HashMap<String, String>,
}

impl FakeElement {
    pub fn with_attribute(name: &str, value: &str) -> Self {
        let mut attributes = HashMap::new();
        attributes.insert(name.to_owned(), value.to_owned());
        Self { attributes }
    }
}

impl AttributeSource for FakeElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }
}
