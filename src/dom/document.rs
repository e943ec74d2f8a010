use super::Element;
use std::cell::RefCell;

/// Root of the element tree snackbars are attached to
#[derive(Debug)]
pub struct Document {
    body: Element,
    dismiss_animation: RefCell<Option<String>>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            body: Element::new("body"),
            dismiss_animation: RefCell::new(None),
        }
    }

    /// Document whose stylesheet animates snackbars out, e.g. `"snackbar-out 0.3s"`
    pub fn with_dismiss_animation(animation: impl Into<String>) -> Self {
        let document = Self::new();
        document.set_dismiss_animation(Some(animation.into()));
        document
    }

    pub fn set_dismiss_animation(&self, animation: Option<String>) {
        *self.dismiss_animation.borrow_mut() = animation;
    }

    pub fn dismiss_animation(&self) -> Option<String> {
        self.dismiss_animation.borrow().clone()
    }

    pub fn body(&self) -> &Element {
        &self.body
    }

    pub fn create_element(&self, tag: &str) -> Element {
        Element::new(tag)
    }

    /// First element under the body carrying `class`
    pub fn query_selector_class(&self, class: &str) -> Option<Element> {
        self.body.find_by_class(class)
    }

    pub fn query_selector_all_class(&self, class: &str) -> Vec<Element> {
        self.body.find_all_by_class(class)
    }
}
