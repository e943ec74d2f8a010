use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};
use tokio::sync::oneshot;

/// Events a host can deliver to an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    MouseEnter,
    MouseLeave,
    AnimationEnd,
    TransitionEnd,
}

type Callback = Rc<dyn Fn(&Element)>;

struct Listener {
    kind: EventKind,
    once: bool,
    callback: Callback,
}

#[derive(Default)]
struct Node {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    style: BTreeMap<String, String>,
    text: String,
    children: Vec<Element>,
    parent: Weak<RefCell<Node>>,
    client_height: f64,
    listeners: Vec<Listener>,
}

/// Handle to a node of the in-memory document
///
/// Cloning yields another handle to the same node; equality is identity.
#[derive(Clone)]
pub struct Element(Rc<RefCell<Node>>);

impl Element {
    pub fn new(tag: &str) -> Self {
        Element(Rc::new(RefCell::new(Node {
            tag: tag.to_string(),
            ..Default::default()
        })))
    }

    pub fn tag(&self) -> String {
        self.0.borrow().tag.clone()
    }

    pub fn class_name(&self) -> String {
        self.0.borrow().classes.join(" ")
    }

    /// Replace the class list with the whitespace separated `classes`
    pub fn set_class_name(&self, classes: &str) {
        self.0.borrow_mut().classes = classes.split_whitespace().map(str::to_string).collect();
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    pub fn set_attribute(&self, name: &str, value: &str) {
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    /// Inline style value, `None` when unset
    pub fn style(&self, property: &str) -> Option<String> {
        self.0.borrow().style.get(property).cloned()
    }

    pub fn set_style(&self, property: &str, value: &str) {
        self.0
            .borrow_mut()
            .style
            .insert(property.to_string(), value.to_string());
    }

    pub fn remove_style(&self, property: &str) {
        self.0.borrow_mut().style.remove(property);
    }

    pub fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    pub fn set_text(&self, text: &str) {
        self.0.borrow_mut().text = text.to_string();
    }

    /// Concatenated text of this element and all descendants, depth first
    pub fn text_content(&self) -> String {
        let node = self.0.borrow();
        let mut out = node.text.clone();
        for child in &node.children {
            out.push_str(&child.text_content());
        }
        out
    }

    /// Append `child`, detaching it from any previous parent first
    pub fn append_child(&self, child: &Element) {
        if let Some(previous) = child.parent() {
            previous.remove_child(child);
        }
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        self.0.borrow_mut().children.push(child.clone());
    }

    /// Detach `child`; returns false when it is not a child of this element
    pub fn remove_child(&self, child: &Element) -> bool {
        let removed = {
            let mut node = self.0.borrow_mut();
            match node.children.iter().position(|c| c == child) {
                Some(index) => {
                    node.children.remove(index);
                    true
                }
                None => false,
            }
        };
        if removed {
            child.0.borrow_mut().parent = Weak::new();
        }
        removed
    }

    pub fn children(&self) -> Vec<Element> {
        self.0.borrow().children.clone()
    }

    pub fn parent(&self) -> Option<Element> {
        self.0.borrow().parent.upgrade().map(Element)
    }

    pub fn is_connected_to(&self, ancestor: &Element) -> bool {
        let mut current = self.parent();
        while let Some(node) = current {
            if &node == ancestor {
                return true;
            }
            current = node.parent();
        }
        false
    }

    /// First descendant (depth first, excluding self) carrying `class`
    pub fn find_by_class(&self, class: &str) -> Option<Element> {
        for child in self.children() {
            if child.has_class(class) {
                return Some(child);
            }
            if let Some(found) = child.find_by_class(class) {
                return Some(found);
            }
        }
        None
    }

    /// All descendants carrying `class`, in document order
    pub fn find_all_by_class(&self, class: &str) -> Vec<Element> {
        let mut found = Vec::new();
        for child in self.children() {
            if child.has_class(class) {
                found.push(child.clone());
            }
            found.extend(child.find_all_by_class(class));
        }
        found
    }

    /// Rendered height as last reported by the host
    pub fn client_height(&self) -> f64 {
        self.0.borrow().client_height
    }

    pub fn set_client_height(&self, height: f64) {
        self.0.borrow_mut().client_height = height;
    }

    pub fn add_event_listener(&self, kind: EventKind, callback: impl Fn(&Element) + 'static) {
        self.push_listener(kind, false, Rc::new(callback));
    }

    fn push_listener(&self, kind: EventKind, once: bool, callback: Callback) {
        self.0.borrow_mut().listeners.push(Listener {
            kind,
            once,
            callback,
        });
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.0
            .borrow()
            .listeners
            .iter()
            .filter(|l| l.kind == kind)
            .count()
    }

    /// Run every listener registered for `kind`; returns how many ran.
    ///
    /// Listeners are collected before any runs, so a callback may freely
    /// touch this element.
    pub fn dispatch(&self, kind: EventKind) -> usize {
        let callbacks: Vec<Callback> = {
            let mut node = self.0.borrow_mut();
            let callbacks = node
                .listeners
                .iter()
                .filter(|l| l.kind == kind)
                .map(|l| l.callback.clone())
                .collect();
            node.listeners.retain(|l| !(l.once && l.kind == kind));
            callbacks
        };
        for callback in &callbacks {
            callback(self);
        }
        callbacks.len()
    }

    /// Resolves the first time `kind` is dispatched after this call
    pub fn once(&self, kind: EventKind) -> oneshot::Receiver<()> {
        let (tx, rx) = oneshot::channel();
        let tx = RefCell::new(Some(tx));
        self.push_listener(
            kind,
            true,
            Rc::new(move |_: &Element| {
                if let Some(tx) = tx.borrow_mut().take() {
                    _ = tx.send(());
                }
            }),
        );
        rx
    }

    /// End event of the animation or transition currently set on this
    /// element, if any
    pub fn animation_event(&self) -> Option<EventKind> {
        let node = self.0.borrow();
        let active = |property: &str| {
            node.style
                .get(property)
                .is_some_and(|v| !v.trim().is_empty() && v.trim() != "none")
        };
        if active("animation") {
            Some(EventKind::AnimationEnd)
        } else if active("transition") {
            Some(EventKind::TransitionEnd)
        } else {
            None
        }
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Element {}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.0.borrow();
        f.debug_struct("Element")
            .field("tag", &node.tag)
            .field("classes", &node.classes)
            .field("children", &node.children.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_identity_equality() {
        let a = Element::new("div");
        let b = Element::new("div");
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn test_class_list() {
        let el = Element::new("div");
        el.set_class_name("snackbars  snackbars-left");
        assert!(el.has_class("snackbars"));
        assert!(el.has_class("snackbars-left"));
        assert!(!el.has_class("snackbars-right"));
        assert_eq!(el.class_name(), "snackbars snackbars-left");
    }

    #[test]
    fn test_append_and_remove_child() {
        let parent = Element::new("div");
        let child = Element::new("span");
        parent.append_child(&child);
        assert_eq!(parent.children(), vec![child.clone()]);
        assert_eq!(child.parent(), Some(parent.clone()));

        assert!(parent.remove_child(&child));
        assert!(parent.children().is_empty());
        assert_eq!(child.parent(), None);
        assert!(!parent.remove_child(&child));
    }

    #[test]
    fn test_append_moves_between_parents() {
        let first = Element::new("div");
        let second = Element::new("div");
        let child = Element::new("span");
        first.append_child(&child);
        second.append_child(&child);
        assert!(first.children().is_empty());
        assert_eq!(second.children().len(), 1);
    }

    #[test]
    fn test_find_by_class_depth_first() {
        let root = Element::new("body");
        let outer = Element::new("div");
        let inner = Element::new("div");
        inner.set_class_name("target");
        outer.append_child(&inner);
        root.append_child(&outer);

        assert_eq!(root.find_by_class("target"), Some(inner.clone()));
        assert!(inner.is_connected_to(&root));
        assert_eq!(root.find_by_class("missing"), None);
        assert_eq!(root.find_all_by_class("target"), vec![inner]);
    }

    #[test]
    fn test_text_content_concatenates() {
        let root = Element::new("div");
        let a = Element::new("div");
        a.set_text("Saved");
        let b = Element::new("button");
        b.set_text("undo");
        root.append_child(&a);
        root.append_child(&b);
        assert_eq!(root.text_content(), "Savedundo");
    }

    #[test]
    fn test_dispatch_runs_matching_listeners() {
        let el = Element::new("button");
        let clicks = Rc::new(Cell::new(0));
        let counter = clicks.clone();
        el.add_event_listener(EventKind::Click, move |_| counter.set(counter.get() + 1));

        assert_eq!(el.dispatch(EventKind::Click), 1);
        assert_eq!(el.dispatch(EventKind::Click), 1);
        assert_eq!(el.dispatch(EventKind::MouseEnter), 0);
        assert_eq!(clicks.get(), 2);
    }

    #[test]
    fn test_listener_may_mutate_element() {
        let el = Element::new("div");
        el.add_event_listener(EventKind::MouseEnter, |el| el.set_style("opacity", "1"));
        el.dispatch(EventKind::MouseEnter);
        assert_eq!(el.style("opacity").as_deref(), Some("1"));
    }

    #[test]
    fn test_once_fires_a_single_time() {
        let el = Element::new("div");
        let mut rx = el.once(EventKind::AnimationEnd);
        assert_eq!(el.listener_count(EventKind::AnimationEnd), 1);

        assert_eq!(el.dispatch(EventKind::AnimationEnd), 1);
        assert_eq!(rx.try_recv(), Ok(()));
        assert_eq!(el.listener_count(EventKind::AnimationEnd), 0);
        assert_eq!(el.dispatch(EventKind::AnimationEnd), 0);
    }

    #[test]
    fn test_animation_event_detection() {
        let el = Element::new("div");
        assert_eq!(el.animation_event(), None);

        el.set_style("transition", "opacity 0.3s");
        assert_eq!(el.animation_event(), Some(EventKind::TransitionEnd));

        el.set_style("animation", "snackbar-out 0.3s");
        assert_eq!(el.animation_event(), Some(EventKind::AnimationEnd));

        el.set_style("animation", "none");
        el.remove_style("transition");
        assert_eq!(el.animation_event(), None);
    }
}
