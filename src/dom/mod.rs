//! Headless document surface
//!
//! Snackbars render into this tree. A host reads it back to paint, and
//! feeds pointer events, measured heights and animation ends into it.

mod document;
mod element;

pub use document::Document;
pub use element::{Element, EventKind};
