use crate::constants::WRAPPER_CLASS;
use crate::dom::{Document, Element};
use snackbars_util::Position;

/// Find the wrapper for `position`, creating and attaching it if missing.
///
/// Always queries the document first, so a wrapper removed by someone else
/// is recreated rather than reused.
pub fn get_wrapper(document: &Document, position: Position) -> Element {
    let class = position.wrapper_class();
    if let Some(wrapper) = document.query_selector_class(&class) {
        return wrapper;
    }

    tracing::trace!("Creating snackbar wrapper for {}", position);
    let wrapper = document.create_element("div");
    wrapper.set_class_name(&format!("{} {}", WRAPPER_CLASS, class));
    document.body().append_child(&wrapper);
    wrapper
}
