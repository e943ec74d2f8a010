// Constants module for snackbars
// Centralizes class names and attribute values shared by the renderer

// ============================================================================
// Element Class Names
// ============================================================================

/// Class carried by every position wrapper
pub(crate) const WRAPPER_CLASS: &str = "snackbars";

/// Class of a snackbar root element
pub(crate) const SNACKBAR_CLASS: &str = "snackbar";

/// Class of the colored box inside a snackbar
pub(crate) const CONTAINER_CLASS: &str = "snackbar--container";

/// Class of the message text element
pub(crate) const TEXT_CLASS: &str = "snackbar--text";

/// Class of action buttons
pub(crate) const BUTTON_CLASS: &str = "snackbar--button";

// ============================================================================
// Accessibility Attributes
// ============================================================================

pub(crate) const ARIA_LIVE: &str = "aria-live";
pub(crate) const ARIA_ATOMIC: &str = "aria-atomic";
pub(crate) const ARIA_HIDDEN: &str = "aria-hidden";

// ============================================================================
// Actions
// ============================================================================

/// Label of the action added when the caller supplies none
pub(crate) const DEFAULT_ACTION_TEXT: &str = "dismiss";
