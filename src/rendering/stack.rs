//! Geometry of the stacked and expanded layouts
//!
//! Depth counts the newer snackbars at the same position: the most recent
//! snackbar has depth 0, the one below it depth 1, and so on.

use snackbars_config::SnackbarsConfig;

/// Which layout a position is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Compact pile, each card nudged up, back and shrunk by its depth
    Stacked,
    /// Hover view, cards listed one above another at full size
    Expanded,
}

/// Parameters of the stacked pile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Vertical pixels per level of depth
    pub offset: f64,
    /// Scale lost per level of depth
    pub scale_step: f64,
}

impl Default for Geometry {
    fn default() -> Self {
        Self::from_config(&SnackbarsConfig::default())
    }
}

impl Geometry {
    pub fn from_config(config: &SnackbarsConfig) -> Self {
        Self {
            offset: config.stack_offset,
            scale_step: config.stack_scale_step,
        }
    }
}

/// Placement of one card, rendered as a CSS `transform`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    Stacked { offset_y: f64, depth: usize, scale: f64 },
    Expanded { offset_y: f64 },
}

impl Transform {
    pub fn stacked(depth: usize, geometry: Geometry) -> Self {
        let scale = 1.0 - geometry.scale_step * depth as f64;
        Transform::Stacked {
            offset_y: geometry.offset * depth as f64,
            depth,
            scale: round4(scale),
        }
    }

    /// `height` is the card's own rendered height
    pub fn expanded(depth: usize, height: f64) -> Self {
        Transform::Expanded {
            offset_y: depth as f64 * height,
        }
    }

    /// Distance the card is moved up, in pixels
    pub fn offset_y(&self) -> f64 {
        match *self {
            Transform::Stacked { offset_y, .. } | Transform::Expanded { offset_y } => offset_y,
        }
    }

    /// Distance the card is pushed back along z
    pub fn offset_z(&self) -> f64 {
        match *self {
            Transform::Stacked { depth, .. } => depth as f64,
            Transform::Expanded { .. } => 0.0,
        }
    }

    pub fn scale(&self) -> f64 {
        match *self {
            Transform::Stacked { scale, .. } => scale,
            Transform::Expanded { .. } => 1.0,
        }
    }

    pub fn to_css(&self) -> String {
        match *self {
            Transform::Stacked {
                offset_y,
                depth,
                scale,
            } => format!("translate3d(0, -{}px, -{}px) scale({})", offset_y, depth, scale),
            Transform::Expanded { offset_y } => {
                format!("translate3d(0, -{}px, 0) scale(1)", offset_y)
            }
        }
    }
}

// Keeps `1 - 0.05 * 7` printing as 0.65
fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Depth of the card at `index` in a stack of `len` cards
pub fn depth(index: usize, len: usize) -> usize {
    len.saturating_sub(1).saturating_sub(index)
}

/// Cards buried `max_stack` or more levels deep are hidden
pub fn is_hidden(depth: usize, max_stack: usize) -> bool {
    depth >= max_stack
}

/// CSS `opacity` value for a card
pub fn opacity(hidden: bool) -> &'static str {
    if hidden { "0" } else { "1" }
}
