pub mod position;
pub mod style;
pub mod theme;

pub use position::{ParsePositionError, Position};
pub use style::{ParseStylePropertyError, StyleError, StyleMap, StyleProperty, validate_value};
pub use theme::{DEFAULT_THEME, Theme, ThemeRules, preset};
