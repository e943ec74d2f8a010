use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Horizontal screen region a snackbar is anchored to
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Left,
    #[default]
    Center,
    Right,
}

impl Position {
    /// Every position, in registry order
    pub const ALL: [Position; 3] = [Position::Left, Position::Center, Position::Right];

    pub const fn as_str(self) -> &'static str {
        match self {
            Position::Left => "left",
            Position::Center => "center",
            Position::Right => "right",
        }
    }

    /// Class identifying the wrapper element of this position
    pub fn wrapper_class(self) -> String {
        format!("snackbars-{}", self.as_str())
    }

    /// Index into per-position tables
    pub const fn index(self) -> usize {
        match self {
            Position::Left => 0,
            Position::Center => 1,
            Position::Right => 2,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePositionError(pub String);

impl fmt::Display for ParsePositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown snackbar position: {:?}", self.0)
    }
}

impl std::error::Error for ParsePositionError {}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Position::Left),
            "center" => Ok(Position::Center),
            "right" => Ok(Position::Right),
            other => Err(ParsePositionError(other.to_string())),
        }
    }
}
