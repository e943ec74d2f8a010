//! Typed inline style overrides for action buttons
//!
//! Callers may only override a fixed set of properties, and every value is
//! checked before it reaches an element. Values that could break out of a
//! single declaration (`;`, braces, angle brackets) or pull in external
//! content are rejected.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::{fmt, str::FromStr};

static FORBIDDEN_VALUE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)[;{}<>\\]|expression\s*\(|url\s*\(|javascript:")
        .expect("static style regex is valid")
});

/// Style properties an action may override
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleProperty {
    Color,
    BackgroundColor,
    BorderColor,
    BorderRadius,
    FontFamily,
    FontSize,
    FontWeight,
    LetterSpacing,
    Margin,
    Padding,
    TextDecoration,
    TextTransform,
}

impl StyleProperty {
    pub const ALL: [StyleProperty; 12] = [
        StyleProperty::Color,
        StyleProperty::BackgroundColor,
        StyleProperty::BorderColor,
        StyleProperty::BorderRadius,
        StyleProperty::FontFamily,
        StyleProperty::FontSize,
        StyleProperty::FontWeight,
        StyleProperty::LetterSpacing,
        StyleProperty::Margin,
        StyleProperty::Padding,
        StyleProperty::TextDecoration,
        StyleProperty::TextTransform,
    ];

    /// CSS property name, kebab-case
    pub const fn css_name(self) -> &'static str {
        match self {
            StyleProperty::Color => "color",
            StyleProperty::BackgroundColor => "background-color",
            StyleProperty::BorderColor => "border-color",
            StyleProperty::BorderRadius => "border-radius",
            StyleProperty::FontFamily => "font-family",
            StyleProperty::FontSize => "font-size",
            StyleProperty::FontWeight => "font-weight",
            StyleProperty::LetterSpacing => "letter-spacing",
            StyleProperty::Margin => "margin",
            StyleProperty::Padding => "padding",
            StyleProperty::TextDecoration => "text-decoration",
            StyleProperty::TextTransform => "text-transform",
        }
    }

    /// DOM-style camelCase name
    pub const fn dom_name(self) -> &'static str {
        match self {
            StyleProperty::Color => "color",
            StyleProperty::BackgroundColor => "backgroundColor",
            StyleProperty::BorderColor => "borderColor",
            StyleProperty::BorderRadius => "borderRadius",
            StyleProperty::FontFamily => "fontFamily",
            StyleProperty::FontSize => "fontSize",
            StyleProperty::FontWeight => "fontWeight",
            StyleProperty::LetterSpacing => "letterSpacing",
            StyleProperty::Margin => "margin",
            StyleProperty::Padding => "padding",
            StyleProperty::TextDecoration => "textDecoration",
            StyleProperty::TextTransform => "textTransform",
        }
    }
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStylePropertyError(pub String);

impl fmt::Display for ParseStylePropertyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported style property: {:?}", self.0)
    }
}

impl std::error::Error for ParseStylePropertyError {}

impl FromStr for StyleProperty {
    type Err = ParseStylePropertyError;

    /// Accepts both the CSS (`font-size`) and DOM (`fontSize`) spellings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StyleProperty::ALL
            .into_iter()
            .find(|p| p.css_name() == s || p.dom_name() == s)
            .ok_or_else(|| ParseStylePropertyError(s.to_string()))
    }
}

/// Error for a rejected style override
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// Property name is not in [`StyleProperty`]
    UnknownProperty(String),
    /// Value is empty or whitespace
    EmptyValue(StyleProperty),
    /// Value contains a forbidden character or construct
    ForbiddenValue(StyleProperty, String),
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleError::UnknownProperty(name) => {
                write!(f, "unsupported style property: {:?}", name)
            }
            StyleError::EmptyValue(property) => {
                write!(f, "empty value for style property {}", property)
            }
            StyleError::ForbiddenValue(property, value) => {
                write!(f, "forbidden value for style property {}: {:?}", property, value)
            }
        }
    }
}

impl std::error::Error for StyleError {}

impl From<ParseStylePropertyError> for StyleError {
    fn from(err: ParseStylePropertyError) -> Self {
        StyleError::UnknownProperty(err.0)
    }
}

/// Check a value before it is applied to `property`
pub fn validate_value(property: StyleProperty, value: &str) -> Result<(), StyleError> {
    if value.trim().is_empty() {
        return Err(StyleError::EmptyValue(property));
    }
    if FORBIDDEN_VALUE.is_match(value) {
        return Err(StyleError::ForbiddenValue(property, value.to_string()));
    }
    Ok(())
}

/// Validated set of style overrides, ordered by property
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct StyleMap(BTreeMap<StyleProperty, String>);

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an override, replacing any previous value for `property`
    pub fn insert(
        &mut self,
        property: StyleProperty,
        value: impl Into<String>,
    ) -> Result<(), StyleError> {
        let value = value.into();
        validate_value(property, &value)?;
        self.0.insert(property, value);
        Ok(())
    }

    /// Builder-style [`StyleMap::insert`]
    pub fn with(mut self, property: StyleProperty, value: impl Into<String>) -> Result<Self, StyleError> {
        self.insert(property, value)?;
        Ok(self)
    }

    /// Build from loosely typed `(name, value)` pairs
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, StyleError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut map = Self::new();
        for (name, value) in pairs {
            map.insert(name.parse()?, value)?;
        }
        Ok(map)
    }

    pub fn get(&self, property: StyleProperty) -> Option<&str> {
        self.0.get(&property).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (StyleProperty, &str)> {
        self.0.iter().map(|(p, v)| (*p, v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<'de> Deserialize<'de> for StyleMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = BTreeMap::<String, String>::deserialize(deserializer)?;
        StyleMap::from_pairs(raw.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .map_err(serde::de::Error::custom)
    }
}
