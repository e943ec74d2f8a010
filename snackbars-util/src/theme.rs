use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Name of the preset used when no theme is given
pub const DEFAULT_THEME: &str = "dark";

/// Inline color overrides for a snackbar
///
/// Unset fields fall back to the stylesheet defaults.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeRules {
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    pub box_shadow: Option<String>,
    pub action_color: Option<String>,
}

impl ThemeRules {
    /// True when no field overrides the stylesheet
    pub fn is_empty(&self) -> bool {
        self.background_color.is_none()
            && self.text_color.is_none()
            && self.box_shadow.is_none()
            && self.action_color.is_none()
    }
}

static PRESETS: Lazy<HashMap<&'static str, ThemeRules>> = Lazy::new(|| {
    let mut presets = HashMap::new();
    presets.insert(
        "light",
        ThemeRules {
            background_color: Some("#fff".to_string()),
            text_color: Some("#000".to_string()),
            box_shadow: None,
            action_color: Some("#008000".to_string()),
        },
    );
    presets.insert("dark", ThemeRules::default());
    presets
});

/// Look up a built-in preset by name
pub fn preset(name: &str) -> Option<&'static ThemeRules> {
    PRESETS.get(name)
}

/// Theme option as supplied by callers: a preset name or explicit rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Theme {
    Named(String),
    Rules(ThemeRules),
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Named(DEFAULT_THEME.to_string())
    }
}

impl Theme {
    pub fn named(name: impl Into<String>) -> Self {
        Theme::Named(name.into())
    }

    /// Resolve to concrete rules.
    ///
    /// Explicit rules replace the preset entirely. An unknown preset name
    /// resolves to an empty rule set.
    pub fn resolve(&self) -> ThemeRules {
        match self {
            Theme::Named(name) => match preset(name) {
                Some(rules) => rules.clone(),
                None => {
                    tracing::warn!("Unknown snackbar theme preset {:?}, using empty rules", name);
                    ThemeRules::default()
                }
            },
            Theme::Rules(rules) => rules.clone(),
        }
    }
}

impl From<ThemeRules> for Theme {
    fn from(rules: ThemeRules) -> Self {
        Theme::Rules(rules)
    }
}

impl From<&str> for Theme {
    fn from(name: &str) -> Self {
        Theme::Named(name.to_string())
    }
}
