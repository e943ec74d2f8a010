use crate::constants::DEFAULT_ACTION_TEXT;
use crate::dom::Element;
use crate::snackbar::Snackbar;
use snackbars_config::SnackbarsConfig;
use snackbars_util::{Position, StyleError, StyleMap, StyleProperty, Theme, ThemeRules};
use std::fmt;
use std::rc::Rc;

/// Invoked with the clicked button and the snackbar that owns it
pub type ActionCallback = Rc<dyn Fn(&Element, &Snackbar)>;

/// A button shown on a snackbar
#[derive(Clone)]
pub struct Action {
    pub text: String,
    pub style: StyleMap,
    /// Without a callback, clicking dismisses the snackbar
    pub callback: Option<ActionCallback>,
}

impl Action {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: StyleMap::new(),
            callback: None,
        }
    }

    /// The button added when no actions are given
    pub fn dismiss() -> Self {
        Self::new(DEFAULT_ACTION_TEXT)
    }

    pub fn with_callback(mut self, callback: impl Fn(&Element, &Snackbar) + 'static) -> Self {
        self.callback = Some(Rc::new(callback));
        self
    }

    pub fn with_style(mut self, style: StyleMap) -> Self {
        self.style = style;
        self
    }

    /// Add one validated style override
    pub fn try_style(
        mut self,
        property: StyleProperty,
        value: impl Into<String>,
    ) -> Result<Self, StyleError> {
        self.style.insert(property, value)?;
        Ok(self)
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("text", &self.text)
            .field("style", &self.style)
            .field("callback", &self.callback.is_some())
            .finish()
    }
}

/// Caller supplied options; unset fields take the configured defaults
#[derive(Debug, Clone, Default)]
pub struct SnackOptions {
    /// Milliseconds until auto-dismiss, `0` for never
    pub timeout: Option<u64>,
    pub actions: Option<Vec<Action>>,
    pub position: Option<Position>,
    pub theme: Option<Theme>,
    pub max_stack: Option<usize>,
}

impl SnackOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timeout(mut self, timeout: u64) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn actions(mut self, actions: Vec<Action>) -> Self {
        self.actions = Some(actions);
        self
    }

    pub fn action(mut self, action: Action) -> Self {
        self.actions.get_or_insert_with(Vec::new).push(action);
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn theme(mut self, theme: impl Into<Theme>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    pub fn max_stack(mut self, max_stack: usize) -> Self {
        self.max_stack = Some(max_stack);
        self
    }

    /// Fill unset fields from `config` and resolve the theme
    pub fn resolve(self, config: &SnackbarsConfig) -> SnackInstanceOptions {
        let theme = self.theme.as_ref().unwrap_or(&config.theme).resolve();
        SnackInstanceOptions {
            timeout: self.timeout.unwrap_or(config.timeout),
            actions: self.actions.unwrap_or_else(|| vec![Action::dismiss()]),
            position: self.position.unwrap_or(config.position),
            theme,
            max_stack: self.max_stack.unwrap_or(config.max_stack),
        }
    }
}

/// Fully resolved options held by a live snackbar
#[derive(Debug, Clone)]
pub struct SnackInstanceOptions {
    pub timeout: u64,
    pub actions: Vec<Action>,
    pub position: Position,
    pub theme: ThemeRules,
    pub max_stack: usize,
}
