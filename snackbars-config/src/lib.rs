use snackbars_util::{Position, Theme};
use std::time::Duration;

/// Defaults applied to every snackbar, plus stacking geometry.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
pub struct SnackbarsConfig {
    /// Time in milliseconds before a snackbar dismisses itself. `0` disables auto-dismiss.
    #[serde(default)]
    pub timeout: u64,
    #[serde(default)]
    pub position: Position,
    /// Preset name or explicit rules.
    #[serde(default)]
    pub theme: Theme,
    /// Number of newest snackbars per position kept visible while stacked.
    #[serde(default = "default_max_stack")]
    pub max_stack: usize,
    /// Vertical offset in pixels between stacked cards.
    #[serde(default = "default_stack_offset")]
    pub stack_offset: f64,
    /// Scale reduction per level of depth while stacked.
    #[serde(default = "default_stack_scale_step")]
    pub stack_scale_step: f64,
    /// Upper bound in milliseconds on waiting for a dismiss animation.
    /// `None` waits until the animation reports its end.
    #[serde(default)]
    pub dismiss_timeout: Option<u64>,
}

impl Default for SnackbarsConfig {
    fn default() -> Self {
        Self {
            timeout: 0,
            position: Position::default(),
            theme: Theme::default(),
            max_stack: default_max_stack(),
            stack_offset: default_stack_offset(),
            stack_scale_step: default_stack_scale_step(),
            dismiss_timeout: None,
        }
    }
}

impl SnackbarsConfig {
    pub fn dismiss_timeout(&self) -> Option<Duration> {
        self.dismiss_timeout.map(Duration::from_millis)
    }
}

// Default value helpers for serde
const fn default_max_stack() -> usize {
    3
}

const fn default_stack_offset() -> f64 {
    15.0
}

const fn default_stack_scale_step() -> f64 {
    0.05
}
