//! Stackable, transient notification messages for a document surface.
//!
//! Snackbars are grouped in three screen positions. Within a position they
//! pile up as a compact stack that spreads into a list while hovered, with
//! every auto-dismiss timer at that position paused until the pointer leaves.
//!
//! ```no_run
//! use snackbars::{Action, Position, SnackOptions, Snackbars};
//!
//! # async fn demo() {
//! let local = tokio::task::LocalSet::new();
//! local
//!     .run_until(async {
//!         let snackbars = Snackbars::new();
//!         let saved = snackbars.create_snackbar(
//!             "Saved",
//!             SnackOptions::new()
//!                 .position(Position::Left)
//!                 .timeout(3000)
//!                 .action(Action::new("undo").with_callback(|_, snack| snack.request_destroy())),
//!         );
//!         saved.destroy().await;
//!         snackbars.destroy_all_snackbars().await;
//!     })
//!     .await;
//! # }
//! ```

mod constants;
pub mod dom;
mod manager;
pub mod options;
pub mod rendering;
mod snackbar;
pub mod state;

pub use dom::{Document, Element, EventKind};
pub use manager::Snackbars;
pub use options::{Action, ActionCallback, SnackInstanceOptions, SnackOptions};
pub use rendering::{Geometry, Layout, Transform};
pub use snackbar::{Snackbar, State};

pub use snackbars_config::SnackbarsConfig;
pub use snackbars_util::{
    ParsePositionError, Position, StyleError, StyleMap, StyleProperty, Theme, ThemeRules,
};
