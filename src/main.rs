//! Drives a headless document through a typical snackbar session and logs
//! the resulting layout.
//!
//! Usage: `snackbars-demo [config.json]`

use anyhow::{Context, Result};
use snackbars::{Action, EventKind, Position, SnackOptions, Snackbars, SnackbarsConfig};
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// Height reported for every card, as a browser would after layout
const CARD_HEIGHT: f64 = 48.0;

fn load_config(path: Option<&Path>) -> Result<SnackbarsConfig> {
    let Some(path) = path else {
        return Ok(SnackbarsConfig::default());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse config {}", path.display()))
}

fn log_layout(snackbars: &Snackbars, position: Position) {
    info!("{} ({:?}):", position, snackbars.layout(position));
    for snack in snackbars.instances(position) {
        if let Some(el) = snack.element() {
            info!(
                "  {:<14} transform={} opacity={}",
                snack.message(),
                el.style("transform").unwrap_or_default(),
                el.style("opacity").unwrap_or_default()
            );
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_backtrace::install();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let path = std::env::args().nth(1);
    let config = load_config(path.as_deref().map(Path::new))?;
    info!("Starting snackbar demo with {:?}", config);

    let local = tokio::task::LocalSet::new();
    local
        .run_until(async move {
            let snackbars = Snackbars::with_config(config);

            for message in ["Saved", "Saved again", "Uploaded", "Synced"] {
                let snack = snackbars.create_snackbar(
                    message,
                    SnackOptions::new().position(Position::Left).timeout(2000),
                );
                if let Some(el) = snack.element() {
                    el.set_client_height(CARD_HEIGHT);
                }
            }
            snackbars.create_snackbar(
                "Item deleted",
                SnackOptions::new().theme("light").action(
                    Action::new("undo").with_callback(|_, snack| {
                        info!("Undo requested for {:?}", snack.message());
                        snack.request_destroy();
                    }),
                ),
            );
            log_layout(&snackbars, Position::Left);

            let newest = snackbars.instances(Position::Left).pop();
            if let Some(el) = newest.as_ref().and_then(|s| s.element()) {
                el.dispatch(EventKind::MouseEnter);
                log_layout(&snackbars, Position::Left);
                tokio::time::sleep(Duration::from_millis(500)).await;
                el.dispatch(EventKind::MouseLeave);
            }

            tokio::time::sleep(Duration::from_millis(2100)).await;
            log_layout(&snackbars, Position::Left);
            info!("{} snackbars left", snackbars.len());

            if let Some(undo) = snackbars
                .document()
                .query_selector_all_class("snackbar--button")
                .into_iter()
                .find(|b| b.text() == "undo")
            {
                undo.dispatch(EventKind::Click);
            }
            tokio::task::yield_now().await;

            snackbars.destroy_all_snackbars().await;
            info!("All snackbars destroyed, {} left", snackbars.len());
        })
        .await;

    Ok(())
}
