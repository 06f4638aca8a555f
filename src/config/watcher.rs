//! Configuration file watcher for runtime level changes.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::loader::load_config;
use crate::config::schema::LoggingConfig;
use crate::override_handler::OverrideHandler;

/// A watcher that monitors the logging config file for changes.
pub struct LevelWatcher {
    path: PathBuf,
    update_tx: mpsc::UnboundedSender<LoggingConfig>,
}

impl LevelWatcher {
    /// Create a new LevelWatcher.
    ///
    /// Returns the watcher and a receiver for configuration updates.
    pub fn new(path: &Path) -> (Self, mpsc::UnboundedReceiver<LoggingConfig>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        (
            Self {
                path: path.to_path_buf(),
                update_tx,
            },
            update_rx,
        )
    }

    /// Load the file once and send the result, keeping the current level on failure.
    pub fn reload(&self) -> bool {
        reload(&self.path, &self.update_tx)
    }

    /// Start watching the file in a background thread.
    ///
    /// Dropping the returned watcher stops it.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let tx = self.update_tx.clone();
        let path = self.path.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if event.kind.is_modify() || event.kind.is_create() {
                        tracing::info!(path = ?path, "Logging config change detected, reloading");
                        reload(&path, &tx);
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&self.path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.path, "Logging config watcher started");
        Ok(watcher)
    }
}

fn reload(path: &Path, tx: &mpsc::UnboundedSender<LoggingConfig>) -> bool {
    match load_config(path) {
        Ok(config) => tx.send(config).is_ok(),
        Err(e) => {
            tracing::error!(
                path = ?path,
                "Failed to reload logging config: {}. Keeping current level.",
                e
            );
            false
        }
    }
}

/// Apply every received config to `handler` until the sender side closes.
pub async fn apply_updates(mut updates: mpsc::UnboundedReceiver<LoggingConfig>, handler: Arc<OverrideHandler>) {
    while let Some(config) = updates.recv().await {
        if config.apply(&handler) {
            tracing::info!(level = %handler.level(), "Log level updated from config");
        }
    }
}
