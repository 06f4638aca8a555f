//! Logging configuration and hot reload.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (read & deserialize, level strings parsed by serde)
//!     → LoggingConfig
//!     → LoggingConfig::apply (sets the OverrideHandler level)
//!
//! On file change:
//!     watcher.rs detects modify/create
//!     → loader.rs loads new config
//!     → sent over an mpsc channel
//!     → apply_updates sets the new level
//! ```
//!
//! # Design Decisions
//! - A config without `level` leaves the current override alone
//! - A file that fails to load keeps the previous level

pub mod loader;
pub mod schema;
pub mod watcher;

pub use loader::{load_config, ConfigError};
pub use schema::LoggingConfig;
pub use watcher::{apply_updates, LevelWatcher};
