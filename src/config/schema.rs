//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::level::Level;
use crate::override_handler::OverrideHandler;

/// Logging configuration.
///
/// ```toml
/// level = "warn"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level (`debug`, `info`, `warn`, `error`, optionally with an
    /// offset such as `info+2`). Absent means "leave as is".
    pub level: Option<Level>,
}

impl LoggingConfig {
    /// Set `handler`'s override from this config.
    ///
    /// Returns false when the config carries no level.
    pub fn apply(&self, handler: &OverrideHandler) -> bool {
        match self.level {
            Some(level) => {
                handler.set_level(level);
                true
            }
            None => false,
        }
    }
}
