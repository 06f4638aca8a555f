//! Severity scale and level providers.
//!
//! # Responsibilities
//! - Define the ordered severity scale shared by every handler
//! - Parse and render levels (`INFO`, `WARN+2`, `debug`)
//! - Provide static and dynamic level providers ([`Leveler`])
//!
//! # Design Decisions
//! - Levels are plain integers so any value between the named points is valid
//! - Named points are spaced by 4 to leave room for custom levels
//! - `LevelVar` is a single atomic; reads never block writers

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A severity level. Larger values are more severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Level(pub i32);

impl Level {
    pub const DEBUG: Level = Level(-4);
    pub const INFO: Level = Level(0);
    pub const WARN: Level = Level(4);
    pub const ERROR: Level = Level(8);

    /// Convert to the closest `tracing` level at or below this one.
    pub fn to_tracing(self) -> tracing::Level {
        match self {
            l if l >= Level::ERROR => tracing::Level::ERROR,
            l if l >= Level::WARN => tracing::Level::WARN,
            l if l >= Level::INFO => tracing::Level::INFO,
            l if l >= Level::DEBUG => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

impl From<tracing::Level> for Level {
    fn from(level: tracing::Level) -> Self {
        match level {
            tracing::Level::ERROR => Level::ERROR,
            tracing::Level::WARN => Level::WARN,
            tracing::Level::INFO => Level::INFO,
            tracing::Level::DEBUG => Level::DEBUG,
            tracing::Level::TRACE => Level(Level::DEBUG.0 - 4),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (name, base) = match *self {
            l if l < Level::INFO => ("DEBUG", Level::DEBUG),
            l if l < Level::WARN => ("INFO", Level::INFO),
            l if l < Level::ERROR => ("WARN", Level::WARN),
            _ => ("ERROR", Level::ERROR),
        };
        let offset = self.0 - base.0;
        if offset == 0 {
            write!(f, "{}", name)
        } else {
            write!(f, "{}{:+}", name, offset)
        }
    }
}

/// Error returned when a string is not a valid level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid level {0:?}")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseLevelError(s.to_string());
        let trimmed = s.trim();
        let (name, offset) = match trimmed.find(['+', '-']) {
            Some(idx) => {
                let offset: i32 = trimmed[idx..].parse().map_err(|_| err())?;
                (&trimmed[..idx], offset)
            }
            None => (trimmed, 0),
        };
        let base = match name.to_ascii_uppercase().as_str() {
            "DEBUG" => Level::DEBUG,
            "INFO" => Level::INFO,
            "WARN" => Level::WARN,
            "ERROR" => Level::ERROR,
            _ => return Err(err()),
        };
        base.0.checked_add(offset).map(Level).ok_or_else(err)
    }
}

impl TryFrom<String> for Level {
    type Error = ParseLevelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Level> for String {
    fn from(level: Level) -> Self {
        level.to_string()
    }
}

/// Reports the current minimum level on demand.
///
/// Implementations may return a different value on every call.
pub trait Leveler: Send + Sync {
    fn level(&self) -> Level;
}

impl Leveler for Level {
    fn level(&self) -> Level {
        *self
    }
}

impl<T: Leveler + ?Sized> Leveler for Arc<T> {
    fn level(&self) -> Level {
        (**self).level()
    }
}

/// A level that can be changed at runtime.
///
/// Hand an `Arc<LevelVar>` to a handler and keep a clone to adjust it later.
#[derive(Debug, Default)]
pub struct LevelVar {
    level: AtomicI32,
}

impl LevelVar {
    pub fn new(level: Level) -> Self {
        Self {
            level: AtomicI32::new(level.0),
        }
    }

    pub fn set(&self, level: Level) {
        self.level.store(level.0, Ordering::Relaxed);
    }
}

impl Leveler for LevelVar {
    fn level(&self) -> Level {
        Level(self.level.load(Ordering::Relaxed))
    }
}
