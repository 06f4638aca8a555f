//! Log-handling interface.
//!
//! # Data Flow
//! ```text
//! Logger::log(level, msg, attrs)
//!     → Handler::enabled(level)      (skip when false)
//!     → Record built by the logger
//!     → Handler::handle(&record)     (emit)
//!
//! Logger::with(attrs) / with_group(name)
//!     → Handler::with_attrs / with_group (derived handler, new instance)
//! ```
//!
//! # Design Decisions
//! - Handlers are shared as `Arc<dyn Handler>` across threads
//! - Derivation never mutates the parent; it returns a new handler
//! - The threshold query is an optional capability (`threshold()` returns `None`
//!   unless a handler knows its own minimum level)
//! - Rendering and output belong to the `tracing` subscriber behind
//!   [`TracingHandler`], not to this crate

pub mod tracing_bridge;

pub use tracing_bridge::TracingHandler;

use std::any::Any;
use std::sync::Arc;

use thiserror::Error;

use crate::level::Level;
use crate::record::{Attr, Record};

/// Errors a handler can report from [`Handler::handle`].
#[derive(Debug, Error)]
pub enum HandlerError {
    /// Writing the record failed.
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),

    /// Any other failure reported by a handler implementation.
    #[error("handler failed: {0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Decides whether records are enabled and emits the ones that are.
pub trait Handler: Send + Sync + 'static {
    /// Report whether a record at `level` should be handled.
    fn enabled(&self, level: Level) -> bool;

    /// Emit `record`. Callers are expected to have checked [`Handler::enabled`].
    fn handle(&self, record: &Record) -> Result<(), HandlerError>;

    /// Return a handler whose records also carry `attrs`.
    fn with_attrs(&self, attrs: &[Attr]) -> Arc<dyn Handler>;

    /// Return a handler that nests subsequent attributes under `name`.
    fn with_group(&self, name: &str) -> Arc<dyn Handler>;

    /// The handler's own minimum level, if it has one.
    fn threshold(&self) -> Option<Level> {
        None
    }

    /// Used to recover the concrete handler type.
    fn as_any(&self) -> &dyn Any;
}


#[cfg(test)]
mod tests {
    use super::*;
    use test_support::FixedLevel;

    #[test]
    fn test_error_display() {
        let err = HandlerError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
        assert_eq!(err.to_string(), "write failed: disk full");

        let err = HandlerError::from(Box::<dyn std::error::Error + Send + Sync>::from("queue closed"));
        assert_eq!(err.to_string(), "handler failed: queue closed");
    }

    #[test]
    fn test_default_threshold_is_absent() {
        struct Silent;

        impl Handler for Silent {
            fn enabled(&self, _level: Level) -> bool {
                false
            }

            fn handle(&self, _record: &Record) -> Result<(), HandlerError> {
                Ok(())
            }

            fn with_attrs(&self, _attrs: &[Attr]) -> Arc<dyn Handler> {
                Arc::new(Silent)
            }

            fn with_group(&self, _name: &str) -> Arc<dyn Handler> {
                Arc::new(Silent)
            }

            fn as_any(&self) -> &dyn Any {
                self
            }
        }

        assert_eq!(Silent.threshold(), None);
        assert_eq!(FixedLevel::new(Level::WARN).threshold(), Some(Level::WARN));
    }
}
