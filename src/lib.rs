//! Runtime-adjustable log levels.
//!
//! [`OverrideHandler`] wraps any [`Handler`] and lets the minimum level be
//! changed while the program runs, from any thread, without rebuilding the
//! logger. Output is left to `tracing`: [`TracingHandler`] hands records to
//! whatever subscriber the application installed.
//!
//! ```
//! use std::sync::Arc;
//! use level_override::{Level, Logger, OverrideHandler, TracingHandler};
//!
//! tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();
//!
//! let handler = Arc::new(OverrideHandler::new(Arc::new(TracingHandler::new())));
//! let logger = Logger::new(handler.clone());
//!
//! logger.info("written: the subscriber accepts INFO");
//! handler.set_level(Level::WARN);
//! logger.info("not written: the override is now WARN");
//! logger.warn("written");
//! ```

pub mod config;
pub mod handler;
pub mod level;
pub mod logger;
pub mod override_handler;
pub mod record;

pub use handler::{Handler, HandlerError, TracingHandler};
pub use level::{Level, LevelVar, Leveler, ParseLevelError};
pub use logger::Logger;
pub use override_handler::{new_logger_with_level, try_set_level, OverrideHandler};
pub use record::{Attr, Record, Value};
