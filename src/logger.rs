//! Caller-side logger.

use std::sync::Arc;

use crate::handler::Handler;
use crate::level::Level;
use crate::record::{Attr, Record};

/// Front end that builds records and routes them into a [`Handler`].
///
/// Cloning is cheap; clones share the handler.
#[derive(Clone)]
pub struct Logger {
    handler: Arc<dyn Handler>,
}

impl Logger {
    pub fn new(handler: Arc<dyn Handler>) -> Self {
        Self { handler }
    }

    pub fn handler(&self) -> &Arc<dyn Handler> {
        &self.handler
    }

    pub fn enabled(&self, level: Level) -> bool {
        self.handler.enabled(level)
    }

    /// Emit a record if `level` is enabled.
    ///
    /// Handler failures are reported through `tracing` rather than returned.
    pub fn log(&self, level: Level, msg: &str, attrs: &[Attr]) {
        if !self.handler.enabled(level) {
            return;
        }
        let mut record = Record::new(level, msg);
        record.add_attrs(attrs.iter().cloned());
        if let Err(e) = self.handler.handle(&record) {
            tracing::warn!(error = %e, level = %level, "log handler failed");
        }
    }

    pub fn debug(&self, msg: &str) {
        self.log(Level::DEBUG, msg, &[]);
    }

    pub fn info(&self, msg: &str) {
        self.log(Level::INFO, msg, &[]);
    }

    pub fn warn(&self, msg: &str) {
        self.log(Level::WARN, msg, &[]);
    }

    pub fn error(&self, msg: &str) {
        self.log(Level::ERROR, msg, &[]);
    }

    /// A logger whose records also carry `attrs`.
    pub fn with(&self, attrs: &[Attr]) -> Logger {
        if attrs.is_empty() {
            return self.clone();
        }
        Logger::new(self.handler.with_attrs(attrs))
    }

    /// A logger that nests subsequent attributes under `name`.
    pub fn with_group(&self, name: &str) -> Logger {
        if name.is_empty() {
            return self.clone();
        }
        Logger::new(self.handler.with_group(name))
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger").finish_non_exhaustive()
    }
}
