//! Handler that re-emits records as `tracing` events.
//!
//! Lets code written against [`Handler`] feed an application that already
//! installed a `tracing` subscriber; the subscriber decides how events are
//! rendered (text, JSON) and where they go. Levels map onto the closest
//! `tracing` level at or below them; attributes are carried as one `attrs`
//! field since `tracing` field names are fixed at compile time.

use std::any::Any;
use std::sync::Arc;

use tracing::level_filters::LevelFilter;

use crate::handler::{Handler, HandlerError};
use crate::level::Level;
use crate::record::{Attr, Record, Value};

/// Forwards records to the current `tracing` dispatcher.
#[derive(Debug, Clone, Default)]
pub struct TracingHandler {
    /// Key prefix from open groups, e.g. `"req.headers."`.
    prefix: String,
    /// `key=value` pairs added through `with_attrs`.
    context: Vec<String>,
}

impl TracingHandler {
    pub fn new() -> Self {
        Self::default()
    }

    fn render_attrs(&self, record: &Record) -> String {
        let mut pairs = self.context.clone();
        for attr in &record.attrs {
            flatten(&mut pairs, &self.prefix, attr);
        }
        pairs.join(" ")
    }
}

/// Push `attr` as `prefix.key=value`, expanding group values into their members.
fn flatten(out: &mut Vec<String>, prefix: &str, attr: &Attr) {
    match &attr.value {
        Value::Group(attrs) => {
            let nested = format!("{}{}.", prefix, attr.key);
            for attr in attrs {
                flatten(out, &nested, attr);
            }
        }
        value => out.push(format!("{}{}={}", prefix, attr.key, value)),
    }
}

impl Handler for TracingHandler {
    fn enabled(&self, level: Level) -> bool {
        match level.to_tracing() {
            tracing::Level::ERROR => tracing::enabled!(tracing::Level::ERROR),
            tracing::Level::WARN => tracing::enabled!(tracing::Level::WARN),
            tracing::Level::INFO => tracing::enabled!(tracing::Level::INFO),
            tracing::Level::DEBUG => tracing::enabled!(tracing::Level::DEBUG),
            tracing::Level::TRACE => tracing::enabled!(tracing::Level::TRACE),
        }
    }

    fn handle(&self, record: &Record) -> Result<(), HandlerError> {
        let attrs = self.render_attrs(record);
        let msg = record.message.as_str();
        match record.level.to_tracing() {
            tracing::Level::ERROR => tracing::error!(attrs = %attrs, "{}", msg),
            tracing::Level::WARN => tracing::warn!(attrs = %attrs, "{}", msg),
            tracing::Level::INFO => tracing::info!(attrs = %attrs, "{}", msg),
            tracing::Level::DEBUG => tracing::debug!(attrs = %attrs, "{}", msg),
            tracing::Level::TRACE => tracing::trace!(attrs = %attrs, "{}", msg),
        }
        Ok(())
    }

    fn with_attrs(&self, attrs: &[Attr]) -> Arc<dyn Handler> {
        let mut derived = self.clone();
        for attr in attrs {
            flatten(&mut derived.context, &self.prefix, attr);
        }
        Arc::new(derived)
    }

    fn with_group(&self, name: &str) -> Arc<dyn Handler> {
        let mut derived = self.clone();
        if !name.is_empty() {
            derived.prefix.push_str(name);
            derived.prefix.push('.');
        }
        Arc::new(derived)
    }

    /// The most verbose level any subscriber currently accepts.
    fn threshold(&self) -> Option<Level> {
        LevelFilter::current().into_level().map(Level::from)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
