//! Runtime level override for any [`Handler`].
//!
//! # Responsibilities
//! - Gate records on a replaceable level provider when one is set
//! - Defer to the wrapped handler's own `enabled` when none is set
//! - Forward records untouched
//! - Carry the current override into derived handlers
//!
//! # State
//! ```text
//! Unset ──set_level──▶ Set(provider) ──set_level──▶ Set(provider')
//! ```
//! There is no edge back to `Unset`.
//!
//! # Design Decisions
//! - The override lives in an `ArcSwapOption`: every read is one atomic load,
//!   every write one atomic store, so log calls never wait on `set_level`
//! - The provider is evaluated on every call, never cached, so dynamic
//!   providers such as [`LevelVar`](crate::level::LevelVar) take effect at once
//! - `with_attrs` / `with_group` copy the current override into a fresh cell.
//!   Later `set_level` calls on parent or child stay local; changes made
//!   through a shared provider are seen by both

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwapOption;

use crate::handler::{Handler, HandlerError};
use crate::level::{Level, Leveler};
use crate::logger::Logger;
use crate::record::{Attr, Record};

/// A stored level provider.
struct LevelOverride(Box<dyn Leveler>);

impl LevelOverride {
    fn level(&self) -> Level {
        self.0.level()
    }
}

/// Wraps a [`Handler`] and lets its minimum level be changed at runtime.
///
/// Until [`set_level`](OverrideHandler::set_level) is called, enablement is
/// decided by the wrapped handler.
pub struct OverrideHandler {
    underlying: Arc<dyn Handler>,
    assigned: ArcSwapOption<LevelOverride>,
}

impl OverrideHandler {
    /// Wrap `underlying` with no override set.
    pub fn new(underlying: Arc<dyn Handler>) -> Self {
        Self {
            underlying,
            assigned: ArcSwapOption::empty(),
        }
    }

    /// Wrap `underlying` with `level` already set.
    ///
    /// `None` gives the same handler as [`OverrideHandler::new`].
    pub fn with_level<L: Leveler + 'static>(underlying: Arc<dyn Handler>, level: Option<L>) -> Self {
        let handler = Self::new(underlying);
        if let Some(level) = level {
            handler.set_level(level);
        }
        handler
    }

    /// Replace the override with `level`.
    ///
    /// Safe to call while other threads are logging through this handler.
    pub fn set_level<L: Leveler + 'static>(&self, level: L) {
        let level = LevelOverride(Box::new(level));
        tracing::debug!(level = %level.level(), "level override set");
        self.assigned.store(Some(Arc::new(level)));
    }

    /// The level currently in effect.
    ///
    /// Without an override this is the wrapped handler's own threshold, or
    /// [`Level::default()`] when the wrapped handler does not report one.
    pub fn level(&self) -> Level {
        match &*self.assigned.load() {
            Some(assigned) => assigned.level(),
            None => self.underlying.threshold().unwrap_or_default(),
        }
    }

    /// Whether an override has been set.
    pub fn has_override(&self) -> bool {
        self.assigned.load().is_some()
    }

    /// The wrapped handler.
    pub fn underlying(&self) -> &Arc<dyn Handler> {
        &self.underlying
    }

    fn derive(&self, underlying: Arc<dyn Handler>) -> Arc<dyn Handler> {
        Arc::new(Self {
            underlying,
            assigned: ArcSwapOption::new(self.assigned.load_full()),
        })
    }
}

impl Handler for OverrideHandler {
    fn enabled(&self, level: Level) -> bool {
        match &*self.assigned.load() {
            Some(assigned) => level >= assigned.level(),
            None => self.underlying.enabled(level),
        }
    }

    fn handle(&self, record: &Record) -> Result<(), HandlerError> {
        self.underlying.handle(record)
    }

    fn with_attrs(&self, attrs: &[Attr]) -> Arc<dyn Handler> {
        self.derive(self.underlying.with_attrs(attrs))
    }

    fn with_group(&self, name: &str) -> Arc<dyn Handler> {
        self.derive(self.underlying.with_group(name))
    }

    fn threshold(&self) -> Option<Level> {
        Some(self.level())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Debug for OverrideHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverrideHandler")
            .field("override", &(*self.assigned.load()).as_ref().map(|o| o.level()))
            .finish_non_exhaustive()
    }
}

/// Set the level on `handler` if it is an [`OverrideHandler`].
///
/// Returns false, changing nothing, when `handler` is some other handler or
/// `level` is `None`.
pub fn try_set_level<L: Leveler + 'static>(handler: &dyn Handler, level: Option<L>) -> bool {
    match (handler.as_any().downcast_ref::<OverrideHandler>(), level) {
        (Some(handler), Some(level)) => {
            handler.set_level(level);
            true
        }
        _ => false,
    }
}

/// Wrap `logger`'s handler in an [`OverrideHandler`] set to `level`.
pub fn new_logger_with_level<L: Leveler + 'static>(logger: &Logger, level: L) -> Logger {
    let handler = OverrideHandler::with_level(logger.handler().clone(), Some(level));
    Logger::new(Arc::new(handler))
}
