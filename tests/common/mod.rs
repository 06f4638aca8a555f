//! Shared utilities for integration tests.

use std::any::Any;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use level_override::{Attr, Handler, HandlerError, Level, Record};

/// A handled record along with the context of the handler that received it.
#[derive(Debug, Clone)]
pub struct Captured {
    pub record: Record,
    pub context: Vec<Attr>,
    pub groups: Vec<String>,
}

/// Handler with a fixed threshold that records everything it is asked to handle.
///
/// Derived handlers share the same capture buffer and call counter.
#[derive(Clone)]
pub struct RecordingHandler {
    min: Level,
    captured: Arc<Mutex<Vec<Captured>>>,
    handle_calls: Arc<AtomicUsize>,
    context: Vec<Attr>,
    groups: Vec<String>,
}

impl RecordingHandler {
    pub fn new(min: Level) -> Self {
        Self {
            min,
            captured: Arc::default(),
            handle_calls: Arc::default(),
            context: Vec::new(),
            groups: Vec::new(),
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.captured
            .lock()
            .unwrap()
            .iter()
            .map(|c| c.record.message.clone())
            .collect()
    }

    pub fn captured(&self) -> Vec<Captured> {
        self.captured.lock().unwrap().clone()
    }

    pub fn handle_calls(&self) -> usize {
        self.handle_calls.load(Ordering::SeqCst)
    }
}

impl Handler for RecordingHandler {
    fn enabled(&self, level: Level) -> bool {
        level >= self.min
    }

    fn handle(&self, record: &Record) -> Result<(), HandlerError> {
        self.handle_calls.fetch_add(1, Ordering::SeqCst);
        self.captured.lock().unwrap().push(Captured {
            record: record.clone(),
            context: self.context.clone(),
            groups: self.groups.clone(),
        });
        Ok(())
    }

    fn with_attrs(&self, attrs: &[Attr]) -> Arc<dyn Handler> {
        let mut derived = self.clone();
        derived.context.extend_from_slice(attrs);
        Arc::new(derived)
    }

    fn with_group(&self, name: &str) -> Arc<dyn Handler> {
        let mut derived = self.clone();
        derived.groups.push(name.to_string());
        Arc::new(derived)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Handler whose `handle` always fails.
#[allow(dead_code)]
pub struct FailingHandler;

impl Handler for FailingHandler {
    fn enabled(&self, _level: Level) -> bool {
        true
    }

    fn handle(&self, _record: &Record) -> Result<(), HandlerError> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "sink closed").into())
    }

    fn with_attrs(&self, _attrs: &[Attr]) -> Arc<dyn Handler> {
        Arc::new(FailingHandler)
    }

    fn with_group(&self, _name: &str) -> Arc<dyn Handler> {
        Arc::new(FailingHandler)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
