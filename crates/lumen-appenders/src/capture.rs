//! In-memory capture appender
//!
//! Records every event it receives, for assertions in tests and for quick
//! runtime diagnostics. Events pass through unchanged.

use parking_lot::Mutex;

use lumen_core::{Appender, Event, Level};

/// One captured log emission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub level: Level,
    pub source: String,
    pub event: Event,
}

/// An appender that stores everything it sees.
#[derive(Default)]
pub struct CaptureAppender {
    records: Mutex<Vec<Record>>,
}

impl CaptureAppender {
    /// An empty capture.
    pub fn new() -> CaptureAppender {
        CaptureAppender::default()
    }

    /// A copy of everything captured so far.
    pub fn records(&self) -> Vec<Record> {
        self.records.lock().clone()
    }

    /// Drains and returns the captured records.
    pub fn take(&self) -> Vec<Record> {
        std::mem::take(&mut *self.records.lock())
    }

    /// Number of captured records.
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// Whether nothing has been captured.
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl Appender for CaptureAppender {
    fn append(&self, level: Level, source: &str, event: &Event) {
        self.records.lock().push(Record {
            level,
            source: source.to_owned(),
            event: event.clone(),
        });
    }
}
