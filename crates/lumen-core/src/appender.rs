//! The appender capability
//!
//! Anything that can consume `(level, source, event)` can be registered as a
//! sink. The registry only guarantees WHEN a sink is invoked; what it does
//! with the event (console, file, platform log, network) is its own concern.

use crate::{Event, Level};

/// A consumer of log events.
///
/// Appenders are invoked synchronously on the logging thread and may be
/// shared across bindings and threads, so implementations must serialize
/// their own writes. A panicking appender is not caught by the registry.
pub trait Appender: Send + Sync {
    /// Handles one log event.
    fn append(&self, level: Level, source: &str, event: &Event);
}

impl<F> Appender for F
where
    F: Fn(Level, &str, &Event) + Send + Sync,
{
    fn append(&self, level: Level, source: &str, event: &Event) {
        self(level, source, event);
    }
}
