//! The binding registry and dispatch engine
//!
//! A [`Registry`] holds a set of bindings, each pairing a level threshold
//! and a source pattern with an appender. `log` fans an event out to every
//! binding that passes both rules:
//!
//! Basic Selection Rule:
//!   a log request at level `p` passes a binding with threshold `q` if
//!   `p.rank() >= q.rank()`.
//!
//! Match Inheritance Rule:
//!   a binding passes if its pattern fully matches the source name of the
//!   log request.
//!
//! The process-wide instance is [`global()`]; independent registries can be
//! created for tests or scoped wiring.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::{Appender, Chain, Event, Level, LumenResult, SourcePattern};

struct Binding {
    threshold: Level,
    pattern: SourcePattern,
    sink: Arc<dyn Appender>,
}

/// A concurrent set of `(threshold, pattern, sink)` bindings.
///
/// All operations are synchronous and callable from any number of threads.
/// `log` dispatches over a snapshot of the binding set, so a sink may call
/// back into `add`/`remove`/`log` without deadlocking, and a concurrent
/// mutation may or may not be observed by an in-flight `log` call.
pub struct Registry {
    bindings: RwLock<Vec<Arc<Binding>>>,
}

impl Registry {
    /// An empty registry.
    pub const fn new() -> Registry {
        Registry {
            bindings: RwLock::new(Vec::new()),
        }
    }

    /// Adds a binding for `sink`, compiling `pattern` first.
    ///
    /// Fails on malformed regex syntax; no binding is created in that case.
    /// There is no de-duplication: adding the same sink twice yields two
    /// independent bindings, both of which fire.
    pub fn add(
        &self,
        threshold: Level,
        pattern: &str,
        sink: Arc<dyn Appender>,
    ) -> LumenResult<&Registry> {
        Ok(self.add_pattern(threshold, SourcePattern::new(pattern)?, sink))
    }

    /// Adds a binding for `sink` with a precompiled pattern.
    ///
    /// Returns the registry to allow chaining.
    pub fn add_pattern(
        &self,
        threshold: Level,
        pattern: SourcePattern,
        sink: Arc<dyn Appender>,
    ) -> &Registry {
        tracing::trace!(pattern = %pattern.as_str(), threshold = %threshold, "binding added");
        self.bindings.write().push(Arc::new(Binding {
            threshold,
            pattern,
            sink,
        }));
        self
    }

    /// Removes at most one binding whose sink is the given appender.
    ///
    /// Identity is the `Arc` pointer, so callers must pass the same handle
    /// they registered. A multiply-registered sink needs one `remove` per
    /// `add` to be fully detached. Silent no-op when nothing matches.
    pub fn remove(&self, sink: &Arc<dyn Appender>) {
        let mut bindings = self.bindings.write();
        if let Some(pos) = bindings.iter().position(|b| Arc::ptr_eq(&b.sink, sink)) {
            let binding = bindings.remove(pos);
            tracing::trace!(pattern = %binding.pattern.as_str(), "binding removed");
        }
    }

    /// Fans `event` out to every binding passing both selection rules.
    ///
    /// Sinks run synchronously on the calling thread, in unspecified order.
    /// A panicking sink is not caught; delivery to the remaining bindings of
    /// this call is abandoned by the unwind.
    pub fn log(&self, level: Level, source: &str, event: &Event) {
        let snapshot: Vec<Arc<Binding>> = self.bindings.read().clone();
        for binding in snapshot {
            if level >= binding.threshold && binding.pattern.matches(source) {
                binding.sink.append(level, source, event);
            }
        }
    }

    /// Starts an assumption chain logging through this registry.
    pub fn assume<'a>(&'a self, source: &'a str) -> Chain<'a> {
        Chain::new(self, source)
    }

    /// Number of bindings currently registered.
    pub fn len(&self) -> usize {
        self.bindings.read().len()
    }

    /// Whether no bindings are registered.
    pub fn is_empty(&self) -> bool {
        self.bindings.read().is_empty()
    }
}

impl Default for Registry {
    fn default() -> Registry {
        Registry::new()
    }
}

static GLOBAL: Registry = Registry::new();

/// The process-wide registry.
///
/// Intentionally global-lifetime: this is the ambient logger the call-site
/// helpers in [`crate::logger`] emit through. It is never torn down.
pub fn global() -> &'static Registry {
    &GLOBAL
}
