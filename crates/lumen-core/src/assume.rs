//! Assumption chains
//!
//! A [`Chain`] evaluates a sequence of boolean assumptions. The first failed
//! assumption emits one Assert-level event through the chain's registry and
//! kills the chain; everything after that is a no-op. Failures are purely
//! logged side effects, never panics.
//!
//! ```
//! use lumen_core::global;
//!
//! let _ = global()
//!     .assume("app::Startup")
//!     .assume_true("config dir exists", true)
//!     .assume_eq("one replica", &1, &1)
//!     .then(|| { /* runs only while the chain is alive */ });
//! ```

use crate::{ErrorValue, Event, Level, Registry};

/// A short-circuiting sequence of boolean checks.
///
/// Created by [`Registry::assume`] or [`crate::logger::assume`]. Methods
/// consume the chain and hand it back, dead or alive; once dead every call
/// is a no-op. Note that Rust evaluates call arguments eagerly, so the
/// value-taking predicates still evaluate their arguments on a dead chain —
/// they just never log or run callbacks. Use [`Chain::assume_with`] when the
/// condition itself must not run after a failure.
#[must_use = "a chain only short-circuits if later calls go through it"]
pub struct Chain<'a> {
    registry: &'a Registry,
    source: &'a str,
    alive: bool,
}

impl<'a> Chain<'a> {
    pub(crate) fn new(registry: &'a Registry, source: &'a str) -> Chain<'a> {
        Chain {
            registry,
            source,
            alive: true,
        }
    }

    /// Whether no assumption has failed so far.
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    fn fail_now(mut self, message: &str) -> Chain<'a> {
        self.registry.log(
            Level::ASSERT,
            self.source,
            &Event::with_error(message, ErrorValue::assertion(message)),
        );
        self.alive = false;
        self
    }

    /// Logs `message` at Assert level if `condition` is false, killing the
    /// chain; otherwise passes the chain through alive.
    pub fn assume_true(self, message: &str, condition: bool) -> Chain<'a> {
        if !self.alive || condition {
            self
        } else {
            self.fail_now(message)
        }
    }

    /// Like [`Chain::assume_true`], but the condition is only evaluated
    /// while the chain is alive.
    pub fn assume_with(self, message: &str, condition: impl FnOnce() -> bool) -> Chain<'a> {
        if !self.alive {
            return self;
        }
        let ok = condition();
        self.assume_true(message, ok)
    }

    /// Runs `callback` iff the chain is alive, then passes it through.
    pub fn then(self, callback: impl FnOnce()) -> Chain<'a> {
        if self.alive {
            callback();
        }
        self
    }

    /// Assumes `condition` is false.
    pub fn assume_false(self, message: &str, condition: bool) -> Chain<'a> {
        self.assume_true(message, !condition)
    }

    /// Assumes `value` is absent or empty.
    pub fn assume_empty<T>(self, message: &str, value: Option<&T>) -> Chain<'a>
    where
        T: Emptiness + ?Sized,
    {
        let empty = value.map_or(true, Emptiness::is_empty);
        self.assume_true(message, empty)
    }

    /// Assumes `value` is present and non-empty.
    pub fn assume_not_empty<T>(self, message: &str, value: Option<&T>) -> Chain<'a>
    where
        T: Emptiness + ?Sized,
    {
        let non_empty = value.map_or(false, |v| !v.is_empty());
        self.assume_true(message, non_empty)
    }

    /// Assumes structural equality of `expected` and `actual`.
    pub fn assume_eq<T>(self, message: &str, expected: &T, actual: &T) -> Chain<'a>
    where
        T: PartialEq + ?Sized,
    {
        self.assume_true(message, expected == actual)
    }

    /// Assumes structural inequality of `expected` and `actual`.
    pub fn assume_ne<T>(self, message: &str, expected: &T, actual: &T) -> Chain<'a>
    where
        T: PartialEq + ?Sized,
    {
        self.assume_true(message, expected != actual)
    }

    /// Assumes `value` is present.
    pub fn assume_some<T>(self, message: &str, value: Option<&T>) -> Chain<'a> {
        self.assume_true(message, value.is_some())
    }

    /// Assumes `value` is absent.
    pub fn assume_none<T>(self, message: &str, value: Option<&T>) -> Chain<'a> {
        self.assume_true(message, value.is_none())
    }

    /// Assumes `expected` and `actual` are the same object (pointer
    /// identity, not structural equality).
    pub fn assume_same<T: ?Sized>(self, message: &str, expected: &T, actual: &T) -> Chain<'a> {
        self.assume_true(message, std::ptr::eq(expected, actual))
    }

    /// Assumes `expected` and `actual` are distinct objects.
    pub fn assume_not_same<T: ?Sized>(self, message: &str, expected: &T, actual: &T) -> Chain<'a> {
        self.assume_true(message, !std::ptr::eq(expected, actual))
    }
}

/// Emptiness test shared by the string and collection assumptions.
pub trait Emptiness {
    /// Whether the value has no contents.
    fn is_empty(&self) -> bool;
}

impl Emptiness for str {
    fn is_empty(&self) -> bool {
        str::is_empty(self)
    }
}

impl Emptiness for String {
    fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }
}

impl<T> Emptiness for [T] {
    fn is_empty(&self) -> bool {
        <[T]>::is_empty(self)
    }
}

impl<T> Emptiness for Vec<T> {
    fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::*;
    use crate::Appender;

    fn captured() -> (Registry, Arc<Mutex<Vec<(Level, String, Event)>>>) {
        let registry = Registry::new();
        let records: Arc<Mutex<Vec<(Level, String, Event)>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = records.clone();
        let appender: Arc<dyn Appender> =
            Arc::new(move |level: Level, source: &str, event: &Event| {
                sink.lock().push((level, source.to_owned(), event.clone()));
            });
        registry.add(Level::VERBOSE, ".*", appender).unwrap();
        (registry, records)
    }

    #[test]
    fn true_assumption_logs_nothing_and_stays_alive() {
        let (registry, records) = captured();
        let chain = registry.assume("t.Chain").assume_true("test", true);
        assert!(chain.is_alive());
        assert!(records.lock().is_empty());
    }

    #[test]
    fn false_assumption_logs_one_assert_event() {
        let (registry, records) = captured();
        let chain = registry.assume("t.Chain").assume_true("test", false);
        assert!(!chain.is_alive());

        let records = records.lock();
        assert_eq!(records.len(), 1);
        let (level, source, event) = &records[0];
        assert_eq!(*level, Level::ASSERT);
        assert_eq!(source, "t.Chain");
        assert_eq!(event.text(), "test");
        assert_eq!(
            event.error().unwrap().message(),
            "assertion failed: test"
        );
    }

    #[test]
    fn chain_short_circuits_after_first_failure() {
        let (registry, records) = captured();
        let _ = registry
            .assume("t.Chain")
            .assume_true("a", true)
            .assume_true("b", false)
            .assume_true("c", true)
            .assume_true("d", false);

        let records = records.lock();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].2.text(), "b");
    }

    #[test]
    fn dead_chain_does_not_evaluate_lazy_conditions() {
        let (registry, records) = captured();
        let evaluated = Cell::new(false);
        let _ = registry
            .assume("t.Chain")
            .assume_true("b", false)
            .assume_with("c", || {
                evaluated.set(true);
                true
            });

        assert!(!evaluated.get());
        assert_eq!(records.lock().len(), 1);
    }

    #[test]
    fn then_runs_only_while_alive() {
        let (registry, _) = captured();
        let ran = Cell::new(0);

        let _ = registry
            .assume("t.Chain")
            .assume_true("a", true)
            .then(|| ran.set(ran.get() + 1))
            .assume_true("b", false)
            .then(|| ran.set(ran.get() + 10));

        assert_eq!(ran.get(), 1);
    }

    #[test]
    fn derived_predicates() {
        let (registry, records) = captured();

        let _ = registry
            .assume("t.Chain")
            .assume_false("false", false)
            .assume_empty("empty str", Some(""))
            .assume_empty("absent str", None::<&str>)
            .assume_empty("empty vec", Some(&Vec::<u8>::new()))
            .assume_not_empty("letters", Some("abc"))
            .assume_not_empty("one elem", Some(&[1u8][..]))
            .assume_eq("nums", &2, &(1 + 1))
            .assume_ne("nums differ", &2, &3)
            .assume_some("present", Some(&5))
            .assume_none("absent", None::<&u8>);
        assert!(records.lock().is_empty());

        let _ = registry.assume("t.Chain").assume_eq("nums", &2, &3);
        let records = records.lock();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].2.text(), "nums");
    }

    #[test]
    fn absent_values_fail_not_empty() {
        let (registry, records) = captured();
        let _ = registry
            .assume("t.Chain")
            .assume_not_empty("missing", None::<&str>);
        assert_eq!(records.lock().len(), 1);
    }

    #[test]
    fn identity_assumptions() {
        let (registry, records) = captured();
        let a = String::from("x");
        let b = String::from("x");

        let _ = registry
            .assume("t.Chain")
            .assume_same("same object", &a, &a)
            .assume_not_same("distinct objects", &a, &b)
            .assume_eq("but equal", &a, &b);
        assert!(records.lock().is_empty());

        let _ = registry.assume("t.Chain").assume_same("not same", &a, &b);
        assert_eq!(records.lock().len(), 1);
    }
}
