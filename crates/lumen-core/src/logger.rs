//! Call-site helpers over the global registry
//!
//! Thin wrappers around [`global()`][crate::global] for the common "tag a
//! message with who I am and send it" case. Source names are plain strings;
//! [`source_of`] derives one from a type when the caller has no better tag.

use crate::{global, Chain, ErrorValue, Event, Level};

/// The fully qualified name of `T`, usable as a source name.
pub fn source_of<T: ?Sized>() -> &'static str {
    std::any::type_name::<T>()
}

/// Emits a plain message at `level` through the global registry.
pub fn log(level: Level, source: &str, message: impl Into<String>) {
    global().log(level, source, &Event::message(message));
}

/// Emits a message with an error payload at `level`.
pub fn log_with(level: Level, source: &str, message: impl Into<String>, error: ErrorValue) {
    global().log(level, source, &Event::with_error(message, error));
}

/// Emits at [`Level::VERBOSE`].
pub fn verbose(source: &str, message: impl Into<String>) {
    log(Level::VERBOSE, source, message);
}

/// Emits at [`Level::DEBUG`].
pub fn debug(source: &str, message: impl Into<String>) {
    log(Level::DEBUG, source, message);
}

/// Emits at [`Level::INFO`].
pub fn info(source: &str, message: impl Into<String>) {
    log(Level::INFO, source, message);
}

/// Emits at [`Level::WARN`].
pub fn warn(source: &str, message: impl Into<String>) {
    log(Level::WARN, source, message);
}

/// Emits at [`Level::ERROR`].
pub fn error(source: &str, message: impl Into<String>) {
    log(Level::ERROR, source, message);
}

/// Unconditionally logs an assertion failure for `message`.
///
/// Purely a logged side effect; control flow is never interrupted.
pub fn fail(source: &str, message: &str) {
    global().log(
        Level::ASSERT,
        source,
        &Event::with_error(message, ErrorValue::assertion(message)),
    );
}

/// Logs an assertion failure carrying an existing error payload.
pub fn fail_with(source: &str, message: impl Into<String>, error: ErrorValue) {
    global().log(Level::ASSERT, source, &Event::with_error(message, error));
}

/// Starts an assumption chain over the global registry.
pub fn assume(source: &str) -> Chain<'_> {
    global().assume(source)
}
