//! Log events
//!
//! An [`Event`] is either a plain message or a message paired with an
//! [`ErrorValue`]. Events are immutable once constructed and the registry
//! hands them to appenders unchanged.

use std::fmt;

/// The payload of a single log emission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// A plain message.
    Message {
        /// Message text.
        text: String,
    },
    /// A message paired with an error payload.
    MessageWithError {
        /// Message text.
        text: String,
        /// The error that accompanies the message.
        error: ErrorValue,
    },
}

impl Event {
    /// A plain message event.
    pub fn message(text: impl Into<String>) -> Event {
        Event::Message { text: text.into() }
    }

    /// A message event carrying an error payload.
    pub fn with_error(text: impl Into<String>, error: ErrorValue) -> Event {
        Event::MessageWithError {
            text: text.into(),
            error,
        }
    }

    /// Message text of either variant.
    pub fn text(&self) -> &str {
        match self {
            Event::Message { text } | Event::MessageWithError { text, .. } => text,
        }
    }

    /// The error payload, if this event carries one.
    pub fn error(&self) -> Option<&ErrorValue> {
        match self {
            Event::Message { .. } => None,
            Event::MessageWithError { error, .. } => Some(error),
        }
    }
}

/// An error payload: a message plus an optional cause chain.
///
/// This is the facade's owned, `'static` rendering of an error. It can be
/// built directly, or captured from any [`std::error::Error`] along with its
/// `source()` chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorValue {
    message: String,
    cause: Option<Box<ErrorValue>>,
}

impl ErrorValue {
    /// An error with no cause.
    pub fn new(message: impl Into<String>) -> ErrorValue {
        ErrorValue {
            message: message.into(),
            cause: None,
        }
    }

    /// The payload logged for a failed assumption.
    pub fn assertion(message: &str) -> ErrorValue {
        ErrorValue::new(format!("assertion failed: {message}"))
    }

    /// Attaches a cause, returning the extended error.
    pub fn with_cause(mut self, cause: ErrorValue) -> ErrorValue {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Captures a std error and its full `source()` chain.
    pub fn from_error<E>(err: &E) -> ErrorValue
    where
        E: std::error::Error + ?Sized,
    {
        ErrorValue {
            message: err.to_string(),
            cause: err.source().map(|s| Box::new(ErrorValue::from_dyn(s))),
        }
    }

    fn from_dyn(err: &(dyn std::error::Error + 'static)) -> ErrorValue {
        ErrorValue {
            message: err.to_string(),
            cause: err.source().map(|s| Box::new(ErrorValue::from_dyn(s))),
        }
    }

    /// Top-level message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Direct cause, if any.
    pub fn cause(&self) -> Option<&ErrorValue> {
        self.cause.as_deref()
    }

    /// Iterates this error and every cause below it, outermost first.
    pub fn chain(&self) -> impl Iterator<Item = &ErrorValue> {
        let mut next = Some(self);
        std::iter::from_fn(move || {
            let current = next?;
            next = current.cause();
            Some(current)
        })
    }
}

impl fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
