//! LUMEN Appenders - Ready-made log sinks
//!
//! - [`WriterAppender`]: timestamped text layout over any `std::io::Write`,
//!   with stdout/stderr/file constructors
//! - [`CaptureAppender`]: records events in memory, for tests and
//!   diagnostics

pub mod capture;
pub mod writer;

pub use capture::*;
pub use writer::*;
