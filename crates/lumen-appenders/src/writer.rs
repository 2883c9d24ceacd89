//! Writer-backed text appender
//!
//! Renders events as `TIMESTAMP/ L/Source: message`, one line per cause in
//! the error chain below, and flushes after every event. Writes are
//! serialized through a mutex so one appender instance can back several
//! bindings.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use chrono::Local;
use parking_lot::Mutex;

use lumen_core::{Appender, Event, Level};

/// An appender that writes a plain text layout to any [`Write`].
pub struct WriterAppender<W: Write + Send> {
    writer: Mutex<W>,
    timestamps: bool,
}

impl<W: Write + Send> WriterAppender<W> {
    /// Wraps `writer`, timestamps enabled.
    pub fn new(writer: W) -> WriterAppender<W> {
        WriterAppender {
            writer: Mutex::new(writer),
            timestamps: true,
        }
    }

    /// Drops the timestamp prefix; useful for deterministic output.
    pub fn without_timestamps(mut self) -> WriterAppender<W> {
        self.timestamps = false;
        self
    }

    /// Unwraps the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl WriterAppender<io::Stdout> {
    /// An appender writing to standard output.
    pub fn stdout() -> WriterAppender<io::Stdout> {
        WriterAppender::new(io::stdout())
    }
}

impl WriterAppender<io::Stderr> {
    /// An appender writing to standard error.
    pub fn stderr() -> WriterAppender<io::Stderr> {
        WriterAppender::new(io::stderr())
    }
}

impl WriterAppender<File> {
    /// An appender appending to the file at `path`, creating it if needed.
    pub fn file(path: impl AsRef<Path>) -> io::Result<WriterAppender<File>> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(WriterAppender::new(file))
    }
}

impl<W: Write + Send> Appender for WriterAppender<W> {
    fn append(&self, level: Level, source: &str, event: &Event) {
        let mut writer = self.writer.lock();
        if self.timestamps {
            let _ = write!(writer, "{}/ ", Local::now().format("%Y-%m-%d %H:%M:%S%.3f"));
        }
        let _ = writeln!(
            writer,
            "{}/{}: {}",
            level_tag(level),
            short_source(source),
            event.text()
        );
        if let Some(error) = event.error() {
            for (depth, cause) in error.chain().enumerate() {
                if depth == 0 {
                    let _ = writeln!(writer, "{}", cause.message());
                } else {
                    let _ = writeln!(writer, "caused by: {}", cause.message());
                }
            }
        }
        let _ = writer.flush();
    }
}

fn level_tag(level: Level) -> &'static str {
    match level.rank() {
        r if r == Level::VERBOSE.rank() => "V",
        r if r == Level::DEBUG.rank() => "D",
        r if r == Level::INFO.rank() => "I",
        r if r == Level::WARN.rank() => "W",
        r if r == Level::ERROR.rank() => "E",
        r if r == Level::ASSERT.rank() => "A",
        _ => "?",
    }
}

/// The last path segment of a source name, `::` or `.` separated.
fn short_source(source: &str) -> &str {
    let tail = source.rsplit("::").next().unwrap_or(source);
    tail.rsplit('.').next().unwrap_or(tail)
}
