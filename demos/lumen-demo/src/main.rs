//! LUMEN demo
//!
//! Wires the global registry the way an application would:
//! - a console appender for everything at Verbose and above
//! - a file appender for demo-local sources only, at Warn and above
//!
//! then emits a few events and walks an assumption chain.

use std::sync::Arc;

use lumen_appenders::WriterAppender;
use lumen_core::{global, logger, Appender, ErrorValue, Level};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let console: Arc<dyn Appender> = Arc::new(WriterAppender::stdout());
    let file: Arc<dyn Appender> = Arc::new(WriterAppender::file("demo-log.txt")?);

    global()
        .add(Level::VERBOSE, ".*", console.clone())?
        .add(Level::WARN, r"lumen_demo::.+", file.clone())?;

    let source = logger::source_of::<Tokens>();

    logger::verbose(source, "starting up");
    logger::info(source, "issuing 3 tokens");
    logger::warn(source, "token bucket below 10%");
    logger::log_with(
        Level::ERROR,
        source,
        "token refresh failed",
        ErrorValue::new("connection reset").with_cause(ErrorValue::new("link down")),
    );

    let issued = vec!["alpha", "beta", "gamma"];
    let _ = logger::assume(source)
        .assume_not_empty("issued at least one token", Some(&issued))
        .assume_eq("issued exactly three", &3usize, &issued.len())
        .then(|| logger::info(source, "all assumptions held"))
        .assume_true("bucket never runs dry", false)
        .then(|| logger::info(source, "unreachable: chain is dead"));

    logger::fail(source, "demo of an unconditional assertion log");

    global().remove(&console);
    global().remove(&file);
    Ok(())
}

/// Stand-in component whose type name tags the demo's log events.
struct Tokens;
