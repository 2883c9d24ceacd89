//! LUMEN Core - Leveled log fan-out
//!
//! This crate implements the logging facade core:
//! - Severity levels (open-ended numeric ranks)
//! - Log events and error payloads
//! - The appender capability
//! - Source-name patterns (full-match regex)
//! - The process-wide binding registry and dispatch engine
//! - Assumption chains (short-circuiting checks logged at Assert level)
//! - Call-site helpers over the global registry

pub mod appender;
pub mod assume;
pub mod error;
pub mod event;
pub mod level;
pub mod logger;
pub mod pattern;
pub mod registry;

pub use appender::*;
pub use assume::*;
pub use error::*;
pub use event::*;
pub use level::*;
pub use pattern::*;
pub use registry::*;
