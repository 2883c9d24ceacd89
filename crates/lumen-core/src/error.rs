//! Error types for the LUMEN facade

use thiserror::Error;

/// Core LUMEN errors
#[derive(Error, Debug)]
pub enum LumenError {
    #[error("invalid source pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Result type for LUMEN operations
pub type LumenResult<T> = Result<T, LumenError>;
