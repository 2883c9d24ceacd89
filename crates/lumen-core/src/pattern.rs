//! Source-name patterns
//!
//! A binding's pattern must match the ENTIRE source name of a log request,
//! not a substring of it: `com\.foo\..+` selects `com.foo.Bar` but neither
//! `com.foobar.Bar` nor `xcom.foo.Bar`. Compilation anchors the expression
//! accordingly, so callers write plain unanchored patterns.

use std::str::FromStr;

use regex::Regex;

use crate::{LumenError, LumenResult};

/// A compiled, full-match-anchored source-name pattern.
#[derive(Clone, Debug)]
pub struct SourcePattern {
    raw: String,
    regex: Regex,
}

impl SourcePattern {
    /// Compiles `pattern`. Fails on malformed regex syntax.
    pub fn new(pattern: &str) -> LumenResult<SourcePattern> {
        let regex =
            Regex::new(&format!(r"\A(?:{pattern})\z")).map_err(|source| {
                LumenError::InvalidPattern {
                    pattern: pattern.to_owned(),
                    source,
                }
            })?;
        Ok(SourcePattern {
            raw: pattern.to_owned(),
            regex,
        })
    }

    /// The `.*` pattern, matching every source name.
    pub fn any() -> SourcePattern {
        SourcePattern {
            raw: ".*".to_owned(),
            // ".*" is valid syntax, compilation cannot fail
            regex: Regex::new(r"\A(?:.*)\z").expect("literal pattern"),
        }
    }

    /// Whether this pattern matches the whole of `source`.
    pub fn matches(&self, source: &str) -> bool {
        self.regex.is_match(source)
    }

    /// The pattern text as supplied, without the anchoring.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for SourcePattern {
    type Err = LumenError;

    fn from_str(s: &str) -> LumenResult<SourcePattern> {
        SourcePattern::new(s)
    }
}
