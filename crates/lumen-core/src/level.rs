//! Severity levels
//!
//! Levels are ordered by a numeric rank instead of a closed enum so that
//! downstream code can define its own levels between or beyond the six
//! standard ones. Two levels with the same rank are interchangeable for
//! filtering purposes, even if their names differ.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A log severity. Ordering, equality and hashing all go through [`rank`].
///
/// [`rank`]: Level::rank
#[derive(Clone, Copy, Debug)]
pub struct Level {
    rank: i32,
    name: &'static str,
}

impl Level {
    /// Finer-grained informational events than [`Level::DEBUG`].
    pub const VERBOSE: Level = Level::named(0, "verbose");

    /// Fine-grained informational events, most useful when debugging.
    pub const DEBUG: Level = Level::named(1, "debug");

    /// Coarse-grained application progress.
    pub const INFO: Level = Level::named(2, "info");

    /// Potentially harmful situations.
    pub const WARN: Level = Level::named(3, "warn");

    /// Errors that might still allow the application to keep running.
    pub const ERROR: Level = Level::named(4, "error");

    /// Very severe errors and broken code assumptions.
    pub const ASSERT: Level = Level::named(5, "assert");

    /// A custom unnamed level.
    pub const fn new(rank: i32) -> Level {
        Level { rank, name: "" }
    }

    /// A custom level with a diagnostic name.
    pub const fn named(rank: i32, name: &'static str) -> Level {
        Level { rank, name }
    }

    /// Numeric rank, the sole ordering mechanism.
    #[inline]
    pub const fn rank(self) -> i32 {
        self.rank
    }

    /// Diagnostic name. Empty for unnamed custom levels.
    pub const fn name(self) -> &'static str {
        self.name
    }
}

impl PartialEq for Level {
    fn eq(&self, other: &Level) -> bool {
        self.rank == other.rank
    }
}

impl Eq for Level {}

impl PartialOrd for Level {
    fn partial_cmp(&self, other: &Level) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Level {
    fn cmp(&self, other: &Level) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

impl Hash for Level {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "level({})", self.rank)
        } else {
            f.write_str(self.name)
        }
    }
}
