//! pathmatch - best-match selection of URI path patterns
//!
//! Given a target path and an ordered collection of entries, each carrying an
//! optional pattern, pathmatch selects the single most specific entry.
//!
//! # Architecture
//!
//! - [`PathProvider`] — Capability the engine is parameterized over: entries,
//!   pattern extraction, and an optional resolver hook
//! - [`classify`] — Exact/wildcard classifier (literal, `/*`, `/*.ext`)
//! - [`bind`] — Template binder (`{name}` and `*` parameters)
//! - [`PathMatcher`] — Specificity resolver: one pass, best candidate wins
//! - [`PathTable`] — Ready-made ordered provider
//!
//! # Key Design Insights
//!
//! 1. **No inheritance**: the engine takes a provider rather than being
//!    extended. Overriding [`PathProvider::resolve`] is the only hook.
//!
//! 2. **Malformed patterns never poison a scan**: an unparseable pattern
//!    simply does not match. Strict checks live in [`validate_pattern`] for
//!    config-time use.
//!
//! 3. **Entry order matters**: see [`PathMatcher`] for the ordering invariant.
//!
//! # Example
//!
//! ```
//! use pathmatch::prelude::*;
//!
//! let table = PathTable::new()
//!     .with("/admin/*", "admin")
//!     .with("/users/{id}", "user")
//!     .with("/*.jsp", "jsp");
//!
//! let matcher = table.matcher();
//! let entry = matcher.matches("/users/42").unwrap();
//! assert_eq!(*entry.action(), "user");
//!
//! let binding = bind("/users/{id}", "/users/42").unwrap();
//! assert_eq!(binding.param("id"), Some("42"));
//! ```

// ═══════════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════════

mod binder;
mod classifier;
mod matcher;
mod pattern;
mod provider;
mod table;
mod trace;

#[cfg(feature = "serde")]
mod config;

// ═══════════════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════════════

// Core types
pub use binder::{bind, Binding, Param};
pub use classifier::{classify, confirms};
pub use matcher::PathMatcher;
pub use provider::PathProvider;
pub use table::{PathEntry, PathTable};

// Pattern inspection
pub use pattern::{
    base_path, ends_with_wildcard, is_template, segment_count, segments, validate_pattern,
    PatternKind, WILDCARD,
};

// Trace types
pub use trace::{Bucket, MatchStep, MatchTrace, StepOutcome};

// Config (feature-gated)
#[cfg(feature = "serde")]
pub use config::{PathEntryConfig, PathTableConfig};

// ═══════════════════════════════════════════════════════════════════════════════
// Prelude
// ═══════════════════════════════════════════════════════════════════════════════

/// Prelude module for convenient imports.
///
/// ```
/// use pathmatch::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Functions
        base_path,
        bind,
        classify,
        validate_pattern,
        // Core types
        Binding,
        PathEntry,
        PathMatcher,
        PathProvider,
        PathTable,
        PatternKind,
        // Trace types
        MatchStep,
        MatchTrace,
        StepOutcome,
        // Errors
        PathMatchError,
    };
}

// ═══════════════════════════════════════════════════════════════════════════════
// Constants
// ═══════════════════════════════════════════════════════════════════════════════

/// Maximum pattern length accepted by [`validate_pattern`].
pub const MAX_PATTERN_LENGTH: usize = 8192;

/// Maximum number of entries accepted by [`PathTable::validate`].
///
/// Each call scans every entry, so the table size bounds the cost of a lookup.
pub const MAX_ENTRIES: usize = 16_384;

// ═══════════════════════════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════════════════════════

/// Errors from config loading and strict validation.
///
/// Matching itself never fails: no match is `None`, and a malformed pattern
/// only causes its own entry to be skipped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathMatchError {
    /// A pattern exceeds [`MAX_PATTERN_LENGTH`].
    #[error("pattern length is {len}, but maximum allowed is {max}")]
    PatternTooLong {
        /// Actual length of the pattern.
        len: usize,
        /// Maximum allowed length.
        max: usize,
    },
    /// A table holds more than [`MAX_ENTRIES`] entries.
    #[error("table has {count} entries, but maximum allowed is {max}")]
    TooManyEntries {
        /// Actual number of entries.
        count: usize,
        /// Maximum allowed.
        max: usize,
    },
    /// A pattern can never match the way its author intended.
    #[error("malformed pattern \"{pattern}\": {reason}")]
    MalformedPattern {
        /// The offending pattern.
        pattern: String,
        /// What is wrong with it.
        reason: String,
    },
    /// Configuration deserialization or construction failed.
    #[error("invalid config: {message}")]
    InvalidConfig {
        /// The underlying error message.
        message: String,
    },
}
