//! Evaluation trace types for debugging match decisions.
//!
//! [`PathMatcher::matches_with_trace`](crate::PathMatcher::matches_with_trace)
//! runs the same scan as `matches()` and records one [`MatchStep`] per entry it
//! examined, so you can see why a less specific entry won or why a template
//! was passed over.
//!
//! # Example
//!
//! ```
//! use pathmatch::PathTable;
//!
//! let table = PathTable::new()
//!     .with("/users/*", "any-user")
//!     .with("/users/{id}/profile", "profile");
//!
//! let matcher = table.matcher();
//! let trace = matcher.matches_with_trace("/users/42/profile");
//! assert_eq!(trace.result.as_deref().map(|e| *e.action()), Some("profile"));
//! for step in &trace.steps {
//!     println!("[{}] {:?} -> {:?}", step.index, step.pattern, step.outcome);
//! }
//! ```

use std::borrow::Cow;
use std::fmt;

/// How a single entry fared against the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The entry has no pattern.
    Skipped,
    /// Neither the classifier nor the binder accepted the pattern.
    NoMatch,
    /// The classifier accepted the pattern as a literal or wildcard match.
    Classified,
    /// The template bound and was confirmed; it became the most specific
    /// template so far.
    TemplateBound {
        /// The reconstructed path.
        uri: String,
        /// The template's segment count.
        segments: usize,
    },
    /// The template bound, but an earlier template had at least as many segments.
    TemplateOutranked {
        /// The template's segment count.
        segments: usize,
        /// The segment count it had to beat.
        best: usize,
    },
}

/// Which result slot an entry was recorded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    /// Returned immediately: exact match with no template recorded yet.
    ShortCircuit,
    /// Matched the target exactly after a template had been recorded.
    Template,
    /// Trailing-wildcard candidate.
    TrailingWildcard,
    /// Suffix-wildcard candidate.
    SuffixWildcard,
}

/// One entry's evaluation in a trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchStep {
    /// Position in the provider's entry slice (0-based).
    pub index: usize,
    /// The entry's pattern, if it has one.
    pub pattern: Option<String>,
    /// What the classifier and binder decided.
    pub outcome: StepOutcome,
    /// Every slot this entry was written to, in order.
    pub buckets: Vec<Bucket>,
}

/// Trace of a full [`PathMatcher`](crate::PathMatcher) call.
///
/// # INV: `result` == `matches()` result
///
/// The `result` field always equals what
/// [`PathMatcher::matches`](crate::PathMatcher::matches) returns for the same
/// target and provider.
pub struct MatchTrace<'a, E: Clone> {
    /// The final result (identical to what `matches()` returns).
    pub result: Option<Cow<'a, E>>,
    /// One step per entry examined, in provider order. Stops early on a
    /// short circuit.
    pub steps: Vec<MatchStep>,
    /// Whether an exact match ended the scan early.
    pub short_circuited: bool,
}

impl<E: Clone + fmt::Debug> fmt::Debug for MatchTrace<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchTrace")
            .field("result", &self.result)
            .field("steps", &self.steps)
            .field("short_circuited", &self.short_circuited)
            .finish()
    }
}

impl fmt::Display for MatchStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ", self.index)?;
        match &self.pattern {
            Some(p) => write!(f, "{p:?}")?,
            None => f.write_str("(no pattern)")?,
        }
        match &self.outcome {
            StepOutcome::Skipped => f.write_str(" skipped")?,
            StepOutcome::NoMatch => f.write_str(" no match")?,
            StepOutcome::Classified => f.write_str(" classified")?,
            StepOutcome::TemplateBound { uri, segments } => {
                write!(f, " bound {uri:?} ({segments} segments)")?;
            }
            StepOutcome::TemplateOutranked { segments, best } => {
                write!(f, " outranked ({segments} segments, best {best})")?;
            }
        }
        if !self.buckets.is_empty() {
            write!(f, " -> {:?}", self.buckets)?;
        }
        Ok(())
    }
}
