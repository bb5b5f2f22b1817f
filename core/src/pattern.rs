//! Pattern inspection — shape, base path and segment counting
//!
//! Patterns are plain strings. Nothing here allocates or compiles anything:
//! every helper is a pure function over `&str`, so the engine can inspect a
//! pattern on every call without caching.
//!
//! # Pattern shapes
//!
//! | Shape | Example | Meaning |
//! |-------|---------|---------|
//! | literal | `/admin/console` | exact text |
//! | trailing wildcard | `/admin/*` | this path or anything below it |
//! | suffix wildcard | `/*.jsp` | any target ending in `.jsp` |
//! | template | `/users/{id}` | named single-segment parameters, `*` for the rest |

use crate::{PathMatchError, MAX_PATTERN_LENGTH};
use std::fmt;

/// The wildcard marker.
pub const WILDCARD: char = '*';

/// Trailing wildcard marker: a separator followed by [`WILDCARD`].
pub const TRAILING_WILDCARD: &str = "/*";

/// Suffix wildcard marker as the classifier recognizes it.
pub const SUFFIX_WILDCARD: &str = "/*.";

/// Opening brace of a template parameter.
pub const PARAM_OPEN: char = '{';

/// Closing brace of a template parameter.
pub const PARAM_CLOSE: char = '}';

/// The shape of a pattern, in the order the engine cares about.
///
/// Shapes are checked template-first: `/files/{id}/*` is a template even
/// though it also ends in a trailing wildcard.
///
/// # Example
///
/// ```
/// use pathmatch::PatternKind;
///
/// assert_eq!(PatternKind::of("/admin/console"), PatternKind::Literal);
/// assert_eq!(PatternKind::of("/admin/*"), PatternKind::TrailingWildcard);
/// assert_eq!(PatternKind::of("/*.jsp"), PatternKind::SuffixWildcard);
/// assert_eq!(PatternKind::of("/users/{id}"), PatternKind::Template);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PatternKind {
    /// Exact text.
    Literal,
    /// Ends in `/*`.
    TrailingWildcard,
    /// Contains `/*.`.
    SuffixWildcard,
    /// Contains at least one `{`.
    Template,
}

impl PatternKind {
    /// Classify a pattern by shape.
    #[must_use]
    pub fn of(pattern: &str) -> Self {
        if is_template(pattern) {
            Self::Template
        } else if pattern.ends_with(TRAILING_WILDCARD) {
            Self::TrailingWildcard
        } else if pattern.contains(SUFFIX_WILDCARD) {
            Self::SuffixWildcard
        } else {
            Self::Literal
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Literal => "literal",
            Self::TrailingWildcard => "trailing wildcard",
            Self::SuffixWildcard => "suffix wildcard",
            Self::Template => "template",
        };
        f.write_str(name)
    }
}

/// Returns `true` if the pattern contains a template parameter.
#[must_use]
pub fn is_template(pattern: &str) -> bool {
    pattern.contains(PARAM_OPEN)
}

/// Returns `true` if the last character of the pattern is [`WILDCARD`].
///
/// This is looser than [`PatternKind::TrailingWildcard`]: `/files/{id}*` ends
/// in a wildcard too, and the resolver buckets it with the trailing wildcards.
#[must_use]
pub fn ends_with_wildcard(pattern: &str) -> bool {
    pattern.ends_with(WILDCARD)
}

/// The literal part of a pattern before any wildcard or parameter.
///
/// Truncates at the first `/*` or `{`, whichever comes first. An empty result
/// is normalized to `/`.
///
/// ```
/// use pathmatch::base_path;
///
/// assert_eq!(base_path("/admin/*"), "/admin");
/// assert_eq!(base_path("/users/{id}/profile"), "/users/");
/// assert_eq!(base_path("/*.jsp"), "/");
/// assert_eq!(base_path("/plain"), "/plain");
/// ```
#[must_use]
pub fn base_path(pattern: &str) -> &str {
    let cut = [
        pattern.find(TRAILING_WILDCARD),
        pattern.find(PARAM_OPEN),
    ]
    .into_iter()
    .flatten()
    .min()
    .unwrap_or(pattern.len());

    match &pattern[..cut] {
        "" => "/",
        base => base,
    }
}

/// Split a path into `/`-delimited segments, dropping trailing empty segments.
///
/// Leading empty segments are kept, so `/a/b` yields `["", "a", "b"]`.
/// A path made only of separators yields nothing; the empty path yields one
/// empty segment.
///
/// ```
/// use pathmatch::segments;
///
/// assert_eq!(segments("/a/b"), vec!["", "a", "b"]);
/// assert_eq!(segments("a/b/"), vec!["a", "b"]);
/// assert!(segments("/").is_empty());
/// assert_eq!(segments(""), vec![""]);
/// ```
#[must_use]
pub fn segments(path: &str) -> Vec<&str> {
    if path.is_empty() {
        return vec![""];
    }

    let mut parts: Vec<&str> = path.split('/').collect();
    while parts.last().is_some_and(|s| s.is_empty()) {
        parts.pop();
    }
    parts
}

/// Number of segments as counted by [`segments`].
///
/// This is the specificity of a template: more segments beat fewer.
#[must_use]
pub fn segment_count(path: &str) -> usize {
    segments(path).len()
}

/// Strictly validate a pattern for configuration loading.
///
/// Matching never calls this: a malformed pattern simply does not match.
/// Use it where a config author should hear about a pattern that can never
/// do what they meant.
///
/// Rejects:
/// - patterns longer than [`MAX_PATTERN_LENGTH`]
/// - unbalanced or nested braces, and empty parameter names
/// - a `*` that is not a trailing `/*`, part of a `/*.` suffix, or inside a template
///
/// # Errors
///
/// Returns [`PathMatchError::PatternTooLong`] or
/// [`PathMatchError::MalformedPattern`].
pub fn validate_pattern(pattern: &str) -> Result<PatternKind, PathMatchError> {
    if pattern.len() > MAX_PATTERN_LENGTH {
        return Err(PathMatchError::PatternTooLong {
            len: pattern.len(),
            max: MAX_PATTERN_LENGTH,
        });
    }

    let malformed = |reason: &str| PathMatchError::MalformedPattern {
        pattern: pattern.to_owned(),
        reason: reason.to_owned(),
    };

    let mut open: Option<usize> = None;
    for (i, c) in pattern.char_indices() {
        match c {
            PARAM_OPEN if open.is_some() => return Err(malformed("nested '{'")),
            PARAM_OPEN => open = Some(i),
            PARAM_CLOSE => match open.take() {
                None => return Err(malformed("'}' without matching '{'")),
                Some(start) if start + 1 == i => {
                    return Err(malformed("empty parameter name"));
                }
                Some(_) => {}
            },
            _ => {}
        }
    }
    if open.is_some() {
        return Err(malformed("unterminated '{'"));
    }

    let kind = PatternKind::of(pattern);
    if kind != PatternKind::Template {
        for (i, _) in pattern.match_indices(WILDCARD) {
            let trailing = i + 1 == pattern.len() && pattern[..i].ends_with('/');
            let suffix = pattern[..i].ends_with('/') && pattern[i + 1..].starts_with('.');
            if !trailing && !suffix {
                return Err(malformed(
                    "'*' must end the pattern as '/*' or start a '/*.ext' suffix",
                ));
            }
        }
    }

    Ok(kind)
}
