//! Exact/wildcard classifier
//!
//! Decides whether a pattern, compared against the target, qualifies as a
//! literal, trailing-wildcard or suffix-wildcard match. Rules are evaluated in
//! order; the first one that succeeds wins:
//!
//! 1. literal equality
//! 2. trailing wildcard (`/admin/*` → target starts with `/admin`)
//! 3. suffix wildcard (`/*.jsp` → target ends with `.jsp`)
//!
//! A pattern that passes none of them may still match as a template via
//! [`bind`](crate::bind).

use crate::pattern::{SUFFIX_WILDCARD, TRAILING_WILDCARD};

/// Returns `true` if `pattern` matches `target` literally or by wildcard.
///
/// # Example
///
/// ```
/// use pathmatch::classify;
///
/// assert!(classify("/admin/console", "/admin/console"));
/// assert!(classify("/admin/*", "/admin/users"));
/// assert!(classify("/admin/*", "/admin"));
/// assert!(classify("/*.jsp", "/foo/bar.jsp"));
/// assert!(!classify("/*.jsp", "/foo/bar.html"));
/// ```
#[must_use]
pub fn classify(pattern: &str, target: &str) -> bool {
    confirms(pattern, target, pattern)
}

/// Classifier with an explicit candidate for the literal rule.
///
/// Rule 1 compares `candidate` against `target`; rules 2 and 3 still look at
/// `pattern`. The engine passes the binder's reconstruction as `candidate` to
/// confirm a template match.
///
/// ```
/// use pathmatch::confirms;
///
/// assert!(confirms("/users/{id}", "/users/42", "/users/42"));
/// assert!(!confirms("/users/{id}", "/users/42", "/users/{id}"));
/// ```
#[must_use]
pub fn confirms(pattern: &str, target: &str, candidate: &str) -> bool {
    if candidate == target {
        return true;
    }

    if let Some(prefix) = pattern.strip_suffix(TRAILING_WILDCARD) {
        return target.starts_with(prefix);
    }

    if let Some(index) = pattern.find(SUFFIX_WILDCARD) {
        // Keep the dot: "/*.jsp" protects ".jsp", not "jsp".
        return target.ends_with(&pattern[index + 2..]);
    }

    false
}
