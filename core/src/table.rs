//! `PathTable` — an ordered, in-memory [`PathProvider`]
//!
//! The table is what most callers want: a list of `(pattern, action)` pairs,
//! matched in insertion order, with the identity resolver. Embedding systems
//! that need to substitute entries on a template match implement
//! [`PathProvider`] themselves.

use crate::{validate_pattern, PathMatchError, PathMatcher, PathProvider, MAX_ENTRIES};

/// One registered pattern and the action it selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEntry<A> {
    pattern: Option<String>,
    action: A,
}

impl<A> PathEntry<A> {
    /// Create an entry with a pattern.
    pub fn new(pattern: impl Into<String>, action: A) -> Self {
        Self {
            pattern: Some(pattern.into()),
            action,
        }
    }

    /// Create an entry without a pattern. The engine always skips it.
    pub fn unpatterned(action: A) -> Self {
        Self {
            pattern: None,
            action,
        }
    }

    /// The entry's pattern, if any.
    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    /// The action this entry selects.
    #[must_use]
    pub fn action(&self) -> &A {
        &self.action
    }

    /// Consume the entry, returning its action.
    pub fn into_action(self) -> A {
        self.action
    }
}

/// An ordered list of [`PathEntry`] values.
///
/// # Example
///
/// ```
/// use pathmatch::PathTable;
///
/// let table = PathTable::new()
///     .with("/admin/*", "admin")
///     .with("/*.jsp", "jsp")
///     .with("/users/{id}", "user");
///
/// let matcher = table.matcher();
/// assert_eq!(matcher.matches("/admin/users").map(|e| *e.action()), Some("admin"));
/// assert_eq!(matcher.matches("/foo/bar.jsp").map(|e| *e.action()), Some("jsp"));
/// assert_eq!(matcher.matches("/users/42").map(|e| *e.action()), Some("user"));
/// assert!(matcher.matches("/zzz").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTable<A> {
    entries: Vec<PathEntry<A>>,
}

impl<A> Default for PathTable<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> PathTable<A> {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a patterned entry (builder pattern).
    #[must_use]
    pub fn with(mut self, pattern: impl Into<String>, action: A) -> Self {
        self.entries.push(PathEntry::new(pattern, action));
        self
    }

    /// Append an entry without a pattern (builder pattern).
    #[must_use]
    pub fn with_unpatterned(mut self, action: A) -> Self {
        self.entries.push(PathEntry::unpatterned(action));
        self
    }

    /// Append an entry.
    pub fn push(&mut self, entry: PathEntry<A>) {
        self.entries.push(entry);
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in match order.
    pub fn iter(&self) -> std::slice::Iter<'_, PathEntry<A>> {
        self.entries.iter()
    }

    /// Strictly validate every pattern and the table size.
    ///
    /// Matching does not require this: malformed patterns just never match.
    /// Call it at config load time to surface mistakes.
    ///
    /// # Errors
    ///
    /// Returns [`PathMatchError::TooManyEntries`] or the first pattern error
    /// from [`validate_pattern`].
    pub fn validate(&self) -> Result<(), PathMatchError> {
        if self.entries.len() > MAX_ENTRIES {
            return Err(PathMatchError::TooManyEntries {
                count: self.entries.len(),
                max: MAX_ENTRIES,
            });
        }
        for pattern in self.entries.iter().filter_map(PathEntry::pattern) {
            validate_pattern(pattern)?;
        }
        Ok(())
    }
}

impl<A: Clone> PathTable<A> {
    /// A matcher that borrows this table.
    #[must_use]
    pub fn matcher(&self) -> PathMatcher<&Self> {
        PathMatcher::new(self)
    }
}

impl<A> FromIterator<PathEntry<A>> for PathTable<A> {
    fn from_iter<I: IntoIterator<Item = PathEntry<A>>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<A> Extend<PathEntry<A>> for PathTable<A> {
    fn extend<I: IntoIterator<Item = PathEntry<A>>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<'t, A> IntoIterator for &'t PathTable<A> {
    type Item = &'t PathEntry<A>;
    type IntoIter = std::slice::Iter<'t, PathEntry<A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<A: Clone> PathProvider for PathTable<A> {
    type Entry = PathEntry<A>;

    fn entries(&self) -> &[PathEntry<A>] {
        &self.entries
    }

    fn path<'e>(&self, entry: &'e PathEntry<A>) -> Option<&'e str> {
        entry.pattern()
    }
}
