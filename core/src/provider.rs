//! `PathProvider` — the capability the engine is parameterized over
//!
//! The engine owns no entries. A provider hands it an ordered slice of
//! entries, extracts each entry's pattern, and may substitute a specialized
//! entry once a template is confirmed to match.

use std::borrow::Cow;
use std::sync::Arc;

/// Supplies candidate entries and their patterns to a
/// [`PathMatcher`](crate::PathMatcher).
///
/// # Ordering
///
/// Iteration order is part of the contract. It decides which entry wins the
/// exact-match short circuit (first) and which suffix wildcard wins a tie
/// (last). Implementations must return the same order on every call.
///
/// # Thread Safety
///
/// The engine reads [`entries`](Self::entries) once per call and never
/// mutates it. Share a provider across threads behind an `Arc` snapshot.
///
/// # Example
///
/// ```
/// use pathmatch::{PathMatcher, PathProvider};
///
/// #[derive(Debug, Clone)]
/// struct Route { uri: Option<String>, name: &'static str }
///
/// struct Routes(Vec<Route>);
///
/// impl PathProvider for Routes {
///     type Entry = Route;
///
///     fn entries(&self) -> &[Route] {
///         &self.0
///     }
///
///     fn path<'e>(&self, entry: &'e Route) -> Option<&'e str> {
///         entry.uri.as_deref()
///     }
/// }
///
/// let routes = Routes(vec![
///     Route { uri: Some("/api/*".into()), name: "api" },
///     Route { uri: None, name: "unrouted" },
/// ]);
/// let matcher = PathMatcher::new(routes);
/// assert_eq!(matcher.matches("/api/users").map(|r| r.name), Some("api"));
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `PathProvider`",
    label = "this type cannot supply path entries",
    note = "implement `entries` and `path`; `resolve` defaults to returning the entry unchanged"
)]
pub trait PathProvider {
    /// The entry type. The engine hands entries back as `Cow<'_, Entry>`,
    /// so replacements from [`resolve`](Self::resolve) must be owned values.
    type Entry: Clone;

    /// All candidate entries, in their significant order.
    fn entries(&self) -> &[Self::Entry];

    /// The pattern of an entry. `None` makes the engine skip it.
    fn path<'e>(&self, entry: &'e Self::Entry) -> Option<&'e str>;

    /// Called once a template pattern is confirmed to match `target`.
    ///
    /// Return `Cow::Owned` to substitute a specialized entry (for example one
    /// carrying the bound parameter values) for the rest of the call.
    /// The default returns the entry unchanged.
    fn resolve<'e>(&self, entry: &'e Self::Entry, target: &str) -> Cow<'e, Self::Entry> {
        let _ = target;
        Cow::Borrowed(entry)
    }
}

impl<P: PathProvider + ?Sized> PathProvider for &P {
    type Entry = P::Entry;

    fn entries(&self) -> &[Self::Entry] {
        (**self).entries()
    }

    fn path<'e>(&self, entry: &'e Self::Entry) -> Option<&'e str> {
        (**self).path(entry)
    }

    fn resolve<'e>(&self, entry: &'e Self::Entry, target: &str) -> Cow<'e, Self::Entry> {
        (**self).resolve(entry, target)
    }
}

impl<P: PathProvider + ?Sized> PathProvider for Arc<P> {
    type Entry = P::Entry;

    fn entries(&self) -> &[Self::Entry] {
        (**self).entries()
    }

    fn path<'e>(&self, entry: &'e Self::Entry) -> Option<&'e str> {
        (**self).path(entry)
    }

    fn resolve<'e>(&self, entry: &'e Self::Entry, target: &str) -> Cow<'e, Self::Entry> {
        (**self).resolve(entry, target)
    }
}
