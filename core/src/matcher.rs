//! `PathMatcher` — specificity resolution over a [`PathProvider`]
//!
//! The matcher performs one linear pass over the provider's entries, runs the
//! [classifier](crate::classify) and, for templates, the [binder](crate::bind)
//! on each, and keeps a running best candidate per result slot.
//!
//! # Precedence
//!
//! 1. An exact match found while no template has been recorded ends the scan.
//! 2. Otherwise the last entry that matched the target exactly after a
//!    template was recorded (the most specific template, or a later exact match).
//! 3. Otherwise the last suffix wildcard (`/*.jsp`) that matched.
//! 4. Otherwise the longest trailing wildcard (`/admin/*`) that matched.

use crate::pattern::{base_path, ends_with_wildcard, is_template, segment_count, WILDCARD};
use crate::trace::{Bucket, MatchStep, MatchTrace, StepOutcome};
use crate::{bind, classify, confirms, PathProvider};
use std::borrow::Cow;
use std::fmt;

/// Selects the single best-matching entry for a target path.
///
/// Stateless across calls: everything is local to one
/// [`matches`](Self::matches) call, so a shared `PathMatcher` needs no locking.
///
/// # INV: Entry order is significant
///
/// The exact-match short circuit only fires while no template has been
/// recorded. An exact literal that comes *after* a matching template does not
/// end the scan; it replaces the template as the best candidate instead.
/// Among templates with the same segment count, the first one wins.
/// Providers should list entries from most general to most specific.
///
/// # Example
///
/// ```
/// use pathmatch::PathTable;
///
/// let table = PathTable::new()
///     .with("/users/*", "any-user")
///     .with("/users/{id}/profile", "profile");
///
/// let matcher = table.matcher();
/// let entry = matcher.matches("/users/42/profile").unwrap();
/// assert_eq!(*entry.action(), "profile");
/// ```
pub struct PathMatcher<P> {
    provider: P,
}

impl<P> PathMatcher<P> {
    /// Create a matcher over a provider.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// The wrapped provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Unwrap the provider.
    pub fn into_inner(self) -> P {
        self.provider
    }
}

impl<P: PathProvider> PathMatcher<P> {
    /// Select the best entry for `target`.
    ///
    /// Returns `Cow::Borrowed` for one of the provider's entries, or
    /// `Cow::Owned` when the provider's [`resolve`](PathProvider::resolve)
    /// substituted an entry for a matching template. `None` means nothing
    /// matched; that is a normal outcome, not an error.
    pub fn matches(&self, target: &str) -> Option<Cow<'_, P::Entry>> {
        self.scan(target, &mut Recorder::off()).0
    }

    /// Like [`matches`](Self::matches), but also records how every examined
    /// entry was judged.
    pub fn matches_with_trace(&self, target: &str) -> MatchTrace<'_, P::Entry> {
        let mut steps = Vec::new();
        let (result, short_circuited) = self.scan(target, &mut Recorder::on(&mut steps));
        MatchTrace {
            result,
            steps,
            short_circuited,
        }
    }

    fn scan<'a>(
        &'a self,
        target: &str,
        recorder: &mut Recorder<'_>,
    ) -> (Option<Cow<'a, P::Entry>>, bool) {
        let provider = &self.provider;
        let mut best = Best::default();

        for (index, original) in provider.entries().iter().enumerate() {
            let Some(pattern) = provider.path(original) else {
                recorder.step(index, None, Verdict::Skipped, None, Vec::new());
                continue;
            };

            let mut entry = Cow::Borrowed(original);
            let (verdict, matched_uri) = if classify(pattern, target) {
                (Verdict::Classified, Some(Cow::Borrowed(pattern)))
            } else if is_template(pattern) {
                match bind(pattern, target) {
                    Some(binding) if confirms(pattern, target, binding.uri()) => {
                        let segments = segment_count(pattern);
                        if best.template_count == 0 || segments > best.template_count {
                            entry = provider.resolve(original, target);
                            best.template_count = segments;
                            (
                                Verdict::Bound { segments },
                                Some(Cow::Owned(binding.into_uri())),
                            )
                        } else {
                            let verdict = Verdict::Outranked {
                                segments,
                                best: best.template_count,
                            };
                            (verdict, None)
                        }
                    }
                    _ => (Verdict::NoMatch, None),
                }
            } else {
                (Verdict::NoMatch, None)
            };

            tracing::trace!(index, pattern, target, ?verdict, "evaluated entry");

            let Some(matched_uri) = matched_uri else {
                recorder.step(index, Some(pattern), verdict, None, Vec::new());
                continue;
            };

            let mut buckets = Vec::new();

            if matched_uri == target || base_path(pattern) == target {
                if best.template_count == 0 {
                    tracing::debug!(index, pattern, target, "exact match, ending scan");
                    if recorder.is_on() {
                        buckets.push(Bucket::ShortCircuit);
                    }
                    recorder.step(index, Some(pattern), verdict, Some(&*matched_uri), buckets);
                    return (Some(entry), true);
                }
                best.template = Some(entry.clone());
                if recorder.is_on() {
                    buckets.push(Bucket::Template);
                }
            }

            if ends_with_wildcard(pattern) {
                let longer = best
                    .trailing
                    .as_ref()
                    .map_or(true, |(_, held)| held.len() < pattern.len());
                if longer {
                    best.trailing = Some((entry, pattern));
                    if recorder.is_on() {
                        buckets.push(Bucket::TrailingWildcard);
                    }
                }
            } else if let Some(i) = pattern.find(SUFFIX_MARKER) {
                if target.ends_with(&pattern[i + WILDCARD.len_utf8()..]) {
                    best.suffix = Some(entry);
                    if recorder.is_on() {
                        buckets.push(Bucket::SuffixWildcard);
                    }
                }
            }

            recorder.step(index, Some(pattern), verdict, Some(&*matched_uri), buckets);
        }

        let result = best.into_result();
        if result.is_none() {
            tracing::debug!(target, "no entry matched");
        }
        (result, false)
    }
}

/// `*.` anywhere in the pattern; looser than the classifier's `/*.`.
const SUFFIX_MARKER: &str = "*.";

impl<P: fmt::Debug> fmt::Debug for PathMatcher<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathMatcher")
            .field("provider", &self.provider)
            .finish()
    }
}

impl<P: Clone> Clone for PathMatcher<P> {
    fn clone(&self) -> Self {
        Self {
            provider: self.provider.clone(),
        }
    }
}

/// Running best candidates for one call.
struct Best<'a, E: Clone> {
    template_count: usize,
    template: Option<Cow<'a, E>>,
    trailing: Option<(Cow<'a, E>, &'a str)>,
    suffix: Option<Cow<'a, E>>,
}

impl<E: Clone> Default for Best<'_, E> {
    fn default() -> Self {
        Self {
            template_count: 0,
            template: None,
            trailing: None,
            suffix: None,
        }
    }
}

impl<'a, E: Clone> Best<'a, E> {
    fn into_result(self) -> Option<Cow<'a, E>> {
        self.template
            .or(self.suffix)
            .or(self.trailing.map(|(entry, _)| entry))
    }
}

#[derive(Debug, Clone, Copy)]
enum Verdict {
    Skipped,
    NoMatch,
    Classified,
    Bound { segments: usize },
    Outranked { segments: usize, best: usize },
}

/// Collects [`MatchStep`]s only when a trace was asked for.
struct Recorder<'s> {
    steps: Option<&'s mut Vec<MatchStep>>,
}

impl<'s> Recorder<'s> {
    fn off() -> Self {
        Self { steps: None }
    }

    fn on(steps: &'s mut Vec<MatchStep>) -> Self {
        Self { steps: Some(steps) }
    }

    fn is_on(&self) -> bool {
        self.steps.is_some()
    }

    fn step(
        &mut self,
        index: usize,
        pattern: Option<&str>,
        verdict: Verdict,
        matched_uri: Option<&str>,
        buckets: Vec<Bucket>,
    ) {
        let Some(steps) = self.steps.as_deref_mut() else {
            return;
        };
        let outcome = match verdict {
            Verdict::Skipped => StepOutcome::Skipped,
            Verdict::NoMatch => StepOutcome::NoMatch,
            Verdict::Classified => StepOutcome::Classified,
            Verdict::Bound { segments } => StepOutcome::TemplateBound {
                uri: matched_uri.unwrap_or_default().to_owned(),
                segments,
            },
            Verdict::Outranked { segments, best } => {
                StepOutcome::TemplateOutranked { segments, best }
            }
        };
        steps.push(MatchStep {
            index,
            pattern: pattern.map(str::to_owned),
            outcome,
            buckets,
        });
    }
}
