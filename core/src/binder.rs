//! Template binder — reconstruct a concrete path from a template
//!
//! Given `/users/{id}/profile` and `/users/42/profile`, the binder walks the
//! template, substitutes target segments for each parameter and returns the
//! reconstructed path `/users/42/profile` together with the captured values.
//!
//! The reconstruction is deliberately literal-preserving: literal template
//! text is copied from the *pattern*, not the target. A result that differs
//! from the target therefore means the literals didn't line up, which the
//! engine detects by confirming the result with the
//! [classifier](crate::confirms).
//!
//! # Parameters
//!
//! - `{name}` captures the target segment at the current position.
//! - `*` captures every remaining target segment, joined with `/`, and is
//!   recorded under the name `*`.

use crate::pattern::{segment_count, segments, PARAM_CLOSE, PARAM_OPEN, WILDCARD};
use std::fmt;

/// A captured template parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// The parameter name between the braces, or `*` for a greedy capture.
    pub name: String,
    /// The captured target text.
    pub value: String,
}

/// The result of binding a template against a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    uri: String,
    params: Vec<Param>,
}

impl Binding {
    /// The reconstructed path.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Captured parameters in template order.
    #[must_use]
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Look up a captured value by parameter name (first occurrence).
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }

    /// Consume the binding, keeping only the reconstructed path.
    #[must_use]
    pub fn into_uri(self) -> String {
        self.uri
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri)?;
        if !self.params.is_empty() {
            f.write_str(" {")?;
            for (i, p) in self.params.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}={:?}", p.name, p.value)?;
            }
            f.write_str("}")?;
        }
        Ok(())
    }
}

/// Output buffer that refuses to grow past the target's length.
struct Bounded {
    buf: String,
    limit: usize,
}

impl Bounded {
    fn new(limit: usize) -> Self {
        Self {
            buf: String::with_capacity(limit),
            limit,
        }
    }

    fn push_str(&mut self, s: &str) -> Option<()> {
        if self.buf.len() + s.len() > self.limit {
            return None;
        }
        self.buf.push_str(s);
        Some(())
    }

    fn push(&mut self, c: char) -> Option<()> {
        if self.buf.len() + c.len_utf8() > self.limit {
            return None;
        }
        self.buf.push(c);
        Some(())
    }

    fn is_full(&self) -> bool {
        self.buf.len() == self.limit
    }
}

/// Bind a template pattern against a target path.
///
/// Returns `None` when the pattern is not a template, cannot be reconciled
/// with the target, or is malformed (an unterminated `{`).
///
/// # Example
///
/// ```
/// use pathmatch::bind;
///
/// let binding = bind("/users/{id}", "/users/42").unwrap();
/// assert_eq!(binding.uri(), "/users/42");
/// assert_eq!(binding.param("id"), Some("42"));
///
/// assert!(bind("/users/{id}/profile", "/users/42").is_none());
/// assert!(bind("/users/{id}", "/groups/42").is_none());
/// ```
#[must_use]
pub fn bind(pattern: &str, target: &str) -> Option<Binding> {
    let start = pattern.find(PARAM_OPEN)?;
    if start >= target.len() || segment_count(pattern) > segment_count(target) {
        return None;
    }

    let prefix = &pattern[..start];
    let tail = target.strip_prefix(prefix)?;
    let tokens = segments(tail);

    let mut out = Bounded::new(target.len());
    out.push_str(prefix)?;

    let mut params = Vec::new();
    let mut index = 0;
    let mut rest = &pattern[start..];

    while let Some(c) = rest.chars().next() {
        match c {
            PARAM_OPEN => {
                let Some(close) = rest.find(PARAM_CLOSE) else {
                    tracing::debug!(pattern, "unterminated template parameter");
                    return None;
                };
                if let Some(token) = tokens.get(index) {
                    out.push_str(token)?;
                    params.push(Param {
                        name: rest[1..close].to_owned(),
                        value: (*token).to_owned(),
                    });
                }
                rest = &rest[close + 1..];
            }
            WILDCARD => {
                let captured = tokens.get(index..).unwrap_or_default();
                for token in captured {
                    out.push_str(token)?;
                    if !out.is_full() {
                        out.push('/')?;
                    }
                }
                params.push(Param {
                    name: WILDCARD.to_string(),
                    value: captured.join("/"),
                });
                match rest.find(PARAM_CLOSE) {
                    Some(close) => rest = &rest[close + 1..],
                    None => break,
                }
            }
            _ => {
                if c == '/' {
                    index += 1;
                }
                out.push(c)?;
                rest = &rest[c.len_utf8()..];
            }
        }
    }

    if !out.is_full() {
        return None;
    }

    Some(Binding {
        uri: out.buf,
        params,
    })
}
