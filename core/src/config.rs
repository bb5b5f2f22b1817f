//! Config types for building a [`PathTable`] from JSON/YAML.
//!
//! | Config type | Runtime type | Loader method |
//! |-------------|-------------|---------------|
//! | [`PathTableConfig`] | [`PathTable`] | [`PathTableConfig::load`] (strict), `From` (lenient) |
//! | [`PathEntryConfig`] | [`PathEntry`] | — |
//!
//! ```yaml
//! paths:
//!   - pattern: /admin/*
//!     action: admin
//!   - pattern: /users/{id}
//!     action: user
//!   - action: no-pattern   # kept, but never matched
//! ```

use crate::{validate_pattern, PathEntry, PathMatchError, PathTable};
use serde::Deserialize;

/// Configuration for a [`PathTable`].
///
/// Entry order in the file is match order.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "A: Deserialize<'de>"))]
pub struct PathTableConfig<A> {
    /// Entries, in match order.
    pub paths: Vec<PathEntryConfig<A>>,
}

/// Configuration for a [`PathEntry`].
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "A: Deserialize<'de>"))]
pub struct PathEntryConfig<A> {
    /// The pattern. Omit it for an entry the engine should skip.
    #[serde(default)]
    pub pattern: Option<String>,

    /// The action selected when this entry wins.
    pub action: A,
}

impl<A> PathTableConfig<A> {
    /// Build a table, rejecting anything [`PathTable::validate`] would reject.
    ///
    /// # Errors
    ///
    /// Returns [`PathMatchError::InvalidConfig`] for an empty pattern string,
    /// or the first error from [`PathTable::validate`].
    pub fn load(self) -> Result<PathTable<A>, PathMatchError> {
        if let Some(index) = self
            .paths
            .iter()
            .position(|e| e.pattern.as_deref() == Some(""))
        {
            return Err(PathMatchError::InvalidConfig {
                message: format!("paths[{index}] has an empty pattern; omit `pattern` instead"),
            });
        }

        let table: PathTable<A> = self.paths.into_iter().map(PathEntry::from).collect();
        table.validate()?;
        Ok(table)
    }
}

impl<A> From<PathEntryConfig<A>> for PathEntry<A> {
    fn from(config: PathEntryConfig<A>) -> Self {
        match config.pattern {
            Some(pattern) => PathEntry::new(pattern, config.action),
            None => PathEntry::unpatterned(config.action),
        }
    }
}

/// Lenient conversion: malformed patterns are kept (they only fail to match)
/// and logged at `warn`.
impl<A> From<PathTableConfig<A>> for PathTable<A> {
    fn from(config: PathTableConfig<A>) -> Self {
        config
            .paths
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                if let Some(pattern) = entry.pattern.as_deref() {
                    if let Err(error) = validate_pattern(pattern) {
                        tracing::warn!(index, pattern, %error, "keeping malformed pattern");
                    }
                }
                PathEntry::from(entry)
            })
            .collect()
    }
}
