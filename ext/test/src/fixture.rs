//! Conformance test fixture runner
//!
//! Loads YAML fixtures and runs them against the pathmatch engine.
//!
//! ```yaml
//! name: template beats wildcard
//! description: more segments win
//! resolve: true            # optional, attach bindings on template matches
//! paths:
//!   - pattern: /users/*
//!     action: wildcard
//!   - pattern: /users/{id}/profile
//!     action: template
//! cases:
//!   - name: profile
//!     target: /users/42/profile
//!     expect: template
//!     params: { id: "42" }  # optional, requires resolve
//! ```

use crate::{TestEntry, TestPaths};
use pathmatch::{PathEntryConfig, PathTable, PathTableConfig};
use serde::Deserialize;
use std::collections::BTreeMap;

/// A complete test fixture
#[derive(Debug, Deserialize)]
pub struct Fixture {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub resolve: bool,
    pub paths: Vec<PathConfig>,
    pub cases: Vec<TestCase>,
}

/// One entry of the fixture's path list
#[derive(Debug, Clone, Deserialize)]
pub struct PathConfig {
    #[serde(default)]
    pub pattern: Option<String>,
    pub action: String,
}

/// Test case
#[derive(Debug, Deserialize)]
pub struct TestCase {
    pub name: String,
    pub target: String,
    pub expect: Option<String>,
    /// Expected captured parameters (only checked when present).
    #[serde(default)]
    pub params: Option<BTreeMap<String, String>>,
}

// ═══════════════════════════════════════════════════════════════════════════════
// Builder: Convert config to pathmatch types
// ═══════════════════════════════════════════════════════════════════════════════

impl Fixture {
    /// Build the resolving test provider for this fixture
    pub fn build(&self) -> TestPaths {
        self.paths
            .iter()
            .fold(TestPaths::new(), |paths, p| match &p.pattern {
                Some(pattern) => paths.with(pattern, &p.action),
                None => paths.with_unpatterned(&p.action),
            })
            .resolving(self.resolve)
    }

    /// The same entries in the production config format
    pub fn table_config(&self) -> PathTableConfig<String> {
        PathTableConfig {
            paths: self
                .paths
                .iter()
                .map(|p| PathEntryConfig {
                    pattern: p.pattern.clone(),
                    action: p.action.clone(),
                })
                .collect(),
        }
    }

    /// Build a [`PathTable`] through the lenient config conversion
    pub fn build_table(&self) -> PathTable<String> {
        PathTable::from(self.table_config())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Runner
// ═══════════════════════════════════════════════════════════════════════════════

/// Result of running a single test case
#[derive(Debug)]
pub struct CaseResult {
    pub case_name: String,
    pub passed: bool,
    pub expected: Option<String>,
    pub actual: Option<String>,
    pub expected_params: Option<BTreeMap<String, String>>,
    pub actual_params: Option<BTreeMap<String, String>>,
}

fn params_of(entry: &TestEntry) -> Option<BTreeMap<String, String>> {
    entry.binding().map(|b| {
        b.params()
            .iter()
            .map(|p| (p.name.clone(), p.value.clone()))
            .collect()
    })
}

impl Fixture {
    /// Parse a fixture from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Parse multiple fixtures from a YAML file with `---` separators
    pub fn from_yaml_multi(yaml: &str) -> Result<Vec<Self>, serde_yaml::Error> {
        let mut fixtures = Vec::new();
        for doc in serde_yaml::Deserializer::from_str(yaml) {
            fixtures.push(Self::deserialize(doc)?);
        }
        Ok(fixtures)
    }

    /// Run all test cases and return results
    pub fn run(&self) -> Vec<CaseResult> {
        let paths = self.build();
        let matcher = paths.matcher();
        self.cases
            .iter()
            .map(|case| {
                let hit = matcher.matches(&case.target);
                let actual = hit.as_deref().map(|e| e.action().to_owned());
                let actual_params = hit.as_deref().and_then(params_of);
                let params_ok = case
                    .params
                    .as_ref()
                    .map_or(true, |expected| actual_params.as_ref() == Some(expected));
                CaseResult {
                    case_name: case.name.clone(),
                    passed: actual == case.expect && params_ok,
                    expected: case.expect.clone(),
                    actual,
                    expected_params: case.params.clone(),
                    actual_params,
                }
            })
            .collect()
    }

    /// Run all test cases and panic on first failure
    pub fn run_and_assert(&self) {
        let results = self.run();
        for result in results {
            assert!(
                result.passed,
                "Fixture '{}' case '{}' failed: expected {:?} {:?}, got {:?} {:?}",
                self.name,
                result.case_name,
                result.expected,
                result.expected_params,
                result.actual,
                result.actual_params
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YAML: &str = r#"
name: inline
description: smoke test
resolve: true
paths:
  - pattern: /users/*
    action: wildcard
  - pattern: /users/{id}/profile
    action: template
  - action: nothing
cases:
  - name: template wins
    target: /users/42/profile
    expect: template
    params: { id: "42" }
  - name: wildcard fallback
    target: /users/42/settings
    expect: wildcard
  - name: miss
    target: /groups
    expect: ~
"#;

    #[test]
    fn parses_and_passes() {
        let fixture = Fixture::from_yaml(YAML).unwrap();
        assert_eq!(fixture.paths.len(), 3);
        assert!(fixture.run().iter().all(|r| r.passed));
    }

    #[test]
    fn wrong_expectation_fails() {
        let mut fixture = Fixture::from_yaml(YAML).unwrap();
        fixture.cases[1].expect = Some("template".into());
        let results = fixture.run();
        assert!(!results[1].passed);
        assert_eq!(results[1].actual.as_deref(), Some("wildcard"));
    }

    #[test]
    fn wrong_params_fail() {
        let mut fixture = Fixture::from_yaml(YAML).unwrap();
        fixture.cases[0].params = Some(BTreeMap::from([("id".into(), "7".into())]));
        assert!(!fixture.run()[0].passed);
    }

    #[test]
    fn multi_document() {
        let yaml = format!("{YAML}\n---\n{YAML}");
        assert_eq!(Fixture::from_yaml_multi(&yaml).unwrap().len(), 2);
    }

    #[test]
    fn table_config_preserves_order() {
        let fixture = Fixture::from_yaml(YAML).unwrap();
        let table = fixture.build_table();
        let actions: Vec<_> = table.iter().map(|e| e.action().as_str()).collect();
        assert_eq!(actions, vec!["wildcard", "template", "nothing"]);
    }
}
