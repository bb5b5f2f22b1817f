//! Conformance tests that run YAML fixtures against pathmatch
//!
//! Run with: cargo test -p pathmatch-test --test conformance --features pathmatch-test/fixtures
//!
//! Note: This test file requires the `fixtures` feature to be enabled.

#![cfg(feature = "fixtures")]

use pathmatch_test::fixture::Fixture;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the conformance directory relative to the workspace root
fn fixtures_dir() -> PathBuf {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let ext_test = Path::new(manifest_dir);

    // Go up: ext/test -> ext -> workspace root
    let root = ext_test
        .parent() // ext
        .and_then(|p| p.parent()) // root
        .expect("Could not find workspace root");

    root.join("conformance")
}

/// Parse every fixture in a directory
fn load_fixtures_in_dir(dir: &Path) -> Vec<(PathBuf, Fixture)> {
    if !dir.exists() {
        panic!("Fixtures directory does not exist: {}", dir.display());
    }

    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .expect("read dir")
        .map(|entry| entry.expect("dir entry").path())
        .filter(|path| {
            path.extension()
                .map_or(false, |e| e == "yaml" || e == "yml")
        })
        .collect();
    paths.sort();

    let mut fixtures = Vec::new();
    for path in paths {
        let yaml = fs::read_to_string(&path).expect("read yaml");

        // Parse potentially multiple fixtures (separated by ---)
        let parsed = Fixture::from_yaml_multi(&yaml).unwrap_or_else(|e| {
            panic!("Failed to parse {}: {}", path.display(), e);
        });
        fixtures.extend(parsed.into_iter().map(|f| (path.clone(), f)));
    }
    fixtures
}

/// Load and run all fixtures in a directory
fn run_fixtures_in_dir(dir: &Path) {
    let fixtures = load_fixtures_in_dir(dir);
    assert!(!fixtures.is_empty(), "no fixtures in {}", dir.display());

    for (path, fixture) in fixtures {
        println!("Running fixture: {} ({})", fixture.name, path.display());
        fixture.run_and_assert();
    }
}

#[test]
fn test_classifier() {
    run_fixtures_in_dir(&fixtures_dir().join("01_classifier"));
}

#[test]
fn test_templates() {
    run_fixtures_in_dir(&fixtures_dir().join("02_templates"));
}

#[test]
fn test_specificity() {
    run_fixtures_in_dir(&fixtures_dir().join("03_specificity"));
}

#[test]
fn test_invariants() {
    run_fixtures_in_dir(&fixtures_dir().join("04_invariants"));
}

/// Tables loaded through the config path select the same actions as the
/// fixture provider.
#[test]
fn test_config_tables_agree() {
    let dirs = ["01_classifier", "02_templates", "03_specificity", "04_invariants"];
    for dir in dirs {
        for (path, fixture) in load_fixtures_in_dir(&fixtures_dir().join(dir)) {
            let table = fixture.build_table();
            let matcher = table.matcher();
            for case in &fixture.cases {
                let actual = matcher.matches(&case.target).map(|e| e.action().clone());
                assert_eq!(
                    actual,
                    case.expect,
                    "config table disagrees: fixture '{}' case '{}' ({})",
                    fixture.name,
                    case.name,
                    path.display()
                );
            }
        }
    }
}
