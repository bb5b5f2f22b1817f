//! pathmatch CLI — driving adapter for the pathmatch engine.
//!
//! Subcommands:
//! - `match <config> <target>... [--trace]` — print the selected action per target
//! - `check <config>` — strictly validate a config
//! - `explain <pattern>` — print a pattern's kind, base path and segment count
//!
//! Set `PATHMATCH_LOG` (e.g. `PATHMATCH_LOG=pathmatch=trace`) to see engine logs
//! on stderr.

use std::path::Path;

use anyhow::Context;
use clap::Parser;
use pathmatch::{base_path, segment_count, validate_pattern, PathTable, PathTableConfig};
use serde_json::Value;
use tracing_subscriber::{fmt, EnvFilter};

use cli::{Cli, Command};

mod cli;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("PATHMATCH_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("pathmatch: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Match(args) => {
            let table = PathTable::from(load_config(&args.config)?);
            for target in &args.targets {
                print!("{}", render_match(&table, target, args.trace));
            }
            Ok(())
        }
        Command::Check(args) => {
            let count = load_config(&args.config)?
                .load()
                .with_context(|| format!("config invalid: {}", args.config.display()))?
                .len();
            println!("Config valid ({count} entries)");
            Ok(())
        }
        Command::Explain(args) => {
            print!("{}", render_explain(&args.pattern)?);
            Ok(())
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering
// ═══════════════════════════════════════════════════════════════════════════════

/// An action as one line: strings verbatim, anything else as compact JSON.
fn render_action(action: &Value) -> String {
    match action {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn render_match(table: &PathTable<Value>, target: &str, trace: bool) -> String {
    let matcher = table.matcher();
    let mut out = String::new();

    if !trace {
        match matcher.matches(target) {
            Some(entry) => out.push_str(&render_action(entry.action())),
            None => out.push_str("(no match)"),
        }
        out.push('\n');
        return out;
    }

    let trace = matcher.matches_with_trace(target);
    out.push_str(target);
    out.push('\n');
    for step in &trace.steps {
        out.push_str(&format!("  {step}\n"));
    }
    if trace.short_circuited {
        out.push_str("  (short circuit)\n");
    }
    match trace.result.as_deref() {
        Some(entry) => out.push_str(&format!("  => {}\n", render_action(entry.action()))),
        None => out.push_str("  => (no match)\n"),
    }
    out
}

fn render_explain(pattern: &str) -> anyhow::Result<String> {
    let kind = validate_pattern(pattern).context("pattern invalid")?;
    Ok(format!(
        "kind: {kind}\nbase: {}\nsegments: {}\n",
        base_path(pattern),
        segment_count(pattern)
    ))
}

// ═══════════════════════════════════════════════════════════════════════════════
// Config loading
// ═══════════════════════════════════════════════════════════════════════════════

fn load_config(path: &Path) -> anyhow::Result<PathTableConfig<Value>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read \"{}\"", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let config = parse_config(&content, is_json)?;
    tracing::debug!(path = %path.display(), entries = config.paths.len(), "loaded config");
    Ok(config)
}

fn parse_config(content: &str, is_json: bool) -> anyhow::Result<PathTableConfig<Value>> {
    if is_json {
        serde_json::from_str(content).context("JSON parse error")
    } else {
        // Default to YAML (handles .yaml and .yml)
        serde_yaml::from_str(content).context("YAML parse error")
    }
}
