//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Select the best-matching path pattern for a request path
#[derive(Debug, Parser)]
#[command(name = "pathmatch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Match targets against a config and print the selected action
    Match(MatchArgs),
    /// Load a config and validate every pattern
    Check(CheckArgs),
    /// Describe how a single pattern is interpreted
    Explain(ExplainArgs),
}

#[derive(Debug, clap::Args)]
pub struct MatchArgs {
    /// Config file (YAML, or JSON with a .json extension)
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Request paths to match
    #[arg(value_name = "TARGET", required = true)]
    pub targets: Vec<String>,

    /// Print how each entry was judged
    #[arg(long)]
    pub trace: bool,
}

#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Config file (YAML, or JSON with a .json extension)
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,
}

#[derive(Debug, clap::Args)]
pub struct ExplainArgs {
    /// The pattern to describe
    #[arg(value_name = "PATTERN")]
    pub pattern: String,
}
