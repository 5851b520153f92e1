//! CLI Argument Structures and Configuration
//!
//! This module contains all CLI argument definitions, command structures,
//! and configuration enums used by the Heimdall CLI binary.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Quality gate evaluation for static analysis reports
#[derive(Parser)]
#[command(name = "heimdall")]
#[command(version = VERSION)]
#[command(about = "Heimdall - Quality Gate Evaluation for Static Analysis Reports")]
#[command(long_about = "
Evaluate an issue report against configured quality gates and health bounds.
The aggregate gate status becomes the process exit code, so the tool slots
directly into CI pipelines.

Common Usage:

  # Evaluate a report with the default (gate-less) policy
  heimdall evaluate report.json

  # Evaluate against a policy file
  heimdall evaluate --config heimdall.yml report.json

  # Diff against a reference build to drive new-issue gates
  heimdall evaluate --config heimdall.yml --reference previous.json report.json

  # Emit the verdict as JSON for downstream tooling
  heimdall evaluate --format json report.json

  # Write a starting-point policy file
  heimdall print-default-config > heimdall.yml
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate an issue report against the configured policy
    Evaluate(Box<EvaluateArgs>),

    /// Print default configuration in YAML format
    #[command(name = "print-default-config")]
    PrintDefaultConfig,

    /// Validate a Heimdall configuration file
    #[command(name = "validate-config")]
    ValidateConfig(ValidateConfigArgs),
}

/// Arguments for the `evaluate` command.
#[derive(Args)]
pub struct EvaluateArgs {
    /// Path to the issue report (JSON)
    pub report: PathBuf,

    /// Reference report to diff new-issue counts against (JSON)
    #[arg(long)]
    pub reference: Option<PathBuf>,

    /// Path to the evaluation policy (YAML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format for the verdict
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Suppress console output; only the exit code reports the verdict
    #[arg(short, long)]
    pub quiet: bool,
}

/// Arguments for the `validate-config` command.
#[derive(Args)]
pub struct ValidateConfigArgs {
    /// Path to the configuration file to validate
    pub config_path: PathBuf,
}

/// Output format for evaluation results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored console output
    Text,
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
}
