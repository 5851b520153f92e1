#!/usr/bin/env rust
//! Heimdall CLI - quality gate evaluation for static analysis reports.
//!
//! Reads an issue report produced by an upstream analysis run, evaluates it
//! against the configured quality gates and health bounds, and maps the
//! aggregate status to the process exit code (0 passed, 1 warning, 2 failed).

use clap::Parser;

mod cli;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    // Logs go to stderr so stdout stays clean for --format json/yaml output
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    let exit_code = match cli.command {
        Commands::Evaluate(args) => cli::evaluate_command(*args)?,
        Commands::PrintDefaultConfig => {
            cli::print_default_config()?;
            0
        }
        Commands::ValidateConfig(args) => {
            cli::validate_config(args)?;
            0
        }
    };

    std::process::exit(exit_code);
}
