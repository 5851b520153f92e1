//! Command execution logic for the Heimdall CLI.

use std::path::Path;

use heimdall_rs::core::config::EvaluationConfig;
use heimdall_rs::io::reports;
use heimdall_rs::{HeimdallEngine, QualityGateStatus};

use crate::cli::args::{EvaluateArgs, OutputFormat, ValidateConfigArgs};
use crate::cli::output;

/// Evaluate a report and return the process exit code for its verdict.
pub fn evaluate_command(args: EvaluateArgs) -> anyhow::Result<i32> {
    let config = load_configuration(args.config.as_deref())?;
    let engine = HeimdallEngine::new(config)?;

    let report = reports::load_report(&args.report)?;
    let result = match &args.reference {
        Some(path) => {
            let reference = reports::load_report(path)?;
            engine.evaluate_with_reference(&report, &reference)
        }
        None => engine.evaluate(&report),
    };

    match args.format {
        OutputFormat::Text => {
            if !args.quiet {
                output::display_result(&result);
            }
        }
        OutputFormat::Json => println!("{}", reports::result_to_json(&result)?),
        OutputFormat::Yaml => println!("{}", reports::result_to_yaml(&result)?),
    }

    Ok(exit_code(result.quality_gate_status))
}

/// Print the default evaluation policy as YAML.
pub fn print_default_config() -> anyhow::Result<()> {
    println!("{}", EvaluationConfig::default().to_yaml()?);
    Ok(())
}

/// Validate a configuration file, reporting the first problem found.
pub fn validate_config(args: ValidateConfigArgs) -> anyhow::Result<()> {
    EvaluationConfig::from_yaml_file(&args.config_path)?;
    println!("Configuration is valid: {}", args.config_path.display());
    Ok(())
}

/// Load the evaluation policy, falling back to the default when no path is given.
pub fn load_configuration(path: Option<&Path>) -> anyhow::Result<EvaluationConfig> {
    match path {
        Some(path) => Ok(EvaluationConfig::from_yaml_file(path)?),
        None => Ok(EvaluationConfig::default()),
    }
}

fn exit_code(status: QualityGateStatus) -> i32 {
    match status {
        QualityGateStatus::Passed => 0,
        QualityGateStatus::Warning => 1,
        QualityGateStatus::Failed => 2,
    }
}
