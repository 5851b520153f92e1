//! Report loading and result rendering.

use std::path::Path;

use crate::api::results::AnalysisResult;
use crate::core::errors::{HeimdallError, Result};
use crate::core::issues::Report;

/// Load an issue report from a JSON file.
///
/// An upstream run that found nothing produces an empty issue list, which
/// evaluates as zero issues rather than as an error.
pub fn load_report(path: &Path) -> Result<Report> {
    let content = std::fs::read_to_string(path).map_err(|err| {
        HeimdallError::io(format!("Failed to read report file: {}", path.display()), err)
    })?;
    Ok(serde_json::from_str(&content)?)
}

/// Render an evaluation result as pretty-printed JSON.
pub fn result_to_json(result: &AnalysisResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Render an evaluation result as YAML.
pub fn result_to_yaml(result: &AnalysisResult) -> Result<String> {
    Ok(serde_yaml::to_string(result)?)
}
