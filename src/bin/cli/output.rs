//! Console display of evaluation results.

use owo_colors::OwoColorize;

use heimdall_rs::{AnalysisResult, QualityGateStatus};

/// Display an evaluation result in a human-readable format.
pub fn display_result(result: &AnalysisResult) {
    println!(
        "Quality gate: {}",
        colored_status(result.quality_gate_status)
    );
    println!(
        "  total issues: {} ({} errors, {} high, {} normal, {} low)",
        result.total_issue_count,
        result.statistics.errors,
        result.statistics.high,
        result.statistics.normal,
        result.statistics.low
    );
    if result.statistics.new_total > 0 {
        println!("  new issues: {}", result.statistics.new_total);
    }
    if let Some(score) = result.health_score {
        println!("  health score: {score}/100");
    }

    if !result.info_messages.is_empty() {
        println!();
        for message in &result.info_messages {
            println!("  {message}");
        }
    }

    if !result.error_messages.is_empty() {
        println!();
        for message in &result.error_messages {
            println!("  {}", message.red());
        }
    }
}

fn colored_status(status: QualityGateStatus) -> String {
    match status {
        QualityGateStatus::Passed => status.label().green().to_string(),
        QualityGateStatus::Warning => status.label().yellow().to_string(),
        QualityGateStatus::Failed => status.label().red().bold().to_string(),
    }
}
