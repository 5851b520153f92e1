//! Evaluation engine tying filters, gates, and health scoring together.

use chrono::Utc;
use tracing::{debug, info};

use crate::api::results::AnalysisResult;
use crate::core::config::EvaluationConfig;
use crate::core::errors::Result;
use crate::core::filters::FilterSet;
use crate::core::gates::evaluate_gates;
use crate::core::issues::{Report, Severity};

/// Evaluates analysis reports against a fixed, validated policy.
///
/// The policy is validated and the filter patterns are compiled once at
/// construction, so every configuration error surfaces at setup time.
/// Evaluation itself is a pure, synchronous function of the report; an
/// engine can be shared freely between threads.
#[derive(Debug)]
pub struct HeimdallEngine {
    config: EvaluationConfig,
    filters: FilterSet,
}

impl HeimdallEngine {
    /// Create an engine from an evaluation policy.
    pub fn new(config: EvaluationConfig) -> Result<Self> {
        config.validate()?;
        let filters = FilterSet::compile(&config.filters)?;

        debug!(
            gates = config.quality_gates.len(),
            filters = filters.len(),
            health = config.health.is_some(),
            "evaluation engine initialized"
        );

        Ok(Self { config, filters })
    }

    /// The policy this engine evaluates against.
    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    /// Evaluate a report. New-issue counts are zero without a reference.
    pub fn evaluate(&self, report: &Report) -> AnalysisResult {
        self.run(report, None)
    }

    /// Evaluate a report, diffing against a reference report to populate the
    /// new-issue counts.
    ///
    /// The reference goes through the same filters and severity cutoff as
    /// the current report, so the diff compares like with like.
    pub fn evaluate_with_reference(&self, report: &Report, reference: &Report) -> AnalysisResult {
        self.run(report, Some(reference))
    }

    fn run(&self, report: &Report, reference: Option<&Report>) -> AnalysisResult {
        let filtered = self.filters.apply(report);
        let after_filters = filtered.len();
        let mut current = self.apply_severity_cutoff(filtered);

        if !self.filters.is_empty() {
            current.log_info(format!(
                "Applying {} filters on the set of {} issues ({} issues have been removed)",
                self.filters.len(),
                report.len(),
                report.len() - after_filters
            ));
        }
        if self.config.minimum_severity > Severity::WarningLow {
            current.log_info(format!(
                "Applying minimum severity '{}' on the set of {} issues ({} issues have been removed)",
                self.config.minimum_severity,
                after_filters,
                after_filters - current.len()
            ));
        }

        let stats = match reference {
            Some(reference) => {
                let reference = self.reduce(reference);
                current.statistics_against(&reference)
            }
            None => {
                let needs_reference = self
                    .config
                    .quality_gates
                    .iter()
                    .any(|gate| gate.gate_type.requires_reference());
                if needs_reference {
                    debug!("no reference report supplied; new-issue counts are zero");
                }
                current.statistics()
            }
        };

        let evaluation = evaluate_gates(&stats, &self.config.quality_gates);
        let health_score = self.config.health.as_ref().map(|h| h.score(stats.total));

        info!(
            total = stats.total,
            status = evaluation.status.label(),
            health = ?health_score,
            "report evaluated"
        );

        let mut info_messages = current.info_messages().to_vec();
        info_messages.extend(evaluation.messages);

        AnalysisResult {
            total_issue_count: stats.total,
            statistics: stats,
            quality_gate_status: evaluation.status,
            health_score,
            info_messages,
            error_messages: current.error_messages().to_vec(),
            evaluated_at: Utc::now(),
        }
    }

    /// Apply filters and the minimum-severity cutoff.
    fn reduce(&self, report: &Report) -> Report {
        self.apply_severity_cutoff(self.filters.apply(report))
    }

    fn apply_severity_cutoff(&self, report: Report) -> Report {
        if self.config.minimum_severity > Severity::WarningLow {
            report.filter_by_severity(self.config.minimum_severity)
        } else {
            report
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
