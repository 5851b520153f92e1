//! Evaluation results for public API consumption.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::gates::QualityGateStatus;
use crate::core::issues::IssueStatistics;

/// The complete verdict on one analysis report.
///
/// Produced once per evaluation and immutable afterwards; serializable for
/// CI consumers that want the verdict as JSON or YAML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Total number of issues after filtering and the severity cutoff
    pub total_issue_count: u64,

    /// Full per-severity breakdown, including new-issue counts
    pub statistics: IssueStatistics,

    /// Aggregate quality gate status
    pub quality_gate_status: QualityGateStatus,

    /// Health score percentage, when health scoring is configured
    pub health_score: Option<u8>,

    /// Ordered informational messages: the report's own log followed by one
    /// message per evaluated gate
    pub info_messages: Vec<String>,

    /// Ordered error messages from the report log
    pub error_messages: Vec<String>,

    /// When the evaluation ran
    pub evaluated_at: DateTime<Utc>,
}

impl AnalysisResult {
    /// Whether the evaluated build can be considered successful.
    pub fn is_successful(&self) -> bool {
        self.quality_gate_status.is_successful()
    }
}
