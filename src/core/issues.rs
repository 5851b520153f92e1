//! Issue model: severities, reports, and count statistics.
//!
//! Issues arrive from an upstream analysis run already parsed and
//! severity-tagged. The evaluator consumes them as counts, optionally
//! partitioned by severity or diffed against a reference report.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a single analysis issue.
///
/// Ordered from least to most severe (`WarningLow < WarningNormal <
/// WarningHigh < Error`) so that minimum-severity cutoffs are plain `Ord`
/// comparisons.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Severity {
    /// Low-priority warning
    #[default]
    #[serde(rename = "low")]
    WarningLow,
    /// Normal warning
    #[serde(rename = "normal")]
    WarningNormal,
    /// High-priority warning
    #[serde(rename = "high")]
    WarningHigh,
    /// Error
    #[serde(rename = "error")]
    Error,
}

impl Severity {
    /// Short lower-case name, as used in report files and log output.
    pub fn name(self) -> &'static str {
        match self {
            Self::WarningLow => "low",
            Self::WarningNormal => "normal",
            Self::WarningHigh => "high",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single detected problem reported by the upstream analysis.
///
/// `file_name`, `category`, and `message` exist for filtering and for
/// reference diffing; the gate evaluator itself only ever sees counts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Issue {
    /// File the issue was reported in
    pub file_name: String,
    /// Issue category assigned by the upstream parser (may be empty)
    #[serde(default)]
    pub category: String,
    /// Human-readable issue message
    pub message: String,
    /// Severity classification
    pub severity: Severity,
}

impl Issue {
    /// Create a new issue.
    pub fn new(
        file_name: impl Into<String>,
        category: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            category: category.into(),
            message: message.into(),
            severity,
        }
    }
}

/// An ordered collection of issues plus the log accumulated while the
/// report was assembled and evaluated.
///
/// The info/error logs are append-only and are carried into the final
/// [`crate::api::results::AnalysisResult`] verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Report {
    #[serde(default)]
    issues: Vec<Issue>,
    #[serde(default)]
    info_messages: Vec<String>,
    #[serde(default)]
    error_messages: Vec<String>,
}

impl Report {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an issue to the report.
    pub fn add(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    /// Append all issues from an iterator.
    pub fn extend(&mut self, issues: impl IntoIterator<Item = Issue>) {
        self.issues.extend(issues);
    }

    /// Number of issues in the report.
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Whether the report contains no issues.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// All issues, in insertion order.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Append an informational message to the report log.
    pub fn log_info(&mut self, message: impl Into<String>) {
        self.info_messages.push(message.into());
    }

    /// Append an error message to the report log.
    pub fn log_error(&mut self, message: impl Into<String>) {
        self.error_messages.push(message.into());
    }

    /// Informational log messages, in insertion order.
    pub fn info_messages(&self) -> &[String] {
        &self.info_messages
    }

    /// Error log messages, in insertion order.
    pub fn error_messages(&self) -> &[String] {
        &self.error_messages
    }

    /// A copy of this report containing only issues at or above `minimum`.
    ///
    /// The message logs are carried over unchanged.
    pub fn filter_by_severity(&self, minimum: Severity) -> Report {
        Report {
            issues: self
                .issues
                .iter()
                .filter(|issue| issue.severity >= minimum)
                .cloned()
                .collect(),
            info_messages: self.info_messages.clone(),
            error_messages: self.error_messages.clone(),
        }
    }

    /// Count statistics for this report, with all new-issue counts zero.
    pub fn statistics(&self) -> IssueStatistics {
        let mut stats = IssueStatistics::default();
        for issue in &self.issues {
            stats.record(issue.severity);
        }
        stats
    }

    /// Count statistics for this report, diffing against `reference` to
    /// populate the new-issue counts.
    ///
    /// An issue is new when no issue with the same file, category, message,
    /// and severity exists in the reference report.
    pub fn statistics_against(&self, reference: &Report) -> IssueStatistics {
        let known: HashSet<&Issue> = reference.issues.iter().collect();

        let mut stats = IssueStatistics::default();
        for issue in &self.issues {
            stats.record(issue.severity);
            if !known.contains(issue) {
                stats.record_new(issue.severity);
            }
        }
        stats
    }
}

/// Issue counts partitioned by severity, with matching new-issue counts.
///
/// All counts are non-negative by construction; new counts are zero unless
/// the statistics were computed against a reference report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueStatistics {
    /// Total number of issues, any severity
    pub total: u64,
    /// Number of errors
    pub errors: u64,
    /// Number of high-severity warnings
    pub high: u64,
    /// Number of normal warnings
    pub normal: u64,
    /// Number of low-severity warnings
    pub low: u64,
    /// Number of new issues, any severity
    pub new_total: u64,
    /// Number of new errors
    pub new_errors: u64,
    /// Number of new high-severity warnings
    pub new_high: u64,
    /// Number of new normal warnings
    pub new_normal: u64,
    /// Number of new low-severity warnings
    pub new_low: u64,
}

impl IssueStatistics {
    fn record(&mut self, severity: Severity) {
        self.total += 1;
        match severity {
            Severity::Error => self.errors += 1,
            Severity::WarningHigh => self.high += 1,
            Severity::WarningNormal => self.normal += 1,
            Severity::WarningLow => self.low += 1,
        }
    }

    fn record_new(&mut self, severity: Severity) {
        self.new_total += 1;
        match severity {
            Severity::Error => self.new_errors += 1,
            Severity::WarningHigh => self.new_high += 1,
            Severity::WarningNormal => self.new_normal += 1,
            Severity::WarningLow => self.new_low += 1,
        }
    }
}
