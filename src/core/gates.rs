//! Quality gate configuration and evaluation.
//!
//! A quality gate is an issue-count threshold that, when reached, degrades
//! the build outcome to a configured severity. Gates are evaluated
//! independently, in configured order, and every gate emits a message; the
//! aggregate status is the maximum of the per-gate outcomes.

use serde::{Deserialize, Serialize};

use crate::core::issues::IssueStatistics;

/// Aggregate outcome of quality gate evaluation.
///
/// Ordered `Passed < Warning < Failed`; combining per-gate outcomes is a
/// plain `max`, which keeps the aggregation rule obviously correct.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum QualityGateStatus {
    /// All gates passed (or no gates were configured)
    #[default]
    Passed,
    /// At least one unstable-mapped gate was hit
    Warning,
    /// At least one failure-mapped gate was hit
    Failed,
}

impl QualityGateStatus {
    /// Whether the build can be considered successful.
    pub fn is_successful(self) -> bool {
        matches!(self, Self::Passed)
    }

    /// Upper-case label used in gate messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Passed => "PASSED",
            Self::Warning => "WARNING",
            Self::Failed => "FAILED",
        }
    }
}

/// Build result applied when a gate is hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateOutcome {
    /// Degrade the build to unstable
    Unstable,
    /// Fail the build
    Failure,
}

impl GateOutcome {
    /// The aggregate status a hit gate with this outcome contributes.
    pub fn status(self) -> QualityGateStatus {
        match self {
            Self::Unstable => QualityGateStatus::Warning,
            Self::Failure => QualityGateStatus::Failed,
        }
    }
}

/// Which issue count a gate inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityGateType {
    /// Total number of issues, any severity
    Total,
    /// Number of errors
    TotalError,
    /// Number of high-severity warnings
    TotalHigh,
    /// Number of normal warnings
    TotalNormal,
    /// Number of low-severity warnings
    TotalLow,
    /// Number of new issues, any severity
    New,
    /// Number of new errors
    NewError,
    /// Number of new high-severity warnings
    NewHigh,
    /// Number of new normal warnings
    NewNormal,
    /// Number of new low-severity warnings
    NewLow,
}

impl QualityGateType {
    /// Select the relevant count from the statistics.
    pub fn count(self, stats: &IssueStatistics) -> u64 {
        match self {
            Self::Total => stats.total,
            Self::TotalError => stats.errors,
            Self::TotalHigh => stats.high,
            Self::TotalNormal => stats.normal,
            Self::TotalLow => stats.low,
            Self::New => stats.new_total,
            Self::NewError => stats.new_errors,
            Self::NewHigh => stats.new_high,
            Self::NewNormal => stats.new_normal,
            Self::NewLow => stats.new_low,
        }
    }

    /// Human-readable description of the inspected count, used in gate messages.
    pub fn descriptor(self) -> &'static str {
        match self {
            Self::Total => "Total number of issues (any severity)",
            Self::TotalError => "Total number of errors",
            Self::TotalHigh => "Total number of issues (severity high)",
            Self::TotalNormal => "Total number of issues (severity normal)",
            Self::TotalLow => "Total number of issues (severity low)",
            Self::New => "Number of new issues (any severity)",
            Self::NewError => "Number of new errors",
            Self::NewHigh => "Number of new issues (severity high)",
            Self::NewNormal => "Number of new issues (severity normal)",
            Self::NewLow => "Number of new issues (severity low)",
        }
    }

    /// Whether this gate type inspects a new-issue count and therefore needs
    /// a reference report to be meaningful.
    pub fn requires_reference(self) -> bool {
        matches!(
            self,
            Self::New | Self::NewError | Self::NewHigh | Self::NewNormal | Self::NewLow
        )
    }
}

/// A configured issue-count threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityGate {
    /// Threshold; the gate is hit when the inspected count reaches it
    pub size: u64,
    /// Which count the gate inspects
    #[serde(rename = "type")]
    pub gate_type: QualityGateType,
    /// Build result applied when the gate is hit
    pub outcome: GateOutcome,
}

impl QualityGate {
    /// Create a new quality gate.
    pub fn new(size: u64, gate_type: QualityGateType, outcome: GateOutcome) -> Self {
        Self {
            size,
            gate_type,
            outcome,
        }
    }
}

/// Outcome of evaluating all configured gates against one set of statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateEvaluation {
    /// Aggregate status, the maximum of all per-gate outcomes
    pub status: QualityGateStatus,
    /// One message per gate, in configured order
    pub messages: Vec<String>,
}

/// Evaluate every configured gate against the given statistics.
///
/// Gates do not short-circuit: each gate contributes its outcome to the
/// aggregate and emits a message, so several gates can be violated at once.
/// The threshold is inclusive: a count exactly equal to `size` hits the gate.
/// With no gates configured the aggregate is `Passed`.
pub fn evaluate_gates(stats: &IssueStatistics, gates: &[QualityGate]) -> GateEvaluation {
    let mut status = QualityGateStatus::Passed;
    let mut messages = Vec::with_capacity(gates.len());

    for gate in gates {
        let count = gate.gate_type.count(stats);
        let gate_status = if count >= gate.size {
            gate.outcome.status()
        } else {
            QualityGateStatus::Passed
        };
        status = status.max(gate_status);
        messages.push(format!(
            "{} - {}: {} - Quality QualityGate: {}",
            gate_status.label(),
            gate.gate_type.descriptor(),
            count,
            gate.size
        ));
    }

    GateEvaluation { status, messages }
}
