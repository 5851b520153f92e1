//! Evaluation policy configuration.
//!
//! The complete policy handed to the engine: minimum severity cutoff, issue
//! filters, quality gates, and health bounds. Represented as an immutable
//! value object so evaluations running concurrently in a host system cannot
//! interfere with each other through shared configuration.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::errors::{HeimdallError, Result};
use crate::core::filters::{FilterRule, FilterSet};
use crate::core::gates::{GateOutcome, QualityGate, QualityGateType};
use crate::core::health::HealthDescriptor;
use crate::core::issues::Severity;

/// Complete evaluation policy for one analysis report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationConfig {
    /// Issues below this severity are ignored entirely
    #[serde(default)]
    pub minimum_severity: Severity,

    /// Filter rules applied before counting
    #[serde(default)]
    pub filters: Vec<FilterRule>,

    /// Quality gates, evaluated in configured order
    #[serde(default)]
    pub quality_gates: Vec<QualityGate>,

    /// Health score bounds; `None` disables health scoring
    #[serde(default)]
    pub health: Option<HealthDescriptor>,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            minimum_severity: Severity::WarningLow,
            filters: Vec::new(),
            quality_gates: Vec::new(),
            health: None,
        }
    }
}

impl EvaluationConfig {
    /// Load configuration from a YAML file.
    pub fn from_yaml_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = fs::read_to_string(&path).map_err(|err| {
            HeimdallError::io(
                format!("Failed to read config file: {}", path.display()),
                err,
            )
        })?;

        let config: Self = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize this configuration to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Validate the whole policy.
    ///
    /// Checks the health bounds invariant and compiles every filter pattern,
    /// so an invalid policy fails at setup time rather than mid-evaluation.
    pub fn validate(&self) -> Result<()> {
        if let Some(health) = &self.health {
            health.validate()?;
        }
        FilterSet::compile(&self.filters)?;
        Ok(())
    }

    /// Set the minimum severity cutoff.
    pub fn with_minimum_severity(mut self, severity: Severity) -> Self {
        self.minimum_severity = severity;
        self
    }

    /// Append a filter rule.
    pub fn with_filter(mut self, rule: FilterRule) -> Self {
        self.filters.push(rule);
        self
    }

    /// Append a quality gate.
    pub fn with_gate(mut self, gate: QualityGate) -> Self {
        self.quality_gates.push(gate);
        self
    }

    /// Append a quality gate from its parts.
    pub fn with_gate_threshold(
        self,
        size: u64,
        gate_type: QualityGateType,
        outcome: GateOutcome,
    ) -> Self {
        self.with_gate(QualityGate::new(size, gate_type, outcome))
    }

    /// Enable health scoring with the given bounds.
    pub fn with_health(mut self, descriptor: HealthDescriptor) -> Self {
        self.health = Some(descriptor);
        self
    }
}
