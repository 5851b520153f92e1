//! # Heimdall-RS: Quality Gate Evaluation for Static Analysis Reports
//!
//! Heimdall consumes an issue report produced by an upstream static-analysis run
//! and renders a verdict on it:
//!
//! - **Quality Gates**: ordered issue-count thresholds that degrade the build
//!   outcome to `Warning` or `Failed` when reached
//! - **Health Score**: a percentage in `[0, 100]` interpolated between a healthy
//!   and an unhealthy issue-count bound
//! - **Issue Filters**: regex include/exclude rules over file, category, and
//!   message, applied before any counting
//! - **Reference Diffing**: new-issue counts computed against a reference report
//!
//! Producing the issues themselves (parsing compiler output, scanning a
//! workspace, driving a CI job) is the host system's concern; heimdall is the
//! pure evaluation stage at the end of that pipeline.
//!
//! ## Quick Start
//!
//! ```rust
//! use heimdall_rs::{EvaluationConfig, HeimdallEngine, Report};
//! use heimdall_rs::core::gates::{GateOutcome, QualityGate, QualityGateType};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = EvaluationConfig::default()
//!         .with_gate(QualityGate::new(5, QualityGateType::Total, GateOutcome::Unstable))
//!         .with_gate(QualityGate::new(10, QualityGateType::Total, GateOutcome::Failure));
//!
//!     let engine = HeimdallEngine::new(config)?;
//!     let result = engine.evaluate(&Report::new());
//!
//!     assert!(result.quality_gate_status.is_successful());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(unsafe_code)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

// Core evaluation modules
pub mod core {
    //! Core evaluation algorithms and data structures.

    pub mod config;
    pub mod errors;
    pub mod filters;
    pub mod gates;
    pub mod health;
    pub mod issues;
}

// Public API and engine interface
pub mod api {
    //! High-level API and engine interface.

    pub mod engine;
    pub mod results;
}

// Report I/O and result rendering
pub mod io {
    //! Report loading and result serialization.

    pub mod reports;
}

// Re-export primary types for convenience
pub use crate::api::engine::HeimdallEngine;
pub use crate::api::results::AnalysisResult;
pub use crate::core::config::EvaluationConfig;
pub use crate::core::errors::{HeimdallError, Result};
pub use crate::core::gates::QualityGateStatus;
pub use crate::core::health::HealthDescriptor;
pub use crate::core::issues::{Issue, Report, Severity};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
