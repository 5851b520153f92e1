//! Health score computation.
//!
//! The health score maps an issue count to a percentage between a healthy
//! bound (few enough issues for 100%) and an unhealthy bound (enough issues
//! for 0%), with integer linear decay in between.

use serde::{Deserialize, Serialize};

use crate::core::errors::{HeimdallError, Result};

/// Healthy/unhealthy issue-count bounds for the health score.
///
/// The configuration is invalid unless `unhealthy > healthy`; violations are
/// reported as configuration errors, never silently clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthDescriptor {
    /// Issue counts strictly below this bound score 100%
    pub healthy: u64,
    /// Issue counts at or above this bound score 0%
    pub unhealthy: u64,
}

impl Default for HealthDescriptor {
    fn default() -> Self {
        Self {
            healthy: 1,
            unhealthy: 9,
        }
    }
}

impl HealthDescriptor {
    /// Create a validated descriptor.
    pub fn new(healthy: u64, unhealthy: u64) -> Result<Self> {
        let descriptor = Self { healthy, unhealthy };
        descriptor.validate()?;
        Ok(descriptor)
    }

    /// Check the `unhealthy > healthy` invariant.
    pub fn validate(&self) -> Result<()> {
        if self.unhealthy <= self.healthy {
            return Err(HeimdallError::config_field(
                format!(
                    "unhealthy threshold ({}) must be greater than healthy threshold ({})",
                    self.unhealthy, self.healthy
                ),
                "health.unhealthy",
            ));
        }
        Ok(())
    }

    /// Health percentage for the given issue count.
    ///
    /// Piecewise linear and monotonically non-increasing:
    ///
    /// - `issue_count < healthy` scores 100
    /// - `issue_count >= unhealthy` scores 0
    /// - in between, integer linear decay; with bounds (1, 9) this yields
    ///   0 issues -> 100, 1 -> 90, 5 -> 50, 8 -> 20, 9 -> 0
    pub fn score(&self, issue_count: u64) -> u8 {
        if issue_count < self.healthy {
            100
        } else if issue_count >= self.unhealthy {
            0
        } else {
            // u128 keeps the interpolation exact for bounds near u64::MAX
            let span = u128::from(self.unhealthy - self.healthy) + 2;
            let steps = u128::from(issue_count - self.healthy) + 1;
            (100 - steps * 100 / span) as u8
        }
    }
}
