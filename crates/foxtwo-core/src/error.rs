//! Error and rejection types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reason a fire request produced no missile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum FireRejection {
    #[error("magazine is empty")]
    NoAmmo,
    #[error("no hardpoints configured")]
    NoHardpoints,
    #[error("no target selected")]
    NoTarget,
    #[error("target not locked")]
    NotLocked,
}

impl FireRejection {
    /// Whether this rejection is about the lock rather than the launcher.
    pub fn is_lock_related(self) -> bool {
        matches!(self, FireRejection::NoTarget | FireRejection::NotLocked)
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("no hardpoints configured")]
    NoHardpoints,

    #[error("lock angle {lock_deg}° exceeds break angle {break_deg}°")]
    InvertedHysteresis { lock_deg: f64, break_deg: f64 },

    #[error("{field} must be positive")]
    NonPositive { field: &'static str },
}
