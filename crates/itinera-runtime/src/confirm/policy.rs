//! Overlap policy.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What the broker does with a request issued while another is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlapPolicy {
    /// Display the new request. The superseded [`Confirmation`] never
    /// resolves while the broker is alive.
    ///
    /// [`Confirmation`]: super::Confirmation
    #[default]
    Replace,
    /// Serve requests strictly in arrival order.
    Queue,
    /// Resolve the new request to `false` immediately; the active dialog is
    /// left untouched.
    Reject,
}

impl OverlapPolicy {
    /// Returns the lowercase name used in config files.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Replace => "replace",
            Self::Queue => "queue",
            Self::Reject => "reject",
        }
    }
}

impl std::fmt::Display for OverlapPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known [`OverlapPolicy`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown overlap policy '{0}' (expected replace, queue or reject)")]
pub struct ParseOverlapPolicyError(pub String);

impl FromStr for OverlapPolicy {
    type Err = ParseOverlapPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "replace" => Ok(Self::Replace),
            "queue" => Ok(Self::Queue),
            "reject" => Ok(Self::Reject),
            _ => Err(ParseOverlapPolicyError(s.to_string())),
        }
    }
}
