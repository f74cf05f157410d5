//! Dialog kind.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Presentational flavour of a confirmation dialog.
///
/// Selects icon and color in the renderer. The broker never branches on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogKind {
    /// Neutral information.
    #[default]
    Info,
    /// Destructive or risky action.
    Warning,
    /// Something went wrong.
    Error,
    /// Positive notice (e.g. a template was unlocked).
    Success,
}

impl DialogKind {
    /// All kinds, in declaration order.
    pub const ALL: [Self; 4] = [Self::Info, Self::Warning, Self::Error, Self::Success];

    /// Returns the lowercase name used in config files and on the CLI.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Success => "success",
        }
    }
}

impl std::fmt::Display for DialogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known [`DialogKind`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown dialog kind '{0}' (expected info, warning, error or success)")]
pub struct ParseDialogKindError(pub String);

impl FromStr for DialogKind {
    type Err = ParseDialogKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "info" => Ok(Self::Info),
            "warning" | "warn" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "success" => Ok(Self::Success),
            _ => Err(ParseDialogKindError(s.to_string())),
        }
    }
}
