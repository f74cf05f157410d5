//! User interaction events on the dialog.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A key the dialog can react to.
///
/// Serialized as its display name (`"escape"`, `"enter"`, or the single
/// character itself) so it can be written in config files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DialogKey {
    /// The Escape key.
    #[default]
    Escape,
    /// The Enter / Return key.
    Enter,
    /// Any single printable character.
    Char(char),
}

impl std::fmt::Display for DialogKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Escape => f.write_str("escape"),
            Self::Enter => f.write_str("enter"),
            Self::Char(c) => write!(f, "{c}"),
        }
    }
}

/// Error returned when a string does not name a [`DialogKey`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown key '{0}' (expected escape, enter or a single character)")]
pub struct ParseDialogKeyError(pub String);

impl FromStr for DialogKey {
    type Err = ParseDialogKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "esc" | "escape" => return Ok(Self::Escape),
            "enter" | "return" => return Ok(Self::Enter),
            _ => {}
        }

        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Self::Char(c)),
            _ => Err(ParseDialogKeyError(s.to_string())),
        }
    }
}

impl TryFrom<String> for DialogKey {
    type Error = ParseDialogKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DialogKey> for String {
    fn from(key: DialogKey) -> Self {
        key.to_string()
    }
}

/// Something the user did to the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogEvent {
    /// Activated the accept control.
    Accept,
    /// Activated the decline control.
    Decline,
    /// Clicked the overlay outside the dialog bounds.
    Backdrop,
    /// Pressed a key while the dialog was visible.
    Key(DialogKey),
}

impl DialogEvent {
    /// Maps the event to an outcome.
    ///
    /// Accept is `true`. Decline, backdrop and `cancel_key` are `false`.
    /// Any other key has no outcome.
    #[must_use]
    pub fn outcome(&self, cancel_key: &DialogKey) -> Option<bool> {
        match self {
            Self::Accept => Some(true),
            Self::Decline | Self::Backdrop => Some(false),
            Self::Key(key) if key == cancel_key => Some(false),
            Self::Key(_) => None,
        }
    }
}
