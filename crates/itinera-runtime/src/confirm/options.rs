//! Request options.

use itinera_types::DialogKind;
use serde::{Deserialize, Serialize};

/// What to ask the user.
///
/// `message` is the only required field and is taken by [`new`](Self::new),
/// so an options value without a message cannot be built. Labels left unset
/// are filled in from the locale when the request is issued.
///
/// # Example
///
/// ```
/// use itinera_runtime::confirm::ConfirmationOptions;
/// use itinera_types::DialogKind;
///
/// let opts = ConfirmationOptions::new("Unlocked!")
///     .with_kind(DialogKind::Success)
///     .with_confirm_label("Awesome");
///
/// assert_eq!(opts.message, "Unlocked!");
/// assert_eq!(opts.confirm_label.as_deref(), Some("Awesome"));
/// assert!(opts.cancel_label.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationOptions {
    /// Optional heading.
    #[serde(default)]
    pub title: Option<String>,
    /// Body text.
    pub message: String,
    /// Accept button label.
    #[serde(default)]
    pub confirm_label: Option<String>,
    /// Decline button label.
    #[serde(default)]
    pub cancel_label: Option<String>,
    /// Presentational kind.
    #[serde(default)]
    pub kind: DialogKind,
}

impl ConfirmationOptions {
    /// Creates options with the given message and defaults for everything else.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            title: None,
            message: message.into(),
            confirm_label: None,
            cancel_label: None,
            kind: DialogKind::default(),
        }
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the accept label.
    #[must_use]
    pub fn with_confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = Some(label.into());
        self
    }

    /// Sets the decline label.
    #[must_use]
    pub fn with_cancel_label(mut self, label: impl Into<String>) -> Self {
        self.cancel_label = Some(label.into());
        self
    }

    /// Sets the kind.
    #[must_use]
    pub fn with_kind(mut self, kind: DialogKind) -> Self {
        self.kind = kind;
        self
    }
}
