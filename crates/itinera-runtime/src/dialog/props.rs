//! Dialog props.

use itinera_types::{ConfirmationId, DialogKind};
use serde::Serialize;

/// Everything a renderer needs to draw the confirmation dialog.
///
/// Hidden props carry no content; renderers should unmount the dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DialogProps {
    /// Whether the dialog is shown.
    pub visible: bool,
    /// Request being displayed.
    pub id: Option<ConfirmationId>,
    /// Optional heading.
    pub title: Option<String>,
    /// Body text.
    pub message: String,
    /// Accept button label.
    pub confirm_label: String,
    /// Decline button label.
    pub cancel_label: String,
    /// Presentational kind.
    pub kind: DialogKind,
}

impl DialogProps {
    /// Props for the unmounted dialog.
    #[must_use]
    pub fn hidden() -> Self {
        Self::default()
    }
}
