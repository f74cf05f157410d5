//! Identifier types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier for a single confirmation request.
///
/// Every call to the broker's request operation mints a fresh ID. Renderer
/// controls carry the ID of the request they were rendered for, so a click
/// on a dialog that has since been superseded cannot settle the newer one.
///
/// # Example
///
/// ```
/// use itinera_types::ConfirmationId;
///
/// let id = ConfirmationId::new();
/// assert!(id.to_string().starts_with("confirm:"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConfirmationId(pub Uuid);

impl ConfirmationId {
    /// Creates a new [`ConfirmationId`] with a random UUID v4.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    #[must_use]
    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

// NOTE: no Default impl. A defaulted ID would silently mint a request
// identity; callers go through `new()`.

impl std::fmt::Display for ConfirmationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "confirm:{}", self.0)
    }
}

/// Identifier for a catalog asset (attraction or template).
///
/// Asset IDs come from the external catalog and are opaque strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(String);

impl AssetId {
    /// Creates an asset ID from a catalog key.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AssetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssetId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for AssetId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
