//! Asset cards.

use itinera_types::AssetId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a card represents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    /// A single place to visit.
    #[default]
    Attraction,
    /// A prebuilt itinerary fragment.
    Template,
}

impl AssetKind {
    /// Returns the lowercase name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Attraction => "attraction",
            Self::Template => "template",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One card in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub id: AssetId,
    pub name: String,
    #[serde(default)]
    pub kind: AssetKind,
    pub region: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Locked cards are shown but cannot be dragged.
    #[serde(default)]
    pub locked: bool,
}

impl Asset {
    /// Creates an unlocked attraction with no category or tags.
    #[must_use]
    pub fn new(id: impl Into<AssetId>, name: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: AssetKind::Attraction,
            region: region.into(),
            category: String::new(),
            tags: Vec::new(),
            locked: false,
        }
    }

    #[must_use]
    pub fn with_kind(mut self, kind: AssetKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    #[must_use]
    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    /// Case-insensitive tag membership.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| eq_ignore_case(t, tag))
    }

    /// Payload handed to the host drag API, or `None` for locked cards.
    #[must_use]
    pub fn drag_payload(&self) -> Option<DragPayload> {
        if self.locked {
            return None;
        }
        Some(DragPayload {
            asset_id: self.id.clone(),
            kind: self.kind,
        })
    }
}

/// Data carried by a card drag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragPayload {
    pub asset_id: AssetId,
    pub kind: AssetKind,
}

impl DragPayload {
    /// Serializes for the host drag API.
    ///
    /// # Errors
    ///
    /// Returns the serializer error; with these field types it does not fail
    /// in practice.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parses a payload received on drop.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is not a payload.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Unicode-aware case-insensitive equality for place names and tags.
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serde_lowercase() {
        let json = serde_json::to_string(&AssetKind::Template).unwrap();
        assert_eq!(json, "\"template\"");
        assert_eq!(AssetKind::Attraction.to_string(), "attraction");
    }

    #[test]
    fn asset_defaults_from_json() {
        let asset: Asset =
            serde_json::from_str(r#"{"id":"a1","name":"Louvre","region":"Paris"}"#).unwrap();
        assert_eq!(asset.kind, AssetKind::Attraction);
        assert!(asset.tags.is_empty());
        assert!(!asset.locked);
    }

    #[test]
    fn has_tag_ignores_case() {
        let asset = Asset::new("a1", "Louvre", "Paris").with_tag("Museum");
        assert!(asset.has_tag("museum"));
        assert!(!asset.has_tag("park"));

        let asset = Asset::new("a2", "Grossmünster", "Zürich").with_tag("Über");
        assert!(asset.has_tag("über"));
        assert!(asset.has_tag("ÜBER"));
    }

    #[test]
    fn drag_payload_json() {
        let asset = Asset::new("tpl-1", "Two days in Rome", "Rome").with_kind(AssetKind::Template);
        let payload = asset.drag_payload().unwrap();
        let json = payload.to_json().unwrap();
        assert_eq!(json, r#"{"asset_id":"tpl-1","kind":"template"}"#);
        assert_eq!(DragPayload::from_json(&json).unwrap(), payload);
    }

    #[test]
    fn locked_asset_is_not_draggable() {
        let asset = Asset::new("a1", "Secret garden", "Kyoto").locked();
        assert!(asset.drag_payload().is_none());
    }
}
