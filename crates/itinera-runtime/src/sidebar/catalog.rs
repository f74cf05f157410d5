//! Read-only asset catalog.

use super::{Asset, AssetFilter};
use itinera_types::{AssetId, ErrorCode};
use serde::Deserialize;
use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file could not be read.
    #[error("failed to read catalog '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog is not valid JSON or has the wrong shape.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two assets share an id.
    #[error("duplicate asset id: {0}")]
    DuplicateId(AssetId),
}

impl ErrorCode for CatalogError {
    fn code(&self) -> &'static str {
        match self {
            Self::Read { .. } => "CATALOG_READ",
            Self::Parse(_) => "CATALOG_PARSE",
            Self::DuplicateId(_) => "CATALOG_DUPLICATE_ID",
        }
    }

    fn is_recoverable(&self) -> bool {
        true
    }
}

/// Accepted file layouts: a bare array, or `{ "assets": [...] }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Bare(Vec<Asset>),
    Wrapped { assets: Vec<Asset> },
}

/// Assets in file order, indexed by id.
///
/// # Example
///
/// ```
/// use itinera_runtime::sidebar::Catalog;
///
/// let catalog = Catalog::from_json(r#"[
///     {"id": "louvre", "name": "Louvre", "region": "Paris", "tags": ["art"]},
///     {"id": "inari", "name": "Fushimi Inari", "region": "Kyoto"}
/// ]"#).unwrap();
///
/// assert_eq!(catalog.len(), 2);
/// assert!(catalog.get(&"louvre".into()).is_some());
/// assert_eq!(catalog.regions().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    assets: Vec<Asset>,
    index: HashMap<AssetId, usize>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] on the first repeated id.
    pub fn new(assets: Vec<Asset>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(assets.len());
        for (i, asset) in assets.iter().enumerate() {
            if index.insert(asset.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateId(asset.id.clone()));
            }
        }
        Ok(Self { assets, index })
    }

    /// Parses a catalog from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the JSON is malformed or ids repeat.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let assets = match serde_json::from_str::<CatalogFile>(json)? {
            CatalogFile::Bare(assets) | CatalogFile::Wrapped { assets } => assets,
        };
        Self::new(assets)
    }

    /// Loads a catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&content)?;
        debug!(path = %path.display(), assets = catalog.len(), "Loaded catalog");
        Ok(catalog)
    }

    #[must_use]
    pub fn get(&self, id: &AssetId) -> Option<&Asset> {
        self.index.get(id).map(|&i| &self.assets[i])
    }

    #[must_use]
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Distinct regions, sorted.
    #[must_use]
    pub fn regions(&self) -> BTreeSet<&str> {
        self.assets.iter().map(|a| a.region.as_str()).collect()
    }

    /// Distinct non-empty categories, sorted.
    #[must_use]
    pub fn categories(&self) -> BTreeSet<&str> {
        self.assets
            .iter()
            .map(|a| a.category.as_str())
            .filter(|c| !c.is_empty())
            .collect()
    }

    /// Distinct tags, sorted.
    #[must_use]
    pub fn tags(&self) -> BTreeSet<&str> {
        self.assets
            .iter()
            .flat_map(|a| a.tags.iter().map(String::as_str))
            .collect()
    }

    /// Shorthand for `filter.apply(self.assets())`.
    #[must_use]
    pub fn filter(&self, filter: &AssetFilter) -> Vec<&Asset> {
        filter.apply(&self.assets)
    }
}
