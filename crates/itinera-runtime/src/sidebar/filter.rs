//! Sidebar filtering and grouping.

use super::asset::eq_ignore_case;
use super::Asset;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Narrows the sidebar. Every set criterion must match; comparisons ignore
/// case.
///
/// # Example
///
/// ```
/// use itinera_runtime::sidebar::{Asset, AssetFilter};
///
/// let assets = vec![
///     Asset::new("1", "Louvre", "Paris").with_category("museum"),
///     Asset::new("2", "Fushimi Inari", "Kyoto").with_category("shrine"),
/// ];
///
/// let filter = AssetFilter::new().region("paris");
/// let hits = filter.apply(&assets);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].name, "Louvre");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetFilter {
    pub region: Option<String>,
    pub category: Option<String>,
    /// All of these tags are required.
    pub tags: Vec<String>,
    /// Substring of the asset name.
    pub query: Option<String>,
}

impl AssetFilter {
    /// A filter that matches everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    #[must_use]
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Returns `true` when no criterion is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.region.is_none()
            && self.category.is_none()
            && self.tags.is_empty()
            && matches!(self.query.as_deref(), None | Some(""))
    }

    #[must_use]
    pub fn matches(&self, asset: &Asset) -> bool {
        if let Some(ref region) = self.region {
            if !eq_ignore_case(&asset.region, region) {
                return false;
            }
        }
        if let Some(ref category) = self.category {
            if !eq_ignore_case(&asset.category, category) {
                return false;
            }
        }
        if !self.tags.iter().all(|t| asset.has_tag(t)) {
            return false;
        }
        if let Some(ref query) = self.query {
            let needle = query.to_lowercase();
            if !asset.name.to_lowercase().contains(&needle) {
                return false;
            }
        }
        true
    }

    /// Matching assets, in input order.
    #[must_use]
    pub fn apply<'a>(&self, assets: &'a [Asset]) -> Vec<&'a Asset> {
        assets.iter().filter(|a| self.matches(a)).collect()
    }
}

/// Groups assets by region. Regions iterate alphabetically; assets within a
/// region are sorted by name.
#[must_use]
pub fn group_by_region<'a, I>(assets: I) -> BTreeMap<String, Vec<&'a Asset>>
where
    I: IntoIterator<Item = &'a Asset>,
{
    let mut groups: BTreeMap<String, Vec<&'a Asset>> = BTreeMap::new();
    for asset in assets {
        groups.entry(asset.region.clone()).or_default().push(asset);
    }
    for group in groups.values_mut() {
        group.sort_by(|a, b| a.name.cmp(&b.name));
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sidebar::AssetKind;

    fn sample() -> Vec<Asset> {
        vec![
            Asset::new("louvre", "Louvre", "Paris")
                .with_category("museum")
                .with_tag("indoor")
                .with_tag("art"),
            Asset::new("orsay", "Musée d'Orsay", "Paris")
                .with_category("museum")
                .with_tag("art"),
            Asset::new("eiffel", "Eiffel Tower", "Paris")
                .with_category("landmark")
                .with_tag("outdoor"),
            Asset::new("inari", "Fushimi Inari", "Kyoto")
                .with_category("shrine")
                .with_tag("outdoor"),
            Asset::new("kyoto-2d", "Kyoto in two days", "Kyoto").with_kind(AssetKind::Template),
        ]
    }

    fn ids(hits: &[&Asset]) -> Vec<String> {
        hits.iter().map(|a| a.id.to_string()).collect()
    }

    #[test]
    fn empty_filter_matches_all() {
        let assets = sample();
        let filter = AssetFilter::new();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&assets).len(), assets.len());
    }

    #[test]
    fn region_and_category() {
        let assets = sample();
        let hits = AssetFilter::new()
            .region("PARIS")
            .category("museum")
            .apply(&assets);
        assert_eq!(ids(&hits), vec!["louvre", "orsay"]);
    }

    #[test]
    fn all_tags_required() {
        let assets = sample();
        let hits = AssetFilter::new().tag("art").tag("indoor").apply(&assets);
        assert_eq!(ids(&hits), vec!["louvre"]);
    }

    #[test]
    fn query_is_case_insensitive_substring() {
        let assets = sample();
        let hits = AssetFilter::new().query("KYOTO").apply(&assets);
        assert_eq!(ids(&hits), vec!["kyoto-2d"]);
    }

    #[test]
    fn non_ascii_criteria_ignore_case() {
        let assets = vec![Asset::new("gm", "Grossmünster", "Zürich")
            .with_category("église")
            .with_tag("Über")];

        assert_eq!(AssetFilter::new().region("ZÜRICH").apply(&assets).len(), 1);
        assert_eq!(AssetFilter::new().category("ÉGLISE").apply(&assets).len(), 1);
        assert_eq!(AssetFilter::new().tag("über").apply(&assets).len(), 1);
        assert_eq!(AssetFilter::new().query("GROSSMÜNSTER").apply(&assets).len(), 1);
    }

    #[test]
    fn no_match() {
        let assets = sample();
        let hits = AssetFilter::new().region("Lisbon").apply(&assets);
        assert!(hits.is_empty());
    }

    #[test]
    fn grouping_sorts_regions_and_names() {
        let assets = sample();
        let groups = group_by_region(&assets);

        let regions: Vec<_> = groups.keys().cloned().collect();
        assert_eq!(regions, vec!["Kyoto", "Paris"]);

        let paris: Vec<_> = groups["Paris"].iter().map(|a| a.name.as_str()).collect();
        assert_eq!(paris, vec!["Eiffel Tower", "Louvre", "Musée d'Orsay"]);
    }

    #[test]
    fn grouping_filtered_results() {
        let assets = sample();
        let hits = AssetFilter::new().tag("outdoor").apply(&assets);
        let groups = group_by_region(hits);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups["Kyoto"].len(), 1);
    }
}
