//! Catalog data types: size tiers, series, and the catalog lookup table.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::InchDimensions;

/// A rectangular size range mapped to a fixed base price.
///
/// Bounds are inches, inclusive on both axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeTier {
    pub min_width: f64,
    pub max_width: f64,
    pub min_height: f64,
    pub max_height: f64,
    pub base_price: f64,
}

impl SizeTier {
    /// Whether the normalized dimensions fall inside this tier.
    pub fn contains(&self, dims: InchDimensions) -> bool {
        dims.width >= self.min_width
            && dims.width <= self.max_width
            && dims.height >= self.min_height
            && dims.height <= self.max_height
    }

    /// Whether two tiers claim any common size.
    pub fn overlaps(&self, other: &SizeTier) -> bool {
        self.min_width <= other.max_width
            && other.min_width <= self.max_width
            && self.min_height <= other.max_height
            && other.min_height <= self.max_height
    }

    /// Display label, e.g. `48-72" × 78-82"`.
    pub fn label(&self) -> String {
        format!(
            "{}-{}\" × {}-{}\"",
            self.min_width, self.max_width, self.min_height, self.max_height
        )
    }
}

/// A named product line with its ordered tier table.
///
/// Tier order matters: the first tier containing the requested size wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub tiers: Vec<SizeTier>,
}

/// Lookup table of door series, keyed by lowercase series id.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    series: HashMap<String, Series>,
    default_series_id: String,
}

impl Catalog {
    /// Empty catalog with the given default series id.
    pub fn new(default_series_id: impl Into<String>) -> Self {
        Self {
            series: HashMap::new(),
            default_series_id: default_series_id.into().to_lowercase(),
        }
    }

    /// Register a series. Ids are case-insensitive; a repeated id replaces
    /// the earlier entry.
    pub fn insert(&mut self, id: impl Into<String>, series: Series) {
        self.series.insert(id.into().to_lowercase(), series);
    }

    /// Look up a series by id, case-insensitively.
    pub fn series(&self, id: &str) -> Option<&Series> {
        self.series.get(&id.to_lowercase())
    }

    /// The series used by fallback-tolerant callers.
    pub fn default_series(&self) -> Option<&Series> {
        self.series.get(&self.default_series_id)
    }

    pub fn default_series_id(&self) -> &str {
        &self.default_series_id
    }

    /// Iterate over `(id, series)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Series)> {
        self.series.iter().map(|(id, series)| (id.as_str(), series))
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
