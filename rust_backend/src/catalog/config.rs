//! Catalog loading from TOML files.
//!
//! Deployments that price more series than the built-ins ship a
//! `catalog.toml` next to the binary (or under `config/`). The file lists
//! one `[[series]]` block per product line:
//!
//! ```toml
//! default_series = "continental"
//!
//! [[series]]
//! id = "continental"
//! name = "Continental"
//!
//! [[series.tiers]]
//! min_width = 48
//! max_width = 72
//! min_height = 78
//! max_height = 82
//! base_price = 449
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::error::{PricingError, PricingResult};

use super::{Catalog, Series, SizeTier};

/// On-disk catalog document.
#[derive(Debug, Deserialize)]
struct RawCatalog {
    #[serde(default = "default_series_id")]
    default_series: String,
    #[serde(default)]
    series: Vec<RawSeries>,
}

fn default_series_id() -> String {
    super::DEFAULT_SERIES_ID.to_string()
}

#[derive(Debug, Deserialize)]
struct RawSeries {
    id: String,
    name: Option<String>,
    #[serde(default)]
    tiers: Vec<RawTier>,
}

#[derive(Debug, Deserialize)]
struct RawTier {
    min_width: f64,
    max_width: f64,
    min_height: f64,
    max_height: f64,
    base_price: f64,
}

impl From<RawTier> for SizeTier {
    fn from(raw: RawTier) -> Self {
        SizeTier {
            min_width: raw.min_width,
            max_width: raw.max_width,
            min_height: raw.min_height,
            max_height: raw.max_height,
            base_price: raw.base_price,
        }
    }
}

impl Catalog {
    /// Load a catalog from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> PricingResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            PricingError::CatalogError(format!("Failed to read catalog file: {}", e))
        })?;
        debug!("loading catalog from {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    /// Parse a catalog from TOML content.
    pub fn from_toml_str(content: &str) -> PricingResult<Self> {
        let raw: RawCatalog = toml::from_str(content).map_err(|e| {
            PricingError::CatalogError(format!("Failed to parse catalog file: {}", e))
        })?;

        let mut catalog = Catalog::new(&raw.default_series);
        for series in raw.series {
            let name = series.name.unwrap_or_else(|| series.id.clone());
            catalog.insert(
                series.id,
                Series {
                    name,
                    tiers: series.tiers.into_iter().map(SizeTier::from).collect(),
                },
            );
        }

        if !catalog.is_empty() && catalog.default_series().is_none() {
            return Err(PricingError::CatalogError(format!(
                "Default series '{}' is not defined in the catalog",
                catalog.default_series_id()
            )));
        }

        Ok(catalog)
    }

    /// Load a catalog from the default location.
    ///
    /// Searches for `catalog.toml` in:
    /// 1. Current directory
    /// 2. `config/` directory
    /// 3. `rust_backend/` directory
    /// 4. Parent directory
    pub fn from_default_location() -> PricingResult<Self> {
        let search_paths = vec![
            PathBuf::from("catalog.toml"),
            PathBuf::from("config/catalog.toml"),
            PathBuf::from("rust_backend/catalog.toml"),
            PathBuf::from("../catalog.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(PricingError::CatalogError(
            "No catalog.toml found in standard locations".to_string(),
        ))
    }
}
