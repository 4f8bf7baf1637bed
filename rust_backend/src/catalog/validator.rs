//! Catalog validation with detailed error and warning reporting.
//!
//! This module validates series tier tables before they are used for
//! pricing. It checks for inverted tier bounds, non-positive prices,
//! empty series, overlapping tiers, and standard sizes that no tier
//! covers (those would silently price per square foot).

use serde::{Deserialize, Serialize};

use crate::models::InchDimensions;
use crate::pricing::surcharges::STANDARD_SIZES;

use super::Catalog;

/// Comprehensive validation result with categorized issues and statistics.
///
/// Errors make `is_valid` false; warnings are informational but don't fail
/// validation.
///
/// # Examples
///
/// ```
/// use doorquote_rust::catalog::CatalogReport;
///
/// let mut report = CatalogReport::new();
/// assert!(report.is_valid);
///
/// report.add_error("Series 'estate' has no size tiers".to_string());
/// assert!(!report.is_valid);
/// assert_eq!(report.errors.len(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub stats: CatalogStats,
}

/// Summary statistics computed during catalog validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogStats {
    pub total_series: usize,
    pub total_tiers: usize,
    pub empty_series: usize,
    pub inverted_tiers: usize,
    pub overlapping_tier_pairs: usize,
    pub uncovered_standard_sizes: usize,
}

impl CatalogReport {
    /// Creates a report with valid status and empty issue lists.
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            stats: CatalogStats::default(),
        }
    }

    /// Adds a critical error and marks the report invalid.
    pub fn add_error(&mut self, error: String) {
        self.is_valid = false;
        self.errors.push(error);
    }

    /// Adds a non-critical warning without invalidating the report.
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }
}

impl Default for CatalogReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for series catalogs.
///
/// # Examples
///
/// ```
/// use doorquote_rust::catalog::{builtin, CatalogValidator};
///
/// let report = CatalogValidator::validate(builtin());
/// assert!(report.is_valid);
/// assert_eq!(report.stats.total_series, 2);
/// ```
pub struct CatalogValidator;

impl CatalogValidator {
    /// Validates every series in the catalog.
    ///
    /// Errors: empty series, inverted tier bounds (`min > max`), and
    /// non-positive base prices. Warnings: overlapping tiers (lookup becomes
    /// order-dependent) and standard stock sizes no tier covers (those fall
    /// through to per-square-foot pricing, usually below the sheet price).
    pub fn validate(catalog: &Catalog) -> CatalogReport {
        let mut report = CatalogReport::new();

        report.stats.total_series = catalog.len();
        if catalog.is_empty() {
            report.add_error("Catalog defines no series".to_string());
            return report;
        }

        for (id, series) in catalog.iter() {
            Self::validate_series(id, series, &mut report);
        }

        report
    }

    fn validate_series(id: &str, series: &super::Series, report: &mut CatalogReport) {
        report.stats.total_tiers += series.tiers.len();

        if series.tiers.is_empty() {
            report.stats.empty_series += 1;
            report.add_error(format!("Series '{}' has no size tiers", id));
            return;
        }

        for tier in &series.tiers {
            if tier.min_width > tier.max_width || tier.min_height > tier.max_height {
                report.stats.inverted_tiers += 1;
                report.add_error(format!(
                    "Series '{}': tier '{}' has inverted bounds",
                    id,
                    tier.label()
                ));
            }
            if tier.base_price <= 0.0 {
                report.add_error(format!(
                    "Series '{}': tier '{}' has non-positive base price {}",
                    id,
                    tier.label(),
                    tier.base_price
                ));
            }
        }

        for (i, a) in series.tiers.iter().enumerate() {
            for b in series.tiers.iter().skip(i + 1) {
                if a.overlaps(b) {
                    report.stats.overlapping_tier_pairs += 1;
                    report.add_warning(format!(
                        "Series '{}': tiers '{}' and '{}' overlap; lookup is order-dependent",
                        id,
                        a.label(),
                        b.label()
                    ));
                }
            }
        }

        for &(width, height) in STANDARD_SIZES.iter() {
            let dims = InchDimensions { width, height };
            if !series.tiers.iter().any(|tier| tier.contains(dims)) {
                report.stats.uncovered_standard_sizes += 1;
                report.add_warning(format!(
                    "Series '{}': standard size {}\" × {}\" is not covered by any tier and will price per square foot",
                    id, width, height
                ));
            }
        }
    }
}
