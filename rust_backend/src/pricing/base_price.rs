//! Base price resolution from series tier tables.

use log::warn;

use crate::catalog::{Catalog, Series};
use crate::error::{PricingError, PricingResult};
use crate::models::{BasePriceQuote, FromPrice, InchDimensions, OpeningDimensions};

use crate::display::format_price;

/// Per-square-foot rate for openings no tier covers.
pub const CUSTOM_RATE_PER_SQ_FT: f64 = 8.5;

/// Tier label used when pricing falls through to the square-foot rate.
pub const CUSTOM_TIER: &str = "custom";

/// Resolve the base price for a series and opening size.
///
/// Dimensions are normalized to inches before lookup. The first tier
/// containing both width and height (inclusive bounds) wins; sizes no tier
/// covers price at [`CUSTOM_RATE_PER_SQ_FT`] with tier label `custom`.
///
/// Unknown series ids are an error here; callers that want the legacy
/// fall-back behavior use [`resolve_base_price_or_default`].
pub fn resolve_base_price(
    catalog: &Catalog,
    series_id: &str,
    dimensions: &OpeningDimensions,
) -> PricingResult<BasePriceQuote> {
    let series = catalog
        .series(series_id)
        .ok_or_else(|| PricingError::UnknownSeries(series_id.to_string()))?;
    resolve_in_series(series, dimensions)
}

/// Resolve the base price, falling back to the catalog's default series
/// when `series_id` is unknown.
///
/// This preserves the storefront's original behavior where an unrecognized
/// series silently priced as Continental; the fallback is logged so
/// mis-priced quotes can be traced.
pub fn resolve_base_price_or_default(
    catalog: &Catalog,
    series_id: &str,
    dimensions: &OpeningDimensions,
) -> PricingResult<BasePriceQuote> {
    let series = match catalog.series(series_id) {
        Some(series) => series,
        None => {
            warn!(
                "unknown series '{}', falling back to default series '{}'",
                series_id,
                catalog.default_series_id()
            );
            catalog.default_series().ok_or_else(|| {
                PricingError::CatalogError(format!(
                    "Default series '{}' is not defined in the catalog",
                    catalog.default_series_id()
                ))
            })?
        }
    };
    resolve_in_series(series, dimensions)
}

fn resolve_in_series(
    series: &Series,
    dimensions: &OpeningDimensions,
) -> PricingResult<BasePriceQuote> {
    let dims = dimensions.normalized()?;
    let sq_ft = dims.square_feet();

    if let Some(tier) = series.tiers.iter().find(|tier| tier.contains(dims)) {
        return Ok(BasePriceQuote {
            base_price: tier.base_price,
            price_per_sq_ft: tier.base_price / sq_ft,
            tier: tier.label(),
        });
    }

    Ok(BasePriceQuote {
        base_price: (sq_ft * CUSTOM_RATE_PER_SQ_FT).round(),
        price_per_sq_ft: CUSTOM_RATE_PER_SQ_FT,
        tier: CUSTOM_TIER.to_string(),
    })
}

/// Entry-level "From $X" price advertised for a series: the cheapest tier
/// in its table.
pub fn from_price(catalog: &Catalog, series_id: &str) -> PricingResult<FromPrice> {
    let series = catalog
        .series(series_id)
        .ok_or_else(|| PricingError::UnknownSeries(series_id.to_string()))?;

    let lowest = series
        .tiers
        .iter()
        .map(|tier| tier.base_price)
        .fold(f64::INFINITY, f64::min);
    if !lowest.is_finite() {
        return Err(PricingError::CatalogError(format!(
            "Series '{}' has no size tiers",
            series_id
        )));
    }

    Ok(FromPrice {
        from_price: lowest,
        display_text: format!("From {}", format_price(lowest)),
        includes: vec![
            "Standard finish".to_string(),
            "Basic hardware included".to_string(),
            "Most common sizes".to_string(),
        ],
    })
}

/// Whether the opening falls within ±2" of a stocked standard size.
pub(crate) fn is_standard_size(dims: InchDimensions) -> bool {
    super::surcharges::STANDARD_SIZES
        .iter()
        .any(|&(w, h)| (dims.width - w).abs() <= 2.0 && (dims.height - h).abs() <= 2.0)
}
