//! Full-configuration price aggregation.

use crate::catalog::Catalog;
use crate::display::format_price;
use crate::error::PricingResult;
use crate::models::{CostBreakdown, PriceBreakdown, ProductConfiguration};

use super::{finish_modifier, glass_surcharge, hardware_price, resolve_base_price, surcharges};

/// Policy for the synthetic MSRP savings figure.
///
/// The storefront has no real MSRP feed; it marks the computed price up and
/// shows the difference as savings when the figure is large enough to mean
/// something. Both knobs are policy, not pricing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MsrpPolicy {
    /// Multiplier applied to the computed price to synthesize an MSRP.
    pub markup: f64,
    /// Savings are reported only when they exceed this fraction of MSRP.
    pub min_savings_ratio: f64,
}

impl Default for MsrpPolicy {
    fn default() -> Self {
        Self {
            markup: 1.25,
            min_savings_ratio: 0.10,
        }
    }
}

impl MsrpPolicy {
    /// Savings figure for a computed price, if worth displaying.
    pub fn savings(&self, total_price: f64) -> Option<f64> {
        let msrp = (total_price * self.markup).round();
        if msrp <= 0.0 {
            return None;
        }
        let savings = msrp - total_price;
        if savings / msrp > self.min_savings_ratio {
            Some(savings)
        } else {
            None
        }
    }
}

/// Price a complete configuration with the default MSRP policy.
///
/// Sums base price, finish modifier, glass surcharge, hardware, and all
/// applied surcharges; rounds to the nearest dollar. Pure function of its
/// inputs: identical configurations always yield identical breakdowns.
pub fn calculate_total_price(
    catalog: &Catalog,
    config: &ProductConfiguration,
) -> PricingResult<PriceBreakdown> {
    calculate_total_price_with_policy(catalog, config, MsrpPolicy::default())
}

/// Price a complete configuration under an explicit MSRP policy.
pub fn calculate_total_price_with_policy(
    catalog: &Catalog,
    config: &ProductConfiguration,
    msrp: MsrpPolicy,
) -> PricingResult<PriceBreakdown> {
    let base = resolve_base_price(catalog, &config.series_id, &config.dimensions)?;
    let finish = finish_modifier(&config.finish, base.base_price);

    let glass = match &config.glass {
        Some(glass) => Some(glass_surcharge(glass, &config.dimensions)?),
        None => None,
    };

    let hardware = hardware_price(&config.hardware);
    let applied = surcharges(config)?;
    let surcharge_total: f64 = applied.iter().map(|s| s.amount).sum();

    let total_price = (base.base_price
        + finish
        + glass.unwrap_or(0.0)
        + hardware.total
        + surcharge_total)
        .round();

    Ok(PriceBreakdown {
        total_price,
        breakdown: CostBreakdown {
            base: base.base_price,
            finish,
            // A zero-cost panel is omitted, matching the storefront output
            glass: glass.filter(|&g| g != 0.0),
            hardware: hardware.total,
            surcharges: applied,
        },
        display_price: format_price(total_price),
        savings_from_msrp: msrp.savings(total_price),
    })
}
