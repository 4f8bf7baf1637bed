//! Finish and glass price modifiers.

use crate::error::PricingResult;
use crate::models::{FinishOption, GlassOption, OpeningDimensions};

/// Base glass price per square foot, charged for every glass panel.
pub const GLASS_RATE_PER_SQ_FT: f64 = 15.0;

/// Multiplier applied to the option surcharge for tempered panels.
pub const TEMPERED_MULTIPLIER: f64 = 1.4;

/// Dollar amount a finish adds on top of the base price.
///
/// Percentage adjustments are taken against `base_price` and rounded;
/// fixed adjustments pass through unchanged.
pub fn finish_modifier(finish: &FinishOption, base_price: f64) -> f64 {
    finish.adjustment.amount(base_price)
}

/// Surcharge for a glass or mirror panel.
///
/// The panel is charged per square foot of opening, plus the option's own
/// surcharge, which tempered glass scales by [`TEMPERED_MULTIPLIER`].
/// Rounded to the nearest dollar.
pub fn glass_surcharge(glass: &GlassOption, dimensions: &OpeningDimensions) -> PricingResult<f64> {
    let dims = dimensions.normalized()?;
    let sq_ft = dims.square_feet();

    let option_surcharge = if glass.tempered {
        glass.price_modifier * TEMPERED_MULTIPLIER
    } else {
        glass.price_modifier
    };

    Ok((sq_ft * GLASS_RATE_PER_SQ_FT + option_surcharge).round())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PricingError;
    use crate::models::{FinishAvailability, GlassKind, PriceAdjustment};

    fn finish(adjustment: PriceAdjustment) -> FinishOption {
        FinishOption {
            name: "Test Finish".to_string(),
            adjustment,
            availability: FinishAvailability::Standard,
        }
    }

    fn glass(kind: GlassKind, price_modifier: f64, tempered: bool) -> GlassOption {
        GlassOption {
            kind,
            price_modifier,
            tempered,
        }
    }

    #[test]
    fn percentage_finish_is_taken_against_base() {
        assert_eq!(
            finish_modifier(&finish(PriceAdjustment::Percentage(0.05)), 1000.0),
            50.0
        );
    }

    #[test]
    fn fixed_finish_ignores_base() {
        assert_eq!(
            finish_modifier(&finish(PriceAdjustment::Fixed(125.0)), 1000.0),
            125.0
        );
    }

    #[test]
    fn zero_finish_contributes_nothing() {
        assert_eq!(
            finish_modifier(&finish(PriceAdjustment::Percentage(0.0)), 1000.0),
            0.0
        );
        assert_eq!(
            finish_modifier(&finish(PriceAdjustment::Fixed(0.0)), 1000.0),
            0.0
        );
    }

    #[test]
    fn glass_charges_per_square_foot_plus_option() {
        // 72x80 is 40 sqft: 40 * 15 + 45 = 645
        let surcharge = glass_surcharge(
            &glass(GlassKind::Frosted, 45.0, false),
            &OpeningDimensions::inches(72.0, 80.0),
        )
        .unwrap();
        assert_eq!(surcharge, 645.0);
    }

    #[test]
    fn tempered_scales_the_option_surcharge_only() {
        // 40 * 15 + 45 * 1.4 = 663
        let surcharge = glass_surcharge(
            &glass(GlassKind::Frosted, 45.0, true),
            &OpeningDimensions::inches(72.0, 80.0),
        )
        .unwrap();
        assert_eq!(surcharge, 663.0);
    }

    #[test]
    fn mirror_without_tempering_uses_the_raw_surcharge() {
        // 40 * 15 + 80 = 680
        let surcharge = glass_surcharge(
            &glass(GlassKind::Mirror, 80.0, false),
            &OpeningDimensions::inches(72.0, 80.0),
        )
        .unwrap();
        assert_eq!(surcharge, 680.0);
    }

    #[test]
    fn glass_shares_the_dimension_guard() {
        let err = glass_surcharge(
            &glass(GlassKind::Clear, 0.0, false),
            &OpeningDimensions::inches(-1.0, 80.0),
        )
        .unwrap_err();
        assert!(matches!(err, PricingError::InvalidDimensions(_)));
    }
}
