//! Property tests for the pricing invariants.

use doorquote_rust::catalog::builtin;
use doorquote_rust::models::{
    DimensionUnit, FinishAvailability, FinishOption, HardwareOption, HardwareSelection,
    OpeningDimensions, PriceAdjustment, ProductConfiguration,
};
use doorquote_rust::pricing::{
    calculate_total_price, financing, resolve_base_price, volume_discount,
};
use proptest::prelude::*;

fn config(width: f64, height: f64) -> ProductConfiguration {
    ProductConfiguration {
        series_id: "continental".to_string(),
        dimensions: OpeningDimensions::inches(width, height),
        finish: FinishOption {
            name: "White".to_string(),
            adjustment: PriceAdjustment::Percentage(0.0),
            availability: FinishAvailability::Standard,
        },
        glass: None,
        hardware: HardwareSelection {
            track: HardwareOption {
                name: "Standard Track".to_string(),
                price: 0.0,
                included: true,
            },
            handles: None,
            soft_close: None,
            additional: Vec::new(),
        },
    }
}

proptest! {
    #[test]
    fn base_price_is_positive_for_any_real_opening(
        width in 12.0f64..400.0,
        height in 12.0f64..400.0,
    ) {
        let quote = resolve_base_price(
            builtin(),
            "continental",
            &OpeningDimensions::inches(width, height),
        ).unwrap();
        prop_assert!(quote.base_price > 0.0);
        prop_assert!(quote.price_per_sq_ft > 0.0);
    }

    #[test]
    fn total_is_never_below_base(
        width in 12.0f64..400.0,
        height in 12.0f64..400.0,
    ) {
        let cfg = config(width, height);
        let price = calculate_total_price(builtin(), &cfg).unwrap();
        prop_assert!(price.total_price >= price.breakdown.base);
    }

    #[test]
    fn unit_conversion_agrees_with_inches(
        width in 12.0f64..400.0,
        height in 12.0f64..400.0,
    ) {
        let inches = OpeningDimensions::inches(width, height).to_inches();
        let cm = OpeningDimensions::new(width * 2.54, height * 2.54, DimensionUnit::Cm).to_inches();
        let mm = OpeningDimensions::new(width * 25.4, height * 25.4, DimensionUnit::Mm).to_inches();
        prop_assert!((inches.width - cm.width).abs() < 1e-6);
        prop_assert!((inches.height - mm.height).abs() < 1e-6);
    }

    #[test]
    fn pricing_is_deterministic(
        width in 12.0f64..400.0,
        height in 12.0f64..400.0,
    ) {
        let cfg = config(width, height);
        let first = calculate_total_price(builtin(), &cfg).unwrap();
        let second = calculate_total_price(builtin(), &cfg).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn volume_discount_never_raises_the_price(
        quantity in 0u32..100,
        unit_price in 1.0f64..10_000.0,
    ) {
        let discount = volume_discount(quantity, unit_price);
        let undiscounted = (unit_price * quantity as f64).round();
        prop_assert!(discount.final_price <= undiscounted);
        prop_assert!(discount.discount_amount >= 0.0);
        prop_assert!(
            (discount.final_price + discount.discount_amount - undiscounted).abs() <= 1.0
        );
    }

    #[test]
    fn larger_orders_never_get_smaller_percentages(
        quantity in 1u32..99,
        unit_price in 1.0f64..10_000.0,
    ) {
        let smaller = volume_discount(quantity, unit_price);
        let larger = volume_discount(quantity + 1, unit_price);
        prop_assert!(larger.discount_percentage >= smaller.discount_percentage);
    }

    #[test]
    fn financing_payments_cover_the_principal(
        total in 100.0f64..50_000.0,
        term in 1u32..60,
        apr in 0.0f64..0.3,
    ) {
        let quote = financing(total, term, apr).unwrap();
        prop_assert!(quote.monthly_payment.is_finite());
        prop_assert!(quote.total_paid + 0.01 >= total * (1.0 - 1e-9));
        prop_assert!(quote.total_interest >= -0.01);
    }
}
