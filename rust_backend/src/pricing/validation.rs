//! Request-side configuration review.
//!
//! The catalog validator checks the price tables; this checks the pricing
//! request itself before it hits the calculators, so the storefront can
//! surface problems to support staff instead of silently quoting nonsense.

use serde::{Deserialize, Serialize};

use crate::models::{PriceAdjustment, ProductConfiguration, LEGACY_PERCENT_THRESHOLD};

/// Result of reviewing a pricing request.
///
/// Errors mean the request cannot price meaningfully; warnings flag data
/// that prices but looks suspicious.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigurationReview {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ConfigurationReview {
    fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    fn add_error(&mut self, error: String) {
        self.is_valid = false;
        self.errors.push(error);
    }

    fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }
}

/// Review a configuration for request-side problems.
pub fn review_configuration(config: &ProductConfiguration) -> ConfigurationReview {
    let mut review = ConfigurationReview::new();

    if config.series_id.trim().is_empty() {
        review.add_error("Series id is empty".to_string());
    }

    let dims = &config.dimensions;
    if !(dims.width.is_finite() && dims.height.is_finite())
        || dims.width <= 0.0
        || dims.height <= 0.0
    {
        review.add_error(format!(
            "Dimensions {} x {} cannot describe an opening",
            dims.width, dims.height
        ));
    }

    match config.finish.adjustment {
        PriceAdjustment::Percentage(fraction) if fraction > 1.0 => {
            review.add_warning(format!(
                "Finish '{}' adjusts by {:.0}% of base price; verify this is not a flat amount",
                config.finish.name,
                fraction * 100.0
            ));
        }
        PriceAdjustment::Fixed(dollars) if dollars > 0.0 && dollars < LEGACY_PERCENT_THRESHOLD => {
            review.add_warning(format!(
                "Finish '{}' has a fixed ${} adjustment; legacy data would read this as a percentage",
                config.finish.name, dollars
            ));
        }
        _ => {}
    }

    review
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        FinishAvailability, FinishOption, HardwareOption, HardwareSelection, OpeningDimensions,
    };

    fn config(adjustment: PriceAdjustment) -> ProductConfiguration {
        ProductConfiguration {
            series_id: "continental".to_string(),
            dimensions: OpeningDimensions::inches(72.0, 80.0),
            finish: FinishOption {
                name: "White".to_string(),
                adjustment,
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

    #[test]
    fn clean_configuration_passes() {
        let review = review_configuration(&config(PriceAdjustment::Percentage(0.05)));
        assert!(review.is_valid);
        assert!(review.errors.is_empty());
        assert!(review.warnings.is_empty());
    }

    #[test]
    fn empty_series_id_is_an_error() {
        let mut cfg = config(PriceAdjustment::Percentage(0.0));
        cfg.series_id = "  ".to_string();
        let review = review_configuration(&cfg);
        assert!(!review.is_valid);
        assert!(review.errors[0].contains("Series id"));
    }

    #[test]
    fn degenerate_dimensions_are_an_error() {
        let mut cfg = config(PriceAdjustment::Percentage(0.0));
        cfg.dimensions = OpeningDimensions::inches(0.0, 80.0);
        let review = review_configuration(&cfg);
        assert!(!review.is_valid);
    }

    #[test]
    fn oversized_percentage_warns() {
        let review = review_configuration(&config(PriceAdjustment::Percentage(2.5)));
        assert!(review.is_valid);
        assert!(review.warnings[0].contains("250%"));
    }

    #[test]
    fn small_fixed_amount_warns_about_legacy_ambiguity() {
        let review = review_configuration(&config(PriceAdjustment::Fixed(5.0)));
        assert!(review.is_valid);
        assert!(review.warnings[0].contains("percentage"));
    }

    #[test]
    fn zero_fixed_amount_does_not_warn() {
        let review = review_configuration(&config(PriceAdjustment::Fixed(0.0)));
        assert!(review.warnings.is_empty());
    }
}
