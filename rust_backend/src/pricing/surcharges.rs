//! Configuration-driven surcharge rules.
//!
//! Each rule is independent and additive; an oversized tempered-mirror
//! door in a premium finish collects all four.

use crate::error::PricingResult;
use crate::models::{
    FinishAvailability, GlassKind, InchDimensions, ProductConfiguration, Surcharge,
};

/// Stocked standard sizes (width, height) in inches. Openings within ±2"
/// of one of these avoid the custom-sizing surcharge.
pub const STANDARD_SIZES: [(f64, f64); 6] = [
    (48.0, 80.0),
    (60.0, 80.0),
    (72.0, 80.0),
    (96.0, 80.0),
    (48.0, 96.0),
    (72.0, 96.0),
];

const OVERSIZED_WIDTH: f64 = 96.0;
const OVERSIZED_HEIGHT: f64 = 84.0;

/// Surcharges triggered by a configuration. All rules may fire at once.
pub fn surcharges(config: &ProductConfiguration) -> PricingResult<Vec<Surcharge>> {
    let dims = config.dimensions.normalized()?;
    let mut applied = Vec::new();

    if dims.width > OVERSIZED_WIDTH || dims.height > OVERSIZED_HEIGHT {
        applied.push(Surcharge {
            name: "Oversized".to_string(),
            amount: 150.0,
            reason: "Doors over 96\" wide or 84\" tall require special handling".to_string(),
        });
    }

    if config
        .glass
        .as_ref()
        .is_some_and(|glass| glass.tempered || glass.kind == GlassKind::Mirror)
    {
        applied.push(Surcharge {
            name: "Safety Glass Handling".to_string(),
            amount: 75.0,
            reason: "Tempered and mirror glass require special packaging".to_string(),
        });
    }

    if !super::base_price::is_standard_size(dims) {
        applied.push(Surcharge {
            name: "Custom Sizing".to_string(),
            amount: 100.0,
            reason: "Non-standard dimensions require custom manufacturing".to_string(),
        });
    }

    if config.finish.availability == FinishAvailability::Premium {
        applied.push(Surcharge {
            name: "Premium Finish".to_string(),
            amount: 125.0,
            reason: "Premium finishes require additional processing".to_string(),
        });
    }

    Ok(applied)
}

/// Whether the opening is within tolerance of a stocked size.
pub fn is_standard_size(dims: InchDimensions) -> bool {
    super::base_price::is_standard_size(dims)
}
