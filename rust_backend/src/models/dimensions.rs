//! Opening dimensions and unit normalization.
//!
//! Callers may measure in inches, centimeters, or millimeters. All pricing
//! math runs on inches, so conversion happens once, up front.

use serde::{Deserialize, Serialize};

use crate::error::{PricingError, PricingResult};

/// Square inches per square foot.
pub const SQ_IN_PER_SQ_FT: f64 = 144.0;

const CM_PER_INCH: f64 = 2.54;
const MM_PER_INCH: f64 = 25.4;

/// Measurement unit accepted for opening dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionUnit {
    In,
    Cm,
    Mm,
}

/// Width and height of a door opening as supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpeningDimensions {
    pub width: f64,
    pub height: f64,
    pub unit: DimensionUnit,
}

impl OpeningDimensions {
    pub fn new(width: f64, height: f64, unit: DimensionUnit) -> Self {
        Self {
            width,
            height,
            unit,
        }
    }

    /// Convenience constructor for measurements already in inches.
    pub fn inches(width: f64, height: f64) -> Self {
        Self::new(width, height, DimensionUnit::In)
    }

    /// Convert to inches without validating the measurement.
    pub fn to_inches(&self) -> InchDimensions {
        let (width, height) = match self.unit {
            DimensionUnit::In => (self.width, self.height),
            DimensionUnit::Cm => (self.width / CM_PER_INCH, self.height / CM_PER_INCH),
            DimensionUnit::Mm => (self.width / MM_PER_INCH, self.height / MM_PER_INCH),
        };
        InchDimensions { width, height }
    }

    /// Convert to inches, rejecting measurements that cannot describe a
    /// real opening (zero, negative, or non-finite width/height).
    pub fn normalized(&self) -> PricingResult<InchDimensions> {
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(PricingError::InvalidDimensions(format!(
                "width and height must be finite, got {} x {}",
                self.width, self.height
            )));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(PricingError::InvalidDimensions(format!(
                "width and height must be positive, got {} x {}",
                self.width, self.height
            )));
        }
        Ok(self.to_inches())
    }
}

/// Dimensions normalized to inches, ready for tier lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InchDimensions {
    pub width: f64,
    pub height: f64,
}

impl InchDimensions {
    /// Opening area in square feet.
    pub fn square_feet(&self) -> f64 {
        self.width * self.height / SQ_IN_PER_SQ_FT
    }
}
