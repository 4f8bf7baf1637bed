//! Product option types shared by the configurator payload and the
//! pricing calculators.

use serde::{Deserialize, Serialize};

/// Legacy catalog data encodes adjustments as bare numbers: values below
/// this threshold are fractions of the base price, values at or above it
/// are flat dollar amounts.
pub const LEGACY_PERCENT_THRESHOLD: f64 = 10.0;

/// Price adjustment applied by a finish selection.
///
/// Serializes as a tagged object (`{"kind": "percentage", "value": 0.05}`).
/// Bare numbers from legacy data are still accepted on input and mapped
/// through [`LEGACY_PERCENT_THRESHOLD`], so existing catalogs keep pricing
/// identically.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum PriceAdjustment {
    /// Fraction of the base price, e.g. `0.05` for 5%.
    Percentage(f64),
    /// Flat dollar amount added on top of the base price.
    Fixed(f64),
}

impl PriceAdjustment {
    /// Map a legacy numeric modifier onto the explicit representation.
    pub fn from_legacy(value: f64) -> Self {
        if value < LEGACY_PERCENT_THRESHOLD {
            PriceAdjustment::Percentage(value)
        } else {
            PriceAdjustment::Fixed(value)
        }
    }

    /// Dollar amount this adjustment contributes on top of `base_price`.
    pub fn amount(&self, base_price: f64) -> f64 {
        match self {
            PriceAdjustment::Percentage(fraction) => (base_price * fraction).round(),
            PriceAdjustment::Fixed(dollars) => *dollars,
        }
    }
}

impl<'de> Deserialize<'de> for PriceAdjustment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(tag = "kind", content = "value", rename_all = "lowercase")]
        enum Tagged {
            Percentage(f64),
            Fixed(f64),
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Legacy(f64),
            Tagged(Tagged),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Legacy(value) => Ok(PriceAdjustment::from_legacy(value)),
            Repr::Tagged(Tagged::Percentage(fraction)) => Ok(PriceAdjustment::Percentage(fraction)),
            Repr::Tagged(Tagged::Fixed(dollars)) => Ok(PriceAdjustment::Fixed(dollars)),
        }
    }
}

/// Availability class of a finish; premium finishes carry a surcharge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FinishAvailability {
    Standard,
    Premium,
}

/// A finish selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinishOption {
    pub name: String,
    #[serde(rename = "priceModifier")]
    pub adjustment: PriceAdjustment,
    pub availability: FinishAvailability,
}

/// Glass panel styles offered across the door series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlassKind {
    Clear,
    Frosted,
    Tinted,
    Mirror,
}

/// A glass or mirror panel selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlassOption {
    #[serde(rename = "type")]
    pub kind: GlassKind,
    #[serde(rename = "priceModifier")]
    pub price_modifier: f64,
    #[serde(rename = "isTempered")]
    pub tempered: bool,
}

/// A hardware item: track, handles, soft-close, or an add-on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareOption {
    pub name: String,
    #[serde(rename = "priceModifier")]
    pub price: f64,
    #[serde(rename = "isIncluded", default)]
    pub included: bool,
}

/// Door styles priced by the quote builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoorType {
    Sliding,
    Bypass,
    Bifold,
    Barn,
    Pivot,
    Mirror,
}

impl DoorType {
    /// Multiplier applied to the per-square-foot base rate.
    pub fn multiplier(&self) -> f64 {
        match self {
            DoorType::Sliding => 1.0,
            DoorType::Bypass => 1.1,
            DoorType::Bifold => 1.2,
            DoorType::Barn => 1.4,
            DoorType::Pivot => 1.5,
            DoorType::Mirror => 1.3,
        }
    }
}
