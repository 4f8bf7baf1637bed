//! Installation and delivery estimates.

use serde::{Deserialize, Serialize};

use crate::error::{PricingError, PricingResult};
use crate::models::SQ_IN_PER_SQ_FT;

/// Measured area above which installation carries the large-area surcharge.
pub const LARGE_AREA_SQ_FT: f64 = 50.0;

/// Surcharge for installations over [`LARGE_AREA_SQ_FT`].
pub const LARGE_AREA_SURCHARGE: f64 = 100.0;

/// Fraction added for rush orders, on goods plus installation.
pub const RUSH_RATE: f64 = 0.20;

/// Ontario HST applied to the pre-tax total.
pub const HST_RATE: f64 = super::builder::HST_RATE;

/// Product categories the installation crew prices separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InstallationCategory {
    BarnDoors,
    BifoldDoors,
    BypassDoors,
    PivotDoors,
    RoomDividers,
    ClosetSystems,
    Hardware,
    Mirrors,
}

impl InstallationCategory {
    /// Base installation rate per unit, in dollars.
    pub fn base_rate(&self) -> f64 {
        match self {
            InstallationCategory::BarnDoors => 150.0,
            InstallationCategory::BifoldDoors => 100.0,
            InstallationCategory::BypassDoors => 125.0,
            InstallationCategory::PivotDoors => 175.0,
            InstallationCategory::RoomDividers => 200.0,
            InstallationCategory::ClosetSystems => 300.0,
            InstallationCategory::Hardware => 50.0,
            InstallationCategory::Mirrors => 75.0,
        }
    }
}

/// Delivery zones served by the installation crew.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceArea {
    Ottawa,
    Kanata,
    Barrhaven,
    Nepean,
    Orleans,
}

impl ServiceArea {
    /// Flat travel fee for the zone, in dollars.
    pub fn travel_fee(&self) -> f64 {
        match self {
            ServiceArea::Ottawa => 0.0,
            ServiceArea::Kanata => 25.0,
            ServiceArea::Barrhaven => 25.0,
            ServiceArea::Nepean => 20.0,
            ServiceArea::Orleans => 30.0,
        }
    }
}

/// An installation job to estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallationJob {
    pub category: InstallationCategory,
    pub quantity: u32,
    /// Goods subtotal the installation accompanies.
    pub goods_subtotal: f64,
    pub service_area: ServiceArea,
    /// Measured opening in inches, when the space has been measured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measured_inches: Option<(f64, f64)>,
    #[serde(default)]
    pub rush: bool,
}

/// Itemized installation estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallationEstimate {
    pub installation: f64,
    pub travel_fee: f64,
    pub rush_surcharge: f64,
    pub subtotal_before_tax: f64,
    pub tax: f64,
    pub total: f64,
    pub estimated_delivery: String,
}

/// Estimate installation cost, taxes, and the delivery window for a job.
///
/// Rate × quantity, plus the zone travel fee, plus the large-area
/// surcharge when the measured space exceeds [`LARGE_AREA_SQ_FT`]. Rush
/// orders add 20% of goods plus installation and shorten the delivery
/// window.
pub fn estimate_installation(job: &InstallationJob) -> PricingResult<InstallationEstimate> {
    if job.quantity == 0 {
        return Err(PricingError::InvalidDimensions(
            "installation quantity must be at least one".to_string(),
        ));
    }
    if let Some((width, height)) = job.measured_inches {
        if width <= 0.0 || height <= 0.0 {
            return Err(PricingError::InvalidDimensions(format!(
                "measured space {} x {} cannot describe an opening",
                width, height
            )));
        }
    }

    let mut installation = job.category.base_rate() * job.quantity as f64;

    let travel_fee = job.service_area.travel_fee();
    installation += travel_fee;

    if let Some((width, height)) = job.measured_inches {
        if width * height / SQ_IN_PER_SQ_FT > LARGE_AREA_SQ_FT {
            installation += LARGE_AREA_SURCHARGE;
        }
    }

    let rush_surcharge = if job.rush {
        round_cents((job.goods_subtotal + installation) * RUSH_RATE)
    } else {
        0.0
    };

    let subtotal_before_tax = round_cents(job.goods_subtotal + installation + rush_surcharge);
    let tax = round_cents(subtotal_before_tax * HST_RATE);
    let total = round_cents(subtotal_before_tax + tax);

    let estimated_delivery = if job.rush {
        "5-7 business days"
    } else {
        "10-14 business days"
    };

    Ok(InstallationEstimate {
        installation,
        travel_fee,
        rush_surcharge,
        subtotal_before_tax,
        tax,
        total,
        estimated_delivery: estimated_delivery.to_string(),
    })
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
