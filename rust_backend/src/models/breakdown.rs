//! Output shapes returned to the caller.
//!
//! Everything here is a pure derived value, recomputed on every call and
//! serialized in the caller's camelCase contract.

use serde::{Deserialize, Serialize};

/// Resolved base price for a series and opening size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasePriceQuote {
    pub base_price: f64,
    pub price_per_sq_ft: f64,
    /// Matched tier label, or `custom` for per-square-foot pricing.
    pub tier: String,
}

/// One named hardware charge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareLine {
    pub name: String,
    pub price: f64,
}

/// Hardware total plus the named lines behind it.
///
/// The line list is part of the caller contract (it renders in the cart),
/// not a diagnostic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareTotal {
    pub total: f64,
    pub breakdown: Vec<HardwareLine>,
}

/// A single applied surcharge with its customer-facing explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surcharge {
    pub name: String,
    pub amount: f64,
    pub reason: String,
}

/// Component totals behind a price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub base: f64,
    pub finish: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glass: Option<f64>,
    pub hardware: f64,
    pub surcharges: Vec<Surcharge>,
}

/// Full pricing result for a configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub total_price: f64,
    pub breakdown: CostBreakdown,
    pub display_price: String,
    #[serde(
        rename = "savingsFromMSRP",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub savings_from_msrp: Option<f64>,
}

/// Entry-level price advertised for a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FromPrice {
    pub from_price: f64,
    pub display_text: String,
    pub includes: Vec<String>,
}

/// Volume discount for a multi-door order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeDiscount {
    pub discount_percentage: f64,
    pub discount_amount: f64,
    pub final_price: f64,
}

/// Amortized financing terms for a total price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancingQuote {
    pub monthly_payment: f64,
    pub total_interest: f64,
    pub total_paid: f64,
    #[serde(rename = "effectiveAPR")]
    pub effective_apr: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakdown_serializes_in_caller_contract() {
        let breakdown = PriceBreakdown {
            total_price: 1354.0,
            breakdown: CostBreakdown {
                base: 449.0,
                finish: 22.0,
                glass: Some(563.0),
                hardware: 120.0,
                surcharges: vec![Surcharge {
                    name: "Premium Finish".to_string(),
                    amount: 125.0,
                    reason: "Premium finishes require additional processing".to_string(),
                }],
            },
            display_price: "$1,354".to_string(),
            savings_from_msrp: Some(339.0),
        };

        let json = serde_json::to_string(&breakdown).unwrap();
        assert!(json.contains("\"totalPrice\":1354.0"));
        assert!(json.contains("\"displayPrice\":\"$1,354\""));
        assert!(json.contains("\"savingsFromMSRP\":339.0"));
    }

    #[test]
    fn zero_glass_is_omitted_from_output() {
        let breakdown = CostBreakdown {
            base: 449.0,
            finish: 0.0,
            glass: None,
            hardware: 0.0,
            surcharges: Vec::new(),
        };
        let json = serde_json::to_string(&breakdown).unwrap();
        assert!(!json.contains("glass"));
    }
}
