//! Customer-facing price formatting.
//!
//! All helpers format whole-dollar figures with en-US thousands grouping;
//! the caller's UI owns any styling around them.

use serde::{Deserialize, Serialize};

/// Format a dollar amount as `$N,NNN` with no decimals.
pub fn format_price(price: f64) -> String {
    format!("${}", group_thousands(price.round() as i64))
}

/// Format a price range as `$A - $B`.
pub fn format_range(min: f64, max: f64) -> String {
    format!("{} - {}", format_price(min), format_price(max))
}

/// A price with its struck-through MSRP, for savings display.
///
/// Returned as data rather than markup so each surface (web, email, PDF)
/// styles the strike-through itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceWithSavings {
    pub price: String,
    /// Present only when there are savings to show.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compare_at: Option<String>,
}

/// Pair a price with its synthetic MSRP when savings exist.
pub fn format_with_savings(price: f64, savings: Option<f64>) -> PriceWithSavings {
    PriceWithSavings {
        price: format_price(price),
        compare_at: savings.map(|s| format_price(price + s)),
    }
}

/// Format a per-square-foot rate as `$X.XX/sq ft`.
pub fn format_per_sqft(price_per_sq_ft: f64) -> String {
    format!("${:.2}/sq ft", price_per_sq_ft)
}

/// Format a monthly payment as `$X.XX/mo`.
pub fn format_monthly(monthly_payment: f64) -> String {
    format!("${:.2}/mo", monthly_payment)
}

fn group_thousands(value: i64) -> String {
    let negative = value < 0;
    let digits = value.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
