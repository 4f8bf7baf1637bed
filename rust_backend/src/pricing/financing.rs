//! Amortized financing math and promotional term plans.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{PricingError, PricingResult};
use crate::models::FinancingQuote;

/// Default financing term offered at checkout.
pub const DEFAULT_TERM_MONTHS: u32 = 12;

/// Default APR for the standalone financing calculator.
pub const DEFAULT_APR: f64 = 0.0999;

/// Promotional APR by term: 0% for 6 and 12 months, then tiered up.
pub const PLAN_RATES: [(u32, f64); 4] = [(6, 0.0), (12, 0.0), (24, 0.089), (36, 0.119)];

/// APR charged for terms outside the promotional table.
pub const FALLBACK_PLAN_APR: f64 = 0.119;

/// One promotional financing plan for a financed amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancingPlan {
    pub term_months: u32,
    pub apr: f64,
    pub financed_amount: f64,
    pub monthly_payment: f64,
    pub total_interest: f64,
    pub total_paid: f64,
    pub first_payment_due: NaiveDate,
}

/// Amortized financing quote for a total price.
///
/// Uses the standard amortization formula `M = P·r(1+r)^n / ((1+r)^n − 1)`
/// with monthly compounding. Zero-interest terms divide the principal
/// evenly. Monetary outputs round to cents.
pub fn financing(total_price: f64, term_months: u32, apr: f64) -> PricingResult<FinancingQuote> {
    if term_months == 0 {
        return Err(PricingError::InvalidFinancingTerms(
            "term must be at least one month".to_string(),
        ));
    }
    if !(apr.is_finite() && apr >= 0.0) {
        return Err(PricingError::InvalidFinancingTerms(format!(
            "APR must be non-negative, got {}",
            apr
        )));
    }

    let monthly_payment = monthly_payment(total_price, apr, term_months);
    let total_paid = monthly_payment * term_months as f64;
    let total_interest = total_paid - total_price;

    Ok(FinancingQuote {
        monthly_payment: round_cents(monthly_payment),
        total_interest: round_cents(total_interest),
        total_paid: round_cents(total_paid),
        effective_apr: apr,
    })
}

/// Promotional APR for a term, falling back to the highest rate for terms
/// outside the table.
pub fn plan_for_term(term_months: u32) -> f64 {
    PLAN_RATES
        .iter()
        .find(|(term, _)| *term == term_months)
        .map(|(_, apr)| *apr)
        .unwrap_or(FALLBACK_PLAN_APR)
}

/// All promotional plans for a project total.
///
/// The down payment reduces the financed amount; a down payment covering
/// the full cost yields an empty plan list (nothing to finance). First
/// payment is due 30 days after the issue date.
pub fn plan_options(
    total_price: f64,
    down_payment: f64,
    issued_on: NaiveDate,
) -> PricingResult<Vec<FinancingPlan>> {
    if total_price <= 0.0 {
        return Err(PricingError::InvalidFinancingTerms(format!(
            "total must be positive, got {}",
            total_price
        )));
    }
    if down_payment < 0.0 {
        return Err(PricingError::InvalidFinancingTerms(format!(
            "down payment must be non-negative, got {}",
            down_payment
        )));
    }

    let financed = total_price - down_payment;
    if financed <= 0.0 {
        return Ok(Vec::new());
    }

    let first_payment_due = issued_on + Duration::days(30);
    let plans = PLAN_RATES
        .iter()
        .map(|&(term_months, apr)| {
            let payment = monthly_payment(financed, apr, term_months);
            let total_paid = payment * term_months as f64;
            FinancingPlan {
                term_months,
                apr,
                financed_amount: round_cents(financed),
                monthly_payment: round_cents(payment),
                total_interest: round_cents(total_paid - financed),
                total_paid: round_cents(total_paid),
                first_payment_due,
            }
        })
        .collect();

    Ok(plans)
}

fn monthly_payment(principal: f64, apr: f64, term_months: u32) -> f64 {
    let n = term_months as f64;
    if apr == 0.0 {
        return principal / n;
    }
    let r = apr / 12.0;
    principal * (r * (1.0 + r).powf(n)) / ((1.0 + r).powf(n) - 1.0)
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn default_terms_amortize_correctly() {
        let quote = financing(1200.0, DEFAULT_TERM_MONTHS, DEFAULT_APR).unwrap();
        // Standard amortization at 9.99% over 12 months
        assert!((quote.monthly_payment - 105.49).abs() < 0.01);
        assert_eq!(quote.effective_apr, DEFAULT_APR);
        assert_eq!(
            quote.total_paid,
            round_cents(quote.monthly_payment * 12.0)
        );
    }

    #[test]
    fn zero_interest_divides_evenly() {
        let quote = financing(1200.0, 12, 0.0).unwrap();
        assert_eq!(quote.monthly_payment, 100.0);
        assert_eq!(quote.total_interest, 0.0);
        assert_eq!(quote.total_paid, 1200.0);
        assert!(quote.monthly_payment.is_finite());
    }

    #[test]
    fn zero_term_is_rejected() {
        let err = financing(1200.0, 0, 0.0999).unwrap_err();
        assert!(matches!(err, PricingError::InvalidFinancingTerms(_)));
    }

    #[test]
    fn negative_apr_is_rejected() {
        assert!(financing(1200.0, 12, -0.05).is_err());
        assert!(financing(1200.0, 12, f64::NAN).is_err());
    }

    #[test]
    fn interest_grows_with_term_length() {
        let short = financing(5000.0, 12, 0.0999).unwrap();
        let long = financing(5000.0, 36, 0.0999).unwrap();
        assert!(long.total_interest > short.total_interest);
        assert!(long.monthly_payment < short.monthly_payment);
    }

    #[test]
    fn plan_rates_follow_the_promotional_table() {
        assert_eq!(plan_for_term(6), 0.0);
        assert_eq!(plan_for_term(12), 0.0);
        assert_eq!(plan_for_term(24), 0.089);
        assert_eq!(plan_for_term(36), 0.119);
        assert_eq!(plan_for_term(48), FALLBACK_PLAN_APR);
    }

    #[test]
    fn plan_options_cover_every_promotional_term() {
        let plans = plan_options(2400.0, 0.0, date(2026, 3, 1)).unwrap();
        assert_eq!(plans.len(), 4);
        assert_eq!(plans[0].term_months, 6);
        assert_eq!(plans[0].monthly_payment, 400.0);
        assert_eq!(plans[1].term_months, 12);
        assert_eq!(plans[1].monthly_payment, 200.0);
        assert!(plans[2].total_interest > 0.0);
        assert_eq!(plans[0].first_payment_due, date(2026, 3, 31));
    }

    #[test]
    fn down_payment_reduces_the_financed_amount() {
        let plans = plan_options(2400.0, 1200.0, date(2026, 3, 1)).unwrap();
        assert_eq!(plans[0].financed_amount, 1200.0);
        assert_eq!(plans[0].monthly_payment, 200.0);
    }

    #[test]
    fn full_down_payment_needs_no_financing() {
        let plans = plan_options(2400.0, 2400.0, date(2026, 3, 1)).unwrap();
        assert!(plans.is_empty());

        let plans = plan_options(2400.0, 3000.0, date(2026, 3, 1)).unwrap();
        assert!(plans.is_empty());
    }

    #[test]
    fn invalid_plan_inputs_are_rejected() {
        assert!(plan_options(0.0, 0.0, date(2026, 3, 1)).is_err());
        assert!(plan_options(-100.0, 0.0, date(2026, 3, 1)).is_err());
        assert!(plan_options(2400.0, -1.0, date(2026, 3, 1)).is_err());
    }
}
