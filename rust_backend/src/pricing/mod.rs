//! Pricing calculators: base price resolution, modifiers, surcharges,
//! totals, discounts, and financing.

pub mod base_price;
pub mod discounts;
pub mod financing;
pub mod hardware;
pub mod modifiers;
pub mod surcharges;
pub mod total;
pub mod validation;

pub use base_price::{from_price, resolve_base_price, resolve_base_price_or_default};
pub use discounts::volume_discount;
pub use financing::{financing, plan_for_term, plan_options, FinancingPlan};
pub use hardware::hardware_price;
pub use modifiers::{finish_modifier, glass_surcharge};
pub use surcharges::{surcharges, STANDARD_SIZES};
pub use total::{calculate_total_price, calculate_total_price_with_policy, MsrpPolicy};
pub use validation::{review_configuration, ConfigurationReview};
