//! Dimension-aware pricing and quoting core for a closet-door retailer.
//!
//! Maps a door configuration (series, dimensions, finish, glass, hardware)
//! to a priced breakdown through tiered lookup tables, per-square-foot
//! extrapolation for non-standard sizes, surcharge rules, volume discounts,
//! and amortized financing. Also builds multi-room project quotes and
//! installation estimates for the quote wizard.
//!
//! Every calculator is a pure, synchronous function over its inputs and
//! the read-only catalog; callers may invoke them from any thread without
//! coordination.
//!
//! ```
//! use doorquote_rust::catalog::builtin;
//! use doorquote_rust::models::{OpeningDimensions, ProductConfiguration};
//! use doorquote_rust::pricing::calculate_total_price;
//!
//! let config = ProductConfiguration::from_json(r#"{
//!     "seriesId": "continental",
//!     "dimensions": {"width": 60, "height": 80, "unit": "in"},
//!     "finish": {"name": "White", "priceModifier": 0, "availability": "standard"},
//!     "trackType": {"name": "Standard Track", "priceModifier": 0, "isIncluded": true}
//! }"#).unwrap();
//!
//! let price = calculate_total_price(builtin(), &config).unwrap();
//! assert_eq!(price.display_price, "$449");
//! ```

pub mod catalog;
pub mod display;
pub mod error;
pub mod models;
pub mod pricing;
pub mod quote;

pub use error::{PricingError, PricingResult};
