//! Series catalog: tier tables, built-in data, config loading, validation.

pub mod config;
pub mod data;
pub mod series;
pub mod validator;

pub use data::{builtin, DEFAULT_SERIES_ID};
pub use series::{Catalog, Series, SizeTier};
pub use validator::{CatalogReport, CatalogStats, CatalogValidator};
