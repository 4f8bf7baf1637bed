//! Error types for pricing operations.

/// Result type for pricing operations
pub type PricingResult<T> = Result<T, PricingError>;

/// Error type for pricing operations
#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),

    #[error("Unknown series: {0}")]
    UnknownSeries(String),

    #[error("Invalid financing terms: {0}")]
    InvalidFinancingTerms(String),

    #[error("Catalog error: {0}")]
    CatalogError(String),
}
