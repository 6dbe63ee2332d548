//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// A record carried a category outside the dimension's label set.
    /// Always an upstream data-quality problem; never coerced.
    #[error("Unknown category {category:?} for dimension {dimension:?}")]
    UnknownCategory { dimension: String, category: String },

    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    #[error("Record source error: {0}")]
    Source(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
