//! Catalog error types
//!
//! All catalog errors are raised while a filter is being resolved against a
//! table definition, before any store call is issued.

use thiserror::Error;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors raised while resolving a filter against a table's catalogs
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// Filter references a field absent from the attribute catalog
    #[error("Unknown attribute '{0}'")]
    UnknownAttribute(String),

    /// Value's runtime type does not match the attribute's declared type
    #[error("Invalid value {value} for attribute '{attribute}'")]
    InvalidValue {
        attribute: String,
        value: serde_json::Value,
    },

    /// Operator token not recognized, or disabled for this table
    #[error("Unsupported operator '{0}'")]
    UnsupportedOperator(String),

    /// Structurally malformed filter term (e.g. unary operator with a value)
    #[error("Unsupported filter: {0}")]
    UnsupportedFilterType(String),
}
