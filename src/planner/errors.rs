//! Planner error types
//!
//! All planner errors surface at plan-construction time, before any store
//! call. None are retried internally; the caller decides whether to report
//! an unsupported-query error or abort.

use thiserror::Error;

/// Result type for planner operations
pub type PlannerResult<T> = Result<T, PlannerError>;

/// Errors raised while turning a normal form into a query plan
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlannerError {
    /// Planning produced more distinct key conditions than the ceiling
    #[error("Query requires {count} store operations (maximum {max})")]
    QueryRequiresTooManyOperations { count: usize, max: usize },

    /// Sort requested on an attribute no index orders by
    #[error("No index orders by attribute '{0}'")]
    UnknownSortAttribute(String),

    /// Sort requested but the plan cannot produce index order
    #[error("Cannot satisfy sort on attribute '{0}' for this filter")]
    UnsupportedSortAttribute(String),
}
