//! Executor error types

use serde_json::Value;
use thiserror::Error;

use crate::expr::Operator;

/// Result type for local predicate evaluation
pub type EvalResult<T> = Result<T, EvalError>;

/// Errors raised during post-query re-filtering.
///
/// Unlike planner and catalog errors, these can only surface after the
/// store has returned candidate items.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EvalError {
    /// Local comparison attempted between incomparable runtime types
    #[error("Cannot evaluate {operator:?} between {left} and {right}")]
    InvalidOperandTypes {
        operator: Operator,
        left: Value,
        right: Value,
    },
}
