//! Query plan structures
//!
//! A plan is the immutable terminal output of planning: either a bounded set
//! of native Query operations (one per distinct key condition) or a single
//! full-table Scan carrying the whole normal form.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::{AttributeRef, Index};
use crate::expr::{AttributeExpression, DisjunctiveNormalForm, Product};

/// Sort-key condition pushed into a native Query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RangeCondition {
    /// A single directly-usable sort comparison
    Binary(AttributeExpression),
    /// Two-sided bound: `lower <= attribute <= upper`
    Between {
        attribute: AttributeRef,
        lower: Value,
        upper: Value,
    },
}

/// An index plus the predicates the store can evaluate natively for it.
///
/// The partition expression's operator is always `Eq`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyCondition {
    pub index: Index,
    pub partition: AttributeExpression,
    pub range: Option<RangeCondition>,
}

impl KeyCondition {
    pub fn new(
        index: Index,
        partition: AttributeExpression,
        range: Option<RangeCondition>,
    ) -> Self {
        Self {
            index,
            partition,
            range,
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Requested result ordering, validated against the index catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// Attribute name to order by
    pub attribute: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            direction: SortDirection::Desc,
        }
    }
}

/// Terminal output of planning.
///
/// `UsingQueries` preserves first-encounter order: one entry per distinct
/// key condition, each carrying the residual products OR'd into that query's
/// filter. `UsingScan` carries the complete normal form for the store's
/// post-match filter.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryPlan {
    UsingQueries(Vec<(KeyCondition, Vec<Product>)>),
    UsingScan(DisjunctiveNormalForm),
}

impl QueryPlan {
    /// Number of native operations this plan dispatches
    pub fn operation_count(&self) -> usize {
        match self {
            QueryPlan::UsingQueries(entries) => entries.len(),
            QueryPlan::UsingScan(_) => 1,
        }
    }
}
