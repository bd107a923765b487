//! Filter operators
//!
//! Closed operator set with exhaustive matching everywhere: adding a variant
//! forces every consumer (negation, rendering, local evaluation) to handle
//! it. Every operator knows its negation, and negation is an involution.

use serde::{Deserialize, Serialize};

/// Atomic predicate operators.
///
/// Unary operators (`Exists`, `NotExists`) take no value; all others compare
/// an attribute against a single operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Exists,
    NotExists,
    Eq,
    Ne,
    Contains,
    NotContains,
    StartsWith,
    NotStartsWith,
    EndsWith,
    NotEndsWith,
    Gt,
    Ge,
    Lt,
    Le,
}

/// Operators usable as a single sort-key range condition.
///
/// `Ne` is deliberately absent: the planner splits it into `Lt` + `Gt`.
pub const SORT_COMPATIBLE: [Operator; 6] = [
    Operator::Eq,
    Operator::Gt,
    Operator::Ge,
    Operator::Lt,
    Operator::Le,
    Operator::StartsWith,
];

impl Operator {
    /// The logical negation of this operator.
    ///
    /// Involution: `op.negate().negate() == op` for every variant. Ordering
    /// operators negate to their complements (`Gt` ↔ `Le`, `Ge` ↔ `Lt`).
    pub fn negate(self) -> Operator {
        match self {
            Operator::Exists => Operator::NotExists,
            Operator::NotExists => Operator::Exists,
            Operator::Eq => Operator::Ne,
            Operator::Ne => Operator::Eq,
            Operator::Contains => Operator::NotContains,
            Operator::NotContains => Operator::Contains,
            Operator::StartsWith => Operator::NotStartsWith,
            Operator::NotStartsWith => Operator::StartsWith,
            Operator::EndsWith => Operator::NotEndsWith,
            Operator::NotEndsWith => Operator::EndsWith,
            Operator::Gt => Operator::Le,
            Operator::Le => Operator::Gt,
            Operator::Ge => Operator::Lt,
            Operator::Lt => Operator::Ge,
        }
    }

    /// True for operators that take no operand value
    pub fn is_unary(self) -> bool {
        matches!(self, Operator::Exists | Operator::NotExists)
    }

    /// True when the store's filter language can only over-approximate this
    /// operator, so matches must be re-checked locally after retrieval.
    pub fn requires_post_query_eval(self) -> bool {
        matches!(self, Operator::EndsWith | Operator::NotEndsWith)
    }

    /// Surface token used by the generic filter input
    pub fn token(self) -> &'static str {
        match self {
            Operator::Exists => "pr",
            Operator::NotExists => "npr",
            Operator::Eq => "eq",
            Operator::Ne => "ne",
            Operator::Contains => "co",
            Operator::NotContains => "nco",
            Operator::StartsWith => "sw",
            Operator::NotStartsWith => "nsw",
            Operator::EndsWith => "ew",
            Operator::NotEndsWith => "new",
            Operator::Gt => "gt",
            Operator::Ge => "ge",
            Operator::Lt => "lt",
            Operator::Le => "le",
        }
    }

    /// Parses a surface token; `None` for unrecognized tokens
    pub fn parse_token(token: &str) -> Option<Operator> {
        match token {
            "pr" => Some(Operator::Exists),
            "npr" => Some(Operator::NotExists),
            "eq" => Some(Operator::Eq),
            "ne" => Some(Operator::Ne),
            "co" => Some(Operator::Contains),
            "nco" => Some(Operator::NotContains),
            "sw" => Some(Operator::StartsWith),
            "nsw" => Some(Operator::NotStartsWith),
            "ew" => Some(Operator::EndsWith),
            "new" => Some(Operator::NotEndsWith),
            "gt" => Some(Operator::Gt),
            "ge" => Some(Operator::Ge),
            "lt" => Some(Operator::Lt),
            "le" => Some(Operator::Le),
            _ => None,
        }
    }

    /// All operator variants, for exhaustive property tests
    pub fn all() -> [Operator; 14] {
        [
            Operator::Exists,
            Operator::NotExists,
            Operator::Eq,
            Operator::Ne,
            Operator::Contains,
            Operator::NotContains,
            Operator::StartsWith,
            Operator::NotStartsWith,
            Operator::EndsWith,
            Operator::NotEndsWith,
            Operator::Gt,
            Operator::Ge,
            Operator::Lt,
            Operator::Le,
        ]
    }
}
