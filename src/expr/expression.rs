//! Filter expression tree
//!
//! Atomic predicates combined with AND/OR/NOT. Negation is structural: it is
//! pushed down to atomic operators via De Morgan's laws, so the normalizer
//! never has to reason about `Not` nodes below the surface.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::AttributeRef;

use super::operator::Operator;

/// An atomic predicate: attribute, operator, optional operand.
///
/// Unary operators carry no value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeExpression {
    pub attribute: AttributeRef,
    pub operator: Operator,
    pub value: Option<Value>,
}

impl AttributeExpression {
    pub fn binary(attribute: AttributeRef, operator: Operator, value: Value) -> Self {
        Self {
            attribute,
            operator,
            value: Some(value),
        }
    }

    pub fn unary(attribute: AttributeRef, operator: Operator) -> Self {
        Self {
            attribute,
            operator,
            value: None,
        }
    }

    /// Same predicate with the operator negated
    pub fn negate(&self) -> Self {
        Self {
            attribute: self.attribute.clone(),
            operator: self.operator.negate(),
            value: self.value.clone(),
        }
    }
}

/// AND / OR combinator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicalOp {
    And,
    Or,
}

/// A boolean filter over atomic predicates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    Attribute(AttributeExpression),
    Logical {
        left: Box<Expression>,
        op: LogicalOp,
        right: Box<Expression>,
    },
    Negation(Box<Expression>),
}

impl Expression {
    pub fn attribute(expr: AttributeExpression) -> Self {
        Expression::Attribute(expr)
    }

    /// `left AND right`
    pub fn and(left: Expression, right: Expression) -> Self {
        Expression::Logical {
            left: Box::new(left),
            op: LogicalOp::And,
            right: Box::new(right),
        }
    }

    /// `left OR right`
    pub fn or(left: Expression, right: Expression) -> Self {
        Expression::Logical {
            left: Box::new(left),
            op: LogicalOp::Or,
            right: Box::new(right),
        }
    }

    /// `NOT inner`
    #[allow(clippy::should_implement_trait)]
    pub fn not(inner: Expression) -> Self {
        Expression::Negation(Box::new(inner))
    }

    /// Structural negation.
    ///
    /// Atomic terms flip their operator; AND/OR obey De Morgan; double
    /// negation cancels. The result never gains `Negation` nodes that were
    /// not already present below a cancelled pair.
    pub fn negate(&self) -> Expression {
        match self {
            Expression::Attribute(attr) => Expression::Attribute(attr.negate()),
            Expression::Logical { left, op, right } => {
                let flipped = match op {
                    LogicalOp::And => LogicalOp::Or,
                    LogicalOp::Or => LogicalOp::And,
                };
                Expression::Logical {
                    left: Box::new(left.negate()),
                    op: flipped,
                    right: Box::new(right.negate()),
                }
            }
            Expression::Negation(inner) => (**inner).clone(),
        }
    }
}
