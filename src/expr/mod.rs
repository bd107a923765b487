//! Expression model for keyplan
//!
//! Atomic predicates (attribute, operator, optional value) combined with
//! AND/OR/NOT, plus the rewrite into disjunctive normal form the planner
//! consumes. Everything here is a pure function over immutable values.

mod expression;
mod normal_form;
mod operator;

pub use expression::{AttributeExpression, Expression, LogicalOp};
pub use normal_form::{normalize, DisjunctiveNormalForm, Product};
pub use operator::{Operator, SORT_COMPATIBLE};
