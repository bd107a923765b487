//! Query planner subsystem for keyplan
//!
//! Consumes a disjunctive normal form and an index catalog; produces an
//! immutable plan: either one native Query per distinct key condition or a
//! single full-table Scan.
//!
//! # Guarantees
//!
//! - Deterministic: same inputs → structurally equal plan
//! - Bounded: at most `MAX_QUERIES` store operations per plan
//! - Fail-fast: every error surfaces before any store call

mod errors;
mod plan;
mod planner;

pub use errors::{PlannerError, PlannerResult};
pub use plan::{KeyCondition, QueryPlan, RangeCondition, SortDirection, SortSpec};
pub use planner::{plan, MAX_QUERIES};
