//! Post-query execution support for keyplan
//!
//! The planner and renderer decide what the store runs; this module handles
//! what comes back: local re-evaluation of operators the wire filter only
//! approximates, and order-preserving deduplication of items reachable
//! through multiple OR-branch queries.

mod errors;
mod filters;
mod result;

pub use errors::{EvalError, EvalResult};
pub use filters::{evaluate, filter_items, matches};
pub use result::ResultAccumulator;
