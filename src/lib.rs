//! keyplan - a strict, deterministic query planner for composite-key stores
//!
//! Translates a generic boolean filter (attribute, operator, value under
//! AND/OR/NOT) into the minimal set of native operations for a store whose
//! only query primitives are primary-key lookup, single-partition range
//! query, and full-table scan.
//!
//! Pipeline: catalog-checked expression → disjunctive normal form → index
//! matching → wire expression rendering → post-query re-filter.

pub mod catalog;
pub mod executor;
pub mod expr;
pub mod planner;
pub mod render;
