//! Wire-expression renderer for keyplan
//!
//! Turns key conditions and residual filter products into the store's
//! expression strings, with every attribute name and value behind a safe
//! placeholder alias.

mod aliases;
mod expression;

pub use aliases::AliasTable;
pub use expression::{render_query, render_scan, RenderedQuery, RenderedScan};
