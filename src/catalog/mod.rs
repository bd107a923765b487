//! Table catalogs for keyplan
//!
//! Attribute and index descriptions are built once at table-definition time
//! and are read-only for the life of the process. Everything the planner
//! knows about a table flows through these catalogs.

mod attributes;
mod errors;
mod indexes;

pub use attributes::{AttributeCatalog, AttributeRef, AttributeType};
pub use errors::{CatalogError, CatalogResult};
pub use indexes::{Index, IndexCatalog, TableSchema};
