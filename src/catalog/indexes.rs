//! Index catalog
//!
//! Describes the queryable indexes of a table: each index has exactly one
//! partition attribute and at most one sort attribute. The planner consults
//! indexes in declaration order.

use serde::{Deserialize, Serialize};

use super::attributes::{AttributeCatalog, AttributeRef};

/// A queryable composite-key index.
///
/// `name == None` denotes the table's primary index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Index {
    /// Store-level index name; `None` for the primary index
    pub name: Option<String>,
    /// Partition attribute (equality lookup only)
    pub partition: AttributeRef,
    /// Optional sort attribute (range comparisons within a partition)
    pub sort: Option<AttributeRef>,
}

impl Index {
    /// The table's primary index
    pub fn primary(partition: AttributeRef, sort: Option<AttributeRef>) -> Self {
        Self {
            name: None,
            partition,
            sort,
        }
    }

    /// A named secondary index
    pub fn secondary(
        name: impl Into<String>,
        partition: AttributeRef,
        sort: Option<AttributeRef>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            partition,
            sort,
        }
    }
}

/// Ordered list of a table's indexes
#[derive(Debug, Clone, Default)]
pub struct IndexCatalog {
    indexes: Vec<Index>,
}

impl IndexCatalog {
    pub fn new(indexes: Vec<Index>) -> Self {
        Self { indexes }
    }

    /// Indexes in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &Index> {
        self.indexes.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.indexes.is_empty()
    }

    /// Whether any index orders items by the given attribute name
    pub fn has_sort_attribute(&self, name: &str) -> bool {
        self.indexes
            .iter()
            .any(|ix| ix.sort.as_ref().is_some_and(|s| s.name == name))
    }
}

/// A table definition: attribute catalog, index catalog, and the primary-key
/// attribute used to deduplicate results across OR-branch queries.
#[derive(Debug, Clone)]
pub struct TableSchema {
    pub attributes: AttributeCatalog,
    pub indexes: IndexCatalog,
    /// Name of the attribute whose value uniquely identifies an item
    pub key_attribute: String,
}

impl TableSchema {
    pub fn new(
        attributes: AttributeCatalog,
        indexes: IndexCatalog,
        key_attribute: impl Into<String>,
    ) -> Self {
        Self {
            attributes,
            indexes,
            key_attribute: key_attribute.into(),
        }
    }
}
