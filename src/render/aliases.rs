//! Placeholder alias tables
//!
//! Every attribute name is aliased to `#<attr>` so rendered expressions
//! never collide with the store's reserved words; every value occurrence is
//! aliased to `:<attr>_<n>` with a per-attribute counter. The table is an
//! explicit value threaded through one render pass and returned with the
//! rendered strings.

use std::collections::BTreeMap;

use serde_json::Value;

/// Accumulates name and value aliases for a single rendered request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AliasTable {
    names: BTreeMap<String, String>,
    values: BTreeMap<String, Value>,
    counters: BTreeMap<String, usize>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name placeholder for an attribute; stable across occurrences.
    pub fn name_alias(&mut self, attribute: &str) -> String {
        let placeholder = format!("#{attribute}");
        self.names
            .entry(placeholder.clone())
            .or_insert_with(|| attribute.to_string());
        placeholder
    }

    /// Fresh value placeholder for one (attribute, value) occurrence.
    ///
    /// The same attribute bound twice in one expression (e.g. a `>=` and a
    /// `<=`) receives distinct value placeholders.
    pub fn value_alias(&mut self, attribute: &str, value: Value) -> String {
        let counter = self.counters.entry(attribute.to_string()).or_insert(0);
        let placeholder = format!(":{attribute}_{counter}");
        *counter += 1;
        self.values.insert(placeholder.clone(), value);
        placeholder
    }

    /// Placeholder → raw attribute name
    pub fn names(&self) -> &BTreeMap<String, String> {
        &self.names
    }

    /// Placeholder → bound value
    pub fn values(&self) -> &BTreeMap<String, Value> {
        &self.values
    }
}
