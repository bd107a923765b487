//! Result accumulation
//!
//! Multi-query plans can reach the same item through more than one OR-branch
//! key condition. The accumulator preserves arrival order and deduplicates
//! by the table's primary-key attribute so no item is returned twice.

use std::collections::HashSet;

use serde_json::Value;

/// Order-preserving, deduplicating collector for store-returned items.
#[derive(Debug, Clone)]
pub struct ResultAccumulator {
    key_attribute: String,
    seen: HashSet<String>,
    items: Vec<Value>,
}

impl ResultAccumulator {
    pub fn new(key_attribute: impl Into<String>) -> Self {
        Self {
            key_attribute: key_attribute.into(),
            seen: HashSet::new(),
            items: Vec::new(),
        }
    }

    /// Adds an item unless its primary-key value was already seen.
    ///
    /// Items without the key attribute cannot be identified and are kept
    /// unconditionally. Returns whether the item was added.
    pub fn push(&mut self, item: Value) -> bool {
        match item.get(&self.key_attribute) {
            Some(key) => {
                let fingerprint = key.to_string();
                if !self.seen.insert(fingerprint) {
                    return false;
                }
                self.items.push(item);
                true
            }
            None => {
                self.items.push(item);
                true
            }
        }
    }

    /// Adds a whole page of items
    pub fn extend(&mut self, items: impl IntoIterator<Item = Value>) {
        for item in items {
            self.push(item);
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Accumulated items in arrival order
    pub fn into_items(self) -> Vec<Value> {
        self.items
    }
}
