//! Attribute catalog
//!
//! Maps logical filter field names to typed attribute descriptors and
//! validates operand values against the declared wire type. Catalogs are
//! built once at table-definition time and are read-only afterwards.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::{CatalogError, CatalogResult};
use crate::expr::{AttributeExpression, Operator};

/// Declared wire type of a queryable attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeType {
    String,
    Number,
    Boolean,
}

impl AttributeType {
    /// Checks whether a runtime value is compatible with this type
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            AttributeType::String => value.is_string(),
            AttributeType::Number => value.is_number(),
            AttributeType::Boolean => value.is_boolean(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeType::String => "string",
            AttributeType::Number => "number",
            AttributeType::Boolean => "boolean",
        }
    }
}

/// Identity of a queryable field: logical name plus declared type.
///
/// Equality and hashing cover both fields, so the same name declared with
/// two different types never unifies across a product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeRef {
    /// Logical field name as it appears in filters
    pub name: String,
    /// Declared wire type
    pub attr_type: AttributeType,
}

impl AttributeRef {
    pub fn new(name: impl Into<String>, attr_type: AttributeType) -> Self {
        Self {
            name: name.into(),
            attr_type,
        }
    }

    /// String-typed attribute
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, AttributeType::String)
    }

    /// Number-typed attribute
    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, AttributeType::Number)
    }

    /// Boolean-typed attribute
    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, AttributeType::Boolean)
    }
}

/// Read-only map from logical field name to attribute descriptor.
///
/// Also carries the operator set this table supports, so deployments can
/// disable operators (e.g. `EndsWith`) wholesale.
#[derive(Debug, Clone)]
pub struct AttributeCatalog {
    attributes: BTreeMap<String, AttributeRef>,
    disabled_operators: Vec<Operator>,
}

impl AttributeCatalog {
    /// Creates an empty catalog with every operator enabled
    pub fn new() -> Self {
        Self {
            attributes: BTreeMap::new(),
            disabled_operators: Vec::new(),
        }
    }

    /// Adds an attribute declaration
    pub fn with_attribute(mut self, attr: AttributeRef) -> Self {
        self.attributes.insert(attr.name.clone(), attr);
        self
    }

    /// Disables an operator for this table
    pub fn without_operator(mut self, op: Operator) -> Self {
        if !self.disabled_operators.contains(&op) {
            self.disabled_operators.push(op);
        }
        self
    }

    /// Looks up an attribute by logical name
    pub fn resolve(&self, name: &str) -> CatalogResult<&AttributeRef> {
        self.attributes
            .get(name)
            .ok_or_else(|| CatalogError::UnknownAttribute(name.to_string()))
    }

    /// Whether an operator is enabled for this table
    pub fn supports(&self, op: Operator) -> bool {
        !self.disabled_operators.contains(&op)
    }

    /// Builds a type-checked atomic predicate from raw filter input.
    ///
    /// The operator arrives as its surface token (e.g. `"eq"`, `"sw"`,
    /// `"pr"`); the value is absent for unary operators.
    pub fn expression(
        &self,
        name: &str,
        op_token: &str,
        value: Option<Value>,
    ) -> CatalogResult<AttributeExpression> {
        let attribute = self.resolve(name)?.clone();
        let operator = Operator::parse_token(op_token)
            .ok_or_else(|| CatalogError::UnsupportedOperator(op_token.to_string()))?;
        if !self.supports(operator) {
            return Err(CatalogError::UnsupportedOperator(op_token.to_string()));
        }

        match (operator.is_unary(), &value) {
            (true, Some(_)) => {
                return Err(CatalogError::UnsupportedFilterType(format!(
                    "unary operator '{}' does not take a value",
                    operator.token()
                )));
            }
            (false, None) => {
                return Err(CatalogError::UnsupportedFilterType(format!(
                    "binary operator '{}' requires a value",
                    operator.token()
                )));
            }
            _ => {}
        }

        if let Some(v) = &value {
            if !attribute.attr_type.accepts(v) {
                return Err(CatalogError::InvalidValue {
                    attribute: attribute.name.clone(),
                    value: v.clone(),
                });
            }
        }

        Ok(AttributeExpression {
            attribute,
            operator,
            value,
        })
    }
}

impl Default for AttributeCatalog {
    fn default() -> Self {
        Self::new()
    }
}
