//! Wire-expression synthesis
//!
//! Lowers key conditions and residual products (or a whole normal form, for
//! scans) into the store's expression syntax with aliased attribute names
//! and values.
//!
//! `EndsWith` has no native form: it renders as an over-approximating
//! `contains` and is re-checked by the post-query filter. `NotEndsWith` is
//! omitted from wire filters entirely, because `NOT contains` would drop
//! true matches the post-filter could never recover; a product whose terms
//! are all omitted therefore renders as an absent (match-all) filter.

use serde_json::Value;

use crate::expr::{AttributeExpression, DisjunctiveNormalForm, Operator, Product};
use crate::planner::{KeyCondition, RangeCondition};

use super::aliases::AliasTable;

/// Rendered native Query request
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedQuery {
    pub key_condition_expression: String,
    pub filter_expression: Option<String>,
    pub aliases: AliasTable,
}

/// Rendered native Scan request
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedScan {
    pub filter_expression: Option<String>,
    pub aliases: AliasTable,
}

/// Renders one key condition plus its residual filter products.
pub fn render_query(key: &KeyCondition, residual: &[Product]) -> RenderedQuery {
    let mut aliases = AliasTable::new();

    let partition = render_comparison(&key.partition, &mut aliases);
    let key_condition_expression = match &key.range {
        None => partition,
        Some(range) => format!("{} AND {}", partition, render_range(range, &mut aliases)),
    };

    let filter_expression = render_products(residual, &mut aliases);
    RenderedQuery {
        key_condition_expression,
        filter_expression,
        aliases,
    }
}

/// Renders a whole normal form as a scan's post-match filter.
pub fn render_scan(dnf: &DisjunctiveNormalForm) -> RenderedScan {
    let mut aliases = AliasTable::new();
    let filter_expression = render_products(dnf.products(), &mut aliases);
    RenderedScan {
        filter_expression,
        aliases,
    }
}

/// OR-joined groups of AND-joined atomic renderings.
///
/// Returns `None` (absent filter) for an empty product list, and also when
/// any product renders to nothing: an all-omitted group is match-all, which
/// makes the whole disjunction match-all.
fn render_products(products: &[Product], aliases: &mut AliasTable) -> Option<String> {
    if products.is_empty() {
        return None;
    }

    let mut groups = Vec::with_capacity(products.len());
    for product in products {
        let rendered: Vec<String> = product
            .terms()
            .iter()
            .filter_map(|term| render_term(term, aliases))
            .collect();
        if rendered.is_empty() {
            return None;
        }
        groups.push(rendered.join(" AND "));
    }

    if groups.len() == 1 {
        Some(groups.remove(0))
    } else {
        Some(
            groups
                .iter()
                .map(|g| format!("({g})"))
                .collect::<Vec<_>>()
                .join(" OR "),
        )
    }
}

/// Renders one atomic predicate; `None` when the term has no wire form.
fn render_term(term: &AttributeExpression, aliases: &mut AliasTable) -> Option<String> {
    let attr = &term.attribute.name;
    match term.operator {
        Operator::Exists => {
            let name = aliases.name_alias(attr);
            Some(format!("attribute_exists({name})"))
        }
        Operator::NotExists => {
            let name = aliases.name_alias(attr);
            Some(format!("attribute_not_exists({name})"))
        }
        Operator::Eq | Operator::Ne | Operator::Gt | Operator::Ge | Operator::Lt | Operator::Le => {
            Some(render_comparison(term, aliases))
        }
        Operator::Contains => Some(render_function("contains", term, aliases, false)),
        Operator::NotContains => Some(render_function("contains", term, aliases, true)),
        Operator::StartsWith => Some(render_function("begins_with", term, aliases, false)),
        Operator::NotStartsWith => Some(render_function("begins_with", term, aliases, true)),
        // Over-approximation, re-checked locally after retrieval.
        Operator::EndsWith => Some(render_function("contains", term, aliases, false)),
        Operator::NotEndsWith => None,
    }
}

fn render_comparison(term: &AttributeExpression, aliases: &mut AliasTable) -> String {
    let symbol = match term.operator {
        Operator::Ne => "<>",
        Operator::Gt => ">",
        Operator::Ge => ">=",
        Operator::Lt => "<",
        Operator::Le => "<=",
        // Partition terms are always forced to equality.
        _ => "=",
    };
    let name = aliases.name_alias(&term.attribute.name);
    let value = aliases.value_alias(&term.attribute.name, operand(term));
    format!("{name} {symbol} {value}")
}

fn render_function(
    function: &str,
    term: &AttributeExpression,
    aliases: &mut AliasTable,
    negated: bool,
) -> String {
    let name = aliases.name_alias(&term.attribute.name);
    let value = aliases.value_alias(&term.attribute.name, operand(term));
    let call = format!("{function}({name}, {value})");
    if negated {
        format!("NOT ({call})")
    } else {
        call
    }
}

fn render_range(range: &RangeCondition, aliases: &mut AliasTable) -> String {
    match range {
        RangeCondition::Binary(term) if term.operator == Operator::StartsWith => {
            render_function("begins_with", term, aliases, false)
        }
        RangeCondition::Binary(term) => render_comparison(term, aliases),
        RangeCondition::Between {
            attribute,
            lower,
            upper,
        } => {
            let name = aliases.name_alias(&attribute.name);
            let lo = aliases.value_alias(&attribute.name, lower.clone());
            let hi = aliases.value_alias(&attribute.name, upper.clone());
            format!("{name} BETWEEN {lo} AND {hi}")
        }
    }
}

fn operand(term: &AttributeExpression) -> Value {
    term.value.clone().unwrap_or(Value::Null)
}
