//! Post-query re-filtering
//!
//! Re-evaluates, in process, predicates the wire filter language can only
//! approximate, discarding false positives from store-returned candidates.
//! Evaluation is strict: no type coercion, missing attributes fail every
//! binary test.

use serde_json::Value;

use crate::expr::{AttributeExpression, Operator, Product};

use super::errors::{EvalError, EvalResult};

/// Re-filters candidate items against the residual products.
///
/// Identity when no term across the products needs local re-evaluation;
/// otherwise keeps items where at least one product's terms all hold.
pub fn filter_items(items: Vec<Value>, products: &[Product]) -> EvalResult<Vec<Value>> {
    let needs_refilter = products
        .iter()
        .flat_map(|p| p.terms())
        .any(|t| t.operator.requires_post_query_eval());
    if !needs_refilter {
        return Ok(items);
    }

    let mut kept = Vec::with_capacity(items.len());
    for item in items {
        if matches(&item, products)? {
            kept.push(item);
        }
    }
    Ok(kept)
}

/// OR over products of (AND over each product's terms).
pub fn matches(item: &Value, products: &[Product]) -> EvalResult<bool> {
    for product in products {
        let mut all = true;
        for term in product.terms() {
            if !evaluate(item, term)? {
                all = false;
                break;
            }
        }
        if all {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Evaluates one atomic predicate against an item.
pub fn evaluate(item: &Value, term: &AttributeExpression) -> EvalResult<bool> {
    let actual = item.get(&term.attribute.name).filter(|v| !v.is_null());

    match term.operator {
        Operator::Exists => return Ok(actual.is_some()),
        Operator::NotExists => return Ok(actual.is_none()),
        _ => {}
    }

    // Binary tests fail on a missing attribute.
    let actual = match actual {
        Some(v) => v,
        None => return Ok(false),
    };
    let expected = term.value.as_ref().unwrap_or(&Value::Null);

    match term.operator {
        Operator::Eq => Ok(actual == expected),
        Operator::Ne => Ok(actual != expected),
        Operator::Contains => string_test(term, actual, expected, |a, e| a.contains(e)),
        Operator::NotContains => {
            Ok(!string_test(term, actual, expected, |a, e| a.contains(e))?)
        }
        Operator::StartsWith => string_test(term, actual, expected, |a, e| a.starts_with(e)),
        Operator::NotStartsWith => {
            Ok(!string_test(term, actual, expected, |a, e| a.starts_with(e))?)
        }
        Operator::EndsWith => string_test(term, actual, expected, |a, e| a.ends_with(e)),
        Operator::NotEndsWith => {
            Ok(!string_test(term, actual, expected, |a, e| a.ends_with(e))?)
        }
        Operator::Gt => ordering_test(term, actual, expected, |o| o == std::cmp::Ordering::Greater),
        Operator::Ge => ordering_test(term, actual, expected, |o| o != std::cmp::Ordering::Less),
        Operator::Lt => ordering_test(term, actual, expected, |o| o == std::cmp::Ordering::Less),
        Operator::Le => ordering_test(term, actual, expected, |o| o != std::cmp::Ordering::Greater),
        Operator::Exists | Operator::NotExists => unreachable!("handled above"),
    }
}

fn string_test(
    term: &AttributeExpression,
    actual: &Value,
    expected: &Value,
    test: impl Fn(&str, &str) -> bool,
) -> EvalResult<bool> {
    match (actual, expected) {
        (Value::String(a), Value::String(e)) => Ok(test(a, e)),
        _ => Err(invalid_operands(term, actual, expected)),
    }
}

fn ordering_test(
    term: &AttributeExpression,
    actual: &Value,
    expected: &Value,
    test: impl Fn(std::cmp::Ordering) -> bool,
) -> EvalResult<bool> {
    let ordering = match (actual, expected) {
        (Value::Number(a), Value::Number(e)) => {
            match (a.as_f64(), e.as_f64()) {
                (Some(af), Some(ef)) => af.partial_cmp(&ef),
                _ => None,
            }
        }
        (Value::String(a), Value::String(e)) => Some(a.cmp(e)),
        _ => None,
    };
    match ordering {
        Some(o) => Ok(test(o)),
        None => Err(invalid_operands(term, actual, expected)),
    }
}

fn invalid_operands(term: &AttributeExpression, actual: &Value, expected: &Value) -> EvalError {
    EvalError::InvalidOperandTypes {
        operator: term.operator,
        left: actual.clone(),
        right: expected.clone(),
    }
}
