//! Index-matching planner
//!
//! For each product of the normal form, searches the index catalog in
//! declaration order for an index whose partition attribute is used exactly
//! once with equality, classifies sort-attribute terms into a supported
//! range condition, and records the leftover terms as that query's residual
//! filter. One unmatched product abandons per-product matching and the
//! whole normal form goes to a single scan.
//!
//! Planning is a pure function: same (normal form, catalog, sort) inputs
//! always yield a structurally equal plan.

use crate::catalog::{Index, IndexCatalog};
use crate::expr::{
    AttributeExpression, DisjunctiveNormalForm, Operator, Product, SORT_COMPATIBLE,
};

use super::errors::{PlannerError, PlannerResult};
use super::plan::{KeyCondition, QueryPlan, RangeCondition, SortSpec};

/// Ceiling on distinct key conditions one plan may dispatch.
///
/// Bounds the fan-out of OR-heavy filters into store round-trips.
pub const MAX_QUERIES: usize = 8;

/// Plans the execution of a normal form against a table's indexes.
///
/// When a `SortSpec` is supplied, only indexes ordering by the requested
/// attribute are eligible, and a scan fallback becomes an error (scans
/// cannot produce index order).
pub fn plan(
    dnf: &DisjunctiveNormalForm,
    indexes: &IndexCatalog,
    sort: Option<&SortSpec>,
) -> PlannerResult<QueryPlan> {
    if let Some(spec) = sort {
        if !indexes.has_sort_attribute(&spec.attribute) {
            return Err(PlannerError::UnknownSortAttribute(spec.attribute.clone()));
        }
    }

    let mut entries: Vec<(KeyCondition, Vec<Product>)> = Vec::new();

    for product in dnf.products() {
        let matched = indexes
            .iter()
            .filter(|ix| sort_eligible(ix, sort))
            .find_map(|ix| match_index(product, ix));

        let conditions = match matched {
            Some(conditions) => conditions,
            None => {
                // Scan fallback: no partial-index exploitation is attempted
                // once any conjunct requires it.
                return match sort {
                    Some(spec) => {
                        Err(PlannerError::UnsupportedSortAttribute(spec.attribute.clone()))
                    }
                    None => Ok(QueryPlan::UsingScan(dnf.clone())),
                };
            }
        };

        for (key, residual) in conditions {
            match entries.iter_mut().find(|(existing, _)| *existing == key) {
                Some((_, residuals)) => {
                    if !residuals.contains(&residual) {
                        residuals.push(residual);
                    }
                }
                None => entries.push((key, vec![residual])),
            }
        }
    }

    if entries.len() > MAX_QUERIES {
        return Err(PlannerError::QueryRequiresTooManyOperations {
            count: entries.len(),
            max: MAX_QUERIES,
        });
    }

    Ok(QueryPlan::UsingQueries(entries))
}

fn sort_eligible(index: &Index, sort: Option<&SortSpec>) -> bool {
    match sort {
        None => true,
        Some(spec) => index
            .sort
            .as_ref()
            .is_some_and(|s| s.name == spec.attribute),
    }
}

/// Attempts to satisfy one product with one index.
///
/// Returns the key conditions the product lowers to (two for an `Ne` sort
/// term, one otherwise), each paired with its residual filter product, or
/// `None` when the index is inapplicable.
fn match_index(product: &Product, index: &Index) -> Option<Vec<(KeyCondition, Product)>> {
    let partition_terms = product.terms_on(&index.partition.name);
    let partition = match partition_terms.as_slice() {
        [single] if single.operator == Operator::Eq => (*single).clone(),
        _ => return None,
    };

    let sort_attr = match &index.sort {
        Some(attr) => attr,
        None => {
            let residual = product.without(&[&partition]);
            return Some(vec![(
                KeyCondition::new(index.clone(), partition, None),
                residual,
            )]);
        }
    };

    let sort_terms = product.terms_on(&sort_attr.name);
    match sort_terms.as_slice() {
        [] => {
            let residual = product.without(&[&partition]);
            Some(vec![(
                KeyCondition::new(index.clone(), partition, None),
                residual,
            )])
        }
        [term] if SORT_COMPATIBLE.contains(&term.operator) => {
            let residual = product.without(&[&partition, *term]);
            Some(vec![(
                KeyCondition::new(
                    index.clone(),
                    partition,
                    Some(RangeCondition::Binary((*term).clone())),
                ),
                residual,
            )])
        }
        [term] if term.operator == Operator::Ne => {
            // On a totally-ordered sort key, (< v) ∪ (> v) ≡ (!= v).
            let value = term.value.clone()?;
            let residual = product.without(&[&partition, *term]);
            let split = |op: Operator| {
                RangeCondition::Binary(AttributeExpression::binary(
                    sort_attr.clone(),
                    op,
                    value.clone(),
                ))
            };
            Some(vec![
                (
                    KeyCondition::new(index.clone(), partition.clone(), Some(split(Operator::Lt))),
                    residual.clone(),
                ),
                (
                    KeyCondition::new(index.clone(), partition, Some(split(Operator::Gt))),
                    residual,
                ),
            ])
        }
        [_] => None,
        [a, b] => {
            let (ge, le) = match (a.operator, b.operator) {
                (Operator::Ge, Operator::Le) => (a, b),
                (Operator::Le, Operator::Ge) => (b, a),
                _ => return None,
            };
            let (lower, upper) = match (ge.value.clone(), le.value.clone()) {
                (Some(lower), Some(upper)) => (lower, upper),
                _ => return None,
            };
            let residual = product.without(&[&partition, *ge, *le]);
            Some(vec![(
                KeyCondition::new(
                    index.clone(),
                    partition,
                    Some(RangeCondition::Between {
                        attribute: sort_attr.clone(),
                        lower,
                        upper,
                    }),
                ),
                residual,
            )])
        }
        _ => None,
    }
}
