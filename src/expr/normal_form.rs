//! Disjunctive normal form
//!
//! Rewrites any expression into an OR of ANDs of atomic predicates. The
//! normalizer is total and pure: negation is pushed to the operators first,
//! so no `Negation` or `Logical` node survives into the normal form.

use serde::{Deserialize, Serialize};

use super::expression::{AttributeExpression, Expression, LogicalOp};

/// A conjunction of atomic predicates.
///
/// Terms are duplicate-free and insertion-ordered; equality is set equality,
/// so term order never matters to comparisons.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Product {
    terms: Vec<AttributeExpression>,
}

impl Product {
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Singleton product
    pub fn of(term: AttributeExpression) -> Self {
        Self { terms: vec![term] }
    }

    /// Adds a term; duplicates collapse
    pub fn insert(&mut self, term: AttributeExpression) {
        if !self.terms.contains(&term) {
            self.terms.push(term);
        }
    }

    /// Set union of two products' terms
    pub fn union(&self, other: &Product) -> Product {
        let mut merged = self.clone();
        for term in &other.terms {
            merged.insert(term.clone());
        }
        merged
    }

    pub fn terms(&self) -> &[AttributeExpression] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Product with the given terms removed (by value)
    pub fn without(&self, removed: &[&AttributeExpression]) -> Product {
        Product {
            terms: self
                .terms
                .iter()
                .filter(|t| !removed.iter().any(|r| *r == *t))
                .cloned()
                .collect(),
        }
    }

    /// Terms whose attribute has the given name
    pub fn terms_on<'a>(&'a self, attribute: &str) -> Vec<&'a AttributeExpression> {
        self.terms
            .iter()
            .filter(|t| t.attribute.name == attribute)
            .collect()
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.terms.len() == other.terms.len()
            && self.terms.iter().all(|t| other.terms.contains(t))
    }
}

/// A disjunction of products: the planner's canonical filter form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisjunctiveNormalForm {
    products: Vec<Product>,
}

impl DisjunctiveNormalForm {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// Singleton DNF
    pub fn of(product: Product) -> Self {
        Self {
            products: vec![product],
        }
    }

    /// Adds a product; duplicates (set-equal products) collapse
    pub fn insert(&mut self, product: Product) {
        if !self.products.contains(&product) {
            self.products.push(product);
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }
}

impl PartialEq for DisjunctiveNormalForm {
    fn eq(&self, other: &Self) -> bool {
        self.products.len() == other.products.len()
            && self.products.iter().all(|p| other.products.contains(p))
    }
}

/// Rewrites an expression into disjunctive normal form.
///
/// - atomic → singleton DNF of a singleton product
/// - `AND` → cartesian product of the operand DNFs (term-set union per pair)
/// - `OR` → union of the operand DNFs
/// - `NOT` → normalize the structural negation (pushes `NOT` to operators)
pub fn normalize(expr: &Expression) -> DisjunctiveNormalForm {
    match expr {
        Expression::Attribute(attr) => DisjunctiveNormalForm::of(Product::of(attr.clone())),
        Expression::Logical { left, op, right } => {
            let l = normalize(left);
            let r = normalize(right);
            match op {
                LogicalOp::And => {
                    let mut dnf = DisjunctiveNormalForm::new();
                    for pl in l.products() {
                        for pr in r.products() {
                            dnf.insert(pl.union(pr));
                        }
                    }
                    dnf
                }
                LogicalOp::Or => {
                    let mut dnf = l;
                    for p in r.products() {
                        dnf.insert(p.clone());
                    }
                    dnf
                }
            }
        }
        Expression::Negation(inner) => normalize(&inner.negate()),
    }
}
