//! Wire Expression Rendering Tests
//!
//! Tests for renderer invariants:
//! - Every attribute reference and value sits behind a placeholder alias
//! - Repeated attribute occurrences share one name alias but get distinct
//!   value aliases
//! - The full pipeline (expression → DNF → plan → render → re-filter)
//!   produces dispatchable requests

use keyplan::catalog::{AttributeCatalog, AttributeRef, Index, IndexCatalog};
use keyplan::executor::{filter_items, ResultAccumulator};
use keyplan::expr::{normalize, Expression, Operator};
use keyplan::planner::{plan, QueryPlan};
use keyplan::render::{render_query, render_scan};
use serde_json::json;

// =============================================================================
// Helper Functions
// =============================================================================

fn account_catalog() -> AttributeCatalog {
    AttributeCatalog::new()
        .with_attribute(AttributeRef::string("accountId"))
        .with_attribute(AttributeRef::string("userName"))
        .with_attribute(AttributeRef::string("email"))
        .with_attribute(AttributeRef::string("status"))
        .with_attribute(AttributeRef::number("expires"))
}

fn account_indexes() -> IndexCatalog {
    // The composite index is declared first so range-bearing products can
    // use it; a sortless index declared earlier would shadow it.
    IndexCatalog::new(vec![
        Index::primary(AttributeRef::string("accountId"), None),
        Index::secondary(
            "by_user_expires",
            AttributeRef::string("userName"),
            Some(AttributeRef::number("expires")),
        ),
        Index::secondary("by_user", AttributeRef::string("userName"), None),
    ])
}

// =============================================================================
// Alias Hygiene
// =============================================================================

/// No raw attribute name appears outside the alias tables; every rendered
/// token resolves through them.
#[test]
fn test_all_references_aliased() {
    let catalog = account_catalog();
    let filter = Expression::and(
        Expression::Attribute(
            catalog
                .expression("userName", "eq", Some(json!("janedoe")))
                .unwrap(),
        ),
        Expression::and(
            Expression::Attribute(
                catalog
                    .expression("expires", "ge", Some(json!(100)))
                    .unwrap(),
            ),
            Expression::Attribute(
                catalog
                    .expression("expires", "le", Some(json!(200)))
                    .unwrap(),
            ),
        ),
    );

    let dnf = normalize(&filter);
    let entries = match plan(&dnf, &account_indexes(), None).unwrap() {
        QueryPlan::UsingQueries(entries) => entries,
        other => panic!("expected queries, got {:?}", other),
    };
    assert_eq!(entries.len(), 1);

    let rendered = render_query(&entries[0].0, &entries[0].1);
    assert_eq!(
        rendered.key_condition_expression,
        "#userName = :userName_0 AND #expires BETWEEN :expires_0 AND :expires_1"
    );
    // One name alias per attribute, one value alias per occurrence.
    assert_eq!(rendered.aliases.names().len(), 2);
    assert_eq!(rendered.aliases.values().len(), 3);
    assert_eq!(rendered.aliases.values()[":expires_0"], json!(100));
    assert_eq!(rendered.aliases.values()[":expires_1"], json!(200));
}

/// A scan over a many-term normal form aliases every occurrence distinctly.
#[test]
fn test_scan_rendering_counts_occurrences() {
    let filter = Expression::or(
        Expression::and(
            Expression::Attribute(
                account_catalog()
                    .expression("status", "eq", Some(json!("active")))
                    .unwrap(),
            ),
            Expression::Attribute(
                account_catalog()
                    .expression("email", "sw", Some(json!("admin")))
                    .unwrap(),
            ),
        ),
        Expression::Attribute(
            account_catalog()
                .expression("status", "eq", Some(json!("locked")))
                .unwrap(),
        ),
    );
    let dnf = normalize(&filter);
    let rendered = render_scan(&dnf);

    assert_eq!(
        rendered.filter_expression.as_deref(),
        Some("(#status = :status_0 AND begins_with(#email, :email_0)) OR (#status = :status_1)")
    );
    assert_eq!(rendered.aliases.values()[":status_0"], json!("active"));
    assert_eq!(rendered.aliases.values()[":status_1"], json!("locked"));
    assert_eq!(rendered.aliases.names().len(), 2);
}

// =============================================================================
// Full Pipeline
// =============================================================================

/// Token-built filter with an `ew` (ends-with) term: the wire filter
/// over-approximates via contains() and the local re-filter discards the
/// false positives; results dedup by primary key across branches.
#[test]
fn test_pipeline_with_post_query_refilter() {
    let catalog = account_catalog();
    let filter = Expression::and(
        Expression::Attribute(
            catalog
                .expression("userName", "eq", Some(json!("janedoe")))
                .unwrap(),
        ),
        Expression::Attribute(
            catalog
                .expression("email", "ew", Some(json!("@corp.example")))
                .unwrap(),
        ),
    );

    let dnf = normalize(&filter);
    let entries = match plan(&dnf, &account_indexes(), None).unwrap() {
        QueryPlan::UsingQueries(entries) => entries,
        other => panic!("expected queries, got {:?}", other),
    };
    assert_eq!(entries.len(), 1);
    let (key, residuals) = &entries[0];

    let rendered = render_query(key, residuals);
    assert_eq!(
        rendered.filter_expression.as_deref(),
        Some("contains(#email, :email_0)")
    );

    // What the store would return for that over-approximate filter.
    let store_items = vec![
        json!({"accountId": "a1", "userName": "janedoe", "email": "jane@corp.example"}),
        json!({"accountId": "a2", "userName": "janedoe", "email": "@corp.example.attacker.org"}),
    ];
    let kept = filter_items(store_items, residuals).unwrap();
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0]["accountId"], "a1");

    let mut acc = ResultAccumulator::new("accountId");
    acc.extend(kept.clone());
    acc.extend(kept); // second branch returns the same item
    assert_eq!(acc.into_items().len(), 1);
}

/// An unindexed filter renders as one scan whose filter string covers every
/// original term.
#[test]
fn test_pipeline_scan_covers_all_terms() {
    let catalog = account_catalog();
    let filter = Expression::or(
        Expression::Attribute(
            catalog
                .expression("status", "ne", Some(json!("active")))
                .unwrap(),
        ),
        Expression::Attribute(
            catalog
                .expression("email", "co", Some(json!("@corp")))
                .unwrap(),
        ),
    );
    let dnf = normalize(&filter);

    // status/email have no index: scan.
    let scanned = match plan(&dnf, &account_indexes(), None).unwrap() {
        QueryPlan::UsingScan(d) => d,
        other => panic!("expected scan, got {:?}", other),
    };
    let rendered = render_scan(&scanned);
    assert_eq!(
        rendered.filter_expression.as_deref(),
        Some("(#status <> :status_0) OR (contains(#email, :email_0))")
    );
}
