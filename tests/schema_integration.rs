//! End-to-end integration tests for schema declaration
//!
//! These tests drive the builder the way a schema-loading routine would.

mod common;

use common::assertions::*;
use thunderhead::schema::{CreationMode, NamingRules, NodeKind, SchemaError, Store};

#[test]
fn e2e_users_profile_scenario() {
    let mut root = Store::root();
    assert!(root.is_empty());

    let users = root.add_store("users").expect("users should be added");
    assert!(users.is_empty());
    assert!(assert_store(&root, "/users").is_empty());

    root.store_mut("users")
        .expect("users should be a store")
        .add_table("profile")
        .expect("profile should be added");
    let profile = assert_table(&root, "/users/profile");
    assert_eq!(profile.name(), "profile");
    assert_eq!(profile.mode(), CreationMode::CreateOrSet);

    let err = root.add_table("users").unwrap_err();
    assert_duplicate(&err, "users", NodeKind::Store);

    assert_eq!(root.len(), 1);
    assert_eq!(assert_store(&root, "/users").len(), 1);
}

/// A loader that skips bad declarations instead of aborting
#[test]
fn e2e_loader_can_skip_offending_declarations() {
    let declarations = [
        ("catalog", NodeKind::Store),
        ("orders", NodeKind::Table),
        ("orders", NodeKind::Table),
        ("", NodeKind::Store),
        ("catalog", NodeKind::Table),
        ("order-lines", NodeKind::Table),
        ("invoices", NodeKind::Table),
    ];

    let mut root = Store::root_with_rules(NamingRules::identifier());
    let mut skipped = Vec::new();
    for (name, kind) in declarations {
        let result: Result<(), SchemaError> = match kind {
            NodeKind::Store => root.add_store(name).map(|_| ()),
            NodeKind::Table => root.add_table(name).map(|_| ()),
        };
        if let Err(err) = result {
            skipped.push(err.code());
        }
    }

    assert_eq!(
        skipped,
        vec!["E-SCHEMA-002", "E-SCHEMA-001", "E-SCHEMA-002", "E-SCHEMA-001"]
    );
    let names: Vec<_> = root.names().collect();
    assert_eq!(names, vec!["catalog", "orders", "invoices"]);
}

#[test]
fn e2e_stats_and_serialization_of_finished_tree() {
    let mut root = Store::root();
    let app = root.add_store("app").unwrap();
    app.add_table("sessions").unwrap();
    app.add_store("billing")
        .unwrap()
        .add_table_with_mode("ledger", CreationMode::Create)
        .unwrap();

    let stats = root.stats();
    assert_eq!((stats.stores, stats.tables, stats.max_depth), (2, 2, 3));

    let value = serde_json::to_value(&root).unwrap();
    assert_eq!(
        value["substores"]["app"]["substores"]["billing"]["substores"]["ledger"]["mode"],
        "create"
    );
    assert_eq!(value["substores"]["app"]["type"], "multi");
}
