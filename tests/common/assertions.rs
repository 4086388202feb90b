use thunderhead::schema::*;

/// Assert `path` resolves to a table and return it
pub fn assert_table<'a>(root: &'a Store, path: &str) -> &'a Table {
    root.resolve_str(path)
        .expect("path should parse")
        .and_then(|node| node.as_table())
        .unwrap_or_else(|| panic!("Expected a table at {}", path))
}

/// Assert `path` resolves to a store and return it
pub fn assert_store<'a>(root: &'a Store, path: &str) -> &'a Store {
    root.resolve_str(path)
        .expect("path should parse")
        .and_then(|node| node.as_store())
        .unwrap_or_else(|| panic!("Expected a store at {}", path))
}

/// Assert the error is a duplicate-name rejection for `name`
pub fn assert_duplicate(err: &SchemaError, name: &str, existing: NodeKind) {
    match err {
        SchemaError::DuplicateName {
            name: got,
            existing: got_kind,
            ..
        } => {
            assert_eq!(got, name);
            assert_eq!(*got_kind, existing);
        }
        other => panic!("Expected DuplicateName for {}, got {:?}", name, other),
    }
}
