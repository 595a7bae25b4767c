//! Unit tests for role parsing and dispatch

use tufstore_domain::value_objects::{MetadataKind, Role};
use tufstore_domain::Error;

#[test]
fn test_parse_reserved_roles() {
    assert_eq!(Role::parse("root").unwrap(), Role::Root);
    assert_eq!(Role::parse("snapshot").unwrap(), Role::Snapshot);
    assert_eq!(Role::parse("timestamp").unwrap(), Role::Timestamp);
}

#[test]
fn test_parse_targets_and_delegates() {
    assert_eq!(
        Role::parse("targets").unwrap(),
        Role::Targets("targets".to_string())
    );
    assert_eq!(
        Role::parse("django-packages").unwrap(),
        Role::Targets("django-packages".to_string())
    );
}

#[test]
fn test_kind_dispatch_table() {
    assert_eq!(Role::parse("root").unwrap().kind(), MetadataKind::Root);
    assert_eq!(
        Role::parse("snapshot").unwrap().kind(),
        MetadataKind::Snapshot
    );
    assert_eq!(
        Role::parse("timestamp").unwrap().kind(),
        MetadataKind::Timestamp
    );
    assert_eq!(
        Role::parse("targets").unwrap().kind(),
        MetadataKind::Targets
    );
    assert_eq!(
        Role::parse("some-delegate").unwrap().kind(),
        MetadataKind::Targets
    );
}

#[test]
fn test_filename_derivation() {
    assert_eq!(Role::parse("root").unwrap().filename(), "root.json");
    assert_eq!(
        Role::parse("my_delegate.v2").unwrap().filename(),
        "my_delegate.v2.json"
    );
}

#[test]
fn test_empty_name_rejected() {
    let error = Role::parse("").unwrap_err();
    match error {
        Error::InvalidRole { name, .. } => assert_eq!(name, ""),
        _ => panic!("Expected InvalidRole error"),
    }
}

#[test]
fn test_path_traversal_rejected() {
    for name in ["../root", "..", "a/b", "a\\b", "nested/role"] {
        let error = Role::parse(name).unwrap_err();
        match error {
            Error::InvalidRole { .. } => {}
            _ => panic!("Expected InvalidRole error for '{}'", name),
        }
    }
}

#[test]
fn test_forbidden_characters_rejected() {
    for name in ["role name", "role:1", "r?le", "rôle"] {
        assert!(Role::parse(name).is_err(), "'{}' should be rejected", name);
    }
}

#[test]
fn test_overlong_name_rejected() {
    let name = "a".repeat(256);
    assert!(Role::parse(&name).is_err());
    let name = "a".repeat(255);
    assert!(Role::parse(&name).is_ok());
}

#[test]
fn test_display_matches_name() {
    let role = Role::parse("snapshot").unwrap();
    assert_eq!(role.to_string(), "snapshot");
    assert_eq!(role.name(), "snapshot");
}

#[test]
fn test_serde_as_plain_string() {
    let role = Role::parse("django-packages").unwrap();
    let json = serde_json::to_string(&role).unwrap();
    assert_eq!(json, "\"django-packages\"");

    let parsed: Role = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, role);
}

#[test]
fn test_serde_rejects_invalid_string() {
    let result: Result<Role, _> = serde_json::from_str("\"../escape\"");
    assert!(result.is_err());
}
