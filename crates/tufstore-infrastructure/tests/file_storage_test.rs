//! Integration tests for the filesystem storage adapter

use tempfile::TempDir;
use tufstore_domain::Error;
use tufstore_domain::ports::{ItemStore, MetadataStore};
use tufstore_domain::value_objects::{Metadata, MetadataKind, Role};
use tufstore_infrastructure::storage::FileStorage;

fn trusted(role: &str, payload: &[u8]) -> Metadata {
    Metadata::untrusted(Role::parse(role).unwrap(), payload.to_vec())
        .mark_trusted()
        .into_metadata()
}

#[test]
fn test_construction_over_valid_directory() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(dir.path()).unwrap();
    assert_eq!(storage.base_dir(), dir.path());
}

#[test]
fn test_construction_over_missing_path_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist");
    let error = FileStorage::new(&missing).unwrap_err();
    match error {
        Error::Initialization { message } => {
            assert!(message.contains("does-not-exist"));
        }
        _ => panic!("Expected Initialization error"),
    }
}

#[test]
fn test_construction_over_file_path_fails() {
    let dir = TempDir::new().unwrap();
    let file_path = dir.path().join("a-file");
    std::fs::write(&file_path, b"not a directory").unwrap();
    let error = FileStorage::new(&file_path).unwrap_err();
    match error {
        Error::Initialization { .. } => {}
        _ => panic!("Expected Initialization error"),
    }
}

#[test]
fn test_round_trip() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(dir.path()).unwrap();

    let metadata = trusted("root", b"{\"signed\": {\"_type\": \"root\"}}");
    storage.save(&metadata).unwrap();

    let loaded = storage.load(&Role::parse("root").unwrap()).unwrap().unwrap();
    assert_eq!(loaded.source(), metadata.source());
    assert!(loaded.metadata().is_trusted());
}

#[test]
fn test_missing_role_returns_none() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(dir.path()).unwrap();

    let result = storage
        .load(&Role::parse("nonexistent-role").unwrap())
        .unwrap();
    assert!(result.is_none());
}

#[test]
fn test_overwrite_last_write_wins() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(dir.path()).unwrap();

    storage.save(&trusted("snapshot", b"first")).unwrap();
    storage.save(&trusted("snapshot", b"second")).unwrap();

    let loaded = storage
        .load(&Role::parse("snapshot").unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(loaded.source(), b"second");
}

#[test]
fn test_untrusted_save_rejected_without_write() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(dir.path()).unwrap();

    let untrusted = Metadata::untrusted(Role::parse("timestamp").unwrap(), b"payload".to_vec());
    let error = storage.save(&untrusted).unwrap_err();
    match error {
        Error::UntrustedMetadata { role } => assert_eq!(role, "timestamp"),
        _ => panic!("Expected UntrustedMetadata error"),
    }

    // Nothing was written
    assert!(!dir.path().join("timestamp.json").exists());
    assert!(
        storage
            .load(&Role::parse("timestamp").unwrap())
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_untrusted_save_leaves_previous_value_unchanged() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(dir.path()).unwrap();

    storage.save(&trusted("root", b"original")).unwrap();

    let untrusted = Metadata::untrusted(Role::parse("root").unwrap(), b"replacement".to_vec());
    assert!(storage.save(&untrusted).is_err());

    let loaded = storage.load(&Role::parse("root").unwrap()).unwrap().unwrap();
    assert_eq!(loaded.source(), b"original");
}

#[test]
fn test_role_dispatch_on_load() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(dir.path()).unwrap();

    for role in ["root", "snapshot", "timestamp", "targets", "some-delegate"] {
        storage.save(&trusted(role, b"{}")).unwrap();
    }

    let cases = [
        ("root", MetadataKind::Root),
        ("snapshot", MetadataKind::Snapshot),
        ("timestamp", MetadataKind::Timestamp),
        ("targets", MetadataKind::Targets),
        ("some-delegate", MetadataKind::Targets),
    ];
    for (name, kind) in cases {
        let role = Role::parse(name).unwrap();
        let loaded = storage.load(&role).unwrap().unwrap();
        assert_eq!(loaded.kind(), kind, "role '{}'", name);
        assert_eq!(loaded.role(), &role);
    }
}

#[test]
fn test_one_json_file_per_role() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(dir.path()).unwrap();

    storage.save(&trusted("root", b"{}")).unwrap();
    storage.save(&trusted("django-packages", b"{}")).unwrap();

    assert!(dir.path().join("root.json").is_file());
    assert!(dir.path().join("django-packages.json").is_file());
}

#[test]
fn test_delete_is_best_effort() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(dir.path()).unwrap();

    // Deleting a key that was never written must not panic or error
    storage.delete("nonexistent.json");

    storage.save(&trusted("root", b"{}")).unwrap();
    storage.delete("root.json");
    assert!(storage.load(&Role::parse("root").unwrap()).unwrap().is_none());
}

#[test]
fn test_item_store_primitives() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(dir.path()).unwrap();

    assert!(!storage.exists("raw-item"));
    storage.write("raw-item", &[0xff, 0x00, 0xab]).unwrap();
    assert!(storage.exists("raw-item"));

    // Bytes pass through storage unmodified
    assert_eq!(storage.read("raw-item").unwrap(), vec![0xff, 0x00, 0xab]);
}

#[test]
fn test_read_missing_item_is_io_error() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(dir.path()).unwrap();

    let error = storage.read("missing.json").unwrap_err();
    match error {
        Error::Io { message, .. } => assert!(message.contains("missing.json")),
        _ => panic!("Expected Io error"),
    }
}
