//! Contract parity tests for the in-memory storage adapter

use tufstore_domain::Error;
use tufstore_domain::ports::{ItemStore, MetadataStore};
use tufstore_domain::value_objects::{Metadata, Role};
use tufstore_infrastructure::storage::MemoryStorage;

fn trusted(role: &str, payload: &[u8]) -> Metadata {
    Metadata::untrusted(Role::parse(role).unwrap(), payload.to_vec())
        .mark_trusted()
        .into_metadata()
}

#[test]
fn test_starts_empty() {
    let storage = MemoryStorage::new();
    assert!(storage.is_empty());
    assert!(storage.load(&Role::parse("root").unwrap()).unwrap().is_none());
}

#[test]
fn test_round_trip() {
    let storage = MemoryStorage::new();
    storage.save(&trusted("snapshot", b"payload")).unwrap();

    let loaded = storage
        .load(&Role::parse("snapshot").unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(loaded.source(), b"payload");
    assert!(loaded.metadata().is_trusted());
    assert_eq!(storage.len(), 1);
}

#[test]
fn test_overwrite_last_write_wins() {
    let storage = MemoryStorage::new();
    storage.save(&trusted("root", b"first")).unwrap();
    storage.save(&trusted("root", b"second")).unwrap();

    let loaded = storage.load(&Role::parse("root").unwrap()).unwrap().unwrap();
    assert_eq!(loaded.source(), b"second");
    assert_eq!(storage.len(), 1);
}

#[test]
fn test_untrusted_save_rejected() {
    let storage = MemoryStorage::new();
    let untrusted = Metadata::untrusted(Role::parse("root").unwrap(), b"x".to_vec());
    let error = storage.save(&untrusted).unwrap_err();
    match error {
        Error::UntrustedMetadata { role } => assert_eq!(role, "root"),
        _ => panic!("Expected UntrustedMetadata error"),
    }
    assert!(storage.is_empty());
}

#[test]
fn test_delete_is_best_effort() {
    let storage = MemoryStorage::new();
    storage.delete("never-written.json");

    storage.save(&trusted("root", b"{}")).unwrap();
    storage.delete("root.json");
    assert!(storage.is_empty());
}

#[test]
fn test_read_missing_item_is_io_error() {
    let storage = MemoryStorage::new();
    match storage.read("missing.json").unwrap_err() {
        Error::Io { message, .. } => assert!(message.contains("missing.json")),
        _ => panic!("Expected Io error"),
    }
}
