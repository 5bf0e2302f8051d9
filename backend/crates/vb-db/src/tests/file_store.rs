use crate::{FileStore, KeyValueStore, LocalRecordStore};

use std::sync::Arc;

use googletest::prelude::*;
use serde_json::json;
use tempfile::TempDir;

#[test]
fn given_missing_key_when_get_then_none() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::open(temp.path()).unwrap();

    assert_that!(store.get("pets").unwrap(), none());
}

#[test]
fn given_value_when_set_then_file_replaced_and_no_temp_left_behind() {
    // Given
    let temp = TempDir::new().unwrap();
    let store = FileStore::open(temp.path()).unwrap();

    // When
    store.set("pets", "[1]").unwrap();
    store.set("pets", "[1, 2]").unwrap();

    // Then
    assert_eq!(store.get("pets").unwrap().as_deref(), Some("[1, 2]"));
    let entries: Vec<_> = std::fs::read_dir(temp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(entries, vec!["pets.json".to_string()]);
}

#[test]
fn given_nested_dir_when_opened_then_created() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("a/b/data");

    let store = FileStore::open(&dir).unwrap();

    assert!(store.dir().is_dir());
}

#[test]
fn given_path_like_key_when_used_then_rejected() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::open(temp.path()).unwrap();

    assert_that!(store.set("../escape", "x"), err(anything()));
    assert_that!(store.get(""), err(anything()));
}

#[test]
fn given_removed_key_when_removed_again_then_ok() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::open(temp.path()).unwrap();
    store.set("users", "[]").unwrap();

    assert_that!(store.remove("users"), ok(anything()));
    assert_that!(store.remove("users"), ok(anything()));
    assert_that!(store.get("users").unwrap(), none());
}

#[test]
fn given_garbage_file_on_disk_when_collection_read_then_empty() {
    // Given: a file mangled outside the application
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("appointments.json"), "not json at all").unwrap();
    let local = LocalRecordStore::new(Arc::new(FileStore::open(temp.path()).unwrap()));

    // When / Then
    assert_that!(local.read_collection("appointments").len(), eq(0));

    // And the collection is still writable afterwards
    let rows = vec![json!({"id": "a1"}).as_object().unwrap().clone()];
    local.write_collection("appointments", &rows).unwrap();
    assert_that!(local.read_collection("appointments").len(), eq(1));
}
