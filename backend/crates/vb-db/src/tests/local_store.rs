use crate::tests::memory_backend;
use crate::{Filter, Join, KeyValueStore, Query, RowStore, Table};

use vb_core::Row;

use std::collections::HashSet;

use googletest::prelude::*;
use serde_json::{Value, json};

fn row(value: Value) -> Row {
    match value {
        Value::Object(map) => map,
        other => panic!("not an object: {other}"),
    }
}

#[test]
fn given_missing_collection_when_read_then_empty() {
    let (backend, _kv) = memory_backend();

    assert_that!(backend.local.read_collection("pets").len(), eq(0));
}

#[test]
fn given_corrupted_collection_when_read_then_empty_without_error() {
    // Given: a half-written document
    let (backend, kv) = memory_backend();
    kv.set("pets", "[{\"id\": \"p1\", \"name\":").unwrap();

    // When
    let rows = backend.local.read_collection("pets");

    // Then
    assert_that!(rows.len(), eq(0));
}

#[test]
fn given_collection_with_non_object_entries_when_read_then_skips_them() {
    let (backend, kv) = memory_backend();
    kv.set("pets", r#"[{"id": "p1"}, 42, "x", {"id": "p2"}]"#).unwrap();

    assert_that!(backend.local.read_collection("pets").len(), eq(2));
}

#[test]
fn given_written_collection_when_read_then_returns_same_rows() {
    let (backend, _kv) = memory_backend();
    let rows = vec![row(json!({"id": "u1", "email": "ann@example.com"}))];

    backend.local.write_collection("users", &rows).unwrap();

    assert_eq!(backend.local.read_collection("users"), rows);
}

#[tokio::test]
async fn given_inserts_without_id_when_stored_then_ids_are_unique_uuids() {
    // Given
    let (backend, _kv) = memory_backend();

    // When
    let mut ids = HashSet::new();
    for n in 0..50 {
        let stored = backend
            .store
            .insert(Table::Pets, row(json!({"name": format!("pet-{n}")})))
            .await
            .unwrap();
        let id = stored["id"].as_str().unwrap().to_string();
        assert_that!(uuid::Uuid::parse_str(&id), ok(anything()));
        ids.insert(id);
    }

    // Then
    assert_that!(ids.len(), eq(50));
}

#[tokio::test]
async fn given_insert_when_stored_then_timestamps_are_set() {
    let (backend, _kv) = memory_backend();

    let stored = backend
        .store
        .insert(Table::Appointments, row(json!({"service_type": "Checkup"})))
        .await
        .unwrap();

    assert!(stored["created_at"].is_string());
    assert!(stored["updated_at"].is_string());
}

#[tokio::test]
async fn given_rows_when_selected_with_filter_then_only_matches_returned() {
    let (backend, _kv) = memory_backend();
    for (id, owner) in [("p1", "u1"), ("p2", "u2"), ("p3", "u1")] {
        backend
            .store
            .insert(Table::Pets, row(json!({"id": id, "owner_id": owner, "name": id})))
            .await
            .unwrap();
    }

    let rows = backend
        .store
        .select(
            Table::Pets,
            &Query::new().eq("owner_id", "u1").order_by("name", true),
        )
        .await
        .unwrap();

    assert_that!(rows.len(), eq(2));
    assert_eq!(rows[0]["id"], json!("p3"));
    assert_eq!(rows[1]["id"], json!("p1"));
}

#[tokio::test]
async fn given_foreign_keys_when_selected_with_join_then_related_row_embedded() {
    // Given
    let (backend, _kv) = memory_backend();
    backend
        .store
        .insert(Table::Pets, row(json!({"id": "p1", "name": "Rex"})))
        .await
        .unwrap();
    backend
        .store
        .insert(
            Table::Appointments,
            row(json!({"id": "a1", "pet_id": "p1", "vet_id": "missing"})),
        )
        .await
        .unwrap();

    // When
    let rows = backend
        .store
        .select(
            Table::Appointments,
            &Query::new()
                .join(Join::new("pet", Table::Pets, "pet_id"))
                .join(Join::new("vet", Table::Profiles, "vet_id")),
        )
        .await
        .unwrap();

    // Then
    assert_eq!(rows[0]["pet"]["name"], json!("Rex"));
    assert!(rows[0]["vet"].is_null());
}

#[tokio::test]
async fn given_partial_patch_when_updated_then_other_columns_untouched() {
    let (backend, _kv) = memory_backend();
    backend
        .store
        .insert(
            Table::Pets,
            row(json!({"id": "p1", "name": "Rex", "breed": "Beagle"})),
        )
        .await
        .unwrap();

    let updated = backend
        .store
        .update(Table::Pets, &[Filter::id("p1")], row(json!({"weight": 12.5})))
        .await
        .unwrap();

    assert_that!(updated.len(), eq(1));
    let stored = backend.local.read_collection("pets");
    assert_eq!(stored[0]["breed"], json!("Beagle"));
    assert_eq!(stored[0]["weight"], json!(12.5));
}

#[tokio::test]
async fn given_no_match_when_updated_or_deleted_then_nothing_changes() {
    let (backend, _kv) = memory_backend();
    backend
        .store
        .insert(Table::Pets, row(json!({"id": "p1", "name": "Rex"})))
        .await
        .unwrap();

    let updated = backend
        .store
        .update(Table::Pets, &[Filter::id("nope")], row(json!({"name": "Max"})))
        .await
        .unwrap();
    let removed = backend
        .store
        .delete(Table::Pets, &[Filter::id("nope")])
        .await
        .unwrap();

    assert_that!(updated.len(), eq(0));
    assert_that!(removed, eq(0));
    assert_that!(backend.local.read_collection("pets").len(), eq(1));
}

#[tokio::test]
async fn given_profiles_table_when_stored_locally_then_lands_in_users_collection() {
    let (backend, _kv) = memory_backend();

    backend
        .store
        .insert(Table::Profiles, row(json!({"id": "u1", "email": "a@b.c"})))
        .await
        .unwrap();

    assert_that!(backend.local.read_collection("users").len(), eq(1));
}
