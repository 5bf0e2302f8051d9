//! Remote adapter against a wiremock stand-in for the hosted row store.

use vb_core::{AppointmentStatus, NewPet};
use vb_db::{
    Actor, AppointmentRepository, DbError, Filter, PetRepository, Query, RemoteRowStore,
    RowStore, SessionToken, Table,
};

use std::sync::Arc;
use std::time::Duration;

use googletest::prelude::*;
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path, query_param},
};

const ANON_KEY: &str = "anon-key";

fn store(server: &MockServer) -> RemoteRowStore {
    RemoteRowStore::new(&server.uri(), ANON_KEY, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn given_filtered_select_when_executed_then_sends_eq_filter_and_key_headers() {
    // Given
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/pets"))
        .and(query_param("owner_id", "eq.u1"))
        .and(query_param("select", "*"))
        .and(header("apikey", ANON_KEY))
        .and(header("authorization", "Bearer anon-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "p1", "owner_id": "u1", "name": "Rex", "birth_date": "2022-01-01" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    // When
    let rows = store(&server)
        .select(Table::Pets, &Query::new().eq("owner_id", "u1"))
        .await
        .unwrap();

    // Then
    assert_that!(rows.len(), eq(1));
    assert_eq!(rows[0]["name"], json!("Rex"));
}

#[tokio::test]
async fn given_session_token_when_set_then_used_as_bearer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/services"))
        .and(header("authorization", "Bearer user-jwt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    let store = store(&server);

    store.set_access_token(Some("user-jwt".to_string())).await;
    let rows = store.select(Table::Services, &Query::new()).await.unwrap();

    assert_that!(rows.len(), eq(0));
}

#[tokio::test]
async fn given_joined_appointment_select_when_executed_then_embeds_and_normalizes() {
    // Given
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/appointments"))
        .and(query_param(
            "select",
            "*,pet:pets!pet_id(*),vet:profiles!vet_id(*),owner:profiles!owner_id(*)",
        ))
        .and(query_param("id", "eq.a1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "a1",
            "owner_id": "u1",
            "service_type": "Checkup",
            "appointment_date": "2024-03-01",
            "appointment_time": "09:30",
            "status": "CONFIRMED",
            "pet": { "id": "p1", "name": "Rex", "birth_date": "2022-01-01" },
            "vet": null,
            "owner": { "id": "u1", "email": "ann@example.com", "full_name": "Ann" }
        }])))
        .mount(&server)
        .await;
    let repo = AppointmentRepository::new(Arc::new(store(&server)));

    // When
    let appointment = repo.find_by_id("a1").await.unwrap().unwrap();

    // Then
    assert_eq!(appointment.status, AppointmentStatus::Confirmed);
    assert_eq!(appointment.time_slot.as_deref(), Some("09:30"));
    assert_that!(appointment.pet.unwrap().birth_date, some(anything()));
    assert_eq!(appointment.owner.unwrap().full_name, "Ann");
    assert_that!(appointment.vet, none());
}

#[tokio::test]
async fn given_pet_insert_when_executed_then_posts_storage_shape_and_asks_for_representation() {
    // Given
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/pets"))
        .and(header("prefer", "return=representation"))
        .and(body_json(json!({
            "owner_id": "u1",
            "name": "Rex",
            "species": "dog",
            "birth_date": "2022-01-01"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([{
            "id": "p1",
            "owner_id": "u1",
            "name": "Rex",
            "species": "dog",
            "birth_date": "2022-01-01",
            "breed": null
        }])))
        .expect(1)
        .mount(&server)
        .await;
    let pets = PetRepository::new(Arc::new(store(&server)));
    let form = NewPet {
        birth_date: chrono::NaiveDate::from_ymd_opt(2022, 1, 1),
        ..NewPet::new("Rex", "dog")
    };

    // When
    let pet = pets.create(&Actor::user("u1"), &form).await.unwrap();

    // Then
    assert_eq!(pet.id, "p1");
    assert_eq!(pet.birth_date, form.birth_date);
    assert_that!(pet.breed, none());
}

#[tokio::test]
async fn given_owner_scoped_delete_when_executed_then_filters_on_id_and_owner() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/rest/v1/pets"))
        .and(query_param("id", "eq.p1"))
        .and(query_param("owner_id", "eq.u2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    let pets = PetRepository::new(Arc::new(store(&server)));

    let deleted = pets.delete(&Actor::user("u2"), "p1").await.unwrap();

    assert!(!deleted);
}

#[tokio::test]
async fn given_patch_when_executed_then_only_patch_columns_sent() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/rest/v1/appointments"))
        .and(query_param("id", "eq.a1"))
        .and(body_json(json!({ "status": "cancelled" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "a1", "status": "cancelled", "appointment_date": "2024-03-01" }
        ])))
        .expect(1)
        .mount(&server)
        .await;
    let repo = AppointmentRepository::new(Arc::new(store(&server)));

    let updated = repo
        .update_status("a1", &AppointmentStatus::Cancelled)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.status, AppointmentStatus::Cancelled);
}

#[tokio::test]
async fn given_error_body_when_request_fails_then_api_error_with_code() {
    // Given
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/rest/v1/profiles"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "code": "42501",
            "message": "permission denied for table profiles"
        })))
        .mount(&server)
        .await;

    // When
    let result = store(&server)
        .update(Table::Profiles, &[Filter::id("u1")], vb_core::Row::new())
        .await;

    // Then
    let err = result.unwrap_err();
    assert!(matches!(err, DbError::Api { status: 403, .. }));
    assert_that!(err.to_string(), contains_substring("42501"));
    assert!(!err.is_transient());
}

#[tokio::test]
async fn given_unreachable_server_when_selecting_then_http_error() {
    // Given: a server that has already shut down
    let uri = {
        let server = MockServer::start().await;
        server.uri()
    };
    let store = RemoteRowStore::new(&uri, ANON_KEY, Duration::from_secs(2)).unwrap();

    // When
    let result = store.select(Table::Pets, &Query::new()).await;

    // Then
    assert!(matches!(result, Err(DbError::Http { .. })));
}
