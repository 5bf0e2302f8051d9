use crate::tests::memory_backend;
use crate::{
    Actor, AppointmentRepository, DashboardRepository, FeedbackRepository,
    MedicalRecordRepository, PetRepository, ProfileRepository, RowStore, ServiceRepository,
    Table,
};

use vb_core::{
    AppointmentStatus, NewAppointment, NewFeedback, NewPet, NewProfile, PetUpdate, Role,
};

use chrono::NaiveDate;
use googletest::prelude::*;
use serde_json::json;

async fn seed_profile(profiles: &ProfileRepository, id: &str, email: &str) {
    profiles
        .create(&NewProfile::new(
            id.to_string(),
            email.to_string(),
            format!("User {id}"),
        ))
        .await
        .unwrap();
}

#[tokio::test]
async fn given_rex_when_created_for_u1_then_owned_by_u1_and_aged_two_years() {
    // Given
    let (backend, _kv) = memory_backend();
    let pets = PetRepository::new(backend.store.clone());
    let form = NewPet {
        birth_date: NaiveDate::from_ymd_opt(2022, 1, 1),
        ..NewPet::new("Rex", "dog")
    };

    // When
    let pet = pets.create(&Actor::user("u1"), &form).await.unwrap();

    // Then
    assert_eq!(pet.owner_id, "u1");
    assert_eq!(pet.birth_date, form.birth_date);
    let age = pet.age_on(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    assert_eq!(age.as_deref(), Some("2 years"));

    // And storage holds the snake_case column
    let stored = backend.local.read_collection("pets");
    assert_eq!(stored[0]["birth_date"], json!("2022-01-01"));
    assert!(stored[0].get("birthDate").is_none());
}

#[tokio::test]
async fn given_pet_when_read_back_then_unset_optionals_are_absent() {
    let (backend, _kv) = memory_backend();
    let pets = PetRepository::new(backend.store.clone());
    let actor = Actor::user("u1");

    let created = pets.create(&actor, &NewPet::new("Rex", "dog")).await.unwrap();
    let found = pets.find(&actor, &created.id).await.unwrap().unwrap();

    assert_that!(found.breed, none());
    assert_that!(found.weight, none());
    assert_that!(found.birth_date, none());
    let stored = backend.local.read_collection("pets");
    assert!(stored[0].get("breed").is_none());
}

#[tokio::test]
async fn given_other_users_pet_when_updated_or_deleted_then_no_effect() {
    // Given
    let (backend, _kv) = memory_backend();
    let pets = PetRepository::new(backend.store.clone());
    let pet = pets
        .create(&Actor::user("u1"), &NewPet::new("Rex", "dog"))
        .await
        .unwrap();
    let intruder = Actor::user("u2");

    // When
    let update = PetUpdate {
        name: Some("Stolen".to_string()),
        ..PetUpdate::default()
    };
    let updated = pets.update(&intruder, &pet.id, &update).await.unwrap();
    let deleted = pets.delete(&intruder, &pet.id).await.unwrap();

    // Then
    assert_that!(updated, none());
    assert!(!deleted);
    assert_that!(pets.find(&intruder, &pet.id).await.unwrap(), none());
    let owner_view = pets.find(&Actor::user("u1"), &pet.id).await.unwrap().unwrap();
    assert_eq!(owner_view.name, "Rex");
}

#[tokio::test]
async fn given_admin_when_updating_any_pet_then_allowed() {
    let (backend, _kv) = memory_backend();
    let pets = PetRepository::new(backend.store.clone());
    let pet = pets
        .create(&Actor::user("u1"), &NewPet::new("Rex", "dog"))
        .await
        .unwrap();

    let update = PetUpdate {
        weight: Some(30.0),
        ..PetUpdate::default()
    };
    let updated = pets
        .update(&Actor::admin("root"), &pet.id, &update)
        .await
        .unwrap()
        .unwrap();

    assert_that!(updated.weight, some(eq(30.0)));
    assert_eq!(updated.name, "Rex");
    assert_eq!(updated.owner_id, "u1");
}

#[tokio::test]
async fn given_pets_when_admin_lists_all_then_owner_embedded() {
    let (backend, _kv) = memory_backend();
    let profiles = ProfileRepository::new(backend.store.clone());
    let pets = PetRepository::new(backend.store.clone());
    seed_profile(&profiles, "u1", "ann@example.com").await;
    pets.create(&Actor::user("u1"), &NewPet::new("Rex", "dog"))
        .await
        .unwrap();

    let all = pets.list_all().await.unwrap();

    assert_that!(all.len(), eq(1));
    assert_eq!(all[0].owner.as_ref().unwrap().email, "ann@example.com");
}

#[tokio::test]
async fn given_guest_booking_with_known_email_when_created_then_owner_resolved() {
    // Given
    let (backend, _kv) = memory_backend();
    let profiles = ProfileRepository::new(backend.store.clone());
    let appointments = AppointmentRepository::new(backend.store.clone());
    seed_profile(&profiles, "u1", "ann@example.com").await;
    let booking = NewAppointment {
        email: Some("ANN@example.com".to_string()),
        ..NewAppointment::new("Checkup", "2024-03-01")
    };

    // When
    let created = appointments.create(&booking).await.unwrap();

    // Then
    assert_eq!(created.owner_id.as_deref(), Some("u1"));
    let mine = appointments.list_for_owner("u1").await.unwrap();
    assert_that!(mine.len(), eq(1));
    assert_eq!(mine[0].owner.as_ref().unwrap().id, "u1");
}

#[tokio::test]
async fn given_guest_booking_with_unknown_email_when_created_then_owner_absent_not_sentinel() {
    let (backend, _kv) = memory_backend();
    let appointments = AppointmentRepository::new(backend.store.clone());
    let booking = NewAppointment {
        email: Some("stranger@example.com".to_string()),
        ..NewAppointment::new("Checkup", "2024-03-01")
    };

    let created = appointments.create(&booking).await.unwrap();

    assert_that!(created.owner_id, none());
    let stored = backend.local.read_collection("appointments");
    assert!(stored[0].get("owner_id").is_none());
    assert_that!(appointments.list_for_owner("anonymous").await.unwrap().len(), eq(0));
}

#[tokio::test]
async fn given_legacy_row_without_owner_when_admin_lists_then_reconciled_by_email() {
    // Given: a row written before the account existed
    let (backend, _kv) = memory_backend();
    let profiles = ProfileRepository::new(backend.store.clone());
    let appointments = AppointmentRepository::new(backend.store.clone());
    backend
        .store
        .insert(
            Table::Appointments,
            json!({"id": "a1", "email": "bob@example.com", "date": "2024-03-01", "status": "Pending"})
                .as_object()
                .unwrap()
                .clone(),
        )
        .await
        .unwrap();
    seed_profile(&profiles, "u2", "Bob@Example.com").await;

    // When
    let all = appointments.list_all().await.unwrap();

    // Then
    assert_eq!(all[0].owner_id.as_deref(), Some("u2"));
    assert_eq!(all[0].status, AppointmentStatus::Pending);
    assert_that!(
        appointments.list_by_status(&AppointmentStatus::Pending).await.unwrap().len(),
        eq(1)
    );
}

#[tokio::test]
async fn given_guest_booking_before_account_exists_when_owner_reads_then_booking_is_theirs() {
    // Given
    let (backend, _kv) = memory_backend();
    let profiles = ProfileRepository::new(backend.store.clone());
    let appointments = AppointmentRepository::new(backend.store.clone());
    let booking = NewAppointment {
        email: Some("bob@example.com".to_string()),
        ..NewAppointment::new("Checkup", "2024-03-01")
    };
    let created = appointments.create(&booking).await.unwrap();
    assert_that!(created.owner_id, none());
    seed_profile(&profiles, "u2", "Bob@Example.com").await;
    seed_profile(&profiles, "u3", "carol@example.com").await;

    // When
    let mine = appointments.list_for_owner("u2").await.unwrap();
    let found = appointments.find_by_id(&created.id).await.unwrap().unwrap();

    // Then
    assert_that!(mine.len(), eq(1));
    assert_eq!(mine[0].id, created.id);
    assert_eq!(found.owner_id.as_deref(), Some("u2"));
    assert!(found.belongs_to("u2"));
    assert_that!(appointments.list_for_owner("u3").await.unwrap(), is_empty());
}

#[tokio::test]
async fn given_appointment_when_status_and_notes_updated_then_persisted() {
    let (backend, _kv) = memory_backend();
    let appointments = AppointmentRepository::new(backend.store.clone());
    let created = appointments
        .create(&NewAppointment {
            owner_id: Some("u1".to_string()),
            notes: Some("first visit".to_string()),
            ..NewAppointment::new("Checkup", "2024-03-01")
        })
        .await
        .unwrap();

    appointments
        .update_status(&created.id, &AppointmentStatus::Confirmed)
        .await
        .unwrap();
    let cleared = appointments
        .update_notes(&created.id, None)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(cleared.status, AppointmentStatus::Confirmed);
    assert_that!(cleared.notes, none());
}

#[tokio::test]
async fn given_missing_appointment_when_updated_or_fetched_then_none() {
    let (backend, _kv) = memory_backend();
    let appointments = AppointmentRepository::new(backend.store.clone());

    assert_that!(appointments.find_by_id("nope").await.unwrap(), none());
    assert_that!(
        appointments
            .update_status("nope", &AppointmentStatus::Cancelled)
            .await
            .unwrap(),
        none()
    );
    assert!(!appointments.delete("nope").await.unwrap());
}

#[tokio::test]
async fn given_mixed_data_when_dashboard_stats_computed_then_counts_match() {
    // Given
    let (backend, _kv) = memory_backend();
    let appointments = AppointmentRepository::new(backend.store.clone());
    let pets = PetRepository::new(backend.store.clone());
    for (owner, status) in [("u1", "Cancelled"), ("u2", "completed")] {
        let mut booking = NewAppointment::new("Checkup", "2024-03-01");
        booking.owner_id = Some(owner.to_string());
        booking.status = status.parse().unwrap();
        appointments.create(&booking).await.unwrap();
    }
    pets.create(&Actor::user("u1"), &NewPet::new("Rex", "dog"))
        .await
        .unwrap();

    // When
    let stats = DashboardRepository::new(backend.store.clone())
        .stats()
        .await
        .unwrap();

    // Then
    assert_that!(stats.total_appointments, eq(2));
    assert_that!(stats.cancelled_appointments, eq(1));
    assert_that!(stats.completed_appointments, eq(1));
    assert_that!(stats.scheduled_appointments, eq(0));
    assert_that!(stats.total_pets, eq(1));
    assert_that!(stats.active_owners, eq(2));
}

#[tokio::test]
async fn given_local_users_when_role_updated_and_deleted_then_applied() {
    let (backend, _kv) = memory_backend();
    let profiles = ProfileRepository::new(backend.store.clone());
    seed_profile(&profiles, "u1", "ann@example.com").await;

    let promoted = profiles.update_role("u1", Role::Vet).await.unwrap().unwrap();
    let deleted = profiles.delete("u1").await.unwrap();

    assert_that!(promoted.role, eq(Role::Vet));
    assert!(deleted);
    assert_that!(profiles.find_by_id("u1").await.unwrap(), none());
}

#[tokio::test]
async fn given_profile_when_found_by_email_then_case_insensitive() {
    let (backend, _kv) = memory_backend();
    let profiles = ProfileRepository::new(backend.store.clone());
    seed_profile(&profiles, "u1", "Ann@Example.com").await;

    let found = profiles.find_by_email("ann@EXAMPLE.com").await.unwrap();

    assert_eq!(found.unwrap().id, "u1");
}

#[tokio::test]
async fn given_out_of_range_rating_when_feedback_created_then_validation_error() {
    let (backend, _kv) = memory_backend();
    let feedback = FeedbackRepository::new(backend.store.clone());

    let result = feedback
        .create(&NewFeedback {
            user_id: "u1".to_string(),
            appointment_id: "a1".to_string(),
            rating: 7,
            comment: None,
        })
        .await;

    assert_that!(result, err(anything()));
    assert_that!(backend.local.read_collection("feedback").len(), eq(0));
}

#[tokio::test]
async fn given_feedback_when_found_by_appointment_then_returned() {
    let (backend, _kv) = memory_backend();
    let feedback = FeedbackRepository::new(backend.store.clone());
    feedback
        .create(&NewFeedback {
            user_id: "u1".to_string(),
            appointment_id: "a1".to_string(),
            rating: 5,
            comment: Some("Great".to_string()),
        })
        .await
        .unwrap();

    let found = feedback.find_by_appointment("a1").await.unwrap().unwrap();

    assert_that!(found.rating, eq(5));
    assert_that!(feedback.find_by_appointment("a2").await.unwrap(), none());
}

#[tokio::test]
async fn given_catalog_and_records_when_listed_then_decoded() {
    // Given
    let (backend, _kv) = memory_backend();
    for (id, name, price) in [("s2", "Vaccination", json!("45.5")), ("s1", "Checkup", json!(30))] {
        backend
            .store
            .insert(
                Table::Services,
                json!({"id": id, "name": name, "price": price})
                    .as_object()
                    .unwrap()
                    .clone(),
            )
            .await
            .unwrap();
    }
    let profiles = ProfileRepository::new(backend.store.clone());
    seed_profile(&profiles, "v1", "vet@example.com").await;
    backend
        .store
        .insert(
            Table::MedicalRecords,
            json!({"id": "m1", "pet_id": "p1", "diagnosis": "Otitis", "treatment": "Drops", "vet_id": "v1"})
                .as_object()
                .unwrap()
                .clone(),
        )
        .await
        .unwrap();

    // When
    let services = ServiceRepository::new(backend.store.clone()).list().await.unwrap();
    let records = MedicalRecordRepository::new(backend.store.clone())
        .list_for_pet("p1")
        .await
        .unwrap();

    // Then
    assert_eq!(services[0].name, "Checkup");
    assert_that!(services[1].price, eq(45.5));
    assert_that!(records.len(), eq(1));
    assert_eq!(records[0].vet.as_ref().unwrap().email, "vet@example.com");
}
