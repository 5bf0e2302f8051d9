//! Appointment persistence with owner reconciliation.
//!
//! Bookings captured from guests may carry only an email. The owner is
//! resolved against the known profiles when the booking is written, and
//! again on every read for rows stored before the owner could be matched.
//! Unresolved ownership is stored as an absent `owner_id`, never a
//! placeholder id.

use crate::repositories::{decode_first, decode_rows};
use crate::{Filter, Join, ProfileRepository, Query, Result as DbErrorResult, RowStore, Table};

use vb_core::normalize::{decode, encode, shapes::APPOINTMENT};
use vb_core::{
    Appointment, AppointmentStatus, KnownUsers, NewAppointment, OwnerHint, Row,
    filter_by_status, recent_appointments, resolve_owner, upcoming_appointments,
};

use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::debug;
use serde_json::Value;

const JOINS: [Join; 3] = [
    Join::new("pet", Table::Pets, "pet_id"),
    Join::new("vet", Table::Profiles, "vet_id"),
    Join::new("owner", Table::Profiles, "owner_id"),
];

#[derive(Clone)]
pub struct AppointmentRepository {
    store: Arc<dyn RowStore>,
    profiles: ProfileRepository,
}

impl AppointmentRepository {
    pub fn new(store: Arc<dyn RowStore>) -> Self {
        Self {
            profiles: ProfileRepository::new(store.clone()),
            store,
        }
    }

    pub async fn create(&self, appointment: &NewAppointment) -> DbErrorResult<Appointment> {
        let known = self.known_users_for(appointment).await?;
        let owner_id = resolve_owner(appointment, &known);
        debug!(
            "Booking {} on {}: owner {}",
            appointment.service_type,
            appointment.appointment_date,
            owner_id.as_deref().unwrap_or("<unresolved>")
        );

        let mut row = encode(&APPOINTMENT, appointment)?;
        row.remove("owner_id");
        if let Some(owner_id) = owner_id {
            row.insert("owner_id".to_string(), Value::String(owner_id));
        }

        let stored = self.store.insert(Table::Appointments, row).await?;
        Ok(decode(&APPOINTMENT, stored)?)
    }

    pub async fn find_by_id(&self, id: &str) -> DbErrorResult<Option<Appointment>> {
        let query = Query::new().eq("id", id).joins(&JOINS);
        let rows = self.store.select(Table::Appointments, &query).await?;
        let appointment = decode_first(&APPOINTMENT, rows);
        Ok(self.reconcile(appointment.into_iter().collect()).await?.pop())
    }

    /// The user's own appointments, newest booking date first. Includes
    /// bookings stored without an owner whose email matches the user.
    pub async fn list_for_owner(&self, owner_id: &str) -> DbErrorResult<Vec<Appointment>> {
        Ok(self
            .list_all()
            .await?
            .into_iter()
            .filter(|a| a.belongs_to(owner_id))
            .collect())
    }

    /// Every appointment, with unresolved owners filled in where the
    /// stored email matches a known profile.
    pub async fn list_all(&self) -> DbErrorResult<Vec<Appointment>> {
        let query = Query::new()
            .joins(&JOINS)
            .order_by("appointment_date", true);
        let rows = self.store.select(Table::Appointments, &query).await?;
        self.reconcile(decode_rows(&APPOINTMENT, rows)).await
    }

    /// Case-insensitive on whatever casing was stored.
    pub async fn list_by_status(&self, status: &AppointmentStatus) -> DbErrorResult<Vec<Appointment>> {
        Ok(filter_by_status(&self.list_all().await?, status))
    }

    pub async fn upcoming(&self, now: DateTime<Utc>) -> DbErrorResult<Vec<Appointment>> {
        Ok(upcoming_appointments(&self.list_all().await?, now))
    }

    pub async fn recent(&self, limit: usize) -> DbErrorResult<Vec<Appointment>> {
        Ok(recent_appointments(&self.list_all().await?, limit))
    }

    pub async fn update_status(
        &self,
        id: &str,
        status: &AppointmentStatus,
    ) -> DbErrorResult<Option<Appointment>> {
        self.patch(id, "status", Value::String(status.as_str().to_string()))
            .await
    }

    /// `None` clears the notes.
    pub async fn update_notes(
        &self,
        id: &str,
        notes: Option<&str>,
    ) -> DbErrorResult<Option<Appointment>> {
        let value = notes.map_or(Value::Null, |n| Value::String(n.to_string()));
        self.patch(id, "notes", value).await
    }

    pub async fn delete(&self, id: &str) -> DbErrorResult<bool> {
        let removed = self
            .store
            .delete(Table::Appointments, &[Filter::id(id)])
            .await?;
        Ok(removed > 0)
    }

    async fn patch(&self, id: &str, column: &str, value: Value) -> DbErrorResult<Option<Appointment>> {
        let mut patch = Row::new();
        patch.insert(column.to_string(), value);
        let rows = self
            .store
            .update(Table::Appointments, &[Filter::id(id)], patch)
            .await?;
        Ok(decode_first(&APPOINTMENT, rows))
    }

    async fn reconcile(&self, mut appointments: Vec<Appointment>) -> DbErrorResult<Vec<Appointment>> {
        if appointments.iter().any(|a| a.owner_id.is_none()) {
            let known = self.profiles.known_users().await?;
            for appointment in appointments.iter_mut().filter(|a| a.owner_id.is_none()) {
                appointment.owner_id = resolve_owner(&*appointment, &known);
            }
        }
        Ok(appointments)
    }

    /// Profiles are only scanned when the email is the sole ownership hint.
    async fn known_users_for(&self, hint: &impl OwnerHint) -> DbErrorResult<KnownUsers> {
        let needs_lookup = hint
            .explicit_owner()
            .is_none_or(|o| o.trim().is_empty())
            && hint.contact_email().is_some();

        if needs_lookup {
            self.profiles.known_users().await
        } else {
            Ok(KnownUsers::new())
        }
    }
}
