//! Appointment entity - a booked visit for a pet.

use crate::models::lenient;
use crate::{AppointmentStatus, Pet, Profile};

use chrono::{DateTime, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

const TIME_SLOT_FORMATS: &[&str] = &["%H:%M", "%H:%M:%S", "%I:%M %p", "%I:%M%p"];
const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    #[serde(
        default,
        deserialize_with = "lenient::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub pet_id: Option<String>,
    /// `None` means ownership could not be established. It never equals any
    /// user id, including one that happens to read "anonymous".
    #[serde(
        default,
        deserialize_with = "lenient::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub owner_id: Option<String>,
    #[serde(default)]
    pub service_type: String,
    #[serde(default)]
    pub appointment_date: String,
    #[serde(
        default,
        deserialize_with = "lenient::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub time_slot: Option<String>,
    #[serde(default)]
    pub status: AppointmentStatus,
    #[serde(
        default,
        deserialize_with = "lenient::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub vet_id: Option<String>,

    // Contact and display fields captured by the booking form
    #[serde(
        default,
        deserialize_with = "lenient::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub pet_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub pet_species: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub owner_name: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient::optional_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        deserialize_with = "lenient::optional_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,

    // Joins
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pet: Option<Pet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vet: Option<Profile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<Profile>,
}

impl Appointment {
    /// Strict ownership check. Unresolved ownership never matches.
    pub fn belongs_to(&self, user_id: &str) -> bool {
        matches!(self.owner_id.as_deref(), Some(owner) if owner == user_id)
    }

    /// Point in time the visit starts, read as UTC.
    ///
    /// `appointment_date` may be a plain date or a full timestamp. For plain
    /// dates the start of `time_slot` ("09:30", "9:30 AM", "09:30-10:00") is
    /// applied; a missing or unreadable slot means midnight.
    pub fn scheduled_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.appointment_date.trim();
        if raw.is_empty() {
            return None;
        }

        if let Some(ts) = lenient::parse_timestamp(raw) {
            return Some(ts);
        }

        for format in DATE_TIME_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
                return Some(naive.and_utc());
            }
        }

        let date = lenient::parse_date(raw)?;
        let time = self
            .time_slot
            .as_deref()
            .and_then(parse_slot_start)
            .unwrap_or(NaiveTime::MIN);

        Some(date.and_time(time).and_utc())
    }
}

fn parse_slot_start(slot: &str) -> Option<NaiveTime> {
    let start = slot.split('-').next()?.trim();
    TIME_SLOT_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(start, format).ok())
}

/// Booking as captured by the appointment form.
///
/// `owner_id` is optional because guest bookings only capture an email;
/// the repository resolves it before writing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    pub service_type: String,
    pub appointment_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_slot: Option<String>,
    pub status: AppointmentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vet_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet_species: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
}

impl NewAppointment {
    pub fn new(service_type: impl Into<String>, appointment_date: impl Into<String>) -> Self {
        Self {
            service_type: service_type.into(),
            appointment_date: appointment_date.into(),
            ..Self::default()
        }
    }
}
