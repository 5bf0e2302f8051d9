
use crate::{Appointment, AppointmentStatus};

use chrono::{DateTime, Utc};

pub(crate) fn appointment(id: &str, status: &str) -> Appointment {
    Appointment {
        id: id.to_string(),
        pet_id: None,
        owner_id: None,
        service_type: "Checkup".to_string(),
        appointment_date: "2024-03-01".to_string(),
        time_slot: None,
        status: AppointmentStatus::normalize(status),
        notes: None,
        vet_id: None,
        email: None,
        phone: None,
        pet_name: None,
        pet_species: None,
        owner_name: None,
        created_at: None,
        updated_at: None,
        pet: None,
        vet: None,
        owner: None,
    }
}

pub(crate) fn at(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw).unwrap().with_timezone(&Utc)
}
