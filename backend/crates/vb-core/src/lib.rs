pub mod error;
pub mod models;
pub mod normalize;
pub mod reconcile;
pub mod stats;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::appointment::{Appointment, NewAppointment};
pub use models::appointment_status::AppointmentStatus;
pub use models::feedback::{Feedback, NewFeedback};
pub use models::medical_record::MedicalRecord;
pub use models::password_reset_request::PasswordResetRequest;
pub use models::password_reset_status::PasswordResetStatus;
pub use models::pet::{NewPet, Pet, PetUpdate};
pub use models::pet_age::describe_age;
pub use models::profile::{NewProfile, Profile, ProfileUpdate};
pub use models::role::Role;
pub use models::service::Service;
pub use normalize::{Row, to_application_shape, to_storage_shape};
pub use reconcile::{KnownUsers, OwnerHint, resolve_owner};
pub use stats::{AdminStats, compute_stats, filter_by_status, recent_appointments, upcoming_appointments};
