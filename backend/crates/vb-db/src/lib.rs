pub mod backend;
pub mod error;
pub mod query;
pub mod repositories;
pub mod row_store;
pub mod store;
pub mod table;

#[cfg(test)]
mod tests;

pub use backend::Backend;
pub use error::{DbError, Result};
pub use query::{Filter, Join, Order, Query};
pub use repositories::actor::Actor;
pub use repositories::appointment_repository::AppointmentRepository;
pub use repositories::dashboard_repository::DashboardRepository;
pub use repositories::feedback_repository::FeedbackRepository;
pub use repositories::medical_record_repository::MedicalRecordRepository;
pub use repositories::password_reset_repository::PasswordResetRepository;
pub use repositories::pet_repository::PetRepository;
pub use repositories::profile_repository::ProfileRepository;
pub use repositories::service_repository::ServiceRepository;
pub use row_store::{RowStore, SessionToken};
pub use store::file_store::FileStore;
pub use store::key_value::KeyValueStore;
pub use store::local::LocalRecordStore;
pub use store::memory_store::MemoryStore;
pub use store::remote::{RemoteRowStore, error_details};
pub use table::Table;
