pub mod appointment;
pub mod appointment_status;
pub mod feedback;
pub mod lenient;
pub mod medical_record;
pub mod password_reset_request;
pub mod password_reset_status;
pub mod pet;
pub mod pet_age;
pub mod profile;
pub mod role;
pub mod service;
