pub mod actor;
pub mod appointment_repository;
pub mod dashboard_repository;
pub mod feedback_repository;
pub mod medical_record_repository;
pub mod password_reset_repository;
pub mod pet_repository;
pub mod profile_repository;
pub mod service_repository;

use vb_core::Row;
use vb_core::normalize::{EntityShape, decode};

use log::warn;
use serde::de::DeserializeOwned;

/// Decodes rows, skipping (and logging) any that do not fit the model.
pub(crate) fn decode_rows<T: DeserializeOwned>(shape: &EntityShape, rows: Vec<Row>) -> Vec<T> {
    rows.into_iter()
        .filter_map(|row| match decode(shape, row) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Skipping unreadable {} row: {e}", shape.entity);
                None
            }
        })
        .collect()
}

/// First decodable row, if any.
pub(crate) fn decode_first<T: DeserializeOwned>(shape: &EntityShape, rows: Vec<Row>) -> Option<T> {
    decode_rows(shape, rows).into_iter().next()
}
