use crate::repositories::decode_rows;
use crate::{Join, Query, Result as DbErrorResult, RowStore, Table};

use vb_core::MedicalRecord;
use vb_core::normalize::shapes::MEDICAL_RECORD;

use std::sync::Arc;

#[derive(Clone)]
pub struct MedicalRecordRepository {
    store: Arc<dyn RowStore>,
}

impl MedicalRecordRepository {
    pub fn new(store: Arc<dyn RowStore>) -> Self {
        Self { store }
    }

    /// Newest first, with the attending vet embedded.
    pub async fn list_for_pet(&self, pet_id: &str) -> DbErrorResult<Vec<MedicalRecord>> {
        let query = Query::new()
            .eq("pet_id", pet_id)
            .join(Join::new("vet", Table::Profiles, "vet_id"))
            .order_by("created_at", true);
        let rows = self.store.select(Table::MedicalRecords, &query).await?;
        Ok(decode_rows(&MEDICAL_RECORD, rows))
    }
}
