use crate::{AppointmentRepository, PetRepository, Result as DbErrorResult, RowStore};

use vb_core::{AdminStats, compute_stats};

use std::sync::Arc;

/// Admin dashboard aggregates, recomputed from full scans on every call.
#[derive(Clone)]
pub struct DashboardRepository {
    appointments: AppointmentRepository,
    pets: PetRepository,
}

impl DashboardRepository {
    pub fn new(store: Arc<dyn RowStore>) -> Self {
        Self {
            appointments: AppointmentRepository::new(store.clone()),
            pets: PetRepository::new(store),
        }
    }

    pub async fn stats(&self) -> DbErrorResult<AdminStats> {
        let appointments = self.appointments.list_all().await?;
        let pets = self.pets.list_all().await?;
        Ok(compute_stats(&appointments, &pets))
    }
}
