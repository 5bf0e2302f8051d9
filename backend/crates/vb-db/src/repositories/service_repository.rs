use crate::repositories::{decode_first, decode_rows};
use crate::{Query, Result as DbErrorResult, RowStore, Table};

use vb_core::Service;
use vb_core::normalize::shapes::SERVICE;

use std::sync::Arc;

/// Read-only access to the service catalog.
#[derive(Clone)]
pub struct ServiceRepository {
    store: Arc<dyn RowStore>,
}

impl ServiceRepository {
    pub fn new(store: Arc<dyn RowStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> DbErrorResult<Vec<Service>> {
        let rows = self
            .store
            .select(Table::Services, &Query::new().order_by("name", false))
            .await?;
        Ok(decode_rows(&SERVICE, rows))
    }

    pub async fn find_by_id(&self, id: &str) -> DbErrorResult<Option<Service>> {
        let rows = self
            .store
            .select(Table::Services, &Query::new().eq("id", id))
            .await?;
        Ok(decode_first(&SERVICE, rows))
    }
}
