//! Pet persistence, scoped to the acting owner unless the actor is an admin.

use crate::repositories::{decode_first, decode_rows};
use crate::{Actor, Filter, Join, Query, Result as DbErrorResult, RowStore, Table};

use vb_core::normalize::{decode, encode, shapes::PET};
use vb_core::{NewPet, Pet, PetUpdate};

use std::sync::Arc;

use serde_json::Value;

const OWNER_JOIN: Join = Join::new("owner", Table::Profiles, "owner_id");

#[derive(Clone)]
pub struct PetRepository {
    store: Arc<dyn RowStore>,
}

impl PetRepository {
    pub fn new(store: Arc<dyn RowStore>) -> Self {
        Self { store }
    }

    /// Creates a pet owned by `actor`. The owner is never taken from the form.
    pub async fn create(&self, actor: &Actor, pet: &NewPet) -> DbErrorResult<Pet> {
        let mut row = encode(&PET, pet)?;
        row.insert("owner_id".to_string(), Value::String(actor.user_id.clone()));
        let stored = self.store.insert(Table::Pets, row).await?;
        Ok(decode(&PET, stored)?)
    }

    pub async fn list_for_owner(&self, owner_id: &str) -> DbErrorResult<Vec<Pet>> {
        let query = Query::new()
            .eq("owner_id", owner_id)
            .order_by("created_at", true);
        let rows = self.store.select(Table::Pets, &query).await?;
        Ok(decode_rows(&PET, rows))
    }

    /// Every pet with its owner profile embedded.
    pub async fn list_all(&self) -> DbErrorResult<Vec<Pet>> {
        let query = Query::new().join(OWNER_JOIN).order_by("created_at", true);
        let rows = self.store.select(Table::Pets, &query).await?;
        Ok(decode_rows(&PET, rows))
    }

    /// `None` when the pet does not exist or the actor may not see it.
    pub async fn find(&self, actor: &Actor, id: &str) -> DbErrorResult<Option<Pet>> {
        let query = Query {
            filters: scoped(actor, id),
            ..Query::new()
        };
        let rows = self.store.select(Table::Pets, &query).await?;
        Ok(decode_first(&PET, rows))
    }

    /// Only the fields set on `update` are written.
    pub async fn update(
        &self,
        actor: &Actor,
        id: &str,
        update: &PetUpdate,
    ) -> DbErrorResult<Option<Pet>> {
        let patch = encode(&PET, update)?;
        if patch.is_empty() {
            return self.find(actor, id).await;
        }
        let rows = self
            .store
            .update(Table::Pets, &scoped(actor, id), patch)
            .await?;
        Ok(decode_first(&PET, rows))
    }

    /// `false` when nothing the actor owns matched.
    pub async fn delete(&self, actor: &Actor, id: &str) -> DbErrorResult<bool> {
        let removed = self.store.delete(Table::Pets, &scoped(actor, id)).await?;
        Ok(removed > 0)
    }
}

fn scoped(actor: &Actor, id: &str) -> Vec<Filter> {
    let mut filters = vec![Filter::id(id)];
    if !actor.is_admin() {
        filters.push(Filter::eq("owner_id", actor.user_id.clone()));
    }
    filters
}
