//! Profiles: remote `profiles` table, local `users` collection.

use crate::repositories::{decode_first, decode_rows};
use crate::{DbError, Filter, Query, Result as DbErrorResult, RowStore, Table};

use vb_core::normalize::{decode, encode, shapes::PROFILE};
use vb_core::{KnownUsers, NewProfile, Profile, ProfileUpdate, Role};

use std::sync::Arc;

use serde_json::Value;

#[derive(Clone)]
pub struct ProfileRepository {
    store: Arc<dyn RowStore>,
}

impl ProfileRepository {
    pub fn new(store: Arc<dyn RowStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, profile: &NewProfile) -> DbErrorResult<Profile> {
        let row = encode(&PROFILE, profile)?;
        let stored = self.store.insert(Table::Profiles, row).await?;
        Ok(decode(&PROFILE, stored)?)
    }

    pub async fn find_by_id(&self, id: &str) -> DbErrorResult<Option<Profile>> {
        let rows = self
            .store
            .select(Table::Profiles, &Query::new().eq("id", id))
            .await?;
        Ok(decode_first(&PROFILE, rows))
    }

    /// Case-insensitive email match.
    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<Profile>> {
        let wanted = email.trim().to_lowercase();
        Ok(self
            .list()
            .await?
            .into_iter()
            .find(|p| p.email.trim().to_lowercase() == wanted))
    }

    pub async fn list(&self) -> DbErrorResult<Vec<Profile>> {
        let rows = self
            .store
            .select(Table::Profiles, &Query::new().order_by("created_at", true))
            .await?;
        Ok(decode_rows(&PROFILE, rows))
    }

    pub async fn known_users(&self) -> DbErrorResult<KnownUsers> {
        let profiles = self.list().await?;
        Ok(KnownUsers::from_profiles(&profiles))
    }

    /// `None` when no profile has that id.
    pub async fn update(&self, id: &str, update: &ProfileUpdate) -> DbErrorResult<Option<Profile>> {
        if update.is_empty() {
            return self.find_by_id(id).await;
        }
        let patch = encode(&PROFILE, update)?;
        let rows = self
            .store
            .update(Table::Profiles, &[Filter::id(id)], patch)
            .await?;
        Ok(decode_first(&PROFILE, rows))
    }

    pub async fn update_role(&self, id: &str, role: Role) -> DbErrorResult<Option<Profile>> {
        let mut patch = vb_core::Row::new();
        patch.insert("role".to_string(), Value::String(role.as_str().to_string()));
        let rows = self
            .store
            .update(Table::Profiles, &[Filter::id(id)], patch)
            .await?;
        Ok(decode_first(&PROFILE, rows))
    }

    /// Admin-only, and only against the local fallback. Remote accounts are
    /// owned by the auth service.
    pub async fn delete(&self, id: &str) -> DbErrorResult<bool> {
        if self.store.backend() != "local" {
            return Err(DbError::unsupported("deleting users", self.store.backend()));
        }
        let removed = self.store.delete(Table::Profiles, &[Filter::id(id)]).await?;
        Ok(removed > 0)
    }
}
