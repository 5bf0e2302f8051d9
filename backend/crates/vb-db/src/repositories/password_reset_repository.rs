//! Local bookkeeping of password-reset submissions for the admin screen.

use crate::{LocalRecordStore, Result as DbErrorResult};

use vb_core::PasswordResetRequest;

use chrono::Utc;

const COLLECTION: &str = "password_reset_requests";

#[derive(Clone)]
pub struct PasswordResetRepository {
    local: LocalRecordStore,
}

impl PasswordResetRepository {
    pub fn new(local: LocalRecordStore) -> Self {
        Self { local }
    }

    /// Records a pending request. Whether the email belongs to an account
    /// is neither checked nor stored.
    pub fn record(&self, email: &str) -> DbErrorResult<PasswordResetRequest> {
        let request = PasswordResetRequest::new(email.trim().to_string());
        let mut requests = self.local.read_typed::<PasswordResetRequest>(COLLECTION);
        requests.push(request.clone());
        self.local.write_typed(COLLECTION, &requests)?;
        Ok(request)
    }

    /// Newest first, optionally narrowed by a case-insensitive email
    /// substring.
    pub fn list(&self, email_filter: Option<&str>) -> Vec<PasswordResetRequest> {
        let needle = email_filter
            .map(|f| f.trim().to_lowercase())
            .filter(|f| !f.is_empty());

        let mut requests: Vec<PasswordResetRequest> = self
            .local
            .read_typed::<PasswordResetRequest>(COLLECTION)
            .into_iter()
            .filter(|r| {
                needle
                    .as_deref()
                    .is_none_or(|n| r.email.to_lowercase().contains(n))
            })
            .collect();
        requests.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        requests
    }

    /// `None` when no request has that id.
    pub fn mark_completed(&self, id: &str) -> DbErrorResult<Option<PasswordResetRequest>> {
        let mut requests = self.local.read_typed::<PasswordResetRequest>(COLLECTION);
        let Some(request) = requests.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };

        request.mark_completed(Utc::now());
        let completed = request.clone();
        self.local.write_typed(COLLECTION, &requests)?;
        Ok(Some(completed))
    }
}
