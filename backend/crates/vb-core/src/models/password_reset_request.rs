//! Local bookkeeping for "forgot password" submissions.
//!
//! These records only track what the admin screen shows. They are never
//! reconciled with whether the user actually finished the reset.

use crate::PasswordResetStatus;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordResetRequest {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub status: PasswordResetStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl PasswordResetRequest {
    pub fn new(email: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email,
            status: PasswordResetStatus::Pending,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    pub fn mark_completed(&mut self, at: DateTime<Utc>) {
        self.status = PasswordResetStatus::Completed;
        self.completed_at = Some(at);
    }

    pub fn is_pending(&self) -> bool {
        self.status == PasswordResetStatus::Pending
    }
}
