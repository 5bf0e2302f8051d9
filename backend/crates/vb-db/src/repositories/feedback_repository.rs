use crate::repositories::decode_first;
use crate::{Query, Result as DbErrorResult, RowStore, Table};

use vb_core::normalize::{decode, encode, shapes::FEEDBACK};
use vb_core::{CoreError, Feedback, NewFeedback};

use std::sync::Arc;

const MIN_RATING: i32 = 1;
const MAX_RATING: i32 = 5;

#[derive(Clone)]
pub struct FeedbackRepository {
    store: Arc<dyn RowStore>,
}

impl FeedbackRepository {
    pub fn new(store: Arc<dyn RowStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, feedback: &NewFeedback) -> DbErrorResult<Feedback> {
        if !(MIN_RATING..=MAX_RATING).contains(&feedback.rating) {
            return Err(CoreError::validation(format!(
                "rating must be {MIN_RATING}-{MAX_RATING}, got {}",
                feedback.rating
            ))
            .into());
        }

        let row = encode(&FEEDBACK, feedback)?;
        let stored = self.store.insert(Table::Feedback, row).await?;
        Ok(decode(&FEEDBACK, stored)?)
    }

    pub async fn find_by_appointment(&self, appointment_id: &str) -> DbErrorResult<Option<Feedback>> {
        let query = Query::new().eq("appointment_id", appointment_id).limit(1);
        let rows = self.store.select(Table::Feedback, &query).await?;
        Ok(decode_first(&FEEDBACK, rows))
    }
}
