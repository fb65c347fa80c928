//! Membership dues.

use academy_core::entities::Due;
use academy_core::enums::{DueStatus, ForeignKey};
use chrono::NaiveDate;

use crate::error::StoreError;
use crate::service::AcademyService;
use crate::updates::finance::DueUpdate;

impl AcademyService {
    /// # Errors
    ///
    /// Returns `StoreError::Collection` if the backend fails.
    pub async fn dues_for_player(&self, player_id: &str) -> Result<Vec<Due>, StoreError> {
        self.dues().find_by(ForeignKey::PlayerId, player_id).await
    }

    /// Mark a due as paid on `paid_on`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the due does not exist.
    pub async fn mark_due_paid(&self, due_id: &str, paid_on: NaiveDate) -> Result<Due, StoreError> {
        let patch = DueUpdate {
            status: Some(DueStatus::Paid),
            paid_on: Some(Some(paid_on)),
            ..DueUpdate::default()
        };
        self.dues().update(due_id, patch).await
    }
}
