//! Evaluation repository.

use academy_core::entities::EvaluationDetail;
use academy_core::enums::{EntityKind, ForeignKey};

use crate::cascade::CascadeReport;
use crate::drafts::evaluation::NewEvaluationDetail;
use crate::error::StoreError;
use crate::service::AcademyService;
use crate::upsert::Upsert;

impl AcademyService {
    /// Attribute scores of one evaluation, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Collection` if the backend fails.
    pub async fn evaluation_details(
        &self,
        evaluation_id: &str,
    ) -> Result<Vec<EvaluationDetail>, StoreError> {
        self.evaluation_details_store()
            .find_by(ForeignKey::EvaluationId, evaluation_id)
            .await
    }

    /// Save the scoring grid of an evaluation in one write (sparse upsert).
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if no identity can be minted or the backend fails.
    pub async fn save_evaluation_details(
        &self,
        rows: Vec<Upsert<NewEvaluationDetail>>,
    ) -> Result<Vec<EvaluationDetail>, StoreError> {
        self.evaluation_details_store().upsert_many(rows).await
    }

    /// # Errors
    ///
    /// Returns the first backend `StoreError`; earlier removals stay.
    pub async fn delete_evaluation(&self, evaluation_id: &str) -> Result<CascadeReport, StoreError> {
        self.delete(EntityKind::Evaluation, evaluation_id).await
    }
}
