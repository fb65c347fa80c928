//! Training session repository: plans, attendance, and load trackers.

use academy_core::entities::{Attendance, PlayerLoad, SessionTask};
use academy_core::enums::{EntityKind, ForeignKey};

use crate::cascade::CascadeReport;
use crate::drafts::session::{NewAttendance, NewPlayerLoad};
use crate::error::StoreError;
use crate::service::AcademyService;
use crate::upsert::Upsert;

impl AcademyService {
    /// Plan blocks of a session, sorted by `order`. Blocks sharing an order
    /// keep insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Collection` if the backend fails.
    pub async fn session_plan(&self, session_id: &str) -> Result<Vec<SessionTask>, StoreError> {
        let mut blocks = self
            .session_tasks()
            .find_by(ForeignKey::SessionId, session_id)
            .await?;
        blocks.sort_by_key(|b| b.order);
        Ok(blocks)
    }

    /// # Errors
    ///
    /// Returns `StoreError::Collection` if the backend fails.
    pub async fn attendance_for(&self, session_id: &str) -> Result<Vec<Attendance>, StoreError> {
        self.attendance()
            .find_by(ForeignKey::SessionId, session_id)
            .await
    }

    /// Save the attendance tracker in one write.
    ///
    /// Rows carrying an existing identity are replaced in place; the rest are
    /// created. Rows left out of the batch are untouched.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if no identity can be minted or the backend fails.
    pub async fn save_attendance(
        &self,
        rows: Vec<Upsert<NewAttendance>>,
    ) -> Result<Vec<Attendance>, StoreError> {
        self.attendance().upsert_many(rows).await
    }

    /// Save the RPE tracker in one write. `load` is derived per row.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if no identity can be minted or the backend fails.
    pub async fn save_player_loads(
        &self,
        rows: Vec<Upsert<NewPlayerLoad>>,
    ) -> Result<Vec<PlayerLoad>, StoreError> {
        self.player_loads().upsert_many(rows).await
    }

    /// Delete a session with its plan blocks, attendance, and loads (plus its
    /// lineups under the `owned` policy).
    ///
    /// # Errors
    ///
    /// Returns the first backend `StoreError`; earlier removals stay.
    pub async fn delete_session(&self, session_id: &str) -> Result<CascadeReport, StoreError> {
        self.delete(EntityKind::Session, session_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drafts::session::{NewSession, NewSessionTask};
    use crate::test_support::helpers::test_service;
    use academy_core::enums::AttendanceStatus;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 11).unwrap()
    }

    #[tokio::test]
    async fn plan_is_sorted_by_order() {
        let svc = test_service();
        let session = svc.sessions().create(NewSession::new("tem-1", day())).await.unwrap();
        for (order, notes) in [(3, "vuelta a la calma"), (1, "calentamiento"), (2, "rondo")] {
            svc.session_tasks()
                .create(NewSessionTask {
                    session_id: session.id.clone(),
                    order,
                    notes: Some(notes.into()),
                    ..NewSessionTask::default()
                })
                .await
                .unwrap();
        }

        let orders: Vec<_> = svc
            .session_plan(&session.id)
            .await
            .unwrap()
            .iter()
            .map(|b| b.order)
            .collect();
        assert_eq!(orders, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn attendance_tracker_saves_mixed_batch() {
        let svc = test_service();
        let session = svc.sessions().create(NewSession::new("tem-1", day())).await.unwrap();
        let mark = |player: &str, status| NewAttendance {
            session_id: session.id.clone(),
            player_id: player.into(),
            status: Some(status),
            notes: None,
        };

        let first = svc
            .save_attendance(vec![Upsert::new(mark("ply-1", AttendanceStatus::Present))])
            .await
            .unwrap();

        let saved = svc
            .save_attendance(vec![
                Upsert::existing(first[0].id.clone(), mark("ply-1", AttendanceStatus::Late)),
                Upsert::new(mark("ply-2", AttendanceStatus::Absent)),
                Upsert::new(mark("ply-3", AttendanceStatus::Excused)),
            ])
            .await
            .unwrap();

        assert_eq!(saved[0].id, first[0].id);
        let rows = svc.attendance_for(&session.id).await.unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].status, AttendanceStatus::Late);
    }

    #[tokio::test]
    async fn player_loads_are_derived() {
        let svc = test_service();
        let saved = svc
            .save_player_loads(vec![Upsert::new(NewPlayerLoad {
                session_id: "ses-1".into(),
                player_id: "ply-1".into(),
                rpe: 6,
                duration_minutes: 75,
            })])
            .await
            .unwrap();
        assert_eq!(saved[0].load, 450);
    }
}
