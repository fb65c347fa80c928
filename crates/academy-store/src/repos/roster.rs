//! Roster repository: teams and their players.

use academy_core::entities::{Player, Team};
use academy_core::enums::ForeignKey;

use crate::error::StoreError;
use crate::service::AcademyService;

impl AcademyService {
    /// Players whose `team_id` is `team_id`, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Collection` if the backend fails.
    pub async fn players_of_team(&self, team_id: &str) -> Result<Vec<Player>, StoreError> {
        self.players().find_by(ForeignKey::TeamId, team_id).await
    }

    /// # Errors
    ///
    /// Returns `StoreError::Collection` if the backend fails.
    pub async fn active_teams(&self) -> Result<Vec<Team>, StoreError> {
        let teams = self.teams().list().await?;
        Ok(teams.into_iter().filter(|t| t.is_active).collect())
    }
}
