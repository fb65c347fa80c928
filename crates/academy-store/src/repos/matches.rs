//! Match repository: stats tracker, event log, and lineups.

use academy_core::entities::{Lineup, MatchEvent, PlayerMatchStats};
use academy_core::enums::{EntityKind, ForeignKey};

use crate::cascade::CascadeReport;
use crate::drafts::competition::{NewLineup, NewPlayerMatchStats};
use crate::error::StoreError;
use crate::service::AcademyService;
use crate::upsert::Upsert;

/// What a lineup belongs to: a match, or a training session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineupScope {
    Match(String),
    Session(String),
}

impl LineupScope {
    #[must_use]
    pub const fn via(&self) -> ForeignKey {
        match self {
            Self::Match(_) => ForeignKey::MatchId,
            Self::Session(_) => ForeignKey::SessionId,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Match(id) | Self::Session(id) => id,
        }
    }

    /// Point a draft at this scope, clearing the other scope field.
    fn pin(&self, draft: NewLineup) -> NewLineup {
        let (match_id, session_id) = match self {
            Self::Match(id) => (Some(id.clone()), None),
            Self::Session(id) => (None, Some(id.clone())),
        };
        NewLineup {
            match_id,
            session_id,
            ..draft
        }
    }
}

impl AcademyService {
    /// Save the match stats tracker in one write (sparse upsert).
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if no identity can be minted or the backend fails.
    pub async fn save_match_stats(
        &self,
        rows: Vec<Upsert<NewPlayerMatchStats>>,
    ) -> Result<Vec<PlayerMatchStats>, StoreError> {
        self.player_match_stats().upsert_many(rows).await
    }

    /// Event log of a match ordered by minute. Events in the same minute keep
    /// insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Collection` if the backend fails.
    pub async fn match_events(&self, match_id: &str) -> Result<Vec<MatchEvent>, StoreError> {
        let mut events = self
            .match_events_store()
            .find_by(ForeignKey::MatchId, match_id)
            .await?;
        events.sort_by_key(|e| e.minute);
        Ok(events)
    }

    /// Replace the whole lineup of `scope`.
    ///
    /// Every slot currently in the scope is dropped, whether or not it appears
    /// in `slots`, and `slots` are inserted as new records.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if no identity can be minted or the backend fails.
    pub async fn replace_lineup(
        &self,
        scope: &LineupScope,
        slots: Vec<NewLineup>,
    ) -> Result<Vec<Lineup>, StoreError> {
        let drafts = slots.into_iter().map(|s| scope.pin(s)).collect();
        self.lineups()
            .replace_all(scope.via(), scope.id(), drafts)
            .await
    }

    /// # Errors
    ///
    /// Returns `StoreError::Collection` if the backend fails.
    pub async fn lineup_for(&self, scope: &LineupScope) -> Result<Vec<Lineup>, StoreError> {
        self.lineups().find_by(scope.via(), scope.id()).await
    }

    /// Delete a match. Under the `owned` policy its stats, events, and lineup
    /// go with it.
    ///
    /// # Errors
    ///
    /// Returns the first backend `StoreError`; earlier removals stay.
    pub async fn delete_match(&self, match_id: &str) -> Result<CascadeReport, StoreError> {
        self.delete(EntityKind::Match, match_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drafts::competition::{NewMatch, NewMatchEvent};
    use crate::test_support::helpers::test_service;
    use academy_core::enums::{MatchEventType, Venue};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn slot(player_id: &str, is_starter: bool) -> NewLineup {
        NewLineup {
            player_id: player_id.into(),
            is_starter,
            ..NewLineup::default()
        }
    }

    #[tokio::test]
    async fn replace_lineup_drops_unlisted_slots() {
        let svc = test_service();
        let scope = LineupScope::Match("mch-1".into());
        svc.replace_lineup(&scope, vec![slot("ply-a", true), slot("ply-b", true)])
            .await
            .unwrap();
        svc.replace_lineup(&scope, vec![slot("ply-c", true)])
            .await
            .unwrap();

        let players: Vec<_> = svc
            .lineup_for(&scope)
            .await
            .unwrap()
            .into_iter()
            .map(|l| l.player_id)
            .collect();
        assert_eq!(players, vec!["ply-c"]);
    }

    #[tokio::test]
    async fn scopes_do_not_interfere() {
        let svc = test_service();
        let game = LineupScope::Match("mch-1".into());
        let training = LineupScope::Session("mch-1".into());
        svc.replace_lineup(&game, vec![slot("ply-a", true)]).await.unwrap();
        svc.replace_lineup(&training, vec![slot("ply-b", false)])
            .await
            .unwrap();
        svc.replace_lineup(&game, Vec::new()).await.unwrap();

        assert!(svc.lineup_for(&game).await.unwrap().is_empty());
        let kept = svc.lineup_for(&training).await.unwrap();
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].match_id, None);
    }

    #[tokio::test]
    async fn pinned_scope_overrides_draft_fields() {
        let svc = test_service();
        let scope = LineupScope::Session("ses-9".into());
        let saved = svc
            .replace_lineup(
                &scope,
                vec![NewLineup {
                    match_id: Some("mch-stray".into()),
                    ..slot("ply-a", true)
                }],
            )
            .await
            .unwrap();
        assert_eq!(saved[0].session_id.as_deref(), Some("ses-9"));
        assert_eq!(saved[0].match_id, None);
    }

    #[tokio::test]
    async fn events_are_ordered_by_minute() {
        let svc = test_service();
        let fixture = svc
            .matches()
            .create(NewMatch {
                team_id: "tem-1".into(),
                opponent: "CD Rival".into(),
                date: NaiveDate::from_ymd_opt(2025, 4, 12).unwrap(),
                competition_id: None,
                venue: Venue::Home,
                status: None,
                goals_for: None,
                goals_against: None,
            })
            .await
            .unwrap();
        for (minute, event_type) in [
            (70, MatchEventType::Substitution),
            (12, MatchEventType::Goal),
            (44, MatchEventType::YellowCard),
        ] {
            svc.match_events_store()
                .create(NewMatchEvent {
                    match_id: fixture.id.clone(),
                    event_type,
                    minute,
                    player_id: None,
                    notes: None,
                })
                .await
                .unwrap();
        }

        let minutes: Vec<_> = svc
            .match_events(&fixture.id)
            .await
            .unwrap()
            .iter()
            .map(|e| e.minute)
            .collect();
        assert_eq!(minutes, vec![12, 44, 70]);

        let report = svc.delete_match(&fixture.id).await.unwrap();
        assert_eq!(report.removed(EntityKind::MatchEvent), 3);
    }
}
