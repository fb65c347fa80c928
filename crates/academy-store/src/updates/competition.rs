//! Competition, match, and lineup updates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use academy_core::enums::{MatchEventType, MatchStatus, Venue};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompetitionUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::updates::nullable", skip_serializing_if = "Option::is_none")]
    pub season: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::updates::nullable", skip_serializing_if = "Option::is_none")]
    pub team_id: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatchUpdate {
    #[serde(default, deserialize_with = "crate::updates::nullable", skip_serializing_if = "Option::is_none")]
    pub competition_id: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opponent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<Venue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MatchStatus>,
    #[serde(default, deserialize_with = "crate::updates::nullable", skip_serializing_if = "Option::is_none")]
    pub goals_for: Option<Option<u8>>,
    #[serde(default, deserialize_with = "crate::updates::nullable", skip_serializing_if = "Option::is_none")]
    pub goals_against: Option<Option<u8>>,
}

pub struct MatchUpdateBuilder(MatchUpdate);

impl MatchUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(MatchUpdate::default())
    }

    #[must_use]
    pub fn competition_id(mut self, competition_id: Option<String>) -> Self {
        self.0.competition_id = Some(competition_id);
        self
    }

    #[must_use]
    pub fn team_id(mut self, team_id: impl Into<String>) -> Self {
        self.0.team_id = Some(team_id.into());
        self
    }

    #[must_use]
    pub fn opponent(mut self, opponent: impl Into<String>) -> Self {
        self.0.opponent = Some(opponent.into());
        self
    }

    #[must_use]
    pub const fn date(mut self, date: NaiveDate) -> Self {
        self.0.date = Some(date);
        self
    }

    #[must_use]
    pub const fn venue(mut self, venue: Venue) -> Self {
        self.0.venue = Some(venue);
        self
    }

    #[must_use]
    pub const fn status(mut self, status: MatchStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    /// Record the final score; also marks the match as played.
    #[must_use]
    pub const fn score(mut self, goals_for: u8, goals_against: u8) -> Self {
        self.0.goals_for = Some(Some(goals_for));
        self.0.goals_against = Some(Some(goals_against));
        self.0.status = Some(MatchStatus::Played);
        self
    }

    #[must_use]
    pub fn build(self) -> MatchUpdate {
        self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlayerMatchStatsUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minutes_played: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goals: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assists: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yellow_cards: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub red_cards: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_starter: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatchEventUpdate {
    #[serde(default, deserialize_with = "crate::updates::nullable", skip_serializing_if = "Option::is_none")]
    pub player_id: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<MatchEventType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minute: Option<u32>,
    #[serde(default, deserialize_with = "crate::updates::nullable", skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LineupTemplateUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formation: Option<String>,
    #[serde(default, deserialize_with = "crate::updates::nullable", skip_serializing_if = "Option::is_none")]
    pub team_id: Option<Option<String>>,
}

/// Slot edits within a lineup. Scope changes go through `replace_lineup`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LineupUpdate {
    #[serde(default, deserialize_with = "crate::updates::nullable", skip_serializing_if = "Option::is_none")]
    pub position_id: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_starter: Option<bool>,
    #[serde(default, deserialize_with = "crate::updates::nullable", skip_serializing_if = "Option::is_none")]
    pub slot: Option<Option<u8>>,
}
