//! Competition, match, and match-tracker drafts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use academy_core::enums::{MatchEventType, MatchStatus, Venue};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewCompetition {
    pub name: String,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub team_id: Option<String>,
    /// Defaults to `true`.
    #[serde(default)]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewMatch {
    pub team_id: String,
    pub opponent: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub competition_id: Option<String>,
    #[serde(default)]
    pub venue: Venue,
    /// Defaults to `Programado`.
    #[serde(default)]
    pub status: Option<MatchStatus>,
    #[serde(default)]
    pub goals_for: Option<u8>,
    #[serde(default)]
    pub goals_against: Option<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewPlayerMatchStats {
    pub match_id: String,
    pub player_id: String,
    #[serde(default)]
    pub minutes_played: u32,
    #[serde(default)]
    pub goals: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default)]
    pub yellow_cards: u8,
    #[serde(default)]
    pub red_cards: u8,
    #[serde(default)]
    pub is_starter: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewMatchEvent {
    pub match_id: String,
    pub event_type: MatchEventType,
    pub minute: u32,
    #[serde(default)]
    pub player_id: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewLineupTemplate {
    pub name: String,
    pub formation: String,
    #[serde(default)]
    pub team_id: Option<String>,
    /// Defaults to the current user.
    #[serde(default)]
    pub created_by_user_id: Option<String>,
}

/// One lineup slot. Exactly one of `match_id` / `session_id` is expected;
/// the lineup repo fills it from the scope being replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewLineup {
    #[serde(default)]
    pub match_id: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
    pub player_id: String,
    #[serde(default)]
    pub position_id: Option<String>,
    #[serde(default)]
    pub is_starter: bool,
    #[serde(default)]
    pub slot: Option<u8>,
}
