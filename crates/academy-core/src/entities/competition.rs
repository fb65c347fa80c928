use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{MatchEventType, MatchStatus, Venue};

/// A league or tournament a team plays in.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Competition {
    pub id: String,
    pub club_id: String,
    pub name: String,
    pub season: Option<String>,
    pub team_id: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Match {
    pub id: String,
    pub club_id: String,
    pub competition_id: Option<String>,
    pub team_id: String,
    pub opponent: String,
    pub date: NaiveDate,
    pub venue: Venue,
    pub status: MatchStatus,
    pub goals_for: Option<u8>,
    pub goals_against: Option<u8>,
}

/// Per-player stat line for one match.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PlayerMatchStats {
    pub id: String,
    pub match_id: String,
    pub player_id: String,
    pub minutes_played: u32,
    pub goals: u32,
    pub assists: u32,
    pub yellow_cards: u8,
    pub red_cards: u8,
    pub is_starter: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MatchEvent {
    pub id: String,
    pub match_id: String,
    pub player_id: Option<String>,
    pub event_type: MatchEventType,
    pub minute: u32,
    pub notes: Option<String>,
}

/// Saved formation a coach can apply to a match or session.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LineupTemplate {
    pub id: String,
    pub club_id: String,
    pub team_id: Option<String>,
    pub name: String,
    pub formation: String,
    pub created_by_user_id: Option<String>,
}

/// One player's slot in the lineup of a match or a session.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Lineup {
    pub id: String,
    pub match_id: Option<String>,
    pub session_id: Option<String>,
    pub player_id: String,
    pub position_id: Option<String>,
    pub is_starter: bool,
    pub slot: Option<u8>,
}
