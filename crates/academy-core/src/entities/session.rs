use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{AttendanceStatus, SessionStatus};

/// A training session for one team.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Session {
    pub id: String,
    pub club_id: String,
    pub team_id: String,
    pub date: NaiveDate,
    pub start_time: Option<String>,
    pub duration_minutes: Option<u32>,
    pub objective: Option<String>,
    pub location: Option<String>,
    pub status: SessionStatus,
    pub responsible_user_id: Option<String>,
}

/// One block of a session plan. `order` is caller-maintained.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SessionTask {
    pub id: String,
    pub session_id: String,
    pub task_id: Option<String>,
    pub order: u32,
    pub duration_minutes: Option<u32>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Attendance {
    pub id: String,
    pub session_id: String,
    pub player_id: String,
    pub status: AttendanceStatus,
    pub notes: Option<String>,
}

/// Internal training load for one player in one session.
///
/// `load` is session-RPE: `rpe * duration_minutes`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PlayerLoad {
    pub id: String,
    pub session_id: String,
    pub player_id: String,
    pub rpe: u8,
    pub duration_minutes: u32,
    pub load: u32,
}
