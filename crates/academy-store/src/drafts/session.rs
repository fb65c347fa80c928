//! Training session drafts: sessions, plan blocks, attendance, load.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use academy_core::enums::{AttendanceStatus, SessionStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewSession {
    pub team_id: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub objective: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Defaults to `Planificada`.
    #[serde(default)]
    pub status: Option<SessionStatus>,
    /// Defaults to the current user.
    #[serde(default)]
    pub responsible_user_id: Option<String>,
}

impl NewSession {
    #[must_use]
    pub fn new(team_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            team_id: team_id.into(),
            date,
            start_time: None,
            duration_minutes: None,
            objective: None,
            location: None,
            status: None,
            responsible_user_id: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewSessionTask {
    pub session_id: String,
    #[serde(default)]
    pub task_id: Option<String>,
    pub order: u32,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewAttendance {
    pub session_id: String,
    pub player_id: String,
    /// Defaults to `Presente`.
    #[serde(default)]
    pub status: Option<AttendanceStatus>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// `load` is derived by the store as `rpe * duration_minutes`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewPlayerLoad {
    pub session_id: String,
    pub player_id: String,
    pub rpe: u8,
    pub duration_minutes: u32,
}
