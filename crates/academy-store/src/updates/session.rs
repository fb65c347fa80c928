//! Session update builder and tracker-record updates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use academy_core::enums::{AttendanceStatus, SessionStatus};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "crate::updates::nullable", skip_serializing_if = "Option::is_none")]
    pub start_time: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::updates::nullable", skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<Option<u32>>,
    #[serde(default, deserialize_with = "crate::updates::nullable", skip_serializing_if = "Option::is_none")]
    pub objective: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::updates::nullable", skip_serializing_if = "Option::is_none")]
    pub location: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<SessionStatus>,
    #[serde(default, deserialize_with = "crate::updates::nullable", skip_serializing_if = "Option::is_none")]
    pub responsible_user_id: Option<Option<String>>,
}

pub struct SessionUpdateBuilder(SessionUpdate);

impl SessionUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(SessionUpdate::default())
    }

    #[must_use]
    pub fn team_id(mut self, team_id: impl Into<String>) -> Self {
        self.0.team_id = Some(team_id.into());
        self
    }

    #[must_use]
    pub const fn date(mut self, date: NaiveDate) -> Self {
        self.0.date = Some(date);
        self
    }

    #[must_use]
    pub fn start_time(mut self, start_time: Option<String>) -> Self {
        self.0.start_time = Some(start_time);
        self
    }

    #[must_use]
    pub const fn duration_minutes(mut self, duration_minutes: Option<u32>) -> Self {
        self.0.duration_minutes = Some(duration_minutes);
        self
    }

    #[must_use]
    pub fn objective(mut self, objective: Option<String>) -> Self {
        self.0.objective = Some(objective);
        self
    }

    #[must_use]
    pub fn location(mut self, location: Option<String>) -> Self {
        self.0.location = Some(location);
        self
    }

    #[must_use]
    pub const fn status(mut self, status: SessionStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub fn responsible_user_id(mut self, responsible_user_id: Option<String>) -> Self {
        self.0.responsible_user_id = Some(responsible_user_id);
        self
    }

    #[must_use]
    pub fn build(self) -> SessionUpdate {
        self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionTaskUpdate {
    #[serde(default, deserialize_with = "crate::updates::nullable", skip_serializing_if = "Option::is_none")]
    pub task_id: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
    #[serde(default, deserialize_with = "crate::updates::nullable", skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<Option<u32>>,
    #[serde(default, deserialize_with = "crate::updates::nullable", skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttendanceUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AttendanceStatus>,
    #[serde(default, deserialize_with = "crate::updates::nullable", skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
}

/// Changing either input recomputes the derived `load`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlayerLoadUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpe: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
}
