//! Player and position updates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlayerUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "crate::updates::nullable", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::updates::nullable", skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "crate::updates::nullable", skip_serializing_if = "Option::is_none")]
    pub team_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::updates::nullable", skip_serializing_if = "Option::is_none")]
    pub position_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::updates::nullable", skip_serializing_if = "Option::is_none")]
    pub shirt_number: Option<Option<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

pub struct PlayerUpdateBuilder(PlayerUpdate);

impl PlayerUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(PlayerUpdate::default())
    }

    #[must_use]
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.0.first_name = Some(first_name.into());
        self
    }

    #[must_use]
    pub fn last_name(mut self, last_name: Option<String>) -> Self {
        self.0.last_name = Some(last_name);
        self
    }

    #[must_use]
    pub const fn birth_date(mut self, birth_date: Option<NaiveDate>) -> Self {
        self.0.birth_date = Some(birth_date);
        self
    }

    /// Move the player to another team, or release them with `None`.
    #[must_use]
    pub fn team_id(mut self, team_id: Option<String>) -> Self {
        self.0.team_id = Some(team_id);
        self
    }

    #[must_use]
    pub fn position_id(mut self, position_id: Option<String>) -> Self {
        self.0.position_id = Some(position_id);
        self
    }

    #[must_use]
    pub const fn shirt_number(mut self, shirt_number: Option<u8>) -> Self {
        self.0.shirt_number = Some(shirt_number);
        self
    }

    #[must_use]
    pub const fn is_active(mut self, is_active: bool) -> Self {
        self.0.is_active = Some(is_active);
        self
    }

    #[must_use]
    pub fn build(self) -> PlayerUpdate {
        self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PositionUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,
}
