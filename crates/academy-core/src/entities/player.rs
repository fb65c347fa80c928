use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A registered academy player.
///
/// `team_id` is a plain reference: deleting the team leaves it dangling.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Player {
    pub id: String,
    pub club_id: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub team_id: Option<String>,
    pub position_id: Option<String>,
    pub shirt_number: Option<u8>,
    pub is_active: bool,
}
