use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::DueStatus;

/// Membership fee owed by a player. Amounts are in cents.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Due {
    pub id: String,
    pub club_id: String,
    pub player_id: String,
    pub concept: String,
    pub amount_cents: i64,
    pub due_date: NaiveDate,
    pub status: DueStatus,
    pub paid_on: Option<NaiveDate>,
}
