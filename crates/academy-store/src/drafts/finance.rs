use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use academy_core::enums::DueStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewDue {
    pub player_id: String,
    pub concept: String,
    pub amount_cents: i64,
    pub due_date: NaiveDate,
    /// Defaults to `Pendiente`.
    #[serde(default)]
    pub status: Option<DueStatus>,
}
