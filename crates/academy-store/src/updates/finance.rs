use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use academy_core::enums::DueStatus;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DueUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concept: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_cents: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DueStatus>,
    #[serde(default, deserialize_with = "crate::updates::nullable", skip_serializing_if = "Option::is_none")]
    pub paid_on: Option<Option<NaiveDate>>,
}
