use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use academy_core::enums::EvaluationStatus;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewAttribute {
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    /// Defaults to `true`.
    #[serde(default)]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewEvaluation {
    pub player_id: String,
    pub date: NaiveDate,
    /// Defaults to the current user.
    #[serde(default)]
    pub evaluator_user_id: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    /// Defaults to `Borrador`.
    #[serde(default)]
    pub status: Option<EvaluationStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewEvaluationDetail {
    pub evaluation_id: String,
    pub attribute_id: String,
    pub score: u8,
    #[serde(default)]
    pub comment: Option<String>,
}
