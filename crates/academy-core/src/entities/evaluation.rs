use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::EvaluationStatus;

/// Scored skill (technique, vision, speed, ...).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Attribute {
    pub id: String,
    pub club_id: String,
    pub name: String,
    pub category: Option<String>,
    pub is_active: bool,
}

/// A coach's evaluation of one player on one date.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Evaluation {
    pub id: String,
    pub club_id: String,
    pub player_id: String,
    pub evaluator_user_id: Option<String>,
    pub date: NaiveDate,
    pub notes: Option<String>,
    pub status: EvaluationStatus,
}

/// Score for one attribute within an evaluation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EvaluationDetail {
    pub id: String,
    pub evaluation_id: String,
    pub attribute_id: String,
    pub score: u8,
    pub comment: Option<String>,
}
