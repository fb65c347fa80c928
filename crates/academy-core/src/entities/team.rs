use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A squad within the academy (e.g. "Sub-15 A").
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Team {
    pub id: String,
    pub club_id: String,
    pub name: String,
    pub category: Option<String>,
    pub season: Option<String>,
    pub coach_user_id: Option<String>,
    pub is_active: bool,
}
