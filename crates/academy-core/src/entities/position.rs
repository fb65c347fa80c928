use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Playing position catalogue entry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Position {
    pub id: String,
    pub club_id: String,
    pub name: String,
    pub abbreviation: String,
}
