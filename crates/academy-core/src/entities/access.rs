use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Console user (coach, coordinator, admin).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub club_id: String,
    pub name: String,
    pub email: String,
    pub role_id: Option<String>,
    pub is_active: bool,
}

/// Role used for UI-level menu filtering. Not enforced by the store.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Role {
    pub id: String,
    pub name: String,
    pub permissions: Vec<String>,
}
