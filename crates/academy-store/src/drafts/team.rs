use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewTeam {
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub coach_user_id: Option<String>,
    /// Defaults to `true`.
    #[serde(default)]
    pub is_active: Option<bool>,
}
