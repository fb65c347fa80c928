//! Tenant and current-user defaults stamped onto new records.

use serde::{Deserialize, Serialize};

fn default_club_id() -> String {
    "club-default".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TenantConfig {
    /// Tenant identifier written to every tenant-scoped record.
    #[serde(default = "default_club_id")]
    pub club_id: String,

    /// User applied as `created_by_user_id` / `responsible_user_id` when the
    /// caller does not supply one.
    #[serde(default)]
    pub default_user_id: Option<String>,
}

impl Default for TenantConfig {
    fn default() -> Self {
        Self {
            club_id: default_club_id(),
            default_user_id: None,
        }
    }
}
