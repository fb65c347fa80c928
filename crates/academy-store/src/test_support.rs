//! Shared test utilities for academy-store unit tests.

#[cfg(test)]
pub(crate) mod helpers {
    use academy_config::{AcademyConfig, StoreConfig, TenantConfig};

    use crate::service::AcademyService;

    /// Memory backend, no latency, no seeding, sequential ids.
    pub fn test_config() -> AcademyConfig {
        AcademyConfig {
            store: StoreConfig::ephemeral(),
            tenant: TenantConfig {
                club_id: "club-test".into(),
                default_user_id: Some("usr-test".into()),
            },
        }
    }

    pub fn test_service() -> AcademyService {
        AcademyService::open(&test_config()).unwrap()
    }
}
