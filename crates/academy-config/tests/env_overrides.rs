use academy_config::{AcademyConfig, Backend, IdStrategy};
use academy_core::enums::CascadePolicy;
use figment::Jail;

#[test]
fn env_overrides_store_values() {
    Jail::expect_with(|jail| {
        jail.set_env("ACADEMY_STORE__LATENCY_MS", "0");
        jail.set_env("ACADEMY_STORE__CASCADE", "legacy");
        jail.set_env("ACADEMY_STORE__IDS", "sequential");
        jail.set_env("ACADEMY_TENANT__CLUB_ID", "club-norte");

        let config = AcademyConfig::load().expect("config loads");
        assert_eq!(config.store.latency_ms, 0);
        assert_eq!(config.store.cascade, CascadePolicy::Legacy);
        assert_eq!(config.store.ids, IdStrategy::Sequential);
        assert_eq!(config.tenant.club_id, "club-norte");
        Ok(())
    });
}

#[test]
fn project_toml_is_layered_under_env() {
    Jail::expect_with(|jail| {
        jail.create_dir(".academy")?;
        jail.create_file(
            ".academy/config.toml",
            r#"
            [store]
            backend = "jsonl"
            data_dir = "data"
            latency_ms = 50

            [tenant]
            default_user_id = "usr-coach"
            "#,
        )?;
        jail.set_env("ACADEMY_STORE__LATENCY_MS", "5");

        let config = AcademyConfig::load().expect("config loads");
        assert_eq!(config.store.backend, Backend::Jsonl);
        assert_eq!(config.store.data_dir.to_str(), Some("data"));
        assert_eq!(config.store.latency_ms, 5);
        assert_eq!(config.tenant.default_user_id.as_deref(), Some("usr-coach"));
        Ok(())
    });
}

#[test]
fn invalid_club_id_fails_load() {
    Jail::expect_with(|jail| {
        jail.set_env("ACADEMY_TENANT__CLUB_ID", "");
        assert!(AcademyConfig::load().is_err());
        Ok(())
    });
}
