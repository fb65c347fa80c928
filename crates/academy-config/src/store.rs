//! Record-store configuration: backend, latency, seeding, cascades, ids.

use std::path::PathBuf;
use std::time::Duration;

use academy_core::enums::CascadePolicy;
use serde::{Deserialize, Serialize};

/// Where durable collections keep their records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    /// Process-local; lost on exit.
    #[default]
    Memory,
    /// One `<slot>.jsonl` file per entity family under `data_dir`.
    Jsonl,
}

/// How store identities are minted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// `prefix-` followed by 8 random hex chars.
    #[default]
    Random,
    /// `prefix-` followed by a zero-padded process-wide counter.
    Sequential,
}

/// Default simulated latency, in milliseconds.
const fn default_latency_ms() -> u64 {
    300
}

const fn default_seed() -> bool {
    true
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map_or_else(|| PathBuf::from(".academy/data"), |p| p.join("academy"))
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: Backend,

    /// Directory for JSONL slot files. Ignored by the memory backend.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Fixed delay applied before every store operation completes.
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,

    /// Seed fixed catalogues into slots that have never been written.
    #[serde(default = "default_seed")]
    pub seed_on_first_access: bool,

    #[serde(default)]
    pub cascade: CascadePolicy,

    #[serde(default)]
    pub ids: IdStrategy,
}

impl StoreConfig {
    #[must_use]
    pub const fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    /// Configuration for tests: memory backend, no latency, no seed data.
    #[must_use]
    pub fn ephemeral() -> Self {
        Self {
            backend: Backend::Memory,
            latency_ms: 0,
            seed_on_first_access: false,
            ids: IdStrategy::Sequential,
            ..Self::default()
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            data_dir: default_data_dir(),
            latency_ms: default_latency_ms(),
            seed_on_first_access: default_seed(),
            cascade: CascadePolicy::default(),
            ids: IdStrategy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = StoreConfig::default();
        assert_eq!(config.backend, Backend::Memory);
        assert_eq!(config.latency_ms, 300);
        assert_eq!(config.latency(), Duration::from_millis(300));
        assert!(config.seed_on_first_access);
        assert_eq!(config.cascade, CascadePolicy::Owned);
        assert_eq!(config.ids, IdStrategy::Random);
    }

    #[test]
    fn ephemeral_disables_latency_and_seeding() {
        let config = StoreConfig::ephemeral();
        assert_eq!(config.latency(), Duration::ZERO);
        assert!(!config.seed_on_first_access);
        assert_eq!(config.ids, IdStrategy::Sequential);
    }
}
