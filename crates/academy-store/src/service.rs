//! Service facade owning one record store per entity family.
//!
//! `AcademyService` is built once from configuration. Every store shares the
//! same identity generator, latency, and tenant. Family-specific operations
//! (tracker saves, lineup replacement, cascading deletes) are implemented as
//! `impl AcademyService` blocks under `repos/`.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use academy_config::{AcademyConfig, Backend, IdStrategy, StoreConfig};
use academy_core::entities::{
    Attendance, Attribute, Competition, Due, Evaluation, EvaluationDetail, LibraryTask, Lineup,
    LineupTemplate, Match, MatchEvent, Material, Player, PlayerLoad, PlayerMatchStats, Position,
    Role, Session, SessionTask, TaskMaterial, TaskType, Team, User,
};
use academy_core::enums::EntityKind;
use tracing::info;

use crate::cascade::{CascadeCoordinator, CascadeReport, StoreRegistry};
use crate::collection::{Collection, JsonlCollection, MemoryCollection};
use crate::error::StoreError;
use crate::ids::{IdGenerator, RandomIds, SequentialIds};
use crate::latency::Latency;
use crate::record::Record;
use crate::store::{ErasedStore, RecordStore};
use crate::tenant::{CurrentUser, SessionUser, Tenant};

/// Builds one store per family with the shared collaborators.
struct StoreFactory<'a> {
    config: &'a StoreConfig,
    ids: Arc<dyn IdGenerator>,
    latency: Latency,
    tenant: Arc<Tenant>,
}

impl StoreFactory<'_> {
    fn collection<T: Record>(&self) -> Box<dyn Collection<T>> {
        let slot = T::KIND.slot();
        match self.config.backend {
            Backend::Memory => Box::new(MemoryCollection::new(slot)),
            Backend::Jsonl => Box::new(JsonlCollection::new(&self.config.data_dir, slot)),
        }
    }

    fn build<T: Record>(&self) -> RecordStore<T> {
        RecordStore::new(
            self.collection(),
            Arc::clone(&self.ids),
            self.latency,
            Arc::clone(&self.tenant),
            self.config.seed_on_first_access,
        )
    }
}

/// One store per entity family.
pub struct Stores {
    teams: RecordStore<Team>,
    positions: RecordStore<Position>,
    players: RecordStore<Player>,
    task_types: RecordStore<TaskType>,
    materials: RecordStore<Material>,
    library_tasks: RecordStore<LibraryTask>,
    task_materials: RecordStore<TaskMaterial>,
    attributes: RecordStore<Attribute>,
    evaluations: RecordStore<Evaluation>,
    evaluation_details: RecordStore<EvaluationDetail>,
    sessions: RecordStore<Session>,
    session_tasks: RecordStore<SessionTask>,
    attendance: RecordStore<Attendance>,
    player_loads: RecordStore<PlayerLoad>,
    competitions: RecordStore<Competition>,
    matches: RecordStore<Match>,
    player_match_stats: RecordStore<PlayerMatchStats>,
    match_events: RecordStore<MatchEvent>,
    lineup_templates: RecordStore<LineupTemplate>,
    lineups: RecordStore<Lineup>,
    dues: RecordStore<Due>,
    users: RecordStore<User>,
    roles: RecordStore<Role>,
}

impl Stores {
    fn build(factory: &StoreFactory<'_>) -> Self {
        Self {
            teams: factory.build(),
            positions: factory.build(),
            players: factory.build(),
            task_types: factory.build(),
            materials: factory.build(),
            library_tasks: factory.build(),
            task_materials: factory.build(),
            attributes: factory.build(),
            evaluations: factory.build(),
            evaluation_details: factory.build(),
            sessions: factory.build(),
            session_tasks: factory.build(),
            attendance: factory.build(),
            player_loads: factory.build(),
            competitions: factory.build(),
            matches: factory.build(),
            player_match_stats: factory.build(),
            match_events: factory.build(),
            lineup_templates: factory.build(),
            lineups: factory.build(),
            dues: factory.build(),
            users: factory.build(),
            roles: factory.build(),
        }
    }
}

impl StoreRegistry for Stores {
    fn store(&self, kind: EntityKind) -> &dyn ErasedStore {
        match kind {
            EntityKind::Team => &self.teams,
            EntityKind::Position => &self.positions,
            EntityKind::Player => &self.players,
            EntityKind::TaskType => &self.task_types,
            EntityKind::Material => &self.materials,
            EntityKind::LibraryTask => &self.library_tasks,
            EntityKind::TaskMaterial => &self.task_materials,
            EntityKind::Attribute => &self.attributes,
            EntityKind::Evaluation => &self.evaluations,
            EntityKind::EvaluationDetail => &self.evaluation_details,
            EntityKind::Session => &self.sessions,
            EntityKind::SessionTask => &self.session_tasks,
            EntityKind::Attendance => &self.attendance,
            EntityKind::PlayerLoad => &self.player_loads,
            EntityKind::Competition => &self.competitions,
            EntityKind::Match => &self.matches,
            EntityKind::PlayerMatchStats => &self.player_match_stats,
            EntityKind::MatchEvent => &self.match_events,
            EntityKind::LineupTemplate => &self.lineup_templates,
            EntityKind::Lineup => &self.lineups,
            EntityKind::Due => &self.dues,
            EntityKind::User => &self.users,
            EntityKind::Role => &self.roles,
        }
    }
}

/// Entry point for the console: owns every store and the cascade rules.
pub struct AcademyService {
    stores: Stores,
    cascade: CascadeCoordinator,
    tenant: Arc<Tenant>,
    latency: Latency,
}

impl AcademyService {
    /// Open the stores described by `config`, with the configured default
    /// user as current user.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Collection` if the JSONL data directory cannot be
    /// created.
    pub fn open(config: &AcademyConfig) -> Result<Self, StoreError> {
        let user = Arc::new(SessionUser::new(config.tenant.default_user_id.clone()));
        Self::with_user(config, user)
    }

    /// Open the stores with an externally managed current user.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Collection` if the JSONL data directory cannot be
    /// created.
    pub fn with_user(config: &AcademyConfig, user: Arc<dyn CurrentUser>) -> Result<Self, StoreError> {
        let store_config = &config.store;
        if store_config.backend == Backend::Jsonl {
            ensure_dir(&store_config.data_dir)?;
        }

        let ids: Arc<dyn IdGenerator> = match store_config.ids {
            IdStrategy::Random => Arc::new(RandomIds),
            IdStrategy::Sequential => Arc::new(SequentialIds::new()),
        };
        let latency = Latency::fixed(store_config.latency());
        let tenant = Arc::new(Tenant::new(config.tenant.club_id.clone(), user));

        let factory = StoreFactory {
            config: store_config,
            ids,
            latency,
            tenant: Arc::clone(&tenant),
        };
        let stores = Stores::build(&factory);

        info!(
            backend = ?store_config.backend,
            club_id = tenant.club_id(),
            cascade = %store_config.cascade,
            latency_ms = store_config.latency_ms,
            "academy stores opened"
        );

        Ok(Self {
            stores,
            cascade: CascadeCoordinator::new(store_config.cascade),
            tenant,
            latency,
        })
    }

    #[must_use]
    pub fn tenant(&self) -> &Tenant {
        &self.tenant
    }

    #[must_use]
    pub const fn cascade(&self) -> &CascadeCoordinator {
        &self.cascade
    }

    /// Kind-erased access to every store.
    #[must_use]
    pub const fn registry(&self) -> &Stores {
        &self.stores
    }

    // -- per-family stores --------------------------------------------------

    #[must_use]
    pub const fn teams(&self) -> &RecordStore<Team> {
        &self.stores.teams
    }

    #[must_use]
    pub const fn positions(&self) -> &RecordStore<Position> {
        &self.stores.positions
    }

    #[must_use]
    pub const fn players(&self) -> &RecordStore<Player> {
        &self.stores.players
    }

    #[must_use]
    pub const fn task_types(&self) -> &RecordStore<TaskType> {
        &self.stores.task_types
    }

    #[must_use]
    pub const fn materials(&self) -> &RecordStore<Material> {
        &self.stores.materials
    }

    #[must_use]
    pub const fn library_tasks(&self) -> &RecordStore<LibraryTask> {
        &self.stores.library_tasks
    }

    #[must_use]
    pub const fn task_materials_store(&self) -> &RecordStore<TaskMaterial> {
        &self.stores.task_materials
    }

    #[must_use]
    pub const fn attributes(&self) -> &RecordStore<Attribute> {
        &self.stores.attributes
    }

    #[must_use]
    pub const fn evaluations(&self) -> &RecordStore<Evaluation> {
        &self.stores.evaluations
    }

    #[must_use]
    pub const fn evaluation_details_store(&self) -> &RecordStore<EvaluationDetail> {
        &self.stores.evaluation_details
    }

    #[must_use]
    pub const fn sessions(&self) -> &RecordStore<Session> {
        &self.stores.sessions
    }

    #[must_use]
    pub const fn session_tasks(&self) -> &RecordStore<SessionTask> {
        &self.stores.session_tasks
    }

    #[must_use]
    pub const fn attendance(&self) -> &RecordStore<Attendance> {
        &self.stores.attendance
    }

    #[must_use]
    pub const fn player_loads(&self) -> &RecordStore<PlayerLoad> {
        &self.stores.player_loads
    }

    #[must_use]
    pub const fn competitions(&self) -> &RecordStore<Competition> {
        &self.stores.competitions
    }

    #[must_use]
    pub const fn matches(&self) -> &RecordStore<Match> {
        &self.stores.matches
    }

    #[must_use]
    pub const fn player_match_stats(&self) -> &RecordStore<PlayerMatchStats> {
        &self.stores.player_match_stats
    }

    #[must_use]
    pub const fn match_events_store(&self) -> &RecordStore<MatchEvent> {
        &self.stores.match_events
    }

    #[must_use]
    pub const fn lineup_templates(&self) -> &RecordStore<LineupTemplate> {
        &self.stores.lineup_templates
    }

    #[must_use]
    pub const fn lineups(&self) -> &RecordStore<Lineup> {
        &self.stores.lineups
    }

    #[must_use]
    pub const fn dues(&self) -> &RecordStore<Due> {
        &self.stores.dues
    }

    #[must_use]
    pub const fn users(&self) -> &RecordStore<User> {
        &self.stores.users
    }

    #[must_use]
    pub const fn roles(&self) -> &RecordStore<Role> {
        &self.stores.roles
    }

    // -- kind-erased operations ---------------------------------------------

    /// Delete a record of any kind, cascading to its dependents under the
    /// configured policy. Missing identities are a no-op.
    ///
    /// # Errors
    ///
    /// Returns the first `StoreError` from a backend; earlier removals stay.
    pub async fn delete(&self, kind: EntityKind, id: &str) -> Result<CascadeReport, StoreError> {
        self.cascade
            .delete_with_cascade(&self.stores, kind, id)
            .await
    }

    /// Every record of `kind` as JSON, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend fails or a record cannot be encoded.
    pub async fn list_values(&self, kind: EntityKind) -> Result<Vec<serde_json::Value>, StoreError> {
        let store = self.stores.store(kind);
        store.latency().settle().await;
        store.values()
    }

    /// # Errors
    ///
    /// Returns `StoreError` if the backend fails or the record cannot be encoded.
    pub async fn get_value(
        &self,
        kind: EntityKind,
        id: &str,
    ) -> Result<Option<serde_json::Value>, StoreError> {
        let store = self.stores.store(kind);
        store.latency().settle().await;
        store.value(id)
    }

    /// Record count per kind. Touches every slot, so never-written slots are
    /// seeded when seeding is enabled.
    ///
    /// # Errors
    ///
    /// Returns the first backend `StoreError`.
    pub async fn counts(&self) -> Result<BTreeMap<EntityKind, usize>, StoreError> {
        self.latency.settle().await;
        EntityKind::ALL
            .iter()
            .map(|&kind| Ok((kind, self.stores.store(kind).count()?)))
            .collect()
    }
}

fn ensure_dir(dir: &Path) -> Result<(), StoreError> {
    std::fs::create_dir_all(dir).map_err(|source| StoreError::Collection {
        slot: dir.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{test_config, test_service};
    use pretty_assertions::assert_eq;

    #[test]
    fn registry_maps_every_kind_to_its_own_store() {
        let svc = test_service();
        for kind in EntityKind::ALL {
            assert_eq!(svc.registry().store(kind).kind(), kind);
        }
    }

    #[tokio::test]
    async fn counts_cover_every_kind() {
        let svc = test_service();
        let counts = svc.counts().await.unwrap();
        assert_eq!(counts.len(), 23);
        assert!(counts.values().all(|&n| n == 0));
    }

    #[tokio::test]
    async fn counts_seed_when_enabled() {
        let mut config = test_config();
        config.store.seed_on_first_access = true;
        let svc = AcademyService::open(&config).unwrap();
        let counts = svc.counts().await.unwrap();
        assert!(counts[&EntityKind::Team] > 0);
        assert!(counts[&EntityKind::Role] > 0);
        assert_eq!(counts[&EntityKind::Session], 0);
    }

    #[tokio::test]
    async fn configured_default_user_is_current_user() {
        let mut config = test_config();
        config.tenant.default_user_id = Some("usr-coach".into());
        let svc = AcademyService::open(&config).unwrap();
        assert_eq!(svc.tenant().write_context().user_id.as_deref(), Some("usr-coach"));
    }

    #[tokio::test]
    async fn jsonl_backend_creates_data_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut config = test_config();
        config.store.backend = Backend::Jsonl;
        config.store.data_dir = dir.path().join("nested").join("data");
        let svc = AcademyService::open(&config).unwrap();
        assert!(config.store.data_dir.is_dir());
        svc.counts().await.unwrap();
    }
}
