//! Command handlers.

use academy_config::{AcademyConfig, Backend};
use academy_store::AcademyService;
use academy_store::cascade::CascadeCoordinator;
use anyhow::Context;
use serde::Serialize;

use crate::cli::{Commands, GlobalFlags};
use crate::output::output;

/// Load layered configuration and apply command-line overrides.
pub fn load_config(flags: &GlobalFlags, command: &Commands) -> anyhow::Result<AcademyConfig> {
    let mut config = AcademyConfig::load_with_dotenv()?;

    if let Some(dir) = &flags.data_dir {
        config.store.backend = Backend::Jsonl;
        config.store.data_dir.clone_from(dir);
    }
    if let Some(club) = &flags.club {
        config.tenant.club_id.clone_from(club);
    }
    match command {
        Commands::Seed => config.store.seed_on_first_access = true,
        Commands::Delete {
            cascade: Some(policy),
            ..
        } => config.store.cascade = *policy,
        _ => {}
    }

    config.validate()?;
    tracing::debug!(
        backend = ?config.store.backend,
        data_dir = %config.store.data_dir.display(),
        cascade = %config.store.cascade,
        club = %config.tenant.club_id,
        "resolved configuration"
    );
    Ok(config)
}

/// Dispatch a parsed command to its handler.
pub async fn dispatch(
    command: Commands,
    config: &AcademyConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Rules { policy } => {
            let coordinator = CascadeCoordinator::new(policy.unwrap_or(config.store.cascade));
            output(&coordinator.rules(), flags.format)
        }
        Commands::Seed | Commands::Counts => {
            let counts = open(config)?.counts().await?;
            output(&counts, flags.format)
        }
        Commands::List { kind } => {
            let records = open(config)?.list_values(kind).await?;
            output(&records, flags.format)
        }
        Commands::Get { kind, id } => {
            let record = open(config)?
                .get_value(kind, &id)
                .await?
                .with_context(|| format!("{kind} not found: {id}"))?;
            output(&record, flags.format)
        }
        Commands::Delete { kind, id, .. } => {
            tracing::debug!(%kind, %id, policy = %config.store.cascade, "deleting with cascade");
            let report = open(config)?.delete(kind, &id).await?;
            output(&DeleteResponse::from(report), flags.format)
        }
    }
}

fn open(config: &AcademyConfig) -> anyhow::Result<AcademyService> {
    AcademyService::open(config).context("failed to open academy stores")
}

#[derive(Debug, Serialize)]
struct DeleteResponse {
    kind: String,
    id: String,
    deleted: bool,
    children_removed: usize,
    children: Vec<ChildCount>,
}

#[derive(Debug, Serialize)]
struct ChildCount {
    kind: String,
    via: String,
    count: usize,
}

impl From<academy_store::cascade::CascadeReport> for DeleteResponse {
    fn from(report: academy_store::cascade::CascadeReport) -> Self {
        Self {
            kind: report.parent.to_string(),
            id: report.parent_id.clone(),
            deleted: report.parent_removed,
            children_removed: report.children_removed(),
            children: report
                .children
                .iter()
                .map(|c| ChildCount {
                    kind: c.kind.to_string(),
                    via: c.via.to_string(),
                    count: c.count,
                })
                .collect(),
        }
    }
}
