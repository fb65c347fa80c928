//! Cascade deletion.
//!
//! There is no general foreign-key engine. Each parent kind has a hand-written
//! list of `(child kind, reference field)` rules; deleting a parent removes
//! every child record whose reference equals the parent's identity.
//!
//! Cascades are one level deep (never transitive) and have no rollback: a
//! failure part-way leaves earlier removals in place.

use academy_core::enums::{CascadePolicy, EntityKind, ForeignKey};
use serde::Serialize;
use tracing::info;

use crate::error::StoreError;
use crate::store::ErasedStore;

/// Deleting a `parent` removes `child` records whose `via` field matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CascadeRule {
    pub parent: EntityKind,
    pub child: EntityKind,
    pub via: ForeignKey,
}

const fn rule(parent: EntityKind, child: EntityKind, via: ForeignKey) -> CascadeRule {
    CascadeRule { parent, child, via }
}

/// Cascades the console has always performed.
const LEGACY_RULES: &[CascadeRule] = &[
    rule(EntityKind::Session, EntityKind::SessionTask, ForeignKey::SessionId),
    rule(EntityKind::Session, EntityKind::Attendance, ForeignKey::SessionId),
    rule(EntityKind::Session, EntityKind::PlayerLoad, ForeignKey::SessionId),
    rule(EntityKind::Evaluation, EntityKind::EvaluationDetail, ForeignKey::EvaluationId),
    rule(EntityKind::LibraryTask, EntityKind::TaskMaterial, ForeignKey::TaskId),
];

/// Legacy cascades plus every child that is meaningless without its parent.
///
/// Players under a team and matches under a competition are independent
/// records and keep a dangling reference instead.
const OWNED_RULES: &[CascadeRule] = &[
    rule(EntityKind::Session, EntityKind::SessionTask, ForeignKey::SessionId),
    rule(EntityKind::Session, EntityKind::Attendance, ForeignKey::SessionId),
    rule(EntityKind::Session, EntityKind::PlayerLoad, ForeignKey::SessionId),
    rule(EntityKind::Session, EntityKind::Lineup, ForeignKey::SessionId),
    rule(EntityKind::Evaluation, EntityKind::EvaluationDetail, ForeignKey::EvaluationId),
    rule(EntityKind::LibraryTask, EntityKind::TaskMaterial, ForeignKey::TaskId),
    rule(EntityKind::Match, EntityKind::PlayerMatchStats, ForeignKey::MatchId),
    rule(EntityKind::Match, EntityKind::MatchEvent, ForeignKey::MatchId),
    rule(EntityKind::Match, EntityKind::Lineup, ForeignKey::MatchId),
];

/// Resolves an entity kind to its store at runtime.
pub trait StoreRegistry: Sync {
    fn store(&self, kind: EntityKind) -> &dyn ErasedStore;
}

/// Records removed from one child store by a cascade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChildRemoval {
    pub kind: EntityKind,
    pub via: ForeignKey,
    pub count: usize,
}

/// Outcome of [`CascadeCoordinator::delete_with_cascade`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CascadeReport {
    pub parent: EntityKind,
    pub parent_id: String,
    /// `false` when the parent was already gone (children are still purged).
    pub parent_removed: bool,
    pub children: Vec<ChildRemoval>,
}

impl CascadeReport {
    /// Records removed from the `kind` store.
    #[must_use]
    pub fn removed(&self, kind: EntityKind) -> usize {
        self.children
            .iter()
            .filter(|c| c.kind == kind)
            .map(|c| c.count)
            .sum()
    }

    /// Child records removed across all stores.
    #[must_use]
    pub fn children_removed(&self) -> usize {
        self.children.iter().map(|c| c.count).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CascadeCoordinator {
    policy: CascadePolicy,
}

impl CascadeCoordinator {
    #[must_use]
    pub const fn new(policy: CascadePolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub const fn policy(&self) -> CascadePolicy {
        self.policy
    }

    #[must_use]
    pub const fn rules(&self) -> &'static [CascadeRule] {
        match self.policy {
            CascadePolicy::Legacy => LEGACY_RULES,
            CascadePolicy::Owned => OWNED_RULES,
        }
    }

    /// Rules triggered by deleting a `parent`.
    pub fn dependents_of(&self, parent: EntityKind) -> impl Iterator<Item = &'static CascadeRule> {
        self.rules().iter().filter(move |r| r.parent == parent)
    }

    /// Delete the parent record, then every registered child referencing it.
    ///
    /// # Errors
    ///
    /// Returns the first `StoreError` from the backend. Removals that already
    /// happened are not undone.
    pub async fn delete_with_cascade(
        &self,
        registry: &dyn StoreRegistry,
        parent: EntityKind,
        parent_id: &str,
    ) -> Result<CascadeReport, StoreError> {
        let parent_store = registry.store(parent);
        parent_store.latency().settle().await;
        self.apply(registry, parent, parent_id)
    }

    /// Synchronous body of [`Self::delete_with_cascade`], without latency.
    ///
    /// # Errors
    ///
    /// Returns the first `StoreError` from the backend.
    pub fn apply(
        &self,
        registry: &dyn StoreRegistry,
        parent: EntityKind,
        parent_id: &str,
    ) -> Result<CascadeReport, StoreError> {
        let parent_removed = registry.store(parent).remove(parent_id)?;

        let mut children = Vec::new();
        for rule in self.dependents_of(parent) {
            let count = registry.store(rule.child).purge(rule.via, parent_id)?;
            children.push(ChildRemoval {
                kind: rule.child,
                via: rule.via,
                count,
            });
        }

        let report = CascadeReport {
            parent,
            parent_id: parent_id.to_string(),
            parent_removed,
            children,
        };
        if report.children_removed() > 0 || parent_removed {
            info!(
                %parent,
                parent_id,
                parent_removed,
                children = report.children_removed(),
                policy = %self.policy,
                "cascade delete"
            );
        }
        Ok(report)
    }
}
