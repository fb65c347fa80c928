//! The `Record` trait: what a store needs to know about an entity family.

use academy_core::enums::{EntityKind, ForeignKey};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::tenant::WriteContext;

/// An entity type that can live in a [`RecordStore`](crate::store::RecordStore).
///
/// `Draft` is the typed creation input (no identity). `Patch` is the typed
/// partial update: only `Some` fields are applied.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    type Draft: Send;
    type Patch: Send;

    const KIND: EntityKind;

    fn id(&self) -> &str;

    /// Build a full record from a draft, filling store-assigned defaults.
    fn build(id: String, draft: Self::Draft, ctx: &WriteContext) -> Self;

    /// Overwrite this record with a batch item's draft, keeping its identity.
    ///
    /// Required draft fields replace the stored ones. Optional draft fields
    /// (status, author, notes, ...) only replace when `Some`, so a tracker row
    /// that omits them keeps what is stored. The tenant is restamped.
    fn replace(&mut self, draft: Self::Draft, ctx: &WriteContext);

    /// Merge a partial update into this record. Identity never changes.
    fn apply(&mut self, patch: Self::Patch);

    /// Value of the reference field `via`, if this family has one.
    fn reference(&self, via: ForeignKey) -> Option<&str> {
        let _ = via;
        None
    }

    /// Identity derived from the draft itself, for join records that have no
    /// surrogate id. Stores never mint an id for these.
    fn natural_key(draft: &Self::Draft) -> Option<String> {
        let _ = draft;
        None
    }

    /// Initial dataset written on first access to a never-written slot.
    fn seed(ctx: &WriteContext) -> Vec<Self> {
        let _ = ctx;
        Vec::new()
    }

    /// Whether this record points at `parent_id` through `via`.
    fn references(&self, via: ForeignKey, parent_id: &str) -> bool {
        self.reference(via) == Some(parent_id)
    }
}
