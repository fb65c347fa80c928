//! Generic identity-keyed record store.
//!
//! One `RecordStore<T>` owns the durable collection for one entity family. Every
//! public operation waits out the simulated latency, reads the slot, applies its
//! change, and writes the slot back. There is no lock across that
//! read-modify-write: two overlapping calls proceed independently.

use std::collections::HashSet;
use std::sync::Arc;

use academy_core::enums::{EntityKind, ForeignKey};
use tracing::{debug, info};

use crate::collection::Collection;
use crate::error::StoreError;
use crate::ids::{IdGenerator, mint_unique};
use crate::latency::Latency;
use crate::record::Record;
use crate::tenant::Tenant;
use crate::upsert::{Resolution, Upsert, resolve_batch};

pub struct RecordStore<T: Record> {
    collection: Box<dyn Collection<T>>,
    ids: Arc<dyn IdGenerator>,
    latency: Latency,
    tenant: Arc<Tenant>,
    seed_on_first_access: bool,
}

impl<T: Record> RecordStore<T> {
    #[must_use]
    pub fn new(
        collection: Box<dyn Collection<T>>,
        ids: Arc<dyn IdGenerator>,
        latency: Latency,
        tenant: Arc<Tenant>,
        seed_on_first_access: bool,
    ) -> Self {
        Self {
            collection,
            ids,
            latency,
            tenant,
            seed_on_first_access,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        T::KIND
    }

    #[must_use]
    pub const fn latency(&self) -> Latency {
        self.latency
    }

    /// All records in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Collection` only if the durable backend fails.
    pub async fn list(&self) -> Result<Vec<T>, StoreError> {
        self.latency.settle().await;
        self.load()
    }

    /// Linear lookup by identity.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Collection` only if the durable backend fails.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<T>, StoreError> {
        self.latency.settle().await;
        Ok(self.load()?.into_iter().find(|r| r.id() == id))
    }

    /// Records whose reference field `via` equals `parent_id`, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Collection` only if the durable backend fails.
    pub async fn find_by(&self, via: ForeignKey, parent_id: &str) -> Result<Vec<T>, StoreError> {
        self.latency.settle().await;
        Ok(self
            .load()?
            .into_iter()
            .filter(|r| r.references(via, parent_id))
            .collect())
    }

    /// Create a record from `draft` with a store-assigned identity and defaults.
    ///
    /// Join records with a natural key replace the existing record for the same
    /// key instead of appending a duplicate.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if no identity can be minted or the backend fails.
    pub async fn create(&self, draft: T::Draft) -> Result<T, StoreError> {
        self.latency.settle().await;
        let mut records = self.load()?;
        let ctx = self.tenant.write_context();

        let record = if let Some(key) = T::natural_key(&draft) {
            let record = T::build(key, draft, &ctx);
            match records.iter_mut().find(|r| r.id() == record.id()) {
                Some(slot) => *slot = record.clone(),
                None => records.push(record.clone()),
            }
            record
        } else {
            let mut taken: HashSet<String> = records.iter().map(|r| r.id().to_string()).collect();
            let id = mint_unique(self.ids.as_ref(), T::KIND.prefix(), &mut taken)?;
            let record = T::build(id, draft, &ctx);
            records.push(record.clone());
            record
        };

        self.collection.store(&records)?;
        debug!(kind = %T::KIND, id = record.id(), "created");
        Ok(record)
    }

    /// Merge `patch` into the record with identity `id`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no record has that identity.
    pub async fn update(&self, id: &str, patch: T::Patch) -> Result<T, StoreError> {
        self.latency.settle().await;
        let mut records = self.load()?;
        let record = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| StoreError::not_found(T::KIND, id))?;
        record.apply(patch);
        let updated = record.clone();

        self.collection.store(&records)?;
        debug!(kind = %T::KIND, id, "updated");
        Ok(updated)
    }

    /// Remove the record with identity `id`. Missing identities are a no-op.
    ///
    /// Returns whether a record was removed. Does not touch dependent stores;
    /// use the service's cascading delete for that.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Collection` only if the durable backend fails.
    pub async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        self.latency.settle().await;
        self.remove_one(id)
    }

    /// Sparse batch upsert: replace items whose identity exists, create the rest.
    ///
    /// Returns the resolved records in input order. Records not named in the
    /// batch are untouched.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if no identity can be minted or the backend fails;
    /// nothing is written in that case.
    pub async fn upsert_many(&self, items: Vec<Upsert<T::Draft>>) -> Result<Vec<T>, StoreError> {
        self.latency.settle().await;
        let mut records = self.load()?;
        let ctx = self.tenant.write_context();
        let resolved = resolve_batch(&mut records, items, self.ids.as_ref(), &ctx)?;
        self.collection.store(&records)?;

        let created = resolved
            .iter()
            .filter(|(_, how)| *how == Resolution::Created)
            .count();
        debug!(
            kind = %T::KIND,
            created,
            updated = resolved.len() - created,
            "batch upserted"
        );
        Ok(resolved.into_iter().map(|(record, _)| record).collect())
    }

    /// Full-replace: drop every record referencing `parent_id` through `via`,
    /// then insert `drafts` as new records.
    ///
    /// Returns the new set as stored, one record per identity.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if no identity can be minted or the backend fails;
    /// nothing is written in that case.
    pub async fn replace_all(
        &self,
        via: ForeignKey,
        parent_id: &str,
        drafts: Vec<T::Draft>,
    ) -> Result<Vec<T>, StoreError> {
        self.latency.settle().await;
        let mut records = self.load()?;
        let before = records.len();
        records.retain(|r| !r.references(via, parent_id));
        let cleared = before - records.len();

        let ctx = self.tenant.write_context();
        let items = drafts.into_iter().map(Upsert::new).collect();
        // Drafts sharing a natural key collapse to one record; report the last.
        let mut inserted: Vec<T> = Vec::new();
        for (record, _) in resolve_batch(&mut records, items, self.ids.as_ref(), &ctx)? {
            match inserted.iter_mut().find(|r| r.id() == record.id()) {
                Some(earlier) => *earlier = record,
                None => inserted.push(record),
            }
        }

        if let Some(stray) = inserted.iter().find(|r| !r.references(via, parent_id)) {
            tracing::warn!(
                kind = %T::KIND,
                id = stray.id(),
                %via,
                parent_id,
                "replacement record does not reference the replaced scope"
            );
        }

        self.collection.store(&records)?;
        debug!(kind = %T::KIND, %via, parent_id, cleared, inserted = inserted.len(), "replaced scope");
        Ok(inserted)
    }

    /// Read the slot, seeding it on first access if enabled.
    pub(crate) fn load(&self) -> Result<Vec<T>, StoreError> {
        if let Some(records) = self.collection.load()? {
            return Ok(records);
        }
        if !self.seed_on_first_access {
            return Ok(Vec::new());
        }

        let seeded = T::seed(&self.tenant.write_context());
        if !seeded.is_empty() {
            self.collection.store(&seeded)?;
            info!(kind = %T::KIND, count = seeded.len(), slot = self.collection.slot(), "seeded slot");
        }
        Ok(seeded)
    }

    pub(crate) fn remove_one(&self, id: &str) -> Result<bool, StoreError> {
        let mut records = self.load()?;
        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() == before {
            debug!(kind = %T::KIND, id, "delete of missing identity ignored");
            return Ok(false);
        }
        self.collection.store(&records)?;
        debug!(kind = %T::KIND, id, "deleted");
        Ok(true)
    }

    /// Remove every record referencing `parent_id` through `via`.
    pub(crate) fn purge_where(&self, via: ForeignKey, parent_id: &str) -> Result<usize, StoreError> {
        let mut records = self.load()?;
        let before = records.len();
        records.retain(|r| !r.references(via, parent_id));
        let removed = before - records.len();
        if removed > 0 {
            self.collection.store(&records)?;
        }
        Ok(removed)
    }
}

// ---------------------------------------------------------------------------
// ErasedStore
// ---------------------------------------------------------------------------

/// Kind-erased view of a store, for operations that pick the store at runtime
/// (cascade deletes, generic listing).
///
/// Methods here are synchronous; callers wait out [`ErasedStore::latency`]
/// themselves.
pub trait ErasedStore: Send + Sync {
    fn kind(&self) -> EntityKind;

    fn latency(&self) -> Latency;

    /// # Errors
    ///
    /// Returns `StoreError::Collection` if the backend fails.
    fn remove(&self, id: &str) -> Result<bool, StoreError>;

    /// # Errors
    ///
    /// Returns `StoreError::Collection` if the backend fails.
    fn purge(&self, via: ForeignKey, parent_id: &str) -> Result<usize, StoreError>;

    /// Every record as JSON, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend fails or a record cannot be encoded.
    fn values(&self) -> Result<Vec<serde_json::Value>, StoreError>;

    /// # Errors
    ///
    /// Returns `StoreError` if the backend fails or the record cannot be encoded.
    fn value(&self, id: &str) -> Result<Option<serde_json::Value>, StoreError>;

    /// # Errors
    ///
    /// Returns `StoreError::Collection` if the backend fails.
    fn count(&self) -> Result<usize, StoreError>;
}

impl<T: Record> ErasedStore for RecordStore<T> {
    fn kind(&self) -> EntityKind {
        T::KIND
    }

    fn latency(&self) -> Latency {
        self.latency
    }

    fn remove(&self, id: &str) -> Result<bool, StoreError> {
        self.remove_one(id)
    }

    fn purge(&self, via: ForeignKey, parent_id: &str) -> Result<usize, StoreError> {
        self.purge_where(via, parent_id)
    }

    fn values(&self) -> Result<Vec<serde_json::Value>, StoreError> {
        self.load()?
            .iter()
            .map(|r| serde_json::to_value(r).map_err(StoreError::from))
            .collect()
    }

    fn value(&self, id: &str) -> Result<Option<serde_json::Value>, StoreError> {
        self.load()?
            .iter()
            .find(|r| r.id() == id)
            .map(serde_json::to_value)
            .transpose()
            .map_err(StoreError::from)
    }

    fn count(&self) -> Result<usize, StoreError> {
        Ok(self.load()?.len())
    }
}
