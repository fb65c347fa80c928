//! Error types for record-store operations.

use academy_core::enums::EntityKind;
use thiserror::Error;

/// Errors from record-store operations.
///
/// Only `NotFound` is expected in normal use; the rest come from the durable
/// backend or the environment.
#[derive(Debug, Error)]
pub enum StoreError {
    /// `update` targeted an identity that is not in the store.
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    /// Reading or writing a durable-collection slot failed.
    #[error("Collection '{slot}' failed: {source}")]
    Collection {
        slot: String,
        #[source]
        source: std::io::Error,
    },

    /// A record could not be encoded as JSON.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No fresh identity could be produced.
    #[error("Identity generation failed: {0}")]
    IdGeneration(String),
}

impl StoreError {
    #[must_use]
    pub fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
