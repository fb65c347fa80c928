//! Identity generation.
//!
//! Generators only propose candidates; [`mint_unique`] is what guarantees an
//! identity is fresh, by rejecting anything already present in the slot or
//! already minted earlier in the same call.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::StoreError;

/// Source of candidate identities.
pub trait IdGenerator: Send + Sync {
    /// Propose an identity for a record of the family with `prefix`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::IdGeneration` if no candidate can be produced.
    fn next_id(&self, prefix: &str) -> Result<String, StoreError>;
}

/// `"{prefix}-{8 hex}"` from OS randomness.
#[derive(Debug, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&self, prefix: &str) -> Result<String, StoreError> {
        let mut bytes = [0u8; 4];
        getrandom::fill(&mut bytes).map_err(|e| StoreError::IdGeneration(e.to_string()))?;
        let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
        Ok(format!("{prefix}-{hex}"))
    }
}

/// `"{prefix}-{n:08}"` from a monotonic counter shared by all prefixes.
#[derive(Debug)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    #[must_use]
    pub const fn new() -> Self {
        Self::starting_at(1)
    }

    #[must_use]
    pub const fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self, prefix: &str) -> Result<String, StoreError> {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        Ok(format!("{prefix}-{n:08}"))
    }
}

/// Mint an identity not contained in `taken`, and record it there.
///
/// Gives up after `taken.len() + 64` candidates, which a monotonic generator can
/// never exhaust.
///
/// # Errors
///
/// Returns `StoreError::IdGeneration` if the generator fails or keeps
/// proposing identities that are already taken.
pub fn mint_unique(
    ids: &dyn IdGenerator,
    prefix: &str,
    taken: &mut HashSet<String>,
) -> Result<String, StoreError> {
    let attempts = taken.len() + 64;
    for _ in 0..attempts {
        let candidate = ids.next_id(prefix)?;
        if taken.insert(candidate.clone()) {
            return Ok(candidate);
        }
        tracing::debug!(%candidate, "identity collision, drawing again");
    }
    Err(StoreError::IdGeneration(format!(
        "no free '{prefix}' identity after {attempts} attempts"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Constant;

    impl IdGenerator for Constant {
        fn next_id(&self, prefix: &str) -> Result<String, StoreError> {
            Ok(format!("{prefix}-same"))
        }
    }

    #[test]
    fn random_ids_have_prefix_and_hex_suffix() {
        let id = RandomIds.next_id("ses").unwrap();
        assert!(id.starts_with("ses-"), "{id}");
        assert_eq!(id.len(), 12, "3 prefix + 1 dash + 8 hex: {id}");
        assert!(id[4..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn sequential_ids_are_monotonic() {
        let ids = SequentialIds::new();
        assert_eq!(ids.next_id("ply").unwrap(), "ply-00000001");
        assert_eq!(ids.next_id("tem").unwrap(), "tem-00000002");
        assert_eq!(ids.next_id("ply").unwrap(), "ply-00000003");
    }

    #[test]
    fn mint_unique_skips_taken_identities() {
        let ids = SequentialIds::new();
        let mut taken: HashSet<String> = ["atd-00000001", "atd-00000002"]
            .into_iter()
            .map(String::from)
            .collect();
        let id = mint_unique(&ids, "atd", &mut taken).unwrap();
        assert_eq!(id, "atd-00000003");
        assert!(taken.contains(&id));
    }

    #[test]
    fn mint_unique_never_repeats_within_a_batch() {
        let ids = RandomIds;
        let mut taken = HashSet::new();
        for _ in 0..500 {
            mint_unique(&ids, "pld", &mut taken).unwrap();
        }
        assert_eq!(taken.len(), 500);
    }

    #[test]
    fn mint_unique_gives_up_on_stuck_generator() {
        let mut taken = HashSet::new();
        assert_eq!(mint_unique(&Constant, "x", &mut taken).unwrap(), "x-same");
        let err = mint_unique(&Constant, "x", &mut taken).unwrap_err();
        assert!(matches!(err, StoreError::IdGeneration(_)));
    }
}
