//! Typed partial updates.
//!
//! Each update struct has `Option` fields; only `Some` fields are merged into
//! the stored record. Nullable fields use `Option<Option<_>>`, where
//! `Some(None)` (JSON `null`) clears the value and an absent key leaves it.
//! Unknown keys are rejected.

use serde::{Deserialize, Deserializer};

pub mod access;
pub mod competition;
pub mod evaluation;
pub mod finance;
pub mod library;
pub mod roster;
pub mod session;
pub mod team;

/// Deserialize a present key (including `null`) as `Some(..)`.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Overwrite `slot` when the patch carries a value.
pub(crate) fn assign<V>(slot: &mut V, value: Option<V>) {
    if let Some(value) = value {
        *slot = value;
    }
}

/// Set an optional field when the draft supplies a value; `None` keeps it.
pub(crate) fn fill<V>(slot: &mut Option<V>, value: Option<V>) {
    if value.is_some() {
        *slot = value;
    }
}

#[cfg(test)]
mod tests {
    use super::team::TeamUpdate;
    use pretty_assertions::assert_eq;

    #[test]
    fn null_clears_and_absent_keeps() {
        let update: TeamUpdate = serde_json::from_str(r#"{"category": null}"#).unwrap();
        assert_eq!(update.category, Some(None));
        assert_eq!(update.season, None);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = serde_json::from_str::<TeamUpdate>(r#"{"colour": "red"}"#).unwrap_err();
        assert!(err.to_string().contains("unknown field"));
    }

    #[test]
    fn serializes_changed_fields_only() {
        let update = super::team::TeamUpdateBuilder::new()
            .name("Sub-17")
            .coach_user_id(None)
            .build();
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Sub-17", "coach_user_id": null}));
    }

    #[test]
    fn assign_only_overwrites_some() {
        let mut value = 3;
        super::assign(&mut value, None);
        assert_eq!(value, 3);
        super::assign(&mut value, Some(7));
        assert_eq!(value, 7);
    }

    #[test]
    fn fill_never_clears() {
        let mut notes = Some("lesion".to_string());
        super::fill(&mut notes, None);
        assert_eq!(notes.as_deref(), Some("lesion"));
        super::fill(&mut notes, Some("ok".into()));
        assert_eq!(notes.as_deref(), Some("ok"));
    }
}
