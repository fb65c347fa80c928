//! Batch upsert resolution.
//!
//! Tracker screens (attendance, load, match stats) edit many child records at
//! once and save them together. Each item either carries the identity of a
//! record already in the slot (replace in place) or not (create and append).
//! Resolution runs over an in-memory copy of the slot; the caller writes the
//! result back once, so the whole batch lands in a single store.
//!
//! This is a sparse upsert: records absent from the batch are left alone.

use std::collections::HashSet;

use crate::error::StoreError;
use crate::ids::{IdGenerator, mint_unique};
use crate::record::Record;
use crate::tenant::WriteContext;

/// One batch item: a draft plus the identity it targets, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upsert<D> {
    pub id: Option<String>,
    pub draft: D,
}

impl<D> Upsert<D> {
    /// Item without identity: always creates.
    pub const fn new(draft: D) -> Self {
        Self { id: None, draft }
    }

    /// Item targeting `id`: replaces it when present, creates otherwise.
    pub fn existing(id: impl Into<String>, draft: D) -> Self {
        Self {
            id: Some(id.into()),
            draft,
        }
    }

    /// Item whose identity may be absent (e.g. a tracker row not saved yet).
    pub const fn with_id(id: Option<String>, draft: D) -> Self {
        Self { id, draft }
    }
}

/// What happened to one batch item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Created,
    Updated,
}

/// Resolves batch items against a working copy of a slot.
pub struct Resolver<'a, T: Record> {
    records: &'a mut Vec<T>,
    taken: HashSet<String>,
    ids: &'a dyn IdGenerator,
    ctx: &'a WriteContext,
}

impl<'a, T: Record> Resolver<'a, T> {
    pub fn new(records: &'a mut Vec<T>, ids: &'a dyn IdGenerator, ctx: &'a WriteContext) -> Self {
        let taken = records.iter().map(|r| r.id().to_string()).collect();
        Self {
            records,
            taken,
            ids,
            ctx,
        }
    }

    /// Resolve one item, mutating the working copy.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::IdGeneration` if a fresh identity cannot be minted.
    pub fn resolve(&mut self, item: Upsert<T::Draft>) -> Result<(T, Resolution), StoreError> {
        let Upsert { id, draft } = item;

        // Join records are keyed by their pair, whatever id the caller sent.
        let target = if let Some(key) = T::natural_key(&draft) {
            if let Some(id) = id.filter(|id| *id != key) {
                tracing::warn!(kind = %T::KIND, %id, %key, "batch item id disagrees with its pair, keying on the pair");
            }
            Some(key)
        } else {
            match id {
                Some(id) if self.position(&id).is_some() => Some(id),
                Some(id) => {
                    tracing::warn!(kind = %T::KIND, %id, "batch item targets unknown identity, creating");
                    None
                }
                None => None,
            }
        };

        if let Some(pos) = target.as_deref().and_then(|id| self.position(id)) {
            let record = &mut self.records[pos];
            record.replace(draft, self.ctx);
            return Ok((record.clone(), Resolution::Updated));
        }

        let id = match target {
            Some(key) => {
                self.taken.insert(key.clone());
                key
            }
            None => mint_unique(self.ids, T::KIND.prefix(), &mut self.taken)?,
        };
        let record = T::build(id, draft, self.ctx);
        self.records.push(record.clone());
        Ok((record, Resolution::Created))
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }
}

/// Resolve every item in order. Results line up with the input.
///
/// # Errors
///
/// Returns `StoreError::IdGeneration` if a fresh identity cannot be minted.
/// The working copy may then be partially modified; callers discard it.
pub fn resolve_batch<T: Record>(
    records: &mut Vec<T>,
    items: Vec<Upsert<T::Draft>>,
    ids: &dyn IdGenerator,
    ctx: &WriteContext,
) -> Result<Vec<(T, Resolution)>, StoreError> {
    let mut resolver = Resolver::new(records, ids, ctx);
    items
        .into_iter()
        .map(|item| resolver.resolve(item))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drafts::library::NewTaskMaterial;
    use crate::drafts::session::{NewAttendance, NewSession};
    use crate::ids::SequentialIds;
    use academy_core::entities::{Attendance, Session, TaskMaterial};
    use academy_core::enums::{AttendanceStatus, SessionStatus};
    use academy_core::ids::composite_id;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn ctx() -> WriteContext {
        WriteContext::new("club-test", None)
    }

    fn mark(player: &str, status: AttendanceStatus) -> NewAttendance {
        NewAttendance {
            session_id: "ses-1".into(),
            player_id: player.into(),
            status: Some(status),
            notes: None,
        }
    }

    fn existing() -> Vec<Attendance> {
        vec![Attendance {
            id: "atd-existing".into(),
            session_id: "ses-1".into(),
            player_id: "ply-1".into(),
            status: AttendanceStatus::Present,
            notes: None,
        }]
    }

    #[test]
    fn mixed_batch_updates_and_creates() {
        let mut records = existing();
        let ids = SequentialIds::new();
        let resolved = resolve_batch(
            &mut records,
            vec![
                Upsert::existing("atd-existing", mark("ply-1", AttendanceStatus::Late)),
                Upsert::new(mark("ply-2", AttendanceStatus::Absent)),
                Upsert::new(mark("ply-3", AttendanceStatus::Present)),
            ],
            &ids,
            &ctx(),
        )
        .unwrap();

        let resolutions: Vec<_> = resolved.iter().map(|(_, r)| *r).collect();
        assert_eq!(
            resolutions,
            vec![Resolution::Updated, Resolution::Created, Resolution::Created]
        );
        assert_eq!(resolved[0].0.id, "atd-existing");
        assert_eq!(resolved[0].0.status, AttendanceStatus::Late);
        assert_ne!(resolved[1].0.id, resolved[2].0.id);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].status, AttendanceStatus::Late);
    }

    #[test]
    fn unknown_identity_is_created_with_fresh_id() {
        let mut records = existing();
        let ids = SequentialIds::new();
        let resolved = resolve_batch(
            &mut records,
            vec![Upsert::existing("atd-ghost", mark("ply-9", AttendanceStatus::Absent))],
            &ids,
            &ctx(),
        )
        .unwrap();
        assert_eq!(resolved[0].1, Resolution::Created);
        assert_ne!(resolved[0].0.id, "atd-ghost");
        assert!(resolved[0].0.id.starts_with("atd-"));
    }

    #[test]
    fn replacement_keeps_position() {
        let mut records = existing();
        records.push(Attendance {
            id: "atd-second".into(),
            ..records[0].clone()
        });
        let ids = SequentialIds::new();
        resolve_batch(
            &mut records,
            vec![Upsert::existing("atd-existing", mark("ply-1", AttendanceStatus::Excused))],
            &ids,
            &ctx(),
        )
        .unwrap();
        assert_eq!(records[0].id, "atd-existing");
        assert_eq!(records[0].status, AttendanceStatus::Excused);
        assert_eq!(records[1].id, "atd-second");
    }

    #[test]
    fn minted_ids_avoid_existing_ones() {
        let mut records = existing();
        records[0].id = "atd-00000001".into();
        let ids = SequentialIds::new();
        let resolved = resolve_batch(
            &mut records,
            vec![Upsert::new(mark("ply-2", AttendanceStatus::Present))],
            &ids,
            &ctx(),
        )
        .unwrap();
        assert_eq!(resolved[0].0.id, "atd-00000002");
    }

    #[test]
    fn replacement_keeps_fields_the_draft_omits() {
        let mut records = existing();
        records[0].status = AttendanceStatus::Late;
        records[0].notes = Some("lesion".into());
        let ids = SequentialIds::new();

        let resolved = resolve_batch(
            &mut records,
            vec![Upsert::existing(
                "atd-existing",
                NewAttendance {
                    session_id: "ses-1".into(),
                    player_id: "ply-1".into(),
                    status: None,
                    notes: None,
                },
            )],
            &ids,
            &ctx(),
        )
        .unwrap();

        assert_eq!(resolved[0].1, Resolution::Updated);
        assert_eq!(records[0].status, AttendanceStatus::Late);
        assert_eq!(records[0].notes.as_deref(), Some("lesion"));
    }

    #[test]
    fn replacement_keeps_status_and_author() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        let author = WriteContext::new("club-test", Some("usr-original".into()));
        let mut stored = Session::build("ses-1".into(), NewSession::new("tem-1", date), &author);
        stored.status = SessionStatus::Completed;
        let mut records = vec![stored];

        let editor = WriteContext::new("club-test", Some("usr-test".into()));
        let ids = SequentialIds::new();
        let draft = NewSession {
            objective: Some("Pressing alto".into()),
            ..NewSession::new("tem-1", date)
        };
        resolve_batch(&mut records, vec![Upsert::existing("ses-1", draft)], &ids, &editor).unwrap();

        assert_eq!(records[0].status, SessionStatus::Completed);
        assert_eq!(records[0].responsible_user_id.as_deref(), Some("usr-original"));
        assert_eq!(records[0].objective.as_deref(), Some("Pressing alto"));
    }

    #[test]
    fn join_records_are_keyed_by_pair_not_caller_id() {
        let pair = |task: &str, material: &str, quantity| NewTaskMaterial {
            task_id: task.into(),
            material_id: material.into(),
            quantity,
        };
        let mut records = vec![TaskMaterial::build(
            composite_id("ltk-1", "mat-a"),
            pair("ltk-1", "mat-a", 4),
            &ctx(),
        )];
        let ids = SequentialIds::new();

        let moved = resolve_batch(
            &mut records,
            vec![Upsert::existing(composite_id("ltk-1", "mat-a"), pair("ltk-2", "mat-b", 3))],
            &ids,
            &ctx(),
        )
        .unwrap();
        assert_eq!(moved[0].1, Resolution::Created);
        assert_eq!(moved[0].0.id, composite_id("ltk-2", "mat-b"));

        let again = resolve_batch(&mut records, vec![Upsert::new(pair("ltk-2", "mat-b", 5))], &ids, &ctx())
            .unwrap();
        assert_eq!(again[0].1, Resolution::Updated);

        assert_eq!(records.len(), 2);
        for record in &records {
            assert_eq!(record.id, composite_id(&record.task_id, &record.material_id));
        }
        assert_eq!(records[0].quantity, 4);
        assert_eq!(records[1].quantity, 5);
    }
}
