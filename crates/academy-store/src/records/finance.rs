use academy_core::entities::Due;
use academy_core::enums::{DueStatus, EntityKind, ForeignKey};

use crate::drafts::finance::NewDue;
use crate::record::Record;
use crate::tenant::WriteContext;
use crate::updates::assign;
use crate::updates::finance::DueUpdate;

impl Record for Due {
    type Draft = NewDue;
    type Patch = DueUpdate;

    const KIND: EntityKind = EntityKind::Due;

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, draft: NewDue, ctx: &WriteContext) -> Self {
        Self {
            id,
            club_id: ctx.club_id.clone(),
            player_id: draft.player_id,
            concept: draft.concept,
            amount_cents: draft.amount_cents,
            due_date: draft.due_date,
            status: draft.status.unwrap_or(DueStatus::Pending),
            paid_on: None,
        }
    }

    fn replace(&mut self, draft: NewDue, ctx: &WriteContext) {
        self.club_id.clone_from(&ctx.club_id);
        self.player_id = draft.player_id;
        self.concept = draft.concept;
        self.amount_cents = draft.amount_cents;
        self.due_date = draft.due_date;
        assign(&mut self.status, draft.status);
    }

    fn apply(&mut self, patch: DueUpdate) {
        assign(&mut self.concept, patch.concept);
        assign(&mut self.amount_cents, patch.amount_cents);
        assign(&mut self.due_date, patch.due_date);
        assign(&mut self.status, patch.status);
        assign(&mut self.paid_on, patch.paid_on);
    }

    fn reference(&self, via: ForeignKey) -> Option<&str> {
        match via {
            ForeignKey::PlayerId => Some(&self.player_id),
            _ => None,
        }
    }
}
