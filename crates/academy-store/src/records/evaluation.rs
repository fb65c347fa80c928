use academy_core::entities::{Attribute, Evaluation, EvaluationDetail};
use academy_core::enums::{EntityKind, ForeignKey};

use crate::drafts::evaluation::{NewAttribute, NewEvaluation, NewEvaluationDetail};
use crate::record::Record;
use crate::seed;
use crate::tenant::WriteContext;
use crate::updates::{assign, fill};
use crate::updates::evaluation::{AttributeUpdate, EvaluationDetailUpdate, EvaluationUpdate};

impl Record for Attribute {
    type Draft = NewAttribute;
    type Patch = AttributeUpdate;

    const KIND: EntityKind = EntityKind::Attribute;

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, draft: NewAttribute, ctx: &WriteContext) -> Self {
        Self {
            id,
            club_id: ctx.club_id.clone(),
            name: draft.name,
            category: draft.category,
            is_active: draft.is_active.unwrap_or(true),
        }
    }

    fn replace(&mut self, draft: NewAttribute, ctx: &WriteContext) {
        self.club_id.clone_from(&ctx.club_id);
        self.name = draft.name;
        fill(&mut self.category, draft.category);
        assign(&mut self.is_active, draft.is_active);
    }

    fn apply(&mut self, patch: AttributeUpdate) {
        assign(&mut self.name, patch.name);
        assign(&mut self.category, patch.category);
        assign(&mut self.is_active, patch.is_active);
    }

    fn seed(ctx: &WriteContext) -> Vec<Self> {
        seed::attributes(ctx)
    }
}

impl Record for Evaluation {
    type Draft = NewEvaluation;
    type Patch = EvaluationUpdate;

    const KIND: EntityKind = EntityKind::Evaluation;

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, draft: NewEvaluation, ctx: &WriteContext) -> Self {
        Self {
            id,
            club_id: ctx.club_id.clone(),
            player_id: draft.player_id,
            evaluator_user_id: ctx.user_or(draft.evaluator_user_id),
            date: draft.date,
            notes: draft.notes,
            status: draft.status.unwrap_or_default(),
        }
    }

    fn replace(&mut self, draft: NewEvaluation, ctx: &WriteContext) {
        self.club_id.clone_from(&ctx.club_id);
        self.player_id = draft.player_id;
        self.date = draft.date;
        fill(&mut self.evaluator_user_id, draft.evaluator_user_id);
        fill(&mut self.notes, draft.notes);
        assign(&mut self.status, draft.status);
    }

    fn apply(&mut self, patch: EvaluationUpdate) {
        assign(&mut self.date, patch.date);
        assign(&mut self.evaluator_user_id, patch.evaluator_user_id);
        assign(&mut self.notes, patch.notes);
        assign(&mut self.status, patch.status);
    }

    fn reference(&self, via: ForeignKey) -> Option<&str> {
        match via {
            ForeignKey::PlayerId => Some(&self.player_id),
            _ => None,
        }
    }
}

impl Record for EvaluationDetail {
    type Draft = NewEvaluationDetail;
    type Patch = EvaluationDetailUpdate;

    const KIND: EntityKind = EntityKind::EvaluationDetail;

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, draft: NewEvaluationDetail, _ctx: &WriteContext) -> Self {
        Self {
            id,
            evaluation_id: draft.evaluation_id,
            attribute_id: draft.attribute_id,
            score: draft.score,
            comment: draft.comment,
        }
    }

    fn replace(&mut self, draft: NewEvaluationDetail, _ctx: &WriteContext) {
        self.evaluation_id = draft.evaluation_id;
        self.attribute_id = draft.attribute_id;
        self.score = draft.score;
        fill(&mut self.comment, draft.comment);
    }

    fn apply(&mut self, patch: EvaluationDetailUpdate) {
        assign(&mut self.score, patch.score);
        assign(&mut self.comment, patch.comment);
    }

    fn reference(&self, via: ForeignKey) -> Option<&str> {
        match via {
            ForeignKey::EvaluationId => Some(&self.evaluation_id),
            ForeignKey::AttributeId => Some(&self.attribute_id),
            _ => None,
        }
    }
}
