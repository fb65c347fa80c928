use academy_core::entities::Team;
use academy_core::enums::EntityKind;

use crate::drafts::team::NewTeam;
use crate::record::Record;
use crate::seed;
use crate::tenant::WriteContext;
use crate::updates::{assign, fill};
use crate::updates::team::TeamUpdate;

impl Record for Team {
    type Draft = NewTeam;
    type Patch = TeamUpdate;

    const KIND: EntityKind = EntityKind::Team;

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, draft: NewTeam, ctx: &WriteContext) -> Self {
        Self {
            id,
            club_id: ctx.club_id.clone(),
            name: draft.name,
            category: draft.category,
            season: draft.season,
            coach_user_id: draft.coach_user_id,
            is_active: draft.is_active.unwrap_or(true),
        }
    }

    fn replace(&mut self, draft: NewTeam, ctx: &WriteContext) {
        self.club_id.clone_from(&ctx.club_id);
        self.name = draft.name;
        fill(&mut self.category, draft.category);
        fill(&mut self.season, draft.season);
        fill(&mut self.coach_user_id, draft.coach_user_id);
        assign(&mut self.is_active, draft.is_active);
    }

    fn apply(&mut self, patch: TeamUpdate) {
        assign(&mut self.name, patch.name);
        assign(&mut self.category, patch.category);
        assign(&mut self.season, patch.season);
        assign(&mut self.coach_user_id, patch.coach_user_id);
        assign(&mut self.is_active, patch.is_active);
    }

    fn seed(ctx: &WriteContext) -> Vec<Self> {
        seed::teams(ctx)
    }
}
