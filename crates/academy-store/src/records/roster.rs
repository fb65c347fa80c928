use academy_core::entities::{Player, Position};
use academy_core::enums::{EntityKind, ForeignKey};

use crate::drafts::roster::{NewPlayer, NewPosition};
use crate::record::Record;
use crate::seed;
use crate::tenant::WriteContext;
use crate::updates::{assign, fill};
use crate::updates::roster::{PlayerUpdate, PositionUpdate};

impl Record for Player {
    type Draft = NewPlayer;
    type Patch = PlayerUpdate;

    const KIND: EntityKind = EntityKind::Player;

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, draft: NewPlayer, ctx: &WriteContext) -> Self {
        Self {
            id,
            club_id: ctx.club_id.clone(),
            first_name: draft.first_name,
            last_name: draft.last_name,
            birth_date: draft.birth_date,
            team_id: draft.team_id,
            position_id: draft.position_id,
            shirt_number: draft.shirt_number,
            is_active: draft.is_active.unwrap_or(true),
        }
    }

    fn replace(&mut self, draft: NewPlayer, ctx: &WriteContext) {
        self.club_id.clone_from(&ctx.club_id);
        self.first_name = draft.first_name;
        fill(&mut self.last_name, draft.last_name);
        fill(&mut self.birth_date, draft.birth_date);
        fill(&mut self.team_id, draft.team_id);
        fill(&mut self.position_id, draft.position_id);
        fill(&mut self.shirt_number, draft.shirt_number);
        assign(&mut self.is_active, draft.is_active);
    }

    fn apply(&mut self, patch: PlayerUpdate) {
        assign(&mut self.first_name, patch.first_name);
        assign(&mut self.last_name, patch.last_name);
        assign(&mut self.birth_date, patch.birth_date);
        assign(&mut self.team_id, patch.team_id);
        assign(&mut self.position_id, patch.position_id);
        assign(&mut self.shirt_number, patch.shirt_number);
        assign(&mut self.is_active, patch.is_active);
    }

    fn reference(&self, via: ForeignKey) -> Option<&str> {
        match via {
            ForeignKey::TeamId => self.team_id.as_deref(),
            ForeignKey::PositionId => self.position_id.as_deref(),
            _ => None,
        }
    }
}

impl Record for Position {
    type Draft = NewPosition;
    type Patch = PositionUpdate;

    const KIND: EntityKind = EntityKind::Position;

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, draft: NewPosition, ctx: &WriteContext) -> Self {
        Self {
            id,
            club_id: ctx.club_id.clone(),
            name: draft.name,
            abbreviation: draft.abbreviation,
        }
    }

    fn replace(&mut self, draft: NewPosition, ctx: &WriteContext) {
        self.club_id.clone_from(&ctx.club_id);
        self.name = draft.name;
        self.abbreviation = draft.abbreviation;
    }

    fn apply(&mut self, patch: PositionUpdate) {
        assign(&mut self.name, patch.name);
        assign(&mut self.abbreviation, patch.abbreviation);
    }

    fn seed(ctx: &WriteContext) -> Vec<Self> {
        seed::positions(ctx)
    }
}
