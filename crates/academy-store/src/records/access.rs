use academy_core::entities::{Role, User};
use academy_core::enums::{EntityKind, ForeignKey};

use crate::drafts::access::{NewRole, NewUser};
use crate::record::Record;
use crate::seed;
use crate::tenant::WriteContext;
use crate::updates::access::{RoleUpdate, UserUpdate};
use crate::updates::{assign, fill};

impl Record for User {
    type Draft = NewUser;
    type Patch = UserUpdate;

    const KIND: EntityKind = EntityKind::User;

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, draft: NewUser, ctx: &WriteContext) -> Self {
        Self {
            id,
            club_id: ctx.club_id.clone(),
            name: draft.name,
            email: draft.email,
            role_id: draft.role_id,
            is_active: draft.is_active.unwrap_or(true),
        }
    }

    fn replace(&mut self, draft: NewUser, ctx: &WriteContext) {
        self.club_id.clone_from(&ctx.club_id);
        self.name = draft.name;
        self.email = draft.email;
        fill(&mut self.role_id, draft.role_id);
        assign(&mut self.is_active, draft.is_active);
    }

    fn apply(&mut self, patch: UserUpdate) {
        assign(&mut self.name, patch.name);
        assign(&mut self.email, patch.email);
        assign(&mut self.role_id, patch.role_id);
        assign(&mut self.is_active, patch.is_active);
    }

    fn reference(&self, via: ForeignKey) -> Option<&str> {
        match via {
            ForeignKey::RoleId => self.role_id.as_deref(),
            _ => None,
        }
    }

    fn seed(ctx: &WriteContext) -> Vec<Self> {
        seed::users(ctx)
    }
}

/// Roles are global: they carry no tenant field.
impl Record for Role {
    type Draft = NewRole;
    type Patch = RoleUpdate;

    const KIND: EntityKind = EntityKind::Role;

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, draft: NewRole, _ctx: &WriteContext) -> Self {
        Self {
            id,
            name: draft.name,
            permissions: draft.permissions,
        }
    }

    fn replace(&mut self, draft: NewRole, _ctx: &WriteContext) {
        self.name = draft.name;
        self.permissions = draft.permissions;
    }

    fn apply(&mut self, patch: RoleUpdate) {
        assign(&mut self.name, patch.name);
        assign(&mut self.permissions, patch.permissions);
    }

    fn seed(_ctx: &WriteContext) -> Vec<Self> {
        seed::roles()
    }
}
