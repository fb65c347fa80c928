use academy_core::entities::{LibraryTask, Material, TaskMaterial, TaskType};
use academy_core::enums::{EntityKind, ForeignKey};
use academy_core::ids::composite_id;

use crate::drafts::library::{NewLibraryTask, NewMaterial, NewTaskMaterial, NewTaskType};
use crate::record::Record;
use crate::seed;
use crate::tenant::WriteContext;
use crate::updates::{assign, fill};
use crate::updates::library::{
    LibraryTaskUpdate, MaterialUpdate, TaskMaterialUpdate, TaskTypeUpdate,
};

impl Record for TaskType {
    type Draft = NewTaskType;
    type Patch = TaskTypeUpdate;

    const KIND: EntityKind = EntityKind::TaskType;

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, draft: NewTaskType, ctx: &WriteContext) -> Self {
        Self {
            id,
            club_id: ctx.club_id.clone(),
            name: draft.name,
            color: draft.color,
        }
    }

    fn replace(&mut self, draft: NewTaskType, ctx: &WriteContext) {
        self.club_id.clone_from(&ctx.club_id);
        self.name = draft.name;
        fill(&mut self.color, draft.color);
    }

    fn apply(&mut self, patch: TaskTypeUpdate) {
        assign(&mut self.name, patch.name);
        assign(&mut self.color, patch.color);
    }

    fn seed(ctx: &WriteContext) -> Vec<Self> {
        seed::task_types(ctx)
    }
}

impl Record for Material {
    type Draft = NewMaterial;
    type Patch = MaterialUpdate;

    const KIND: EntityKind = EntityKind::Material;

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, draft: NewMaterial, ctx: &WriteContext) -> Self {
        Self {
            id,
            club_id: ctx.club_id.clone(),
            name: draft.name,
            stock: draft.stock,
        }
    }

    fn replace(&mut self, draft: NewMaterial, ctx: &WriteContext) {
        self.club_id.clone_from(&ctx.club_id);
        self.name = draft.name;
        self.stock = draft.stock;
    }

    fn apply(&mut self, patch: MaterialUpdate) {
        assign(&mut self.name, patch.name);
        assign(&mut self.stock, patch.stock);
    }

    fn seed(ctx: &WriteContext) -> Vec<Self> {
        seed::materials(ctx)
    }
}

impl Record for LibraryTask {
    type Draft = NewLibraryTask;
    type Patch = LibraryTaskUpdate;

    const KIND: EntityKind = EntityKind::LibraryTask;

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, draft: NewLibraryTask, ctx: &WriteContext) -> Self {
        Self {
            id,
            club_id: ctx.club_id.clone(),
            title: draft.title,
            description: draft.description,
            task_type_id: draft.task_type_id,
            duration_minutes: draft.duration_minutes,
            min_players: draft.min_players,
            max_players: draft.max_players,
            created_by_user_id: ctx.user_or(draft.created_by_user_id),
        }
    }

    fn replace(&mut self, draft: NewLibraryTask, ctx: &WriteContext) {
        self.club_id.clone_from(&ctx.club_id);
        self.title = draft.title;
        fill(&mut self.description, draft.description);
        fill(&mut self.task_type_id, draft.task_type_id);
        fill(&mut self.duration_minutes, draft.duration_minutes);
        fill(&mut self.min_players, draft.min_players);
        fill(&mut self.max_players, draft.max_players);
        fill(&mut self.created_by_user_id, draft.created_by_user_id);
    }

    fn apply(&mut self, patch: LibraryTaskUpdate) {
        assign(&mut self.title, patch.title);
        assign(&mut self.description, patch.description);
        assign(&mut self.task_type_id, patch.task_type_id);
        assign(&mut self.duration_minutes, patch.duration_minutes);
        assign(&mut self.min_players, patch.min_players);
        assign(&mut self.max_players, patch.max_players);
    }

    fn reference(&self, via: ForeignKey) -> Option<&str> {
        match via {
            ForeignKey::TaskTypeId => self.task_type_id.as_deref(),
            _ => None,
        }
    }
}

impl Record for TaskMaterial {
    type Draft = NewTaskMaterial;
    type Patch = TaskMaterialUpdate;

    const KIND: EntityKind = EntityKind::TaskMaterial;

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, draft: NewTaskMaterial, _ctx: &WriteContext) -> Self {
        Self {
            id,
            task_id: draft.task_id,
            material_id: draft.material_id,
            quantity: draft.quantity,
        }
    }

    fn replace(&mut self, draft: NewTaskMaterial, _ctx: &WriteContext) {
        self.task_id = draft.task_id;
        self.material_id = draft.material_id;
        self.quantity = draft.quantity;
    }

    fn apply(&mut self, patch: TaskMaterialUpdate) {
        assign(&mut self.quantity, patch.quantity);
    }

    fn reference(&self, via: ForeignKey) -> Option<&str> {
        match via {
            ForeignKey::TaskId => Some(&self.task_id),
            ForeignKey::MaterialId => Some(&self.material_id),
            _ => None,
        }
    }

    fn natural_key(draft: &NewTaskMaterial) -> Option<String> {
        Some(composite_id(&draft.task_id, &draft.material_id))
    }
}
