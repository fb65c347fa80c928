use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Category of a training task (warm-up, rondo, finishing, ...).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TaskType {
    pub id: String,
    pub club_id: String,
    pub name: String,
    pub color: Option<String>,
}

/// Training equipment held by the academy.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Material {
    pub id: String,
    pub club_id: String,
    pub name: String,
    pub stock: u32,
}

/// Reusable exercise in the task library.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LibraryTask {
    pub id: String,
    pub club_id: String,
    pub title: String,
    pub description: Option<String>,
    pub task_type_id: Option<String>,
    pub duration_minutes: Option<u32>,
    pub min_players: Option<u32>,
    pub max_players: Option<u32>,
    pub created_by_user_id: Option<String>,
}

/// Join record: material needed by a library task.
///
/// Identified by the `(task_id, material_id)` pair; `id` is the composite
/// `"{task_id}:{material_id}"`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TaskMaterial {
    pub id: String,
    pub task_id: String,
    pub material_id: String,
    pub quantity: u32,
}
