//! Initial datasets written to never-written slots.
//!
//! Identities are fixed so that seeded references (a user's role, a
//! competition's team) resolve across slots regardless of the id generator.

use academy_core::entities::{
    Attribute, Competition, Material, Position, Role, TaskType, Team, User,
};

use crate::tenant::WriteContext;

pub const ADMIN_ROLE_ID: &str = "rol-admin";
pub const COACH_ROLE_ID: &str = "rol-coach";
pub const ADMIN_USER_ID: &str = "usr-admin";
pub const COACH_USER_ID: &str = "usr-coach";
pub const FIRST_TEAM_ID: &str = "tem-sub15a";

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

#[must_use]
pub fn roles() -> Vec<Role> {
    vec![
        Role {
            id: ADMIN_ROLE_ID.into(),
            name: "Administrador".into(),
            permissions: strings(&["*"]),
        },
        Role {
            id: COACH_ROLE_ID.into(),
            name: "Entrenador".into(),
            permissions: strings(&["sessions", "evaluations", "matches", "library"]),
        },
    ]
}

#[must_use]
pub fn users(ctx: &WriteContext) -> Vec<User> {
    vec![
        User {
            id: ADMIN_USER_ID.into(),
            club_id: ctx.club_id.clone(),
            name: "Administración".into(),
            email: "admin@academy.local".into(),
            role_id: Some(ADMIN_ROLE_ID.into()),
            is_active: true,
        },
        User {
            id: COACH_USER_ID.into(),
            club_id: ctx.club_id.clone(),
            name: "Cuerpo técnico".into(),
            email: "coach@academy.local".into(),
            role_id: Some(COACH_ROLE_ID.into()),
            is_active: true,
        },
    ]
}

#[must_use]
pub fn teams(ctx: &WriteContext) -> Vec<Team> {
    [
        (FIRST_TEAM_ID, "Sub-15 A", "Sub-15"),
        ("tem-sub13a", "Sub-13 A", "Sub-13"),
        ("tem-sub11a", "Sub-11 A", "Sub-11"),
    ]
    .into_iter()
    .map(|(id, name, category)| Team {
        id: id.into(),
        club_id: ctx.club_id.clone(),
        name: name.into(),
        category: Some(category.into()),
        season: Some("2024-2025".into()),
        coach_user_id: Some(COACH_USER_ID.into()),
        is_active: true,
    })
    .collect()
}

#[must_use]
pub fn positions(ctx: &WriteContext) -> Vec<Position> {
    [
        ("pos-gk", "Portero", "POR"),
        ("pos-df", "Defensa", "DEF"),
        ("pos-mf", "Centrocampista", "MED"),
        ("pos-fw", "Delantero", "DEL"),
    ]
    .into_iter()
    .map(|(id, name, abbreviation)| Position {
        id: id.into(),
        club_id: ctx.club_id.clone(),
        name: name.into(),
        abbreviation: abbreviation.into(),
    })
    .collect()
}

#[must_use]
pub fn task_types(ctx: &WriteContext) -> Vec<TaskType> {
    [
        ("tty-warmup", "Calentamiento", "#f59e0b"),
        ("tty-technical", "Técnica", "#3b82f6"),
        ("tty-tactical", "Táctica", "#10b981"),
        ("tty-physical", "Físico", "#ef4444"),
        ("tty-game", "Partido reducido", "#8b5cf6"),
    ]
    .into_iter()
    .map(|(id, name, color)| TaskType {
        id: id.into(),
        club_id: ctx.club_id.clone(),
        name: name.into(),
        color: Some(color.into()),
    })
    .collect()
}

#[must_use]
pub fn materials(ctx: &WriteContext) -> Vec<Material> {
    [
        ("mat-balls", "Balones", 30),
        ("mat-cones", "Conos", 60),
        ("mat-bibs", "Petos", 24),
        ("mat-minigoals", "Porterías pequeñas", 4),
    ]
    .into_iter()
    .map(|(id, name, stock)| Material {
        id: id.into(),
        club_id: ctx.club_id.clone(),
        name: name.into(),
        stock,
    })
    .collect()
}

#[must_use]
pub fn attributes(ctx: &WriteContext) -> Vec<Attribute> {
    [
        ("att-passing", "Pase", "Técnica"),
        ("att-control", "Control", "Técnica"),
        ("att-positioning", "Posicionamiento", "Táctica"),
        ("att-speed", "Velocidad", "Física"),
        ("att-attitude", "Actitud", "Psicológica"),
    ]
    .into_iter()
    .map(|(id, name, category)| Attribute {
        id: id.into(),
        club_id: ctx.club_id.clone(),
        name: name.into(),
        category: Some(category.into()),
        is_active: true,
    })
    .collect()
}

#[must_use]
pub fn competitions(ctx: &WriteContext) -> Vec<Competition> {
    vec![
        Competition {
            id: "cmp-league".into(),
            club_id: ctx.club_id.clone(),
            name: "Liga Regional".into(),
            season: Some("2024-2025".into()),
            team_id: Some(FIRST_TEAM_ID.into()),
            is_active: true,
        },
        Competition {
            id: "cmp-friendly".into(),
            club_id: ctx.club_id.clone(),
            name: "Amistosos".into(),
            season: None,
            team_id: None,
            is_active: true,
        },
    ]
}
