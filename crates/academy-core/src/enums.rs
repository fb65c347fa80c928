//! Status enums, entity kinds, and foreign-key names.
//!
//! Status enums serialize with the Spanish labels the academy console shows
//! (`"Planificada"`, `"Presente"`, ...). `EntityKind` and `ForeignKey` use
//! `snake_case`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ids;

// ---------------------------------------------------------------------------
// SessionStatus
// ---------------------------------------------------------------------------

/// Lifecycle of a training session.
///
/// ```text
/// planificada → completada
///             → cancelada
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
pub enum SessionStatus {
    #[default]
    #[serde(rename = "Planificada")]
    Planned,
    #[serde(rename = "Completada")]
    Completed,
    #[serde(rename = "Cancelada")]
    Cancelled,
}

impl SessionStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Planned => "Planificada",
            Self::Completed => "Completada",
            Self::Cancelled => "Cancelada",
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AttendanceStatus
// ---------------------------------------------------------------------------

/// Attendance mark for one player at one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
pub enum AttendanceStatus {
    #[default]
    #[serde(rename = "Presente")]
    Present,
    #[serde(rename = "Ausente")]
    Absent,
    #[serde(rename = "Justificado")]
    Excused,
    #[serde(rename = "Tarde")]
    Late,
}

impl AttendanceStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Present => "Presente",
            Self::Absent => "Ausente",
            Self::Excused => "Justificado",
            Self::Late => "Tarde",
        }
    }

    /// Whether the player took part in the session (counts toward load).
    #[must_use]
    pub const fn attended(self) -> bool {
        matches!(self, Self::Present | Self::Late)
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EvaluationStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
pub enum EvaluationStatus {
    #[default]
    #[serde(rename = "Borrador")]
    Draft,
    #[serde(rename = "Completada")]
    Completed,
}

impl EvaluationStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "Borrador",
            Self::Completed => "Completada",
        }
    }
}

impl fmt::Display for EvaluationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MatchStatus
// ---------------------------------------------------------------------------

/// Status of a match.
///
/// ```text
/// programado → jugado
///            → suspendido
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
pub enum MatchStatus {
    #[default]
    #[serde(rename = "Programado")]
    Scheduled,
    #[serde(rename = "Jugado")]
    Played,
    #[serde(rename = "Suspendido")]
    Suspended,
}

impl MatchStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "Programado",
            Self::Played => "Jugado",
            Self::Suspended => "Suspendido",
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Venue
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
pub enum Venue {
    #[default]
    #[serde(rename = "Local")]
    Home,
    #[serde(rename = "Visitante")]
    Away,
}

impl Venue {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "Local",
            Self::Away => "Visitante",
        }
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MatchEventType
// ---------------------------------------------------------------------------

/// Kind of in-match event recorded by the match tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum MatchEventType {
    #[serde(rename = "Gol")]
    Goal,
    #[serde(rename = "Asistencia")]
    Assist,
    #[serde(rename = "TarjetaAmarilla")]
    YellowCard,
    #[serde(rename = "TarjetaRoja")]
    RedCard,
    #[serde(rename = "Cambio")]
    Substitution,
    #[serde(rename = "Lesion")]
    Injury,
}

impl MatchEventType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Goal => "Gol",
            Self::Assist => "Asistencia",
            Self::YellowCard => "TarjetaAmarilla",
            Self::RedCard => "TarjetaRoja",
            Self::Substitution => "Cambio",
            Self::Injury => "Lesion",
        }
    }
}

impl fmt::Display for MatchEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DueStatus
// ---------------------------------------------------------------------------

/// Payment state of a membership due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
pub enum DueStatus {
    #[default]
    #[serde(rename = "Pendiente")]
    Pending,
    #[serde(rename = "Pagado")]
    Paid,
    #[serde(rename = "Vencido")]
    Overdue,
}

impl DueStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pendiente",
            Self::Paid => "Pagado",
            Self::Overdue => "Vencido",
        }
    }
}

impl fmt::Display for DueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EntityKind
// ---------------------------------------------------------------------------

/// Every entity family held by the record store.
///
/// Each kind owns exactly one durable-collection slot (`slot()`) and one
/// identity prefix (`prefix()`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Team,
    Position,
    Player,
    TaskType,
    Material,
    LibraryTask,
    TaskMaterial,
    Attribute,
    Evaluation,
    EvaluationDetail,
    Session,
    SessionTask,
    Attendance,
    PlayerLoad,
    Competition,
    Match,
    PlayerMatchStats,
    MatchEvent,
    LineupTemplate,
    Lineup,
    Due,
    User,
    Role,
}

impl EntityKind {
    pub const ALL: [Self; 23] = [
        Self::Team,
        Self::Position,
        Self::Player,
        Self::TaskType,
        Self::Material,
        Self::LibraryTask,
        Self::TaskMaterial,
        Self::Attribute,
        Self::Evaluation,
        Self::EvaluationDetail,
        Self::Session,
        Self::SessionTask,
        Self::Attendance,
        Self::PlayerLoad,
        Self::Competition,
        Self::Match,
        Self::PlayerMatchStats,
        Self::MatchEvent,
        Self::LineupTemplate,
        Self::Lineup,
        Self::Due,
        Self::User,
        Self::Role,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Team => "team",
            Self::Position => "position",
            Self::Player => "player",
            Self::TaskType => "task_type",
            Self::Material => "material",
            Self::LibraryTask => "library_task",
            Self::TaskMaterial => "task_material",
            Self::Attribute => "attribute",
            Self::Evaluation => "evaluation",
            Self::EvaluationDetail => "evaluation_detail",
            Self::Session => "session",
            Self::SessionTask => "session_task",
            Self::Attendance => "attendance",
            Self::PlayerLoad => "player_load",
            Self::Competition => "competition",
            Self::Match => "match",
            Self::PlayerMatchStats => "player_match_stats",
            Self::MatchEvent => "match_event",
            Self::LineupTemplate => "lineup_template",
            Self::Lineup => "lineup",
            Self::Due => "due",
            Self::User => "user",
            Self::Role => "role",
        }
    }

    /// Name of the durable-collection slot backing this kind.
    ///
    /// Uses exhaustive match so adding a kind forces choosing a slot.
    #[must_use]
    pub const fn slot(self) -> &'static str {
        match self {
            Self::Team => "teams",
            Self::Position => "positions",
            Self::Player => "players",
            Self::TaskType => "task_types",
            Self::Material => "materials",
            Self::LibraryTask => "library_tasks",
            Self::TaskMaterial => "task_materials",
            Self::Attribute => "attributes",
            Self::Evaluation => "evaluations",
            Self::EvaluationDetail => "evaluation_details",
            Self::Session => "sessions",
            Self::SessionTask => "session_tasks",
            Self::Attendance => "attendance",
            Self::PlayerLoad => "player_loads",
            Self::Competition => "competitions",
            Self::Match => "matches",
            Self::PlayerMatchStats => "player_match_stats",
            Self::MatchEvent => "match_events",
            Self::LineupTemplate => "lineup_templates",
            Self::Lineup => "lineups",
            Self::Due => "dues",
            Self::User => "users",
            Self::Role => "roles",
        }
    }

    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Team => ids::PREFIX_TEAM,
            Self::Position => ids::PREFIX_POSITION,
            Self::Player => ids::PREFIX_PLAYER,
            Self::TaskType => ids::PREFIX_TASK_TYPE,
            Self::Material => ids::PREFIX_MATERIAL,
            Self::LibraryTask => ids::PREFIX_LIBRARY_TASK,
            Self::TaskMaterial => ids::PREFIX_TASK_MATERIAL,
            Self::Attribute => ids::PREFIX_ATTRIBUTE,
            Self::Evaluation => ids::PREFIX_EVALUATION,
            Self::EvaluationDetail => ids::PREFIX_EVALUATION_DETAIL,
            Self::Session => ids::PREFIX_SESSION,
            Self::SessionTask => ids::PREFIX_SESSION_TASK,
            Self::Attendance => ids::PREFIX_ATTENDANCE,
            Self::PlayerLoad => ids::PREFIX_PLAYER_LOAD,
            Self::Competition => ids::PREFIX_COMPETITION,
            Self::Match => ids::PREFIX_MATCH,
            Self::PlayerMatchStats => ids::PREFIX_PLAYER_MATCH_STATS,
            Self::MatchEvent => ids::PREFIX_MATCH_EVENT,
            Self::LineupTemplate => ids::PREFIX_LINEUP_TEMPLATE,
            Self::Lineup => ids::PREFIX_LINEUP,
            Self::Due => ids::PREFIX_DUE,
            Self::User => ids::PREFIX_USER,
            Self::Role => ids::PREFIX_ROLE,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = String;

    /// Accepts either the kind name (`"session_task"`) or its slot (`"session_tasks"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == needle || kind.slot() == needle)
            .ok_or_else(|| format!("unknown entity kind '{s}'"))
    }
}

// ---------------------------------------------------------------------------
// ForeignKey
// ---------------------------------------------------------------------------

/// Identity-valued reference fields that point into another store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ForeignKey {
    TeamId,
    PlayerId,
    PositionId,
    SessionId,
    EvaluationId,
    AttributeId,
    TaskId,
    MaterialId,
    TaskTypeId,
    CompetitionId,
    MatchId,
    RoleId,
}

impl ForeignKey {
    /// Field name as stored on the child record.
    #[must_use]
    pub const fn field(self) -> &'static str {
        match self {
            Self::TeamId => "team_id",
            Self::PlayerId => "player_id",
            Self::PositionId => "position_id",
            Self::SessionId => "session_id",
            Self::EvaluationId => "evaluation_id",
            Self::AttributeId => "attribute_id",
            Self::TaskId => "task_id",
            Self::MaterialId => "material_id",
            Self::TaskTypeId => "task_type_id",
            Self::CompetitionId => "competition_id",
            Self::MatchId => "match_id",
            Self::RoleId => "role_id",
        }
    }
}

impl fmt::Display for ForeignKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field())
    }
}

// ---------------------------------------------------------------------------
// CascadePolicy
// ---------------------------------------------------------------------------

/// Which parent deletions remove dependent child records.
///
/// `Legacy` reproduces the console's historical cascades (sessions,
/// evaluations, library tasks). `Owned` additionally cascades every child that
/// has no meaning without its parent (match stats, events, lineups).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CascadePolicy {
    Legacy,
    #[default]
    Owned,
}

impl CascadePolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Owned => "owned",
        }
    }
}

impl fmt::Display for CascadePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CascadePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "owned" => Ok(Self::Owned),
            _ => Err(format!("unknown cascade policy '{s}' (expected legacy or owned)")),
        }
    }
}
