//! Entity structs for every academy record family.
//!
//! Each struct maps to one durable-collection slot (see `EntityKind::slot`).
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation.

mod access;
mod competition;
mod evaluation;
mod finance;
mod library;
mod player;
mod position;
mod session;
mod team;

pub use access::{Role, User};
pub use competition::{Competition, Lineup, LineupTemplate, Match, MatchEvent, PlayerMatchStats};
pub use evaluation::{Attribute, Evaluation, EvaluationDetail};
pub use finance::Due;
pub use library::{LibraryTask, Material, TaskMaterial, TaskType};
pub use player::Player;
pub use position::Position;
pub use session::{Attendance, PlayerLoad, Session, SessionTask};
pub use team::Team;
