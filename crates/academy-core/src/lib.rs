//! # academy-core
//!
//! Core types shared by every academy crate:
//! - Entity structs for all record families (teams, players, sessions, matches, ...)
//! - Status enums with the wire strings used by the console
//! - `EntityKind` (slot names and identity prefixes) and `ForeignKey`
//! - Cascade policy selection

pub mod entities;
pub mod enums;
pub mod ids;
