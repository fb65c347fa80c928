//! Typed creation inputs.
//!
//! A draft carries everything the caller chooses; identity, tenant, and
//! defaulted status fields are filled by the store. Optional status fields left
//! as `None` get the family's create-time default. Unknown keys are rejected
//! when drafts are deserialized.

pub mod access;
pub mod competition;
pub mod evaluation;
pub mod finance;
pub mod library;
pub mod roster;
pub mod session;
pub mod team;
