//! `Record` implementations for every entity family.
//!
//! Each impl names the family's kind, builds records from drafts with the
//! store-assigned defaults, merges typed updates, and exposes the reference
//! fields the cascade coordinator and the repos filter on.

mod access;
mod competition;
mod evaluation;
mod finance;
mod library;
mod roster;
mod session;
mod team;

pub use session::session_load;
