//! Family repositories: operations beyond generic CRUD.
//!
//! Each module adds `impl AcademyService` methods for one area of the console.

pub mod evaluations;
pub mod finance;
pub mod library;
pub mod matches;
pub mod roster;
pub mod sessions;
