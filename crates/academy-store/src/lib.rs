//! # academy-store
//!
//! Record-store consistency layer for the academy console.
//!
//! One [`RecordStore`](store::RecordStore) per entity family keeps its records
//! in a durable collection slot (in memory or as JSONL files). On top of the
//! generic CRUD surface sit the two consistency mechanisms the console relies
//! on: cascading deletes of dependent records
//! ([`CascadeCoordinator`](cascade::CascadeCoordinator)) and batch upserts for
//! tracker screens ([`upsert`]). Every operation waits out a configurable
//! simulated latency first.
//!
//! [`AcademyService`](service::AcademyService) wires all 23 stores from
//! configuration; family-specific operations live under [`repos`].

pub mod cascade;
pub mod collection;
pub mod drafts;
pub mod error;
pub mod ids;
pub mod latency;
pub mod record;
mod records;
pub mod repos;
pub mod seed;
pub mod service;
pub mod store;
pub mod tenant;
pub mod updates;
pub mod upsert;

#[cfg(test)]
mod test_support;

pub use error::StoreError;
pub use records::session_load;
pub use repos::matches::LineupScope;
pub use service::AcademyService;
