//! # greenroom-core
//!
//! Conflict detection and room-assignment search for multi-act live shows.
//!
//! Given a membership table (which performers appear in which acts) and a
//! per-performer time-unavailability table, greenroom answers two questions:
//! which acts clash because they share a performer, and which K-act
//! combinations can run in parallel across K rooms with nobody
//! double-booked. There is no cost function and no partial scheduling —
//! the only acceptance criterion is zero overlap.
//!
//! ## Modules
//!
//! - [`loader`] — CSV tables → [`Roster`]
//! - [`roster`] — the loaded store and membership index
//! - [`availability`] — fully/partly/fully-booked classification
//! - [`crossref`] — per-participant overlap report for a set of acts
//! - [`distribution`] — exhaustive clash-free combination search
//! - [`error`] — error types
//!
//! The crate is a pure library: nothing executes on import, and all loaded
//! data is read-only for the life of the process.

pub mod availability;
pub mod crossref;
pub mod distribution;
pub mod error;
pub mod loader;
pub mod roster;

pub use availability::{category, classify_all, unavailable_slots, Category, Partition, Unavailability};
pub use crossref::{crossref, OverlapRow};
pub use distribution::{optimal_distribution, Distribution};
pub use error::ScheduleError;
pub use loader::{load_roster, LoaderOptions};
pub use roster::Roster;
