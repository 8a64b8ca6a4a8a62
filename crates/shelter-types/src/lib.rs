//! # shelter-types
//!
//! Shared types, errors, and configuration for the **shelter adoption
//! matcher**.
//!
//! This crate is the leaf dependency of the workspace; every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`CandidateSlot`], [`CandidateNumber`]
//! - **Reference tables**: [`Catalog`], [`AnimalProfile`], [`Roster`], [`RosterEntry`]
//! - **Placement model**: [`Destination`], [`Placement`], [`AdoptionReport`]
//! - **Errors**: [`ShelterError`] with `SH_ERR_` codes, [`ListDefect`]
//! - **Constants**: quota limits, separators, logging defaults

pub mod config;
pub mod constants;
pub mod error;
pub mod ids;
pub mod placement;

// Re-export all primary types at crate root for ergonomic imports:
//   use shelter_types::{Catalog, Destination, ShelterError, ...};

pub use config::*;
pub use error::*;
pub use ids::*;
pub use placement::*;

// Constants are accessed via `shelter_types::constants::FOO`
// (not re-exported to avoid name collisions).
