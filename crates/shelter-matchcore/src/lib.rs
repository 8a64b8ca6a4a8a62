//! # shelter-matchcore
//!
//! **Pure deterministic adoption engine.**
//!
//! MatchCore is the compute plane -- it takes three raw lists (candidate 1
//! toys, candidate 2 toys, animal order) and produces either a validation
//! error or a collated placement list. It has:
//!
//! - **Zero side effects**: no I/O, no state shared between runs
//! - **Deterministic output**: same input -> same output, every time
//! - **Fail-fast validation**: animals, then candidate 1, then candidate 2
//! - **Ordered placement**: a per-run ledger carries quota and escort state
//!   from one animal to the next
//!
//! The [`lookup`] module answers the interactive single-animal and
//! single-candidate questions without any of the ledger bookkeeping.

pub mod collation;
pub mod eligibility;
pub mod ledger;
pub mod lookup;
pub mod matcher;
pub mod normalize;
pub mod validation;

pub use collation::{PlacementCollator, sort_localized};
pub use eligibility::{MatchRule, contains_all, is_ordered_subsequence};
pub use ledger::AdoptionLedger;
pub use lookup::{
    AnimalVerdict, CandidateVerdict, LookupDestination, best_destination_for_animal,
    first_animal_for_candidate,
};
pub use matcher::{AdoptionEngine, AdoptionRun, decide_destination, match_adoptions};
pub use normalize::normalize_list;
pub use validation::{inspect_list, validate_inputs};
