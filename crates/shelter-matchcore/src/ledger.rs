//! Per-run adoption counters.
//!
//! The ledger is threaded through the destination decision for each animal
//! in order; a placement bumps the count before the next animal is decided.
//! Later escort and quota checks depend on it.

use shelter_types::{CandidateSlot, constants};

/// Placements made per candidate during one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdoptionLedger {
    counts: [usize; 2],
}

impl AdoptionLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn count(&self, slot: CandidateSlot) -> usize {
        self.counts[slot.index()]
    }

    /// True while `slot` is below the per-candidate quota.
    #[must_use]
    pub fn has_room(&self, slot: CandidateSlot) -> bool {
        self.count(slot) < constants::MAX_ADOPTIONS_PER_CANDIDATE
    }

    /// True when `slot` already adopted a companion and is still below quota.
    #[must_use]
    pub fn can_escort(&self, slot: CandidateSlot) -> bool {
        self.count(slot) >= constants::MIN_COMPANIONS_FOR_ESCORT && self.has_room(slot)
    }

    /// Record one placement with `slot`.
    pub fn record(&mut self, slot: CandidateSlot) {
        self.counts[slot.index()] += 1;
    }
}
