//! Identifiers for the parties taking part in a placement run.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// CandidateSlot
// ---------------------------------------------------------------------------

/// One of the two adopting candidates of a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum CandidateSlot {
    First,
    Second,
}

impl CandidateSlot {
    /// Both slots in evaluation order.
    pub const ALL: [Self; 2] = [Self::First, Self::Second];

    /// The 1-based slot number shown to users.
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
        }
    }

    /// Zero-based index, for fixed-size per-slot storage.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}

impl fmt::Display for CandidateSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "candidate {}", self.number())
    }
}

// ---------------------------------------------------------------------------
// CandidateNumber
// ---------------------------------------------------------------------------

/// Number of a candidate on the interactive roster (1-based, any size).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateNumber(pub u8);

impl fmt::Display for CandidateNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "candidate {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_numbers_and_indices() {
        assert_eq!(CandidateSlot::First.number(), 1);
        assert_eq!(CandidateSlot::Second.number(), 2);
        assert_eq!(CandidateSlot::First.index(), 0);
        assert_eq!(CandidateSlot::Second.index(), 1);
    }

    #[test]
    fn slot_display() {
        assert_eq!(CandidateSlot::First.to_string(), "candidate 1");
        assert_eq!(CandidateSlot::Second.to_string(), "candidate 2");
    }

    #[test]
    fn all_is_in_evaluation_order() {
        assert_eq!(
            CandidateSlot::ALL,
            [CandidateSlot::First, CandidateSlot::Second]
        );
    }

    #[test]
    fn candidate_number_is_transparent_in_json() {
        let json = serde_json::to_string(&CandidateNumber(4)).unwrap();
        assert_eq!(json, "4");
        assert_eq!(CandidateNumber(4).to_string(), "candidate 4");
    }
}
