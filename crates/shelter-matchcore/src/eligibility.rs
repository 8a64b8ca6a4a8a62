//! Eligibility predicates: does a candidate's toy list satisfy an animal?

use shelter_types::Catalog;

/// How an animal's favorites are matched against a toy list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRule {
    /// Favorites must appear in the same relative order; gaps allowed.
    OrderedSubsequence,
    /// Every favorite must appear somewhere; order ignored.
    UnorderedPresence,
}

impl MatchRule {
    /// The escort animal uses unordered presence, everyone else ordered.
    #[must_use]
    pub fn for_animal(catalog: &Catalog, code: &str) -> Self {
        if catalog.is_escort(code) {
            Self::UnorderedPresence
        } else {
            Self::OrderedSubsequence
        }
    }

    #[must_use]
    pub fn is_satisfied(self, favorites: &[String], toys: &[String]) -> bool {
        match self {
            Self::OrderedSubsequence => is_ordered_subsequence(favorites, toys),
            Self::UnorderedPresence => contains_all(favorites, toys),
        }
    }
}

/// True when `favorites` occur in `toys` in order. Empty favorites always match.
#[must_use]
pub fn is_ordered_subsequence(favorites: &[String], toys: &[String]) -> bool {
    let mut remaining = toys.iter();
    favorites
        .iter()
        .all(|fav| remaining.by_ref().any(|toy| toy == fav))
}

/// True when every favorite is present in `toys`, in any order.
#[must_use]
pub fn contains_all(favorites: &[String], toys: &[String]) -> bool {
    favorites.iter().all(|fav| toys.contains(fav))
}
