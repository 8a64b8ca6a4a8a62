//! Single-question lookups for the interactive session.
//!
//! These answer "where would this animal go?" and "which animal would this
//! candidate take first?" against a [`Roster`]. They look at instantaneous
//! eligibility only: no ledger, no quota, no escort companion tracking. The
//! escort animal is therefore never adopted here; a candidate that holds all
//! its favorites gets a note explaining why instead.

use std::fmt;

use shelter_types::{CandidateNumber, Catalog, Roster, RosterEntry};

use crate::{MatchRule, normalize_list};

/// Answer of a single-animal lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupDestination {
    Shelter,
    Candidate(CandidateNumber),
}

impl fmt::Display for LookupDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shelter => write!(f, "shelter"),
            Self::Candidate(number) => write!(f, "{number}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimalVerdict {
    pub destination: LookupDestination,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateVerdict {
    /// Code of the first adoptable animal.
    pub animal: String,
    /// Display name of that animal.
    pub name: String,
    pub notes: Vec<String>,
}

struct Assessment {
    adopts: bool,
    note: Option<String>,
}

fn assess(catalog: &Catalog, entry: &RosterEntry, code: &str) -> Assessment {
    let favorites = catalog.favorites_of(code);
    let toys = normalize_list(Some(entry.toys.as_str()));
    let name = catalog.display_name(code);
    let rule = MatchRule::for_animal(catalog, code);

    if catalog.is_escort(code) {
        let note = rule.is_satisfied(favorites, &toys).then(|| {
            format!(
                "{} has all of {name}'s favorites ({}), but {name} needs a companion adopted first.",
                entry.number,
                favorites.join(", "),
            )
        });
        return Assessment {
            adopts: false,
            note,
        };
    }

    if rule.is_satisfied(favorites, &toys) {
        Assessment {
            adopts: true,
            note: Some(format!(
                "{} has {name}'s favorites in order: {} (toys: {}).",
                entry.number,
                favorites.join(", "),
                toys.join(", "),
            )),
        }
    } else {
        Assessment {
            adopts: false,
            note: None,
        }
    }
}

/// Where `code` would go among the roster candidates.
///
/// Exactly one adopting candidate wins; more than one sends the animal to the
/// shelter with a tie note; none sends it to the shelter, keeping any escort
/// notes so the user learns why a matching candidate was passed over.
#[must_use]
pub fn best_destination_for_animal(catalog: &Catalog, roster: &Roster, code: &str) -> AnimalVerdict {
    let mut notes = Vec::new();
    let mut adopters = Vec::new();

    for entry in &roster.candidates {
        let assessment = assess(catalog, entry, code);
        if assessment.adopts {
            adopters.push(entry.number);
        }
        notes.extend(assessment.note);
    }

    match adopters.as_slice() {
        [] => AnimalVerdict {
            destination: LookupDestination::Shelter,
            notes,
        },
        [only] => AnimalVerdict {
            destination: LookupDestination::Candidate(*only),
            notes,
        },
        _ => {
            notes.push(
                "More than one candidate qualifies, so the animal stays in the shelter.".to_string(),
            );
            AnimalVerdict {
                destination: LookupDestination::Shelter,
                notes,
            }
        }
    }
}

/// First animal in catalog order that candidate `number` would adopt.
#[must_use]
pub fn first_animal_for_candidate(
    catalog: &Catalog,
    roster: &Roster,
    number: CandidateNumber,
) -> Option<CandidateVerdict> {
    let entry = roster.get(number)?;
    catalog.animals().find_map(|animal| {
        let assessment = assess(catalog, entry, animal.code);
        assessment.adopts.then(|| CandidateVerdict {
            animal: animal.code.to_string(),
            name: animal.name.to_string(),
            notes: assessment.note.into_iter().collect(),
        })
    })
}
