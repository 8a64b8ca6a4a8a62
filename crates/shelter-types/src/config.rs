//! Reference tables for the matcher and the interactive roster.
//!
//! [`Catalog`] bundles everything the engine treats as static data: the valid
//! animal and toy codes, display names, favorite toys, and which animal needs
//! an escort. It is a plain value so tests can inject their own tables, and it
//! deserializes from JSON with every missing field falling back to the
//! default tables.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{CandidateNumber, Result, ShelterError};

/// Static reference data consulted by every engine run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    /// Accepted animal codes, in catalog order.
    pub valid_animals: Vec<String>,
    /// Accepted toy codes.
    pub valid_toys: Vec<String>,
    /// Display name per animal code. Unmapped codes display as themselves.
    pub display_names: BTreeMap<String, String>,
    /// Ordered favorite toys per animal code. Unmapped codes have none.
    pub favorites: BTreeMap<String, Vec<String>>,
    /// Code of the animal that matches without order and needs a companion.
    pub escort_animal: String,
}

/// Borrowed view of one catalog animal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimalProfile<'a> {
    pub code: &'a str,
    pub name: &'a str,
    pub favorites: &'a [String],
}

fn owned(codes: &[&str]) -> Vec<String> {
    codes.iter().map(|c| (*c).to_string()).collect()
}

impl Default for Catalog {
    fn default() -> Self {
        let table: [(&str, &str, &[&str]); 7] = [
            ("REX", "Rex", &["RATO", "BOLA"]),
            ("MIMI", "Mimi", &["BOLA", "LASER"]),
            ("FOFO", "Fofo", &["BOLA", "RATO", "LASER"]),
            ("ZERO", "Zero", &["RATO", "BOLA"]),
            ("BOLA", "Bola", &["CAIXA", "NOVELO"]),
            ("BEBE", "Bebe", &["LASER", "RATO", "BOLA"]),
            ("LOCO", "Loco", &["SKATE", "RATO"]),
        ];

        Self {
            valid_animals: table.iter().map(|(code, _, _)| (*code).to_string()).collect(),
            valid_toys: owned(&["RATO", "BOLA", "CAIXA", "NOVELO", "LASER", "SKATE"]),
            display_names: table
                .iter()
                .map(|(code, name, _)| ((*code).to_string(), (*name).to_string()))
                .collect(),
            favorites: table
                .iter()
                .map(|(code, _, favs)| ((*code).to_string(), owned(favs)))
                .collect(),
            escort_animal: "LOCO".to_string(),
        }
    }
}

impl Catalog {
    /// Parse a catalog from JSON and check it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Read, parse and check a catalog file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Sanity checks for injected tables.
    ///
    /// Input tokens are uppercased before lookup, so any lowercase code here
    /// could never match and is rejected.
    pub fn validate(&self) -> Result<()> {
        check_code_list("valid_animals", &self.valid_animals)?;
        check_code_list("valid_toys", &self.valid_toys)?;

        for (animal, favs) in &self.favorites {
            if let Some(toy) = favs.iter().find(|t| !self.is_valid_toy(t)) {
                return Err(ShelterError::Configuration(format!(
                    "favorites of {animal} reference unknown toy {toy}"
                )));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn is_valid_animal(&self, code: &str) -> bool {
        self.valid_animals.iter().any(|a| a == code)
    }

    #[must_use]
    pub fn is_valid_toy(&self, code: &str) -> bool {
        self.valid_toys.iter().any(|t| t == code)
    }

    /// Display name for `code`, or the code itself when unmapped.
    #[must_use]
    pub fn display_name<'a>(&'a self, code: &'a str) -> &'a str {
        self.display_names.get(code).map_or(code, String::as_str)
    }

    /// Favorite toys for `code`, or an empty slice when unmapped.
    #[must_use]
    pub fn favorites_of(&self, code: &str) -> &[String] {
        self.favorites.get(code).map(Vec::as_slice).unwrap_or_default()
    }

    #[must_use]
    pub fn is_escort(&self, code: &str) -> bool {
        self.escort_animal == code
    }

    /// Every valid animal in catalog order.
    pub fn animals(&self) -> impl Iterator<Item = AnimalProfile<'_>> {
        self.valid_animals.iter().map(|code| AnimalProfile {
            code,
            name: self.display_name(code),
            favorites: self.favorites_of(code),
        })
    }
}

fn check_code_list(field: &str, codes: &[String]) -> Result<()> {
    if codes.is_empty() {
        return Err(ShelterError::Configuration(format!("{field} is empty")));
    }
    let mut seen = HashSet::new();
    for code in codes {
        if code.trim().is_empty() || *code != code.to_uppercase() {
            return Err(ShelterError::Configuration(format!(
                "{field} entry {code:?} must be a non-blank uppercase code"
            )));
        }
        if !seen.insert(code.as_str()) {
            return Err(ShelterError::Configuration(format!(
                "{field} lists {code} twice"
            )));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Roster
// ---------------------------------------------------------------------------

/// A candidate on the interactive roster with a preset toy list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub number: CandidateNumber,
    /// Raw comma-separated toy list, normalized at lookup time.
    pub toys: String,
}

/// Fixed candidates offered by the interactive session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Roster {
    pub candidates: Vec<RosterEntry>,
}

impl Default for Roster {
    fn default() -> Self {
        let presets = [
            (1, "RATO,BOLA"),
            (2, "BOLA,LASER"),
            (3, "CAIXA,NOVELO"),
            (4, "BOLA,LASER"),
        ];
        Self {
            candidates: presets
                .iter()
                .map(|(n, toys)| RosterEntry {
                    number: CandidateNumber(*n),
                    toys: (*toys).to_string(),
                })
                .collect(),
        }
    }
}

impl Roster {
    #[must_use]
    pub fn get(&self, number: CandidateNumber) -> Option<&RosterEntry> {
        self.candidates.iter().find(|c| c.number == number)
    }
}
