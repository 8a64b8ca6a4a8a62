//! Placement results produced by the adoption engine.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{CandidateSlot, ShelterError, constants};

/// Where an animal ends up after a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    Shelter,
    Candidate(CandidateSlot),
}

impl Destination {
    /// The slot that adopted the animal, if any.
    #[must_use]
    pub fn adopter(self) -> Option<CandidateSlot> {
        match self {
            Self::Shelter => None,
            Self::Candidate(slot) => Some(slot),
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shelter => write!(f, "shelter"),
            Self::Candidate(slot) => write!(f, "{slot}"),
        }
    }
}

/// One animal's outcome in a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Normalized animal code.
    pub animal: String,
    /// Display name, or the code when the catalog has none.
    pub name: String,
    pub destination: Destination,
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.name,
            constants::PLACEMENT_SEPARATOR,
            self.destination
        )
    }
}

/// Outcome record handed to the shells.
///
/// Serializes as either `{"error": "..."}` or `{"list": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdoptionReport {
    Error(String),
    List(Vec<String>),
}

impl AdoptionReport {
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(msg) => Some(msg.as_str()),
            Self::List(_) => None,
        }
    }

    #[must_use]
    pub fn list(&self) -> Option<&[String]> {
        match self {
            Self::Error(_) => None,
            Self::List(items) => Some(items.as_slice()),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

impl From<&ShelterError> for AdoptionReport {
    fn from(err: &ShelterError) -> Self {
        Self::Error(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ListDefect;

    #[test]
    fn destination_display() {
        assert_eq!(Destination::Shelter.to_string(), "shelter");
        assert_eq!(
            Destination::Candidate(CandidateSlot::Second).to_string(),
            "candidate 2"
        );
    }

    #[test]
    fn adopter_of_destination() {
        assert_eq!(Destination::Shelter.adopter(), None);
        assert_eq!(
            Destination::Candidate(CandidateSlot::First).adopter(),
            Some(CandidateSlot::First)
        );
    }

    #[test]
    fn placement_renders_name_and_destination() {
        let p = Placement {
            animal: "REX".into(),
            name: "Rex".into(),
            destination: Destination::Candidate(CandidateSlot::First),
        };
        assert_eq!(p.to_string(), "Rex - candidate 1");
    }

    #[test]
    fn report_json_has_exactly_one_key() {
        let list = AdoptionReport::List(vec!["Rex - shelter".into()]);
        assert_eq!(
            serde_json::to_string(&list).unwrap(),
            r#"{"list":["Rex - shelter"]}"#
        );

        let err = AdoptionReport::from(&ShelterError::InvalidAnimal {
            defect: ListDefect::Empty,
        });
        assert_eq!(
            serde_json::to_string(&err).unwrap(),
            r#"{"error":"invalid animal"}"#
        );
    }

    #[test]
    fn report_accessors() {
        let err = AdoptionReport::Error("invalid toy".into());
        assert!(err.is_error());
        assert_eq!(err.error(), Some("invalid toy"));
        assert!(err.list().is_none());

        let ok = AdoptionReport::List(vec![]);
        assert!(!ok.is_error());
        assert!(ok.error().is_none());
        assert_eq!(ok.list(), Some(&[][..]));
    }
}
