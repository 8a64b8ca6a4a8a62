//! Error types for the shelter adoption matcher.
//!
//! Every variant carries a stable `SH_ERR_` code (see [`ShelterError::code`])
//! for grepping in logs. The `Display` text of the two validation errors is
//! part of the report contract and must not change:
//! - 1xx: Animal list errors
//! - 2xx: Toy list errors
//! - 9xx: Configuration / general errors

use std::fmt;

use thiserror::Error;

use crate::CandidateSlot;

/// What was wrong with a rejected token list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListDefect {
    /// The list had no tokens after normalization.
    Empty,
    /// The same token appeared twice in one list.
    Duplicate(String),
    /// A token outside the applicable valid set.
    Unknown(String),
}

impl fmt::Display for ListDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty list"),
            Self::Duplicate(code) => write!(f, "duplicate entry {code}"),
            Self::Unknown(code) => write!(f, "unknown entry {code}"),
        }
    }
}

/// Central error enum for all shelter operations.
#[derive(Debug, Error)]
pub enum ShelterError {
    // =================================================================
    // Animal list (1xx)
    // =================================================================
    /// The animal order list is empty, has a duplicate, or names an
    /// unknown animal.
    #[error("invalid animal")]
    InvalidAnimal { defect: ListDefect },

    // =================================================================
    // Toy lists (2xx)
    // =================================================================
    /// A candidate's toy list is empty, has a duplicate, or names an
    /// unknown toy.
    #[error("invalid toy")]
    InvalidToy {
        slot: CandidateSlot,
        defect: ListDefect,
    },

    // =================================================================
    // General (9xx)
    // =================================================================
    /// Catalog or roster failed its sanity checks.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// JSON could not be decoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Reading a configuration file failed.
    #[error("I/O error: {0}")]
    Io(String),
}

impl ShelterError {
    /// Stable machine-readable code for this error.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidAnimal { .. } => "SH_ERR_100",
            Self::InvalidToy { .. } => "SH_ERR_200",
            Self::Configuration(_) => "SH_ERR_900",
            Self::Serialization(_) => "SH_ERR_901",
            Self::Io(_) => "SH_ERR_902",
        }
    }

    /// True for the two input-validation failures the engine reports as data.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidAnimal { .. } | Self::InvalidToy { .. })
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, ShelterError>;

impl From<std::io::Error> for ShelterError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ShelterError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
