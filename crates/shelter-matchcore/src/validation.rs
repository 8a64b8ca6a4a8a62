//! Input gate: every run passes through here before any placement logic.
//!
//! A token list is rejected when it is empty, repeats a token, or holds a
//! token outside its valid set. Checks run in a fixed order and stop at the
//! first failure:
//!
//! 1. Animal order list ("invalid animal")
//! 2. Candidate 1 toys ("invalid toy")
//! 3. Candidate 2 toys ("invalid toy")
//!
//! Duplicates are only checked within one list. Both candidates may own the
//! same toy.

use std::collections::HashSet;

use shelter_types::{CandidateSlot, Catalog, ListDefect, Result, ShelterError};

/// Find the first defect in `tokens`, if any.
///
/// Duplicates are reported before unknown codes, matching the check order.
pub fn inspect_list(tokens: &[String], is_valid: impl Fn(&str) -> bool) -> Option<ListDefect> {
    if tokens.is_empty() {
        return Some(ListDefect::Empty);
    }

    let mut seen = HashSet::with_capacity(tokens.len());
    if let Some(dup) = tokens.iter().find(|t| !seen.insert(t.as_str())) {
        return Some(ListDefect::Duplicate(dup.clone()));
    }

    tokens
        .iter()
        .find(|t| !is_valid(t.as_str()))
        .map(|t| ListDefect::Unknown(t.clone()))
}

/// Validate normalized inputs in the fixed order.
pub fn validate_inputs(
    catalog: &Catalog,
    first_toys: &[String],
    second_toys: &[String],
    animals: &[String],
) -> Result<()> {
    if let Some(defect) = inspect_list(animals, |code| catalog.is_valid_animal(code)) {
        tracing::debug!(%defect, "Rejected animal order list");
        return Err(ShelterError::InvalidAnimal { defect });
    }

    for (slot, toys) in CandidateSlot::ALL.into_iter().zip([first_toys, second_toys]) {
        if let Some(defect) = inspect_list(toys, |code| catalog.is_valid_toy(code)) {
            tracing::debug!(candidate = slot.number(), %defect, "Rejected toy list");
            return Err(ShelterError::InvalidToy { slot, defect });
        }
    }

    Ok(())
}
