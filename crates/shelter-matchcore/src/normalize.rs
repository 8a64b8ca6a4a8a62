//! Raw list text to token lists.

use shelter_types::constants::LIST_SEPARATOR;

/// Split raw comma-separated text into uppercase tokens.
///
/// Absent input behaves like an empty string. Fragments are trimmed and
/// uppercased; empty fragments are dropped. Never fails.
#[must_use]
pub fn normalize_list(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(LIST_SEPARATOR)
        .map(|part| part.trim().to_uppercase())
        .filter(|token| !token.is_empty())
        .collect()
}
