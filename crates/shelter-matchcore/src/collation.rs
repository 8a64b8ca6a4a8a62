//! Locale-aware ordering of rendered placements.
//!
//! Output lists are sorted with Portuguese (pt-BR) collation so accented
//! names sort next to their base letters ("Água" before "Bola", not after
//! "Zebra"). Ties under the collator fall back to code-point order so the
//! result is a total order.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};
use icu_locid::Locale;
use shelter_types::constants::COLLATION_LOCALE;

/// Comparator for rendered placement strings.
pub struct PlacementCollator {
    collator: Option<Collator>,
}

impl PlacementCollator {
    /// Build the pt-BR collator.
    ///
    /// Compiled locale data ships with the binary, so construction only fails
    /// on a broken build; in that case ordering degrades to code points.
    #[must_use]
    pub fn new() -> Self {
        let collator = match Locale::try_from_bytes(COLLATION_LOCALE.as_bytes()) {
            Ok(locale) => match Collator::try_new(&locale.into(), CollatorOptions::new()) {
                Ok(collator) => Some(collator),
                Err(err) => {
                    tracing::warn!(locale = COLLATION_LOCALE, error = %err, "Collator unavailable, using code-point order");
                    None
                }
            },
            Err(err) => {
                tracing::warn!(locale = COLLATION_LOCALE, error = %err, "Bad collation locale, using code-point order");
                None
            }
        };
        Self { collator }
    }

    #[must_use]
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.collator {
            Some(collator) => collator.compare(a, b).then_with(|| a.cmp(b)),
            None => a.cmp(b),
        }
    }

    /// Sort `items` ascending by the string `key` returns.
    pub fn sort_by_key<T>(&self, items: &mut [T], key: impl Fn(&T) -> &str) {
        items.sort_by(|a, b| self.compare(key(a), key(b)));
    }
}

impl Default for PlacementCollator {
    fn default() -> Self {
        Self::new()
    }
}

/// Sort owned strings with pt-BR collation.
pub fn sort_localized(items: &mut [String]) {
    PlacementCollator::new().sort_by_key(items, String::as_str);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(items: &[&str]) -> Vec<String> {
        let mut owned: Vec<String> = items.iter().map(|s| (*s).to_string()).collect();
        sort_localized(&mut owned);
        owned
    }

    #[test]
    fn plain_names_sort_alphabetically() {
        assert_eq!(
            sorted(&["Rex - candidate 1", "Fofo - shelter"]),
            ["Fofo - shelter", "Rex - candidate 1"]
        );
    }

    #[test]
    fn accented_initial_sorts_with_base_letter() {
        assert_eq!(
            sorted(&["Zebra - shelter", "Água - shelter", "Abacate - shelter"]),
            ["Abacate - shelter", "Água - shelter", "Zebra - shelter"]
        );
    }

    #[test]
    fn accent_only_breaks_ties_after_letters() {
        assert_eq!(
            sorted(&["Éclair - shelter", "Ema - shelter", "Eco - shelter"]),
            ["Éclair - shelter", "Eco - shelter", "Ema - shelter"]
        );
    }

    #[test]
    fn unaccented_before_accented_variant() {
        assert_eq!(sorted(&["Bebê", "Bebe"]), ["Bebe", "Bebê"]);
    }

    #[test]
    fn compare_is_total() {
        let collator = PlacementCollator::new();
        assert_eq!(collator.compare("Rex", "Rex"), Ordering::Equal);
        assert_eq!(collator.compare("Mimi", "Loco"), Ordering::Greater);
    }
}
