//! Pure deterministic adoption engine.
//!
//! Takes three raw lists and produces a collated placement list. No I/O, no
//! state kept between calls; the only mutable state is the per-run
//! [`AdoptionLedger`].
//!
//! ```text
//! run(toys_1, toys_2, order) -> Result<AdoptionRun>
//! ```
//!
//! ## Destination rules (per animal, in input order)
//!
//! 1. Evaluate both candidates with the animal's [`MatchRule`]
//! 2. Both eligible -> shelter (tie-break)
//! 3. Escort animal -> first eligible candidate that already adopted a
//!    companion this run and is under quota, else shelter
//! 4. Ordinary animal -> first eligible candidate under quota, else shelter
//! 5. Placements are recorded in the ledger before the next animal

use shelter_types::{
    AdoptionReport, CandidateSlot, Catalog, Destination, Placement, Result,
};

use crate::{
    AdoptionLedger, MatchRule, PlacementCollator, normalize_list, validate_inputs,
};

/// Decide where one animal goes given the ledger so far.
///
/// `toys` holds the normalized lists of candidate 1 and candidate 2.
#[must_use]
pub fn decide_destination(
    rule: MatchRule,
    escort: bool,
    favorites: &[String],
    toys: [&[String]; 2],
    ledger: &AdoptionLedger,
) -> Destination {
    let eligible = toys.map(|list| rule.is_satisfied(favorites, list));

    if eligible.iter().all(|e| *e) {
        return Destination::Shelter;
    }

    CandidateSlot::ALL
        .into_iter()
        .find(|slot| {
            eligible[slot.index()]
                && if escort {
                    ledger.can_escort(*slot)
                } else {
                    ledger.has_room(*slot)
                }
        })
        .map_or(Destination::Shelter, Destination::Candidate)
}

/// Output of a successful run, already in collated order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdoptionRun {
    pub placements: Vec<Placement>,
    pub ledger: AdoptionLedger,
}

impl AdoptionRun {
    /// Rendered `"<name> - <destination>"` lines in output order.
    #[must_use]
    pub fn rendered(&self) -> Vec<String> {
        self.placements.iter().map(ToString::to_string).collect()
    }

    /// Placements made with `slot`, in output order.
    pub fn adopted_by(&self, slot: CandidateSlot) -> impl Iterator<Item = &Placement> {
        self.placements
            .iter()
            .filter(move |p| p.destination == Destination::Candidate(slot))
    }
}

impl From<AdoptionRun> for AdoptionReport {
    fn from(run: AdoptionRun) -> Self {
        Self::List(run.rendered())
    }
}

/// Adoption engine bound to one reference catalog.
#[derive(Debug, Clone, Default)]
pub struct AdoptionEngine {
    catalog: Catalog,
}

impl AdoptionEngine {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Validate the three raw lists and place every animal.
    ///
    /// ## Algorithm
    ///
    /// 1. Normalize all three inputs
    /// 2. Validate animals, then candidate 1 toys, then candidate 2 toys
    /// 3. Walk the animal order, deciding each destination against the ledger
    /// 4. Sort the placements by rendered text with pt-BR collation
    pub fn run(
        &self,
        first_toys: Option<&str>,
        second_toys: Option<&str>,
        animal_order: Option<&str>,
    ) -> Result<AdoptionRun> {
        // 1. Normalize
        let first = normalize_list(first_toys);
        let second = normalize_list(second_toys);
        let animals = normalize_list(animal_order);

        // 2. Validate (fail fast)
        validate_inputs(&self.catalog, &first, &second, &animals)?;

        // 3. Place in input order
        let mut ledger = AdoptionLedger::new();
        let mut placements = Vec::with_capacity(animals.len());

        for code in &animals {
            let rule = MatchRule::for_animal(&self.catalog, code);
            let destination = decide_destination(
                rule,
                self.catalog.is_escort(code),
                self.catalog.favorites_of(code),
                [&first, &second],
                &ledger,
            );

            if let Some(slot) = destination.adopter() {
                ledger.record(slot);
            }

            tracing::debug!(
                animal = %code,
                rule = ?rule,
                destination = %destination,
                first_count = ledger.count(CandidateSlot::First),
                second_count = ledger.count(CandidateSlot::Second),
                "Animal placed"
            );

            placements.push(Placement {
                animal: code.clone(),
                name: self.catalog.display_name(code).to_string(),
                destination,
            });
        }

        // 4. Collate
        let collator = PlacementCollator::new();
        let mut keyed: Vec<(String, Placement)> = placements
            .into_iter()
            .map(|p| (p.to_string(), p))
            .collect();
        collator.sort_by_key(&mut keyed, |(line, _)| line.as_str());
        let placements = keyed.into_iter().map(|(_, p)| p).collect();

        tracing::info!(
            animals = animals.len(),
            first_count = ledger.count(CandidateSlot::First),
            second_count = ledger.count(CandidateSlot::Second),
            "Adoption run complete"
        );

        Ok(AdoptionRun { placements, ledger })
    }

    /// Run and fold the outcome into the report record.
    pub fn report(
        &self,
        first_toys: Option<&str>,
        second_toys: Option<&str>,
        animal_order: Option<&str>,
    ) -> AdoptionReport {
        match self.run(first_toys, second_toys, animal_order) {
            Ok(run) => run.into(),
            Err(err) => AdoptionReport::from(&err),
        }
    }
}

/// Run the engine once with the default catalog.
pub fn match_adoptions(
    first_toys: Option<&str>,
    second_toys: Option<&str>,
    animal_order: Option<&str>,
) -> Result<AdoptionRun> {
    AdoptionEngine::default().run(first_toys, second_toys, animal_order)
}

#[cfg(test)]
mod tests {
    use shelter_types::ShelterError;

    use super::*;

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    fn lines(result: Result<AdoptionRun>) -> Vec<String> {
        result.expect("run should succeed").rendered()
    }

    #[test]
    fn both_eligible_goes_to_shelter() {
        let toys = list(&["RATO", "BOLA"]);
        let dest = decide_destination(
            MatchRule::OrderedSubsequence,
            false,
            &list(&["RATO"]),
            [&toys, &toys],
            &AdoptionLedger::new(),
        );
        assert_eq!(dest, Destination::Shelter);
    }

    #[test]
    fn single_eligible_candidate_adopts() {
        let first = list(&["BOLA"]);
        let second = list(&["RATO", "BOLA"]);
        let dest = decide_destination(
            MatchRule::OrderedSubsequence,
            false,
            &list(&["RATO", "BOLA"]),
            [&first, &second],
            &AdoptionLedger::new(),
        );
        assert_eq!(dest, Destination::Candidate(CandidateSlot::Second));
    }

    #[test]
    fn full_candidate_is_skipped() {
        let first = list(&["RATO", "BOLA"]);
        let second = list(&["SKATE"]);
        let mut ledger = AdoptionLedger::new();
        for _ in 0..3 {
            ledger.record(CandidateSlot::First);
        }
        let dest = decide_destination(
            MatchRule::OrderedSubsequence,
            false,
            &list(&["RATO", "BOLA"]),
            [&first, &second],
            &ledger,
        );
        assert_eq!(dest, Destination::Shelter);
    }

    #[test]
    fn escort_needs_prior_companion() {
        let first = list(&["RATO", "SKATE"]);
        let second = list(&["BOLA"]);
        let favs = list(&["SKATE", "RATO"]);
        let mut ledger = AdoptionLedger::new();

        let alone = decide_destination(
            MatchRule::UnorderedPresence,
            true,
            &favs,
            [&first, &second],
            &ledger,
        );
        assert_eq!(alone, Destination::Shelter);

        ledger.record(CandidateSlot::First);
        let escorted = decide_destination(
            MatchRule::UnorderedPresence,
            true,
            &favs,
            [&first, &second],
            &ledger,
        );
        assert_eq!(escorted, Destination::Candidate(CandidateSlot::First));
    }

    #[test]
    fn companion_with_other_candidate_does_not_help() {
        let first = list(&["RATO", "SKATE"]);
        let second = list(&["BOLA"]);
        let mut ledger = AdoptionLedger::new();
        ledger.record(CandidateSlot::Second);
        let dest = decide_destination(
            MatchRule::UnorderedPresence,
            true,
            &list(&["SKATE", "RATO"]),
            [&first, &second],
            &ledger,
        );
        assert_eq!(dest, Destination::Shelter);
    }

    #[test]
    fn simple_run_is_collated() {
        let out = lines(match_adoptions(
            Some("RATO,BOLA"),
            Some("RATO,NOVELO"),
            Some("Rex,Fofo"),
        ));
        assert_eq!(out, ["Fofo - shelter", "Rex - candidate 1"]);
    }

    #[test]
    fn ledger_reflects_placements() {
        let run = match_adoptions(Some("LASER,RATO,BOLA,SKATE"), Some("BOLA"), Some("Bebe,Loco"))
            .unwrap();
        assert_eq!(run.ledger.count(CandidateSlot::First), 2);
        assert_eq!(run.ledger.count(CandidateSlot::Second), 0);
        let names: Vec<&str> = run
            .adopted_by(CandidateSlot::First)
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, ["Bebe", "Loco"]);
    }

    #[test]
    fn validation_error_short_circuits() {
        let err = match_adoptions(Some("RATO"), Some("BOLA"), Some("")).unwrap_err();
        assert!(matches!(err, ShelterError::InvalidAnimal { .. }));
    }

    #[test]
    fn report_wraps_both_shapes() {
        let engine = AdoptionEngine::default();
        let ok = engine.report(Some("RATO,BOLA"), Some("RATO,NOVELO"), Some("Rex"));
        assert_eq!(ok, AdoptionReport::List(vec!["Rex - candidate 1".into()]));

        let err = engine.report(None, Some("RATO"), Some("Rex"));
        assert_eq!(err, AdoptionReport::Error("invalid toy".into()));
    }
}
