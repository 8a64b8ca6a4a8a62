//! Property tests over randomly drawn valid inputs.
//!
//! Inputs are random non-empty, duplicate-free selections of the default
//! codes in random order, so every run passes validation and exercises the
//! placement rules.

use proptest::prelude::*;
use proptest::sample::subsequence;
use shelter_matchcore::{AdoptionEngine, MatchRule, normalize_list, sort_localized};
use shelter_types::*;

const TOYS: [&str; 6] = ["RATO", "BOLA", "CAIXA", "NOVELO", "LASER", "SKATE"];
const ANIMALS: [&str; 7] = ["REX", "MIMI", "FOFO", "ZERO", "BOLA", "BEBE", "LOCO"];

fn toy_list() -> impl Strategy<Value = String> {
    subsequence(TOYS.to_vec(), 1..=TOYS.len())
        .prop_shuffle()
        .prop_map(|v| v.join(","))
}

fn animal_order() -> impl Strategy<Value = String> {
    subsequence(ANIMALS.to_vec(), 1..=ANIMALS.len())
        .prop_shuffle()
        .prop_map(|v| v.join(","))
}

proptest! {
    #[test]
    fn runs_are_deterministic(first in toy_list(), second in toy_list(), order in animal_order()) {
        let engine = AdoptionEngine::default();
        let a = engine.run(Some(first.as_str()), Some(second.as_str()), Some(order.as_str())).unwrap();
        let b = engine.run(Some(first.as_str()), Some(second.as_str()), Some(order.as_str())).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn every_animal_placed_once(first in toy_list(), second in toy_list(), order in animal_order()) {
        let run = AdoptionEngine::default().run(Some(first.as_str()), Some(second.as_str()), Some(order.as_str())).unwrap();
        let mut placed: Vec<&str> = run.placements.iter().map(|p| p.animal.as_str()).collect();
        let mut expected = normalize_list(Some(order.as_str()));
        placed.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(placed, expected);
    }

    #[test]
    fn quota_never_exceeded(first in toy_list(), second in toy_list(), order in animal_order()) {
        let run = AdoptionEngine::default().run(Some(first.as_str()), Some(second.as_str()), Some(order.as_str())).unwrap();
        for slot in CandidateSlot::ALL {
            let adopted = run.adopted_by(slot).count();
            prop_assert!(adopted <= constants::MAX_ADOPTIONS_PER_CANDIDATE);
            prop_assert_eq!(adopted, run.ledger.count(slot));
        }
    }

    #[test]
    fn output_is_collated(first in toy_list(), second in toy_list(), order in animal_order()) {
        let run = AdoptionEngine::default().run(Some(first.as_str()), Some(second.as_str()), Some(order.as_str())).unwrap();
        let rendered = run.rendered();
        let mut resorted = rendered.clone();
        sort_localized(&mut resorted);
        prop_assert_eq!(rendered, resorted);
    }

    #[test]
    fn both_eligible_means_shelter(first in toy_list(), second in toy_list(), order in animal_order()) {
        let engine = AdoptionEngine::default();
        let catalog = engine.catalog();
        let run = engine.run(Some(first.as_str()), Some(second.as_str()), Some(order.as_str())).unwrap();
        let toys = [normalize_list(Some(first.as_str())), normalize_list(Some(second.as_str()))];

        for placement in &run.placements {
            let rule = MatchRule::for_animal(catalog, &placement.animal);
            let favorites = catalog.favorites_of(&placement.animal);
            if toys.iter().all(|t| rule.is_satisfied(favorites, t)) {
                prop_assert_eq!(placement.destination, Destination::Shelter);
            }
            if let Some(slot) = placement.destination.adopter() {
                prop_assert!(rule.is_satisfied(favorites, &toys[slot.index()]));
            }
        }
    }

    #[test]
    fn escort_never_adopted_alone(first in toy_list(), second in toy_list(), order in animal_order()) {
        let engine = AdoptionEngine::default();
        let run = engine.run(Some(first.as_str()), Some(second.as_str()), Some(order.as_str())).unwrap();
        let escort = &engine.catalog().escort_animal;

        if let Some(p) = run.placements.iter().find(|p| &p.animal == escort) {
            if let Some(slot) = p.destination.adopter() {
                prop_assert!(run.adopted_by(slot).count() >= 2);
            }
        }
    }

    #[test]
    fn unknown_animal_always_rejected(first in toy_list(), second in toy_list(), order in animal_order()) {
        let order = format!("{order},LULU");
        let report = AdoptionEngine::default().report(Some(first.as_str()), Some(second.as_str()), Some(order.as_str()));
        prop_assert_eq!(report, AdoptionReport::Error("invalid animal".into()));
    }
}
