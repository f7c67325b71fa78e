//! Property-based tests for the combination search using proptest.
//!
//! These verify invariants that should hold for *any* roster, not just the
//! hand-built examples in `distribution_tests.rs`.

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;

use greenroom_core::{crossref, optimal_distribution, Distribution, Roster};

// ---------------------------------------------------------------------------
// Strategies — generate small random shows
// ---------------------------------------------------------------------------

/// A pool of up to six participants, so overlap is likely but not certain.
fn participant(index: usize) -> String {
    format!("P{}", index)
}

/// Generate 2..=5 acts, each with a cast of 1..=3 distinct pool members.
fn arb_acts() -> impl Strategy<Value = Vec<(String, Vec<String>)>> {
    prop::collection::vec(prop::collection::btree_set(0usize..6, 1..=3), 2..=5).prop_map(
        |casts| {
            casts
                .into_iter()
                .enumerate()
                .map(|(i, cast)| {
                    (
                        format!("Act{}", i),
                        cast.into_iter().map(participant).collect(),
                    )
                })
                .collect()
        },
    )
}

/// A full scenario: acts plus a room count within the valid range.
fn arb_scenario() -> impl Strategy<Value = (Vec<(String, Vec<String>)>, usize)> {
    arb_acts().prop_flat_map(|acts| {
        let act_count = acts.len();
        (Just(acts), 1..=act_count)
    })
}

fn build_roster(acts: &[(String, Vec<String>)]) -> Roster {
    let participants: Vec<String> = (0..6).map(participant).collect();
    Roster::new(acts.to_vec(), participants, vec![], HashMap::new())
}

/// Whether the casts of the given acts are pairwise disjoint.
fn casts_disjoint(roster: &Roster, acts: &[&String]) -> bool {
    let mut seen: HashSet<&str> = HashSet::new();
    for act in acts {
        for member in roster.participants_of(act).unwrap() {
            if !seen.insert(member) {
                return false;
            }
        }
    }
    true
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    /// Every accepted combination really has pairwise-disjoint casts.
    #[test]
    fn accepted_combinations_share_no_participant((acts, rooms) in arb_scenario()) {
        let roster = build_roster(&acts);
        let candidates: Vec<String> = acts.iter().map(|(name, _)| name.clone()).collect();

        if let Distribution::Valid(combos) =
            optimal_distribution(&roster, &candidates, rooms).unwrap()
        {
            for combo in &combos {
                let refs: Vec<&String> = combo.iter().collect();
                prop_assert!(casts_disjoint(&roster, &refs));
            }
        }
    }

    /// The sentinel appears exactly when brute force finds no disjoint subset.
    #[test]
    fn sentinel_iff_no_disjoint_subset_exists((acts, rooms) in arb_scenario()) {
        use itertools::Itertools;

        let roster = build_roster(&acts);
        let candidates: Vec<String> = acts.iter().map(|(name, _)| name.clone()).collect();

        let any_disjoint = candidates
            .iter()
            .combinations(rooms)
            .any(|combo| casts_disjoint(&roster, &combo));

        let result = optimal_distribution(&roster, &candidates, rooms).unwrap();
        match result {
            Distribution::Valid(combos) => {
                prop_assert!(any_disjoint);
                prop_assert!(!combos.is_empty(), "Valid must never hold an empty list");
            }
            Distribution::NoGoodCombination => prop_assert!(!any_disjoint),
        }
    }

    /// Booking counts always sum to the total cast occurrences, and the
    /// report is a pure function of its inputs.
    #[test]
    fn crossref_counts_and_idempotence(acts in arb_acts()) {
        let roster = build_roster(&acts);
        let queried: Vec<String> = acts.iter().map(|(name, _)| name.clone()).collect();

        let rows = crossref(&roster, &queried).unwrap();

        let occurrences: usize = acts.iter().map(|(_, cast)| cast.len()).sum();
        let total_bookings: usize = rows.iter().map(|row| row.bookings).sum();
        prop_assert_eq!(occurrences, total_bookings);

        // Sorted by bookings, descending.
        prop_assert!(rows.windows(2).all(|w| w[0].bookings >= w[1].bookings));

        let again = crossref(&roster, &queried).unwrap();
        prop_assert_eq!(rows, again);
    }
}
