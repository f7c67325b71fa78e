//! Enumerate room assignments with zero participant overlap.
//!
//! Every K-sized combination of the candidate acts is cross-referenced; a
//! combination survives only if no participant is booked into more than one
//! of its acts. The search is exhaustive — C(N,K) evaluations with no
//! pruning — which is fine at the intended scale of a few dozen candidate
//! acts per query.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::crossref::crossref;
use crate::error::{Result, ScheduleError};
use crate::roster::Roster;

/// Outcome of a distribution search.
///
/// "Searched and found nothing" is a distinct, representable outcome rather
/// than an empty list, so callers cannot confuse it with a query that never
/// ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Distribution {
    /// Every combination of acts that can run in parallel without a clash,
    /// in enumeration order. Act order within a combination follows the
    /// candidate list.
    Valid(Vec<Vec<String>>),
    /// No combination of the requested size is clash-free.
    NoGoodCombination,
}

/// Find every `rooms`-sized combination of `candidates` whose acts share no
/// participant.
///
/// Combinations are enumerated in lexicographic order over candidate
/// positions. A combination is accepted iff its overlap report contains no
/// row with a booking count above 1 — equivalently, the number of distinct
/// participants equals the total number of bookings.
///
/// Fails with [`ScheduleError::InvalidRoomCount`] when `rooms` is 0 or
/// exceeds the candidate count, and propagates
/// [`ScheduleError::UnknownAct`] from the overlap report.
pub fn optimal_distribution<S: AsRef<str>>(
    roster: &Roster,
    candidates: &[S],
    rooms: usize,
) -> Result<Distribution> {
    if rooms < 1 || rooms > candidates.len() {
        return Err(ScheduleError::InvalidRoomCount {
            rooms,
            candidates: candidates.len(),
        });
    }

    let mut valid: Vec<Vec<String>> = Vec::new();
    for combination in candidates.iter().map(AsRef::as_ref).combinations(rooms) {
        let report = crossref(roster, &combination)?;

        let distinct = report.len();
        let total_bookings: usize = report.iter().map(|row| row.bookings).sum();
        if distinct == total_bookings {
            valid.push(combination.into_iter().map(str::to_string).collect());
        }
    }

    if valid.is_empty() {
        Ok(Distribution::NoGoodCombination)
    } else {
        Ok(Distribution::Valid(valid))
    }
}
