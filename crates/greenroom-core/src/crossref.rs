//! Cross-reference a set of acts for participant overlap.
//!
//! Produces one row per participant appearing in the queried acts: how many
//! of those acts book them, their availability category, and the exact acts
//! that clash for them. A booking count above 1 means the participant would
//! have to be in two rooms at once.

use serde::{Deserialize, Serialize};

use crate::availability;
use crate::error::Result;
use crate::roster::Roster;

/// One row of the overlap report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapRow {
    pub participant: String,
    /// Number of queried acts this participant appears in.
    pub bookings: usize,
    pub availability: availability::Category,
    /// The queried acts this participant is in, in queried order. These are
    /// the acts that clash when `bookings > 1`.
    pub clashing_acts: Vec<String>,
}

/// Cross-reference `act_list` and report per-participant booking counts.
///
/// The input is taken literally: listing the same act twice double-counts
/// its cast. Rows are sorted by booking count descending; ties keep the
/// order in which participants were first encountered. No participant is
/// omitted, even with a booking count of exactly 1.
///
/// Fails with [`ScheduleError::UnknownAct`] before producing any rows if an
/// act name is not in the membership table.
///
/// [`ScheduleError::UnknownAct`]: crate::error::ScheduleError::UnknownAct
pub fn crossref<S: AsRef<str>>(roster: &Roster, act_list: &[S]) -> Result<Vec<OverlapRow>> {
    // Multiset of participants across the queried acts, one occurrence per
    // act membership. Validates every act name up front.
    let mut occurrences: Vec<&str> = Vec::new();
    for act in act_list {
        for member in roster.participants_of(act.as_ref())? {
            occurrences.push(member.as_str());
        }
    }

    // Count occurrences per distinct participant, first-seen order.
    let mut order: Vec<&str> = Vec::new();
    let mut counts: Vec<usize> = Vec::new();
    for name in occurrences {
        match order.iter().position(|&p| p == name) {
            Some(i) => counts[i] += 1,
            None => {
                order.push(name);
                counts.push(1);
            }
        }
    }

    let mut rows = Vec::with_capacity(order.len());
    for (participant, bookings) in order.into_iter().zip(counts) {
        // Set intersection of the participant's global acts with the queried
        // list, so a duplicated query act still appears once as evidence.
        let global_acts = roster.acts_of(participant)?;
        let mut clashing_acts: Vec<String> = Vec::new();
        for queried in act_list.iter().map(AsRef::as_ref) {
            if global_acts.iter().any(|a| a == queried)
                && !clashing_acts.iter().any(|a| a == queried)
            {
                clashing_acts.push(queried.to_string());
            }
        }

        rows.push(OverlapRow {
            participant: participant.to_string(),
            bookings,
            availability: availability::category(roster, participant)?,
            clashing_acts,
        });
    }

    // Stable sort keeps first-seen order within equal counts.
    rows.sort_by(|a, b| b.bookings.cmp(&a.bookings));

    Ok(rows)
}
