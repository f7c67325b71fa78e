//! Classify each participant's time-slot availability.
//!
//! A participant's category is a pure function of how many of the day's slots
//! they are unavailable for: none → fully available, all → fully booked,
//! anything in between → partly available.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::roster::Roster;

/// A participant's unavailable slots, with the degenerate "every slot" case
/// made explicit so callers never have to enumerate a synthetic full list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unavailability {
    /// Unavailable during every known slot.
    FullyBooked,
    /// Unavailable during these slots (possibly none).
    Slots(Vec<String>),
}

/// The three-way availability classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    FullyAvailable,
    PartlyAvailable,
    FullyBooked,
}

/// Every known participant partitioned into the three categories.
///
/// The groups are pairwise disjoint and their union is the full participant
/// list. Participants with zero acts are still classified when present in
/// the times table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    pub fully_available: Vec<String>,
    pub partly_available: Vec<String>,
    pub fully_booked: Vec<String>,
}

/// The slots `participant` is unavailable during, as a tagged result.
///
/// Returns [`Unavailability::FullyBooked`] when the unavailable set covers
/// every known slot.
pub fn unavailable_slots(roster: &Roster, participant: &str) -> Result<Unavailability> {
    let slots = roster.raw_unavailable_slots(participant)?;
    if !slots.is_empty() && slots.len() == roster.slot_count() {
        Ok(Unavailability::FullyBooked)
    } else {
        Ok(Unavailability::Slots(slots.to_vec()))
    }
}

/// Classify `participant` into one of the three categories.
pub fn category(roster: &Roster, participant: &str) -> Result<Category> {
    let unavailable = roster.raw_unavailable_slots(participant)?.len();
    Ok(categorize(unavailable, roster.slot_count()))
}

/// Partition every known participant into the three categories.
pub fn classify_all(roster: &Roster) -> Partition {
    let mut partition = Partition {
        fully_available: Vec::new(),
        partly_available: Vec::new(),
        fully_booked: Vec::new(),
    };

    for participant in roster.all_participants(false) {
        let unavailable = roster
            .raw_unavailable_slots(participant)
            .map(|slots| slots.len())
            .unwrap_or(0);
        let group = match categorize(unavailable, roster.slot_count()) {
            Category::FullyAvailable => &mut partition.fully_available,
            Category::PartlyAvailable => &mut partition.partly_available,
            Category::FullyBooked => &mut partition.fully_booked,
        };
        group.push(participant.to_string());
    }

    partition
}

fn categorize(unavailable: usize, total_slots: usize) -> Category {
    if unavailable == 0 {
        Category::FullyAvailable
    } else if unavailable == total_slots {
        Category::FullyBooked
    } else {
        Category::PartlyAvailable
    }
}
