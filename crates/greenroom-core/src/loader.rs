//! Load the two CSV source tables into a [`Roster`].
//!
//! Membership table: header row is a label cell followed by participant
//! names; each data row is an act name followed by cells, where any
//! non-empty cell marks that participant as part of the act.
//!
//! Times table: header row is the day label followed by participant names;
//! each data row is a slot label followed by cells, where any non-empty cell
//! marks that participant as unavailable during the slot. Rows with an empty
//! slot label are not part of the day and are skipped entirely.

use std::collections::HashMap;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{Result, ScheduleError};
use crate::roster::Roster;

/// Truncation limits applied while loading, mirroring the source tables'
/// configured maximum act and participant counts. `None` means unlimited.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoaderOptions {
    pub max_acts: Option<usize>,
    pub max_participants: Option<usize>,
}

/// Load both tables and build the roster.
pub fn load_roster(
    membership_path: &Path,
    times_path: &Path,
    options: &LoaderOptions,
) -> Result<Roster> {
    let acts = load_membership(membership_path, options)?;
    let (participants, slots, unavailable) = load_times(times_path)?;
    Ok(Roster::new(acts, participants, slots, unavailable))
}

/// Read the membership table: one `(act name, cast)` pair per data row.
pub fn load_membership(
    path: &Path,
    options: &LoaderOptions,
) -> Result<Vec<(String, Vec<String>)>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;
    let mut records = reader.records();

    let header = match records.next() {
        Some(record) => record?,
        None => {
            return Err(ScheduleError::Malformed(
                "membership table has no header row".to_string(),
            ))
        }
    };

    // Header: label cell, then participant names, truncated to the
    // configured maximum.
    let limit = options.max_participants.unwrap_or(usize::MAX);
    let participants: Vec<String> = header
        .iter()
        .skip(1)
        .take(limit)
        .map(|cell| cell.trim().to_string())
        .collect();

    let max_acts = options.max_acts.unwrap_or(usize::MAX);
    let mut acts = Vec::new();
    for record in records {
        if acts.len() >= max_acts {
            break;
        }
        let record = record?;
        let act = match record.get(0) {
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            _ => continue,
        };

        let members: Vec<String> = participants
            .iter()
            .enumerate()
            .filter(|(i, name)| {
                !name.is_empty()
                    && record
                        .get(i + 1)
                        .is_some_and(|cell| !cell.trim().is_empty())
            })
            .map(|(_, name)| name.clone())
            .collect();

        acts.push((act, members));
    }

    Ok(acts)
}

/// Read the times table. Returns the participant list, the slot labels of
/// the day, and the per-participant unavailable slots.
#[allow(clippy::type_complexity)]
pub fn load_times(
    path: &Path,
) -> Result<(Vec<String>, Vec<String>, HashMap<String, Vec<String>>)> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;
    let mut records = reader.records();

    let header = match records.next() {
        Some(record) => record?,
        None => {
            return Err(ScheduleError::Malformed(
                "times table has no header row".to_string(),
            ))
        }
    };

    // Header: day label, then participant names. Empty header cells keep
    // their column position so later cells still line up.
    let columns: Vec<String> = header
        .iter()
        .skip(1)
        .map(|cell| cell.trim().to_string())
        .collect();

    let mut slots = Vec::new();
    let mut unavailable: HashMap<String, Vec<String>> = HashMap::new();
    for record in records {
        let record = record?;
        // An empty day-column cell means this row is not a slot of the day.
        let slot = match record.get(0) {
            Some(label) if !label.trim().is_empty() => label.trim().to_string(),
            _ => continue,
        };

        for (i, participant) in columns.iter().enumerate() {
            if !participant.is_empty()
                && record
                    .get(i + 1)
                    .is_some_and(|cell| !cell.trim().is_empty())
            {
                unavailable
                    .entry(participant.clone())
                    .or_default()
                    .push(slot.clone());
            }
        }

        slots.push(slot);
    }

    let participants = columns.into_iter().filter(|n| !n.is_empty()).collect();
    Ok((participants, slots, unavailable))
}
