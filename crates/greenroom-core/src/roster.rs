//! The loaded show roster: act membership plus time-slot unavailability.
//!
//! A [`Roster`] is built once (by the loader or directly in tests) and is
//! read-only afterwards. It answers the membership questions — who is in act
//! X, which acts is person Y in — and exposes the raw unavailability table
//! that the availability classifier interprets.

use std::collections::HashMap;

use crate::error::{Result, ScheduleError};

/// Immutable store for the two source tables and the derived membership index.
#[derive(Debug, Clone)]
pub struct Roster {
    /// Act names in membership-table order.
    act_names: Vec<String>,
    /// Cast of each act, in membership-table column order.
    act_members: HashMap<String, Vec<String>>,
    /// Derived index: participant → acts they appear in, in act order.
    participant_acts: HashMap<String, Vec<String>>,
    /// Every known participant: times-table order first, then any
    /// membership-only names in first-seen act order.
    participants: Vec<String>,
    /// Time-slot labels in table order. Labels are opaque; position is the
    /// only ordering.
    slots: Vec<String>,
    /// Participant → slots they are unavailable during.
    unavailable: HashMap<String, Vec<String>>,
}

impl Roster {
    /// Build a roster from in-memory tables.
    ///
    /// * `acts` — one `(act name, cast)` pair per membership-table row.
    /// * `participants` — the times-table participant list, in column order.
    /// * `slots` — the slot labels of the day, in row order.
    /// * `unavailable` — per-participant unavailable slots.
    ///
    /// Participants appearing in an act but missing from `participants` are
    /// appended to the full list; they have no unavailability entries.
    pub fn new(
        acts: Vec<(String, Vec<String>)>,
        participants: Vec<String>,
        slots: Vec<String>,
        unavailable: HashMap<String, Vec<String>>,
    ) -> Self {
        let mut act_names = Vec::with_capacity(acts.len());
        let mut act_members = HashMap::new();
        let mut participant_acts: HashMap<String, Vec<String>> = HashMap::new();
        let mut all = participants;

        for (act, members) in acts {
            for member in &members {
                participant_acts
                    .entry(member.clone())
                    .or_default()
                    .push(act.clone());
                if !all.iter().any(|p| p == member) {
                    all.push(member.clone());
                }
            }
            act_names.push(act.clone());
            act_members.insert(act, members);
        }

        Roster {
            act_names,
            act_members,
            participant_acts,
            participants: all,
            slots,
            unavailable,
        }
    }

    /// All act names, in membership-table order.
    pub fn acts(&self) -> &[String] {
        &self.act_names
    }

    /// The cast of `act`.
    pub fn participants_of(&self, act: &str) -> Result<&[String]> {
        self.act_members
            .get(act)
            .map(Vec::as_slice)
            .ok_or_else(|| ScheduleError::UnknownAct(act.to_string()))
    }

    /// The acts `participant` appears in (empty for participants only present
    /// in the times table).
    pub fn acts_of(&self, participant: &str) -> Result<&[String]> {
        if let Some(acts) = self.participant_acts.get(participant) {
            return Ok(acts);
        }
        if self.participants.iter().any(|p| p == participant) {
            return Ok(&[]);
        }
        Err(ScheduleError::UnknownParticipant(participant.to_string()))
    }

    /// Every known participant, or, with `performers_only`, just those who
    /// appear in at least one act.
    pub fn all_participants(&self, performers_only: bool) -> Vec<&str> {
        self.participants
            .iter()
            .filter(|p| !performers_only || self.participant_acts.contains_key(p.as_str()))
            .map(String::as_str)
            .collect()
    }

    /// Whether `participant` appears in either source table.
    pub fn knows_participant(&self, participant: &str) -> bool {
        self.participant_acts.contains_key(participant)
            || self.participants.iter().any(|p| p == participant)
    }

    /// The slot labels of the day, in table order.
    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    /// Total number of known slots.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// The raw unavailable-slot list for `participant`. Callers normally want
    /// [`crate::availability::unavailable_slots`], which wraps the fully
    /// booked case in a sentinel instead of returning the whole slot list.
    pub fn raw_unavailable_slots(&self, participant: &str) -> Result<&[String]> {
        if !self.knows_participant(participant) {
            return Err(ScheduleError::UnknownParticipant(participant.to_string()));
        }
        Ok(self
            .unavailable
            .get(participant)
            .map(Vec::as_slice)
            .unwrap_or(&[]))
    }
}
