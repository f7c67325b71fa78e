//! Tests for the roster store and membership index.

use std::collections::HashMap;

use greenroom_core::error::ScheduleError;
use greenroom_core::Roster;

fn acts(pairs: &[(&str, &[&str])]) -> Vec<(String, Vec<String>)> {
    pairs
        .iter()
        .map(|(act, members)| {
            (
                act.to_string(),
                members.iter().map(|m| m.to_string()).collect(),
            )
        })
        .collect()
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|n| n.to_string()).collect()
}

/// The show used across these tests: Bob is in two acts, Frank is in none.
fn roster() -> Roster {
    let mut unavailable = HashMap::new();
    unavailable.insert("Bob".to_string(), names(&["10:00"]));

    Roster::new(
        acts(&[
            ("Intro", &["Alice", "Bob"]),
            ("Song", &["Bob", "Carol"]),
            ("Dance", &["Dave", "Eve"]),
        ]),
        names(&["Alice", "Bob", "Carol", "Dave", "Eve", "Frank"]),
        names(&["10:00", "11:00", "12:00"]),
        unavailable,
    )
}

#[test]
fn acts_preserve_table_order() {
    assert_eq!(roster().acts(), &["Intro", "Song", "Dance"]);
}

#[test]
fn participants_of_returns_the_cast() {
    let roster = roster();
    assert_eq!(roster.participants_of("Song").unwrap(), &["Bob", "Carol"]);
}

#[test]
fn participants_of_unknown_act_fails() {
    let err = roster().participants_of("Finale").unwrap_err();
    assert!(matches!(err, ScheduleError::UnknownAct(name) if name == "Finale"));
}

#[test]
fn acts_of_returns_every_act_of_a_participant() {
    let roster = roster();
    assert_eq!(roster.acts_of("Bob").unwrap(), &["Intro", "Song"]);
    assert_eq!(roster.acts_of("Eve").unwrap(), &["Dance"]);
}

#[test]
fn acts_of_participant_with_no_acts_is_empty() {
    // Frank is only in the times table.
    let roster = roster();
    assert_eq!(roster.acts_of("Frank").unwrap(), &[] as &[String]);
}

#[test]
fn acts_of_unknown_participant_fails() {
    let err = roster().acts_of("Zed").unwrap_err();
    assert!(matches!(err, ScheduleError::UnknownParticipant(name) if name == "Zed"));
}

#[test]
fn all_participants_full_vs_performers_only() {
    let roster = roster();

    assert_eq!(
        roster.all_participants(false),
        vec!["Alice", "Bob", "Carol", "Dave", "Eve", "Frank"]
    );
    // Frank drops out when restricted to performers.
    assert_eq!(
        roster.all_participants(true),
        vec!["Alice", "Bob", "Carol", "Dave", "Eve"]
    );
}

#[test]
fn membership_only_participant_is_appended_to_the_full_list() {
    // Grace performs but never appears in the times table.
    let roster = Roster::new(
        acts(&[("Solo", &["Grace"])]),
        names(&["Alice"]),
        names(&["10:00"]),
        HashMap::new(),
    );

    assert_eq!(roster.all_participants(false), vec!["Alice", "Grace"]);
    assert_eq!(roster.all_participants(true), vec!["Grace"]);
    assert_eq!(roster.raw_unavailable_slots("Grace").unwrap(), &[] as &[String]);
}

#[test]
fn slot_count_matches_the_day() {
    let roster = roster();
    assert_eq!(roster.slot_count(), 3);
    assert_eq!(roster.slots(), &["10:00", "11:00", "12:00"]);
}

#[test]
fn raw_unavailable_slots_defaults_to_empty() {
    let roster = roster();
    assert_eq!(roster.raw_unavailable_slots("Bob").unwrap(), &["10:00"]);
    assert_eq!(roster.raw_unavailable_slots("Alice").unwrap(), &[] as &[String]);
}
