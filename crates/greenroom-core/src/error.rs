//! Error types for greenroom-core operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    /// An act name referenced by a query is not in the membership table.
    #[error("Unknown act: {0}")]
    UnknownAct(String),

    /// A participant name referenced by a query appears in neither table.
    #[error("Unknown participant: {0}")]
    UnknownParticipant(String),

    /// Room count out of range for the candidate act list.
    #[error("Invalid room count: {rooms} rooms for {candidates} candidate acts")]
    InvalidRoomCount { rooms: usize, candidates: usize },

    /// A source table could not be read (loading path).
    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),

    /// A source table was structurally unusable (e.g., no header row).
    #[error("Malformed table: {0}")]
    Malformed(String),
}

/// Convenience alias used throughout greenroom-core.
pub type Result<T> = std::result::Result<T, ScheduleError>;
