//! Error types for the fallible edges around the engine.
//!
//! The scoring, eligibility, generator and calendar functions never fail;
//! only configuration loading and the entry store return these.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

use crate::progression_engine::models::EntryKind;

/// Errors raised while loading or validating an [`EngineConfig`](super::config::EngineConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Errors raised by a [`ProgressStore`](super::store::ProgressStore).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Daily entries are append-only; a second entry for the same key is rejected.
    #[error("{kind} entry for {student_id} on {date} already exists")]
    DuplicateEntry {
        student_id: String,
        date: NaiveDate,
        kind: EntryKind,
    },

    /// The calendar gate does not allow a new entry on this date.
    #[error("{date} is not open for a new {kind} entry (next open date: {next_open:?})")]
    DateNotSelectable {
        date: NaiveDate,
        kind: EntryKind,
        next_open: Option<NaiveDate>,
    },
}
