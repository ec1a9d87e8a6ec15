//! Persistence seam for student progress and daily entries.
//!
//! The engine itself never touches a store; callers load history from one,
//! pass it into the engine, and write back the result. `InMemoryStore`
//! backs tests and the demo.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::NaiveDate;

use crate::progression_engine::{
    calendar::{selectable_date, EntryHistory},
    config::EngineConfig,
    error::StoreError,
    models::{DailyEntry, EntryKind, StudentProgress},
};

pub trait ProgressStore {
    fn progress(&self, student_id: &str) -> Option<StudentProgress>;

    fn save_progress(&self, progress: StudentProgress);

    /// Entries of one student and kind, oldest first.
    fn entries(&self, student_id: &str, kind: EntryKind) -> Vec<DailyEntry>;

    /// Append a daily entry. Entries are never updated or removed.
    fn append_entry(&self, entry: DailyEntry) -> Result<(), StoreError>;
}

#[derive(Default)]
struct Inner {
    progress: HashMap<String, StudentProgress>,
    entries: Vec<DailyEntry>,
}

#[derive(Default)]
pub struct InMemoryStore {
    inner: Mutex<Inner>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ProgressStore for InMemoryStore {
    fn progress(&self, student_id: &str) -> Option<StudentProgress> {
        self.lock().progress.get(student_id).cloned()
    }

    fn save_progress(&self, progress: StudentProgress) {
        self.lock().progress.insert(progress.student_id.clone(), progress);
    }

    fn entries(&self, student_id: &str, kind: EntryKind) -> Vec<DailyEntry> {
        let mut out: Vec<DailyEntry> = self
            .lock()
            .entries
            .iter()
            .filter(|e| e.student_id == student_id && e.kind == kind)
            .cloned()
            .collect();
        out.sort_by_key(|e| e.date);
        out
    }

    fn append_entry(&self, entry: DailyEntry) -> Result<(), StoreError> {
        let mut inner = self.lock();
        let exists = inner
            .entries
            .iter()
            .any(|e| e.student_id == entry.student_id && e.kind == entry.kind && e.date == entry.date);
        if exists {
            return Err(StoreError::DuplicateEntry {
                student_id: entry.student_id,
                date: entry.date,
                kind: entry.kind,
            });
        }
        inner.entries.push(entry);
        Ok(())
    }
}

/// Record a new daily entry if the calendar gate allows its date.
pub fn record_daily_entry<S: ProgressStore + ?Sized>(
    store: &S,
    entry: DailyEntry,
    today: NaiveDate,
    config: &EngineConfig,
) -> Result<(), StoreError> {
    let history = EntryHistory::from_dates(
        store
            .entries(&entry.student_id, entry.kind)
            .into_iter()
            .map(|e| e.date),
    );
    let open = selectable_date(&history, today, config.calendar_lookback_days);
    if open != Some(entry.date) {
        if history.contains(entry.date) {
            return Err(StoreError::DuplicateEntry {
                student_id: entry.student_id,
                date: entry.date,
                kind: entry.kind,
            });
        }
        tracing::debug!("rejected {} entry for {} on {}", entry.kind, entry.student_id, entry.date);
        return Err(StoreError::DateNotSelectable { date: entry.date, kind: entry.kind, next_open: open });
    }
    store.append_entry(entry)
}
