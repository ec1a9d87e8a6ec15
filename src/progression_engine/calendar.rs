//! Calendar gating for daily entries.
//!
//! A student must fill missed days in order before anything else opens:
//! the earliest unfilled day in the lookback window is the only selectable
//! date. With no backlog, today opens if it has no entry yet.
//!
//! Every function takes the full history and "today" explicitly; nothing
//! reads the clock.

use std::collections::BTreeSet;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::progression_engine::models::{DailyEntry, EntryKind};

/// Default lookback when scanning for the first missing day.
pub const LOOKBACK_DAYS: u32 = 30;

/// Dates a student already has an entry for, for one entry kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryHistory {
    dates: BTreeSet<NaiveDate>,
}

impl EntryHistory {
    pub fn from_dates(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        EntryHistory { dates: dates.into_iter().collect() }
    }

    /// Filter a mixed entry list down to one student and kind.
    pub fn for_student(entries: &[DailyEntry], student_id: &str, kind: EntryKind) -> Self {
        Self::from_dates(
            entries
                .iter()
                .filter(|e| e.student_id == student_id && e.kind == kind)
                .map(|e| e.date),
        )
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    pub fn first_entry(&self) -> Option<NaiveDate> {
        self.dates.iter().next().copied()
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateState {
    Future,
    Filled,
    Selectable,
    Locked,
}

/// First unfilled day before `today`, scanning from the later of
/// `today - 30` and the first-ever entry. Days before the first entry are
/// not gaps; a student with no history has no backlog.
pub fn first_missing_before(history: &EntryHistory, today: NaiveDate) -> Option<NaiveDate> {
    first_missing_before_with(history, today, LOOKBACK_DAYS)
}

pub fn first_missing_before_with(
    history: &EntryHistory,
    today: NaiveDate,
    lookback_days: u32,
) -> Option<NaiveDate> {
    let first = history.first_entry()?;
    let window_start = today
        .checked_sub_days(Days::new(lookback_days as u64))
        .unwrap_or(NaiveDate::MIN);
    let mut day = first.max(window_start);

    while day < today {
        if !history.contains(day) {
            return Some(day);
        }
        day = day.succ_opt()?;
    }
    None
}

/// The single date open for a new entry, if any.
pub fn selectable_date(history: &EntryHistory, today: NaiveDate, lookback_days: u32) -> Option<NaiveDate> {
    match first_missing_before_with(history, today, lookback_days) {
        Some(missing) => Some(missing),
        None if !history.contains(today) => Some(today),
        None => None,
    }
}

/// State of one date as the entry form sees it. Uses the same gate as
/// [`selectable_date`], so pass the configured lookback.
pub fn date_state(
    date: NaiveDate,
    history: &EntryHistory,
    today: NaiveDate,
    lookback_days: u32,
) -> DateState {
    cell_state(date, history, today, selectable_date(history, today, lookback_days))
}

pub fn is_selectable(date: NaiveDate, history: &EntryHistory, today: NaiveDate, lookback_days: u32) -> bool {
    date_state(date, history, today, lookback_days) == DateState::Selectable
}

fn cell_state(date: NaiveDate, history: &EntryHistory, today: NaiveDate, open: Option<NaiveDate>) -> DateState {
    if date > today {
        DateState::Future
    } else if history.contains(date) {
        DateState::Filled
    } else if open == Some(date) {
        DateState::Selectable
    } else {
        DateState::Locked
    }
}

/// One day of a month view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub state: DateState,
}

/// State of every day in a month; empty for an invalid year/month.
pub fn calendar_month(
    year: i32,
    month: u32,
    history: &EntryHistory,
    today: NaiveDate,
    lookback_days: u32,
) -> Vec<DayCell> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let open = selectable_date(history, today, lookback_days);
    tracing::debug!("calendar {year}-{month:02}: open date {open:?}");

    first
        .iter_days()
        .take_while(|d| d.month() == month)
        .map(|date| DayCell { date, state: cell_state(date, history, today, open) })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression_engine::models::EntryStatus;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 20).unwrap()
    }

    fn days_ago(n: u64) -> NaiveDate {
        today().checked_sub_days(Days::new(n)).unwrap()
    }

    fn history_except(range: std::ops::RangeInclusive<u64>, skip: &[u64]) -> EntryHistory {
        EntryHistory::from_dates(range.filter(|n| !skip.contains(n)).map(days_ago))
    }

    #[test]
    fn gap_is_the_only_open_date() {
        let history = history_except(1..=10, &[4]);
        assert_eq!(first_missing_before(&history, today()), Some(days_ago(4)));
        assert!(is_selectable(days_ago(4), &history, today(), LOOKBACK_DAYS));
        for n in 0..=3 {
            assert!(!is_selectable(days_ago(n), &history, today(), LOOKBACK_DAYS), "T-{n} should be locked");
        }
        assert_eq!(date_state(today(), &history, today(), LOOKBACK_DAYS), DateState::Locked);
        assert_eq!(date_state(days_ago(5), &history, today(), LOOKBACK_DAYS), DateState::Filled);
    }

    #[test]
    fn no_backlog_opens_today_once() {
        let history = history_except(1..=10, &[]);
        assert_eq!(first_missing_before(&history, today()), None);
        assert!(is_selectable(today(), &history, today(), LOOKBACK_DAYS));

        let filled = EntryHistory::from_dates((0..=10).map(days_ago));
        assert_eq!(date_state(today(), &filled, today(), LOOKBACK_DAYS), DateState::Filled);
        assert_eq!(selectable_date(&filled, today(), LOOKBACK_DAYS), None);
    }

    #[test]
    fn new_student_can_start_today() {
        let history = EntryHistory::default();
        assert_eq!(first_missing_before(&history, today()), None);
        assert!(is_selectable(today(), &history, today(), LOOKBACK_DAYS));
        assert_eq!(date_state(days_ago(3), &history, today(), LOOKBACK_DAYS), DateState::Locked);
    }

    #[test]
    fn future_dates_never_open() {
        let history = EntryHistory::default();
        let tomorrow = today().succ_opt().unwrap();
        assert_eq!(date_state(tomorrow, &history, today(), LOOKBACK_DAYS), DateState::Future);
    }

    #[test]
    fn gaps_older_than_lookback_are_ignored() {
        // Entry 40 days ago, then nothing until the last 30 days are full.
        let mut dates: Vec<NaiveDate> = vec![days_ago(40)];
        dates.extend((1..=30).map(days_ago));
        let history = EntryHistory::from_dates(dates);
        assert_eq!(first_missing_before(&history, today()), None);
        assert_eq!(first_missing_before_with(&history, today(), 45), Some(days_ago(39)));
    }

    #[test]
    fn longer_lookback_reopens_old_gap() {
        let mut dates: Vec<NaiveDate> = vec![days_ago(40)];
        dates.extend((1..=30).map(days_ago));
        let history = EntryHistory::from_dates(dates);

        assert!(is_selectable(today(), &history, today(), LOOKBACK_DAYS));
        assert!(!is_selectable(today(), &history, today(), 45));
        assert_eq!(date_state(days_ago(39), &history, today(), 45), DateState::Selectable);
        assert_eq!(date_state(days_ago(39), &history, today(), LOOKBACK_DAYS), DateState::Locked);

        let cells = calendar_month(2024, 2, &history, today(), 45);
        let open: Vec<NaiveDate> =
            cells.iter().filter(|c| c.state == DateState::Selectable).map(|c| c.date).collect();
        assert_eq!(open, vec![days_ago(39)]);
    }

    #[test]
    fn history_is_filtered_by_student_and_kind() {
        let entry = |student: &str, n: u64, kind| DailyEntry {
            student_id: student.to_string(),
            date: days_ago(n),
            kind,
            status: EntryStatus::Passed,
            score: Some(95),
        };
        let entries = vec![
            entry("a", 3, EntryKind::Ziyadah),
            entry("a", 1, EntryKind::Ziyadah),
            entry("a", 2, EntryKind::Murojaah),
            entry("b", 2, EntryKind::Ziyadah),
        ];
        let history = EntryHistory::for_student(&entries, "a", EntryKind::Ziyadah);
        assert_eq!(history.len(), 2);
        assert_eq!(first_missing_before(&history, today()), Some(days_ago(2)));
    }

    #[test]
    fn month_view_marks_each_day() {
        let history = history_except(1..=10, &[4]);
        let cells = calendar_month(2024, 3, &history, today(), LOOKBACK_DAYS);
        assert_eq!(cells.len(), 31);
        let selectable: Vec<NaiveDate> = cells
            .iter()
            .filter(|c| c.state == DateState::Selectable)
            .map(|c| c.date)
            .collect();
        assert_eq!(selectable, vec![days_ago(4)]);
        assert_eq!(cells[30].state, DateState::Future);
        assert!(calendar_month(2024, 13, &history, today(), LOOKBACK_DAYS).is_empty());
    }
}
