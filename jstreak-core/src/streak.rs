//! Streak math over a user's entry days.
//!
//! All functions here are pure: they read their arguments, allocate fresh
//! results and never consult the wall clock. "Today" is always a parameter.

use crate::day::{CalendarDay, DayFrame, ToDay, days_between};
use crate::entry::Entry;
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};
use tracing::debug;

/// Streak statistics for one user, computed fresh on every call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakResult {
    /// Consecutive days with an entry, counted back from today or yesterday.
    pub current_streak: u32,
    /// Longest run of consecutive days anywhere in the history.
    pub longest_streak: u32,
    /// Most recent day with an entry, `None` for an empty history.
    pub last_entry_date: Option<CalendarDay>,
    /// The days of the current streak, oldest first.
    pub streak_dates: Vec<CalendarDay>,
}

/// Length and days of the streak running up to today.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrentStreak {
    pub streak: u32,
    /// Ascending.
    pub dates: Vec<CalendarDay>,
}

/// Distinct entry days, most recent first.
pub fn unique_days(entries: &[Entry], frame: DayFrame) -> Vec<CalendarDay> {
    let days: BTreeSet<CalendarDay> = entries
        .iter()
        .map(|entry| entry.created_at.to_day(frame))
        .collect();
    days.into_iter().rev().collect()
}

/// The streak that is still alive on `today`.
///
/// A streak survives until a full day is missed: if nothing was written today
/// yet, counting starts from yesterday instead. Walks back one day at a time
/// and stops at the first day without an entry. `days` must be the strictly
/// descending output of [`unique_days`].
pub fn current_streak(days: &[CalendarDay], today: CalendarDay) -> CurrentStreak {
    if days.is_empty() {
        return CurrentStreak::default();
    }
    let present: HashSet<CalendarDay> = days.iter().copied().collect();
    let start = if present.contains(&today) {
        Some(today)
    } else {
        today.checked_add_days(-1)
    };
    let Some(start) = start else {
        return CurrentStreak::default();
    };

    // The streak can never be longer than the number of distinct days.
    let mut dates: Vec<CalendarDay> = (0..days.len() as i64)
        .map_while(|offset| start.checked_add_days(-offset))
        .take_while(|day| present.contains(day))
        .collect();
    dates.reverse();

    CurrentStreak {
        streak: dates.len() as u32,
        dates,
    }
}

/// Longest run of calendar-consecutive days in `days` (strictly descending).
pub fn longest_streak(days: &[CalendarDay]) -> u32 {
    if days.is_empty() {
        return 0;
    }
    let mut longest = 1;
    let mut run = 1;
    for pair in days.windows(2) {
        if days_between(pair[0], pair[1]) == 1 {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 1;
        }
    }
    longest
}

/// Whether the most recent entry was written today or yesterday.
///
/// Works straight from the raw entries, so it can be asked without
/// computing the full [`StreakResult`].
pub fn is_active(entries: &[Entry], today: CalendarDay, frame: DayFrame) -> bool {
    let Some(last) = entries
        .iter()
        .map(|entry| entry.created_at.to_day(frame))
        .max()
    else {
        return false;
    };
    last == today || today.checked_add_days(-1) == Some(last)
}

/// Computes the full [`StreakResult`] for `entries` as of `today`.
pub fn calculate_streak(entries: &[Entry], today: CalendarDay, frame: DayFrame) -> StreakResult {
    let days = unique_days(entries, frame);
    let current = current_streak(&days, today);
    let longest = longest_streak(&days);

    debug!(
        entries = entries.len(),
        unique_days = days.len(),
        %today,
        %frame,
        current = current.streak,
        longest,
        "calculated streak"
    );

    StreakResult {
        current_streak: current.streak,
        longest_streak: longest,
        last_entry_date: days.first().copied(),
        streak_dates: current.dates,
    }
}
