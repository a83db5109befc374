//! The `StreakEngine` ties a reference frame and a clock to the streak functions.

use crate::clock::{Clock, SystemClock};
use crate::day::{CalendarDay, DayFrame};
use crate::entry::Entry;
use crate::message::{StreakStatus, status_message};
use crate::milestone::{Milestone, next_milestone};
use crate::streak::{StreakResult, calculate_streak, is_active};
use serde::Serialize;

/// Everything a front end shows about a user's streak.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakReport {
    pub today: CalendarDay,
    #[serde(flatten)]
    pub streak: StreakResult,
    pub is_active: bool,
    pub next_milestone: Milestone,
    pub status: StreakStatus,
    pub message: String,
}

/// Entry point for streak computations.
///
/// An instance holds the [`DayFrame`] timestamps are truncated in and the
/// [`Clock`] that says which day "today" is. It keeps no other state, so the
/// same engine can be shared freely.
#[derive(Debug, Clone)]
pub struct StreakEngine<C: Clock = SystemClock> {
    frame: DayFrame,
    clock: C,
}

impl StreakEngine<SystemClock> {
    /// Creates an engine reading "today" from the system clock.
    pub fn new(frame: DayFrame) -> Self {
        Self::with_clock(frame, SystemClock)
    }
}

impl<C: Clock> StreakEngine<C> {
    pub fn with_clock(frame: DayFrame, clock: C) -> Self {
        Self { frame, clock }
    }

    pub fn frame(&self) -> DayFrame {
        self.frame
    }

    pub fn today(&self) -> CalendarDay {
        self.clock.today(self.frame)
    }

    pub fn calculate(&self, entries: &[Entry]) -> StreakResult {
        calculate_streak(entries, self.today(), self.frame)
    }

    pub fn is_active(&self, entries: &[Entry]) -> bool {
        is_active(entries, self.today(), self.frame)
    }

    pub fn status_message(&self, result: &StreakResult) -> String {
        status_message(result, self.today())
    }

    /// Computes the streak plus the milestone and message derived from it.
    ///
    /// "Today" is read once, so every field agrees on the same day even if
    /// the clock ticks over midnight mid-call.
    pub fn report(&self, entries: &[Entry]) -> StreakReport {
        let today = self.today();
        let streak = calculate_streak(entries, today, self.frame);
        StreakReport {
            today,
            is_active: is_active(entries, today, self.frame),
            next_milestone: next_milestone(streak.current_streak),
            status: StreakStatus::of(&streak, today),
            message: status_message(&streak, today),
            streak,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    fn day(s: &str) -> CalendarDay {
        s.parse().unwrap()
    }

    fn engine(today: &str) -> StreakEngine<FixedClock> {
        StreakEngine::with_clock(DayFrame::Utc, FixedClock(day(today)))
    }

    fn entries(stamps: &[&str]) -> Vec<Entry> {
        stamps
            .iter()
            .enumerate()
            .map(|(i, ts)| Entry::parse(format!("e{i}"), ts).unwrap())
            .collect()
    }

    #[test]
    fn report_combines_every_piece() {
        let e = entries(&[
            "2025-09-19T21:00:00Z",
            "2025-09-20T08:00:00Z",
            "2025-09-20T22:00:00Z",
            "2025-09-21T07:15:00Z",
        ]);
        let report = engine("2025-09-21").report(&e);
        assert_eq!(report.today, day("2025-09-21"));
        assert_eq!(report.streak.current_streak, 3);
        assert_eq!(report.streak.longest_streak, 3);
        assert!(report.is_active);
        assert_eq!(
            report.next_milestone,
            Milestone {
                days_until: 2,
                milestone: 5
            }
        );
        assert_eq!(report.status, StreakStatus::Secured);
        assert!(report.message.starts_with("3 day streak!"));
    }

    #[test]
    fn report_for_an_empty_history() {
        let report = engine("2025-09-21").report(&[]);
        assert_eq!(report.streak, StreakResult::default());
        assert!(!report.is_active);
        assert_eq!(report.status, StreakStatus::NoStreak);
        assert_eq!(report.next_milestone.milestone, 5);
    }

    #[test]
    fn methods_agree_with_the_report() {
        let e = entries(&["2025-09-20T10:00:00Z"]);
        let eng = engine("2025-09-21");
        let result = eng.calculate(&e);
        let report = eng.report(&e);
        assert_eq!(result, report.streak);
        assert_eq!(eng.is_active(&e), report.is_active);
        assert_eq!(eng.status_message(&result), report.message);
        assert_eq!(report.status, StreakStatus::Pending);
    }

    #[test]
    fn report_serializes_flat_camel_case() {
        let e = entries(&["2025-09-21T10:00:00Z"]);
        let json = serde_json::to_value(engine("2025-09-21").report(&e)).unwrap();
        assert_eq!(json["today"], "2025-09-21");
        assert_eq!(json["currentStreak"], 1);
        assert_eq!(json["longestStreak"], 1);
        assert_eq!(json["lastEntryDate"], "2025-09-21");
        assert_eq!(json["streakDates"][0], "2025-09-21");
        assert_eq!(json["isActive"], true);
        assert_eq!(json["nextMilestone"]["daysUntil"], 4);
        assert_eq!(json["status"], "started");
    }

    #[test]
    fn system_clock_engine_uses_the_configured_frame() {
        let eng = StreakEngine::new(DayFrame::Utc);
        assert_eq!(eng.frame(), DayFrame::Utc);
        let today = eng.today();
        let result = eng.calculate(&[]);
        assert_eq!(result.current_streak, 0);
        assert!(today.checked_add_days(1).is_some());
    }
}
