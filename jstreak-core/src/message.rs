use crate::day::CalendarDay;
use crate::streak::StreakResult;
use serde::Serialize;
use strum_macros::{AsRefStr, EnumIter};

/// Where the user stands with their streak today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum StreakStatus {
    /// No streak running.
    NoStreak,
    /// First day of a new streak, already written today.
    Started,
    /// Streak alive from yesterday, nothing written today yet.
    Pending,
    /// Multi-day streak, today's entry already written.
    Secured,
}

impl StreakStatus {
    /// Today counts as written when the current streak ends on it. An entry
    /// dated after today does not make today pending.
    pub fn of(result: &StreakResult, today: CalendarDay) -> Self {
        let logged_today = result.streak_dates.last() == Some(&today);
        match (result.current_streak, logged_today) {
            (0, _) => StreakStatus::NoStreak,
            (1, true) => StreakStatus::Started,
            (_, false) => StreakStatus::Pending,
            (_, true) => StreakStatus::Secured,
        }
    }
}

/// A short line of encouragement for the streak as of `today`.
pub fn status_message(result: &StreakResult, today: CalendarDay) -> String {
    let streak = result.current_streak;
    match StreakStatus::of(result, today) {
        StreakStatus::NoStreak => "No streak yet. Write an entry today to start one!".to_string(),
        StreakStatus::Started => {
            "You started a streak today! Come back tomorrow to keep it going.".to_string()
        }
        StreakStatus::Pending if streak == 1 => {
            "1 day streak. Write today to keep it alive!".to_string()
        }
        StreakStatus::Pending => format!("{streak} day streak! Write today to keep it going."),
        StreakStatus::Secured => {
            format!("{streak} day streak! You've already written today, see you tomorrow.")
        }
    }
}
