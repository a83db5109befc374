pub mod calendar;
pub mod clock;
pub mod config;
pub mod dates;
pub mod day;
pub mod engine;
pub mod entry;
pub mod error;
pub mod message;
pub mod milestone;
pub mod parse_entries;
pub mod paths;
pub mod render;
pub mod sources;
pub mod streak;

pub use calendar::{CalendarCell, MonthCalendar, month_calendar};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use day::{CalendarDay, DayFrame, ToDay, add_days, days_between, to_day};
pub use engine::{StreakEngine, StreakReport};
pub use entry::Entry;
pub use error::Error;
pub use message::{StreakStatus, status_message};
pub use milestone::{MILESTONES, Milestone, next_milestone};
pub use sources::{JournalDir, LoadError, LoadResult, load_json_entries};
pub use streak::{
    CurrentStreak, StreakResult, calculate_streak, current_streak, is_active, longest_streak,
    unique_days,
};
