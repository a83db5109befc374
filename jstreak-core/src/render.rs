//! Pure Markdown rendering helpers.
//!
//! Report:
//!   # Journaling streak
//!
//!   **Current streak:** 3 days
//!   ...
//!
//!   > message
//!
//! Calendar: a `Mon`..`Sun` table with days that have an entry in bold.

use crate::calendar::MonthCalendar;
use crate::day::CalendarDay;
use crate::engine::StreakReport;
use chrono::Datelike;
use std::fmt::Write;

/// Formats a day according to the user's configuration.
pub fn format_day(day: CalendarDay, date_format: &str) -> String {
    day.format(date_format)
}

fn plural_days(n: u32) -> String {
    if n == 1 {
        "1 day".to_string()
    } else {
        format!("{n} days")
    }
}

/// Render the streak summary as Markdown.
pub fn format_report(report: &StreakReport, date_format: &str) -> String {
    let streak = &report.streak;
    let mut md = String::from("# Journaling streak\n\n");

    let _ = writeln!(md, "**Current streak:** {}  ", plural_days(streak.current_streak));
    let _ = writeln!(md, "**Longest streak:** {}  ", plural_days(streak.longest_streak));
    match streak.last_entry_date {
        Some(day) => {
            let _ = writeln!(md, "**Last entry:** {}  ", format_day(day, date_format));
        }
        None => md.push_str("**Last entry:** never  \n"),
    }
    if let (Some(first), Some(last)) = (streak.streak_dates.first(), streak.streak_dates.last()) {
        let _ = writeln!(
            md,
            "**Streak days:** {} to {}  ",
            format_day(*first, date_format),
            format_day(*last, date_format)
        );
    }
    let next = report.next_milestone;
    let _ = writeln!(
        md,
        "**Next milestone:** {} ({} to go)",
        plural_days(next.milestone),
        plural_days(next.days_until)
    );

    let _ = write!(md, "\n> {}\n", report.message);
    md
}

/// Render a month as a Markdown table, weeks starting on Monday.
pub fn format_calendar(calendar: &MonthCalendar) -> String {
    let mut md = String::new();
    if let Some(first) = calendar.first_day() {
        let _ = writeln!(md, "# {}\n", first.format("%B %Y"));
    }
    md.push_str("|Mon|Tue|Wed|Thu|Fri|Sat|Sun|\n|-:|-:|-:|-:|-:|-:|-:|\n");

    let lead = calendar
        .first_day()
        .map(|day| day.date().weekday().num_days_from_monday() as usize)
        .unwrap_or(0);
    let mut cells: Vec<String> = vec![String::new(); lead];
    cells.extend(calendar.days.iter().map(|cell| {
        let n = cell.day.date().day();
        if cell.has_entry {
            format!("**{n}**")
        } else {
            n.to_string()
        }
    }));
    while cells.len() % 7 != 0 {
        cells.push(String::new());
    }
    for week in cells.chunks(7) {
        let _ = writeln!(md, "|{}|", week.join("|"));
    }

    let _ = write!(
        md,
        "\n{} of {} days written.\n",
        calendar.active_days,
        calendar.days.len()
    );
    md
}
