//! Month view of the days a user wrote on.

use crate::dates::days_in_range;
use crate::day::CalendarDay;
use crate::error::Error;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarCell {
    pub day: CalendarDay,
    pub has_entry: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthCalendar {
    pub year: i32,
    pub month: u32,
    /// One cell per day of the month, in order.
    pub days: Vec<CalendarCell>,
    pub active_days: u32,
}

impl MonthCalendar {
    pub fn first_day(&self) -> Option<CalendarDay> {
        self.days.first().map(|cell| cell.day)
    }
}

/// Marks which days of `year`-`month` appear in `days`.
pub fn month_calendar(days: &[CalendarDay], year: i32, month: u32) -> Result<MonthCalendar, Error> {
    let invalid = || Error::InvalidMonth { year, month };
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let last = first
        .iter_days()
        .take_while(|date| date.month() == month)
        .last()
        .ok_or_else(invalid)?;

    let present: HashSet<CalendarDay> = days.iter().copied().collect();
    let cells: Vec<CalendarCell> = days_in_range(first.into(), last.into())
        .into_iter()
        .map(|day| CalendarCell {
            day,
            has_entry: present.contains(&day),
        })
        .collect();
    let active_days = cells.iter().filter(|cell| cell.has_entry).count() as u32;

    Ok(MonthCalendar {
        year,
        month,
        days: cells,
        active_days,
    })
}
