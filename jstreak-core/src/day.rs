//! Calendar days and the reference frame timestamps are truncated in.
//!
//! Every streak computation works on [`CalendarDay`]s: dates without a time
//! component, canonically written as `YYYY-MM-DD`. A [`DayFrame`] decides in
//! which time zone a timestamp is cut down to its day.

use crate::error::Error;
use chrono::{
    DateTime, Duration, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone, Utc,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::{fmt, str::FromStr};

/// Canonical text form of a [`CalendarDay`].
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// A date with no time component.
///
/// Ordering is chronological, which is also the lexicographic order of the
/// canonical `YYYY-MM-DD` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDay(NaiveDate);

impl CalendarDay {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Builds a day from its parts, rejecting impossible dates (e.g. `2025-02-30`).
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, Error> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| Error::InvalidDay {
                input: format!("{year:04}-{month:02}-{day:02}"),
            })
    }

    pub fn date(self) -> NaiveDate {
        self.0
    }

    /// Shifts the day by `n` calendar days (negative goes back in time).
    ///
    /// # Panics
    ///
    /// Panics if the result falls outside the range chrono can represent.
    /// Use [`checked_add_days`](Self::checked_add_days) near those bounds.
    pub fn add_days(self, n: i64) -> Self {
        Self(self.0 + Duration::days(n))
    }

    pub fn checked_add_days(self, n: i64) -> Option<Self> {
        let shifted = if n >= 0 {
            self.0.checked_add_days(chrono::Days::new(n.unsigned_abs()))
        } else {
            self.0.checked_sub_days(chrono::Days::new(n.unsigned_abs()))
        };
        shifted.map(Self)
    }

    /// Signed number of calendar days from `earlier` to `self`.
    pub fn days_since(self, earlier: CalendarDay) -> i64 {
        (self.0 - earlier.0).num_days()
    }

    pub fn format(self, fmt: &str) -> String {
        self.0.format(fmt).to_string()
    }
}

/// `day` shifted by `n` calendar days.
pub fn add_days(day: CalendarDay, n: i64) -> CalendarDay {
    day.add_days(n)
}

/// Signed count of calendar days from `b` to `a` (`a - b`).
pub fn days_between(a: CalendarDay, b: CalendarDay) -> i64 {
    a.days_since(b)
}

impl From<NaiveDate> for CalendarDay {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DAY_FORMAT))
    }
}

impl FromStr for CalendarDay {
    type Err = Error;

    /// Only the canonical, zero-padded `YYYY-MM-DD` form is accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidDay {
            input: s.to_string(),
        };
        let trimmed = s.trim();
        if trimmed.len() != 10 {
            return Err(invalid());
        }
        NaiveDate::parse_from_str(trimmed, DAY_FORMAT)
            .map(Self)
            .map_err(|_| invalid())
    }
}

impl Serialize for CalendarDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// The time zone in which timestamps are truncated to calendar days.
///
/// Two users can see the same late-night entry land on different days
/// depending on this setting, so it is always chosen explicitly through
/// configuration rather than inferred per entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayFrame {
    #[default]
    Utc,
    /// The time zone of the machine running the engine.
    Local,
    Fixed(FixedOffset),
}

impl DayFrame {
    /// The calendar day `ts` falls on in this frame.
    pub fn day_of<Tz: TimeZone>(&self, ts: &DateTime<Tz>) -> CalendarDay {
        let date = match self {
            DayFrame::Utc => ts.with_timezone(&Utc).date_naive(),
            DayFrame::Local => ts.with_timezone(&Local).date_naive(),
            DayFrame::Fixed(offset) => ts.with_timezone(offset).date_naive(),
        };
        CalendarDay(date)
    }

    /// Attaches this frame's offset to a wall-clock date-time.
    ///
    /// Returns `None` when the wall-clock time does not exist in the frame
    /// (a skipped hour in the local zone).
    pub fn localize(&self, naive: NaiveDateTime) -> Option<DateTime<FixedOffset>> {
        match self {
            DayFrame::Utc => Some(naive.and_utc().fixed_offset()),
            DayFrame::Local => Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.fixed_offset()),
            DayFrame::Fixed(offset) => offset
                .from_local_datetime(&naive)
                .single(),
        }
    }
}

impl fmt::Display for DayFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFrame::Utc => write!(f, "utc"),
            DayFrame::Local => write!(f, "local"),
            DayFrame::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}

impl FromStr for DayFrame {
    type Err = Error;

    /// Accepts `utc` (or `z`), `local`, or an offset written as `+HH:MM` / `-HH:MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "utc" | "z" => Ok(DayFrame::Utc),
            "local" => Ok(DayFrame::Local),
            _ => parse_offset(s)
                .map(DayFrame::Fixed)
                .ok_or_else(|| Error::InvalidFrame {
                    input: s.to_string(),
                }),
        }
    }
}

fn parse_offset(s: &str) -> Option<FixedOffset> {
    let (sign, rest) = match s.as_bytes().first()? {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => return None,
    };
    let (hours, minutes) = rest.split_once(':')?;
    if hours.len() != 2 || minutes.len() != 2 {
        return None;
    }
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// Anything that can be truncated to a [`CalendarDay`].
pub trait ToDay {
    fn to_day(&self, frame: DayFrame) -> CalendarDay;
}

impl ToDay for CalendarDay {
    fn to_day(&self, _frame: DayFrame) -> CalendarDay {
        *self
    }
}

impl ToDay for NaiveDate {
    fn to_day(&self, _frame: DayFrame) -> CalendarDay {
        CalendarDay(*self)
    }
}

/// Naive date-times are wall-clock readings already taken in the frame.
impl ToDay for NaiveDateTime {
    fn to_day(&self, _frame: DayFrame) -> CalendarDay {
        CalendarDay(self.date())
    }
}

impl<Tz: TimeZone> ToDay for DateTime<Tz> {
    fn to_day(&self, frame: DayFrame) -> CalendarDay {
        frame.day_of(self)
    }
}

/// Truncates `ts` to its calendar day in `frame`.
pub fn to_day<T: ToDay + ?Sized>(ts: &T, frame: DayFrame) -> CalendarDay {
    ts.to_day(frame)
}
