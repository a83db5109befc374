//! Where "today" comes from.
//!
//! The streak math never reads the wall clock on its own; callers pass a day
//! or hand the engine a [`Clock`].

use crate::day::{CalendarDay, DayFrame};
use chrono::Utc;

pub trait Clock {
    /// The current calendar day in `frame`.
    fn today(&self, frame: DayFrame) -> CalendarDay;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self, frame: DayFrame) -> CalendarDay {
        frame.day_of(&Utc::now())
    }
}

/// Always answers with the same day, whatever the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub CalendarDay);

impl Clock for FixedClock {
    fn today(&self, _frame: DayFrame) -> CalendarDay {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self, frame: DayFrame) -> CalendarDay {
        (**self).today(frame)
    }
}
