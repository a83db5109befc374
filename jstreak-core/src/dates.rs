use crate::day::CalendarDay;

/// Every day from `start` to `end`, both inclusive.
/// If `start` is after `end`, the resulting vector is empty.
///
/// # Examples
///
/// ```
/// # use jstreak_core::dates::days_in_range;
/// # use jstreak_core::CalendarDay;
/// let start: CalendarDay = "2025-08-30".parse().unwrap();
/// let end: CalendarDay = "2025-09-01".parse().unwrap();
///
/// let days = days_in_range(start, end);
///
/// assert_eq!(days.len(), 3);
/// assert_eq!(days[1].to_string(), "2025-08-31");
/// assert_eq!(days[2], end);
/// ```
pub fn days_in_range(start: CalendarDay, end: CalendarDay) -> Vec<CalendarDay> {
    let mut days = Vec::new();
    let mut current = Some(start);
    while let Some(day) = current.filter(|day| *day <= end) {
        days.push(day);
        current = day.checked_add_days(1);
    }
    days
}
