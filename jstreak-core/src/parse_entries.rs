//! Parses the content of a daily journal file into timed blocks.

use crate::day::DAY_FORMAT;
use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

/// One `## HH:MM - Title` block of a day file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalBlock {
    pub time: NaiveTime,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayFile {
    pub date: NaiveDate,
    pub blocks: Vec<JournalBlock>,
}

static ENTRY_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^##\s+(\d{1,2}:\d{2})\s+-\s+(.*)$").expect("valid regex"));

/// Parses the entire content of a daily journal file.
///
/// The file must start with a day header (`# Friday, 15 Aug 2025`, in
/// `date_format` or as `YYYY-MM-DD`) followed by zero or more blocks, each
/// opened by `## HH:MM - Title`. Body text between headings is ignored, and
/// headings whose time does not parse are skipped.
///
/// Fails when the file is empty or the header is not a date.
pub fn parse_day_file(content: &str, date_format: &str) -> Result<DayFile> {
    let mut lines = content.lines();
    let header_line = lines.next().context("Cannot parse an empty file.")?;

    let date = parse_date_from_header_line(header_line, date_format)
        .context("Could not parse date from file header. Is the file malformed?")?;

    let blocks = lines
        .filter_map(|line| ENTRY_HEADING.captures(line.trim_end()))
        .filter_map(|caps| {
            let time = NaiveTime::parse_from_str(&caps[1], "%H:%M").ok()?;
            Some(JournalBlock {
                time,
                title: caps[2].trim().to_string(),
            })
        })
        .collect();

    Ok(DayFile { date, blocks })
}

fn parse_date_from_header_line(line: &str, date_format: &str) -> Option<NaiveDate> {
    let date_str = line.trim().strip_prefix("# ")?.trim();
    NaiveDate::parse_from_str(date_str, date_format)
        .or_else(|_| NaiveDate::parse_from_str(date_str, DAY_FORMAT))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_DATE_FORMAT;

    #[test]
    fn parse_valid_day_file() {
        let content = r#"# Friday, 15 Aug 2025

## 12:34 - Quiet morning

Body... feeling calm today.

## 18:05 - Walk by the river

Another paragraph...
"#;
        let day = parse_day_file(content, DEFAULT_DATE_FORMAT).unwrap();
        assert_eq!(day.date, NaiveDate::from_ymd_opt(2025, 8, 15).unwrap());
        assert_eq!(day.blocks.len(), 2);
        assert_eq!(day.blocks[0].time, NaiveTime::from_hms_opt(12, 34, 0).unwrap());
        assert_eq!(day.blocks[0].title, "Quiet morning");
        assert_eq!(day.blocks[1].title, "Walk by the river");
    }

    #[test]
    fn canonical_header_is_accepted() {
        let day = parse_day_file("# 2025-08-15\n\n## 07:05 - Title only", "%d/%m/%Y").unwrap();
        assert_eq!(day.date, NaiveDate::from_ymd_opt(2025, 8, 15).unwrap());
        assert_eq!(day.blocks.len(), 1);
    }

    #[test]
    fn parse_file_with_no_entries() {
        let day = parse_day_file("# Friday, 15 Aug 2025", DEFAULT_DATE_FORMAT).unwrap();
        assert!(day.blocks.is_empty());
    }

    #[test]
    fn parse_file_with_malformed_header_fails() {
        let err = parse_day_file("# Not a date", DEFAULT_DATE_FORMAT).unwrap_err();
        assert!(err.to_string().contains("Could not parse date"));
    }

    #[test]
    fn parse_empty_file_fails() {
        let err = parse_day_file("", DEFAULT_DATE_FORMAT).unwrap_err();
        assert!(err.to_string().contains("Cannot parse an empty file"));
    }

    #[test]
    fn malformed_headings_are_skipped() {
        let content = r#"# Friday, 15 Aug 2025

## NOT A TIME - Bad entry

## 25:99 - Impossible time

## 18:05 - Good entry
"#;
        let day = parse_day_file(content, DEFAULT_DATE_FORMAT).unwrap();
        assert_eq!(day.blocks.len(), 1);
        assert_eq!(day.blocks[0].title, "Good entry");
    }
}
