use crate::render::ColorMode;
use clap::Parser;
use jstreak_core::{CalendarDay, DayFrame};
use std::{path::PathBuf, str::FromStr};

/// jstreak — journaling streaks from your entries
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Prints the journal root directory
    #[arg(long, short, exclusive = true)]
    pub path: bool,
    /// Read entries from a JSON export (`[{ "id": ..., "createdAt": ... }]`)
    /// instead of the journal directory.
    #[arg(long, short, conflicts_with = "journal_dir")]
    pub file: Option<PathBuf>,
    /// Markdown journal directory to read entries from (`{dir}/YYYY/MM/YYYY-MM-DD.md`).
    #[arg(long)]
    pub journal_dir: Option<PathBuf>,
    /// Day to count as today, as YYYY-MM-DD. Defaults to the current day.
    #[arg(long)]
    pub today: Option<CalendarDay>,
    /// Time zone entries are counted in: `utc`, `local` or an offset like `+02:00`.
    #[arg(long, env = "JSTREAK_TIME_ZONE")]
    pub time_zone: Option<DayFrame>,
    /// Show which days of a month have entries (e.g. `jstreak --calendar 2025-09`).
    #[arg(long)]
    pub calendar: Option<YearMonth>,
    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
    /// Log engine activity to stderr. `RUST_LOG` takes precedence.
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    pub fn new() -> Self {
        Cli::parse()
    }
}

/// A `YYYY-MM` month argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl FromStr for YearMonth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("'{s}' is not a month, expected YYYY-MM");
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }
        Ok(Self { year, month })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_option() {
        let cli = Cli::try_parse_from([
            "jstreak",
            "--file",
            "entries.json",
            "--today",
            "2025-09-21",
            "--time-zone",
            "+02:00",
            "--calendar",
            "2025-09",
            "--json",
            "--color",
            "never",
        ])
        .unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("entries.json")));
        assert_eq!(cli.today, Some("2025-09-21".parse().unwrap()));
        assert_eq!(cli.time_zone, Some("+02:00".parse().unwrap()));
        assert_eq!(cli.calendar, Some(YearMonth { year: 2025, month: 9 }));
        assert!(cli.json);
        assert!(matches!(cli.color, ColorMode::Never));
    }

    #[test]
    fn rejects_malformed_days_and_months() {
        assert!(Cli::try_parse_from(["jstreak", "--today", "21/09/2025"]).is_err());
        assert!(Cli::try_parse_from(["jstreak", "--calendar", "2025-13"]).is_err());
        assert!(Cli::try_parse_from(["jstreak", "--time-zone", "Mars"]).is_err());
    }

    #[test]
    fn file_and_journal_dir_conflict() {
        assert!(Cli::try_parse_from(["jstreak", "--file", "a.json", "--journal-dir", "j"]).is_err());
    }

    #[test]
    fn path_is_exclusive() {
        assert!(Cli::try_parse_from(["jstreak", "--path"]).unwrap().path);
        assert!(Cli::try_parse_from(["jstreak", "--path", "--json"]).is_err());
    }
}
