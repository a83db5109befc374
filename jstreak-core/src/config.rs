use crate::day::DayFrame;
use anyhow::{Context, Result, bail};
use chrono::format::{Item, StrftimeItems};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Config {
    /// Root of a Markdown journal tree (`{root}/YYYY/MM/YYYY-MM-DD.md`).
    pub journal_dir: PathBuf,
    /// JSON export of entries (`[{ "id", "createdAt" }]`). When set, it is
    /// read instead of `journal_dir`.
    pub entries_file: Option<PathBuf>,
    /// Time zone entry timestamps are cut down to calendar days in.
    /// Set with `time_zone = "utc" | "local" | "+02:00"`. Default is `utc`.
    pub day_frame: DayFrame,
    /// Used for day headers in journal files and when printing days.
    pub date_format: String,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    journal_dir: Option<PathBuf>,
    entries_file: Option<PathBuf>,
    time_zone: Option<String>,
    date_format: Option<String>,
}

pub const DEFAULT_DATE_FORMAT: &str = "%A, %d %b %Y";

impl Config {
    /// Load config from disk (first XDG path, then native) and apply defaults.
    ///
    /// A missing file means defaults. A file that cannot be read or parsed,
    /// a `time_zone` that is not a frame, or a `date_format` chrono cannot
    /// render are errors: guessing would silently move entries to other days.
    pub fn load() -> Result<Self> {
        Self::from_file_config(Self::read_file_config()?)
    }

    /// Only the journal root, without validating the other keys.
    pub fn load_journal_dir() -> Result<PathBuf> {
        Ok(Self::resolve_journal_dir(Self::read_file_config()?.journal_dir))
    }

    fn resolve_journal_dir(journal_dir: Option<PathBuf>) -> PathBuf {
        journal_dir.unwrap_or_else(Self::default_journal_dir)
    }

    fn from_file_config(file_config: FileConfig) -> Result<Self> {
        let day_frame = match file_config.time_zone.as_deref() {
            Some(tz) => tz
                .parse::<DayFrame>()
                .with_context(|| format!("reading time_zone = {tz:?}"))?,
            None => DayFrame::default(),
        };

        let date_format = match file_config.date_format {
            Some(fmt) => {
                validate_date_format(&fmt)
                    .with_context(|| format!("reading date_format = {fmt:?}"))?;
                fmt
            }
            None => DEFAULT_DATE_FORMAT.to_string(),
        };

        Ok(Self {
            journal_dir: Self::resolve_journal_dir(file_config.journal_dir),
            entries_file: file_config.entries_file,
            day_frame,
            date_format,
        })
    }

    /// Default journal root: `{data_dir}/jstreak`
    /// - macOS:   `~/Library/Application Support/jstreak`
    /// - Linux:   `$XDG_DATA_HOME/jstreak` or `~/.local/share/jstreak`
    /// - Windows: `%APPDATA%\jstreak`
    fn default_journal_dir() -> PathBuf {
        if let Some(base) = BaseDirs::new() {
            base.data_dir().join("jstreak")
        } else {
            PathBuf::from("./jstreak")
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            v.push(b.home_dir().join(".config").join("jstreak").join("config.toml"));
            v.push(b.config_dir().join("jstreak").join("config.toml"));
        }
        v
    }

    fn read_file_config() -> Result<FileConfig> {
        Self::read_first_existing(&Self::config_file_paths())
    }

    /// Read the first existing config file and parse it.
    fn read_first_existing(paths: &[PathBuf]) -> Result<FileConfig> {
        for path in paths {
            if !path.exists() {
                continue;
            }
            debug!(path = %path.display(), "loading config");
            let s =
                fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}

/// Rejects strftime strings chrono would fail to render.
fn validate_date_format(fmt: &str) -> Result<()> {
    if StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error)) {
        bail!("unsupported strftime specifier");
    }
    Ok(())
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use chrono::FixedOffset;
    use std::path::Path;
    use tempfile::tempdir;

    /// Test helper to create a default `Config` for testing purposes.
    ///
    /// If you add a field to `Config`, you only need to update it here.
    pub(crate) fn mk_config(journal_dir: PathBuf) -> Config {
        Config {
            journal_dir,
            entries_file: None,
            day_frame: DayFrame::Utc,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }

    #[test]
    fn candidates_prioritize_xdg_then_native() {
        if let Some(b) = BaseDirs::new() {
            let expected_xdg = b.home_dir().join(".config").join("jstreak").join("config.toml");
            let expected_native = b.config_dir().join("jstreak").join("config.toml");
            let c = Config::config_file_paths();
            assert_eq!(c.first(), Some(&expected_xdg));
            assert_eq!(c.get(1), Some(&expected_native));
        }
    }

    #[test]
    fn parse_file_accepts_every_key() {
        let toml = r#"
            journal_dir = "/tmp/my-journal"
            entries_file = "/tmp/entries.json"
            time_zone = "+02:00"
            date_format = "%d/%m/%Y"
        "#;
        let config = Config::from_file_config(Config::parse_file(toml).unwrap()).unwrap();
        assert_eq!(config.journal_dir, Path::new("/tmp/my-journal"));
        assert_eq!(config.entries_file.as_deref(), Some(Path::new("/tmp/entries.json")));
        assert_eq!(
            config.day_frame,
            DayFrame::Fixed(FixedOffset::east_opt(7200).unwrap())
        );
        assert_eq!(config.date_format, "%d/%m/%Y");
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = Config::from_file_config(Config::parse_file("").unwrap()).unwrap();
        assert_eq!(config.day_frame, DayFrame::Utc);
        assert_eq!(config.date_format, DEFAULT_DATE_FORMAT);
        assert!(config.entries_file.is_none());
        assert!(config.journal_dir.ends_with("jstreak"));
    }

    #[test]
    fn invalid_time_zone_is_an_error() {
        let fc = Config::parse_file(r#"time_zone = "Mars/Olympus""#).unwrap();
        let err = Config::from_file_config(fc).unwrap_err();
        assert!(format!("{err:#}").contains("time_zone"));
    }

    #[test]
    fn invalid_date_format_is_an_error() {
        let fc = Config::parse_file(r#"date_format = "%Q""#).unwrap();
        let err = Config::from_file_config(fc).unwrap_err();
        assert!(format!("{err:#}").contains("date_format"));

        let fc = Config::parse_file(r#"date_format = "%d %B %Y""#).unwrap();
        assert!(Config::from_file_config(fc).is_ok());
    }

    #[test]
    fn mistyped_file_fails_instead_of_defaulting() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "time_zone = 2\n").unwrap();
        let err = Config::read_first_existing(&[path]).unwrap_err();
        assert!(format!("{err:#}").contains("config.toml"));
    }

    #[test]
    fn first_existing_file_wins_and_none_means_defaults() {
        let tmp = tempdir().unwrap();
        let missing = tmp.path().join("missing.toml");
        let present = tmp.path().join("config.toml");
        fs::write(&present, "time_zone = \"local\"\n").unwrap();

        let fc = Config::read_first_existing(&[missing.clone(), present]).unwrap();
        assert_eq!(fc.time_zone.as_deref(), Some("local"));

        let fc = Config::read_first_existing(&[missing]).unwrap();
        assert!(fc.time_zone.is_none());
    }

    #[test]
    fn journal_dir_resolves_despite_other_bad_keys() {
        let fc = Config::parse_file(
            r#"
            journal_dir = "/tmp/my-journal"
            time_zone = "Mars/Olympus"
        "#,
        )
        .unwrap();
        assert_eq!(
            Config::resolve_journal_dir(fc.journal_dir),
            Path::new("/tmp/my-journal")
        );
    }

    #[test]
    fn unknown_keys_are_tolerated() {
        let fc = Config::parse_file("editor = \"hx\"\n").unwrap();
        assert!(fc.time_zone.is_none());
    }
}
