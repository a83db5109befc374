//! Loading entries from local exports.
//!
//! Two shapes are supported: a JSON array exported from the document store,
//! and a Markdown journal tree with one file per day.

use crate::config::Config;
use crate::day::DayFrame;
use crate::entry::Entry;
use crate::parse_entries::parse_day_file;
use crate::paths::scan_dir_for_md_files;
use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, warn};

/// Reads a JSON array of `{ "id", "createdAt" }` records.
///
/// Any malformed record fails the whole load: a silently dropped or
/// defaulted timestamp would corrupt the streak without a trace.
pub fn load_json_entries(path: &Path) -> Result<Vec<Entry>> {
    let s = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let entries =
        parse_json_entries(&s).with_context(|| format!("parsing {}", path.display()))?;
    debug!(path = %path.display(), entries = entries.len(), "loaded entries export");
    Ok(entries)
}

pub fn parse_json_entries(json: &str) -> Result<Vec<Entry>> {
    Ok(serde_json::from_str(json)?)
}

/// A non-fatal problem met while reading a journal tree.
#[derive(Debug)]
pub enum LoadError {
    FileError { path: PathBuf, error: anyhow::Error },
    /// The wall-clock time does not exist in the frame (skipped by a DST change).
    NonexistentTime { path: PathBuf, time: NaiveDateTime },
}

/// Entries that loaded, plus what went wrong with the rest.
#[derive(Debug, Default)]
pub struct LoadResult {
    pub entries: Vec<Entry>,
    pub errors: Vec<LoadError>,
}

impl From<Vec<Entry>> for LoadResult {
    fn from(entries: Vec<Entry>) -> Self {
        Self {
            entries,
            errors: Vec::new(),
        }
    }
}

/// A Markdown journal laid out as `{root}/YYYY/MM/YYYY-MM-DD.md`.
#[derive(Debug, Clone)]
pub struct JournalDir {
    pub root: PathBuf,
    /// Format of the `# <date>` header opening each file.
    pub date_format: String,
}

impl JournalDir {
    pub fn new(root: impl Into<PathBuf>, date_format: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            date_format: date_format.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.journal_dir, &config.date_format)
    }

    /// Reads every `## HH:MM - Title` block below the root as an entry.
    ///
    /// Block times are wall-clock readings in `frame`. Entry ids are
    /// `YYYY-MM-DDTHH:MM#n`, `n` being the block's position in its file.
    /// Unreadable or malformed files end up in [`LoadResult::errors`]; only a
    /// root that exists but cannot be listed is an `Err`.
    pub fn read_entries(&self, frame: DayFrame) -> Result<LoadResult> {
        let mut result = LoadResult::default();
        if !self.root.exists() {
            warn!(root = %self.root.display(), "journal directory does not exist");
            return Ok(result);
        }

        let mut files = scan_dir_for_md_files(&self.root)
            .with_context(|| format!("scanning {}", self.root.display()))?;
        files.sort();

        for path in &files {
            self.read_day_file(path, frame, &mut result);
        }

        debug!(
            root = %self.root.display(),
            files = files.len(),
            entries = result.entries.len(),
            errors = result.errors.len(),
            "read journal directory"
        );
        Ok(result)
    }

    fn read_day_file(&self, path: &Path, frame: DayFrame, result: &mut LoadResult) {
        let day = fs::read_to_string(path)
            .map_err(anyhow::Error::from)
            .and_then(|content| parse_day_file(&content, &self.date_format));
        let day = match day {
            Ok(day) => day,
            Err(error) => {
                warn!(path = %path.display(), "skipping journal file: {error:#}");
                result.errors.push(LoadError::FileError {
                    path: path.to_path_buf(),
                    error,
                });
                return;
            }
        };

        for (n, block) in day.blocks.iter().enumerate() {
            let time = day.date.and_time(block.time);
            match frame.localize(time) {
                Some(created_at) => {
                    let id = format!("{}#{n}", time.format("%Y-%m-%dT%H:%M"));
                    result.entries.push(Entry::new(id, created_at));
                }
                None => result.errors.push(LoadError::NonexistentTime {
                    path: path.to_path_buf(),
                    time,
                }),
            }
        }
    }
}
