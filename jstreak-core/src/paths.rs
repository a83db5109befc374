use crate::day::CalendarDay;
use anyhow::Result;
use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

pub fn day_file_name(day: CalendarDay) -> String {
    format!("{day}.md")
}

/// `{root}/YYYY/MM/YYYY-MM-DD.md`
pub fn day_file(root: &Path, day: CalendarDay) -> PathBuf {
    root.join(day.format("%Y"))
        .join(day.format("%m"))
        .join(day_file_name(day))
}

/// Reads the day back out of a `YYYY-MM-DD.md` file name.
pub fn day_from_file_name(path: &Path) -> Option<CalendarDay> {
    path.file_stem().and_then(OsStr::to_str)?.parse().ok()
}

/// Every Markdown file below `path`, recursively.
pub fn scan_dir_for_md_files(path: &Path) -> Result<Vec<PathBuf>> {
    let mut file_paths = Vec::new();

    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let p = entry.path();

        if p.is_dir() {
            file_paths.extend(scan_dir_for_md_files(&p)?);
        } else if p.is_file() && is_markdown(&p) {
            file_paths.push(p);
        }
    }

    Ok(file_paths)
}

fn is_markdown(p: &Path) -> bool {
    p.extension()
        .and_then(OsStr::to_str)
        .map(|ext| ext.eq_ignore_ascii_case("md"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn day_file_nests_by_year_and_month() {
        let day: CalendarDay = "2025-09-07".parse().unwrap();
        let p = day_file(Path::new("/journal"), day);
        assert_eq!(p, Path::new("/journal/2025/09/2025-09-07.md"));
        assert_eq!(day_from_file_name(&p), Some(day));
    }

    #[test]
    fn day_from_file_name_ignores_other_files() {
        assert_eq!(day_from_file_name(Path::new("/j/notes.md")), None);
        assert_eq!(day_from_file_name(Path::new("/j/2025-9-7.md")), None);
    }

    #[test]
    fn scan_finds_nested_markdown_only() {
        let tmp = tempdir().unwrap();
        let nested = tmp.path().join("2025").join("09");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("2025-09-07.md"), "# x").unwrap();
        fs::write(nested.join("2025-09-08.MD"), "# x").unwrap();
        fs::write(nested.join("photo.jpg"), "").unwrap();

        let mut found = scan_dir_for_md_files(tmp.path()).unwrap();
        found.sort();
        assert_eq!(found.len(), 2);
        assert!(found[0].ends_with("2025-09-07.md"));
    }
}
