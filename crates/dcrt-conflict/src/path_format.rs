//! Display formatting for reported paths
//!
//! Paths are printed with the host's separator. With shortening enabled the
//! directory part is cut so a report line fits an 80-column terminal; the
//! file name itself is never cut.

use std::path::{Path, MAIN_SEPARATOR, MAIN_SEPARATOR_STR};

/// Column budget shared by the directory and file name in shortened output
pub const SHORT_PATH_BUDGET: usize = 64;

/// Appended to a directory that was cut
pub const ELLIPSIS: &str = "...";

/// Formats a directory and file name for report lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathFormatter {
    shorten: bool,
}

impl PathFormatter {
    pub fn new(shorten: bool) -> Self {
        Self { shorten }
    }

    pub fn format(&self, directory: &Path, file_name: &str) -> String {
        let mut dir = normalize_separators(&directory.to_string_lossy());
        while dir.len() > MAIN_SEPARATOR.len_utf8() && dir.ends_with(MAIN_SEPARATOR) {
            dir.pop();
        }

        if self.shorten {
            let budget = SHORT_PATH_BUDGET.saturating_sub(file_name.chars().count());
            if dir.chars().count() > budget {
                dir = dir.chars().take(budget).collect();
                dir.push_str(ELLIPSIS);
            }
        }

        if dir.is_empty() {
            file_name.to_string()
        } else if dir.ends_with(MAIN_SEPARATOR) {
            format!("{dir}{file_name}")
        } else {
            format!("{dir}{MAIN_SEPARATOR}{file_name}")
        }
    }

    /// Formats a full path, splitting off its last component as the file name
    pub fn format_path(&self, path: &Path) -> String {
        match (path.parent(), path.file_name()) {
            (Some(parent), Some(name)) => self.format(parent, &name.to_string_lossy()),
            _ => self.format(Path::new(""), &path.to_string_lossy()),
        }
    }
}

fn normalize_separators(path: &str) -> String {
    if MAIN_SEPARATOR == '/' {
        path.to_string()
    } else {
        path.replace('/', MAIN_SEPARATOR_STR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(dir: &str, file: &str) -> String {
        format!("{dir}{MAIN_SEPARATOR}{file}")
    }

    #[test]
    fn test_short_path_unchanged() {
        let fmt = PathFormatter::new(true);
        assert_eq!(fmt.format(Path::new("docs"), "a.txt"), joined("docs", "a.txt"));
    }

    #[test]
    fn test_full_output_never_cut() {
        let long_dir = "d".repeat(120);
        let fmt = PathFormatter::new(false);
        assert_eq!(
            fmt.format(Path::new(&long_dir), "report.txt"),
            joined(&long_dir, "report.txt")
        );
    }

    #[test]
    fn test_long_directory_is_truncated() {
        let long_dir = "d".repeat(120);
        let fmt = PathFormatter::new(true);
        let out = fmt.format(Path::new(&long_dir), "report.txt");

        let expected_dir = format!("{}{}", "d".repeat(SHORT_PATH_BUDGET - 10), ELLIPSIS);
        assert_eq!(out, joined(&expected_dir, "report.txt"));
        assert!(out.ends_with("report.txt"));
    }

    #[test]
    fn test_directory_at_budget_is_kept() {
        let dir = "d".repeat(SHORT_PATH_BUDGET - 5);
        let fmt = PathFormatter::new(true);
        assert_eq!(fmt.format(Path::new(&dir), "a.txt"), joined(&dir, "a.txt"));
    }

    #[test]
    fn test_file_name_longer_than_budget() {
        let name = format!("{}.txt", "n".repeat(70));
        let fmt = PathFormatter::new(true);
        assert_eq!(fmt.format(Path::new("docs"), &name), joined(ELLIPSIS, &name));
    }

    #[test]
    fn test_truncation_counts_characters() {
        let dir = "ü".repeat(80);
        let fmt = PathFormatter::new(true);
        let out = fmt.format(Path::new(&dir), "a.txt");
        let expected_dir = format!("{}{}", "ü".repeat(SHORT_PATH_BUDGET - 5), ELLIPSIS);
        assert_eq!(out, joined(&expected_dir, "a.txt"));
    }

    #[test]
    fn test_trailing_separator_collapsed() {
        let fmt = PathFormatter::default();
        let dir = format!("docs{MAIN_SEPARATOR}");
        assert_eq!(fmt.format(Path::new(&dir), "a.txt"), joined("docs", "a.txt"));
    }

    #[test]
    fn test_format_path_splits_last_component() {
        let fmt = PathFormatter::default();
        let path: std::path::PathBuf = ["docs", "sub", "a.txt"].iter().collect();
        assert_eq!(fmt.format_path(&path), path.display().to_string());
        assert_eq!(fmt.format_path(Path::new("a.txt")), "a.txt");
    }

    #[test]
    fn test_format_path_truncates_parent() {
        let long_dir = "d".repeat(120);
        let fmt = PathFormatter::new(true);
        let path = Path::new(&long_dir).join("locked");
        assert_eq!(
            fmt.format_path(&path),
            fmt.format(Path::new(&long_dir), "locked")
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_root_directory() {
        let fmt = PathFormatter::default();
        assert_eq!(fmt.format(Path::new("/"), "a.txt"), "/a.txt");
    }

    #[test]
    fn test_empty_directory() {
        let fmt = PathFormatter::default();
        assert_eq!(fmt.format(Path::new(""), "a.txt"), "a.txt");
    }
}
