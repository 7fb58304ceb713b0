//! Conflicted-copy name matching
//!
//! Recognizes names of the form `<base> (<marker text>)[.<extension>]`, where
//! the parenthesised text contains the locale's marker phrase, and rebuilds
//! the original name as `<base>.<extension>`:
//!
//! `report (Max's conflicted copy 2024-01-01).txt` -> `report.txt`

use std::path::Path;

use regex_lite::Regex;
use tracing::trace;

use dcrt_core::domain::Language;

use crate::{entry::ConflictEntry, error::ConflictError};

/// Compiled conflicted-copy rule for one language
#[derive(Debug, Clone)]
pub struct ConflictMatcher {
    language: Language,
    regex: Regex,
}

impl ConflictMatcher {
    /// Compiles the rule for `language`
    pub fn new(language: Language) -> Result<Self, ConflictError> {
        let regex = Regex::new(&pattern_for(language)).map_err(|e| {
            ConflictError::InvalidPattern {
                language,
                reason: e.to_string(),
            }
        })?;
        Ok(Self { language, regex })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Returns the inferred original name, or `None` for ordinary files
    pub fn original_name(&self, file_name: &str) -> Option<String> {
        let caps = self.regex.captures(file_name)?;
        let base = caps.name("base")?.as_str();

        let mut original = match caps.name("ext") {
            Some(ext) => format!("{base}.{}", ext.as_str()),
            None => base.to_string(),
        };
        // An empty extension after the marker leaves a dangling separator
        if original.ends_with('.') {
            original.pop();
        }

        trace!(file = %file_name, original = %original, "Conflicted copy name matched");
        Some(original)
    }

    /// Builds a [`ConflictEntry`] if `file_name` is a conflicted copy
    pub fn match_entry(&self, directory: &Path, file_name: &str) -> Option<ConflictEntry> {
        let original = self.original_name(file_name)?;
        Some(ConflictEntry::new(directory, file_name, original))
    }
}

/// Whole-name, case-insensitive pattern; the base is the shortest prefix
/// that still lets a marker group follow it.
fn pattern_for(language: Language) -> String {
    format!(
        r"(?i)^(?P<base>.+?) \((?P<marker>[^()]*\b{}\b[^()]*)\)(?:\.(?P<ext>.*))?$",
        regex_lite::escape(language.marker_phrase())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn de() -> ConflictMatcher {
        ConflictMatcher::new(Language::De).unwrap()
    }

    fn en() -> ConflictMatcher {
        ConflictMatcher::new(Language::En).unwrap()
    }

    #[test]
    fn test_patterns_compile() {
        for lang in Language::ALL {
            assert_eq!(ConflictMatcher::new(lang).unwrap().language(), lang);
        }
    }

    #[test]
    fn test_german_with_extension() {
        assert_eq!(
            de().original_name("Bericht (in Konflikt stehende Kopie von Max 2024-01-01).docx"),
            Some("Bericht.docx".to_string())
        );
    }

    #[test]
    fn test_german_case_insensitive() {
        assert_eq!(
            de().original_name("Bericht (IN KONFLIKT STEHENDE KOPIE von Max).txt"),
            Some("Bericht.txt".to_string())
        );
    }

    #[test]
    fn test_german_without_extension() {
        assert_eq!(
            de().original_name("Makefile (in Konflikt stehende Kopie von Max 2024-01-01)"),
            Some("Makefile".to_string())
        );
    }

    #[test]
    fn test_english_user_form() {
        assert_eq!(
            en().original_name("report (Max's conflicted copy 2024-01-01).txt"),
            Some("report.txt".to_string())
        );
    }

    #[test]
    fn test_english_bare_form() {
        assert_eq!(
            en().original_name("orig (conflicted copy 2024-01-01).txt"),
            Some("orig.txt".to_string())
        );
        // Shape produced by keep-both renaming in sync clients
        assert_eq!(
            en().original_name("report (conflicted copy 2026-02-07 a1b2c3d4).docx"),
            Some("report.docx".to_string())
        );
    }

    #[test]
    fn test_multiple_dots() {
        assert_eq!(
            en().original_name("archive.tar (conflicted copy 2024-01-01).gz"),
            Some("archive.tar.gz".to_string())
        );
        assert_eq!(
            en().original_name("v1.2 (Max's conflicted copy 2024.01.01).md"),
            Some("v1.2.md".to_string())
        );
        assert_eq!(
            de().original_name("daten (in Konflikt stehende Kopie von Max).tar.gz"),
            Some("daten.tar.gz".to_string())
        );
    }

    #[test]
    fn test_spaces_in_base() {
        assert_eq!(
            en().original_name("my summer notes (Max's conflicted copy 2024-01-01).txt"),
            Some("my summer notes.txt".to_string())
        );
        assert_eq!(
            de().original_name("Meine Datei (1) (in Konflikt stehende Kopie von Max).odt"),
            Some("Meine Datei (1).odt".to_string())
        );
    }

    #[test]
    fn test_empty_extension_strips_separator() {
        assert_eq!(
            en().original_name("notes (conflicted copy 2024-01-01)."),
            Some("notes".to_string())
        );
    }

    #[test]
    fn test_non_matching_names() {
        let matcher = en();
        for name in [
            "report.txt",
            "report (copy).txt",
            "report conflicted copy.txt",
            "(conflicted copy).txt",
            "report (conflicted copyist).txt",
            "report (conflicted copy.txt",
            "report (conflicted copy) trailing.txt",
        ] {
            assert_eq!(matcher.original_name(name), None, "{name} should not match");
        }
    }

    #[test]
    fn test_locales_do_not_cross_match() {
        assert_eq!(de().original_name("report (Max's conflicted copy).txt"), None);
        assert_eq!(
            en().original_name("Bericht (in Konflikt stehende Kopie von Max).txt"),
            None
        );
    }

    #[test]
    fn test_match_entry() {
        let entry = en()
            .match_entry(Path::new("/data/docs"), "a b (conflicted copy).txt")
            .unwrap();
        assert_eq!(entry.directory(), Path::new("/data/docs"));
        assert_eq!(entry.conflict_filename(), "a b (conflicted copy).txt");
        assert_eq!(entry.original_filename(), "a b.txt");
        assert_eq!(entry.original_path(), Path::new("/data/docs/a b.txt"));
        assert!(en().match_entry(Path::new("/data"), "plain.txt").is_none());
    }
}
