//! Locale rules for conflicted-copy names
//!
//! Sync clients name a conflicted copy after the original file, inserting a
//! parenthesised marker whose wording depends on the client's UI language:
//!
//! - `de`: `Bericht (in Konflikt stehende Kopie von Max 2024-01-01).docx`
//! - `en`: `report (Max's conflicted copy 2024-01-01).docx`

use std::{fmt, str::FromStr};

use crate::config::ConfigError;

/// Language of the sync client that produced the conflicted copies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    /// German client wording
    #[default]
    De,
    /// English client wording
    En,
}

impl Language {
    /// All supported languages
    pub const ALL: [Language; 2] = [Language::De, Language::En];

    /// Short language code as accepted on the command line
    pub fn code(&self) -> &'static str {
        match self {
            Language::De => "de",
            Language::En => "en",
        }
    }

    /// Literal phrase the client embeds inside the parenthesised marker
    ///
    /// The English phrase also covers the `<user>'s conflicted copy` form,
    /// since the user name precedes it inside the same parentheses.
    pub fn marker_phrase(&self) -> &'static str {
        match self {
            Language::De => "in Konflikt stehende Kopie",
            Language::En => "conflicted copy",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::UnknownLanguage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_german() {
        assert_eq!(Language::default(), Language::De);
    }

    #[test]
    fn test_parse_codes() {
        assert_eq!("de".parse::<Language>().unwrap(), Language::De);
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert_eq!("EN".parse::<Language>().unwrap(), Language::En);
    }

    #[test]
    fn test_parse_unknown_code() {
        let err = "fr".parse::<Language>().unwrap_err();
        assert_eq!(err, ConfigError::UnknownLanguage("fr".to_string()));
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for lang in Language::ALL {
            assert_eq!(lang.to_string().parse::<Language>().unwrap(), lang);
        }
    }

    #[test]
    fn test_marker_phrases_differ() {
        assert_ne!(
            Language::De.marker_phrase(),
            Language::En.marker_phrase()
        );
    }
}
