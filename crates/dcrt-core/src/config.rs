//! Run configuration for dcrt.
//!
//! A `RunConfiguration` is assembled once from the command line, validated,
//! and then only read for the rest of the run.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::domain::Language;

/// Errors raised while building or validating a run configuration
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Language code not in the supported set
    #[error("unknown language '{0}'; valid: de, en")]
    UnknownLanguage(String),

    /// Root path does not exist
    #[error("directory does not exist: {}", .0.display())]
    RootNotFound(PathBuf),

    /// Root path exists but is not a directory
    #[error("not a directory: {}", .0.display())]
    RootNotDirectory(PathBuf),
}

/// What a run does with each conflicted copy it finds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Report conflicts only, never touch a file
    StatusOnly,
    /// Keep whichever of original and conflicted copy is newer
    KeepLatest,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Mode::StatusOnly => "STATUS_ONLY",
            Mode::KeepLatest => "KEEP_LATEST",
        };
        write!(f, "{}", s)
    }
}

/// Immutable settings for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfiguration {
    mode: Mode,
    language: Language,
    root_path: PathBuf,
    shorten_output: bool,
}

impl RunConfiguration {
    /// Creates a configuration with the default language and full-length output.
    pub fn new(mode: Mode, root_path: impl Into<PathBuf>) -> Self {
        Self {
            mode,
            language: Language::default(),
            root_path: root_path.into(),
            shorten_output: false,
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_shortened_output(mut self, shorten: bool) -> Self {
        self.shorten_output = shorten;
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    pub fn shorten_output(&self) -> bool {
        self.shorten_output
    }

    /// Checks that the root path is an existing directory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.root_path.exists() {
            return Err(ConfigError::RootNotFound(self.root_path.clone()));
        }
        if !self.root_path.is_dir() {
            return Err(ConfigError::RootNotDirectory(self.root_path.clone()));
        }
        Ok(())
    }
}
