//! A conflicted copy found during a walk

use std::path::{Path, PathBuf};

/// A conflicted copy together with the original it shadows
///
/// Only [`ConflictMatcher`](crate::matcher::ConflictMatcher) builds these,
/// so the original name is always the one inferred from the conflicted name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictEntry {
    directory: PathBuf,
    conflict_filename: String,
    original_filename: String,
}

impl ConflictEntry {
    pub(crate) fn new(
        directory: impl Into<PathBuf>,
        conflict_filename: impl Into<String>,
        original_filename: impl Into<String>,
    ) -> Self {
        Self {
            directory: directory.into(),
            conflict_filename: conflict_filename.into(),
            original_filename: original_filename.into(),
        }
    }

    /// Directory holding both files
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn conflict_filename(&self) -> &str {
        &self.conflict_filename
    }

    pub fn original_filename(&self) -> &str {
        &self.original_filename
    }

    pub fn conflict_path(&self) -> PathBuf {
        self.directory.join(&self.conflict_filename)
    }

    pub fn original_path(&self) -> PathBuf {
        self.directory.join(&self.original_filename)
    }
}
