//! Resolution policies
//!
//! A policy decides what happens to one conflicted copy and returns the line
//! reporting it. `StatusOnlyPolicy` never touches the disk; `KeepLatestPolicy`
//! keeps whichever of original and conflicted copy was modified last.

use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use dcrt_core::{
    config::Mode,
    domain::ReportLine,
    ports::{FileSystemState, ILocalFileSystem},
};

use crate::{entry::ConflictEntry, error::ConflictError, path_format::PathFormatter};

/// Handles a single conflicted copy
pub trait ResolutionPolicy {
    fn resolve(&self, entry: &ConflictEntry) -> Result<ReportLine, ConflictError>;
}

/// Builds the policy for a run mode
pub fn policy_for<'a>(
    mode: Mode,
    fs: &'a dyn ILocalFileSystem,
    formatter: PathFormatter,
) -> Box<dyn ResolutionPolicy + 'a> {
    match mode {
        Mode::StatusOnly => Box::new(StatusOnlyPolicy::new(formatter)),
        Mode::KeepLatest => Box::new(KeepLatestPolicy::new(fs, formatter)),
    }
}

/// Reports every conflict without reading or changing any file
pub struct StatusOnlyPolicy {
    formatter: PathFormatter,
}

impl StatusOnlyPolicy {
    pub fn new(formatter: PathFormatter) -> Self {
        Self { formatter }
    }
}

impl ResolutionPolicy for StatusOnlyPolicy {
    fn resolve(&self, entry: &ConflictEntry) -> Result<ReportLine, ConflictError> {
        Ok(ReportLine::Conflict {
            path: self
                .formatter
                .format(entry.directory(), entry.original_filename()),
        })
    }
}

/// Keeps the newer of the two files and deletes the other
///
/// Equal modification times keep the original. If the original is missing
/// the conflicted copy is left alone.
pub struct KeepLatestPolicy<'a> {
    fs: &'a dyn ILocalFileSystem,
    formatter: PathFormatter,
}

impl<'a> KeepLatestPolicy<'a> {
    pub fn new(fs: &'a dyn ILocalFileSystem, formatter: PathFormatter) -> Self {
        Self { fs, formatter }
    }

    fn stat(&self, path: &Path) -> Result<FileSystemState, ConflictError> {
        self.fs
            .get_state(path)
            .map_err(|e| ConflictError::filesystem("stat", path, e))
    }
}

/// Modification time of a path expected to be a regular file
fn modified_at(path: &Path, state: FileSystemState) -> Result<DateTime<Utc>, ConflictError> {
    if !state.exists {
        return Err(ConflictError::Vanished(path.to_path_buf()));
    }
    if !state.is_file {
        return Err(ConflictError::NotARegularFile(path.to_path_buf()));
    }
    state
        .modified
        .ok_or_else(|| ConflictError::ModifiedTimeUnavailable(path.to_path_buf()))
}

impl ResolutionPolicy for KeepLatestPolicy<'_> {
    fn resolve(&self, entry: &ConflictEntry) -> Result<ReportLine, ConflictError> {
        let original_path = entry.original_path();
        let conflict_path = entry.conflict_path();

        let original_state = self.stat(&original_path)?;
        if !original_state.exists {
            return Err(ConflictError::MissingOriginal(
                entry.original_filename().to_string(),
            ));
        }

        let original_time = modified_at(&original_path, original_state)?;
        let conflict_time = modified_at(&conflict_path, self.stat(&conflict_path)?)?;
        let path = self
            .formatter
            .format(entry.directory(), entry.original_filename());

        debug!(
            original = %original_path.display(),
            original_time = %original_time,
            conflict_time = %conflict_time,
            "Comparing modification times"
        );

        if conflict_time > original_time {
            self.fs
                .replace_file(&conflict_path, &original_path)
                .map_err(|e| ConflictError::filesystem("replace", &conflict_path, e))?;
            info!(
                original = %original_path.display(),
                "Conflicted copy is newer, replaced original"
            );
            Ok(ReportLine::Replace { path })
        } else {
            self.fs
                .delete_file(&conflict_path)
                .map_err(|e| ConflictError::filesystem("delete", &conflict_path, e))?;
            info!(
                conflict = %conflict_path.display(),
                "Original is not older, deleted conflicted copy"
            );
            Ok(ReportLine::Keep { path })
        }
    }
}
