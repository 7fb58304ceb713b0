//! Local filesystem port
//!
//! The resolver reaches the disk only through [`ILocalFileSystem`], so a
//! run can be exercised against failing or scripted filesystems in tests.
//!
//! ## Design Notes
//!
//! - Uses `anyhow::Result` because filesystem errors are adapter-specific.
//! - All calls are blocking; a run performs exactly one at a time.
//! - Symbolic links are reported as [`EntryKind::Symlink`] and never
//!   resolved by the port itself.

use std::{ffi::OsString, path::Path};

use chrono::{DateTime, Utc};

// ============================================================================
// Directory entries
// ============================================================================

/// Kind of a directory entry, as seen without following links
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Symlink,
    /// Sockets, FIFOs, devices
    Other,
}

/// A single entry returned by [`ILocalFileSystem::read_dir`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    /// Entry name relative to the listed directory
    pub name: OsString,
    pub kind: EntryKind,
}

impl DirEntryInfo {
    pub fn new(name: impl Into<OsString>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

// ============================================================================
// FileSystemState
// ============================================================================

/// Snapshot of a path's state on the local filesystem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSystemState {
    /// Whether anything exists at the path
    pub exists: bool,
    /// Whether this is a regular file (false for directories and other types)
    pub is_file: bool,
    /// Last modification time (None if not available or path doesn't exist)
    pub modified: Option<DateTime<Utc>>,
}

impl FileSystemState {
    /// Returns a state representing a non-existent path
    pub fn not_found() -> Self {
        Self {
            exists: false,
            is_file: false,
            modified: None,
        }
    }
}

// ============================================================================
// ILocalFileSystem trait
// ============================================================================

/// Blocking filesystem operations needed to find and resolve conflicts
pub trait ILocalFileSystem {
    /// Lists the entries of a directory
    ///
    /// Implementations never return the `.` and `..` pseudo-entries.
    fn read_dir(&self, path: &Path) -> anyhow::Result<Vec<DirEntryInfo>>;

    /// Returns the state of a path without following a final symbolic link
    ///
    /// A missing path is `Ok(FileSystemState::not_found())`, not an error.
    fn get_state(&self, path: &Path) -> anyhow::Result<FileSystemState>;

    /// Permanently deletes a regular file
    fn delete_file(&self, path: &Path) -> anyhow::Result<()>;

    /// Moves `from` onto `to`, replacing whatever file `to` names
    fn replace_file(&self, from: &Path, to: &Path) -> anyhow::Result<()>;
}
