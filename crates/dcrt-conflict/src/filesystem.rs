//! Local filesystem adapter
//!
//! Implements [`ILocalFileSystem`] with blocking `std::fs` calls.
//!
//! ## Design Decisions
//!
//! - **No link following**: entry kinds and states come from
//!   `symlink_metadata`, so a link is never mistaken for its target.
//! - **Atomic replace**: `replace_file` is a single `rename`, which swaps the
//!   destination in place on both Unix and Windows. The original is never
//!   absent between a delete and a rename.

use std::{
    fs::{self, FileType},
    io::{self, ErrorKind},
    path::Path,
};

use chrono::{DateTime, Utc};
use dcrt_core::ports::{DirEntryInfo, EntryKind, FileSystemState, ILocalFileSystem};
use tracing::{debug, instrument, trace, warn};

/// Adapter that bridges the [`ILocalFileSystem`] port to the real filesystem.
#[derive(Debug, Clone, Default)]
pub struct LocalFileSystemAdapter;

impl LocalFileSystemAdapter {
    /// Create a new `LocalFileSystemAdapter`.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ILocalFileSystem for LocalFileSystemAdapter {
    #[instrument(skip(self), fields(path = %path.display()))]
    fn read_dir(&self, path: &Path) -> anyhow::Result<Vec<DirEntryInfo>> {
        let entries = readable_entries(fs::read_dir(path)?.map(|entry| -> io::Result<DirEntryInfo> {
            let entry = entry?;
            let kind = entry_kind(entry.file_type()?);
            Ok(DirEntryInfo::new(entry.file_name(), kind))
        }));
        trace!(count = entries.len(), "directory listed");
        Ok(entries)
    }

    #[instrument(skip(self), fields(path = %path.display()))]
    fn get_state(&self, path: &Path) -> anyhow::Result<FileSystemState> {
        let metadata = match fs::symlink_metadata(path) {
            Ok(m) => m,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                trace!("path not found");
                return Ok(FileSystemState::not_found());
            }
            Err(e) => return Err(e.into()),
        };

        let modified = metadata.modified().ok().map(DateTime::<Utc>::from);
        let is_file = metadata.is_file();
        trace!(is_file, ?modified, "state retrieved");

        Ok(FileSystemState {
            exists: true,
            is_file,
            modified,
        })
    }

    #[instrument(skip(self), fields(path = %path.display()))]
    fn delete_file(&self, path: &Path) -> anyhow::Result<()> {
        fs::remove_file(path)?;
        debug!("file deleted");
        Ok(())
    }

    #[instrument(skip(self), fields(from = %from.display(), to = %to.display()))]
    fn replace_file(&self, from: &Path, to: &Path) -> anyhow::Result<()> {
        fs::rename(from, to)?;
        debug!("file replaced");
        Ok(())
    }
}

fn entry_kind(file_type: FileType) -> EntryKind {
    if file_type.is_symlink() {
        EntryKind::Symlink
    } else if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    }
}

/// Drops entries that cannot be read; their siblings are still listed
fn readable_entries(entries: impl Iterator<Item = io::Result<DirEntryInfo>>) -> Vec<DirEntryInfo> {
    entries
        .filter_map(|entry| match entry {
            Ok(info) => Some(info),
            Err(error) => {
                warn!(error = %error, "Skipping unreadable directory entry");
                None
            }
        })
        .collect()
}
