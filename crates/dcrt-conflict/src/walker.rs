//! Depth-first directory walk
//!
//! Pending directories live on an explicit stack, so tree depth is bounded
//! by heap memory rather than the call stack. Entries of each directory are
//! visited in name order; nothing downstream depends on that order, it only
//! keeps output stable between runs.

use std::{
    collections::VecDeque,
    path::{Path, PathBuf},
};

use tracing::{debug, trace, warn};

use dcrt_core::ports::{EntryKind, ILocalFileSystem};

/// One item produced by [`DirectoryWalker`]
#[derive(Debug)]
pub enum WalkEvent {
    /// A regular file with a UTF-8 name
    File { directory: PathBuf, name: String },
    /// A directory that could not be listed; its subtree is skipped
    Error { path: PathBuf, error: anyhow::Error },
}

/// Iterator over every regular file below a root directory
pub struct DirectoryWalker<'a> {
    fs: &'a dyn ILocalFileSystem,
    pending_dirs: Vec<PathBuf>,
    ready: VecDeque<WalkEvent>,
}

impl<'a> DirectoryWalker<'a> {
    pub fn new(fs: &'a dyn ILocalFileSystem, root: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            pending_dirs: vec![root.into()],
            ready: VecDeque::new(),
        }
    }

    fn expand(&mut self, dir: PathBuf) {
        let mut entries = match self.fs.read_dir(&dir) {
            Ok(entries) => entries,
            Err(error) => {
                warn!(path = %dir.display(), error = %error, "Cannot list directory, skipping");
                self.ready.push_back(WalkEvent::Error { path: dir, error });
                return;
            }
        };
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        let mut subdirs = Vec::new();
        for entry in entries {
            if entry.name == "." || entry.name == ".." {
                continue;
            }
            match entry.kind {
                EntryKind::Directory => subdirs.push(dir.join(&entry.name)),
                EntryKind::File => match entry.name.into_string() {
                    Ok(name) => self.ready.push_back(WalkEvent::File {
                        directory: dir.clone(),
                        name,
                    }),
                    Err(raw) => {
                        debug!(directory = %dir.display(), name = ?raw, "Skipping file with non-UTF-8 name");
                    }
                },
                EntryKind::Symlink => {
                    debug!(path = %display_join(&dir, &entry.name), "Skipping symbolic link");
                }
                EntryKind::Other => {
                    trace!(path = %display_join(&dir, &entry.name), "Skipping special file");
                }
            }
        }

        // Stack pops from the end: push in reverse to descend in name order
        self.pending_dirs.extend(subdirs.into_iter().rev());
    }
}

impl Iterator for DirectoryWalker<'_> {
    type Item = WalkEvent;

    fn next(&mut self) -> Option<WalkEvent> {
        loop {
            if let Some(event) = self.ready.pop_front() {
                return Some(event);
            }
            let dir = self.pending_dirs.pop()?;
            self.expand(dir);
        }
    }
}

fn display_join(dir: &Path, name: &std::ffi::OsStr) -> String {
    dir.join(name).display().to_string()
}
