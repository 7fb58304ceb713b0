//! Run orchestration
//!
//! Ties the walker, the matcher and the active policy together: every file
//! the walk yields is matched, every match is resolved, and every outcome is
//! reported to the sink as soon as it happens.

use tracing::{debug, info, warn};

use dcrt_core::{
    config::RunConfiguration,
    domain::ReportLine,
    ports::{ILocalFileSystem, ReportSink},
};

use crate::{
    error::ConflictError,
    matcher::ConflictMatcher,
    path_format::PathFormatter,
    policy::{policy_for, ResolutionPolicy},
    walker::{DirectoryWalker, WalkEvent},
};

/// Counters for a finished run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files_scanned: u32,
    pub conflicts: u32,
    pub replaced: u32,
    pub kept: u32,
    pub errors: u32,
}

impl RunSummary {
    fn record(&mut self, line: &ReportLine) {
        match line {
            ReportLine::Replace { .. } => self.replaced += 1,
            ReportLine::Keep { .. } => self.kept += 1,
            _ if line.is_error() => self.errors += 1,
            _ => {}
        }
    }
}

/// Finds conflicted copies below the configured root and resolves them
pub struct Resolver<'a> {
    config: RunConfiguration,
    fs: &'a dyn ILocalFileSystem,
    matcher: ConflictMatcher,
    formatter: PathFormatter,
    policy: Box<dyn ResolutionPolicy + 'a>,
}

impl<'a> Resolver<'a> {
    pub fn new(
        config: RunConfiguration,
        fs: &'a dyn ILocalFileSystem,
    ) -> Result<Self, ConflictError> {
        let matcher = ConflictMatcher::new(config.language())?;
        let formatter = PathFormatter::new(config.shorten_output());
        let policy = policy_for(config.mode(), fs, formatter);
        Ok(Self {
            config,
            fs,
            matcher,
            formatter,
            policy,
        })
    }

    /// Walks the tree once, emitting a report line per conflict or failure
    ///
    /// Per-entry failures are reported and skipped. The run stops early only
    /// if the sink cannot be written.
    pub fn run(&self, sink: &mut dyn ReportSink) -> Result<RunSummary, ConflictError> {
        info!(
            root = %self.config.root_path().display(),
            mode = %self.config.mode(),
            language = %self.config.language(),
            "Scanning for conflicted copies"
        );

        let mut summary = RunSummary::default();
        for event in DirectoryWalker::new(self.fs, self.config.root_path()) {
            let line = match event {
                WalkEvent::Error { path, error } => ConflictError::filesystem("list", path, error)
                    .into_report_line(&self.formatter)?,
                WalkEvent::File { directory, name } => {
                    summary.files_scanned += 1;
                    let Some(entry) = self.matcher.match_entry(&directory, &name) else {
                        continue;
                    };
                    summary.conflicts += 1;
                    debug!(
                        directory = %directory.display(),
                        conflict = %entry.conflict_filename(),
                        original = %entry.original_filename(),
                        "Found conflicted copy"
                    );

                    match self.policy.resolve(&entry) {
                        Ok(line) => line,
                        Err(err) => {
                            warn!(
                                conflict = %entry.conflict_path().display(),
                                error = %err,
                                "Could not resolve conflicted copy, skipping"
                            );
                            err.into_report_line(&self.formatter)?
                        }
                    }
                }
            };
            summary.record(&line);
            sink.emit(line)?;
        }

        info!(
            files_scanned = summary.files_scanned,
            conflicts = summary.conflicts,
            replaced = summary.replaced,
            kept = summary.kept,
            errors = summary.errors,
            "Run complete"
        );
        Ok(summary)
    }
}
