//! Error types for the conflict resolver

use std::{io, path::PathBuf};

use thiserror::Error;

use dcrt_core::domain::{Language, ReportLine};

use crate::path_format::PathFormatter;

/// Errors that can occur while finding and resolving conflicted copies
#[derive(Debug, Error)]
pub enum ConflictError {
    /// The locale pattern failed to compile
    #[error("invalid conflict pattern for language {language}: {reason}")]
    InvalidPattern { language: Language, reason: String },

    /// The inferred original does not exist next to the conflicted copy
    #[error("original file {0} could not be found")]
    MissingOriginal(String),

    /// A filesystem call failed (listing, stat, delete, replace)
    #[error("{action} failed for {}", .path.display())]
    Filesystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    /// A path expected to be a regular file is something else
    #[error("not a regular file: {}", .0.display())]
    NotARegularFile(PathBuf),

    /// A file listed earlier in the run is gone
    #[error("file disappeared during the run: {}", .0.display())]
    Vanished(PathBuf),

    /// The filesystem reported no modification time
    #[error("modification time unavailable: {}", .0.display())]
    ModifiedTimeUnavailable(PathBuf),

    /// Writing a report line failed
    #[error("failed to write report: {0}")]
    Report(#[from] io::Error),
}

impl ConflictError {
    pub(crate) fn filesystem(
        action: &'static str,
        path: impl Into<PathBuf>,
        source: anyhow::Error,
    ) -> Self {
        ConflictError::Filesystem {
            action,
            path: path.into(),
            source,
        }
    }

    /// Converts a per-entry error into the line reported for it
    ///
    /// Paths go through `formatter` like every other report path. Errors that
    /// end the run are handed back unchanged.
    pub fn into_report_line(self, formatter: &PathFormatter) -> Result<ReportLine, ConflictError> {
        let line = match self {
            ConflictError::MissingOriginal(original) => ReportLine::MissingOriginal { original },
            ConflictError::Filesystem {
                action,
                path,
                source,
            } => ReportLine::Failed {
                path: formatter.format_path(&path),
                cause: format!("{action} failed: {source:#}"),
            },
            ConflictError::NotARegularFile(path) => ReportLine::Failed {
                path: formatter.format_path(&path),
                cause: "not a regular file".to_string(),
            },
            ConflictError::Vanished(path) => ReportLine::Failed {
                path: formatter.format_path(&path),
                cause: "file disappeared during the run".to_string(),
            },
            ConflictError::ModifiedTimeUnavailable(path) => ReportLine::Failed {
                path: formatter.format_path(&path),
                cause: "modification time unavailable".to_string(),
            },
            fatal @ (ConflictError::InvalidPattern { .. } | ConflictError::Report(_)) => {
                return Err(fatal)
            }
        };
        Ok(line)
    }
}
