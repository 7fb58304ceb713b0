//! Report lines
//!
//! Every user-visible outcome of a run is one `ReportLine`. The textual
//! layout keeps the historical column alignment, where `[KEEP]` is padded so
//! the closing brackets line up with `[REPLACE]`.

use std::fmt;

/// One line of run output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLine {
    /// A conflicted copy was found (status mode)
    Conflict {
        /// Formatted path of the inferred original
        path: String,
    },
    /// The conflicted copy was newer and replaced the original
    Replace {
        /// Formatted path of the original
        path: String,
    },
    /// The original was kept and the conflicted copy deleted
    Keep {
        /// Formatted path of the original
        path: String,
    },
    /// The inferred original does not exist next to the conflicted copy
    MissingOriginal {
        /// Inferred original file name
        original: String,
    },
    /// A filesystem operation failed and the entry was skipped
    Failed {
        /// Path that could not be processed
        path: String,
        /// Underlying cause
        cause: String,
    },
}

impl ReportLine {
    /// Returns true for lines reporting a problem
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            ReportLine::MissingOriginal { .. } | ReportLine::Failed { .. }
        )
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportLine::Conflict { path } => write!(f, "[CONFLICT] {path}"),
            ReportLine::Replace { path } => write!(f, "[REPLACE] {path}"),
            ReportLine::Keep { path } => write!(f, "   [KEEP] {path}"),
            ReportLine::MissingOriginal { original } => {
                write!(f, "[ERROR] Original file {original} could not be found!")
            }
            ReportLine::Failed { path, cause } => write!(f, "[ERROR] {path}: {cause}"),
        }
    }
}
