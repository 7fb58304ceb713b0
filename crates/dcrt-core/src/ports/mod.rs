//! Port definitions
//!
//! - [`ILocalFileSystem`] - Directory listing, stat, delete and replace
//! - [`ReportSink`] - Destination for user-facing report lines

pub mod local_filesystem;
pub mod report_sink;

pub use local_filesystem::{DirEntryInfo, EntryKind, FileSystemState, ILocalFileSystem};
pub use report_sink::{ReportSink, WriterSink};
