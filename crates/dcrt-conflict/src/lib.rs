//! dcrt Conflict - Conflicted-copy detection and resolution
//!
//! Provides:
//! - Locale-specific matching of conflicted-copy file names
//! - An iterative depth-first directory walk
//! - Status-only and keep-latest resolution policies
//! - Report path formatting for narrow terminals

pub mod entry;
pub mod error;
pub mod filesystem;
pub mod matcher;
pub mod path_format;
pub mod policy;
pub mod resolver;
pub mod walker;

pub use entry::ConflictEntry;
pub use error::ConflictError;
pub use filesystem::LocalFileSystemAdapter;
pub use matcher::ConflictMatcher;
pub use path_format::PathFormatter;
pub use policy::{KeepLatestPolicy, ResolutionPolicy, StatusOnlyPolicy};
pub use resolver::{Resolver, RunSummary};
pub use walker::{DirectoryWalker, WalkEvent};
