//! Domain types
//!
//! - Locale rules for conflicted-copy names
//! - Report lines emitted while resolving

pub mod language;
pub mod report;

pub use language::Language;
pub use report::ReportLine;
