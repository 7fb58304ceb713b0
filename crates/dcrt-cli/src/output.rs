//! Human-readable run header printed before the report lines

use dcrt_core::config::{Mode, RunConfiguration};

/// Lines written to stdout ahead of the report
pub fn header_lines(config: &RunConfiguration) -> Vec<String> {
    let root = config.root_path().display();
    let mut lines = vec![format!("=== dcrt v{} ===", env!("CARGO_PKG_VERSION")), String::new()];
    match config.mode() {
        Mode::StatusOnly => {
            lines.push(format!("Searching for conflicted files in {root}"));
        }
        Mode::KeepLatest => {
            lines.push(format!("Resolving conflicts in {root}"));
            lines.push(format!("Method: {}", config.mode()));
        }
    }
    lines.push(String::new());
    lines
}
