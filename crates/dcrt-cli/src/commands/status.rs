//! Status command - List conflicted copies
//!
//! Provides the `dcrt status [path]` CLI command, which walks the tree and
//! prints one `[CONFLICT]` line per conflicted copy. Nothing is modified.

use anyhow::Result;
use clap::Args;
use tracing::info;

use dcrt_core::config::Mode;

use super::{run_scan, GlobalOptions, ScanArgs};

#[derive(Debug, Args)]
pub struct StatusCommand {
    #[command(flatten)]
    pub scan: ScanArgs,
}

impl StatusCommand {
    /// Execute the status command
    pub fn execute(&self, options: &GlobalOptions) -> Result<()> {
        let summary = run_scan(Mode::StatusOnly, &self.scan, options)?;
        info!(conflicts = summary.conflicts, "Status listing finished");
        Ok(())
    }
}
