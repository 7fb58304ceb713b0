//! Resolve command - Keep the latest version of each conflicted file
//!
//! Provides the `dcrt resolve [path]` CLI command which:
//! 1. Finds every conflicted copy below the path
//! 2. Replaces the original when the conflicted copy is newer
//! 3. Otherwise deletes the conflicted copy
//!
//! Deleted files are gone for good; there is no backup.

use anyhow::Result;
use clap::Args;
use tracing::info;

use dcrt_core::config::Mode;

use super::{run_scan, GlobalOptions, ScanArgs};

#[derive(Debug, Args)]
pub struct ResolveCommand {
    #[command(flatten)]
    pub scan: ScanArgs,
}

impl ResolveCommand {
    /// Execute the resolve command
    pub fn execute(&self, options: &GlobalOptions) -> Result<()> {
        let summary = run_scan(Mode::KeepLatest, &self.scan, options)?;
        info!(
            replaced = summary.replaced,
            kept = summary.kept,
            errors = summary.errors,
            "Resolution finished"
        );
        Ok(())
    }
}
