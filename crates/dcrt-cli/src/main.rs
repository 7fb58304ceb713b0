//! dcrt CLI - Command-line interface for dcrt
//!
//! Provides commands for:
//! - Listing conflicted copies left by a sync client (`status`)
//! - Keeping the newest version of each conflicted file (`resolve`)

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use dcrt_core::domain::Language;

mod commands;
mod output;

use commands::{resolve::ResolveCommand, status::StatusCommand, GlobalOptions};

#[derive(Debug, Parser)]
#[command(
    name = "dcrt",
    version,
    about = "Find and resolve conflicted copies left behind by cloud sync clients"
)]
pub struct Cli {
    /// Language of the sync client that named the conflicted copies: de, en
    #[arg(short, long, default_value = "de", global = true)]
    language: Language,

    /// Shorten printed paths to fit an 80-column terminal
    #[arg(short = 's', long = "shorten", global = true)]
    shorten: bool,

    /// Verbose diagnostics on stderr (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List conflicted copies without changing anything (read-only)
    Status(StatusCommand),
    /// Keep the newer of each conflicted copy and its original, deleting the other
    #[command(visible_alias = "process")]
    Resolve(ResolveCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Report lines own stdout; diagnostics go to stderr
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let options = GlobalOptions {
        language: cli.language,
        shorten: cli.shorten,
    };

    match cli.command {
        Commands::Status(cmd) => cmd.execute(&options),
        Commands::Resolve(cmd) => cmd.execute(&options),
    }
}
