//! CLI command implementations

pub mod resolve;
pub mod status;

use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Args;

use dcrt_conflict::{LocalFileSystemAdapter, Resolver, RunSummary};
use dcrt_core::{
    config::{Mode, RunConfiguration},
    domain::Language,
    ports::WriterSink,
};

use crate::output::header_lines;

/// Words that select a command and therefore cannot double as a path
const COMMAND_WORDS: [&str; 3] = ["status", "resolve", "process"];

/// Options given before or after the command
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    pub language: Language,
    pub shorten: bool,
}

/// Positional arguments shared by the scanning commands
#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Directory to scan
    #[arg(default_value = ".", value_parser = parse_scan_root)]
    pub path: PathBuf,
}

/// A second command word in the path slot is a usage error; prefix it with
/// `./` to scan a directory with that name.
fn parse_scan_root(value: &str) -> Result<PathBuf, String> {
    if COMMAND_WORDS.iter().any(|word| word.eq_ignore_ascii_case(value)) {
        return Err(format!(
            "'{value}' is a command; give exactly one of status or resolve (use ./{value} to scan a directory of that name)"
        ));
    }
    Ok(PathBuf::from(value))
}

/// Builds the run configuration, prints the header and streams report lines
/// to stdout.
pub(crate) fn run_scan(mode: Mode, args: &ScanArgs, options: &GlobalOptions) -> Result<RunSummary> {
    let config = RunConfiguration::new(mode, &args.path)
        .with_language(options.language)
        .with_shortened_output(options.shorten);
    config.validate().context("Invalid scan root")?;

    let mut out = io::stdout().lock();
    for line in header_lines(&config) {
        writeln!(out, "{line}").context("Failed to write to stdout")?;
    }

    let fs = LocalFileSystemAdapter::new();
    let resolver = Resolver::new(config, &fs).context("Failed to prepare resolver")?;

    let mut sink = WriterSink::new(out);
    let summary = resolver
        .run(&mut sink)
        .context("Failed to write report")?;
    sink.into_inner().flush().context("Failed to write to stdout")?;

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scan_root_accepts_paths() {
        assert_eq!(parse_scan_root(".").unwrap(), PathBuf::from("."));
        assert_eq!(parse_scan_root("./status").unwrap(), PathBuf::from("./status"));
        assert_eq!(
            parse_scan_root("/home/me/Dropbox").unwrap(),
            PathBuf::from("/home/me/Dropbox")
        );
    }

    #[test]
    fn test_parse_scan_root_rejects_command_words() {
        for word in ["status", "resolve", "process", "Status"] {
            assert!(parse_scan_root(word).is_err(), "{word} should be rejected");
        }
    }

    #[test]
    fn test_run_scan_rejects_missing_root() {
        let dir = tempfile::TempDir::new().unwrap();
        let args = ScanArgs {
            path: dir.path().join("missing"),
        };
        let options = GlobalOptions {
            language: Language::De,
            shorten: false,
        };
        let err = run_scan(Mode::KeepLatest, &args, &options).unwrap_err();
        assert!(err.to_string().contains("Invalid scan root"));
    }

    #[test]
    fn test_run_scan_status_on_tree() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("a (conflicted copy).txt"), b"x").unwrap();
        let args = ScanArgs {
            path: dir.path().to_path_buf(),
        };
        let options = GlobalOptions {
            language: Language::En,
            shorten: true,
        };
        let summary = run_scan(Mode::StatusOnly, &args, &options).unwrap();
        assert_eq!(summary.conflicts, 1);
        assert!(dir.path().join("a (conflicted copy).txt").exists());
    }
}
