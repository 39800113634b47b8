//! CLI argument parsing module for up-deps
//!
//! Every option has a default, so running with no arguments checks the
//! current directory with fail-fast lookups.

use crate::error::ConfigError;
use crate::update::{FailurePolicy, DEFAULT_CONCURRENCY};
use clap::Parser;
use std::path::PathBuf;

/// Parse a lookup window size (at least 1)
fn parse_concurrency(s: &str) -> Result<usize, String> {
    let n: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid number: {}", s))?;
    if n == 0 {
        return Err("concurrency must be at least 1".to_string());
    }
    Ok(n)
}

/// Check installed npm dependencies and upgrade them to their latest versions
#[derive(Parser, Debug, Clone)]
#[command(
    name = "up-deps",
    version,
    about = "Check installed npm dependencies against the latest published versions"
)]
pub struct CliArgs {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Dry run mode - show what would be installed without installing
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Keep looking up the remaining packages after a failure and report all failures
    #[arg(long)]
    pub collect_errors: bool,

    /// Maximum number of version lookups in flight
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY, value_parser = parse_concurrency)]
    pub concurrency: usize,

    /// Enable verbose (debug) logging on stderr
    #[arg(long)]
    pub verbose: bool,

    /// Hide progress spinners
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl CliArgs {
    /// Lookup failure policy selected on the command line
    pub fn failure_policy(&self) -> FailurePolicy {
        if self.collect_errors {
            FailurePolicy::CollectAll
        } else {
            FailurePolicy::FailFast
        }
    }

    /// Validate arguments that clap cannot check on its own
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.path.is_dir() {
            return Err(ConfigError::InvalidPath {
                path: self.path.clone(),
                message: "not an existing directory".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::parse_from(args)
    }

    #[test]
    fn test_no_arguments() {
        let args = parse(&["up-deps"]);
        assert_eq!(args.path, PathBuf::from("."));
        assert!(!args.dry_run);
        assert!(!args.collect_errors);
        assert_eq!(args.concurrency, DEFAULT_CONCURRENCY);
        assert!(!args.verbose);
        assert!(!args.quiet);
        assert!(!args.no_color);
        assert_eq!(args.failure_policy(), FailurePolicy::FailFast);
    }

    #[test]
    fn test_path_argument() {
        let args = parse(&["up-deps", "/tmp/project"]);
        assert_eq!(args.path, PathBuf::from("/tmp/project"));
    }

    #[test]
    fn test_collect_errors() {
        let args = parse(&["up-deps", "--collect-errors"]);
        assert_eq!(args.failure_policy(), FailurePolicy::CollectAll);
    }

    #[test]
    fn test_concurrency() {
        let args = parse(&["up-deps", "--concurrency", "4"]);
        assert_eq!(args.concurrency, 4);
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        assert!(CliArgs::try_parse_from(["up-deps", "--concurrency", "0"]).is_err());
        assert!(CliArgs::try_parse_from(["up-deps", "--concurrency", "many"]).is_err());
    }

    #[test]
    fn test_short_flags() {
        let args = parse(&["up-deps", "-n", "-q"]);
        assert!(args.dry_run);
        assert!(args.quiet);
    }

    #[test]
    fn test_parse_concurrency() {
        assert_eq!(parse_concurrency("8"), Ok(8));
        assert_eq!(parse_concurrency(" 2 "), Ok(2));
        assert!(parse_concurrency("0").is_err());
        assert!(parse_concurrency("-1").is_err());
    }

    #[test]
    fn test_validate_existing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let args = parse(&["up-deps", dir.path().to_str().unwrap()]);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_validate_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let args = parse(&["up-deps", missing.to_str().unwrap()]);
        assert!(matches!(
            args.validate(),
            Err(ConfigError::InvalidPath { .. })
        ));
    }
}
