//! Application error types using thiserror
//!
//! Error hierarchy:
//! - CommandError: External process failed to start or exited non-zero
//! - ScanError: Installed dependency tree could not be listed or reconciled
//! - LookupError: Latest published version could not be retrieved
//! - VersionError: Version string is not a numeric `major.minor.patch` triple
//! - ConfigError: Issues with CLI configuration

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// External command errors
    #[error(transparent)]
    Command(#[from] CommandError),

    /// Dependency scan errors
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// Latest version lookup errors
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// Version classification errors
    #[error(transparent)]
    Version(#[from] VersionError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Prompt or output stream errors
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Guidance to print below the error message, if any
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            AppError::Scan(e) => e.hint(),
            AppError::Command(CommandError::Spawn { .. }) => {
                Some("make sure npm is installed and available on PATH")
            }
            _ => None,
        }
    }
}

/// Errors raised while running an external command
#[derive(Error, Debug)]
pub enum CommandError {
    /// The process could not be started
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The process exited with a non-zero status
    #[error("`{command}` exited with {}: {}", display_code(.code), .stderr.trim())]
    Failed {
        command: String,
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },
}

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}

impl CommandError {
    /// Creates a new Spawn error
    pub fn spawn(command: impl Into<String>, source: std::io::Error) -> Self {
        CommandError::Spawn {
            command: command.into(),
            source,
        }
    }

    /// The rendered command line this error belongs to
    pub fn command(&self) -> &str {
        match self {
            CommandError::Spawn { command, .. } | CommandError::Failed { command, .. } => command,
        }
    }
}

/// Errors related to listing the installed dependency tree
#[derive(Error, Debug)]
pub enum ScanError {
    /// The installed tree disagrees with the manifest
    #[error("installed dependency tree is inconsistent: {}", .problems.join("; "))]
    DependencyTreeInconsistent { problems: Vec<String> },

    /// The listing could not be parsed
    #[error("could not read dependency listing: {message}")]
    InvalidListing { message: String },

    /// The listing command itself failed
    #[error(transparent)]
    Command(#[from] CommandError),
}

impl ScanError {
    /// Creates a new DependencyTreeInconsistent error
    pub fn inconsistent(problems: Vec<String>) -> Self {
        ScanError::DependencyTreeInconsistent { problems }
    }

    /// Guidance for the user
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            ScanError::DependencyTreeInconsistent { .. } => Some(
                "reinstall dependencies with `npm install` (or remove node_modules and reinstall) and try again",
            ),
            ScanError::InvalidListing { .. } => None,
            ScanError::Command(CommandError::Spawn { .. }) => {
                Some("make sure npm is installed and available on PATH")
            }
            ScanError::Command(_) => None,
        }
    }
}

/// Errors related to looking up the latest published version
#[derive(Error, Debug)]
pub enum LookupError {
    /// A single package query failed
    #[error("failed to look up latest version of '{package}': {message}")]
    PackageLookupFailed { package: String, message: String },

    /// Several package queries failed (collect-all policy)
    #[error("{} package lookups failed: {}", .0.len(), join_errors(.0))]
    Batch(Vec<LookupError>),
}

fn join_errors(errors: &[LookupError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl LookupError {
    /// Creates a new PackageLookupFailed error
    pub fn package_lookup_failed(package: impl Into<String>, message: impl Into<String>) -> Self {
        LookupError::PackageLookupFailed {
            package: package.into(),
            message: message.into(),
        }
    }

    /// Names of every package whose lookup failed
    pub fn packages(&self) -> Vec<&str> {
        match self {
            LookupError::PackageLookupFailed { package, .. } => vec![package.as_str()],
            LookupError::Batch(errors) => errors.iter().flat_map(|e| e.packages()).collect(),
        }
    }
}

/// Errors related to version strings
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// Not a numeric `major.minor.patch` triple
    #[error("malformed version '{version}': {reason}")]
    Malformed { version: String, reason: String },
}

impl VersionError {
    /// Creates a new Malformed error
    pub fn malformed(version: impl Into<String>, reason: impl Into<String>) -> Self {
        VersionError::Malformed {
            version: version.into(),
            reason: reason.into(),
        }
    }
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Invalid path
    #[error("invalid path '{path}': {message}")]
    InvalidPath { path: PathBuf, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_error_spawn() {
        let err = CommandError::spawn(
            "npm ls --json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        let msg = format!("{}", err);
        assert!(msg.contains("failed to run `npm ls --json`"));
        assert_eq!(err.command(), "npm ls --json");
    }

    #[test]
    fn test_command_error_failed() {
        let err = CommandError::Failed {
            command: "npm view nope version".to_string(),
            code: Some(1),
            stdout: String::new(),
            stderr: "npm ERR! 404 Not Found\n".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("status 1"));
        assert!(msg.contains("404 Not Found"));
        assert!(!msg.ends_with('\n'));
    }

    #[test]
    fn test_command_error_failed_without_code() {
        let err = CommandError::Failed {
            command: "npm ls".to_string(),
            code: None,
            stdout: String::new(),
            stderr: String::new(),
        };
        assert!(format!("{}", err).contains("terminated by signal"));
    }

    #[test]
    fn test_scan_error_inconsistent() {
        let err = ScanError::inconsistent(vec![
            "missing: left-pad@^1.0.0".to_string(),
            "invalid: chalk@2.0.0".to_string(),
        ]);
        let msg = format!("{}", err);
        assert!(msg.contains("inconsistent"));
        assert!(msg.contains("missing: left-pad@^1.0.0; invalid: chalk@2.0.0"));
        assert!(err.hint().unwrap().contains("npm install"));
    }

    #[test]
    fn test_scan_error_invalid_listing_has_no_hint() {
        let err = ScanError::InvalidListing {
            message: "expected value".to_string(),
        };
        assert!(err.hint().is_none());
    }

    #[test]
    fn test_lookup_error_single() {
        let err = LookupError::package_lookup_failed("left-pad", "404");
        let msg = format!("{}", err);
        assert!(msg.contains("'left-pad'"));
        assert_eq!(err.packages(), vec!["left-pad"]);
    }

    #[test]
    fn test_lookup_error_batch() {
        let err = LookupError::Batch(vec![
            LookupError::package_lookup_failed("a", "404"),
            LookupError::package_lookup_failed("b", "timeout"),
        ]);
        let msg = format!("{}", err);
        assert!(msg.starts_with("2 package lookups failed"));
        assert!(msg.contains("'a'"));
        assert!(msg.contains("'b'"));
        assert_eq!(err.packages(), vec!["a", "b"]);
    }

    #[test]
    fn test_version_error_malformed() {
        let err = VersionError::malformed("1.0.0-beta.1", "segment 'patch' is not numeric");
        let msg = format!("{}", err);
        assert!(msg.contains("malformed version '1.0.0-beta.1'"));
    }

    #[test]
    fn test_app_error_from_scan_error_keeps_hint() {
        let app_err: AppError = ScanError::inconsistent(vec!["extraneous: x".to_string()]).into();
        assert!(app_err.hint().is_some());
        assert!(format!("{}", app_err).contains("extraneous: x"));
    }

    #[test]
    fn test_app_error_from_lookup_error() {
        let app_err: AppError = LookupError::package_lookup_failed("pkg", "gone").into();
        assert!(format!("{}", app_err).contains("'pkg'"));
        assert!(app_err.hint().is_none());
    }

    #[test]
    fn test_config_error_invalid_path() {
        let err = ConfigError::InvalidPath {
            path: PathBuf::from("/missing"),
            message: "not a directory".to_string(),
        };
        assert!(format!("{}", err).contains("invalid path '/missing'"));
    }
}
