//! Package manager integration
//!
//! This module provides:
//! - A command runner that captures process output or a typed failure
//! - The npm adapter: listing installed packages, querying the latest
//!   published version and installing pinned updates

use crate::domain::DependencyGroup;
use crate::error::{CommandError, LookupError, ScanError};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Captured output of a successful command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Standard output from the command
    pub stdout: String,
    /// Standard error from the command
    pub stderr: String,
}

impl CommandOutput {
    /// Create an output with only stdout
    pub fn stdout(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }
}

/// Render a command line for messages
pub fn render_command(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Trait for running external commands
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run a command in the specified directory
    ///
    /// A non-zero exit status is reported as `CommandError::Failed`, which
    /// still carries the captured output.
    async fn run(
        &self,
        program: &str,
        args: &[String],
        working_dir: &Path,
    ) -> Result<CommandOutput, CommandError>;
}

/// Default command runner that executes real processes
#[derive(Debug, Default, Clone)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    /// Create a new system command runner
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for SystemCommandRunner {
    async fn run(
        &self,
        program: &str,
        args: &[String],
        working_dir: &Path,
    ) -> Result<CommandOutput, CommandError> {
        let command = render_command(program, args);
        debug!(command = %command, dir = %working_dir.display(), "running command");

        // stdin stays with the interactive prompt
        let output = Command::new(program)
            .args(args)
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| CommandError::spawn(&command, e))?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if output.status.success() {
            Ok(CommandOutput { stdout, stderr })
        } else {
            debug!(command = %command, code = ?output.status.code(), "command failed");
            Err(CommandError::Failed {
                command,
                code: output.status.code(),
                stdout,
                stderr,
            })
        }
    }
}

/// Operations the update flow needs from a package manager
#[async_trait]
pub trait PackageManager: Send + Sync {
    /// Get the package manager name
    fn name(&self) -> &'static str;

    /// Installed top-level packages by name, optionally runtime-only
    async fn list_installed(
        &self,
        runtime_only: bool,
    ) -> Result<BTreeMap<String, String>, ScanError>;

    /// Latest published version of a package
    async fn latest_version(&self, package: &str) -> Result<String, LookupError>;

    /// Install packages at their latest version with exact pinning
    async fn install_latest(
        &self,
        packages: &[String],
        group: DependencyGroup,
    ) -> Result<(), CommandError>;
}

/// `npm ls --json` output
#[derive(Debug, Deserialize)]
struct NpmListing {
    #[serde(default)]
    dependencies: BTreeMap<String, NpmListedPackage>,
    #[serde(default)]
    problems: Vec<String>,
    #[serde(default)]
    error: Option<NpmListingError>,
}

#[derive(Debug, Deserialize)]
struct NpmListedPackage {
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    missing: bool,
    #[serde(default)]
    extraneous: bool,
    /// A bool in older npm releases, a description string in newer ones
    #[serde(default)]
    invalid: Option<Value>,
}

impl NpmListedPackage {
    fn is_invalid(&self) -> bool {
        match &self.invalid {
            None | Some(Value::Null) | Some(Value::Bool(false)) => false,
            Some(_) => true,
        }
    }
}

#[derive(Debug, Deserialize)]
struct NpmListingError {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    summary: Option<String>,
}

/// Parse `npm ls --json --depth=0` output into a name → version map
///
/// Any sign that node_modules disagrees with package.json is reported as
/// `DependencyTreeInconsistent` so the caller never works on partial data.
pub fn parse_listing(json: &str) -> Result<BTreeMap<String, String>, ScanError> {
    let listing: NpmListing =
        serde_json::from_str(json).map_err(|e| ScanError::InvalidListing {
            message: e.to_string(),
        })?;

    let mut problems = listing.problems;
    let mut installed = BTreeMap::new();

    for (name, package) in listing.dependencies {
        if package.missing {
            problems.push(format!("missing: {}", name));
            continue;
        }
        if package.is_invalid() {
            problems.push(format!("invalid: {}", name));
            continue;
        }
        if package.extraneous {
            problems.push(format!("extraneous: {}", name));
            continue;
        }
        match package.version {
            Some(version) => {
                installed.insert(name, version);
            }
            None => problems.push(format!("not installed: {}", name)),
        }
    }

    if problems.is_empty() {
        if let Some(error) = listing.error {
            let summary = error
                .summary
                .or(error.code)
                .unwrap_or_else(|| "npm reported an error".to_string());
            problems.push(summary);
        }
    }

    if problems.is_empty() {
        Ok(installed)
    } else {
        problems.sort();
        problems.dedup();
        Err(ScanError::inconsistent(problems))
    }
}

/// Arguments for the batched install
pub fn install_args(packages: &[String], group: DependencyGroup) -> Vec<String> {
    let mut args = vec!["install".to_string(), "--save-exact".to_string()];
    if group.is_dev() {
        args.push("--save-dev".to_string());
    }
    args.extend(packages.iter().map(|name| format!("{}@latest", name)));
    args
}

/// First meaningful line of a command failure
fn summarize_failure(error: &CommandError) -> String {
    match error {
        CommandError::Failed { stderr, .. } => stderr
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| error.to_string()),
        CommandError::Spawn { .. } => error.to_string(),
    }
}

/// Default npm executable for this platform
fn default_program() -> &'static str {
    if cfg!(windows) {
        "npm.cmd"
    } else {
        "npm"
    }
}

/// npm adapter
pub struct NpmPackageManager<R: CommandRunner = SystemCommandRunner> {
    runner: R,
    program: String,
    working_dir: PathBuf,
}

impl NpmPackageManager<SystemCommandRunner> {
    /// Create an adapter that runs the real npm in the project directory
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self::with_runner(SystemCommandRunner::new(), working_dir)
    }
}

impl<R: CommandRunner> NpmPackageManager<R> {
    /// Create an adapter with a custom runner (for testing)
    pub fn with_runner(runner: R, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            runner,
            program: default_program().to_string(),
            working_dir: working_dir.into(),
        }
    }

    async fn npm(&self, args: Vec<String>) -> Result<CommandOutput, CommandError> {
        self.runner.run(&self.program, &args, &self.working_dir).await
    }
}

#[async_trait]
impl<R: CommandRunner> PackageManager for NpmPackageManager<R> {
    fn name(&self) -> &'static str {
        "npm"
    }

    async fn list_installed(
        &self,
        runtime_only: bool,
    ) -> Result<BTreeMap<String, String>, ScanError> {
        let mut args: Vec<String> = ["ls", "--json", "--depth=0"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        if runtime_only {
            args.push("--omit=dev".to_string());
        }

        // npm ls exits non-zero when the tree has problems but still prints them
        let stdout = match self.npm(args).await {
            Ok(output) => output.stdout,
            Err(CommandError::Failed { stdout, .. }) if !stdout.trim().is_empty() => stdout,
            Err(e) => return Err(e.into()),
        };

        let installed = parse_listing(&stdout)?;
        debug!(
            runtime_only,
            count = installed.len(),
            "listed installed packages"
        );
        Ok(installed)
    }

    async fn latest_version(&self, package: &str) -> Result<String, LookupError> {
        let args = vec!["view".to_string(), package.to_string(), "version".to_string()];
        let output = self
            .npm(args)
            .await
            .map_err(|e| {
                debug!(package, command = e.command(), "lookup command failed");
                LookupError::package_lookup_failed(package, summarize_failure(&e))
            })?;

        let version = output
            .stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .last()
            .ok_or_else(|| LookupError::package_lookup_failed(package, "no published version"))?;

        debug!(package, latest = version, "fetched latest version");
        Ok(version.to_string())
    }

    async fn install_latest(
        &self,
        packages: &[String],
        group: DependencyGroup,
    ) -> Result<(), CommandError> {
        if packages.is_empty() {
            return Ok(());
        }

        let output = self.npm(install_args(packages, group)).await?;
        debug!(stdout = %output.stdout.trim(), "install finished");
        Ok(())
    }
}
