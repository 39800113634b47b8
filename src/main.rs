//! up-deps - npm dependency update helper
//!
//! Lists the project's installed dependencies, compares each against the
//! latest published version and offers to upgrade the outdated ones.

use clap::Parser;
use colored::Colorize;
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::level_filters::LevelFilter;
use up_deps::cli::CliArgs;
use up_deps::error::{AppError, LookupError};
use up_deps::orchestrator::{Orchestrator, OrchestratorConfig};
use up_deps::package_manager::NpmPackageManager;
use up_deps::prompt::StdinConfirm;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(args.verbose, !args.no_color);

    if args.no_color {
        colored::control::set_override(false);
    }

    // Run the main logic and handle errors
    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool, ansi: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_ansi(ansi)
        .without_time()
        .try_init();
}

/// Print an error with its guidance line
fn report_error(error: &AppError) {
    eprintln!("{} {}", "Error:".red().bold(), error);
    if let AppError::Lookup(e @ LookupError::Batch(_)) = error {
        let mut packages = e.packages();
        packages.sort_unstable();
        eprintln!("  {} {}", "failed packages:".yellow(), packages.join(", "));
    }
    if let Some(hint) = error.hint() {
        eprintln!("  {} {}", "hint:".yellow(), hint);
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    if let Err(e) = args.validate() {
        report_error(&AppError::from(e));
        return Ok(ExitCode::FAILURE);
    }

    let config = OrchestratorConfig::from_cli(&args);
    let manager = Arc::new(NpmPackageManager::new(args.path.clone()));
    let confirm = Arc::new(StdinConfirm::new(config.color));
    let orchestrator = Orchestrator::new(manager, confirm, config);

    let mut stdout = io::stdout();
    let report = match orchestrator.run(&mut stdout).await {
        Ok(report) => report,
        Err(e) => {
            stdout.flush()?;
            report_error(&AppError::from(e));
            return Ok(ExitCode::FAILURE);
        }
    };
    stdout.flush()?;

    for (group, error) in report.failures() {
        eprintln!("{} {} not updated", "✗".red(), group);
        report_error(error);
    }

    if report.has_failures() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
