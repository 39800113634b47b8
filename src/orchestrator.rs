//! Update orchestrator for coordinating the entire workflow
//!
//! This module provides:
//! - Workflow coordination: scan → fetch latest → classify → report → prompt → install
//! - Concurrent latest-version lookups per dependency group
//! - Dry-run mode support
//! - Per-group error isolation: a failing group does not stop the other one

use crate::cli::CliArgs;
use crate::domain::{
    DependencyGroup, DependencyRecord, EvaluatedDependency, GroupOutcome, GroupReport, RunReport,
};
use crate::error::{AppError, ScanError, VersionError};
use crate::output::{OutputConfig, TextFormatter};
use crate::package_manager::{install_args, render_command, PackageManager};
use crate::progress::Progress;
use crate::prompt::Confirm;
use crate::scanner::Scanner;
use crate::update::{
    classify, fetch_latest_versions, has_major, outdated, FailurePolicy, UpdateFilter,
};
use std::io::Write;
use std::sync::Arc;
use tracing::debug;

/// Configuration for the orchestrator
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    /// Failure policy for latest-version lookups
    pub policy: FailurePolicy,
    /// Maximum concurrent lookups
    pub concurrency: usize,
    /// Report the install command instead of running it
    pub dry_run: bool,
    /// Show spinners and progress bars
    pub show_progress: bool,
    /// Use colors in output
    pub color: bool,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            policy: FailurePolicy::default(),
            concurrency: crate::update::DEFAULT_CONCURRENCY,
            dry_run: false,
            show_progress: true,
            color: true,
        }
    }
}

impl OrchestratorConfig {
    /// Create configuration from CLI arguments
    pub fn from_cli(args: &CliArgs) -> Self {
        Self {
            policy: args.failure_policy(),
            concurrency: args.concurrency,
            dry_run: args.dry_run,
            show_progress: !args.quiet,
            color: !args.no_color,
        }
    }
}

/// Orchestrator for the check-and-update workflow
pub struct Orchestrator {
    /// Package manager used for listing, lookups and installs
    manager: Arc<dyn PackageManager>,
    /// Source of yes/no answers
    confirm: Arc<dyn Confirm>,
    config: OrchestratorConfig,
    formatter: TextFormatter,
}

impl Orchestrator {
    /// Create a new orchestrator
    pub fn new(
        manager: Arc<dyn PackageManager>,
        confirm: Arc<dyn Confirm>,
        config: OrchestratorConfig,
    ) -> Self {
        let formatter = OutputConfig::new(config.dry_run, config.color).formatter();
        Self {
            manager,
            confirm,
            config,
            formatter,
        }
    }

    fn progress(&self) -> Progress {
        if self.config.show_progress {
            Progress::default()
        } else {
            Progress::disabled()
        }
    }

    fn scanner(&self) -> Scanner<'_> {
        Scanner::new(self.manager.as_ref())
    }

    /// Scan once, then run the update flow for each group in turn
    ///
    /// A scan failure aborts the run. Errors inside a group are recorded in
    /// the report and the next group is still processed.
    pub async fn run(&self, writer: &mut dyn Write) -> Result<RunReport, ScanError> {
        let mut progress = self.progress();
        progress.scanning();
        let scanned = self.scanner().scan().await;
        progress.clear();
        let scanned = scanned?;

        let mut report = RunReport::new();
        for group in DependencyGroup::ALL {
            let result = self.run_group(scanned.group(group), group, writer).await;
            if let Err(ref e) = result {
                debug!(%group, error = %e, "dependency group aborted");
            }
            report.add_group(GroupReport::new(group, result));
        }

        if let Err(e) = self.formatter.format_summary(&report, writer) {
            debug!(error = %e, "failed to write summary");
        }
        debug!(
            updated = report.total_updated(),
            failed = report.failures().count(),
            "run finished"
        );
        Ok(report)
    }

    /// Check one group and, if anything is outdated, walk through the update
    pub async fn run_group(
        &self,
        dependencies: &[DependencyRecord],
        group: DependencyGroup,
        writer: &mut dyn Write,
    ) -> Result<GroupOutcome, AppError> {
        self.formatter
            .format_checking(group, dependencies.len(), writer)?;

        let outdated = self.check_versions(dependencies, group).await?;
        if outdated.is_empty() {
            self.formatter.format_up_to_date(group, writer)?;
            return Ok(GroupOutcome::UpToDate);
        }

        self.formatter.format_outdated(group, &outdated, writer)?;
        self.update_deps(outdated, group, writer).await
    }

    /// Fetch the latest version of every dependency and keep the outdated ones
    ///
    /// Output keeps the order of `dependencies`.
    pub async fn check_versions(
        &self,
        dependencies: &[DependencyRecord],
        group: DependencyGroup,
    ) -> Result<Vec<EvaluatedDependency>, AppError> {
        let mut progress = self.progress();
        progress.lookups(group, dependencies.len());
        let latest = fetch_latest_versions(
            &self.scanner(),
            dependencies,
            self.config.policy,
            self.config.concurrency,
            &progress,
        )
        .await;
        progress.clear();
        let latest = latest?;

        let evaluated = dependencies
            .iter()
            .zip(latest)
            .map(|(record, latest)| -> Result<_, VersionError> {
                let delta = classify(&record.installed_version, &latest)?;
                Ok(EvaluatedDependency::new(record.clone(), latest, delta))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let outdated = outdated(evaluated);

        debug!(%group, checked = dependencies.len(), outdated = outdated.len(), "checked versions");
        Ok(outdated)
    }

    /// Ask the user what to update and issue the batched install
    pub async fn update_deps(
        &self,
        outdated: Vec<EvaluatedDependency>,
        group: DependencyGroup,
        writer: &mut dyn Write,
    ) -> Result<GroupOutcome, AppError> {
        if outdated.is_empty() {
            return Ok(GroupOutcome::UpToDate);
        }

        writer.flush()?;
        if !self
            .confirm
            .ask_yes_no(&format!("Update {}?", group))?
        {
            self.formatter.format_declined(group, writer)?;
            return Ok(GroupOutcome::Declined);
        }

        let include_major = if has_major(&outdated) {
            writer.flush()?;
            self.confirm
                .ask_yes_no("Include major version updates?")?
        } else {
            false
        };

        let selected = UpdateFilter::new()
            .with_include_major(include_major)
            .apply(outdated);
        if selected.is_empty() {
            self.formatter.format_nothing_selected(group, writer)?;
            return Ok(GroupOutcome::NothingSelected);
        }

        let names: Vec<String> = selected.iter().map(|d| d.name.clone()).collect();

        if self.config.dry_run {
            let command = render_command(self.manager.name(), &install_args(&names, group));
            self.formatter.format_dry_run(&command, writer)?;
            return Ok(GroupOutcome::DryRun(selected));
        }

        debug!(%group, packages = ?names, "installing updates");
        self.manager.install_latest(&names, group).await?;
        self.formatter.format_updated(group, &selected, writer)?;
        Ok(GroupOutcome::Updated(selected))
    }
}
