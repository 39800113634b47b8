//! Evaluated dependencies and per-group outcomes

use super::{DependencyRecord, VersionDelta};
use std::fmt;

/// An installed dependency paired with its latest published version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatedDependency {
    /// Package name
    pub name: String,
    /// Version found in the installed tree
    pub installed_version: String,
    /// Latest published version
    pub latest_version: String,
    /// Classified difference between the two
    pub delta: VersionDelta,
}

impl EvaluatedDependency {
    /// Creates a new evaluated dependency
    pub fn new(
        record: DependencyRecord,
        latest_version: impl Into<String>,
        delta: VersionDelta,
    ) -> Self {
        Self {
            name: record.name,
            installed_version: record.installed_version,
            latest_version: latest_version.into(),
            delta,
        }
    }

    /// Returns true if installed and latest differ
    pub fn is_outdated(&self) -> bool {
        self.delta.is_update()
    }
}

impl fmt::Display for EvaluatedDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} -> {} [{}]",
            self.name, self.installed_version, self.latest_version, self.delta.label
        )
    }
}

/// Terminal state of one dependency group's update flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupOutcome {
    /// Nothing was outdated
    UpToDate,
    /// The user declined to update
    Declined,
    /// Every outdated package was excluded (only major updates, declined)
    NothingSelected,
    /// Dry run: these packages would have been installed
    DryRun(Vec<EvaluatedDependency>),
    /// These packages were installed
    Updated(Vec<EvaluatedDependency>),
}

impl GroupOutcome {
    /// Packages installed (or that would be, in a dry run)
    pub fn selected(&self) -> &[EvaluatedDependency] {
        match self {
            GroupOutcome::DryRun(deps) | GroupOutcome::Updated(deps) => deps,
            GroupOutcome::UpToDate | GroupOutcome::Declined | GroupOutcome::NothingSelected => &[],
        }
    }

    /// Returns true if the install command ran
    pub fn is_updated(&self) -> bool {
        matches!(self, GroupOutcome::Updated(_))
    }
}
