//! Run report across both dependency groups

use super::{DependencyGroup, GroupOutcome};
use crate::error::AppError;

/// Result of processing one dependency group
#[derive(Debug)]
pub struct GroupReport {
    /// The group that was processed
    pub group: DependencyGroup,
    /// Outcome, or the error that aborted the group
    pub result: Result<GroupOutcome, AppError>,
}

impl GroupReport {
    /// Creates a new GroupReport
    pub fn new(group: DependencyGroup, result: Result<GroupOutcome, AppError>) -> Self {
        Self { group, result }
    }

    /// Returns true if the group was aborted by an error
    pub fn is_failure(&self) -> bool {
        self.result.is_err()
    }
}

/// Outcome of a single invocation
#[derive(Debug, Default)]
pub struct RunReport {
    /// Reports in processing order
    pub groups: Vec<GroupReport>,
}

impl RunReport {
    /// Creates an empty RunReport
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a group report
    pub fn add_group(&mut self, report: GroupReport) {
        self.groups.push(report);
    }

    /// Returns true if any group failed
    pub fn has_failures(&self) -> bool {
        self.groups.iter().any(GroupReport::is_failure)
    }

    /// Returns the failed groups
    pub fn failures(&self) -> impl Iterator<Item = (DependencyGroup, &AppError)> {
        self.groups
            .iter()
            .filter_map(|g| g.result.as_ref().err().map(|e| (g.group, e)))
    }

    /// Returns the outcome for a group, if it completed
    pub fn outcome(&self, group: DependencyGroup) -> Option<&GroupOutcome> {
        self.groups
            .iter()
            .find(|g| g.group == group)
            .and_then(|g| g.result.as_ref().ok())
    }

    /// Total number of packages installed across groups
    pub fn total_updated(&self) -> usize {
        DependencyGroup::ALL
            .iter()
            .filter_map(|group| self.outcome(*group))
            .filter(|o| o.is_updated())
            .map(|o| o.selected().len())
            .sum()
    }
}
