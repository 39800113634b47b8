//! Update selection filter
//!
//! Decides which outdated dependencies go into the install command once the
//! user has answered the prompts.

use crate::domain::EvaluatedDependency;

/// Filter configuration for update selection
#[derive(Debug, Clone, Default)]
pub struct UpdateFilter {
    /// Keep major-version updates
    pub include_major: bool,
}

impl UpdateFilter {
    /// Create a new UpdateFilter that drops major updates
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether major updates are kept
    pub fn with_include_major(mut self, include: bool) -> Self {
        self.include_major = include;
        self
    }

    /// Check if a single dependency should be installed
    pub fn should_update(&self, dependency: &EvaluatedDependency) -> bool {
        dependency.is_outdated() && (self.include_major || !dependency.delta.is_major())
    }

    /// Keep the dependencies that pass the filter, in their original order
    pub fn apply(&self, dependencies: Vec<EvaluatedDependency>) -> Vec<EvaluatedDependency> {
        dependencies
            .into_iter()
            .filter(|d| self.should_update(d))
            .collect()
    }
}

/// Keep only dependencies whose installed version differs from latest
pub fn outdated(dependencies: Vec<EvaluatedDependency>) -> Vec<EvaluatedDependency> {
    dependencies.into_iter().filter(|d| d.is_outdated()).collect()
}

/// Returns true if any dependency is a major update
pub fn has_major(dependencies: &[EvaluatedDependency]) -> bool {
    dependencies.iter().any(|d| d.delta.is_major())
}
