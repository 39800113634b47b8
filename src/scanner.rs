//! Dependency scanner
//!
//! Reads the installed tree twice (runtime-only, then everything) and splits
//! it into the runtime and development groups.

use crate::domain::{DependencyGroup, DependencyRecord};
use crate::error::{LookupError, ScanError};
use crate::package_manager::PackageManager;
use std::collections::BTreeMap;
use tracing::debug;

/// Installed dependencies split by group, each sorted by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    pub runtime: Vec<DependencyRecord>,
    pub dev: Vec<DependencyRecord>,
}

impl ScanResult {
    /// Dependencies of one group
    pub fn group(&self, group: DependencyGroup) -> &[DependencyRecord] {
        match group {
            DependencyGroup::Runtime => &self.runtime,
            DependencyGroup::Dev => &self.dev,
        }
    }

    /// Total number of installed packages
    pub fn len(&self) -> usize {
        self.runtime.len() + self.dev.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Split listings into groups
///
/// `dev` is everything in `all` that is not in `runtime`, so a name never
/// appears in both groups.
pub fn partition(runtime: BTreeMap<String, String>, all: BTreeMap<String, String>) -> ScanResult {
    let dev = all
        .into_iter()
        .filter(|(name, _)| !runtime.contains_key(name))
        .map(|(name, version)| DependencyRecord::new(name, version))
        .collect();

    let runtime = runtime
        .into_iter()
        .map(|(name, version)| DependencyRecord::new(name, version))
        .collect();

    ScanResult { runtime, dev }
}

/// Scanner over a package manager
pub struct Scanner<'a> {
    manager: &'a dyn PackageManager,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner
    pub fn new(manager: &'a dyn PackageManager) -> Self {
        Self { manager }
    }

    /// Read the installed tree and split it into groups
    pub async fn scan(&self) -> Result<ScanResult, ScanError> {
        let runtime = self.manager.list_installed(true).await?;
        let all = self.manager.list_installed(false).await?;

        let result = partition(runtime, all);
        debug!(
            runtime = result.runtime.len(),
            dev = result.dev.len(),
            "scanned installed dependencies"
        );
        Ok(result)
    }

    /// Latest published version of one package
    pub async fn fetch_latest(&self, name: &str) -> Result<String, LookupError> {
        self.manager.latest_version(name).await
    }
}
