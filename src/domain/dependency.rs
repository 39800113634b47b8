//! Installed dependency records

use std::fmt;

/// Which partition of the manifest a dependency belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencyGroup {
    /// `dependencies`
    Runtime,
    /// `devDependencies`
    Dev,
}

impl DependencyGroup {
    /// Both groups in processing order
    pub const ALL: [DependencyGroup; 2] = [DependencyGroup::Runtime, DependencyGroup::Dev];

    /// Manifest section name for this group
    pub fn section_name(&self) -> &'static str {
        match self {
            DependencyGroup::Runtime => "dependencies",
            DependencyGroup::Dev => "devDependencies",
        }
    }

    /// Returns true for the development group
    pub fn is_dev(&self) -> bool {
        matches!(self, DependencyGroup::Dev)
    }
}

impl fmt::Display for DependencyGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.section_name())
    }
}

/// A package as currently installed in the project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRecord {
    /// Package name
    pub name: String,
    /// Version found in the installed tree
    pub installed_version: String,
}

impl DependencyRecord {
    /// Creates a new dependency record
    pub fn new(name: impl Into<String>, installed_version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            installed_version: installed_version.into(),
        }
    }
}

impl fmt::Display for DependencyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.installed_version)
    }
}
