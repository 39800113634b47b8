//! Core domain models for up-deps
//!
//! This module contains the fundamental types used throughout the application:
//! - Installed dependency records and their group (runtime or dev)
//! - Version delta classification
//! - Evaluated dependencies and per-group outcomes
//! - Run report across both groups

mod dependency;
mod summary;
mod update_result;
mod version_delta;

pub use dependency::{DependencyGroup, DependencyRecord};
pub use summary::{GroupReport, RunReport};
pub use update_result::{EvaluatedDependency, GroupOutcome};
pub use version_delta::{DeltaKind, VersionDelta};
