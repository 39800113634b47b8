//! up-deps - npm dependency update helper library
//!
//! This library provides the core functionality for checking installed npm
//! dependencies against their latest published versions:
//! - Scanning the installed tree into runtime and dev groups
//! - Classifying version deltas (major, minor, fix)
//! - Prompting for and issuing a pinned batch upgrade

pub mod cli;
pub mod domain;
pub mod error;
pub mod orchestrator;
pub mod output;
pub mod package_manager;
pub mod progress;
pub mod prompt;
pub mod scanner;
pub mod update;
