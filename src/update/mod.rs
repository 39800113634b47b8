//! Update decision logic for dependencies
//!
//! This module provides:
//! - Version delta classification between installed and latest versions
//! - Concurrent latest-version lookups with a selectable failure policy
//! - Selection of the packages that go into the install command

mod classify;
mod filter;
mod lookup;

pub use classify::classify;
pub use filter::{has_major, outdated, UpdateFilter};
pub use lookup::{fetch_latest_versions, FailurePolicy, DEFAULT_CONCURRENCY};
