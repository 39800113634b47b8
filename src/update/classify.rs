//! Version delta classification
//!
//! Versions are compared segment by segment as strings. Both sides must be
//! plain numeric `major.minor.patch` triples; anything else (pre-release tags,
//! build metadata, a `v` prefix, missing segments) is rejected instead of
//! being guessed at.

use crate::domain::{DeltaKind, VersionDelta};
use crate::error::VersionError;

const SEGMENT_NAMES: [&str; 3] = ["major", "minor", "patch"];

/// Split a version into its three numeric segments
fn split_triple(version: &str) -> Result<[&str; 3], VersionError> {
    let parts: Vec<&str> = version.split('.').collect();
    if parts.len() != 3 {
        return Err(VersionError::malformed(
            version,
            format!("expected major.minor.patch, found {} segment(s)", parts.len()),
        ));
    }

    for (part, name) in parts.iter().zip(SEGMENT_NAMES) {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(VersionError::malformed(
                version,
                format!("{} segment '{}' is not numeric", name, part),
            ));
        }
    }

    Ok([parts[0], parts[1], parts[2]])
}

/// Classify the difference between an installed and a latest version
///
/// The result only reflects which segment differs, not the direction, so
/// swapping the arguments never changes the kind.
pub fn classify(installed: &str, latest: &str) -> Result<VersionDelta, VersionError> {
    let [old_major, old_minor, old_patch] = split_triple(installed)?;
    let [new_major, new_minor, new_patch] = split_triple(latest)?;

    let kind = if old_major != new_major {
        DeltaKind::Major
    } else if old_minor != new_minor {
        DeltaKind::Minor
    } else if old_patch != new_patch {
        DeltaKind::Fix
    } else {
        DeltaKind::None
    };

    Ok(kind.into())
}
