//! Version delta between an installed and a published version

use std::fmt;

/// The coarsest version segment that differs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeltaKind {
    /// Major segment differs (breaking)
    Major,
    /// Minor segment differs (features)
    Minor,
    /// Patch segment differs (fixes)
    Fix,
    /// Versions are identical
    None,
}

impl DeltaKind {
    /// Plain label
    pub fn label(&self) -> &'static str {
        match self {
            DeltaKind::Major => "major",
            DeltaKind::Minor => "minor",
            DeltaKind::Fix => "fix",
            DeltaKind::None => "none",
        }
    }

    /// Returns true when there is something to update
    pub fn is_update(&self) -> bool {
        !matches!(self, DeltaKind::None)
    }
}

impl fmt::Display for DeltaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classified difference between two versions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionDelta {
    pub kind: DeltaKind,
    pub label: &'static str,
}

impl VersionDelta {
    /// Creates a delta of the given kind
    pub fn new(kind: DeltaKind) -> Self {
        Self {
            kind,
            label: kind.label(),
        }
    }

    pub fn is_major(&self) -> bool {
        self.kind == DeltaKind::Major
    }

    pub fn is_update(&self) -> bool {
        self.kind.is_update()
    }
}

impl From<DeltaKind> for VersionDelta {
    fn from(kind: DeltaKind) -> Self {
        Self::new(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(DeltaKind::Major.label(), "major");
        assert_eq!(DeltaKind::Minor.label(), "minor");
        assert_eq!(DeltaKind::Fix.label(), "fix");
        assert_eq!(DeltaKind::None.label(), "none");
    }

    #[test]
    fn test_delta_carries_kind_label() {
        let delta = VersionDelta::new(DeltaKind::Minor);
        assert_eq!(delta.label, "minor");
        assert!(delta.is_update());
        assert!(!delta.is_major());
    }

    #[test]
    fn test_none_is_not_an_update() {
        let delta = VersionDelta::new(DeltaKind::None);
        assert_eq!(delta.kind, DeltaKind::None);
        assert!(!delta.is_update());
    }

    #[test]
    fn test_from_kind() {
        let delta: VersionDelta = DeltaKind::Major.into();
        assert!(delta.is_major());
    }
}
