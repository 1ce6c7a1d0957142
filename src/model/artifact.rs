//! Managed-artifact coordinates and the per-version artifact set.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One pinned dependency coordinate: groupId, artifactId, version.
///
/// The diffing identity is [`key`](Self::key) (`groupId:artifactId`);
/// the version is deliberately excluded from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactCoordinate {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl ArtifactCoordinate {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
        }
    }

    /// Identity key used when diffing two sets: `groupId:artifactId`.
    #[must_use]
    pub fn key(&self) -> String {
        format!("{}:{}", self.group_id, self.artifact_id)
    }

    /// Full display form: `groupId:artifactId:version`.
    #[must_use]
    pub fn coordinates(&self) -> String {
        format!("{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

impl fmt::Display for ArtifactCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.coordinates())
    }
}

/// The resolved output for one BOM version: a map from `groupId:artifactId`
/// to the pinned coordinate.
///
/// Duplicate keys are not an error; the later-declared entry wins, matching
/// overwrite-on-insert semantics of the source descriptor. Equality is
/// order-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManagedArtifactSet {
    entries: IndexMap<String, ArtifactCoordinate>,
}

impl ManagedArtifactSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an artifact keyed by `groupId:artifactId`.
    ///
    /// Returns `true` if an earlier entry with the same key was overwritten.
    pub fn insert(&mut self, artifact: ArtifactCoordinate) -> bool {
        self.entries.insert(artifact.key(), artifact).is_some()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ArtifactCoordinate> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ArtifactCoordinate)> {
        self.entries.iter()
    }

    /// Snapshot the set as a plain artifact list (declaration order).
    #[must_use]
    pub fn to_vec(&self) -> Vec<ArtifactCoordinate> {
        self.entries.values().cloned().collect()
    }
}

impl FromIterator<ArtifactCoordinate> for ManagedArtifactSet {
    fn from_iter<I: IntoIterator<Item = ArtifactCoordinate>>(iter: I) -> Self {
        let mut set = Self::new();
        for artifact in iter {
            set.insert(artifact);
        }
        set
    }
}
