//! Ephemeral comparison output between two resolved BOM versions.

use super::ArtifactCoordinate;
use serde::{Deserialize, Serialize};

/// A managed artifact whose pinned version changed between two BOM versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactUpdate {
    pub group_id: String,
    pub artifact_id: String,
    pub from_version: String,
    pub to_version: String,
}

impl ArtifactUpdate {
    /// Identity key, same form as [`ArtifactCoordinate::key`].
    #[must_use]
    pub fn key(&self) -> String {
        format!("{}:{}", self.group_id, self.artifact_id)
    }
}

/// The classified difference between two managed-artifact sets.
///
/// The keys of the four lists partition `fromKeys ∪ toKeys` exactly; each
/// list is sorted ascending by `groupId:artifactId`. Computed on demand,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub from_version: String,
    pub to_version: String,
    pub added: Vec<ArtifactCoordinate>,
    pub removed: Vec<ArtifactCoordinate>,
    pub updated: Vec<ArtifactUpdate>,
    pub unchanged: Vec<ArtifactCoordinate>,
}

impl ComparisonResult {
    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.added.is_empty() || !self.removed.is_empty() || !self.updated.is_empty()
    }
}
