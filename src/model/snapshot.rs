//! Persisted snapshot record for one resolved BOM version.

use super::{ArtifactCoordinate, ManagedArtifactSet};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity of the snapshotted BOM plus the extraction timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BomInfo {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub extracted_at: DateTime<Utc>,
}

/// Durable, immutable-once-written record of one BOM version's resolved
/// managed-artifact list. A refresh produces a new record replacing the old
/// one under the same coordinate; records are never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionSnapshot {
    pub bom_info: BomInfo,
    pub artifacts: Vec<ArtifactCoordinate>,
}

impl VersionSnapshot {
    /// Create a snapshot of `set` for `coordinate`, stamped with the current time.
    #[must_use]
    pub fn new(coordinate: &ArtifactCoordinate, set: &ManagedArtifactSet) -> Self {
        Self {
            bom_info: BomInfo {
                group_id: coordinate.group_id.clone(),
                artifact_id: coordinate.artifact_id.clone(),
                version: coordinate.version.clone(),
                extracted_at: Utc::now(),
            },
            artifacts: set.to_vec(),
        }
    }

    /// Rebuild the managed-artifact set from the stored list.
    #[must_use]
    pub fn artifact_set(&self) -> ManagedArtifactSet {
        self.artifacts.iter().cloned().collect()
    }

    /// The full coordinate this record is keyed by.
    #[must_use]
    pub fn coordinate(&self) -> ArtifactCoordinate {
        ArtifactCoordinate::new(
            self.bom_info.group_id.clone(),
            self.bom_info.artifact_id.clone(),
            self.bom_info.version.clone(),
        )
    }
}
