//! Diff engine: the classified difference between two managed-artifact
//! sets.

mod render;

pub use render::{render_diff_block, render_summary};

use crate::error::BomMappingError;
use crate::model::{ArtifactCoordinate, ArtifactUpdate, ComparisonResult, ManagedArtifactSet};
use crate::store::SnapshotStore;
use crate::Result;

/// Compute the added/removed/updated/unchanged partition between two sets.
///
/// Pure function: identity is `groupId:artifactId`, version comparison is
/// exact string inequality, and the four output lists are each sorted
/// ascending by key. The keys of the four lists together partition
/// `fromKeys ∪ toKeys` exactly.
#[must_use]
pub fn compare(
    from: &ManagedArtifactSet,
    to: &ManagedArtifactSet,
    from_version: &str,
    to_version: &str,
) -> ComparisonResult {
    let mut result = ComparisonResult {
        from_version: from_version.to_string(),
        to_version: to_version.to_string(),
        added: Vec::new(),
        removed: Vec::new(),
        updated: Vec::new(),
        unchanged: Vec::new(),
    };

    for (key, artifact) in to.iter() {
        match from.get(key) {
            None => result.added.push(artifact.clone()),
            Some(previous) if previous.version != artifact.version => {
                result.updated.push(ArtifactUpdate {
                    group_id: artifact.group_id.clone(),
                    artifact_id: artifact.artifact_id.clone(),
                    from_version: previous.version.clone(),
                    to_version: artifact.version.clone(),
                });
            }
            Some(_) => result.unchanged.push(artifact.clone()),
        }
    }

    for (key, artifact) in from.iter() {
        if !to.contains_key(key) {
            result.removed.push(artifact.clone());
        }
    }

    sort_by_key(&mut result.added);
    sort_by_key(&mut result.removed);
    sort_by_key(&mut result.unchanged);
    result.updated.sort_by(|a, b| a.key().cmp(&b.key()));

    result
}

fn sort_by_key(artifacts: &mut [ArtifactCoordinate]) {
    artifacts.sort_by(|a, b| a.key().cmp(&b.key()));
}

/// Caller-facing comparison over stored snapshots.
///
/// Fails with `VersionNotFound` before the engine runs if either version
/// was never snapshotted; never silently returns an empty result.
pub fn compare_snapshots(
    store: &SnapshotStore,
    group_id: &str,
    artifact_id: &str,
    from_version: &str,
    to_version: &str,
) -> Result<ComparisonResult> {
    let bom = format!("{group_id}:{artifact_id}");
    let from_coordinate = ArtifactCoordinate::new(group_id, artifact_id, from_version);
    let to_coordinate = ArtifactCoordinate::new(group_id, artifact_id, to_version);

    for coordinate in [&from_coordinate, &to_coordinate] {
        if !store.exists(coordinate) {
            return Err(BomMappingError::version_not_found(
                bom,
                coordinate.version.clone(),
            ));
        }
    }

    let from = store.load(&from_coordinate)?.artifact_set();
    let to = store.load(&to_coordinate)?.artifact_set();
    Ok(compare(&from, &to, from_version, to_version))
}
