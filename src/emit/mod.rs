//! JSON data emission for the presentation layer.
//!
//! Turns stored snapshots into the file layout the web UI loads: one
//! directory per BOM with a data file per version plus a version-list
//! metadata file, and a top-level manifest listing every BOM.

use crate::config::BomDefinition;
use crate::error::BomMappingError;
use crate::model::ArtifactCoordinate;
use crate::store::SnapshotStore;
use crate::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level index of every emitted BOM.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub generated: DateTime<Utc>,
    pub boms: Vec<ManifestEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    pub group_id: String,
    pub artifact_id: String,
    pub directory: String,
    pub version_count: usize,
}

/// Per-BOM version list, ascending.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BomMetadata {
    pub group_id: String,
    pub artifact_id: String,
    pub versions: Vec<String>,
}

/// Per-version artifact list.
#[derive(Debug, Serialize, Deserialize)]
pub struct VersionData {
    pub version: String,
    pub artifacts: Vec<ArtifactCoordinate>,
}

/// Writes the emitted data tree from stored snapshots. Needs no network.
pub struct SiteDataEmitter<'a> {
    store: &'a SnapshotStore,
    output_dir: PathBuf,
}

impl<'a> SiteDataEmitter<'a> {
    pub fn new(store: &'a SnapshotStore, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            output_dir: output_dir.into(),
        }
    }

    /// Emit data files for every configured BOM and return the manifest
    /// path.
    ///
    /// BOMs with no snapshots are logged and left out of the manifest.
    pub fn emit(&self, boms: &[BomDefinition]) -> Result<PathBuf> {
        let mut manifest = Manifest {
            generated: Utc::now(),
            boms: Vec::new(),
        };

        for bom in boms {
            let snapshots = self.store.list_snapshots(&bom.group_id, &bom.artifact_id)?;
            if snapshots.is_empty() {
                tracing::warn!(
                    "No snapshots found for BOM {}:{}",
                    bom.group_id,
                    bom.artifact_id
                );
                continue;
            }

            let directory = format!("{}.{}", bom.group_id, bom.artifact_id);
            let bom_dir = self.output_dir.join(&directory);
            fs::create_dir_all(&bom_dir).map_err(|e| BomMappingError::io(&bom_dir, e))?;

            let mut versions = Vec::with_capacity(snapshots.len());
            for snapshot in &snapshots {
                let version = snapshot.bom_info.version.clone();
                write_json(
                    &bom_dir.join(format!("{version}.json")),
                    &VersionData {
                        version: version.clone(),
                        artifacts: snapshot.artifacts.clone(),
                    },
                )?;
                versions.push(version);
            }

            write_json(
                &bom_dir.join("metadata.json"),
                &BomMetadata {
                    group_id: bom.group_id.clone(),
                    artifact_id: bom.artifact_id.clone(),
                    versions: versions.clone(),
                },
            )?;
            tracing::info!("Generated {} version files for {directory}", versions.len());

            manifest.boms.push(ManifestEntry {
                group_id: bom.group_id.clone(),
                artifact_id: bom.artifact_id.clone(),
                directory,
                version_count: versions.len(),
            });
        }

        fs::create_dir_all(&self.output_dir)
            .map_err(|e| BomMappingError::io(&self.output_dir, e))?;
        let manifest_path = self.output_dir.join("manifest.json");
        write_json(&manifest_path, &manifest)?;
        tracing::info!("JSON manifest generated: {}", manifest_path.display());

        Ok(manifest_path)
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let data = serde_json::to_string_pretty(value)?;
    fs::write(path, data).map_err(|e| BomMappingError::io(path, e))
}

/// Read back an emitted JSON file. Used by tests and downstream tooling.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read_to_string(path).map_err(|e| BomMappingError::io(path, e))?;
    Ok(serde_json::from_str(&data)?)
}
