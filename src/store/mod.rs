//! Durable, file-based snapshot store.
//!
//! One YAML file per exact coordinate under
//! `{root}/{groupId}/{artifactId}-{version}.yaml`. Writes go to a uniquely
//! named temp sibling and are renamed into place, so each record is atomic
//! even under concurrent writers and an aborted batch never leaves a torn
//! file.

use crate::error::{BomMappingError, ParseErrorKind, Result};
use crate::model::{ArtifactCoordinate, VersionSnapshot};
use crate::version::compare_versions;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Key-addressed cache of resolved per-version artifact sets.
pub struct SnapshotStore {
    root: PathBuf,
}

impl SnapshotStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// On-disk path for one coordinate's record.
    #[must_use]
    pub fn snapshot_path(&self, coordinate: &ArtifactCoordinate) -> PathBuf {
        self.root.join(&coordinate.group_id).join(format!(
            "{}-{}.yaml",
            coordinate.artifact_id, coordinate.version
        ))
    }

    /// Whether a record exists for this coordinate.
    #[must_use]
    pub fn exists(&self, coordinate: &ArtifactCoordinate) -> bool {
        self.snapshot_path(coordinate).exists()
    }

    /// Persist a snapshot, replacing any prior record under the same key.
    pub fn save(&self, snapshot: &VersionSnapshot) -> Result<PathBuf> {
        let path = self.snapshot_path(&snapshot.coordinate());
        let dir = match path.parent() {
            Some(parent) => {
                fs::create_dir_all(parent).map_err(|e| BomMappingError::io(parent, e))?;
                parent
            }
            None => self.root.as_path(),
        };

        let data = serde_yaml::to_string(snapshot)?;
        // Each writer gets its own temp file, so concurrent saves of the
        // same coordinate cannot interleave inside one file
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| BomMappingError::io(dir, e))?;
        tmp.write_all(data.as_bytes())
            .map_err(|e| BomMappingError::io(tmp.path(), e))?;
        tmp.persist(&path)
            .map_err(|e| BomMappingError::io(&path, e.error))?;

        Ok(path)
    }

    /// Load the record for one coordinate.
    pub fn load(&self, coordinate: &ArtifactCoordinate) -> Result<VersionSnapshot> {
        let path = self.snapshot_path(coordinate);
        self.load_path(&path)
    }

    fn load_path(&self, path: &Path) -> Result<VersionSnapshot> {
        let data = fs::read_to_string(path).map_err(|e| BomMappingError::io(path, e))?;
        serde_yaml::from_str(&data).map_err(|e| {
            BomMappingError::parse(
                format!("snapshot {}", path.display()),
                ParseErrorKind::InvalidYaml(e.to_string()),
            )
        })
    }

    /// Load every stored snapshot for a BOM, sorted ascending by version.
    ///
    /// Unreadable files are logged and skipped rather than failing the
    /// whole listing. No directory at all means no snapshots yet.
    pub fn list_snapshots(
        &self,
        group_id: &str,
        artifact_id: &str,
    ) -> Result<Vec<VersionSnapshot>> {
        let dir = self.root.join(group_id);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let prefix = format!("{artifact_id}-");
        let mut snapshots = Vec::new();

        for entry in fs::read_dir(&dir).map_err(|e| BomMappingError::io(&dir, e))? {
            let entry = entry.map_err(|e| BomMappingError::io(&dir, e))?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if !name.starts_with(&prefix) || !name.ends_with(".yaml") {
                continue;
            }

            match self.load_path(&entry.path()) {
                // The prefix check is only a cheap pre-filter; a longer
                // artifact id sharing the prefix still lands here
                Ok(snapshot) if snapshot.bom_info.artifact_id == artifact_id => {
                    snapshots.push(snapshot);
                }
                Ok(_) => {}
                Err(e) => tracing::warn!("Skipping unreadable snapshot {name}: {e}"),
            }
        }

        snapshots.sort_by(|a, b| compare_versions(&a.bom_info.version, &b.bom_info.version));
        Ok(snapshots)
    }
}
