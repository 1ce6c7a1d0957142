//! Extraction orchestration: cache-gated resolution and the parallel batch
//! driver.

use crate::model::{ArtifactCoordinate, ManagedArtifactSet, VersionSnapshot};
use crate::pom::PomResolver;
use crate::repo::DescriptorSource;
use crate::store::SnapshotStore;
use crate::Result;
use rayon::prelude::*;

/// Ties a descriptor source, resolver, and store together for one
/// repository.
///
/// All three collaborators are shared references; the extractor itself is
/// freely usable from multiple rayon workers since snapshot keys are
/// disjoint per full coordinate.
pub struct BomExtractor<'a> {
    source: &'a dyn DescriptorSource,
    resolver: &'a PomResolver,
    store: &'a SnapshotStore,
}

impl<'a> BomExtractor<'a> {
    pub fn new(
        source: &'a dyn DescriptorSource,
        resolver: &'a PomResolver,
        store: &'a SnapshotStore,
    ) -> Self {
        Self {
            source,
            resolver,
            store,
        }
    }

    /// Get-or-resolve the managed-artifact set for one exact coordinate.
    ///
    /// With `force` false and a record on disk, the stored set is returned
    /// without any network access. Otherwise the descriptor is resolved and
    /// persisted as a new snapshot replacing any prior record.
    pub fn extract(
        &self,
        coordinate: &ArtifactCoordinate,
        force: bool,
    ) -> Result<ManagedArtifactSet> {
        if !force && self.store.exists(coordinate) {
            tracing::debug!("Using cached snapshot for {}", coordinate.coordinates());
            return Ok(self.store.load(coordinate)?.artifact_set());
        }

        tracing::info!("Extracting BOM {}", coordinate.coordinates());
        let set = self.resolver.resolve(coordinate, self.source)?;

        let snapshot = VersionSnapshot::new(coordinate, &set);
        let path = self.store.save(&snapshot)?;
        tracing::info!(
            "Snapshot saved: {} ({} artifacts)",
            path.display(),
            set.len()
        );

        Ok(set)
    }
}

/// Outcome counts for one batch of version extractions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionStats {
    pub extracted: usize,
    pub failed: usize,
}

impl ExtractionStats {
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            extracted: self.extracted + other.extracted,
            failed: self.failed + other.failed,
        }
    }
}

/// Extract every version of one BOM on the given worker pool.
///
/// Versions are independent, so they run in parallel up to the pool's
/// thread count. A failed version is logged and skipped; the batch
/// continues.
pub fn extract_all(
    extractor: &BomExtractor<'_>,
    group_id: &str,
    artifact_id: &str,
    versions: &[String],
    force: bool,
    pool: &rayon::ThreadPool,
) -> ExtractionStats {
    pool.install(|| {
        versions
            .par_iter()
            .map(|version| {
                let coordinate = ArtifactCoordinate::new(group_id, artifact_id, version.clone());
                match extractor.extract(&coordinate, force) {
                    Ok(_) => {
                        tracing::info!("Extracted {artifact_id}-{version}");
                        ExtractionStats {
                            extracted: 1,
                            failed: 0,
                        }
                    }
                    Err(e) => {
                        tracing::error!("Failed to extract {artifact_id}-{version}: {e}");
                        ExtractionStats {
                            extracted: 0,
                            failed: 1,
                        }
                    }
                }
            })
            .reduce(ExtractionStats::default, ExtractionStats::merge)
    })
}
