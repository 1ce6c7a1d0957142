//! Integration tests for bom-mapping
//!
//! These tests verify end-to-end functionality of POM resolution, the
//! snapshot store, the diff engine, and site data emission, using an
//! in-memory descriptor source in place of a live Maven repository.

use bom_mapping::config::BomDefinition;
use bom_mapping::diff::compare_snapshots;
use bom_mapping::emit::{read_json, Manifest, SiteDataEmitter};
use bom_mapping::error::BomMappingError;
use bom_mapping::model::ArtifactCoordinate;
use bom_mapping::pom::PomResolver;
use bom_mapping::repo::DescriptorSource;
use bom_mapping::store::SnapshotStore;
use bom_mapping::BomExtractor;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

// ============================================================================
// Test Fixtures
// ============================================================================

/// Descriptor source backed by a map of coordinates to POM XML.
struct FakeRepository {
    descriptors: HashMap<String, String>,
    fetches: AtomicUsize,
}

impl FakeRepository {
    fn new() -> Self {
        Self {
            descriptors: HashMap::new(),
            fetches: AtomicUsize::new(0),
        }
    }

    fn with_pom(mut self, coordinates: &str, xml: &str) -> Self {
        self.descriptors
            .insert(coordinates.to_string(), xml.to_string());
        self
    }

    fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl DescriptorSource for FakeRepository {
    fn fetch_pom(&self, coordinate: &ArtifactCoordinate) -> bom_mapping::Result<String> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.descriptors
            .get(&coordinate.coordinates())
            .cloned()
            .ok_or_else(|| BomMappingError::not_found(coordinate.coordinates()))
    }
}

fn parent_pom() -> &'static str {
    r#"<?xml version="1.0" encoding="UTF-8"?>
<project>
  <groupId>org.example</groupId>
  <artifactId>platform-parent</artifactId>
  <version>1.0.0</version>
  <properties>
    <jackson.version>2.15.0</jackson.version>
    <slf4j.version>2.0.7</slf4j.version>
  </properties>
</project>"#
}

fn bom_pom(version: &str, jackson_override: Option<&str>, extra: &str) -> String {
    let properties = match jackson_override {
        Some(v) => format!("<jackson.version>{v}</jackson.version>"),
        None => String::new(),
    };
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<project>
  <parent>
    <groupId>org.example</groupId>
    <artifactId>platform-parent</artifactId>
    <version>1.0.0</version>
  </parent>
  <artifactId>platform-bom</artifactId>
  <version>{version}</version>
  <properties>{properties}</properties>
  <dependencyManagement>
    <dependencies>
      <dependency>
        <groupId>com.fasterxml.jackson.core</groupId>
        <artifactId>jackson-databind</artifactId>
        <version>${{jackson.version}}</version>
      </dependency>
      <dependency>
        <groupId>org.slf4j</groupId>
        <artifactId>slf4j-api</artifactId>
        <version>${{slf4j.version}}</version>
      </dependency>
      {extra}
    </dependencies>
  </dependencyManagement>
</project>"#
    )
}

// ============================================================================
// Extraction Pipeline Tests
// ============================================================================

mod extraction_tests {
    use super::*;

    #[test]
    fn test_end_to_end_extraction_with_parent_properties() {
        let repo = FakeRepository::new()
            .with_pom("org.example:platform-parent:1.0.0", parent_pom())
            .with_pom(
                "org.example:platform-bom:1.0.0",
                &bom_pom("1.0.0", None, ""),
            );
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SnapshotStore::new(dir.path());
        let resolver = PomResolver::new();
        let extractor = BomExtractor::new(&repo, &resolver, &store);

        let coordinate = ArtifactCoordinate::new("org.example", "platform-bom", "1.0.0");
        let set = extractor
            .extract(&coordinate, false)
            .expect("extraction should succeed");

        assert_eq!(set.len(), 2);
        let jackson = set
            .get("com.fasterxml.jackson.core:jackson-databind")
            .expect("jackson entry");
        // Placeholder resolved from the parent's properties
        assert_eq!(jackson.version, "2.15.0");

        // Snapshot persisted under {group}/{artifact}-{version}.yaml
        assert!(store.exists(&coordinate));
        let snapshot = store.load(&coordinate).expect("snapshot should load");
        assert_eq!(snapshot.bom_info.version, "1.0.0");
        assert_eq!(snapshot.artifacts.len(), 2);
    }

    #[test]
    fn test_child_property_overrides_parent() {
        let repo = FakeRepository::new()
            .with_pom("org.example:platform-parent:1.0.0", parent_pom())
            .with_pom(
                "org.example:platform-bom:2.0.0",
                &bom_pom("2.0.0", Some("2.16.1"), ""),
            );
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SnapshotStore::new(dir.path());
        let resolver = PomResolver::new();
        let extractor = BomExtractor::new(&repo, &resolver, &store);

        let coordinate = ArtifactCoordinate::new("org.example", "platform-bom", "2.0.0");
        let set = extractor.extract(&coordinate, false).expect("extract");
        let jackson = set
            .get("com.fasterxml.jackson.core:jackson-databind")
            .expect("jackson entry");
        assert_eq!(jackson.version, "2.16.1");
    }

    #[test]
    fn test_missing_parent_is_recovered() {
        // Parent is not in the repository; entries with literal versions
        // survive, placeholder-only entries keep the raw placeholder.
        let repo = FakeRepository::new().with_pom(
            "org.example:platform-bom:1.0.0",
            &bom_pom(
                "1.0.0",
                Some("2.16.1"),
                r"<dependency>
        <groupId>org.example</groupId>
        <artifactId>extra-lib</artifactId>
        <version>5.1.0</version>
      </dependency>",
            ),
        );
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SnapshotStore::new(dir.path());
        let resolver = PomResolver::new();
        let extractor = BomExtractor::new(&repo, &resolver, &store);

        let coordinate = ArtifactCoordinate::new("org.example", "platform-bom", "1.0.0");
        let set = extractor
            .extract(&coordinate, false)
            .expect("missing parent must not be fatal");

        assert_eq!(set.len(), 3);
        assert_eq!(
            set.get("org.example:extra-lib").expect("extra-lib").version,
            "5.1.0"
        );
        // Child property still applies without the parent
        assert_eq!(
            set.get("com.fasterxml.jackson.core:jackson-databind")
                .expect("jackson")
                .version,
            "2.16.1"
        );
        // Unresolvable placeholder passes through verbatim
        assert_eq!(
            set.get("org.slf4j:slf4j-api").expect("slf4j").version,
            "${slf4j.version}"
        );
    }

    #[test]
    fn test_second_extraction_reads_the_store() {
        let repo = FakeRepository::new()
            .with_pom("org.example:platform-parent:1.0.0", parent_pom())
            .with_pom(
                "org.example:platform-bom:1.0.0",
                &bom_pom("1.0.0", None, ""),
            );
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SnapshotStore::new(dir.path());
        let resolver = PomResolver::new();
        let extractor = BomExtractor::new(&repo, &resolver, &store);

        let coordinate = ArtifactCoordinate::new("org.example", "platform-bom", "1.0.0");
        let first = extractor.extract(&coordinate, false).expect("first run");
        let fetches_after_first = repo.fetch_count();
        assert_eq!(fetches_after_first, 2, "bom plus parent");

        let second = extractor.extract(&coordinate, false).expect("second run");
        assert_eq!(repo.fetch_count(), fetches_after_first, "no new fetches");
        assert_eq!(first, second);

        // force bypasses the store and fetches again
        extractor.extract(&coordinate, true).expect("forced run");
        assert!(repo.fetch_count() > fetches_after_first);
    }
}

// ============================================================================
// Diff and Emission Tests
// ============================================================================

mod diff_and_emit_tests {
    use super::*;

    fn populate_two_versions(store: &SnapshotStore, repo: &FakeRepository) {
        let resolver = PomResolver::new();
        let extractor = BomExtractor::new(repo, &resolver, store);
        for version in ["1.0.0", "2.0.0"] {
            let coordinate = ArtifactCoordinate::new("org.example", "platform-bom", version);
            extractor.extract(&coordinate, false).expect("extract");
        }
    }

    fn two_version_repo() -> FakeRepository {
        FakeRepository::new()
            .with_pom("org.example:platform-parent:1.0.0", parent_pom())
            .with_pom(
                "org.example:platform-bom:1.0.0",
                &bom_pom("1.0.0", None, ""),
            )
            .with_pom(
                "org.example:platform-bom:2.0.0",
                &bom_pom(
                    "2.0.0",
                    Some("2.16.1"),
                    r"<dependency>
        <groupId>org.example</groupId>
        <artifactId>extra-lib</artifactId>
        <version>5.1.0</version>
      </dependency>",
                ),
            )
    }

    #[test]
    fn test_compare_stored_snapshots() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SnapshotStore::new(dir.path());
        populate_two_versions(&store, &two_version_repo());

        let result = compare_snapshots(&store, "org.example", "platform-bom", "1.0.0", "2.0.0")
            .expect("both snapshots exist");

        assert_eq!(result.added.len(), 1);
        assert_eq!(result.added[0].artifact_id, "extra-lib");
        assert!(result.removed.is_empty());
        assert_eq!(result.updated.len(), 1);
        assert_eq!(result.updated[0].from_version, "2.15.0");
        assert_eq!(result.updated[0].to_version, "2.16.1");
        assert_eq!(result.unchanged.len(), 1);
        assert!(result.has_changes());
    }

    #[test]
    fn test_compare_unknown_version_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SnapshotStore::new(dir.path());
        populate_two_versions(&store, &two_version_repo());

        let err = compare_snapshots(&store, "org.example", "platform-bom", "1.0.0", "9.9.9")
            .expect_err("unknown version must fail");
        assert!(matches!(err, BomMappingError::VersionNotFound { .. }));
    }

    #[test]
    fn test_emit_site_data_tree() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SnapshotStore::new(dir.path().join("snapshots"));
        populate_two_versions(&store, &two_version_repo());

        let output = dir.path().join("data");
        let emitter = SiteDataEmitter::new(&store, &output);
        let boms = vec![BomDefinition {
            group_id: "org.example".to_string(),
            artifact_id: "platform-bom".to_string(),
            repository: None,
        }];
        let manifest_path = emitter.emit(&boms).expect("emit should succeed");

        let manifest: Manifest = read_json(&manifest_path).expect("manifest parses");
        assert_eq!(manifest.boms.len(), 1);
        assert_eq!(manifest.boms[0].version_count, 2);

        let bom_dir = output.join("org.example.platform-bom");
        assert!(bom_dir.join("metadata.json").is_file());
        assert!(bom_dir.join("1.0.0.json").is_file());
        assert!(bom_dir.join("2.0.0.json").is_file());
    }
}
