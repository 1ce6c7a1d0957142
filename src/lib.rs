//! **Track the managed dependencies of Maven BOMs across their releases.**
//!
//! `bom-mapping` resolves the `dependencyManagement` section of published
//! Maven BOM (bill of materials) POMs, snapshots the managed artifact set of
//! each release, and diffs those snapshots to show exactly which managed
//! dependencies a BOM upgrade adds, removes, or bumps.
//!
//! It powers both a command-line interface (CLI) and a Rust library for
//! programmatic integration.
//!
//! ## Key Features
//!
//! - **Version Discovery**: Lists released versions from a repository's
//!   `maven-metadata.xml`, ordered by a Maven-style mixed
//!   numeric/lexicographic comparator.
//! - **POM Resolution**: Parses BOM POMs, merges one level of parent
//!   inheritance, and substitutes `${property}` placeholders to produce the
//!   effective managed artifact set.
//! - **Durable Snapshots**: Persists one YAML snapshot per BOM version, so
//!   repeated runs only fetch versions not yet recorded.
//! - **Snapshot Diffing**: Partitions any two snapshots into added, removed,
//!   updated, and unchanged artifacts.
//! - **Site Data Emission**: Writes a JSON data tree (manifest, per-BOM
//!   metadata, per-version artifact lists) consumable by a static web UI.
//!
//! ## Getting Started: Comparing Two BOM Releases
//!
//! ```no_run
//! use bom_mapping::diff::compare_snapshots;
//! use bom_mapping::store::SnapshotStore;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = SnapshotStore::new("./snapshots");
//!     let result = compare_snapshots(
//!         &store,
//!         "org.springframework.boot",
//!         "spring-boot-dependencies",
//!         "3.2.0",
//!         "3.3.0",
//!     )?;
//!
//!     println!("Added:   {}", result.added.len());
//!     println!("Removed: {}", result.removed.len());
//!     for update in &result.updated {
//!         println!(
//!             "  {}: {} -> {}",
//!             update.key(),
//!             update.from_version,
//!             update.to_version
//!         );
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Core Modules
//!
//! - **[`model`]**: Artifact coordinates, managed artifact sets, snapshots,
//!   and comparison results.
//! - **[`repo`]**: HTTP repository client and `maven-metadata.xml` parsing.
//! - **[`pom`]**: POM document model and the effective-set resolver.
//! - **[`store`]**: The durable per-version snapshot store.
//! - **[`extract`]**: The get-or-resolve extraction pipeline over all of the
//!   above, parallelized across versions.
//! - **[`diff`]**: The snapshot comparison engine and its text renderers.
//! - **[`emit`]**: The site data emitter.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // # Errors / # Panics doc sections are aspirational across the API
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Variable names like `old`/`new` or `from`/`to` are clear in context
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod diff;
pub mod emit;
pub mod error;
pub mod extract;
pub mod model;
pub mod pom;
pub mod repo;
pub mod store;
pub mod version;

// Re-export main types for convenience
pub use config::{AppConfig, BomDefinition, Settings};
pub use error::{BomMappingError, Result};
pub use extract::{extract_all, BomExtractor, ExtractionStats};
pub use model::{
    ArtifactCoordinate, ArtifactUpdate, BomInfo, ComparisonResult, ManagedArtifactSet,
    VersionSnapshot,
};
pub use pom::{PomDocument, PomResolver};
pub use repo::{DescriptorSource, RepositoryClient, RepositoryClientConfig};
pub use store::SnapshotStore;
pub use version::{compare_versions, sort_versions};
