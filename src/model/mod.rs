//! Core data model: coordinates, resolved sets, snapshots, comparisons.

mod artifact;
mod comparison;
mod snapshot;

pub use artifact::{ArtifactCoordinate, ManagedArtifactSet};
pub use comparison::{ArtifactUpdate, ComparisonResult};
pub use snapshot::{BomInfo, VersionSnapshot};
