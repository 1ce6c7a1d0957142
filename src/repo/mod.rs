//! Maven repository access: release metadata and POM descriptors.

mod client;
mod metadata;

pub use client::{DescriptorSource, RepositoryClient, RepositoryClientConfig};
pub use metadata::versions_from_metadata;
