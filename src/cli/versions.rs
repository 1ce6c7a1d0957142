//! Versions command handler.
//!
//! Implements the `versions` subcommand: list released versions of an
//! artifact straight from its repository metadata.

use crate::config::AppConfig;
use anyhow::{Context, Result};

/// Run the versions command, returning the desired exit code.
///
/// Prints one version per line in comparator order, oldest first.
pub fn run_versions(
    config: &AppConfig,
    group_id: &str,
    artifact_id: &str,
    repository: Option<&str>,
) -> Result<i32> {
    let base_url = config.settings.resolve_repository(repository);
    let client = crate::repo::RepositoryClient::new(config.settings.client_config(base_url))
        .context("failed to build repository client")?;

    let versions = client.discover_versions(group_id, artifact_id)?;
    if versions.is_empty() {
        eprintln!("No releases found for {group_id}:{artifact_id}");
        return Ok(1);
    }
    for version in &versions {
        println!("{version}");
    }
    Ok(0)
}
