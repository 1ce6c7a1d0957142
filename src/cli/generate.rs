//! Generate command handler.
//!
//! Implements the `generate` subcommand: discover versions for every
//! configured BOM, snapshot each one, and emit the site data tree.

use crate::config::AppConfig;
use crate::emit::SiteDataEmitter;
use crate::extract::{extract_all, BomExtractor, ExtractionStats};
use crate::pom::PomResolver;
use crate::repo::RepositoryClient;
use crate::store::SnapshotStore;
use anyhow::{Context, Result};
use tracing::{error, info, warn};

/// Run the generate command, returning the desired exit code.
///
/// Each configured BOM is processed independently; a BOM whose version
/// discovery fails is logged and skipped so the remaining BOMs still run.
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_generate(
    config: &AppConfig,
    bom_filter: Option<&str>,
    force: bool,
    skip_emit: bool,
) -> Result<i32> {
    let selected: Vec<_> = config
        .boms
        .iter()
        .filter(|bom| match bom_filter {
            Some(filter) => {
                filter == bom.artifact_id
                    || filter == format!("{}:{}", bom.group_id, bom.artifact_id)
            }
            None => true,
        })
        .collect();

    if selected.is_empty() {
        match bom_filter {
            Some(filter) => error!("No configured BOM matches '{filter}'"),
            None => error!("No BOMs configured. Add entries under 'boms' in the config file."),
        }
        return Ok(1);
    }

    let store = SnapshotStore::new(&config.settings.snapshot_directory);
    let resolver = PomResolver::new();
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.settings.parallelism)
        .build()
        .context("failed to build worker pool")?;

    // Disabled cache behaves as a forced run
    let force = force || !config.settings.cache_enabled;

    let mut totals = ExtractionStats::default();
    let mut discovery_failures = 0usize;
    for bom in &selected {
        let base_url = config.repository_url(bom);
        let client = RepositoryClient::new(config.settings.client_config(base_url))
            .context("failed to build repository client")?;

        let versions = match client.discover_versions(&bom.group_id, &bom.artifact_id) {
            Ok(versions) => versions,
            Err(e) => {
                error!(
                    "Version discovery failed for {}:{}: {e}",
                    bom.group_id, bom.artifact_id
                );
                discovery_failures += 1;
                continue;
            }
        };
        if versions.is_empty() {
            warn!(
                "No releases found for {}:{}, skipping",
                bom.group_id, bom.artifact_id
            );
            continue;
        }
        info!(
            "Discovered {} versions of {}:{}",
            versions.len(),
            bom.group_id,
            bom.artifact_id
        );

        let extractor = BomExtractor::new(&client, &resolver, &store);
        let stats = extract_all(
            &extractor,
            &bom.group_id,
            &bom.artifact_id,
            &versions,
            force,
            &pool,
        );
        totals = totals.merge(stats);
    }

    info!(
        "Extraction complete: {} succeeded, {} failed",
        totals.extracted, totals.failed
    );

    if skip_emit {
        info!("Skipping site data emission");
    } else {
        // The filter scopes extraction only; emission always covers every
        // configured BOM so a filtered run never drops the others from the
        // manifest.
        let emitter = SiteDataEmitter::new(&store, &config.settings.output_directory);
        let manifest_path = emitter.emit(&config.boms)?;
        info!("Wrote manifest to {}", manifest_path.display());
    }

    // Succeed if anything was extracted; fail when every attempt failed
    if totals.extracted == 0 && (totals.failed > 0 || discovery_failures > 0) {
        return Ok(1);
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BomDefinition;
    use crate::emit::{read_json, Manifest};
    use crate::model::{ArtifactCoordinate, ManagedArtifactSet, VersionSnapshot};

    fn config_with_boms(boms: Vec<BomDefinition>) -> AppConfig {
        AppConfig {
            boms,
            ..AppConfig::default()
        }
    }

    fn definition(artifact_id: &str) -> BomDefinition {
        BomDefinition {
            group_id: "org.example".to_string(),
            artifact_id: artifact_id.to_string(),
            repository: None,
        }
    }

    #[test]
    fn test_empty_config_exits_nonzero() {
        let config = config_with_boms(Vec::new());
        let code = run_generate(&config, None, false, true).expect("should not error");
        assert_eq!(code, 1);
    }

    #[test]
    fn test_unmatched_filter_exits_nonzero() {
        let config = config_with_boms(vec![definition("example-bom")]);
        let code =
            run_generate(&config, Some("other-bom"), false, true).expect("should not error");
        assert_eq!(code, 1);
    }

    #[test]
    fn test_filtered_run_keeps_other_boms_in_manifest() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut config = config_with_boms(vec![definition("bom-one"), definition("bom-two")]);
        config.settings.snapshot_directory = dir.path().join("snapshots");
        config.settings.output_directory = dir.path().join("data");
        // Unreachable repository, no retries: the run exercises only the
        // store and the emitter
        config.settings.maven_repository = "http://127.0.0.1:9/".to_string();
        config.settings.max_retries = 0;

        let store = SnapshotStore::new(&config.settings.snapshot_directory);
        let set: ManagedArtifactSet = [ArtifactCoordinate::new("g", "a", "1.0")]
            .into_iter()
            .collect();
        for artifact_id in ["bom-one", "bom-two"] {
            let coordinate = ArtifactCoordinate::new("org.example", artifact_id, "1.0.0");
            store
                .save(&VersionSnapshot::new(&coordinate, &set))
                .expect("save");
        }

        run_generate(&config, Some("bom-two"), false, false).expect("should not error");

        let manifest: Manifest =
            read_json(&config.settings.output_directory.join("manifest.json"))
                .expect("manifest parses");
        let mut listed: Vec<&str> = manifest
            .boms
            .iter()
            .map(|b| b.artifact_id.as_str())
            .collect();
        listed.sort_unstable();
        assert_eq!(listed, ["bom-one", "bom-two"]);
    }
}
