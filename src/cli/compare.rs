//! Compare command handler.
//!
//! Implements the `compare` subcommand for diffing two stored snapshots
//! of one BOM.

use crate::config::AppConfig;
use crate::diff::{compare_snapshots, render_diff_block, render_summary};
use crate::store::SnapshotStore;
use anyhow::Result;
use clap::ValueEnum;

/// Output format for the compare command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CompareFormat {
    /// Unified-diff style text block
    Diff,
    /// Full comparison result as JSON
    Json,
    /// One-line change counts
    Summary,
}

/// Run the compare command, returning the desired exit code.
///
/// Exits 0 when the two versions manage identical artifact sets and 1 when
/// any change exists, so the command composes into CI checks.
pub fn run_compare(
    config: &AppConfig,
    bom_key: &str,
    from_version: &str,
    to_version: &str,
    format: CompareFormat,
) -> Result<i32> {
    let Some((group_id, artifact_id)) = bom_key.split_once(':') else {
        anyhow::bail!("BOM key must be 'groupId:artifactId', got '{bom_key}'");
    };

    let store = SnapshotStore::new(&config.settings.snapshot_directory);
    let result = compare_snapshots(&store, group_id, artifact_id, from_version, to_version)?;

    match format {
        CompareFormat::Diff => println!("{}", render_diff_block(&result, artifact_id)),
        CompareFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        CompareFormat::Summary => println!("{}", render_summary(&result)),
    }

    Ok(i32::from(result.has_changes()))
}
