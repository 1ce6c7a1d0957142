//! Text rendering of a comparison result.

use crate::model::ComparisonResult;
use std::collections::BTreeMap;

/// Render a unified-diff style block over the merged, key-sorted artifact
/// list: `-` for removed, `+` for added, a `-`/`+` pair for updated, and a
/// leading space for unchanged entries.
#[must_use]
pub fn render_diff_block(result: &ComparisonResult, bom_name: &str) -> String {
    let mut lines = vec![
        format!("--- {bom_name} {}", result.from_version),
        format!("+++ {bom_name} {}", result.to_version),
        String::new(),
    ];

    // Merge all four lists under their identity key so output interleaves
    // in one sorted sequence.
    let mut entries: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for artifact in &result.removed {
        entries.insert(artifact.key(), vec![format!("-{}", artifact.coordinates())]);
    }
    for artifact in &result.added {
        entries.insert(artifact.key(), vec![format!("+{}", artifact.coordinates())]);
    }
    for update in &result.updated {
        entries.insert(
            update.key(),
            vec![
                format!(
                    "-{}:{}:{}",
                    update.group_id, update.artifact_id, update.from_version
                ),
                format!(
                    "+{}:{}:{}",
                    update.group_id, update.artifact_id, update.to_version
                ),
            ],
        );
    }
    for artifact in &result.unchanged {
        entries.insert(artifact.key(), vec![format!(" {}", artifact.coordinates())]);
    }

    for entry_lines in entries.into_values() {
        lines.extend(entry_lines);
    }

    lines.join("\n")
}

/// One-line change summary.
#[must_use]
pub fn render_summary(result: &ComparisonResult) -> String {
    format!(
        "{} -> {}: {} added, {} removed, {} updated, {} unchanged",
        result.from_version,
        result.to_version,
        result.added.len(),
        result.removed.len(),
        result.updated.len(),
        result.unchanged.len()
    )
}
