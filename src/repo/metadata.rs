//! Schema-typed parsing of `maven-metadata.xml`.

use crate::error::{BomMappingError, ParseErrorKind, Result};
use crate::version::sort_versions;
use serde::Deserialize;
use std::collections::HashSet;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct MetadataDocument {
    versioning: Option<Versioning>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Versioning {
    versions: Option<VersionList>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct VersionList {
    version: Vec<String>,
}

/// Extract release versions from a `maven-metadata.xml` document.
///
/// Tokens containing `SNAPSHOT` (case-sensitive) are discarded, whitespace
/// is trimmed, duplicates dropped, and the result sorted ascending. A
/// document that declares no versions yields an empty list; malformed XML
/// yields a parse error.
pub fn versions_from_metadata(xml: &str) -> Result<Vec<String>> {
    let document: MetadataDocument = quick_xml::de::from_str(xml).map_err(|e| {
        BomMappingError::parse(
            "maven-metadata.xml",
            ParseErrorKind::InvalidXml(e.to_string()),
        )
    })?;

    let raw = document
        .versioning
        .and_then(|v| v.versions)
        .map(|v| v.version)
        .unwrap_or_default();

    let mut seen = HashSet::new();
    let mut versions: Vec<String> = raw
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty() && !v.contains("SNAPSHOT"))
        .filter(|v| seen.insert(v.to_string()))
        .map(ToString::to_string)
        .collect();

    sort_versions(&mut versions);
    Ok(versions)
}
