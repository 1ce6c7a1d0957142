//! Property resolution and managed-artifact extraction from a POM chain.

use crate::model::{ArtifactCoordinate, ManagedArtifactSet};
use crate::pom::document::PomDocument;
use crate::repo::DescriptorSource;
use crate::Result;
use regex::Regex;
use std::collections::BTreeMap;

/// Resolves one BOM descriptor into its managed-artifact set.
///
/// Stateless apart from the compiled placeholder pattern; a single instance
/// is safe to share across workers.
pub struct PomResolver {
    placeholder: Regex,
}

impl PomResolver {
    #[must_use]
    pub fn new() -> Self {
        // `${` + one or more non-`}` characters + `}`
        Self {
            placeholder: Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is valid"),
        }
    }

    /// Fetch, parse, and resolve the managed-artifact list for `coordinate`.
    ///
    /// A failure fetching or parsing the primary descriptor is fatal for
    /// this coordinate; a failure on the parent descriptor is recovered
    /// locally and resolution proceeds without parent context.
    pub fn resolve(
        &self,
        coordinate: &ArtifactCoordinate,
        source: &dyn DescriptorSource,
    ) -> Result<ManagedArtifactSet> {
        let content = source.fetch_pom(coordinate)?;
        let pom = PomDocument::parse(&content)?;
        let parent = self.fetch_parent(&pom, source);
        Ok(self.extract(&pom, parent.as_ref()))
    }

    fn fetch_parent(
        &self,
        pom: &PomDocument,
        source: &dyn DescriptorSource,
    ) -> Option<PomDocument> {
        let parent_coordinate = pom.parent_coordinate()?;
        tracing::info!("Found parent POM: {}", parent_coordinate.coordinates());

        match source
            .fetch_pom(&parent_coordinate)
            .and_then(|content| PomDocument::parse(&content))
        {
            Ok(parent) => Some(parent),
            Err(e) => {
                tracing::warn!(
                    "Failed to fetch parent POM {}: {e}",
                    parent_coordinate.coordinates()
                );
                None
            }
        }
    }

    /// Extract the managed-artifact set from an already-parsed descriptor.
    ///
    /// Entries missing any of groupId/artifactId/version are skipped;
    /// later entries with the same `groupId:artifactId` overwrite earlier
    /// ones.
    #[must_use]
    pub fn extract(&self, pom: &PomDocument, parent: Option<&PomDocument>) -> ManagedArtifactSet {
        let properties = self.build_property_environment(pom, parent);

        let mut set = ManagedArtifactSet::new();
        let entries = pom
            .dependency_management
            .as_ref()
            .and_then(|dm| dm.dependencies.as_ref())
            .map(|d| d.entries.as_slice())
            .unwrap_or_default();

        for entry in entries {
            let (Some(group_id), Some(artifact_id), Some(version)) =
                (&entry.group_id, &entry.artifact_id, &entry.version)
            else {
                continue;
            };
            set.insert(ArtifactCoordinate::new(
                self.substitute(group_id, &properties),
                self.substitute(artifact_id, &properties),
                self.substitute(version, &properties),
            ));
        }

        tracing::debug!("Resolved {} managed artifacts", set.len());
        set
    }

    /// Build the property environment for one resolution.
    ///
    /// Parent properties first, overlaid by the child's own (child wins on
    /// identical keys), then the synthetic `project.*` keys. Values are
    /// resolved in a single pass against the pre-pass environment; a value
    /// chaining through another placeholder-bearing value stays partially
    /// resolved; no dependency ordering between values is attempted.
    fn build_property_environment(
        &self,
        pom: &PomDocument,
        parent: Option<&PomDocument>,
    ) -> BTreeMap<String, String> {
        let mut properties = BTreeMap::new();

        if let Some(parent_properties) = parent.and_then(|p| p.properties.as_ref()) {
            properties.extend(parent_properties.clone());
        }
        if let Some(own_properties) = &pom.properties {
            properties.extend(own_properties.clone());
        }

        properties.insert(
            "project.version".to_string(),
            pom.version
                .clone()
                .or_else(|| parent.and_then(|p| p.version.clone()))
                .unwrap_or_default(),
        );
        properties.insert(
            "project.groupId".to_string(),
            pom.group_id
                .clone()
                .or_else(|| parent.and_then(|p| p.group_id.clone()))
                .unwrap_or_default(),
        );
        // project.artifactId is the child's own, never inherited
        properties.insert(
            "project.artifactId".to_string(),
            pom.artifact_id.clone().unwrap_or_default(),
        );

        let unresolved = properties.clone();
        properties
            .into_iter()
            .map(|(key, value)| {
                let resolved = self.substitute(&value, &unresolved);
                (key, resolved)
            })
            .collect()
    }

    /// Replace every `${name}` in `value` with the environment value for
    /// `name`, leaving unmatched placeholders as literal text. One
    /// left-to-right pass, no recursion.
    fn substitute(&self, value: &str, properties: &BTreeMap<String, String>) -> String {
        self.placeholder
            .replace_all(value, |caps: &regex::Captures<'_>| {
                match properties.get(&caps[1]) {
                    Some(replacement) => replacement.clone(),
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }
}

impl Default for PomResolver {
    fn default() -> Self {
        Self::new()
    }
}
