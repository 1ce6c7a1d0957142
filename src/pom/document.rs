//! Schema-typed POM descriptor parsing.
//!
//! Every field is optional and unknown elements are ignored; defaults are
//! applied during extraction rather than at parse time.

use crate::error::{BomMappingError, ParseErrorKind, Result};
use crate::model::ArtifactCoordinate;
use serde::Deserialize;
use std::collections::BTreeMap;

/// A parsed POM descriptor, reduced to the fields resolution needs.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PomDocument {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
    pub parent: Option<ParentReference>,
    pub properties: Option<BTreeMap<String, String>>,
    pub dependency_management: Option<DependencyManagement>,
}

/// The `<parent>` element: ancestor the descriptor may inherit from.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParentReference {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct DependencyManagement {
    pub dependencies: Option<DependencyList>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct DependencyList {
    #[serde(rename = "dependency")]
    pub entries: Vec<ManagedDependency>,
}

/// One `<dependency>` entry under `<dependencyManagement>`.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ManagedDependency {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
    pub scope: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl PomDocument {
    /// Parse raw descriptor text.
    pub fn parse(content: &str) -> Result<Self> {
        quick_xml::de::from_str(content).map_err(|e| {
            BomMappingError::parse("POM descriptor", ParseErrorKind::InvalidXml(e.to_string()))
        })
    }

    /// The parent coordinate, only when all three fields are declared.
    #[must_use]
    pub fn parent_coordinate(&self) -> Option<ArtifactCoordinate> {
        let parent = self.parent.as_ref()?;
        match (&parent.group_id, &parent.artifact_id, &parent.version) {
            (Some(group_id), Some(artifact_id), Some(version)) => Some(ArtifactCoordinate::new(
                group_id.clone(),
                artifact_id.clone(),
                version.clone(),
            )),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_descriptor() {
        let pom = PomDocument::parse(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <modelVersion>4.0.0</modelVersion>
  <parent>
    <groupId>org.example</groupId>
    <artifactId>example-parent</artifactId>
    <version>5</version>
  </parent>
  <groupId>org.example</groupId>
  <artifactId>example-bom</artifactId>
  <version>1.0.0</version>
  <packaging>pom</packaging>
  <properties>
    <core.version>2.3.4</core.version>
  </properties>
  <dependencyManagement>
    <dependencies>
      <dependency>
        <groupId>org.example</groupId>
        <artifactId>example-core</artifactId>
        <version>${core.version}</version>
        <scope>import</scope>
        <type>pom</type>
      </dependency>
    </dependencies>
  </dependencyManagement>
</project>"#,
        )
        .expect("descriptor should parse");

        assert_eq!(pom.artifact_id.as_deref(), Some("example-bom"));
        assert_eq!(
            pom.parent_coordinate().map(|p| p.coordinates()),
            Some("org.example:example-parent:5".to_string())
        );
        assert_eq!(
            pom.properties.as_ref().and_then(|p| p.get("core.version")),
            Some(&"2.3.4".to_string())
        );

        let entries = &pom
            .dependency_management
            .as_ref()
            .and_then(|dm| dm.dependencies.as_ref())
            .map(|d| d.entries.clone())
            .unwrap_or_default();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].version.as_deref(), Some("${core.version}"));
        assert_eq!(entries[0].scope.as_deref(), Some("import"));
    }

    #[test]
    fn test_every_field_is_optional() {
        let pom = PomDocument::parse("<project><artifactId>bare</artifactId></project>")
            .expect("descriptor should parse");
        assert_eq!(pom.artifact_id.as_deref(), Some("bare"));
        assert!(pom.group_id.is_none());
        assert!(pom.parent.is_none());
        assert!(pom.parent_coordinate().is_none());
        assert!(pom.dependency_management.is_none());
    }

    #[test]
    fn test_partial_parent_yields_no_coordinate() {
        let pom = PomDocument::parse(
            "<project><parent><groupId>g</groupId><artifactId>a</artifactId></parent></project>",
        )
        .expect("descriptor should parse");
        assert!(pom.parent.is_some());
        assert!(pom.parent_coordinate().is_none());
    }
}
