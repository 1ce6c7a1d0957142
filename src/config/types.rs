//! Configuration types for bom-mapping runs.

use crate::repo::RepositoryClientConfig;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

/// Top-level application configuration, loaded from a YAML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// BOM coordinates to track
    pub boms: Vec<BomDefinition>,
    /// Repository, storage, and concurrency settings
    pub settings: Settings,
}

/// One tracked BOM.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BomDefinition {
    pub group_id: String,
    pub artifact_id: String,
    /// Named repository from `settings.repositories`, or a direct URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Default repository when a BOM names none
    pub maven_repository: String,
    /// Named repository shortcuts usable in `BomDefinition::repository`
    pub repositories: BTreeMap<String, String>,
    /// Durable snapshot store location
    pub snapshot_directory: PathBuf,
    /// Emitted JSON data tree location
    pub output_directory: PathBuf,
    /// When false, every extraction behaves as if forced
    pub cache_enabled: bool,
    /// Worker pool size for batch extraction
    pub parallelism: usize,
    pub connect_timeout_secs: u64,
    pub read_timeout_secs: u64,
    pub max_retries: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            maven_repository: "https://repo1.maven.org/maven2/".to_string(),
            repositories: BTreeMap::from([
                (
                    "central".to_string(),
                    "https://repo1.maven.org/maven2/".to_string(),
                ),
                (
                    "google".to_string(),
                    "https://maven.google.com/".to_string(),
                ),
            ]),
            snapshot_directory: PathBuf::from("./snapshots"),
            output_directory: PathBuf::from("./docs/data"),
            cache_enabled: true,
            parallelism: 4,
            connect_timeout_secs: 30,
            read_timeout_secs: 60,
            max_retries: 3,
        }
    }
}

impl Settings {
    /// Resolve a repository reference: a key into `repositories`, a direct
    /// URL, or the default repository when absent.
    #[must_use]
    pub fn resolve_repository(&self, reference: Option<&str>) -> String {
        match reference {
            Some(name) => self
                .repositories
                .get(name)
                .cloned()
                .unwrap_or_else(|| name.to_string()),
            None => self.maven_repository.clone(),
        }
    }

    /// Build a client config for one repository base URL.
    #[must_use]
    pub fn client_config(&self, base_url: String) -> RepositoryClientConfig {
        RepositoryClientConfig {
            base_url,
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            read_timeout: Duration::from_secs(self.read_timeout_secs),
            max_retries: self.max_retries,
        }
    }
}

impl AppConfig {
    /// Repository base URL for one tracked BOM.
    #[must_use]
    pub fn repository_url(&self, bom: &BomDefinition) -> String {
        self.settings.resolve_repository(bom.repository.as_deref())
    }
}
