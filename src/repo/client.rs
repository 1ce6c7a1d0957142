//! Blocking HTTP client for one Maven repository.

use crate::error::{BomMappingError, NetworkErrorKind, Result};
use crate::model::ArtifactCoordinate;
use crate::repo::metadata;
use reqwest::blocking::Client;
use std::time::Duration;

/// Repository client configuration.
#[derive(Debug, Clone)]
pub struct RepositoryClientConfig {
    /// Base URL of the repository, e.g. `https://repo1.maven.org/maven2/`
    pub base_url: String,
    /// Connect timeout for every request
    pub connect_timeout: Duration,
    /// Read timeout for every request
    pub read_timeout: Duration,
    /// Maximum retries for retryable failures (timeouts, transport errors)
    pub max_retries: u8,
}

impl Default for RepositoryClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://repo1.maven.org/maven2/".to_string(),
            connect_timeout: Duration::from_secs(30),
            read_timeout: Duration::from_secs(60),
            max_retries: 3,
        }
    }
}

/// Supplies raw POM descriptor text for an exact coordinate.
///
/// [`RepositoryClient`] is the production implementation; tests substitute
/// an in-memory source so resolution runs without a network.
pub trait DescriptorSource: Sync {
    /// Fetch the raw descriptor, or `NotFound` if none is published.
    fn fetch_pom(&self, coordinate: &ArtifactCoordinate) -> Result<String>;
}

/// HTTP client for release metadata and descriptor downloads.
pub struct RepositoryClient {
    client: Client,
    config: RepositoryClientConfig,
}

impl RepositoryClient {
    /// Create a new client with the configured timeouts.
    pub fn new(config: RepositoryClientConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.read_timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| {
                BomMappingError::network(
                    "Failed to create HTTP client",
                    NetworkErrorKind::Transport(e.to_string()),
                )
            })?;

        Ok(Self { client, config })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn group_path(group_id: &str) -> String {
        group_id.replace('.', "/")
    }

    fn metadata_url(&self, group_id: &str, artifact_id: &str) -> String {
        format!(
            "{}/{}/{}/maven-metadata.xml",
            self.config.base_url.trim_end_matches('/'),
            Self::group_path(group_id),
            artifact_id
        )
    }

    fn pom_url(&self, coordinate: &ArtifactCoordinate) -> String {
        format!(
            "{}/{}/{}/{}/{}-{}.pom",
            self.config.base_url.trim_end_matches('/'),
            Self::group_path(&coordinate.group_id),
            coordinate.artifact_id,
            coordinate.version,
            coordinate.artifact_id,
            coordinate.version
        )
    }

    /// Fetch the raw `maven-metadata.xml` document for a coordinate.
    pub fn fetch_metadata(&self, group_id: &str, artifact_id: &str) -> Result<String> {
        let url = self.metadata_url(group_id, artifact_id);
        tracing::debug!("Fetching release metadata from {url}");
        self.get_text(&url)
    }

    /// Discover all non-snapshot release versions, ordered ascending.
    ///
    /// Network and parse failures surface as typed errors so the caller can
    /// distinguish them from a metadata document that lists no versions.
    pub fn discover_versions(&self, group_id: &str, artifact_id: &str) -> Result<Vec<String>> {
        let xml = self.fetch_metadata(group_id, artifact_id)?;
        metadata::versions_from_metadata(&xml)
    }

    /// GET with retry; retries only failures classified as retryable.
    fn get_text(&self, url: &str) -> Result<String> {
        let mut last_error = None;

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s, 4s, ...
                let delay = Duration::from_secs(1 << (attempt - 1));
                std::thread::sleep(delay);
                tracing::debug!("Retry attempt {} for {url} after {:?}", attempt, delay);
            }

            match self.get_once(url) {
                Ok(text) => return Ok(text),
                Err(e) if e.is_retryable() => {
                    tracing::debug!("Request attempt {} failed: {e}", attempt + 1);
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| {
            BomMappingError::network(url, NetworkErrorKind::Transport("unknown error".into()))
        }))
    }

    fn get_once(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send()?;

        let status = response.status();
        if status.as_u16() == 404 {
            return Err(BomMappingError::not_found(url));
        }
        if !status.is_success() {
            return Err(BomMappingError::network(
                url,
                NetworkErrorKind::Status {
                    status: status.as_u16(),
                    url: url.to_string(),
                },
            ));
        }

        Ok(response.text()?)
    }
}

impl DescriptorSource for RepositoryClient {
    fn fetch_pom(&self, coordinate: &ArtifactCoordinate) -> Result<String> {
        let url = self.pom_url(coordinate);
        tracing::info!("Downloading POM from {url}");
        self.get_text(&url).map_err(|e| match e {
            BomMappingError::NotFound { .. } => {
                BomMappingError::not_found(coordinate.coordinates())
            }
            other => other,
        })
    }
}
