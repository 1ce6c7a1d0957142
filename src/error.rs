//! Unified error types for bom-mapping.
//!
//! The taxonomy mirrors how failures propagate through the extraction
//! pipeline: network and parse failures carry a context string plus a
//! specific kind, while the not-found variants identify the coordinate or
//! version the caller asked about.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for bom-mapping operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum BomMappingError {
    /// Transport failures, timeouts, and non-success HTTP statuses
    #[error("Network request failed: {context}")]
    Network {
        context: String,
        #[source]
        source: NetworkErrorKind,
    },

    /// Malformed XML/YAML/JSON input
    #[error("Failed to parse {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// The coordinate has no published descriptor (HTTP 404)
    #[error("No published descriptor for {coordinate}")]
    NotFound { coordinate: String },

    /// Comparison requested against a version that was never snapshotted
    #[error("Version {version} is not a known version of {bom}")]
    VersionNotFound { bom: String, version: String },

    /// IO errors with path context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Specific network error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum NetworkErrorKind {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },
}

/// Specific parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("invalid XML: {0}")]
    InvalidXml(String),

    #[error("invalid YAML: {0}")]
    InvalidYaml(String),

    #[error("invalid JSON: {0}")]
    InvalidJson(String),
}

/// Convenient Result type for bom-mapping operations
pub type Result<T> = std::result::Result<T, BomMappingError>;

impl BomMappingError {
    /// Create a network error with context
    pub fn network(context: impl Into<String>, source: NetworkErrorKind) -> Self {
        Self::Network {
            context: context.into(),
            source,
        }
    }

    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create a not-found error for a coordinate
    pub fn not_found(coordinate: impl Into<String>) -> Self {
        Self::NotFound {
            coordinate: coordinate.into(),
        }
    }

    /// Create a version-not-found error for a comparison request
    pub fn version_not_found(bom: impl Into<String>, version: impl Into<String>) -> Self {
        Self::VersionNotFound {
            bom: bom.into(),
            version: version.into(),
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether retrying the operation could succeed.
    ///
    /// Timeouts and transport failures are retryable; HTTP statuses,
    /// missing descriptors, and everything else are not.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Network {
                source: NetworkErrorKind::Timeout(_) | NetworkErrorKind::Transport(_),
                ..
            }
        )
    }
}

impl From<std::io::Error> for BomMappingError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for BomMappingError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(
            "JSON serialization",
            ParseErrorKind::InvalidJson(err.to_string()),
        )
    }
}

impl From<serde_yaml::Error> for BomMappingError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::parse(
            "YAML serialization",
            ParseErrorKind::InvalidYaml(err.to_string()),
        )
    }
}

impl From<reqwest::Error> for BomMappingError {
    fn from(err: reqwest::Error) -> Self {
        let url = err
            .url()
            .map(ToString::to_string)
            .unwrap_or_else(|| "<unknown url>".to_string());
        let kind = if err.is_timeout() {
            NetworkErrorKind::Timeout(err.to_string())
        } else {
            NetworkErrorKind::Transport(err.to_string())
        };
        Self::network(url, kind)
    }
}
