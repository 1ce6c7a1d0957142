//! Configuration file discovery and loading.

use super::AppConfig;
use crate::error::{BomMappingError, ParseErrorKind, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File names probed in the working directory, in order.
pub const CONFIG_FILE_NAMES: &[&str] = &["config.yaml", ".bom-mapping.yaml", "bom-mapping.yaml"];

/// Locate the configuration file. An explicit path wins; otherwise the
/// working directory is probed for the well-known names.
pub fn discover_config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    CONFIG_FILE_NAMES
        .iter()
        .map(PathBuf::from)
        .find(|candidate| candidate.is_file())
}

/// Load and parse a configuration file.
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let contents = fs::read_to_string(path).map_err(|e| BomMappingError::io(path, e))?;
    serde_yaml::from_str(&contents).map_err(|e| {
        BomMappingError::parse(
            format!("config file {}", path.display()),
            ParseErrorKind::InvalidYaml(e.to_string()),
        )
    })
}

/// Load the configuration, falling back to defaults when no file exists.
/// An explicit path that cannot be read is an error rather than a fallback.
pub fn load_or_default(explicit: Option<&Path>) -> Result<AppConfig> {
    match discover_config_file(explicit) {
        Some(path) => {
            debug!("loading config from {}", path.display());
            load_config(&path)
        }
        None => {
            debug!("no config file found, using defaults");
            Ok(AppConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_config_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.yaml");
        let mut file = fs::File::create(&path).expect("create");
        writeln!(
            file,
            "boms:\n  - groupId: org.example\n    artifactId: example-bom"
        )
        .expect("write");

        let config = load_config(&path).expect("config should load");
        assert_eq!(config.boms.len(), 1);
        assert_eq!(config.boms[0].group_id, "org.example");
    }

    #[test]
    fn test_load_config_rejects_invalid_yaml() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.yaml");
        fs::write(&path, "boms: [unclosed").expect("write");

        let err = load_config(&path).expect_err("invalid yaml should fail");
        assert!(matches!(err, BomMappingError::Parse { .. }));
    }

    #[test]
    fn test_explicit_path_wins_discovery() {
        let explicit = Path::new("/etc/bom-mapping/config.yaml");
        let found = discover_config_file(Some(explicit));
        assert_eq!(found, Some(explicit.to_path_buf()));
    }
}
