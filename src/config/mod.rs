//! Run configuration: tracked BOMs plus repository and storage settings.

mod file;
mod types;

pub use file::{discover_config_file, load_config, load_or_default, CONFIG_FILE_NAMES};
pub use types::{AppConfig, BomDefinition, Settings};

/// JSON Schema for the config file format, for editor validation.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).expect("schema serialization should not fail")
}
