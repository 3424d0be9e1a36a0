//! Configuration module for pantry-match.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Named presets for common use cases
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use pantry_match::config::{AppConfig, ConfigPreset};
//!
//! // Use defaults
//! let config = AppConfig::default();
//!
//! // Use a preset
//! let config = AppConfig::from_preset(ConfigPreset::Strict);
//!
//! // Use builder
//! let config = AppConfig::builder()
//!     .scoring_preset("lenient")
//!     .min_score(Some(60))
//!     .build();
//!
//! // Load from file
//! use pantry_match::config::file::load_or_default;
//! let (config, loaded_from) = load_or_default(None);
//! ```
//!
//! # Configuration File
//!
//! Place a `.pantry-match.yaml` file in your project root or `~/.config/pantry-match/`:
//!
//! ```yaml
//! scoring:
//!   preset: strict
//!   tiers:
//!     great: 85
//! behavior:
//!   min_score: 50
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

// Re-export main types
pub use defaults::{ConfigPreset, DEFAULT_CI_MIN_SCORE};
pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, MatchInputs, OutputConfig, ScoringConfig,
};
pub use validation::{ConfigError, Validatable};

// Re-export file utilities
pub use file::{
    config_search_dirs, discover_config_file, generate_example_config,
    generate_full_example_config, load_config_file, load_or_default, ConfigFileError,
    CONFIG_FILE_NAMES,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// This schema documents all options that can be set in `.pantry-match.yaml`
/// config files. Editors can use it for validation and autocompletion.
pub fn generate_json_schema() -> serde_json::Result<String> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_lists_sections() {
        let schema = generate_json_schema().unwrap();
        let value: serde_json::Value = serde_json::from_str(&schema).unwrap();
        let properties = &value["properties"];
        assert!(properties.get("scoring").is_some());
        assert!(properties.get("output").is_some());
        assert!(properties.get("behavior").is_some());
        assert!(schema.contains("overage_factor"));
    }
}
