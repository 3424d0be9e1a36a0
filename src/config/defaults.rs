//! Default configurations and presets for pantry-match.

use super::types::{AppConfig, BehaviorConfig, OutputConfig, ScoringConfig};
use crate::reports::ReportFormat;

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Balanced weights with the standard overage band
    Default,
    /// Hard time and calorie limits
    Strict,
    /// Wider overage band for soft limits
    Lenient,
    /// CI/CD: JSON output, quiet, fail when nothing reaches the good tier
    CiCd,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Strict => "strict",
            Self::Lenient => "lenient",
            Self::CiCd => "ci-cd",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" | "balanced" => Some(Self::Default),
            "strict" => Some(Self::Strict),
            "lenient" | "relaxed" => Some(Self::Lenient),
            "ci-cd" | "ci" | "pipeline" => Some(Self::CiCd),
            _ => None,
        }
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Balanced 70/15/15 scoring with a 25% budget overage band",
            Self::Strict => "Time and calorie limits are hard cutoffs",
            Self::Lenient => "Partial budget credit up to 50% over a limit",
            Self::CiCd => "Quiet JSON output that fails when no recipe scores 50 or more",
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::Strict, Self::Lenient, Self::CiCd]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Preset Implementations
// ============================================================================

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::Strict => Self::scoring_preset_config("strict"),
            ConfigPreset::Lenient => Self::scoring_preset_config("lenient"),
            ConfigPreset::CiCd => Self::ci_cd_preset(),
        }
    }

    fn scoring_preset_config(preset: &str) -> Self {
        Self {
            scoring: ScoringConfig {
                preset: preset.to_string(),
                ..ScoringConfig::default()
            },
            ..Self::default()
        }
    }

    /// CI/CD pipeline preset.
    ///
    /// - JSON output for machine parsing
    /// - Quiet mode to reduce noise
    /// - Exit code 1 when no recipe reaches the good tier
    #[must_use]
    pub fn ci_cd_preset() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            output: OutputConfig {
                format: ReportFormat::Json,
                file: None,
                no_color: true,
            },
            behavior: BehaviorConfig {
                quiet: true,
                min_score: Some(DEFAULT_CI_MIN_SCORE),
                limit: None,
            },
        }
    }
}

// ============================================================================
// Default Value Constants
// ============================================================================

/// Minimum score the CI/CD preset requires from the best recipe.
pub const DEFAULT_CI_MIN_SCORE: u8 = crate::matching::DEFAULT_GOOD_THRESHOLD;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_names_round_trip() {
        for preset in ConfigPreset::all() {
            assert_eq!(ConfigPreset::from_name(preset.name()), Some(*preset));
            assert!(!preset.description().is_empty());
        }
        assert_eq!(ConfigPreset::from_name("CI"), Some(ConfigPreset::CiCd));
        assert_eq!(ConfigPreset::from_name("nope"), None);
    }

    #[test]
    fn test_strict_preset_selects_strict_weights() {
        let config = AppConfig::from_preset(ConfigPreset::Strict);
        assert_eq!(config.scoring.preset, "strict");
        assert_eq!(config.scoring.to_weights().overage_factor, 1.0);
    }

    #[test]
    fn test_ci_cd_preset() {
        let config = AppConfig::from_preset(ConfigPreset::CiCd);
        assert_eq!(config.output.format, ReportFormat::Json);
        assert!(config.behavior.quiet);
        assert_eq!(config.behavior.min_score, Some(50));
    }

    #[test]
    fn test_display() {
        assert_eq!(ConfigPreset::CiCd.to_string(), "ci-cd");
    }
}
