//! Configuration types for pantry-match operations.

use crate::matching::{MatchWeights, RecipeMatcher, TierThresholds};
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments are layered over file settings with [`AppConfig::merge`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Scoring configuration (preset, weights, tiers)
    pub scoring: ScoringConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the weights preset.
    pub fn scoring_preset(mut self, preset: impl Into<String>) -> Self {
        self.config.scoring.preset = preset.into();
        self
    }

    /// Use explicit weights instead of the preset's.
    pub fn weights(mut self, weights: MatchWeights) -> Self {
        self.config.scoring.weights = Some(weights);
        self
    }

    /// Set the tier thresholds.
    pub const fn tiers(mut self, tiers: TierThresholds) -> Self {
        self.config.scoring.tiers = tiers;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Set the minimum score a recipe needs to count as a match.
    pub const fn min_score(mut self, min_score: Option<u8>) -> Self {
        self.config.behavior.min_score = min_score;
        self
    }

    /// Limit the number of ranked recipes shown.
    pub const fn limit(mut self, limit: Option<usize>) -> Self {
        self.config.behavior.limit = limit;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Command-specific Configuration Types
// ============================================================================

/// Input snapshot paths for the scoring commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchInputs {
    /// Recipes document
    pub recipes: PathBuf,
    /// Pantry list (None for an empty pantry)
    pub pantry: Option<PathBuf>,
    /// Preferences record (None for no preferences)
    pub preferences: Option<PathBuf>,
}

// ============================================================================
// Sub-configuration Types
// ============================================================================

/// Scoring configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScoringConfig {
    /// Weights preset: balanced, strict, lenient
    pub preset: String,
    /// Explicit weights (override the preset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weights: Option<MatchWeights>,
    /// Tier thresholds
    pub tiers: TierThresholds,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            preset: "balanced".to_string(),
            weights: None,
            tiers: TierThresholds::default(),
        }
    }
}

impl ScoringConfig {
    /// Resolve the effective weights: explicit weights, else the preset.
    #[must_use]
    pub fn to_weights(&self) -> MatchWeights {
        if let Some(weights) = &self.weights {
            return weights.clone();
        }
        MatchWeights::from_preset(&self.preset).unwrap_or_else(|| {
            tracing::warn!(
                "Unknown scoring preset '{}', using 'balanced'. Valid: {}",
                self.preset,
                MatchWeights::preset_names().join(", ")
            );
            MatchWeights::balanced()
        })
    }

    /// Build a matcher from this configuration.
    pub fn to_matcher(&self) -> RecipeMatcher {
        RecipeMatcher::new(self.to_weights()).with_tiers(self.tiers)
    }
}

/// Output-related configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

/// Behavior flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Suppress non-essential output
    pub quiet: bool,
    /// Exit with code 1 if no recipe reaches this score
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 0, max = 100))]
    pub min_score: Option<u8>,
    /// Show at most this many ranked recipes
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1))]
    pub limit: Option<usize>,
}
