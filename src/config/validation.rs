//! Configuration validation for pantry-match.

use super::types::{AppConfig, BehaviorConfig, ScoringConfig};
use crate::matching::{MatchWeights, TierThresholds, MAX_SCORE};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.scoring.validate());
        errors.extend(self.behavior.validate());
        errors
    }
}

impl Validatable for ScoringConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let valid_presets = ["balanced", "default", "strict", "lenient", "relaxed"];
        if !valid_presets.contains(&self.preset.to_lowercase().as_str()) {
            errors.push(ConfigError::new(
                "scoring.preset",
                format!(
                    "Invalid preset '{}'. Valid options: {}",
                    self.preset,
                    MatchWeights::preset_names().join(", ")
                ),
            ));
        }

        if let Some(weights) = &self.weights {
            errors.extend(prefix_fields("scoring.weights", weights.validate()));
        }
        errors.extend(prefix_fields("scoring.tiers", self.tiers.validate()));

        errors
    }
}

impl Validatable for MatchWeights {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        for (field, value) in [
            ("inventory", self.inventory),
            ("preference", self.preference),
            ("constraint", self.constraint),
        ] {
            if !value.is_finite() || value < 0.0 {
                errors.push(ConfigError::new(
                    field,
                    format!("Weight must be a non-negative number, got {value}"),
                ));
            }
        }

        if errors.is_empty() && !self.is_normalized() {
            errors.push(ConfigError::new(
                "inventory+preference+constraint",
                format!("Weights must sum to 100, got {}", self.total()),
            ));
        }

        if !self.overage_factor.is_finite() || self.overage_factor < 1.0 {
            errors.push(ConfigError::new(
                "overage_factor",
                format!("Overage factor must be at least 1.0, got {}", self.overage_factor),
            ));
        }

        if !(0.0..=1.0).contains(&self.partial_credit) {
            errors.push(ConfigError::new(
                "partial_credit",
                format!(
                    "Partial credit must be between 0.0 and 1.0, got {}",
                    self.partial_credit
                ),
            ));
        }

        errors
    }
}

impl Validatable for TierThresholds {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        for (field, value) in [("great", self.great), ("good", self.good)] {
            if value > MAX_SCORE {
                errors.push(ConfigError::new(
                    field,
                    format!("Threshold must be at most {MAX_SCORE}, got {value}"),
                ));
            }
        }
        if self.good > self.great {
            errors.push(ConfigError::new(
                "good",
                format!(
                    "Good threshold ({}) must not exceed great threshold ({})",
                    self.good, self.great
                ),
            ));
        }
        errors
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(min_score) = self.min_score {
            if min_score > MAX_SCORE {
                errors.push(ConfigError::new(
                    "behavior.min_score",
                    format!("Minimum score must be at most {MAX_SCORE}, got {min_score}"),
                ));
            }
        }
        if self.limit == Some(0) {
            errors.push(ConfigError::new(
                "behavior.limit",
                "Limit must be at least 1",
            ));
        }
        errors
    }
}

fn prefix_fields(prefix: &str, errors: Vec<ConfigError>) -> Vec<ConfigError> {
    errors
        .into_iter()
        .map(|e| ConfigError {
            field: format!("{prefix}.{}", e.field),
            message: e.message,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().is_valid());
        assert!(MatchWeights::strict().is_valid());
        assert!(MatchWeights::lenient().is_valid());
    }

    #[test]
    fn test_invalid_preset() {
        let config = ScoringConfig {
            preset: "spicy".to_string(),
            ..ScoringConfig::default()
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "scoring.preset");
    }

    #[test]
    fn test_weights_must_sum_to_100() {
        let weights = MatchWeights {
            inventory: 80.0,
            ..MatchWeights::balanced()
        };
        let errors = weights.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("sum to 100"));
    }

    #[test]
    fn test_negative_weight_and_bad_band() {
        let weights = MatchWeights {
            preference: -15.0,
            overage_factor: 0.8,
            partial_credit: 1.5,
            ..MatchWeights::balanced()
        };
        let fields: Vec<String> = weights.validate().into_iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["preference", "overage_factor", "partial_credit"]);
    }

    #[test]
    fn test_nested_fields_are_prefixed() {
        let config = AppConfig {
            scoring: ScoringConfig {
                tiers: TierThresholds { great: 40, good: 60 },
                ..ScoringConfig::default()
            },
            ..AppConfig::default()
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "scoring.tiers.good");
        assert!(errors[0].to_string().starts_with("scoring.tiers.good: "));
    }

    #[test]
    fn test_behavior_limits() {
        let behavior = BehaviorConfig {
            min_score: Some(101),
            limit: Some(0),
            ..BehaviorConfig::default()
        };
        assert_eq!(behavior.validate().len(), 2);
    }
}
