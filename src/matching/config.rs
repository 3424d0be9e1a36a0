//! Scoring weights and tier thresholds.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Points available to the inventory dimension.
pub const DEFAULT_INVENTORY_WEIGHT: f64 = 70.0;
/// Points available to the preference dimension.
pub const DEFAULT_PREFERENCE_WEIGHT: f64 = 15.0;
/// Points available to the constraint dimension.
pub const DEFAULT_CONSTRAINT_WEIGHT: f64 = 15.0;
/// Budget multiplier below which an over-budget factor still earns partial credit.
pub const DEFAULT_OVERAGE_FACTOR: f64 = 1.25;
/// Fraction of a factor's points granted inside the overage band.
pub const DEFAULT_PARTIAL_CREDIT: f64 = 0.5;
/// Minimum score for the "Great" tier.
pub const DEFAULT_GREAT_THRESHOLD: u8 = 80;
/// Minimum score for the "Good" tier.
pub const DEFAULT_GOOD_THRESHOLD: u8 = 50;

/// Point split across the three scoring dimensions.
///
/// The dimension weights should sum to 100 so that a perfect match scores
/// exactly 100. The constraint weight is split evenly between the time and
/// calorie factors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct MatchWeights {
    /// Points for pantry coverage of the ingredient list
    #[schemars(range(min = 0.0, max = 100.0))]
    pub inventory: f64,
    /// Points for cuisine/dietary alignment (all or nothing)
    #[schemars(range(min = 0.0, max = 100.0))]
    pub preference: f64,
    /// Points for time and calorie budgets
    #[schemars(range(min = 0.0, max = 100.0))]
    pub constraint: f64,
    /// Budget multiplier for the partial-credit band (1.0 disables the band)
    #[schemars(range(min = 1.0))]
    pub overage_factor: f64,
    /// Share of a factor's points granted in the partial-credit band
    #[schemars(range(min = 0.0, max = 1.0))]
    pub partial_credit: f64,
}

impl MatchWeights {
    /// The standard 70/15/15 split with a 25% overage band.
    #[must_use]
    pub const fn balanced() -> Self {
        Self {
            inventory: DEFAULT_INVENTORY_WEIGHT,
            preference: DEFAULT_PREFERENCE_WEIGHT,
            constraint: DEFAULT_CONSTRAINT_WEIGHT,
            overage_factor: DEFAULT_OVERAGE_FACTOR,
            partial_credit: DEFAULT_PARTIAL_CREDIT,
        }
    }

    /// Hard budget cutoffs: anything over a limit earns nothing.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            overage_factor: 1.0,
            ..Self::balanced()
        }
    }

    /// A wider overage band for users who treat limits as soft.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            overage_factor: 1.5,
            ..Self::balanced()
        }
    }

    /// Create weights from a preset name.
    ///
    /// Supported presets: "balanced" (alias "default"), "strict", "lenient".
    #[must_use]
    pub fn from_preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "balanced" | "default" => Some(Self::balanced()),
            "strict" => Some(Self::strict()),
            "lenient" | "relaxed" => Some(Self::lenient()),
            _ => None,
        }
    }

    /// Names accepted by [`Self::from_preset`].
    #[must_use]
    pub const fn preset_names() -> &'static [&'static str] {
        &["balanced", "strict", "lenient"]
    }

    /// Sum of the three dimension weights.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.inventory + self.preference + self.constraint
    }

    /// Check if the dimension weights sum to 100.
    #[must_use]
    pub fn is_normalized(&self) -> bool {
        (self.total() - 100.0).abs() < 0.001
    }

    /// Points available to each of the two constraint factors.
    #[must_use]
    pub fn constraint_factor_weight(&self) -> f64 {
        self.constraint / 2.0
    }
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self::balanced()
    }
}

/// Score boundaries for the presentation tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TierThresholds {
    /// Scores at or above this are "Great"
    #[schemars(range(min = 0, max = 100))]
    pub great: u8,
    /// Scores at or above this (and below `great`) are "Good"
    #[schemars(range(min = 0, max = 100))]
    pub good: u8,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            great: DEFAULT_GREAT_THRESHOLD,
            good: DEFAULT_GOOD_THRESHOLD,
        }
    }
}
