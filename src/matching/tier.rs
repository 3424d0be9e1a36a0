//! Presentation tiers for match scores.

use super::config::TierThresholds;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Presentation band of a match score.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub enum MatchTier {
    /// Below the good threshold (default < 50)
    Low,
    /// At or above the good threshold (default 50-79)
    Good,
    /// At or above the great threshold (default 80-100)
    Great,
}

impl MatchTier {
    /// Classify a score against custom thresholds.
    #[must_use]
    pub const fn from_score(score: u8, thresholds: &TierThresholds) -> Self {
        if score >= thresholds.great {
            Self::Great
        } else if score >= thresholds.good {
            Self::Good
        } else {
            Self::Low
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Great => "Great",
            Self::Good => "Good",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a score with the default 80/50 thresholds.
#[must_use]
pub fn classify_score(score: u8) -> MatchTier {
    MatchTier::from_score(score, &TierThresholds::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_boundaries() {
        assert_eq!(classify_score(100), MatchTier::Great);
        assert_eq!(classify_score(80), MatchTier::Great);
        assert_eq!(classify_score(79), MatchTier::Good);
        assert_eq!(classify_score(50), MatchTier::Good);
        assert_eq!(classify_score(49), MatchTier::Low);
        assert_eq!(classify_score(0), MatchTier::Low);
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = TierThresholds { great: 90, good: 60 };
        assert_eq!(MatchTier::from_score(85, &thresholds), MatchTier::Good);
        assert_eq!(MatchTier::from_score(59, &thresholds), MatchTier::Low);
    }

    #[test]
    fn test_display_and_serde() {
        assert_eq!(MatchTier::Great.to_string(), "Great");
        assert_eq!(serde_json::to_string(&MatchTier::Low).unwrap(), "\"Low\"");
        assert!(MatchTier::Great > MatchTier::Good);
    }
}
