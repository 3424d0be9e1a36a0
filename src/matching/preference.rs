//! Cuisine and dietary alignment.
//!
//! Recipes carry no dietary tags, so the cuisine label doubles as the only
//! dietary signal: a "seafood" preference matches a "Seafood" cuisine.

use super::config::MatchWeights;
use super::normalize::contains_either;
use serde::{Deserialize, Serialize};

/// Which rule decided the preference score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PreferenceReason {
    /// The cuisine equals a preferred cuisine
    Cuisine,
    /// The cuisine label and a dietary preference contain one another
    Dietary,
    /// The user stated no preferences, so nothing is penalized
    NoPreferences,
    /// Preferences were stated and none matched
    None,
}

impl PreferenceReason {
    /// Whether this outcome earns the preference weight.
    #[must_use]
    pub const fn grants_credit(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Short human-readable description.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Cuisine => "preferred cuisine",
            Self::Dietary => "dietary preference",
            Self::NoPreferences => "no preferences stated",
            Self::None => "no preference matched",
        }
    }
}

/// Result of the preference matcher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreferenceMatch {
    /// Either 0 or the full preference weight
    pub score: f64,
    /// The cuisine equals one of the cuisine preferences
    pub cuisine_match: bool,
    /// The cuisine and one of the dietary preferences contain one another
    pub dietary_match: bool,
    /// Rule that decided the score
    pub reason: PreferenceReason,
}

impl PreferenceMatch {
    /// True when the full preference weight was granted.
    #[must_use]
    pub const fn matched(&self) -> bool {
        self.reason.grants_credit()
    }
}

/// Score cuisine/dietary alignment. Binary: all of the weight or none.
#[must_use]
pub fn match_preferences(
    cuisine: &str,
    dietary_preferences: &[String],
    cuisine_preferences: &[String],
    weights: &MatchWeights,
) -> PreferenceMatch {
    let cuisine = cuisine.to_lowercase();

    let cuisine_match = cuisine_preferences
        .iter()
        .any(|pref| pref.to_lowercase() == cuisine);

    let dietary_match = dietary_preferences
        .iter()
        .any(|pref| contains_either(&cuisine, &pref.to_lowercase()));

    let reason = if cuisine_match {
        PreferenceReason::Cuisine
    } else if dietary_match {
        PreferenceReason::Dietary
    } else if dietary_preferences.is_empty() && cuisine_preferences.is_empty() {
        PreferenceReason::NoPreferences
    } else {
        PreferenceReason::None
    };

    PreferenceMatch {
        score: if reason.grants_credit() { weights.preference } else { 0.0 },
        cuisine_match,
        dietary_match,
        reason,
    }
}
