//! Per-dimension score breakdown.

use super::config::MatchWeights;
use super::constraint::{BudgetCheck, ConstraintMatch};
use super::inventory::InventoryMatch;
use super::preference::{PreferenceMatch, PreferenceReason};
use serde::{Deserialize, Serialize};

/// Full explanation of a match score.
///
/// `total` always equals the score returned by `score_match` for the same
/// inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchBreakdown {
    /// Aggregated 0-100 score
    pub total: u8,
    /// Pantry coverage
    pub inventory: InventoryBreakdown,
    /// Cuisine/dietary alignment
    pub dietary: DietaryBreakdown,
    /// Time and calorie budgets
    pub time_calorie: TimeCalorieBreakdown,
}

/// Inventory dimension of a [`MatchBreakdown`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryBreakdown {
    pub score: f64,
    pub max_score: f64,
    pub matched_count: usize,
    pub total_ingredient_count: usize,
    pub matched_items: Vec<String>,
}

/// Preference dimension of a [`MatchBreakdown`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietaryBreakdown {
    pub score: f64,
    pub max_score: f64,
    /// True whenever the full preference weight was granted
    pub matched: bool,
    pub reason: PreferenceReason,
}

/// Constraint dimension of a [`MatchBreakdown`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeCalorieBreakdown {
    pub score: f64,
    pub max_score: f64,
    /// Time earned full credit
    pub time_ok: bool,
    /// Calories earned full credit
    pub calories_ok: bool,
    pub time: BudgetCheck,
    pub calories: BudgetCheck,
}

impl InventoryBreakdown {
    pub(crate) fn from_match(result: InventoryMatch, weights: &MatchWeights) -> Self {
        Self {
            score: result.score,
            max_score: weights.inventory,
            matched_count: result.matched_count,
            total_ingredient_count: result.total_count,
            matched_items: result.matched_items,
        }
    }

    fn describe(&self) -> String {
        if self.total_ingredient_count == 0 {
            "no ingredients listed".to_string()
        } else {
            format!(
                "{}/{} ingredients on hand",
                self.matched_count, self.total_ingredient_count
            )
        }
    }
}

impl DietaryBreakdown {
    pub(crate) fn from_match(result: PreferenceMatch, weights: &MatchWeights) -> Self {
        Self {
            score: result.score,
            max_score: weights.preference,
            matched: result.matched(),
            reason: result.reason,
        }
    }
}

impl TimeCalorieBreakdown {
    pub(crate) fn from_match(result: ConstraintMatch, weights: &MatchWeights) -> Self {
        Self {
            score: result.score,
            max_score: weights.constraint,
            time_ok: result.time.is_ok(),
            calories_ok: result.calories.is_ok(),
            time: result.time,
            calories: result.calories,
        }
    }

    fn describe(&self) -> String {
        format!("time {}, calories {}", self.time.label(), self.calories.label())
    }
}

impl MatchBreakdown {
    /// Generate a one-line summary.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{}/100: {}, {}, {}",
            self.total,
            self.inventory.describe(),
            self.dietary.reason.describe(),
            self.time_calorie.describe()
        )
    }

    /// Generate a detailed multi-line explanation.
    #[must_use]
    pub fn detailed(&self) -> String {
        let mut lines = vec![format!("Score: {}/100", self.total)];

        lines.push(format!(
            "  Inventory:     {:>5} / {:<3} {}",
            format_points(self.inventory.score),
            format_points(self.inventory.max_score),
            self.inventory.describe()
        ));
        if !self.inventory.matched_items.is_empty() {
            lines.push(format!(
                "                 on hand: {}",
                self.inventory.matched_items.join(", ")
            ));
        }
        lines.push(format!(
            "  Preferences:   {:>5} / {:<3} {}",
            format_points(self.dietary.score),
            format_points(self.dietary.max_score),
            self.dietary.reason.describe()
        ));
        lines.push(format!(
            "  Time/calories: {:>5} / {:<3} {}",
            format_points(self.time_calorie.score),
            format_points(self.time_calorie.max_score),
            self.time_calorie.describe()
        ));

        lines.join("\n")
    }
}

impl std::fmt::Display for MatchBreakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.summary())
    }
}

/// Format points without a trailing `.0` for whole numbers.
#[must_use]
pub fn format_points(points: f64) -> String {
    if points.fract() == 0.0 {
        format!("{points:.0}")
    } else {
        format!("{points:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MatchBreakdown {
        MatchBreakdown {
            total: 53,
            inventory: InventoryBreakdown {
                score: 42.0,
                max_score: 70.0,
                matched_count: 3,
                total_ingredient_count: 5,
                matched_items: vec!["Chicken".into(), "Garlic".into(), "Onions".into()],
            },
            dietary: DietaryBreakdown {
                score: 0.0,
                max_score: 15.0,
                matched: false,
                reason: PreferenceReason::None,
            },
            time_calorie: TimeCalorieBreakdown {
                score: 11.25,
                max_score: 15.0,
                time_ok: false,
                calories_ok: true,
                time: BudgetCheck::Overage,
                calories: BudgetCheck::Within,
            },
        }
    }

    #[test]
    fn test_summary() {
        insta::assert_snapshot!(
            sample().summary(),
            @"53/100: 3/5 ingredients on hand, no preference matched, time slightly over, calories within budget"
        );
    }

    #[test]
    fn test_detailed_lists_every_dimension() {
        let text = sample().detailed();
        assert!(text.starts_with("Score: 53/100"));
        assert!(text.contains("on hand: Chicken, Garlic, Onions"));
        assert!(text.contains("11.25"));
        assert_eq!(text.lines().count(), 5);
    }

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["total"], 53);
        assert_eq!(value["inventory"]["totalIngredientCount"], 5);
        assert_eq!(value["inventory"]["maxScore"], 70.0);
        assert_eq!(value["dietary"]["reason"], "none");
        assert_eq!(value["timeCalorie"]["timeOk"], false);
        assert_eq!(value["timeCalorie"]["caloriesOk"], true);
        assert_eq!(value["timeCalorie"]["time"], "overage");
    }

    #[test]
    fn test_format_points() {
        assert_eq!(format_points(42.0), "42");
        assert_eq!(format_points(3.75), "3.75");
    }
}
