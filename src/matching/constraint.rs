//! Time and calorie budget alignment.
//!
//! Each factor is worth half of the constraint weight. A factor over its
//! limit but inside the overage band keeps partial credit, so near-miss
//! recipes stay visible with a lower score instead of dropping out.

use super::config::MatchWeights;
use serde::{Deserialize, Serialize};

/// How a single value compares to its budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BudgetCheck {
    /// No limit was set
    Unconstrained,
    /// At or under the limit
    Within,
    /// Over the limit, inside the overage band
    Overage,
    /// Beyond the overage band
    Exceeded,
}

impl BudgetCheck {
    /// Compare `value` with an optional `limit`.
    ///
    /// Only finite, strictly positive limits constrain; anything else is
    /// treated as unset.
    #[must_use]
    pub fn evaluate(value: f64, limit: Option<f64>, overage_factor: f64) -> Self {
        match limit.filter(|l| l.is_finite() && *l > 0.0) {
            None => Self::Unconstrained,
            Some(limit) if value <= limit => Self::Within,
            Some(limit) if value <= limit * overage_factor => Self::Overage,
            Some(_) => Self::Exceeded,
        }
    }

    /// Share of the factor's points earned.
    #[must_use]
    pub fn credit(self, partial_credit: f64) -> f64 {
        match self {
            Self::Unconstrained | Self::Within => 1.0,
            Self::Overage => partial_credit,
            Self::Exceeded => 0.0,
        }
    }

    /// True when the factor earned full credit.
    #[must_use]
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Unconstrained | Self::Within)
    }

    /// Short human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unconstrained => "no limit",
            Self::Within => "within budget",
            Self::Overage => "slightly over",
            Self::Exceeded => "over budget",
        }
    }
}

/// Result of the constraint matcher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstraintMatch {
    /// Points earned, `0..=weights.constraint`
    pub score: f64,
    /// Points earned by the time factor
    pub time_score: f64,
    /// Points earned by the calorie factor
    pub calorie_score: f64,
    /// Time budget outcome
    pub time: BudgetCheck,
    /// Calorie budget outcome
    pub calories: BudgetCheck,
}

/// Score time and calorie budgets.
#[must_use]
pub fn match_constraints(
    time: f64,
    calories: f64,
    max_cook_time: Option<f64>,
    max_calories: Option<f64>,
    weights: &MatchWeights,
) -> ConstraintMatch {
    let factor_weight = weights.constraint_factor_weight();

    let time_check = BudgetCheck::evaluate(time, max_cook_time, weights.overage_factor);
    let calorie_check = BudgetCheck::evaluate(calories, max_calories, weights.overage_factor);

    let time_score = factor_weight * time_check.credit(weights.partial_credit);
    let calorie_score = factor_weight * calorie_check.credit(weights.partial_credit);

    ConstraintMatch {
        score: time_score + calorie_score,
        time_score,
        calorie_score,
        time: time_check,
        calories: calorie_check,
    }
}
