//! Report type definitions.

use crate::matching::{MatchBreakdown, MatchTier, RankedRecipe};
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Auto-detect: table if TTY, summary otherwise
    #[default]
    Auto,
    /// Brief summary output
    Summary,
    /// Aligned table for terminal (colored)
    Table,
    /// Structured JSON output
    Json,
    /// CSV for spreadsheet import
    Csv,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Summary => write!(f, "summary"),
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

/// Command that produced a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    /// Every recipe in input order
    Score,
    /// Recipes sorted best first
    Rank,
    /// Recipes in input order with breakdowns
    Explain,
}

impl ReportKind {
    /// Report title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Score => "Recipe Scores",
            Self::Rank => "Recipe Ranking",
            Self::Explain => "Recipe Score Breakdown",
        }
    }
}

/// Inputs a report was produced from.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipes_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pantry_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences_path: Option<String>,
    /// Weights preset name
    pub preset: String,
    /// Pantry entries, duplicates included
    pub pantry_size: usize,
}

/// One scored recipe in a report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportEntry {
    #[serde(flatten)]
    pub recipe: RankedRecipe,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<MatchBreakdown>,
}

impl From<RankedRecipe> for ReportEntry {
    fn from(recipe: RankedRecipe) -> Self {
        Self {
            recipe,
            breakdown: None,
        }
    }
}

/// Number of entries per tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TierCounts {
    pub great: usize,
    pub good: usize,
    pub low: usize,
}

impl TierCounts {
    #[must_use]
    pub const fn total(&self) -> usize {
        self.great + self.good + self.low
    }
}

/// A scored listing ready for rendering.
#[derive(Debug, Clone)]
pub struct MatchReport {
    pub kind: ReportKind,
    pub metadata: ReportMetadata,
    pub entries: Vec<ReportEntry>,
}

impl MatchReport {
    #[must_use]
    pub const fn new(
        kind: ReportKind,
        metadata: ReportMetadata,
        entries: Vec<ReportEntry>,
    ) -> Self {
        Self {
            kind,
            metadata,
            entries,
        }
    }

    /// Count entries per tier.
    #[must_use]
    pub fn tier_counts(&self) -> TierCounts {
        self.entries
            .iter()
            .fold(TierCounts::default(), |mut counts, entry| {
                match entry.recipe.tier {
                    MatchTier::Great => counts.great += 1,
                    MatchTier::Good => counts.good += 1,
                    MatchTier::Low => counts.low += 1,
                }
                counts
            })
    }

    /// Highest score in the report.
    #[must_use]
    pub fn best_score(&self) -> Option<u8> {
        self.entries.iter().map(|e| e.recipe.score).max()
    }
}
