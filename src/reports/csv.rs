//! CSV report generator.
//!
//! One row per recipe, suitable for spreadsheet import. Breakdown columns
//! are added when the report carries breakdowns.

use super::{MatchReport, ReportError, ReportFormat, ReportGenerator};
use crate::matching::format_points;
use std::fmt::Write;

/// CSV report generator.
pub struct CsvReporter;

impl CsvReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for CsvReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for CsvReporter {
    fn generate(&self, report: &MatchReport) -> Result<String, ReportError> {
        let with_breakdown = report.entries.iter().any(|e| e.breakdown.is_some());
        let mut content = String::new();

        content.push_str("Position,Id,Recipe,Score,Tier");
        if with_breakdown {
            content.push_str(
                ",Inventory,Matched,Ingredients,Preference,Preference Reason,Budget,Time,Calories",
            );
        }
        content.push('\n');

        for (position, entry) in report.entries.iter().enumerate() {
            write!(
                content,
                "{},\"{}\",\"{}\",{},{}",
                position + 1,
                escape_csv(entry.recipe.id.as_deref().unwrap_or("")),
                escape_csv(&entry.recipe.label),
                entry.recipe.score,
                entry.recipe.tier
            )?;
            if let Some(b) = &entry.breakdown {
                write!(
                    content,
                    ",{},{},{},{},{},{},{},{}",
                    format_points(b.inventory.score),
                    b.inventory.matched_count,
                    b.inventory.total_ingredient_count,
                    format_points(b.dietary.score),
                    b.dietary.reason.describe(),
                    format_points(b.time_calorie.score),
                    b.time_calorie.time.label(),
                    b.time_calorie.calories.label()
                )?;
            } else if with_breakdown {
                content.push_str(",,,,,,,,");
            }
            content.push('\n');
        }

        Ok(content)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Csv
    }
}

fn escape_csv(s: &str) -> String {
    s.replace('"', "\"\"").replace('\n', " ")
}
