//! Summary and table report generators for shell output.

use super::{MatchReport, ReportEntry, ReportError, ReportFormat, ReportGenerator};
use crate::matching::{format_points, MatchTier};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Widest recipe label shown in the table before truncation.
const MAX_LABEL_WIDTH: usize = 40;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

const fn tier_color(tier: MatchTier) -> &'static str {
    match tier {
        MatchTier::Great => "green",
        MatchTier::Good => "yellow",
        MatchTier::Low => "red",
    }
}

fn tier_line(report: &MatchReport) -> String {
    let counts = report.tier_counts();
    format!(
        "{} {}: {} great, {} good, {} low",
        counts.total(),
        if counts.total() == 1 { "recipe" } else { "recipes" },
        counts.great,
        counts.good,
        counts.low
    )
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn entry_lines(&self, entry: &ReportEntry, lines: &mut Vec<String>) {
        let tier = entry.recipe.tier;
        lines.push(format!(
            "  {:>3}  {}  {}",
            entry.recipe.score,
            self.color(&format!("{:<5}", tier.label()), tier_color(tier)),
            entry.recipe.label
        ));

        if let Some(breakdown) = &entry.breakdown {
            // Skip the score line, already shown above.
            for line in breakdown.detailed().lines().skip(1) {
                lines.push(self.color(&format!("       {line}"), "dim"));
            }
        }
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(&self, report: &MatchReport) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        lines.push(self.color(report.kind.title(), "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));
        lines.push(format!(
            "{}  {}   {}  {}   {}  {}",
            self.color("Recipes:", "cyan"),
            report.entries.len(),
            self.color("Pantry items:", "cyan"),
            report.metadata.pantry_size,
            self.color("Preset:", "cyan"),
            report.metadata.preset
        ));
        lines.push(String::new());

        if report.entries.is_empty() {
            lines.push("  No recipes to show".to_string());
        } else {
            for entry in &report.entries {
                self.entry_lines(entry, &mut lines);
            }
        }

        lines.push(String::new());
        lines.push(tier_line(report));

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

// ============================================================================
// Table Reporter
// ============================================================================

/// Table reporter for aligned terminal output
pub struct TableReporter {
    /// Use colored output
    colored: bool,
}

impl TableReporter {
    /// Create a new table reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }
}

impl Default for TableReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TableReporter {
    fn generate(&self, report: &MatchReport) -> Result<String, ReportError> {
        let with_breakdown = report.entries.iter().any(|e| e.breakdown.is_some());
        let label_width = report
            .entries
            .iter()
            .map(|e| UnicodeWidthStr::width(e.recipe.label.as_str()).min(MAX_LABEL_WIDTH))
            .max()
            .unwrap_or(0)
            .max("RECIPE".len());

        let mut header = format!(
            "{:<4} {:>5}  {:<5}  {}",
            "#",
            "SCORE",
            "TIER",
            pad_to_width("RECIPE", label_width)
        );
        if with_breakdown {
            header.push_str(&format!("  {:>9}  {:>5}  {:>6}", "INVENTORY", "PREFS", "BUDGET"));
        }
        let rule_width = UnicodeWidthStr::width(header.trim_end());
        let mut lines = vec![self.color(header.trim_end(), "bold"), "─".repeat(rule_width)];

        for (position, entry) in report.entries.iter().enumerate() {
            let tier = entry.recipe.tier;
            let label =
                pad_to_width(&truncate_width(&entry.recipe.label, label_width), label_width);
            let mut row = format!(
                "{:<4} {:>5}  {}  {}",
                position + 1,
                entry.recipe.score,
                self.color(&format!("{:<5}", tier.label()), tier_color(tier)),
                label
            );
            if let Some(breakdown) = &entry.breakdown {
                row.push_str(&format!(
                    "  {:>9}  {:>5}  {:>6}",
                    format!(
                        "{}/{}",
                        breakdown.inventory.matched_count,
                        breakdown.inventory.total_ingredient_count
                    ),
                    format_points(breakdown.dietary.score),
                    format_points(breakdown.time_calorie.score)
                ));
            }
            lines.push(row.trim_end().to_string());
        }

        lines.push(String::new());
        lines.push(tier_line(report));

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Table
    }
}

/// Pad `s` with spaces to `width` display columns.
fn pad_to_width(s: &str, width: usize) -> String {
    let current = UnicodeWidthStr::width(s);
    if current >= width {
        s.to_string()
    } else {
        format!("{s}{}", " ".repeat(width - current))
    }
}

/// Truncate `s` to at most `max_width` display columns, marking the cut with "...".
fn truncate_width(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(3);
    let mut width = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        out.push(ch);
    }
    if max_width >= 3 {
        out.push_str("...");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::test_support::sample_report;

    #[test]
    fn test_summary_lists_entries_and_counts() {
        let text = SummaryReporter::new().no_color().generate(&sample_report(false)).unwrap();
        assert!(text.starts_with("Recipe Ranking"));
        assert!(text.contains("   85  Great  Pad Thai"));
        assert!(text.contains("   30  Low    Crème \"brûlée\", classic"));
        assert!(text.ends_with("2 recipes: 1 great, 0 good, 1 low"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn test_summary_includes_breakdown() {
        let text = SummaryReporter::new().no_color().generate(&sample_report(true)).unwrap();
        assert!(text.contains("on hand: Noodles, Peanuts"));
        assert!(text.contains("no preference matched"));
    }

    #[test]
    fn test_colored_summary_uses_ansi() {
        let text = SummaryReporter::new().generate(&sample_report(false)).unwrap();
        assert!(text.contains("\x1b[32m"));
    }

    #[test]
    fn test_table_aligns_wide_labels() {
        let text = TableReporter::new().no_color().generate(&sample_report(false)).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("#    SCORE  TIER   RECIPE"));
        assert!(lines[2].starts_with("1       85  Great  Pad Thai"));
        assert!(lines[3].starts_with("2       30  Low    Crème"));
    }

    #[test]
    fn test_table_breakdown_columns() {
        let text = TableReporter::new().no_color().generate(&sample_report(true)).unwrap();
        assert!(text.contains("INVENTORY"));
        assert!(text.lines().nth(2).is_some_and(|row| row.ends_with("2/2      0      15")));
    }

    #[test]
    fn test_truncate_width() {
        assert_eq!(truncate_width("short", 10), "short");
        assert_eq!(truncate_width("a very long recipe name", 10), "a very ...");
        assert_eq!(
            UnicodeWidthStr::width(truncate_width("寿司寿司寿司寿司", 9).as_str()),
            9
        );
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("寿", 4), "寿  ");
    }
}
