//! Report generation for match results.
//!
//! This module provides multiple output formats for scored recipe listings:
//! - Summary: Compact shell-friendly output
//! - Table: Aligned tabular terminal output
//! - JSON: Structured data for programmatic integration
//! - CSV: Spreadsheet import

mod csv;
mod json;
mod summary;
mod types;

pub use csv::CsvReporter;
pub use json::JsonReporter;
pub use summary::{SummaryReporter, TableReporter};
pub use types::{
    MatchReport, ReportEntry, ReportFormat, ReportKind, ReportMetadata, TierCounts,
};

use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render a match report
    fn generate(&self, report: &MatchReport) -> Result<String, ReportError>;

    /// Write report to a writer
    fn write_report(
        &self,
        report: &MatchReport,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let rendered = self.generate(report)?;
        writer.write_all(rendered.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Auto | ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Table => {
            if use_color {
                Box::new(TableReporter::new())
            } else {
                Box::new(TableReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Csv => Box::new(CsvReporter::new()),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_reporter_formats() {
        assert_eq!(create_reporter(ReportFormat::Json).format(), ReportFormat::Json);
        assert_eq!(create_reporter(ReportFormat::Csv).format(), ReportFormat::Csv);
        assert_eq!(create_reporter(ReportFormat::Table).format(), ReportFormat::Table);
        assert_eq!(
            create_reporter_with_options(ReportFormat::Auto, false).format(),
            ReportFormat::Summary
        );
    }

    #[test]
    fn test_write_report_to_buffer() {
        let report = test_support::sample_report(false);
        let mut buffer = Vec::new();
        CsvReporter::new().write_report(&report, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("Position,"));
    }

    #[test]
    fn test_tier_counts() {
        let report = test_support::sample_report(false);
        let counts = report.tier_counts();
        assert_eq!(counts.great, 1);
        assert_eq!(counts.low, 1);
        assert_eq!(counts.total(), 2);
        assert_eq!(report.best_score(), Some(85));
    }
}
