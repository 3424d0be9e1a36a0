//! JSON report generator.

use super::{
    MatchReport, ReportEntry, ReportError, ReportFormat, ReportGenerator, ReportKind,
    ReportMetadata, TierCounts,
};
use chrono::Utc;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonMatchReport<'a> {
    metadata: JsonReportMetadata<'a>,
    summary: JsonSummary,
    results: &'a [ReportEntry],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReportMetadata<'a> {
    tool: ToolInfo,
    generated_at: String,
    command: ReportKind,
    #[serde(flatten)]
    inputs: &'a ReportMetadata,
}

#[derive(Serialize)]
struct ToolInfo {
    name: String,
    version: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSummary {
    recipe_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    best_score: Option<u8>,
    tiers: TierCounts,
}

impl ReportGenerator for JsonReporter {
    fn generate(&self, report: &MatchReport) -> Result<String, ReportError> {
        let document = JsonMatchReport {
            metadata: JsonReportMetadata {
                tool: ToolInfo {
                    name: env!("CARGO_PKG_NAME").to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                },
                generated_at: Utc::now().to_rfc3339(),
                command: report.kind,
                inputs: &report.metadata,
            },
            summary: JsonSummary {
                recipe_count: report.entries.len(),
                best_score: report.best_score(),
                tiers: report.tier_counts(),
            },
            results: &report.entries,
        };

        let rendered = if self.pretty {
            serde_json::to_string_pretty(&document)
        } else {
            serde_json::to_string(&document)
        };
        rendered.map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}
