//! Classify command handler.
//!
//! Implements the `classify` subcommand, mapping raw scores to tiers.

use crate::config::{AppConfig, Validatable};
use crate::matching::{MatchTier, MAX_SCORE};
use crate::pipeline::{auto_detect_format, exit_codes, write_output, OutputTarget};
use crate::reports::ReportFormat;
use anyhow::{bail, Result};
use serde_json::json;

/// Run the classify command, returning the desired exit code.
pub fn run_classify(scores: &[u8], config: &AppConfig) -> Result<i32> {
    let tiers = &config.scoring.tiers;
    let errors = tiers.validate();
    if !errors.is_empty() {
        let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
        bail!("Invalid tier thresholds:\n  {}", details.join("\n  "));
    }

    if let Some(bad) = scores.iter().find(|&&s| s > MAX_SCORE) {
        bail!("Score {bad} is out of range (0-100)");
    }

    let classified: Vec<(u8, MatchTier)> = scores
        .iter()
        .map(|&score| (score, MatchTier::from_score(score, tiers)))
        .collect();

    let target = OutputTarget::from_option(config.output.file.clone());
    let output = match auto_detect_format(config.output.format, &target) {
        ReportFormat::Json => format_classify_json(&classified),
        ReportFormat::Csv => format_classify_csv(&classified),
        _ => format_classify_text(&classified),
    };
    write_output(&output, &target, config.behavior.quiet)?;

    Ok(exit_codes::SUCCESS)
}

fn format_classify_text(classified: &[(u8, MatchTier)]) -> String {
    if let [(_, tier)] = classified {
        return tier.label().to_string();
    }
    classified
        .iter()
        .map(|(score, tier)| format!("{score}\t{}", tier.label()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_classify_csv(classified: &[(u8, MatchTier)]) -> String {
    let mut lines = vec!["Score,Tier".to_string()];
    lines.extend(
        classified
            .iter()
            .map(|(score, tier)| format!("{score},{}", tier.label())),
    );
    lines.join("\n")
}

fn format_classify_json(classified: &[(u8, MatchTier)]) -> String {
    let entries: Vec<_> = classified
        .iter()
        .map(|(score, tier)| json!({ "score": score, "tier": tier }))
        .collect();
    serde_json::to_string_pretty(&entries).unwrap_or_default()
}
