//! Pipeline and CLI integration tests.
//!
//! These tests exercise the full load → score → report pipeline,
//! error handling paths, and CLI command handlers with real fixture files.

use pantry_match::cli;
use pantry_match::config::{AppConfig, MatchInputs};
use pantry_match::matching::{RankOptions, RecipeMatcher, TierThresholds};
use pantry_match::pipeline::{
    build_report, exit_code_for, exit_codes, load_inputs, output_report, PipelineError,
};
use pantry_match::reports::{ReportFormat, ReportKind};
use std::path::{Path, PathBuf};

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn fixture_inputs() -> MatchInputs {
    MatchInputs {
        recipes: fixture_path("recipes.json"),
        pantry: Some(fixture_path("pantry.txt")),
        preferences: Some(fixture_path("preferences.yaml")),
    }
}

// ============================================================================
// Load Stage Tests
// ============================================================================

mod load_stage {
    use super::*;

    #[test]
    fn load_all_fixtures() {
        let loaded = load_inputs(&fixture_inputs(), true).expect("load should succeed");

        assert_eq!(loaded.recipes.len(), 3);
        assert_eq!(loaded.pantry.names(), ["Chicken Breast", "Garlic", "Onions"]);
        assert_eq!(loaded.preferences.cuisine_preferences, vec!["Asian"]);
        assert_eq!(loaded.preferences.max_cook_time, Some(60.0));
        // String times are coerced at the boundary
        assert_eq!(loaded.recipes[2].time, 25.0);
    }

    #[test]
    fn load_yaml_recipe_list() {
        let inputs = MatchInputs {
            recipes: fixture_path("recipes.yaml"),
            pantry: None,
            preferences: None,
        };
        let loaded = load_inputs(&inputs, true).expect("load should succeed");
        assert_eq!(loaded.recipes.len(), 1);
        assert_eq!(loaded.recipes[0].name.as_deref(), Some("Garlic Bread"));
    }

    #[test]
    fn load_missing_pantry_fails_with_context() {
        let inputs = MatchInputs {
            pantry: Some(fixture_path("no-such-pantry.txt")),
            ..fixture_inputs()
        };
        let err = load_inputs(&inputs, true).unwrap_err();
        assert!(matches!(err, PipelineError::LoadFailed { what: "pantry", .. }));
    }

    #[test]
    fn load_malformed_recipes_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{\"recipes\": [").unwrap();

        let inputs = MatchInputs {
            recipes: path,
            pantry: None,
            preferences: None,
        };
        let err = load_inputs(&inputs, true).unwrap_err();
        assert!(matches!(err, PipelineError::LoadFailed { what: "recipes", .. }));
    }
}

// ============================================================================
// Report Stage Tests
// ============================================================================

mod report_stage {
    use super::*;

    fn fixture_report(
        kind: ReportKind,
        options: RankOptions,
    ) -> pantry_match::reports::MatchReport {
        let loaded = load_inputs(&fixture_inputs(), true).unwrap();
        build_report(
            kind,
            &RecipeMatcher::default(),
            &loaded,
            &fixture_inputs(),
            "balanced",
            options,
        )
    }

    #[test]
    fn score_report_in_input_order() {
        let report = fixture_report(ReportKind::Score, RankOptions::default());
        let scores: Vec<u8> = report.entries.iter().map(|e| e.recipe.score).collect();
        assert_eq!(scores, vec![72, 4, 29]);
    }

    #[test]
    fn rank_report_best_first() {
        let report = fixture_report(ReportKind::Rank, RankOptions::default());
        let ids: Vec<&str> = report
            .entries
            .iter()
            .filter_map(|e| e.recipe.id.as_deref())
            .collect();
        assert_eq!(ids, vec!["stir-fry", "pomodoro", "biryani"]);

        let counts = report.tier_counts();
        assert_eq!((counts.great, counts.good, counts.low), (0, 1, 2));
    }

    #[test]
    fn rank_filters_by_min_score() {
        let report = fixture_report(ReportKind::Rank, RankOptions::default().with_min_score(20));
        assert_eq!(report.entries.len(), 2);
        assert_eq!(exit_code_for(&report, Some(20)), exit_codes::SUCCESS);
        assert_eq!(exit_code_for(&report, Some(80)), exit_codes::NO_MATCH);
    }

    #[test]
    fn explain_report_carries_breakdowns() {
        let report = fixture_report(ReportKind::Explain, RankOptions::default());
        let breakdown = report.entries[0].breakdown.as_ref().expect("breakdown");
        assert_eq!(
            breakdown.inventory.matched_items,
            vec!["Chicken Breast", "Garlic", "Onions"]
        );
        assert!(report.entries.iter().all(|e| e.breakdown.is_some()));
    }

    #[test]
    fn json_report_written_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("explain.json");
        let report = fixture_report(ReportKind::Explain, RankOptions::default());
        let output = pantry_match::config::OutputConfig {
            format: ReportFormat::Json,
            file: Some(out.clone()),
            no_color: true,
        };
        output_report(&report, &output, true).expect("output should succeed");

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(out).unwrap()).unwrap();
        assert_eq!(json["metadata"]["command"], "explain");
        assert_eq!(json["summary"]["recipeCount"], 3);
        assert_eq!(json["summary"]["bestScore"], 72);
        assert_eq!(json["results"][1]["breakdown"]["timeCalorie"]["time"], "exceeded");
    }
}

// ============================================================================
// CLI Handler Tests
// ============================================================================

mod cli_handlers {
    use super::*;

    fn config_writing_to(path: &Path, format: ReportFormat) -> AppConfig {
        AppConfig::builder()
            .output_format(format)
            .output_file(Some(path.to_path_buf()))
            .no_color(true)
            .quiet(true)
            .build()
    }

    #[test]
    fn rank_with_limit_writes_csv() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("rank.csv");
        let mut config = config_writing_to(&out, ReportFormat::Csv);
        config.behavior.limit = Some(2);

        let code = cli::run_rank(fixture_inputs(), config).unwrap();
        assert_eq!(code, exit_codes::SUCCESS);

        let csv = std::fs::read_to_string(out).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("\"Chicken Stir Fry\",72,Good"));
        assert!(lines[2].contains("\"Pasta Pomodoro\",29,Low"));
    }

    #[test]
    fn score_below_min_score_exits_no_match() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("score.txt");
        let mut config = config_writing_to(&out, ReportFormat::Summary);
        config.behavior.min_score = Some(80);

        let code = cli::run_score(fixture_inputs(), config).unwrap();
        assert_eq!(code, exit_codes::NO_MATCH);
        assert!(out.exists());
    }

    #[test]
    fn strict_preset_changes_scores() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("strict.json");
        let mut config = config_writing_to(&out, ReportFormat::Json);
        config.scoring.preset = "strict".to_string();

        cli::run_score(fixture_inputs(), config).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(out).unwrap()).unwrap();
        assert_eq!(json["metadata"]["preset"], "strict");
        // No overage band: 1000 kcal against an 800 kcal limit earns nothing
        assert_eq!(json["results"][0]["score"], 72);
        assert_eq!(json["results"][1]["score"], 0);
    }

    #[test]
    fn classify_rejects_out_of_range() {
        let err = cli::run_classify(&[150], &AppConfig::default()).unwrap_err();
        assert!(err.to_string().contains("150"));
    }

    #[test]
    fn classify_honors_output_file_and_tiers() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("tiers.json");
        let mut config = config_writing_to(&out, ReportFormat::Json);
        config.scoring.tiers = TierThresholds { great: 90, good: 40 };

        let code = cli::run_classify(&[45, 85], &config).unwrap();
        assert_eq!(code, exit_codes::SUCCESS);

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(out).unwrap()).unwrap();
        assert_eq!(json[0]["tier"], "Good");
        assert_eq!(json[1]["tier"], "Good");
    }

    #[test]
    fn classify_rejects_inverted_tiers_from_config() {
        let mut config = AppConfig::default();
        config.scoring.tiers = TierThresholds { great: 40, good: 60 };
        assert!(cli::run_classify(&[50], &config).is_err());
    }
}
