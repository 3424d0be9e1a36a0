//! pantry-match: Recipe match scoring against a pantry and preferences
//!
//! Scores, ranks and explains how well recipes fit what is on hand.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use pantry_match::{
    cli,
    config::{AppConfig, ConfigPreset, MatchInputs},
    pipeline::exit_codes,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with scoring info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nScoring (100 points):",
        "\n  inventory 70, preferences 15, time/calories 15",
        "\n\nWeight presets:",
        "\n  balanced, strict, lenient",
        "\n\nOutput Formats:",
        "\n  summary, table, json, csv"
    )
}

#[derive(Parser)]
#[command(name = "pantry-match")]
#[command(version, long_version = build_long_version())]
#[command(about = "Score recipes against your pantry and preferences", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  No recipe reached --min-score
    2  Error occurred

EXAMPLES:
    # Score every recipe in input order
    pantry-match score recipes.json --pantry pantry.txt

    # Best five recipes for tonight
    pantry-match rank recipes.json --pantry pantry.txt --preferences prefs.yaml --limit 5

    # Why did a recipe score what it did?
    pantry-match explain recipe.json --pantry pantry.txt -o json

    # CI gate: fail unless something scores at least 70
    pantry-match rank recipes.json --pantry pantry.txt --min-score 70 -o summary")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Flags accepted by every subcommand
#[derive(clap::Args)]
struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "PANTRY_MATCH_CONFIG")]
    config: Option<PathBuf>,

    /// Scoring weights preset (balanced, strict, lenient)
    #[arg(long, global = true)]
    preset: Option<String>,

    /// Output format (auto detects TTY: table if interactive, summary otherwise)
    #[arg(short, long, global = true, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long, global = true)]
    output_file: Option<PathBuf>,
}

// ============================================================================
// Command argument structs
// ============================================================================

/// Input files shared by the scoring commands
#[derive(Parser)]
struct InputArgs {
    /// Recipes document (JSON or YAML: one recipe, a list, or {recipes: [...]})
    recipes: PathBuf,

    /// Pantry list (JSON/YAML list or one item per line); empty if omitted
    #[arg(short, long)]
    pantry: Option<PathBuf>,

    /// Preferences record (JSON or YAML); no preferences if omitted
    #[arg(long)]
    preferences: Option<PathBuf>,

    /// Exit with code 1 unless some recipe scores at least this
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    min_score: Option<u8>,
}

impl InputArgs {
    fn into_inputs(self) -> MatchInputs {
        MatchInputs {
            recipes: self.recipes,
            pantry: self.pantry,
            preferences: self.preferences,
        }
    }
}

/// Arguments for the `rank` subcommand
#[derive(Parser)]
struct RankArgs {
    #[command(flatten)]
    inputs: InputArgs,

    /// Show at most this many recipes
    #[arg(short = 'n', long)]
    limit: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score every recipe, in input order
    Score(InputArgs),

    /// Rank recipes best first
    Rank(RankArgs),

    /// Show the per-dimension breakdown of each recipe's score
    Explain(InputArgs),

    /// Print the tier for one or more scores
    Classify {
        /// Scores between 0 and 100
        #[arg(required = true)]
        scores: Vec<u8>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format (honors -O)
    ConfigSchema,

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .pantry-match.yaml in the current directory
    Init,
    /// List the named configuration presets
    Presets,
}

impl GlobalArgs {
    /// Layer the global flags and command options over the config file.
    fn effective_config(&self, min_score: Option<u8>, limit: Option<usize>) -> AppConfig {
        let overrides = AppConfig::builder()
            .output_format(self.output)
            .output_file(self.output_file.clone())
            .no_color(self.no_color)
            .quiet(self.quiet)
            .min_score(min_score)
            .limit(limit)
            .build();

        let (mut config, loaded_from) =
            AppConfig::from_file_with_overrides(self.config.as_deref(), &overrides);
        if let Some(path) = loaded_from {
            tracing::debug!("Loaded config from {}", path.display());
        }
        if let Some(preset) = &self.preset {
            config.scoring.preset.clone_from(preset);
            // An explicit preset replaces weights from the file.
            config.scoring.weights = None;
        }
        config
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.global.verbose {
        "debug"
    } else if cli.global.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    match run(cli) {
        Ok(exit_code) => {
            if exit_code != exit_codes::SUCCESS {
                std::process::exit(exit_code);
            }
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let Cli { global, command } = cli;

    // Dispatch to command handlers
    match command {
        Commands::Score(args) => {
            let config = global.effective_config(args.min_score, None);
            cli::run_score(args.into_inputs(), config)
        }

        Commands::Rank(args) => {
            let config = global.effective_config(args.inputs.min_score, args.limit);
            cli::run_rank(args.inputs.into_inputs(), config)
        }

        Commands::Explain(args) => {
            let config = global.effective_config(args.min_score, None);
            cli::run_explain(args.into_inputs(), config)
        }

        Commands::Classify { scores } => {
            let config = global.effective_config(None, None);
            cli::run_classify(&scores, &config)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "pantry-match", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema => {
            let schema = pantry_match::config::generate_json_schema()
                .context("failed to generate config schema")?;
            match global.output_file {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) =
                    pantry_match::config::load_or_default(global.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Path => {
                eprintln!("Config file search paths (in order):");
                for dir in pantry_match::config::config_search_dirs() {
                    eprintln!("  {}", dir.display());
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in pantry_match::config::CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match pantry_match::config::discover_config_file(global.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".pantry-match.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = pantry_match::config::generate_full_example_config();
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Presets => {
                for preset in ConfigPreset::all() {
                    println!("{:<10} {}", preset.name(), preset.description());
                }
                Ok(exit_codes::SUCCESS)
            }
        },
    }
}
