use clap::{Parser, Subcommand};
use std::path::PathBuf;

use pharmtech_fit::catalog::Catalog;
use pharmtech_fit::config::OutputFormat;
use pharmtech_fit::scoring::{ScoringConfig, ScoringTables};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Take the assessment interactively (default if no subcommand)
    Take,
    /// Score a saved answer sheet (.yaml, .yml or .json)
    Score {
        /// Answers as a list of {question_id, value} or a map of id: value
        answers: PathBuf,
    },
    /// List every question in the catalog
    Questions,
}

#[derive(Parser, Debug)]
#[command(name = "pharmtech-fit")]
#[command(about = "Pharmacy technician career fit assessment", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging and the per-question score breakdown
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/pharmtech-fit/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Output format for results (overrides config)
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Take);

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match pharmtech_fit::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(e) = pharmtech_fit::telemetry::init(config.log_level.as_deref(), cli.verbose) {
        eprintln!("Config error: {:#}", e);
        std::process::exit(EXIT_CONFIG);
    }

    // Validate catalog and scoring tables at startup
    if let Err(errors) = pharmtech_fit::scoring::validate_scoring(
        Catalog::builtin(),
        ScoringTables::builtin(),
        &ScoringConfig::default(),
    ) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let format = cli.format.unwrap_or(config.format);
    let use_colors = pharmtech_fit::output::should_use_colors(config.color);

    match command {
        Commands::Take => {
            if let Err(e) = pharmtech_fit::interactive::run_assessment(use_colors, cli.verbose, format) {
                eprintln!("Error: {:#}", e);
                std::process::exit(EXIT_INPUT);
            }
        }
        Commands::Score { answers } => {
            let sheet = match pharmtech_fit::answers::load_answers(&answers) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Error: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };

            tracing::info!(answers = sheet.len(), "scoring answer sheet");
            let results = pharmtech_fit::scoring::calculate_scores(
                &sheet,
                Catalog::builtin(),
                ScoringTables::builtin(),
                &ScoringConfig::default(),
            );

            match format {
                OutputFormat::Text => {
                    println!(
                        "{}",
                        pharmtech_fit::output::format_results(&results, use_colors, cli.verbose)
                    );
                }
                OutputFormat::Json => match pharmtech_fit::output::format_results_json(&results) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error: {:#}", e);
                        std::process::exit(EXIT_INPUT);
                    }
                },
            }
        }
        Commands::Questions => {
            println!(
                "{}",
                pharmtech_fit::output::format_catalog(Catalog::builtin(), use_colors)
            );
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
