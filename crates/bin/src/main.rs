//! Cantera CLI binary.
//!
//! Command-line interface for the Cantera scoring engine: club rankings,
//! single-club predictions with counterfactual adjustments, head-to-head
//! match odds, and model artifact inspection.

mod integration;

use std::path::PathBuf;
use std::process;

use cantera_model::{
    FeatureRow, ModelBundle, ModelError, find_club_row, matchup, predict_score, rank_clubs,
    score_delta,
};
use cantera_output::{ExportFormat, Exporter, RankingSummary, format_rankings};
use clap::{Parser, Subcommand};

use integration::pipeline::{CLUB_COLUMN, load_joined_table};

#[derive(Parser)]
#[command(name = "cantera")]
#[command(about = "Cantera: LaLiga club analytics and scoring", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank all clubs by predicted investment score
    Rank {
        /// Root of the cleaned dataset directory
        #[arg(long)]
        data_dir: PathBuf,

        /// Path to the model artifact (JSON)
        #[arg(long)]
        model: PathBuf,

        /// Only show the top N clubs
        #[arg(long)]
        top: Option<usize>,

        /// Write the full ranking to this file
        #[arg(long)]
        output: Option<PathBuf>,

        /// Export format: csv, json or pretty-json
        #[arg(long, default_value = "csv")]
        format: String,
    },

    /// Predict the score for one club, optionally with adjusted metrics
    Predict {
        /// Root of the cleaned dataset directory
        #[arg(long)]
        data_dir: PathBuf,

        /// Path to the model artifact (JSON)
        #[arg(long)]
        model: PathBuf,

        /// Club to score; omit to score a custom club built from --set
        #[arg(long)]
        club: Option<String>,

        /// Override a metric, e.g. --set WinRate=0.6 (repeatable)
        #[arg(long = "set", value_parser = parse_override)]
        overrides: Vec<(String, f64)>,
    },

    /// Predict a head-to-head matchup with the Log5 formula
    Matchup {
        /// Root of the cleaned dataset directory
        #[arg(long)]
        data_dir: PathBuf,

        /// Path to the sporting model artifact (JSON)
        #[arg(long)]
        model: PathBuf,

        /// Home club
        #[arg(long)]
        home: String,

        /// Away club
        #[arg(long)]
        away: String,
    },

    /// Print the joined feature table
    Table {
        /// Root of the cleaned dataset directory
        #[arg(long)]
        data_dir: PathBuf,
    },

    /// Show a model artifact's features, metrics and importances
    ModelInfo {
        /// Path to the model artifact (JSON)
        #[arg(long)]
        model: PathBuf,
    },
}

/// Accept either a full club name or its short code (e.g. `RMA`).
fn resolve_club(league: &cantera::LaLiga, input: &str) -> String {
    league
        .name_for_code(input)
        .map_or_else(|| input.to_string(), str::to_string)
}

fn parse_override(s: &str) -> Result<(String, f64), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected FEATURE=VALUE, got '{s}'"))?;
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|e| format!("invalid value in '{s}': {e}"))?;
    Ok((name.trim().to_string(), value))
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Rank {
            data_dir,
            model,
            top,
            output,
            format,
        } => {
            let dir = cantera_data::DatasetDir::new(data_dir);
            let table = load_joined_table(&dir)?;
            let bundle = ModelBundle::load(&model)?;

            let rankings = rank_clubs(&table, &bundle, CLUB_COLUMN)?;
            print!("{}", format_rankings(&rankings, top));
            if let Some(summary) = RankingSummary::from_rankings(&rankings, bundle.metric("test_r2"))
            {
                println!("\n{summary}");
            }

            if let Some(path) = output {
                let format = ExportFormat::parse(&format)?;
                rankings.export_to_file(&path, format)?;
                println!("Ranking written to {}", path.display());
            }
            Ok(())
        }

        Commands::Predict {
            data_dir,
            model,
            club,
            overrides,
        } => {
            let bundle = ModelBundle::load(&model)?;

            match club {
                // Overrides on an existing club are a counterfactual
                // adjustment against its current metrics.
                Some(club) => {
                    let club = resolve_club(&cantera::LaLiga::new(), &club);
                    let dir = cantera_data::DatasetDir::new(data_dir);
                    let table = load_joined_table(&dir)?;
                    let idx = find_club_row(&table, CLUB_COLUMN, &club)?.ok_or_else(|| {
                        ModelError::UnknownClub { club: club.clone() }
                    })?;
                    let row = FeatureRow::from_frame(&table, idx)?;

                    let score = predict_score(&row, &bundle)?;
                    println!("Predicted score for {club}: {score:.2}");

                    if !overrides.is_empty() {
                        let modified = row.with_overrides(overrides);
                        let delta = score_delta(&row, &modified, &bundle)?;
                        println!(
                            "Adjusted score: {:.2} (delta {:+.2})",
                            delta.adjusted, delta.delta
                        );
                    }
                }
                // No club: score a custom club built entirely from --set.
                None => {
                    let mut row = FeatureRow::new();
                    for (name, value) in overrides {
                        row.insert(name, value);
                    }
                    let score = predict_score(&row, &bundle)?;
                    println!("Predicted score for custom club: {score:.2}");
                }
            }
            Ok(())
        }

        Commands::Matchup {
            data_dir,
            model,
            home,
            away,
        } => {
            let league = cantera::LaLiga::new();
            let home = resolve_club(&league, &home);
            let away = resolve_club(&league, &away);

            let dir = cantera_data::DatasetDir::new(data_dir);
            let table = load_joined_table(&dir)?;
            let bundle = ModelBundle::load(&model)?;

            let result = matchup(&table, &bundle, CLUB_COLUMN, &home, &away)?;
            println!(
                "{} (strength {:.3}) vs {} (strength {:.3})",
                result.home, result.home_strength, result.away, result.away_strength
            );
            println!(
                "{}: {:.1}%  |  {}: {:.1}%",
                result.home,
                result.odds.home * 100.0,
                result.away,
                result.odds.away * 100.0
            );
            Ok(())
        }

        Commands::Table { data_dir } => {
            let dir = cantera_data::DatasetDir::new(data_dir);
            let table = load_joined_table(&dir)?;
            println!("{table}");
            Ok(())
        }

        Commands::ModelInfo { model } => {
            let bundle = ModelBundle::load(&model)?;

            println!("Features ({}):", bundle.features.len());
            for feature in &bundle.features {
                println!("  {feature}");
            }

            if !bundle.metrics.is_empty() {
                println!("Metrics:");
                let mut metrics: Vec<_> = bundle.metrics.iter().collect();
                metrics.sort_by(|a, b| a.0.cmp(b.0));
                for (name, value) in metrics {
                    println!("  {name}: {value:.4}");
                }
            }

            if !bundle.feature_importance.is_empty() {
                println!("Feature importance:");
                let mut importances = bundle.feature_importance.clone();
                importances.sort_by(|a, b| {
                    b.importance
                        .partial_cmp(&a.importance)
                        .unwrap_or(std::cmp::Ordering::Equal)
                });
                for fi in importances {
                    println!("  {:<24} {:.4}", fi.feature, fi.importance);
                }
            }
            Ok(())
        }
    }
}
