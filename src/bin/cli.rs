//! Racecard CLI - Command-line interface for race predictions

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use racecard::models::{RacePrediction, ValueRating, VenueDetailResponse};
use racecard::{validate_race, FactorWeights, Race, RacePredictor, ScoringEngine, VenueRepository};

#[derive(Parser)]
#[command(name = "racecard")]
#[command(author, version, about = "Horse race scoring and ranking CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the entrants of a race card
    Predict {
        /// Race card JSON file
        #[arg(short, long)]
        race: PathBuf,

        /// Venue name, id or alias
        #[arg(short, long)]
        venue: String,

        /// Factor weights JSON file
        #[arg(short, long)]
        weights: Option<PathBuf>,

        /// Print the prediction as JSON
        #[arg(long)]
        json: bool,
    },
    /// List known venues
    Venues,
    /// Show a venue profile
    Venue {
        /// Venue name, id or alias
        name: String,

        /// Trip distance in meters for adjustments and tips
        #[arg(short, long)]
        distance: Option<u32>,
    },
}

fn main() -> Result<()> {
    let level = std::env::var("LOG_LEVEL")
        .ok()
        .and_then(|l| l.parse::<Level>().ok())
        .unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set subscriber")?;

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Predict {
            race,
            venue,
            weights,
            json,
        }) => predict(&race, &venue, weights.as_deref(), json),
        Some(Commands::Venues) => {
            list_venues();
            Ok(())
        }
        Some(Commands::Venue { name, distance }) => show_venue(&name, distance),
        None => {
            println!("{}", "Racecard CLI".cyan().bold());
            println!("Use --help for usage information.");
            Ok(())
        }
    }
}

fn load_engine(weights: Option<&Path>) -> Result<ScoringEngine<'static>> {
    let Some(path) = weights else {
        return Ok(ScoringEngine::default());
    };

    let weights = FactorWeights::from_json_file(path)
        .with_context(|| format!("Failed to load weights from {:?}", path))?;
    info!("Using factor weights from {:?}", path);
    Ok(ScoringEngine::new(weights)?)
}

fn predict(race_path: &Path, venue: &str, weights: Option<&Path>, json: bool) -> Result<()> {
    let text = std::fs::read_to_string(race_path)
        .with_context(|| format!("Failed to read race card {:?}", race_path))?;
    let race: Race = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse race card {:?}", race_path))?;
    validate_race(&race).context("Invalid race card")?;

    let predictor = RacePredictor::new(load_engine(weights)?);
    let prediction = predictor.predict_race(&race, venue);

    if json {
        println!("{}", serde_json::to_string_pretty(&prediction)?);
    } else {
        print_prediction(&prediction);
    }
    Ok(())
}

fn print_prediction(prediction: &RacePrediction) {
    println!(
        "{}: Race {} - {} ({})",
        "Predicting".green(),
        prediction.race_number,
        prediction.race_name,
        prediction.venue_id.as_deref().unwrap_or("unknown venue")
    );
    println!();

    if prediction.predictions.is_empty() {
        println!("{}", "No active runners in this race.".red());
    } else {
        println!("{}", "Rankings:".yellow().bold());
        println!(
            "{:>4} {:>4} {:<22} {:>6} {:>7} {:>7} {:>10}",
            "Rank", "No", "Name", "Power", "Win", "Place", "Value"
        );
        println!("{}", "-".repeat(66));

        for (rank, p) in prediction.predictions.iter().enumerate() {
            let value = match p.value_rating {
                ValueRating::Excellent => "excellent".green().bold(),
                ValueRating::Good => "good".green(),
                ValueRating::Fair => "fair".normal(),
                ValueRating::Poor => "poor".red(),
            };
            println!(
                "{:>4} {:>4} {:<22} {:>6.1} {:>6.1}% {:>6.1}% {:>10}",
                rank + 1,
                p.number,
                truncate_name(&p.name, 22),
                p.power_score,
                p.win_probability,
                p.place_probability,
                value
            );
        }
        println!();

        println!("{}", "Insights:".yellow().bold());
        for p in &prediction.predictions {
            println!("  {}", p.analysis.bold());
            for s in &p.strengths {
                println!("    {} {}", "+".green(), s);
            }
            for c in &p.concerns {
                println!("    {} {}", "-".red(), c);
            }
        }
        println!();
    }

    if !prediction.surprises.is_empty() {
        println!(
            "{} {}",
            "Possible surprises:".yellow(),
            prediction.surprises.join(", ")
        );
        println!();
    }

    println!("{}", "Analysis:".yellow().bold());
    println!("{}", prediction.race_analysis);
}

fn list_venues() {
    let venues = VenueRepository::builtin().list();

    println!("{}", "Venues:".yellow().bold());
    println!("{:<16} {:<26} {:<20}", "Id", "Name", "Location");
    println!("{}", "-".repeat(62));
    for v in &venues {
        println!(
            "{:<16} {:<26} {:<20}",
            v.id,
            truncate_name(&v.name, 26),
            v.location
        );
    }
    println!();
    println!("Total: {} venues", venues.len());
}

fn show_venue(name: &str, distance: Option<u32>) -> Result<()> {
    let profile = VenueRepository::builtin()
        .resolve(name)
        .with_context(|| format!("Unknown venue: {}", name))?;
    let detail = VenueDetailResponse::new(profile, distance);

    println!(
        "{} ({}) - {}",
        profile.name.cyan().bold(),
        profile.id,
        profile.location
    );
    println!("{}", "-".repeat(50));
    for s in &profile.surfaces {
        println!(
            "{:<10} {:>5}m round, {:>4}m straight, {:>3}m wide",
            s.kind.as_str(),
            s.circumference,
            s.home_straight,
            s.width
        );
    }
    println!(
        "Draw advantage: inside {:+.2}, middle {:+.2}, outside {:+.2}",
        profile.positional.inside, profile.positional.middle, profile.positional.outside
    );

    if let Some(adj) = &detail.adjustments {
        println!();
        println!("{}", "Trip profile:".yellow().bold());
        println!(
            "{} on {}: stamina {}/10, speed {}/10, acceleration {}/10",
            adj.category.describe(),
            adj.surface.kind.as_str(),
            adj.stamina_required,
            adj.speed_importance,
            adj.acceleration_importance
        );
        if !adj.special_factors.is_empty() {
            println!("Special factors: {}", adj.special_factors.join(", "));
        }
    }

    if !detail.tips.is_empty() {
        println!();
        println!("{}", "Tips:".yellow().bold());
        for tip in &detail.tips {
            println!("  - {}", tip);
        }
    }
    Ok(())
}

fn truncate_name(name: &str, max_len: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_len {
        name.to_string()
    } else {
        chars[..max_len - 1].iter().collect::<String>() + "…"
    }
}
