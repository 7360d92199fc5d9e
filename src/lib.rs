//! Racecard - horse race scoring and ranking engine
//!
//! This library provides:
//! - A seventeen-factor power score per entrant with configurable weights
//! - Venue profiles with draw bias, pace bias and trip characteristics
//! - Heuristic win/place confidence and rule-based insights
//! - Ranked race predictions with withdrawal and walkover handling
//!
//! # Example
//!
//! ```no_run
//! use racecard::models::Race;
//!
//! let json = std::fs::read_to_string("race.json").unwrap();
//! let race: Race = serde_json::from_str(&json).unwrap();
//! let prediction = racecard::predict_race(&race, "Meydan");
//! for p in &prediction.predictions {
//!     println!("{} {:.1}", p.name, p.power_score);
//! }
//! ```

pub mod core;
pub mod data;
pub mod error;
pub mod models;
pub mod predictor;

// Re-export commonly used types
pub use crate::core::{FactorWeights, ScoringEngine};
pub use data::{VenueProfile, VenueRepository};
pub use error::{validate_race, EngineError};
pub use models::{Entrant, EntrantPrediction, FactorSet, Participation, Race, RacePrediction};
pub use predictor::{predict_race, RacePredictor};
