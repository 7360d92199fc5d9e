//! Core scoring logic

pub mod insights;
pub mod probability;
pub mod scoring;
pub mod weights;

// Re-export commonly used types
pub use insights::{entrant_analysis, generate_insights, race_analysis, value_rating};
pub use probability::{place_probability, win_probability};
pub use scoring::{RaceContext, ScoringEngine};
pub use weights::FactorWeights;
