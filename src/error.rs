use std::collections::HashSet;
use thiserror::Error;

use crate::models::Race;

/// Engine configuration and input-shape errors
///
/// The prediction path itself never fails; these are raised by weight
/// configuration and by request validation before a race reaches the engine.
#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    #[error("factor weights must sum to 1.0, got {sum:.4}")]
    UnbalancedWeights { sum: f64 },

    #[error("entrant number {0} appears more than once")]
    DuplicateEntrant(u32),

    #[error("race has no entrants")]
    EmptyRace,

    #[error("unknown venue: {0}")]
    UnknownVenue(String),
}

/// Check the structural shape of a race card
pub fn validate_race(race: &Race) -> Result<(), EngineError> {
    if race.entrants.is_empty() {
        return Err(EngineError::EmptyRace);
    }

    let mut seen = HashSet::with_capacity(race.entrants.len());
    for entrant in &race.entrants {
        if !seen.insert(entrant.number) {
            return Err(EngineError::DuplicateEntrant(entrant.number));
        }
    }
    Ok(())
}

#[cfg(feature = "api")]
pub use api::AppError;

#[cfg(feature = "api")]
mod api {
    use actix_web::{http::StatusCode, HttpResponse, ResponseError};
    use std::fmt;

    use super::EngineError;
    use crate::models::ErrorResponse;

    /// Application error types
    #[derive(Debug)]
    pub enum AppError {
        /// Invalid request data
        ValidationError(String),
        /// Unknown venue or resource
        NotFound(String),
        /// Internal server error
        InternalError(String),
    }

    impl fmt::Display for AppError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
                AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
                AppError::InternalError(msg) => write!(f, "Internal error: {}", msg),
            }
        }
    }

    impl std::error::Error for AppError {}

    impl From<EngineError> for AppError {
        fn from(err: EngineError) -> Self {
            match err {
                EngineError::UnknownVenue(_) => AppError::NotFound(err.to_string()),
                EngineError::UnbalancedWeights { .. } => AppError::InternalError(err.to_string()),
                EngineError::DuplicateEntrant(_) | EngineError::EmptyRace => {
                    AppError::ValidationError(err.to_string())
                }
            }
        }
    }

    impl ResponseError for AppError {
        fn status_code(&self) -> StatusCode {
            match self {
                AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
                AppError::NotFound(_) => StatusCode::NOT_FOUND,
                AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            }
        }

        fn error_response(&self) -> HttpResponse {
            let (error_code, message) = match self {
                AppError::ValidationError(msg) => ("validation_error", msg.clone()),
                AppError::NotFound(msg) => ("not_found", msg.clone()),
                AppError::InternalError(msg) => ("internal_error", msg.clone()),
            };

            HttpResponse::build(self.status_code()).json(ErrorResponse {
                error: error_code.to_string(),
                message,
            })
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Entrant, Participation, Surface};

    fn entrant(number: u32) -> Entrant {
        Entrant {
            number,
            name: format!("Runner {}", number),
            jockey: String::new(),
            trainer: String::new(),
            rating: None,
            weight: None,
            draw: None,
            age: None,
            sex: String::new(),
            form: String::new(),
            sire: None,
            odds: None,
            status: Participation::Active,
            favorite: false,
            surprise: false,
        }
    }

    fn race(entrants: Vec<Entrant>) -> Race {
        Race {
            number: 1,
            name: "Test Stakes".to_string(),
            time: "19:00".to_string(),
            distance: 1600,
            surface: Surface::Dirt,
            going: "Fast".to_string(),
            race_type: String::new(),
            race_class: String::new(),
            prize: 0.0,
            entrants,
        }
    }

    #[test]
    fn test_validate_race_valid() {
        assert!(validate_race(&race(vec![entrant(1), entrant(2)])).is_ok());
    }

    #[test]
    fn test_validate_race_duplicate_number() {
        assert_eq!(
            validate_race(&race(vec![entrant(1), entrant(2), entrant(1)])),
            Err(EngineError::DuplicateEntrant(1))
        );
    }

    #[test]
    fn test_validate_race_empty() {
        assert_eq!(validate_race(&race(Vec::new())), Err(EngineError::EmptyRace));
    }

    #[test]
    fn test_engine_error_display() {
        let err = EngineError::UnbalancedWeights { sum: 1.05 };
        assert_eq!(err.to_string(), "factor weights must sum to 1.0, got 1.0500");
    }
}
