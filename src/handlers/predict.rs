use actix_web::{web, HttpResponse};
use std::sync::Arc;
use tracing::info;

use crate::AppState;
use racecard::error::{validate_race, AppError};
use racecard::models::PredictRequest;

/// Rank the entrants of a race at the given venue
pub async fn predict_race(
    state: web::Data<Arc<AppState>>,
    req: web::Json<PredictRequest>,
) -> Result<HttpResponse, AppError> {
    validate_race(&req.race)?;

    let prediction = state.predictor.predict_race(&req.race, &req.venue);
    info!(
        "Predicted race {} at {} ({} active runners)",
        prediction.race_number,
        prediction.venue_id.as_deref().unwrap_or("unknown venue"),
        prediction.predictions.len()
    );

    Ok(HttpResponse::Ok().json(prediction))
}
