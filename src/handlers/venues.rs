use actix_web::{web, HttpResponse};
use serde::Deserialize;
use std::sync::Arc;

use crate::AppState;
use racecard::error::{AppError, EngineError};
use racecard::models::VenueDetailResponse;

#[derive(Debug, Deserialize)]
pub struct VenueQuery {
    pub distance: Option<u32>,
}

/// List all known venues
pub async fn list_venues(state: web::Data<Arc<AppState>>) -> HttpResponse {
    HttpResponse::Ok().json(state.predictor.venues().list())
}

/// Venue profile, with adjustments and tips when a distance is given
pub async fn venue_detail(
    state: web::Data<Arc<AppState>>,
    path: web::Path<String>,
    query: web::Query<VenueQuery>,
) -> Result<HttpResponse, AppError> {
    let name = path.into_inner();
    let profile = state
        .predictor
        .venues()
        .resolve(&name)
        .ok_or(EngineError::UnknownVenue(name))?;

    Ok(HttpResponse::Ok().json(VenueDetailResponse::new(profile, query.distance)))
}
