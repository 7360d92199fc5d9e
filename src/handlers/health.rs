use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::AppState;
use racecard::models::HealthResponse;

/// Health check endpoint
pub async fn health_check(state: web::Data<Arc<AppState>>) -> impl Responder {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        venues_loaded: state.predictor.venues().len(),
    };

    HttpResponse::Ok().json(response)
}
