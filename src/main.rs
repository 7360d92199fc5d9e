use actix_web::{middleware, web, App, HttpServer};
use std::sync::Arc;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

mod handlers;

use handlers::{health, predict, venues};
use racecard::{FactorWeights, RacePredictor, ScoringEngine};

/// Application state shared across handlers
pub struct AppState {
    pub predictor: RacePredictor<'static>,
}

/// Scoring engine from WEIGHTS_FILE, or the default weights
fn load_engine() -> ScoringEngine<'static> {
    let Ok(path) = std::env::var("WEIGHTS_FILE") else {
        return ScoringEngine::default();
    };

    let loaded = FactorWeights::from_json_file(&path)
        .and_then(|w| ScoringEngine::new(w).map_err(anyhow::Error::from));
    match loaded {
        Ok(engine) => {
            info!("Loaded factor weights from {}", path);
            engine
        }
        Err(e) => {
            warn!("Failed to load weights from {}: {}. Using default weights.", path, e);
            ScoringEngine::default()
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logging
    let level = std::env::var("LOG_LEVEL")
        .ok()
        .and_then(|l| l.parse::<Level>().ok())
        .unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");

    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let addr = format!("{}:{}", host, port);

    let predictor = RacePredictor::new(load_engine());
    info!("{} venue profiles loaded", predictor.venues().len());

    let app_state = Arc::new(AppState { predictor });

    info!("Starting Racecard API server at http://{}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(middleware::Logger::default())
            .route("/health", web::get().to(health::health_check))
            .route("/venues", web::get().to(venues::list_venues))
            .route("/venues/{name}", web::get().to(venues::venue_detail))
            .route("/predict", web::post().to(predict::predict_race))
    })
    .bind(&addr)?
    .run()
    .await
}
