use tracing::{debug, warn};

use crate::core::{
    entrant_analysis, generate_insights, place_probability, race_analysis, value_rating,
    win_probability, RaceContext, ScoringEngine,
};
use crate::data::{VenueProfile, VenueRepository};
use crate::models::{
    Entrant, EntrantPrediction, FactorSet, Participation, Race, RacePrediction, ValueRating,
};

/// Active runners once withdrawals and non-runners are filtered out
enum Field<'r> {
    Empty,
    Walkover(&'r Entrant),
    Contested(Vec<&'r Entrant>),
}

impl<'r> Field<'r> {
    fn of(race: &'r Race) -> Self {
        let mut active: Vec<&Entrant> = race
            .entrants
            .iter()
            .filter(|e| e.status.is_active())
            .collect();

        match active.len() {
            0 => Field::Empty,
            1 => Field::Walkover(active.remove(0)),
            _ => Field::Contested(active),
        }
    }
}

/// Race-level predictor combining the scoring engine with venue profiles
#[derive(Debug, Clone)]
pub struct RacePredictor<'t> {
    engine: ScoringEngine<'t>,
    venues: &'t VenueRepository,
}

impl RacePredictor<'static> {
    pub fn new(engine: ScoringEngine<'static>) -> Self {
        Self::with_venues(engine, VenueRepository::builtin())
    }
}

impl Default for RacePredictor<'static> {
    fn default() -> Self {
        Self::new(ScoringEngine::default())
    }
}

impl<'t> RacePredictor<'t> {
    pub fn with_venues(engine: ScoringEngine<'t>, venues: &'t VenueRepository) -> Self {
        Self { engine, venues }
    }

    pub fn engine(&self) -> &ScoringEngine<'t> {
        &self.engine
    }

    pub fn venues(&self) -> &'t VenueRepository {
        self.venues
    }

    /// Predict a race at the named venue
    ///
    /// An unknown venue is not an error: venue-dependent factors fall back
    /// to neutral values.
    pub fn predict_race(&self, race: &Race, venue_name: &str) -> RacePrediction {
        let venue = self.venues.resolve(venue_name);
        if venue.is_none() {
            warn!(
                venue = venue_name,
                race = race.number,
                "Unknown venue, using neutral venue factors"
            );
        }
        self.predict_with_profile(race, venue)
    }

    pub fn predict_with_profile(
        &self,
        race: &Race,
        venue: Option<&VenueProfile>,
    ) -> RacePrediction {
        let withdrawals = labels(race, Participation::Withdrawn);
        let non_runners = labels(race, Participation::NonRunner);
        let surprises: Vec<String> = race
            .entrants
            .iter()
            .filter(|e| e.status.is_active() && e.surprise)
            .map(Entrant::label)
            .collect();

        let field = Field::of(race);
        let (predictions, no_competitor) = match field {
            Field::Empty => (Vec::new(), None),
            Field::Walkover(entrant) => {
                (vec![walkover_prediction(entrant)], Some(entrant.name.clone()))
            }
            Field::Contested(active) => (self.rank(race, venue, &active), None),
        };

        debug!(
            race = race.number,
            venue = venue.map(|v| v.id.as_str()).unwrap_or("unknown"),
            active = predictions.len(),
            withdrawn = withdrawals.len(),
            non_runners = non_runners.len(),
            "Scored race"
        );

        RacePrediction {
            race_number: race.number,
            race_name: race.name.clone(),
            race_time: race.time.clone(),
            distance: race.distance,
            surface: race.surface,
            going: race.going.clone(),
            venue_id: venue.map(|v| v.id.clone()),
            race_analysis: race_analysis(race, &predictions, &withdrawals, &non_runners),
            predictions,
            withdrawals,
            non_runners,
            no_competitor,
            surprises,
        }
    }

    /// Score, sort and attach probabilities to a contested field
    fn rank(
        &self,
        race: &Race,
        venue: Option<&VenueProfile>,
        active: &[&Entrant],
    ) -> Vec<EntrantPrediction> {
        let ctx = RaceContext::new(race, venue, active.len());

        let mut scored: Vec<(&Entrant, FactorSet, f64)> = active
            .iter()
            .map(|&entrant| {
                let factors = self.engine.score(entrant, &ctx);
                let power = round_tenth(self.engine.combine(&factors));
                (entrant, factors, power)
            })
            .collect();

        // stable: equal scores keep card order
        scored.sort_by(|a, b| b.2.total_cmp(&a.2));

        scored
            .into_iter()
            .enumerate()
            .map(|(rank, (entrant, factors, power))| {
                let (strengths, concerns) = generate_insights(entrant, &factors);
                EntrantPrediction {
                    win_probability: win_probability(power, active.len(), rank),
                    place_probability: place_probability(power, active.len(), rank),
                    value_rating: value_rating(entrant.odds.as_deref(), power),
                    strengths,
                    concerns,
                    analysis: entrant_analysis(entrant, power),
                    ..base_prediction(entrant, power, factors)
                }
            })
            .collect()
    }
}

/// Predict a race with the default engine and built-in venues
pub fn predict_race(race: &Race, venue_name: &str) -> RacePrediction {
    RacePredictor::default().predict_race(race, venue_name)
}

fn labels(race: &Race, status: Participation) -> Vec<String> {
    race.entrants
        .iter()
        .filter(|e| e.status == status)
        .map(Entrant::label)
        .collect()
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn base_prediction(entrant: &Entrant, power: f64, factors: FactorSet) -> EntrantPrediction {
    EntrantPrediction {
        number: entrant.number,
        name: entrant.name.clone(),
        jockey: entrant.jockey.clone(),
        trainer: entrant.trainer.clone(),
        rating: entrant.rating,
        draw: entrant.draw,
        weight: entrant.weight,
        form: entrant.form.clone(),
        power_score: power,
        win_probability: 0.0,
        place_probability: 0.0,
        value_rating: ValueRating::Fair,
        strengths: Vec::new(),
        concerns: Vec::new(),
        analysis: String::new(),
        factors,
        status: entrant.status,
        is_favorite: entrant.favorite,
        is_surprise: entrant.surprise,
        has_no_competitor: false,
    }
}

/// Sole active runner: no scoring, certain pick
fn walkover_prediction(entrant: &Entrant) -> EntrantPrediction {
    EntrantPrediction {
        win_probability: 100.0,
        place_probability: 100.0,
        strengths: vec![
            "only runner in the race".to_string(),
            "no competition".to_string(),
        ],
        analysis: "no competitor - automatic pick for first place".to_string(),
        has_no_competitor: true,
        ..base_prediction(entrant, 100.0, FactorSet::neutral())
    }
}
