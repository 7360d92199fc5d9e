//! Seventeen-factor scoring engine
//!
//! Each factor is a 0-100 sub-score derived from the entrant, the race and
//! (when known) the venue profile. Missing inputs fall back to the neutral
//! 50. The power score is the weighted sum of the factors, clamped to
//! [0, 100]. Scoring is pure: no clock, no randomness, no I/O.

use tracing::trace;

use crate::core::weights::FactorWeights;
use crate::data::{
    parse_odds, Aptitude, DistanceCategory, FormLine, PaceBias, ReferenceTables, SireRecord,
    SurfaceKind, VenueProfile,
};
use crate::error::EngineError;
use crate::models::{clamp_score, Entrant, FactorSet, Race};

const NEUTRAL: f64 = 50.0;

/// Recency weights for the last five runs, most recent first
const FORM_WEIGHTS: [f64; 5] = [1.0, 0.85, 0.7, 0.55, 0.4];
/// Baseline carried weight in kg
const BASE_WEIGHT_KG: f64 = 58.0;
/// Runs considered for the trend factor
const TREND_RUNS: usize = 4;

/// Race-level inputs shared by every entrant's scoring
#[derive(Debug, Clone, Copy)]
pub struct RaceContext<'a> {
    pub race: &'a Race,
    pub venue: Option<&'a VenueProfile>,
    /// Runners left after withdrawals and non-runners
    pub active_field: usize,
    pub category: DistanceCategory,
    pub surface: SurfaceKind,
}

impl<'a> RaceContext<'a> {
    pub fn new(race: &'a Race, venue: Option<&'a VenueProfile>, active_field: usize) -> Self {
        Self {
            race,
            venue,
            active_field,
            category: DistanceCategory::from_meters(race.distance),
            surface: SurfaceKind::from_race_surface(race.surface),
        }
    }

    fn is_handicap(&self) -> bool {
        self.race.race_type.to_lowercase().contains("handicap")
    }

    fn race_surface_suits(&self, sire: &SireRecord) -> bool {
        self.race
            .surface
            .as_str()
            .to_lowercase()
            .contains(sire.surface.as_str())
    }

    fn venue_surface(&self) -> Option<SurfaceKind> {
        self.venue
            .and_then(|v| v.surface_for(Some(self.surface)))
            .map(|s| s.kind)
    }
}

/// Factor scorer with its weight vector and reference tables
#[derive(Debug, Clone)]
pub struct ScoringEngine<'t> {
    weights: FactorWeights,
    tables: &'t ReferenceTables,
}

impl ScoringEngine<'static> {
    /// Engine over the built-in reference tables
    pub fn new(weights: FactorWeights) -> Result<Self, EngineError> {
        Self::with_tables(weights, ReferenceTables::builtin())
    }
}

impl Default for ScoringEngine<'static> {
    fn default() -> Self {
        Self {
            weights: FactorWeights::default(),
            tables: ReferenceTables::builtin(),
        }
    }
}

impl<'t> ScoringEngine<'t> {
    pub fn with_tables(
        weights: FactorWeights,
        tables: &'t ReferenceTables,
    ) -> Result<Self, EngineError> {
        weights.validate()?;
        Ok(Self { weights, tables })
    }

    pub fn weights(&self) -> &FactorWeights {
        &self.weights
    }

    pub fn tables(&self) -> &'t ReferenceTables {
        self.tables
    }

    /// Compute all 17 factors for one entrant
    pub fn score(&self, entrant: &Entrant, ctx: &RaceContext<'_>) -> FactorSet {
        let form = FormLine::parse(&entrant.form);
        let sire = entrant
            .sire
            .as_deref()
            .and_then(|name| self.tables.sire(name));

        let factors = FactorSet {
            speed: speed_score(entrant),
            form: form_score(&form),
            class: class_score(entrant, ctx),
            jockey: self.tables.jockey_rating(&entrant.jockey),
            trainer: self.tables.trainer_rating(&entrant.trainer),
            distance: distance_score(&form, sire, ctx),
            surface: surface_score(&form, sire, ctx),
            going: going_score(&form, ctx),
            draw: draw_score(entrant, ctx),
            weight: weight_score(entrant),
            pace: pace_score(&form, ctx),
            pedigree: pedigree_score(entrant, sire, ctx),
            course: course_score(&form),
            recency: recency_score(&form),
            equipment: NEUTRAL,
            trend: trend_score(&form),
            market: market_score(entrant),
        }
        .clamped();

        trace!(entrant = entrant.number, ?factors, "scored entrant");
        factors
    }

    /// Weighted power score in [0, 100]
    pub fn combine(&self, factors: &FactorSet) -> f64 {
        clamp_score(self.weights.weighted_sum(factors))
    }
}

fn speed_score(entrant: &Entrant) -> f64 {
    let mut score = entrant.rating.map_or(NEUTRAL, |r| r.min(100.0));
    if entrant.favorite {
        score += 5.0;
    }
    score
}

fn placing_points(placing: u8) -> f64 {
    match placing {
        1 => 25.0,
        2 => 18.0,
        3 => 12.0,
        p if p <= 5 => 6.0,
        _ => 1.0,
    }
}

fn form_score(form: &FormLine) -> f64 {
    if form.is_empty() {
        return NEUTRAL;
    }

    let score: f64 = form
        .placings()
        .iter()
        .zip(FORM_WEIGHTS)
        .map(|(&placing, weight)| placing_points(placing) * weight)
        .sum();
    score.min(100.0)
}

fn class_score(entrant: &Entrant, ctx: &RaceContext<'_>) -> f64 {
    match entrant.rating {
        Some(rating) => {
            let mut score = 40.0 + (rating - 60.0) * 1.5;
            if ctx.is_handicap() && rating > 80.0 {
                score += 5.0;
            }
            score
        }
        None => NEUTRAL,
    }
}

fn distance_score(form: &FormLine, sire: Option<&SireRecord>, ctx: &RaceContext<'_>) -> f64 {
    let mut score = NEUTRAL + form.wins() as f64 * 5.0 + form.places() as f64 * 3.0;
    if let Some(sire) = sire {
        if sire.distance == ctx.category || sire.distance == DistanceCategory::Middle {
            score += 8.0;
        }
    }
    score
}

fn surface_score(form: &FormLine, sire: Option<&SireRecord>, ctx: &RaceContext<'_>) -> f64 {
    let mut score = NEUTRAL;
    if let Some(sire) = sire {
        if ctx.venue_surface() == Some(sire.surface) {
            score += 15.0;
        }
        if ctx.race_surface_suits(sire) {
            score += 10.0;
        }
    }
    if form.wins() > 0 {
        score += 5.0;
    }
    score
}

fn going_score(form: &FormLine, ctx: &RaceContext<'_>) -> f64 {
    let going = ctx.race.going.to_lowercase();
    let mut score = NEUTRAL;
    if going.contains("fast") || going.contains("good") {
        score += 5.0;
    }
    if form.wins() > 0 {
        score += 5.0;
    }
    score
}

fn draw_score(entrant: &Entrant, ctx: &RaceContext<'_>) -> f64 {
    match (ctx.venue, entrant.draw) {
        (Some(venue), Some(draw)) if draw > 0 => {
            NEUTRAL + venue.draw_adjustment(draw, ctx.active_field, ctx.race.distance) * 100.0
        }
        _ => NEUTRAL,
    }
}

fn weight_score(entrant: &Entrant) -> f64 {
    entrant
        .weight
        .map_or(NEUTRAL, |w| NEUTRAL - (w - BASE_WEIGHT_KG) * 1.5)
}

fn pace_score(form: &FormLine, ctx: &RaceContext<'_>) -> f64 {
    let Some(venue) = ctx.venue else {
        return NEUTRAL;
    };

    match venue.pace_bias {
        PaceBias::Front if form.last_run_won() => NEUTRAL + 10.0,
        PaceBias::Hold if form.has_midfield_run() => NEUTRAL + 5.0,
        _ => NEUTRAL,
    }
}

fn pedigree_score(entrant: &Entrant, sire: Option<&SireRecord>, ctx: &RaceContext<'_>) -> f64 {
    let mut score = NEUTRAL;
    match entrant.age {
        Some(4..=6) => score += 10.0,
        Some(3..=8) => score += 5.0,
        Some(age) if age > 10 => score -= 8.0,
        _ => {}
    }

    if let Some(sire) = sire {
        if sire.distance == ctx.category {
            score += 8.0;
        } else if sire.distance == DistanceCategory::Middle {
            score += 4.0;
        }
        if ctx.race_surface_suits(sire) {
            score += 8.0;
        }
        if sire.aptitude == Aptitude::Class {
            score += 5.0;
        }
    }
    score
}

fn course_score(form: &FormLine) -> f64 {
    NEUTRAL + form.wins() as f64 * 8.0 + form.places() as f64 * 3.0
}

fn recency_score(form: &FormLine) -> f64 {
    if form.has_recent_runs() {
        NEUTRAL + 5.0
    } else {
        NEUTRAL
    }
}

/// Positive when recent placings are better (lower) than older ones
fn trend_score(form: &FormLine) -> f64 {
    let runs: Vec<f64> = form
        .placings()
        .iter()
        .take(TREND_RUNS)
        .map(|&p| p as f64)
        .collect();
    if runs.len() < 2 {
        return NEUTRAL;
    }

    let trend: f64 = runs.windows(2).map(|w| w[1] - w[0]).sum();
    NEUTRAL + trend * 5.0
}

fn market_score(entrant: &Entrant) -> f64 {
    let mut score = NEUTRAL;
    if entrant.favorite {
        score += 20.0;
    }

    if let Some(odds) = entrant.odds.as_deref().and_then(parse_odds) {
        score += match odds {
            o if o <= 2.0 => 15.0,
            o if o <= 4.0 => 10.0,
            o if o <= 6.0 => 5.0,
            o if o > 15.0 => -10.0,
            _ => 0.0,
        };
    }
    score
}
