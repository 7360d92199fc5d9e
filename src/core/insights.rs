//! Rule-based strengths, concerns and short analysis text
//!
//! Every string emitted here comes from a fixed rule table so the same
//! inputs always produce the same wording.

use crate::data::{parse_odds, DistanceCategory};
use crate::models::{Entrant, EntrantPrediction, FactorSet, Race, ValueRating};

/// Carried weight above which a concern is raised (kg)
const HEAVY_WEIGHT_KG: f64 = 62.0;
const ADVANCED_AGE: u32 = 10;

/// Strengths and concerns for one scored entrant
pub fn generate_insights(entrant: &Entrant, factors: &FactorSet) -> (Vec<String>, Vec<String>) {
    let strength_rules = [
        (factors.form > 70.0, "excellent recent form"),
        (factors.jockey > 90.0, "top-class jockey"),
        (factors.trainer > 90.0, "trainer with an excellent record"),
        (factors.speed > 75.0, "high speed rating"),
        (factors.distance > 70.0, "well suited to the distance"),
        (factors.surface > 70.0, "thrives on this surface"),
        (factors.draw > 60.0, "favourable starting position"),
        (factors.pedigree > 70.0, "strong pedigree"),
        (factors.market > 70.0, "strong market support"),
        (entrant.favorite, "race favourite"),
        (entrant.surprise, "possible surprise"),
    ];

    let concern_rules = [
        (factors.form < 40.0, "poor recent form"),
        (factors.distance < 40.0, "distance may not suit"),
        (factors.surface < 40.0, "surface not preferred"),
        (factors.draw < 40.0, "difficult starting position"),
        (factors.jockey < 70.0, "relatively inexperienced jockey"),
        (
            entrant.weight.is_some_and(|w| w > HEAVY_WEIGHT_KG),
            "heavy weight concern",
        ),
        (
            entrant.age.is_some_and(|a| a > ADVANCED_AGE),
            "advanced age",
        ),
    ];

    (fired(&strength_rules), fired(&concern_rules))
}

fn fired(rules: &[(bool, &str)]) -> Vec<String> {
    rules
        .iter()
        .filter(|(hit, _)| *hit)
        .map(|(_, text)| text.to_string())
        .collect()
}

/// Judge whether the market price offers value for the entrant's power
pub fn value_rating(odds: Option<&str>, power_score: f64) -> ValueRating {
    let Some(odds) = odds.and_then(parse_odds) else {
        return ValueRating::Fair;
    };

    if (power_score > 75.0 && odds > 4.0) || (power_score > 70.0 && odds > 5.0) {
        ValueRating::Excellent
    } else if (power_score > 65.0 && odds > 6.0) || (power_score > 55.0 && odds > 8.0) {
        ValueRating::Good
    } else if power_score < 50.0 && odds < 3.0 {
        ValueRating::Poor
    } else {
        ValueRating::Fair
    }
}

/// One-line summary for an entrant
pub fn entrant_analysis(entrant: &Entrant, power_score: f64) -> String {
    let mut text = format!("{}: power score {:.1}/100", entrant.label(), power_score);
    if entrant.favorite {
        text.push_str(" | favourite");
    }
    if entrant.surprise {
        text.push_str(" | possible surprise");
    }
    text
}

/// Multi-line overview of the race and the top pick
pub fn race_analysis(
    race: &Race,
    predictions: &[EntrantPrediction],
    withdrawals: &[String],
    non_runners: &[String],
) -> String {
    let mut lines = vec![format!("Race {} - {}", race.number, race.name)];
    lines.push(format!(
        "{}m {} ({}), {} runners",
        race.distance,
        race.surface.as_str(),
        DistanceCategory::from_meters(race.distance).as_str(),
        predictions.len()
    ));

    match predictions.first() {
        Some(top) => {
            lines.push(format!(
                "top pick: {}. {} (power score {:.1}/100)",
                top.number, top.name, top.power_score
            ));
            lines.push(format!("jockey: {} | trainer: {}", top.jockey, top.trainer));
        }
        None => lines.push("no active runners".to_string()),
    }

    if !withdrawals.is_empty() {
        lines.push(format!("withdrawn: {}", withdrawals.join(", ")));
    }
    if !non_runners.is_empty() {
        lines.push(format!("non-runners: {}", non_runners.join(", ")));
    }

    lines.join("\n")
}
