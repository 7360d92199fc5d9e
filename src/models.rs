use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::data::{VenueAdjustments, VenueProfile};

/// Race-participation status of an entrant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Participation {
    #[default]
    Active,
    Withdrawn,
    #[serde(alias = "non-runner", alias = "nonrunner")]
    NonRunner,
}

impl Participation {
    pub fn is_active(self) -> bool {
        matches!(self, Participation::Active)
    }
}

/// Racing surface of a race
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Surface {
    #[default]
    Dirt,
    Turf,
    #[serde(rename = "All-Weather", alias = "AllWeather", alias = "all-weather")]
    AllWeather,
    Sand,
}

impl Surface {
    pub fn as_str(self) -> &'static str {
        match self {
            Surface::Dirt => "Dirt",
            Surface::Turf => "Turf",
            Surface::AllWeather => "All-Weather",
            Surface::Sand => "Sand",
        }
    }
}

/// Runner entry from the racecard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entrant {
    pub number: u32,
    pub name: String,
    #[serde(default)]
    pub jockey: String,
    #[serde(default)]
    pub trainer: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub rating: Option<f64>,
    /// Carried weight in kg
    #[serde(default, deserialize_with = "lenient_f64")]
    pub weight: Option<f64>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub draw: Option<u32>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub age: Option<u32>,
    #[serde(default)]
    pub sex: String,
    /// Recent placings, most recent first (e.g. "1-3-2")
    #[serde(default)]
    pub form: String,
    #[serde(default)]
    pub sire: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub odds: Option<String>,
    #[serde(default)]
    pub status: Participation,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub surprise: bool,
}

impl Entrant {
    /// "{number}. {name}" label used in withdrawal and surprise lists
    pub fn label(&self) -> String {
        format!("{}. {}", self.number, self.name)
    }
}

/// Race card with its entrants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Race {
    pub number: u32,
    pub name: String,
    #[serde(default)]
    pub time: String,
    /// Distance in meters
    pub distance: u32,
    #[serde(default)]
    pub surface: Surface,
    #[serde(default)]
    pub going: String,
    #[serde(default)]
    pub race_type: String,
    #[serde(default)]
    pub race_class: String,
    #[serde(default)]
    pub prize: f64,
    pub entrants: Vec<Entrant>,
}

/// The 17 sub-scores behind a power score, each in [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorSet {
    pub speed: f64,
    pub form: f64,
    pub class: f64,
    pub jockey: f64,
    pub trainer: f64,
    pub distance: f64,
    pub surface: f64,
    pub going: f64,
    pub draw: f64,
    pub weight: f64,
    pub pace: f64,
    pub pedigree: f64,
    pub course: f64,
    pub recency: f64,
    pub equipment: f64,
    pub trend: f64,
    pub market: f64,
}

impl FactorSet {
    pub const LEN: usize = 17;

    /// Every factor at the neutral midpoint
    pub fn neutral() -> Self {
        Self::from_array([50.0; Self::LEN])
    }

    /// Factors in declaration order
    pub fn as_array(&self) -> [f64; Self::LEN] {
        [
            self.speed,
            self.form,
            self.class,
            self.jockey,
            self.trainer,
            self.distance,
            self.surface,
            self.going,
            self.draw,
            self.weight,
            self.pace,
            self.pedigree,
            self.course,
            self.recency,
            self.equipment,
            self.trend,
            self.market,
        ]
    }

    pub fn from_array(v: [f64; Self::LEN]) -> Self {
        Self {
            speed: v[0],
            form: v[1],
            class: v[2],
            jockey: v[3],
            trainer: v[4],
            distance: v[5],
            surface: v[6],
            going: v[7],
            draw: v[8],
            weight: v[9],
            pace: v[10],
            pedigree: v[11],
            course: v[12],
            recency: v[13],
            equipment: v[14],
            trend: v[15],
            market: v[16],
        }
    }

    /// Copy with every factor forced into [0, 100]
    pub fn clamped(&self) -> Self {
        Self::from_array(self.as_array().map(clamp_score))
    }
}

/// Clamp a score into [0, 100], mapping NaN to the neutral 50
pub fn clamp_score(value: f64) -> f64 {
    if value.is_nan() {
        50.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// Odds-versus-quality judgement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueRating {
    Excellent,
    Good,
    Fair,
    Poor,
}

/// Prediction for a single entrant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntrantPrediction {
    pub number: u32,
    pub name: String,
    pub jockey: String,
    pub trainer: String,
    pub rating: Option<f64>,
    pub draw: Option<u32>,
    pub weight: Option<f64>,
    pub form: String,
    pub power_score: f64,
    pub win_probability: f64,
    pub place_probability: f64,
    pub value_rating: ValueRating,
    pub strengths: Vec<String>,
    pub concerns: Vec<String>,
    pub analysis: String,
    pub factors: FactorSet,
    pub status: Participation,
    pub is_favorite: bool,
    pub is_surprise: bool,
    pub has_no_competitor: bool,
}

/// Ranked prediction for a whole race
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RacePrediction {
    pub race_number: u32,
    pub race_name: String,
    pub race_time: String,
    pub distance: u32,
    pub surface: Surface,
    pub going: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue_id: Option<String>,
    pub predictions: Vec<EntrantPrediction>,
    pub race_analysis: String,
    pub withdrawals: Vec<String>,
    pub non_runners: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_competitor: Option<String>,
    pub surprises: Vec<String>,
}

/// Race prediction request
#[derive(Debug, Serialize, Deserialize)]
pub struct PredictRequest {
    pub venue: String,
    pub race: Race,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub venues_loaded: usize,
}

/// Venue detail with optional trip-specific adjustments
#[derive(Debug, Serialize, Deserialize)]
pub struct VenueDetailResponse {
    pub profile: VenueProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjustments: Option<VenueAdjustments>,
    pub tips: Vec<String>,
}

impl VenueDetailResponse {
    /// Adjustments and tips are only produced for a given trip distance
    pub fn new(profile: &VenueProfile, distance: Option<u32>) -> Self {
        Self {
            profile: profile.clone(),
            adjustments: distance.map(|d| profile.adjustments(d, None)),
            tips: distance.map(|d| profile.tips(d)).unwrap_or_default(),
        }
    }
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number_from_value))
}

fn lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(number_from_value)
        .filter(|n| *n >= 0.0 && n.fract() == 0.0 && *n <= u32::MAX as f64)
        .map(|n| n as u32))
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn number_from_value(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entrant_lenient_numbers() {
        let json = r#"{
            "number": 3,
            "name": "Desert Crown",
            "rating": "92",
            "weight": "heavy",
            "draw": 4.0,
            "age": null,
            "odds": 5
        }"#;
        let entrant: Entrant = serde_json::from_str(json).unwrap();

        assert_eq!(entrant.rating, Some(92.0));
        assert_eq!(entrant.weight, None);
        assert_eq!(entrant.draw, Some(4));
        assert_eq!(entrant.age, None);
        assert_eq!(entrant.odds.as_deref(), Some("5"));
        assert_eq!(entrant.status, Participation::Active);
        assert!(!entrant.favorite);
    }

    #[test]
    fn test_negative_draw_is_dropped() {
        let entrant: Entrant =
            serde_json::from_str(r#"{"number": 1, "name": "A", "draw": -2}"#).unwrap();
        assert_eq!(entrant.draw, None);
    }

    #[test]
    fn test_participation_serde() {
        let entrant: Entrant =
            serde_json::from_str(r#"{"number": 1, "name": "A", "status": "non_runner"}"#).unwrap();
        assert_eq!(entrant.status, Participation::NonRunner);
        assert!(!entrant.status.is_active());
    }

    #[test]
    fn test_surface_all_weather_names() {
        let s: Surface = serde_json::from_str(r#""All-Weather""#).unwrap();
        assert_eq!(s, Surface::AllWeather);
        assert_eq!(s.as_str(), "All-Weather");
        assert_eq!(
            serde_json::to_string(&Surface::AllWeather).unwrap(),
            r#""All-Weather""#
        );
    }

    #[test]
    fn test_factor_set_clamped() {
        let mut factors = FactorSet::neutral();
        factors.form = 140.0;
        factors.draw = -12.0;
        factors.trend = f64::NAN;

        let clamped = factors.clamped();
        assert_eq!(clamped.form, 100.0);
        assert_eq!(clamped.draw, 0.0);
        assert_eq!(clamped.trend, 50.0);
        assert_eq!(clamped.speed, 50.0);
    }

    #[test]
    fn test_factor_set_array_order() {
        let values: [f64; FactorSet::LEN] = std::array::from_fn(|i| i as f64);
        let factors = FactorSet::from_array(values);
        assert_eq!(factors.speed, 0.0);
        assert_eq!(factors.market, 16.0);
        assert_eq!(factors.as_array(), values);
    }

    #[test]
    fn test_venue_detail_needs_distance_for_tips() {
        let meydan = crate::data::VenueRepository::builtin()
            .resolve("Meydan")
            .unwrap();

        let bare = VenueDetailResponse::new(meydan, None);
        assert!(bare.adjustments.is_none());
        assert!(bare.tips.is_empty());

        let sprint = VenueDetailResponse::new(meydan, Some(1200));
        assert!(sprint.adjustments.is_some());
        assert!(!sprint.tips.is_empty());
    }
}
