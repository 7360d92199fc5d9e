//! Venue profiles and their lookups
//!
//! Profiles are static and immutable after load. Resolution is by a
//! normalised name: an exact alias hit first, then containment against each
//! profile's id, names and aliases in catalogue order.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::data::venue_catalog;
use crate::models::Surface;

/// Distance at or below which the draw bias is amplified
pub const SHORT_SPRINT_METERS: u32 = 1200;
/// Draw-bias multiplier for short sprints
pub const SHORT_SPRINT_DRAW_FACTOR: f64 = 1.3;

/// Shortest query allowed to match as a fragment of a longer venue name
const MIN_FRAGMENT_CHARS: usize = 4;

static BUILTIN: Lazy<VenueRepository> =
    Lazy::new(|| VenueRepository::new(venue_catalog::builtin_profiles()));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceKind {
    Dirt,
    Turf,
    Sand,
    Mixed,
    Synthetic,
}

impl SurfaceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SurfaceKind::Dirt => "dirt",
            SurfaceKind::Turf => "turf",
            SurfaceKind::Sand => "sand",
            SurfaceKind::Mixed => "mixed",
            SurfaceKind::Synthetic => "synthetic",
        }
    }

    /// Track surface a race is run on
    pub fn from_race_surface(surface: Surface) -> Self {
        match surface {
            Surface::Dirt => SurfaceKind::Dirt,
            Surface::Turf => SurfaceKind::Turf,
            Surface::AllWeather => SurfaceKind::Synthetic,
            Surface::Sand => SurfaceKind::Sand,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceCategory {
    Sprint,
    Mile,
    Middle,
    Long,
}

impl DistanceCategory {
    /// ≤1300 sprint, ≤1700 mile, ≤2100 middle, else long
    pub fn from_meters(meters: u32) -> Self {
        match meters {
            0..=1300 => DistanceCategory::Sprint,
            1301..=1700 => DistanceCategory::Mile,
            1701..=2100 => DistanceCategory::Middle,
            _ => DistanceCategory::Long,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DistanceCategory::Sprint => "sprint",
            DistanceCategory::Mile => "mile",
            DistanceCategory::Middle => "middle",
            DistanceCategory::Long => "long",
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            DistanceCategory::Sprint => "sprint race",
            DistanceCategory::Mile => "mile race",
            DistanceCategory::Middle => "middle-distance race",
            DistanceCategory::Long => "long-distance race",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackSurface {
    pub kind: SurfaceKind,
    /// Meters
    pub circumference: u32,
    /// Meters
    pub home_straight: u32,
    /// Meters
    pub width: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    LeftHanded,
    RightHanded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackShape {
    Oval,
    Horseshoe,
    Straight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRadius {
    Tight,
    Medium,
    Wide,
}

/// Importance of each attribute on a 1-10 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceProfile {
    pub stamina: u8,
    pub speed: u8,
    pub acceleration: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceProfiles {
    pub sprint: DistanceProfile,
    pub mile: DistanceProfile,
    pub middle: DistanceProfile,
    pub long: DistanceProfile,
}

impl DistanceProfiles {
    pub fn get(&self, category: DistanceCategory) -> &DistanceProfile {
        match category {
            DistanceCategory::Sprint => &self.sprint,
            DistanceCategory::Mile => &self.mile,
            DistanceCategory::Middle => &self.middle,
            DistanceCategory::Long => &self.long,
        }
    }
}

/// Draw and running-style bias
///
/// Draw advantages are fractions added to a neutral 0.5 draw rating
/// (0.08 = +8 points). Running-style values are on a 1-10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionalAdvantage {
    pub inside: f64,
    pub middle: f64,
    pub outside: f64,
    pub front_running: u8,
    pub stalking: u8,
    pub closing: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaceBias {
    Front,
    Hold,
    Neutral,
}

/// Weight impact on a 1-10 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightImpact {
    pub overall: u8,
    pub sprint: u8,
    pub distance: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sensitivity {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherSensitivity {
    pub rain: Sensitivity,
    pub wind: Sensitivity,
    pub temperature: Sensitivity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialFeature {
    pub name: String,
    pub impact: Impact,
    pub description: String,
}

/// Static per-venue configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueProfile {
    pub id: String,
    pub name: String,
    pub name_ar: String,
    pub location: String,
    /// First entry is the primary surface
    pub surfaces: Vec<TrackSurface>,
    pub direction: Direction,
    pub shape: TrackShape,
    pub turn_radius: TurnRadius,
    pub distance_profiles: DistanceProfiles,
    pub positional: PositionalAdvantage,
    pub pace_bias: PaceBias,
    pub weight_impact: WeightImpact,
    pub weather: WeatherSensitivity,
    pub special_features: Vec<SpecialFeature>,
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// Third of the field a draw falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawBucket {
    Inside,
    Middle,
    Outside,
}

impl DrawBucket {
    /// Bucket a draw into thirds of the active field
    pub fn of(draw: u32, field_size: usize) -> Self {
        let field = field_size.max(1) as u32;
        let third = field.div_ceil(3);
        if draw <= third {
            DrawBucket::Inside
        } else if draw <= third * 2 {
            DrawBucket::Middle
        } else {
            DrawBucket::Outside
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawImpact {
    pub bucket: DrawBucket,
    pub advantage: f64,
    pub description: String,
}

/// Venue recommendations for a given trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueAdjustments {
    pub category: DistanceCategory,
    pub surface: TrackSurface,
    pub stamina_required: u8,
    pub speed_importance: u8,
    pub acceleration_importance: u8,
    pub inside_advantage: f64,
    pub front_running_value: u8,
    pub stalking_value: u8,
    pub closing_value: u8,
    pub weight_impact: u8,
    pub special_factors: Vec<String>,
}

impl VenueProfile {
    pub fn primary_surface(&self) -> Option<&TrackSurface> {
        self.surfaces.first()
    }

    /// Surface of the given kind, else the primary surface
    pub fn surface_for(&self, kind: Option<SurfaceKind>) -> Option<&TrackSurface> {
        kind.and_then(|k| self.surfaces.iter().find(|s| s.kind == k))
            .or_else(|| self.primary_surface())
    }

    pub fn distance_profile(&self, meters: u32) -> (DistanceCategory, &DistanceProfile) {
        let category = DistanceCategory::from_meters(meters);
        (category, self.distance_profiles.get(category))
    }

    /// Draw advantage for a starting position in the active field
    pub fn draw_adjustment(&self, draw: u32, active_field_size: usize, distance: u32) -> f64 {
        let advantage = match DrawBucket::of(draw, active_field_size) {
            DrawBucket::Inside => self.positional.inside,
            DrawBucket::Middle => self.positional.middle,
            DrawBucket::Outside => self.positional.outside,
        };

        if distance <= SHORT_SPRINT_METERS {
            advantage * SHORT_SPRINT_DRAW_FACTOR
        } else {
            advantage
        }
    }

    pub fn draw_impact(&self, draw: u32, active_field_size: usize, distance: u32) -> DrawImpact {
        let bucket = DrawBucket::of(draw, active_field_size);
        let advantage = self.draw_adjustment(draw, active_field_size, distance);
        let description = match bucket {
            DrawBucket::Inside if self.positional.inside >= 0.08 => "favoured inside draw",
            DrawBucket::Inside if self.positional.inside > 0.0 => "good inside draw",
            DrawBucket::Inside => "neutral inside draw",
            DrawBucket::Middle => "middle draw",
            DrawBucket::Outside if self.positional.outside < 0.0 => "difficult outside draw",
            DrawBucket::Outside => "outside draw",
        };

        DrawImpact {
            bucket,
            advantage,
            description: description.to_string(),
        }
    }

    pub fn adjustments(&self, distance: u32, surface: Option<SurfaceKind>) -> VenueAdjustments {
        let (category, profile) = self.distance_profile(distance);
        let surface = self
            .surface_for(surface)
            .cloned()
            .unwrap_or(TrackSurface {
                kind: surface.unwrap_or(SurfaceKind::Dirt),
                circumference: 0,
                home_straight: 0,
                width: 0,
            });

        VenueAdjustments {
            category,
            surface,
            stamina_required: profile.stamina,
            speed_importance: profile.speed,
            acceleration_importance: profile.acceleration,
            inside_advantage: self.positional.inside,
            front_running_value: self.positional.front_running,
            stalking_value: self.positional.stalking,
            closing_value: self.positional.closing,
            weight_impact: self.weight_impact.overall,
            special_factors: self
                .special_features
                .iter()
                .filter(|f| f.impact != Impact::Neutral)
                .map(|f| f.name.clone())
                .collect(),
        }
    }

    /// Rule-based venue notes for a trip
    pub fn tips(&self, distance: u32) -> Vec<String> {
        let (category, profile) = self.distance_profile(distance);
        let mut tips = vec![
            format!("venue: {}", self.name),
            format!("distance: {}m ({})", distance, category.describe()),
        ];

        if profile.stamina >= 7 {
            tips.push(format!("very high stamina required ({}/10)", profile.stamina));
        } else if profile.stamina >= 5 {
            tips.push(format!("moderate stamina required ({}/10)", profile.stamina));
        }

        if self.positional.inside >= 0.07 {
            tips.push("inside draws hold a clear edge".to_string());
        } else if self.positional.outside > self.positional.inside {
            tips.push("outside draws favoured".to_string());
        }

        if self.positional.closing >= 8 {
            tips.push("closers have the edge".to_string());
        } else if self.positional.front_running >= 8 {
            tips.push("front-runners have the edge".to_string());
        }

        let positives: Vec<&str> = self
            .special_features
            .iter()
            .filter(|f| f.impact == Impact::Positive)
            .map(|f| f.name.as_str())
            .collect();
        if !positives.is_empty() {
            tips.push(format!("key features: {}", positives.join(", ")));
        }

        tips
    }
}

/// Venue listing entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueSummary {
    pub id: String,
    pub name: String,
    pub name_ar: String,
    pub location: String,
}

/// Read-only venue profile store
#[derive(Debug, Clone)]
pub struct VenueRepository {
    profiles: Vec<VenueProfile>,
    /// Normalised key -> profile index; first insertion wins
    index: HashMap<String, usize>,
    /// Normalised keys per profile, used for fragment matching
    keys: Vec<Vec<String>>,
}

impl VenueRepository {
    pub fn new(profiles: Vec<VenueProfile>) -> Self {
        let mut index = HashMap::new();
        let mut keys = Vec::with_capacity(profiles.len());

        for (i, profile) in profiles.iter().enumerate() {
            let mut profile_keys: Vec<String> = [&profile.id, &profile.name, &profile.name_ar]
                .into_iter()
                .chain(profile.aliases.iter())
                .map(|k| normalize_name(k))
                .filter(|k| !k.is_empty())
                .collect();
            profile_keys.dedup();

            for key in &profile_keys {
                index.entry(key.clone()).or_insert(i);
            }
            keys.push(profile_keys);
        }

        Self {
            profiles,
            index,
            keys,
        }
    }

    /// Shared process-wide repository
    pub fn builtin() -> &'static VenueRepository {
        &BUILTIN
    }

    pub fn resolve(&self, name: &str) -> Option<&VenueProfile> {
        let query = normalize_name(name);
        if query.is_empty() {
            return None;
        }

        if let Some(&i) = self.index.get(&query) {
            return self.profiles.get(i);
        }

        // Longest matching key wins so "Jebel Ali, Dubai" is not taken for
        // Meydan's "dubai" alias; ties go to catalogue order.
        let query_len = query.chars().count();
        let mut best: Option<(usize, usize)> = None;
        for (i, profile_keys) in self.keys.iter().enumerate() {
            for key in profile_keys {
                let matched = query.contains(key.as_str())
                    || (query_len >= MIN_FRAGMENT_CHARS && key.starts_with(query.as_str()));
                let len = key.chars().count();
                if matched && best.map_or(true, |(_, best_len)| len > best_len) {
                    best = Some((i, len));
                }
            }
        }

        best.and_then(|(i, _)| self.profiles.get(i))
    }

    pub fn get(&self, id: &str) -> Option<&VenueProfile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    pub fn is_known(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    pub fn list(&self) -> Vec<VenueSummary> {
        self.profiles
            .iter()
            .map(|p| VenueSummary {
                id: p.id.clone(),
                name: p.name.clone(),
                name_ar: p.name_ar.clone(),
                location: p.location.clone(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

/// Lowercase, turn `-`, `_`, `.` and `,` into spaces, collapse whitespace
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
        .replace(['-', '_', '.', ','], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo() -> &'static VenueRepository {
        VenueRepository::builtin()
    }

    #[test]
    fn test_builtin_has_all_venues() {
        assert_eq!(repo().len(), 7);
        let ids: Vec<String> = repo().list().into_iter().map(|v| v.id).collect();
        assert!(ids.contains(&"meydan".to_string()));
        assert!(ids.contains(&"oaklawn-park".to_string()));
    }

    #[test]
    fn test_meydan_aliases_resolve_to_same_profile() {
        let a = repo().resolve("Meydan").unwrap();
        let b = repo().resolve("Meydan Racecourse").unwrap();
        let c = repo().resolve("ميدان").unwrap();
        assert_eq!(a.id, "meydan");
        assert_eq!(a.id, b.id);
        assert_eq!(b.id, c.id);
    }

    #[test]
    fn test_resolve_spelling_variants() {
        assert_eq!(repo().resolve("  JEBEL-ALI ").unwrap().id, "jebel-ali");
        assert_eq!(repo().resolve("jebelali").unwrap().id, "jebel-ali");
        assert_eq!(repo().resolve("Abu Dhabi Turf Club").unwrap().id, "abu-dhabi");
        assert_eq!(repo().resolve("الشارقة").unwrap().id, "sharjah");
        assert_eq!(repo().resolve("Dunstall Park").unwrap().id, "wolverhampton");
        assert_eq!(repo().resolve("Oaklawn").unwrap().id, "oaklawn-park");
    }

    #[test]
    fn test_resolve_prefers_longest_match() {
        assert_eq!(repo().resolve("Jebel Ali, Dubai").unwrap().id, "jebel-ali");
        assert_eq!(repo().resolve("Dubai World Cup night").unwrap().id, "meydan");
    }

    #[test]
    fn test_resolve_unknown_returns_none() {
        assert!(repo().resolve("Ascot").is_none());
        assert!(repo().resolve("").is_none());
        assert!(repo().resolve("   ").is_none());
        assert!(!repo().is_known("Longchamp"));
    }

    #[test]
    fn test_short_fragment_does_not_match() {
        assert!(repo().resolve("a").is_none());
        assert!(repo().resolve("al").is_none());
    }

    #[test]
    fn test_fragment_must_lead_the_key() {
        assert_eq!(repo().resolve("Wolver").unwrap().id, "wolverhampton");
        assert_eq!(repo().resolve("Meyd").unwrap().id, "meydan");
        assert!(repo().resolve("Racecourse").is_none());
        assert!(repo().resolve("Park").is_none());
        assert!(repo().resolve("Equestrian Club").is_none());
    }

    #[test]
    fn test_distance_category_thresholds() {
        assert_eq!(DistanceCategory::from_meters(1000), DistanceCategory::Sprint);
        assert_eq!(DistanceCategory::from_meters(1300), DistanceCategory::Sprint);
        assert_eq!(DistanceCategory::from_meters(1301), DistanceCategory::Mile);
        assert_eq!(DistanceCategory::from_meters(1700), DistanceCategory::Mile);
        assert_eq!(DistanceCategory::from_meters(2100), DistanceCategory::Middle);
        assert_eq!(DistanceCategory::from_meters(2101), DistanceCategory::Long);
    }

    #[test]
    fn test_surface_for_defaults_to_primary() {
        let meydan = repo().resolve("meydan").unwrap();
        assert_eq!(meydan.surface_for(None).unwrap().kind, SurfaceKind::Dirt);
        assert_eq!(
            meydan.surface_for(Some(SurfaceKind::Turf)).unwrap().kind,
            SurfaceKind::Turf
        );
        assert_eq!(
            meydan.surface_for(Some(SurfaceKind::Sand)).unwrap().kind,
            SurfaceKind::Dirt
        );
    }

    #[test]
    fn test_draw_buckets() {
        assert_eq!(DrawBucket::of(1, 14), DrawBucket::Inside);
        assert_eq!(DrawBucket::of(5, 14), DrawBucket::Inside);
        assert_eq!(DrawBucket::of(6, 14), DrawBucket::Middle);
        assert_eq!(DrawBucket::of(10, 14), DrawBucket::Middle);
        assert_eq!(DrawBucket::of(11, 14), DrawBucket::Outside);
        assert_eq!(DrawBucket::of(3, 0), DrawBucket::Outside);
    }

    #[test]
    fn test_draw_adjustment_amplified_in_short_sprints() {
        let meydan = repo().resolve("meydan").unwrap();
        let sprint = meydan.draw_adjustment(1, 14, 1200);
        let mile = meydan.draw_adjustment(1, 14, 1600);
        assert!((mile - meydan.positional.inside).abs() < 1e-12);
        assert!((sprint - meydan.positional.inside * 1.3).abs() < 1e-12);
        assert!(meydan.draw_adjustment(1, 14, 1200) > meydan.draw_adjustment(14, 14, 1200));
    }

    #[test]
    fn test_draw_impact_descriptions() {
        let sharjah = repo().resolve("sharjah").unwrap();
        assert_eq!(sharjah.draw_impact(1, 12, 1400).description, "favoured inside draw");
        assert_eq!(sharjah.draw_impact(12, 12, 1400).description, "difficult outside draw");
        assert_eq!(sharjah.draw_impact(6, 12, 1400).description, "middle draw");
    }

    #[test]
    fn test_adjustments_and_tips() {
        let jebel_ali = repo().resolve("jebel ali").unwrap();
        let adj = jebel_ali.adjustments(2200, None);
        assert_eq!(adj.category, DistanceCategory::Long);
        assert_eq!(adj.stamina_required, 10);
        assert_eq!(adj.surface.kind, SurfaceKind::Sand);
        assert!(!adj.special_factors.is_empty());

        let tips = jebel_ali.tips(2200);
        assert_eq!(tips[0], "venue: Jebel Ali Racecourse");
        assert!(tips.iter().any(|t| t.contains("very high stamina")));
        assert!(tips.iter().any(|t| t == "closers have the edge"));
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  Abu_Dhabi--Turf  Club "), "abu dhabi turf club");
    }
}
