//! Built-in venue profiles

use crate::data::venues::{
    Direction, DistanceProfile, DistanceProfiles, Impact, PaceBias, PositionalAdvantage,
    Sensitivity, SpecialFeature, SurfaceKind, TrackShape, TrackSurface, TurnRadius,
    VenueProfile, WeatherSensitivity, WeightImpact,
};

use Sensitivity::{High, Low, Medium};

pub fn builtin_profiles() -> Vec<VenueProfile> {
    vec![
        meydan(),
        jebel_ali(),
        al_ain(),
        abu_dhabi(),
        sharjah(),
        wolverhampton(),
        oaklawn_park(),
    ]
}

fn surface(kind: SurfaceKind, circumference: u32, home_straight: u32, width: u32) -> TrackSurface {
    TrackSurface {
        kind,
        circumference,
        home_straight,
        width,
    }
}

fn trip(stamina: u8, speed: u8, acceleration: u8) -> DistanceProfile {
    DistanceProfile {
        stamina,
        speed,
        acceleration,
    }
}

fn feature(name: &str, impact: Impact, description: &str) -> SpecialFeature {
    SpecialFeature {
        name: name.to_string(),
        impact,
        description: description.to_string(),
    }
}

fn aliases(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn meydan() -> VenueProfile {
    VenueProfile {
        id: "meydan".to_string(),
        name: "Meydan Racecourse".to_string(),
        name_ar: "مضمار ميدان".to_string(),
        location: "Dubai, UAE".to_string(),
        surfaces: vec![
            surface(SurfaceKind::Dirt, 1750, 400, 25),
            surface(SurfaceKind::Turf, 2400, 400, 20),
        ],
        direction: Direction::LeftHanded,
        shape: TrackShape::Oval,
        turn_radius: TurnRadius::Wide,
        distance_profiles: DistanceProfiles {
            sprint: trip(3, 10, 9),
            mile: trip(5, 8, 8),
            middle: trip(7, 6, 7),
            long: trip(9, 4, 6),
        },
        positional: PositionalAdvantage {
            inside: 0.08,
            middle: 0.02,
            outside: -0.05,
            front_running: 7,
            stalking: 8,
            closing: 7,
        },
        pace_bias: PaceBias::Neutral,
        weight_impact: WeightImpact {
            overall: 6,
            sprint: 4,
            distance: 8,
        },
        weather: WeatherSensitivity {
            rain: Low,
            wind: Medium,
            temperature: Medium,
        },
        special_features: vec![
            feature(
                "World-Class Facility",
                Impact::Positive,
                "Home of the Dubai World Cup with a 60,000-seat grandstand.",
            ),
            feature(
                "Wide Turns with Banking",
                Impact::Positive,
                "Sweeping bends banked at 5.5% let long-striding horses keep momentum.",
            ),
            feature(
                "400m Home Straight",
                Impact::Positive,
                "A long run-in gives closers time on both surfaces.",
            ),
            feature(
                "Chutes for Various Distances",
                Impact::Neutral,
                "Backstretch chute serves 1200m to 1600m starts; some favour low draws.",
            ),
            feature(
                "Floodlit Night Racing",
                Impact::Neutral,
                "Racing under lights in cooler evening temperatures.",
            ),
            feature(
                "Dual Surface Venue",
                Impact::Positive,
                "Turf course runs outside the dirt track.",
            ),
        ],
        aliases: aliases(&["ميدان", "meydan", "dubai"]),
    }
}

fn jebel_ali() -> VenueProfile {
    VenueProfile {
        id: "jebel-ali".to_string(),
        name: "Jebel Ali Racecourse".to_string(),
        name_ar: "مضمار جبل علي".to_string(),
        location: "Dubai, UAE".to_string(),
        surfaces: vec![surface(SurfaceKind::Sand, 2200, 900, 18)],
        direction: Direction::RightHanded,
        shape: TrackShape::Horseshoe,
        turn_radius: TurnRadius::Medium,
        distance_profiles: DistanceProfiles {
            sprint: trip(5, 9, 8),
            mile: trip(6, 7, 8),
            middle: trip(8, 5, 7),
            long: trip(10, 3, 6),
        },
        positional: PositionalAdvantage {
            inside: 0.05,
            middle: 0.0,
            outside: 0.03,
            front_running: 6,
            stalking: 7,
            closing: 8,
        },
        pace_bias: PaceBias::Front,
        weight_impact: WeightImpact {
            overall: 8,
            sprint: 5,
            distance: 9,
        },
        weather: WeatherSensitivity {
            rain: Medium,
            wind: Low,
            temperature: High,
        },
        special_features: vec![
            feature(
                "Steep Uphill Finish",
                Impact::Positive,
                "The last 200m climb rewards genuine stamina.",
            ),
            feature(
                "Tobuk Curve",
                Impact::Positive,
                "The right-handed bend is decisive over 1400m.",
            ),
            feature(
                "Oil-Mixed Sand Surface",
                Impact::Positive,
                "Deep, stamina-sapping sand bound with oil.",
            ),
            feature(
                "Longest Run-In in UAE",
                Impact::Positive,
                "900m home straight suits closers.",
            ),
            feature(
                "1400m Straight Chute",
                Impact::Neutral,
                "Straight chute gives fairer starts over 1400m.",
            ),
            feature(
                "Outside Draws Favorable in Sprints",
                Impact::Positive,
                "Wide draws get a cleaner run on the deep surface over 1000m to 1200m.",
            ),
            feature(
                "Older Horses Place Well",
                Impact::Neutral,
                "Seven-year-olds and up often hit the frame in staying races.",
            ),
        ],
        aliases: aliases(&["جبل علي", "جبل على", "jebel ali", "jebelali", "jabal ali"]),
    }
}

fn al_ain() -> VenueProfile {
    VenueProfile {
        id: "al-ain".to_string(),
        name: "Al Ain Racecourse".to_string(),
        name_ar: "مضمار العين".to_string(),
        location: "Al Ain, UAE".to_string(),
        surfaces: vec![surface(SurfaceKind::Mixed, 2500, 500, 20)],
        direction: Direction::LeftHanded,
        shape: TrackShape::Oval,
        turn_radius: TurnRadius::Wide,
        distance_profiles: DistanceProfiles {
            sprint: trip(4, 9, 8),
            mile: trip(6, 7, 8),
            middle: trip(8, 5, 7),
            long: trip(9, 4, 6),
        },
        positional: PositionalAdvantage {
            inside: 0.07,
            middle: 0.04,
            outside: -0.02,
            front_running: 6,
            stalking: 8,
            closing: 7,
        },
        pace_bias: PaceBias::Neutral,
        weight_impact: WeightImpact {
            overall: 7,
            sprint: 4,
            distance: 9,
        },
        weather: WeatherSensitivity {
            rain: Low,
            wind: Low,
            temperature: Medium,
        },
        special_features: vec![
            feature(
                "Largest Track in UAE",
                Impact::Positive,
                "2500m circuit with room for big fields.",
            ),
            feature(
                "Sand and Fiber Surface",
                Impact::Positive,
                "Consistent mixed surface that rides evenly.",
            ),
            feature(
                "Wide Galloping Turns",
                Impact::Positive,
                "Wide bends reduce the cost of racing wide.",
            ),
            feature(
                "Evening Racing",
                Impact::Positive,
                "Cooler evening fixtures.",
            ),
            feature(
                "Minimal Draw Bias",
                Impact::Positive,
                "Wide track keeps draw effects small.",
            ),
        ],
        aliases: aliases(&["العين", "al ain", "alain"]),
    }
}

fn abu_dhabi() -> VenueProfile {
    VenueProfile {
        id: "abu-dhabi".to_string(),
        name: "Abu Dhabi Equestrian Club".to_string(),
        name_ar: "نادي أبوظبي للفروسية".to_string(),
        location: "Abu Dhabi, UAE".to_string(),
        surfaces: vec![surface(SurfaceKind::Turf, 2000, 400, 18)],
        direction: Direction::RightHanded,
        shape: TrackShape::Oval,
        turn_radius: TurnRadius::Medium,
        distance_profiles: DistanceProfiles {
            sprint: trip(2, 10, 9),
            mile: trip(4, 8, 8),
            middle: trip(6, 6, 7),
            long: trip(8, 4, 6),
        },
        positional: PositionalAdvantage {
            inside: 0.06,
            middle: 0.03,
            outside: -0.02,
            front_running: 8,
            stalking: 7,
            closing: 6,
        },
        pace_bias: PaceBias::Hold,
        weight_impact: WeightImpact {
            overall: 5,
            sprint: 3,
            distance: 7,
        },
        weather: WeatherSensitivity {
            rain: Medium,
            wind: Low,
            temperature: Low,
        },
        special_features: vec![
            feature(
                "Only Pure Turf Track in UAE",
                Impact::Positive,
                "Races on grass all season and draws turf specialists.",
            ),
            feature(
                "Right-Handed Direction",
                Impact::Neutral,
                "Catches out horses used to left-handed tracks.",
            ),
            feature(
                "Purebred Arabian Focus",
                Impact::Positive,
                "Major Arabian venue hosting the President Cup.",
            ),
            feature(
                "Chutes for Different Distances",
                Impact::Neutral,
                "Chute starts for several trips.",
            ),
            feature(
                "Firm to Good Going",
                Impact::Positive,
                "Well watered turf that rarely rides soft.",
            ),
        ],
        aliases: aliases(&[
            "أبوظبي",
            "ابوظبي",
            "ابو ظبي",
            "abu dhabi",
            "abudhabi",
            "abu dhabi turf club",
        ]),
    }
}

fn sharjah() -> VenueProfile {
    VenueProfile {
        id: "sharjah".to_string(),
        name: "Sharjah Equestrian & Racing Club".to_string(),
        name_ar: "نادي الشارقة للفروسية والسباقات".to_string(),
        location: "Sharjah, UAE".to_string(),
        surfaces: vec![surface(SurfaceKind::Dirt, 1750, 300, 16)],
        direction: Direction::LeftHanded,
        shape: TrackShape::Oval,
        turn_radius: TurnRadius::Tight,
        distance_profiles: DistanceProfiles {
            sprint: trip(4, 9, 8),
            mile: trip(5, 7, 8),
            middle: trip(7, 5, 7),
            long: trip(8, 4, 6),
        },
        positional: PositionalAdvantage {
            inside: 0.10,
            middle: 0.05,
            outside: -0.05,
            front_running: 7,
            stalking: 6,
            closing: 5,
        },
        pace_bias: PaceBias::Front,
        weight_impact: WeightImpact {
            overall: 6,
            sprint: 4,
            distance: 8,
        },
        weather: WeatherSensitivity {
            rain: High,
            wind: Medium,
            temperature: Medium,
        },
        special_features: vec![
            feature(
                "Tight Turns",
                Impact::Positive,
                "Sharp bends reward handy, prominent racers.",
            ),
            feature(
                "Short Home Straight",
                Impact::Positive,
                "300m run-in gives closers little time.",
            ),
            feature(
                "Historic Venue",
                Impact::Neutral,
                "One of the oldest tracks in the country.",
            ),
            feature(
                "Smaller Field Sizes",
                Impact::Positive,
                "Small fields make races more predictable.",
            ),
            feature(
                "Narrow Track (16m)",
                Impact::Neutral,
                "Narrow course sharpens the inside draw bias.",
            ),
        ],
        aliases: aliases(&["الشارقة", "الشارقه", "sharjah"]),
    }
}

fn wolverhampton() -> VenueProfile {
    VenueProfile {
        id: "wolverhampton".to_string(),
        name: "Wolverhampton Racecourse".to_string(),
        name_ar: "مضمار وولفرهامبتون".to_string(),
        location: "Dunstall Park, Wolverhampton, UK".to_string(),
        surfaces: vec![surface(SurfaceKind::Synthetic, 1600, 350, 20)],
        direction: Direction::LeftHanded,
        shape: TrackShape::Oval,
        turn_radius: TurnRadius::Tight,
        distance_profiles: DistanceProfiles {
            sprint: trip(3, 10, 9),
            mile: trip(5, 7, 8),
            middle: trip(6, 6, 7),
            long: trip(8, 4, 6),
        },
        positional: PositionalAdvantage {
            inside: 0.06,
            middle: 0.02,
            outside: -0.03,
            front_running: 8,
            stalking: 7,
            closing: 5,
        },
        pace_bias: PaceBias::Front,
        weight_impact: WeightImpact {
            overall: 5,
            sprint: 3,
            distance: 7,
        },
        weather: WeatherSensitivity {
            rain: Low,
            wind: Medium,
            temperature: Low,
        },
        special_features: vec![
            feature(
                "Tapeta Surface",
                Impact::Positive,
                "Consistent synthetic surface that rides the same in all weather.",
            ),
            feature(
                "Tight Oval",
                Impact::Positive,
                "Circuit of just under a mile favours nimble types.",
            ),
            feature(
                "Moderate Draw Bias",
                Impact::Positive,
                "Low draws hold a modest edge, strongest in sprints.",
            ),
            feature(
                "Short Home Straight",
                Impact::Positive,
                "Under two furlongs from the final bend, which helps front-runners.",
            ),
            feature(
                "Recent Form Critical",
                Impact::Positive,
                "In-form all-weather regulars dominate.",
            ),
            feature(
                "Course and Distance Specialists",
                Impact::Positive,
                "Proven course-and-distance winners repeat often.",
            ),
        ],
        aliases: aliases(&["وولفرهامبتون", "wolverhampton", "wolves", "dunstall"]),
    }
}

fn oaklawn_park() -> VenueProfile {
    VenueProfile {
        id: "oaklawn-park".to_string(),
        name: "Oaklawn Park".to_string(),
        name_ar: "مضمار أوكلاند بارك".to_string(),
        location: "Hot Springs, Arkansas, USA".to_string(),
        surfaces: vec![surface(SurfaceKind::Dirt, 1700, 380, 24)],
        direction: Direction::LeftHanded,
        shape: TrackShape::Oval,
        turn_radius: TurnRadius::Wide,
        distance_profiles: DistanceProfiles {
            sprint: trip(3, 10, 9),
            mile: trip(5, 8, 8),
            middle: trip(7, 6, 7),
            long: trip(9, 4, 6),
        },
        positional: PositionalAdvantage {
            inside: 0.07,
            middle: 0.02,
            outside: -0.03,
            front_running: 8,
            stalking: 8,
            closing: 7,
        },
        pace_bias: PaceBias::Neutral,
        weight_impact: WeightImpact {
            overall: 6,
            sprint: 4,
            distance: 7,
        },
        weather: WeatherSensitivity {
            rain: Medium,
            wind: Low,
            temperature: Medium,
        },
        special_features: vec![
            feature(
                "Arkansas Derby Host",
                Impact::Positive,
                "Grade 1 Kentucky Derby prep with a strong record of producing champions.",
            ),
            feature(
                "Speed-Friendly Surface",
                Impact::Positive,
                "Fast dirt that carries early speed.",
            ),
            feature(
                "Long Racing Season",
                Impact::Neutral,
                "Meeting runs from winter into spring.",
            ),
            feature(
                "Rebel Stakes",
                Impact::Positive,
                "Key three-year-old trial on the Derby trail.",
            ),
        ],
        aliases: aliases(&[
            "أوكلاند بارك",
            "اوكلاند",
            "oaklawn",
            "oaklawn park",
            "hot springs",
            "arkansas",
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_are_well_formed() {
        for profile in builtin_profiles() {
            assert!(!profile.surfaces.is_empty(), "{} has no surface", profile.id);
            assert!(!profile.aliases.is_empty(), "{} has no aliases", profile.id);
            for p in [
                profile.distance_profiles.sprint,
                profile.distance_profiles.mile,
                profile.distance_profiles.middle,
                profile.distance_profiles.long,
            ] {
                for v in [p.stamina, p.speed, p.acceleration] {
                    assert!((1..=10).contains(&v), "{} importance {} out of range", profile.id, v);
                }
            }
            assert!(profile.positional.inside.abs() < 0.5);
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let profiles = builtin_profiles();
        let mut ids: Vec<&str> = profiles.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), profiles.len());
    }
}
