//! Jockey, trainer and sire reference tables
//!
//! Built once on first use and never mutated. Lookups return `Option` so a
//! miss is explicit; the `*_rating` helpers apply the default rating only on
//! a miss, never on a legitimately low value.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::data::venues::{DistanceCategory, SurfaceKind};

/// Rating applied to jockeys and trainers missing from the tables
pub const DEFAULT_PERSON_RATING: f64 = 70.0;

static BUILTIN: Lazy<ReferenceTables> = Lazy::new(ReferenceTables::standard);

/// Jockey or trainer record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub rating: f64,
    /// Win strike rate in percent
    pub win_rate: f64,
    pub specialty: String,
}

/// What a sire's progeny are best at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Aptitude {
    Stamina,
    Speed,
    Class,
    AllRounder,
}

/// Sire preferences passed on to progeny
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SireRecord {
    pub distance: DistanceCategory,
    pub surface: SurfaceKind,
    pub aptitude: Aptitude,
}

#[derive(Debug, Clone, Default)]
pub struct ReferenceTables {
    jockeys: HashMap<String, PersonRecord>,
    trainers: HashMap<String, PersonRecord>,
    sires: HashMap<String, SireRecord>,
}

impl ReferenceTables {
    /// Shared process-wide tables
    pub fn builtin() -> &'static ReferenceTables {
        &BUILTIN
    }

    /// Build tables from explicit rows
    pub fn new(
        jockeys: impl IntoIterator<Item = (String, PersonRecord)>,
        trainers: impl IntoIterator<Item = (String, PersonRecord)>,
        sires: impl IntoIterator<Item = (String, SireRecord)>,
    ) -> Self {
        Self {
            jockeys: jockeys.into_iter().collect(),
            trainers: trainers.into_iter().collect(),
            sires: sires.into_iter().collect(),
        }
    }

    pub fn jockey(&self, name: &str) -> Option<&PersonRecord> {
        self.jockeys.get(name.trim())
    }

    pub fn trainer(&self, name: &str) -> Option<&PersonRecord> {
        self.trainers.get(name.trim())
    }

    pub fn sire(&self, name: &str) -> Option<&SireRecord> {
        self.sires.get(name.trim())
    }

    pub fn jockey_rating(&self, name: &str) -> f64 {
        self.jockey(name)
            .map_or(DEFAULT_PERSON_RATING, |record| record.rating)
    }

    pub fn trainer_rating(&self, name: &str) -> f64 {
        self.trainer(name)
            .map_or(DEFAULT_PERSON_RATING, |record| record.rating)
    }

    fn standard() -> Self {
        Self::new(
            JOCKEYS.iter().map(person_row),
            TRAINERS.iter().map(person_row),
            SIRES
                .iter()
                .map(|&(name, distance, surface, aptitude)| {
                    (
                        name.to_string(),
                        SireRecord {
                            distance,
                            surface,
                            aptitude,
                        },
                    )
                }),
        )
    }
}

fn person_row(row: &(&str, f64, f64, &str)) -> (String, PersonRecord) {
    let (name, rating, win_rate, specialty) = *row;
    (
        name.to_string(),
        PersonRecord {
            rating,
            win_rate,
            specialty: specialty.to_string(),
        },
    )
}

const JOCKEYS: &[(&str, f64, f64, &str)] = &[
    ("Tadhg O'Shea", 98.0, 28.0, "all-rounder"),
    ("William Buick", 97.0, 26.0, "turf"),
    ("James Doyle", 95.0, 23.0, "middle-distance"),
    ("Silvestre De Sousa", 94.0, 22.0, "dirt"),
    ("Bernardo Pinheiro", 92.0, 19.0, "sand"),
    ("Ray Dawson", 90.0, 17.0, "handicap"),
    ("Sandro Paiva", 88.0, 15.0, "sprint"),
    ("Richard Mullen", 87.0, 14.0, "arabian"),
    ("Marcelino Rodrigues", 86.0, 13.0, "arabian"),
    ("Jesus Rosales", 85.0, 12.0, "arabian"),
    ("Qais Busaidi", 84.0, 11.0, "local"),
    ("Carlos Henrique", 83.0, 10.0, "arabian"),
    ("Hamed Busaidi", 82.0, 9.0, "local"),
    ("Jules Mobian", 81.0, 8.0, "arabian"),
    ("Abdul Al Balushi", 80.0, 8.0, "local"),
    ("Mohamed Salym", 78.0, 6.0, "local"),
    ("Allaia Tiar", 77.0, 5.0, "arabian"),
];

const TRAINERS: &[(&str, f64, f64, &str)] = &[
    ("Doug Watson", 97.0, 22.0, "all-rounder"),
    ("Charlie Appleby", 96.0, 21.0, "international"),
    ("Ernst Oertel", 95.0, 20.0, "arabian"),
    ("John Gosden", 95.0, 18.0, "turf"),
    ("Musabbeh Al Mheiri", 93.0, 17.0, "thoroughbred"),
    ("Bhupat Seemar", 92.0, 16.0, "handicap"),
    ("Satish Seemar", 90.0, 14.0, "all-rounder"),
    ("Khalid Al Neyadi", 88.0, 12.0, "arabian"),
    ("K Al Neyadi", 88.0, 12.0, "arabian"),
    ("K Neyadi", 88.0, 12.0, "arabian"),
    ("Ibrahim Al Hadhrami", 87.0, 11.0, "arabian"),
    ("Helal Alalawi", 86.0, 10.0, "arabian"),
    ("Sultan Hajri", 85.0, 9.0, "arabian"),
    ("Eric Lemartinel", 84.0, 8.0, "arabian"),
    ("A Hammadi", 84.0, 8.0, "distance"),
    ("Majed Al Jahoori", 83.0, 8.0, "arabian"),
    ("M Shamsi", 82.0, 7.0, "arabian"),
    ("S Shamsi", 82.0, 7.0, "arabian"),
    ("J Bittar", 81.0, 6.0, "arabian"),
    ("A Mehairbi", 80.0, 6.0, "arabian"),
    ("Malik Al Reef", 79.0, 5.0, "arabian"),
    ("M Al Mheiri", 79.0, 5.0, "arabian"),
    ("S Almarar", 78.0, 5.0, "arabian"),
    ("A Al Mheiri", 78.0, 5.0, "arabian"),
    ("Q Aboud", 77.0, 5.0, "arabian"),
    ("Hamza Hamida", 76.0, 4.0, "arabian"),
    ("I Aseel", 75.0, 4.0, "arabian"),
    ("Faisal Mutawa", 74.0, 4.0, "arabian"),
    ("AF Sanadek", 73.0, 3.0, "arabian"),
];

use Aptitude::{AllRounder, Class, Speed, Stamina};
use DistanceCategory::{Long, Middle, Sprint};
use SurfaceKind::{Dirt, Turf};

const SIRES: &[(&str, DistanceCategory, SurfaceKind, Aptitude)] = &[
    ("Munjiz", Middle, Dirt, Stamina),
    ("Dubawi", Middle, Turf, Class),
    ("Frankel", Middle, Turf, Class),
    ("Sea The Stars", Middle, Turf, Stamina),
    ("AF Alrashid", Middle, Dirt, Speed),
    ("Djendel", Long, Dirt, Stamina),
    ("Al Khalediah", Middle, Dirt, Class),
    ("Tapit", Middle, Dirt, Class),
    ("Street Cry", Middle, Dirt, AllRounder),
    ("Medaglia d'Oro", Middle, Dirt, Class),
    ("Curlin", Long, Dirt, Stamina),
    ("Quality Road", Middle, Dirt, Speed),
    ("Nyquist", Middle, Dirt, Speed),
    ("American Pharoah", Middle, Dirt, Stamina),
    ("Into Mischief", Sprint, Dirt, Speed),
    ("Munnings", Sprint, Dirt, Speed),
    ("Arrogate", Long, Dirt, Stamina),
    ("Shamardal", Middle, Turf, Class),
    ("Kitten's Joy", Long, Turf, Stamina),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_jockey_and_trainer() {
        let tables = ReferenceTables::builtin();
        assert_eq!(tables.jockey_rating("Tadhg O'Shea"), 98.0);
        assert_eq!(tables.trainer_rating("Doug Watson"), 97.0);
        assert_eq!(tables.jockey("William Buick").unwrap().specialty, "turf");
    }

    #[test]
    fn test_unknown_names_default_to_70() {
        let tables = ReferenceTables::builtin();
        assert!(tables.jockey("Nobody In Particular").is_none());
        assert_eq!(tables.jockey_rating("Nobody In Particular"), 70.0);
        assert_eq!(tables.trainer_rating(""), DEFAULT_PERSON_RATING);
    }

    #[test]
    fn test_zero_rating_is_not_treated_as_missing() {
        let tables = ReferenceTables::new(
            vec![(
                "Apprentice".to_string(),
                PersonRecord {
                    rating: 0.0,
                    win_rate: 0.0,
                    specialty: "local".to_string(),
                },
            )],
            Vec::new(),
            Vec::new(),
        );
        assert_eq!(tables.jockey_rating("Apprentice"), 0.0);
    }

    #[test]
    fn test_sire_lookup() {
        let tables = ReferenceTables::builtin();
        let sire = tables.sire("Into Mischief").unwrap();
        assert_eq!(sire.distance, DistanceCategory::Sprint);
        assert_eq!(sire.surface, SurfaceKind::Dirt);
        assert_eq!(sire.aptitude, Aptitude::Speed);
        assert!(tables.sire("Unknown Sire").is_none());
    }

    #[test]
    fn test_lookup_trims_whitespace() {
        let tables = ReferenceTables::builtin();
        assert_eq!(tables.trainer_rating("  Charlie Appleby "), 96.0);
    }
}
