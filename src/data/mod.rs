//! Static reference data and input parsing

pub mod form;
pub mod reference;
mod venue_catalog;
pub mod venues;

// Re-export commonly used types
pub use form::{parse_odds, FormLine};
pub use reference::{Aptitude, PersonRecord, ReferenceTables, SireRecord, DEFAULT_PERSON_RATING};
pub use venues::{
    normalize_name, DistanceCategory, DrawBucket, DrawImpact, PaceBias, SurfaceKind,
    VenueAdjustments, VenueProfile, VenueRepository, VenueSummary,
};
