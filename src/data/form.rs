//! Form string and odds parsing
//!
//! Form strings are compact result codes, most recent run first
//! ("1-3-2", "21/0P4"). Only digits carry placings; letters (P, F, U)
//! and separators are skipped. Digits are kept as written, so a `0`
//! (unplaced) stays 0.

use once_cell::sync::Lazy;
use regex::Regex;

static FRACTIONAL_ODDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+(?:\.\d+)?)\s*[/-]\s*(\d+(?:\.\d+)?)$").expect("valid odds regex")
});

/// Parsed recent-results line
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormLine {
    placings: Vec<u8>,
    raw_len: usize,
}

impl FormLine {
    pub fn parse(form: &str) -> Self {
        let placings = form
            .chars()
            .filter_map(|c| c.to_digit(10))
            .map(|d| d as u8)
            .collect();

        Self {
            placings,
            raw_len: form.chars().count(),
        }
    }

    /// Placings, most recent first
    pub fn placings(&self) -> &[u8] {
        &self.placings
    }

    pub fn is_empty(&self) -> bool {
        self.placings.is_empty()
    }

    pub fn wins(&self) -> usize {
        self.placings.iter().filter(|&&p| p == 1).count()
    }

    /// Second and third places
    pub fn places(&self) -> usize {
        self.placings.iter().filter(|&&p| p == 2 || p == 3).count()
    }

    pub fn last_run_won(&self) -> bool {
        self.placings.first() == Some(&1)
    }

    /// Any 5th to 7th placing, a sign of a runner held up mid-pack
    pub fn has_midfield_run(&self) -> bool {
        self.placings.iter().any(|p| (5..=7).contains(p))
    }

    /// At least three characters of form, padding included, implies the
    /// runner is racing regularly
    pub fn has_recent_runs(&self) -> bool {
        self.raw_len >= 3
    }
}

/// Parse market odds text into a fractional multiple
///
/// "5/1" -> 5.0, "11-4" -> 2.75, "2.5" -> 2.5, "evens" -> 1.0.
/// Returns None for anything unparsable.
pub fn parse_odds(odds: &str) -> Option<f64> {
    let text = odds.trim().to_lowercase();
    if matches!(text.as_str(), "evens" | "even" | "evs" | "ev") {
        return Some(1.0);
    }

    if let Some(caps) = FRACTIONAL_ODDS.captures(&text) {
        let num: f64 = caps[1].parse().ok()?;
        let den: f64 = caps[2].parse().ok()?;
        if den <= 0.0 {
            return None;
        }
        return Some(num / den);
    }

    text.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_form_with_separators() {
        let form = FormLine::parse("1-1-2");
        assert_eq!(form.placings(), &[1, 1, 2]);
        assert_eq!(form.wins(), 2);
        assert_eq!(form.places(), 1);
        assert!(form.last_run_won());
        assert!(form.has_recent_runs());
    }

    #[test]
    fn test_parse_form_letters_and_zero() {
        let form = FormLine::parse("P0/43F");
        assert_eq!(form.placings(), &[0, 4, 3]);
        assert_eq!(form.wins(), 0);
        assert_eq!(form.places(), 1);
        assert!(!form.last_run_won());
    }

    #[test]
    fn test_parse_form_empty() {
        let form = FormLine::parse("");
        assert!(form.is_empty());
        assert!(!form.has_recent_runs());

        let junk = FormLine::parse("-/-");
        assert!(junk.is_empty());
        assert!(junk.has_recent_runs());
    }

    #[test]
    fn test_recent_runs_counts_padding() {
        assert!(FormLine::parse(" 12").has_recent_runs());
        assert!(FormLine::parse("1 2").has_recent_runs());
        assert!(!FormLine::parse("12").has_recent_runs());
    }

    #[test]
    fn test_midfield_run() {
        assert!(FormLine::parse("2-6-1").has_midfield_run());
        assert!(!FormLine::parse("1-2-8").has_midfield_run());
    }

    #[test]
    fn test_parse_odds_formats() {
        assert_eq!(parse_odds("5/1"), Some(5.0));
        assert_eq!(parse_odds("11-4"), Some(2.75));
        assert_eq!(parse_odds(" 2.5 "), Some(2.5));
        assert_eq!(parse_odds("Evens"), Some(1.0));
    }

    #[test]
    fn test_parse_odds_invalid() {
        assert_eq!(parse_odds("5/0"), None);
        assert_eq!(parse_odds("n/a"), None);
        assert_eq!(parse_odds(""), None);
        assert_eq!(parse_odds("-3"), None);
    }
}
