//! Factor weight vector for the power score
//!
//! One named weight per factor. Weights must sum to 1.0; the scoring engine
//! refuses an unbalanced vector so a factor added without rebalancing cannot
//! silently skew scores.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::EngineError;
use crate::models::FactorSet;

/// Tolerance for the sum-to-one check
pub const WEIGHT_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorWeights {
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

/// Relative factor importance in `FactorSet` order; sums to 1.10 and is
/// scaled to 1.0 by `Default`
const RELATIVE_WEIGHTS: [f64; FactorSet::LEN] = [
    0.10, // speed
    0.12, // form
    0.08, // class
    0.12, // jockey
    0.10, // trainer
    0.08, // distance
    0.08, // surface
    0.05, // going
    0.06, // draw
    0.04, // weight
    0.04, // pace
    0.05, // pedigree
    0.04, // course
    0.02, // recency
    0.02, // equipment
    0.03, // trend
    0.07, // market
];

impl Default for FactorWeights {
    fn default() -> Self {
        let mut weights = Self::from_array(RELATIVE_WEIGHTS);
        weights.normalise();
        weights
    }
}

impl FactorWeights {
    /// Weights in `FactorSet` declaration order
    pub fn as_array(&self) -> [f64; FactorSet::LEN] {
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

    pub fn sum(&self) -> f64 {
        self.as_array().iter().sum()
    }

    /// Weights are finite, non-negative and sum to 1.0
    pub fn validate(&self) -> Result<(), EngineError> {
        let values = self.as_array();
        let sum: f64 = values.iter().sum();
        let well_formed = values.iter().all(|w| w.is_finite() && *w >= 0.0);
        if !well_formed || (sum - 1.0).abs() >= WEIGHT_TOLERANCE {
            return Err(EngineError::UnbalancedWeights { sum });
        }
        Ok(())
    }

    /// Rescale so the weights sum to 1.0
    pub fn normalise(&mut self) {
        let sum = self.sum();
        if sum > 0.0 && sum.is_finite() {
            let scaled = self.as_array().map(|w| w / sum);
            *self = Self::from_array(scaled);
        }
    }

    /// Weighted sum of factors, not clamped
    pub fn weighted_sum(&self, factors: &FactorSet) -> f64 {
        self.as_array()
            .iter()
            .zip(factors.as_array())
            .map(|(w, f)| w * f)
            .sum()
    }

    /// Load and validate a weight vector from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read weights file {:?}", path))?;
        let weights: FactorWeights = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse weights file {:?}", path))?;
        weights
            .validate()
            .with_context(|| format!("Invalid weights in {:?}", path))?;
        Ok(weights)
    }

    fn from_array(v: [f64; FactorSet::LEN]) -> Self {
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let w = FactorWeights::default();
        assert!(w.validate().is_ok(), "default weights must sum to 1.0");
        assert!((w.sum() - 1.0).abs() < WEIGHT_TOLERANCE);
    }

    #[test]
    fn test_unbalanced_weights_rejected() {
        let mut w = FactorWeights::default();
        w.form += 0.10;
        match w.validate() {
            Err(EngineError::UnbalancedWeights { sum }) => assert!((sum - 1.10).abs() < 1e-9),
            other => panic!("expected unbalanced weights, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_weight_rejected() {
        let mut w = FactorWeights::default();
        w.speed += w.form + 0.02;
        w.form = -0.02;
        assert!((w.sum() - 1.0).abs() < 1e-9);
        assert!(w.validate().is_err());
    }

    #[test]
    fn test_normalise_restores_sum() {
        let mut w = FactorWeights::default();
        w.market += 0.20;
        assert!(w.validate().is_err());
        w.normalise();
        assert!(w.validate().is_ok());
    }

    #[test]
    fn test_default_keeps_relative_ratios() {
        let w = FactorWeights::default();
        for (actual, relative) in w.as_array().iter().zip(RELATIVE_WEIGHTS) {
            assert!((actual - relative / 1.1).abs() < 1e-12);
        }
        assert_eq!(w.jockey, w.form);
        assert_eq!(w.trainer, w.speed);
    }

    #[test]
    fn test_jockey_edge_outranks_equal_form_edge() {
        let w = FactorWeights::default();
        let mut strong_jockey = FactorSet::neutral();
        strong_jockey.jockey = 100.0;
        strong_jockey.course = 55.0;
        let mut strong_form = FactorSet::neutral();
        strong_form.form = 100.0;

        let a = w.weighted_sum(&strong_jockey);
        let b = w.weighted_sum(&strong_form);
        assert!((a - 55.636).abs() < 1e-3);
        assert!((b - 55.455).abs() < 1e-3);
        assert!(a > b);
    }

    #[test]
    fn test_missing_weights_file_names_path() {
        let err = FactorWeights::from_json_file("no/such/weights.json").unwrap_err();
        assert!(err.to_string().contains("no/such/weights.json"));
    }

    #[test]
    fn test_weighted_sum_of_neutral_factors() {
        let w = FactorWeights::default();
        let total = w.weighted_sum(&FactorSet::neutral());
        assert!((total - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_weights_deserialize_from_json() {
        let json = serde_json::to_string(&FactorWeights::default()).unwrap();
        let parsed: FactorWeights = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, FactorWeights::default());
    }
}
