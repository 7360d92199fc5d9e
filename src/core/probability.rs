//! Win and place confidence curves
//!
//! These are heuristic confidence scores keyed on power score, field size
//! and rank. They are not normalised across the field and are not expected
//! to sum to 100.

/// Win confidence in percent for the entrant at `rank` (0 = top pick)
pub fn win_probability(power_score: f64, field_size: usize, rank: usize) -> f64 {
    let mut p = power_score / 100.0;
    p /= (1.0 + (field_size as f64 - 5.0) * 0.05).max(0.1);
    p *= (100.0 - 3.0 * rank as f64) / 100.0;

    match rank {
        0 => (p * 35.0).clamp(20.0, 45.0),
        1 => (p * 25.0).clamp(10.0, 25.0),
        2 => (p * 20.0).clamp(8.0, 18.0),
        _ => (p * 15.0).clamp(5.0, 12.0),
    }
}

/// Place (top three) confidence in percent
pub fn place_probability(power_score: f64, field_size: usize, rank: usize) -> f64 {
    let mut p = 1.8 * power_score / 100.0;
    p /= (1.0 + (field_size as f64 - 8.0) * 0.03).max(0.1);
    p *= (100.0 - 2.0 * rank as f64) / 100.0;

    (p * 50.0).clamp(15.0, 75.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_two_bands_hold_for_all_field_sizes() {
        for field in 2..=20 {
            for score in [0.0, 12.5, 50.0, 73.4, 100.0] {
                let first = win_probability(score, field, 0);
                let second = win_probability(score, field, 1);
                assert!((20.0..=45.0).contains(&first), "rank0 {} at field {}", first, field);
                assert!((10.0..=25.0).contains(&second), "rank1 {} at field {}", second, field);
            }
        }
    }

    #[test]
    fn test_lower_rank_bands() {
        for field in 3..=20 {
            assert!((8.0..=18.0).contains(&win_probability(80.0, field, 2)));
            for rank in 3..field {
                let p = win_probability(80.0, field, rank);
                assert!((5.0..=12.0).contains(&p));
            }
        }
    }

    #[test]
    fn test_win_probability_values() {
        // 80/100 with a field of 5 and no rank discount: 0.8 * 35 = 28
        assert!((win_probability(80.0, 5, 0) - 28.0).abs() < 1e-9);
        // floor at the bottom of the band
        assert_eq!(win_probability(10.0, 12, 0), 20.0);
        // ceiling at the top of the band
        assert_eq!(win_probability(100.0, 2, 1), 25.0);
    }

    #[test]
    fn test_place_probability_values() {
        // 1.8 * 0.6 = 1.08, field of 8 has no divisor, rank 0: 54
        assert!((place_probability(60.0, 8, 0) - 54.0).abs() < 1e-9);
        assert_eq!(place_probability(100.0, 4, 0), 75.0);
        assert_eq!(place_probability(5.0, 16, 9), 15.0);
    }

    #[test]
    fn test_larger_fields_reduce_confidence() {
        let small = place_probability(60.0, 6, 1);
        let large = place_probability(60.0, 16, 1);
        assert!(small > large);
    }

    #[test]
    fn test_probabilities_not_normalised() {
        let field = 3;
        let total: f64 = (0..field).map(|r| win_probability(100.0, field, r)).sum();
        assert!((total - 100.0).abs() > 1.0);
    }
}
