//! Probability ↔ odds (on to one) conversions.

pub mod bayes;
pub mod decibans;

use decibans_core::errors::{DomainError, DomainResult};

/// Convert a probability to odds on to one: `p / (1 - p)`.
///
/// # Errors
/// - `ProbabilityOutOfRange` if `p` is outside [0, 1] or NaN.
/// - `CertainProbability` if `p == 1`.
///
/// # Examples
/// ```
/// use decibans_analysis::probability_to_odds;
/// assert_eq!(probability_to_odds(0.5).unwrap(), 1.0);
/// assert_eq!(probability_to_odds(0.0).unwrap(), 0.0);
/// ```
pub fn probability_to_odds(p: f64) -> DomainResult<f64> {
    if !(0.0..=1.0).contains(&p) {
        tracing::debug!(p, "probability outside [0, 1]");
        return Err(DomainError::ProbabilityOutOfRange { p });
    }
    if p == 1.0 {
        tracing::debug!("probability of 1 has no finite odds");
        return Err(DomainError::CertainProbability);
    }
    Ok(p / (1.0 - p))
}

/// Convert odds on to one to a probability: `1 - 1 / (1 + odds)`.
///
/// Infinite odds map to a probability of 1.
///
/// # Errors
/// - `NegativeOdds` if `odds < 0` or NaN.
///
/// # Examples
/// ```
/// use decibans_analysis::odds_to_probability;
/// assert_eq!(odds_to_probability(1.0).unwrap(), 0.5);
/// ```
pub fn odds_to_probability(odds: f64) -> DomainResult<f64> {
    if odds.is_nan() || odds < 0.0 {
        tracing::debug!(odds, "negative odds");
        return Err(DomainError::NegativeOdds { odds });
    }
    Ok(1.0 - 1.0 / (1.0 + odds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_odds() {
        assert_eq!(probability_to_odds(0.5).unwrap(), 1.0);
        assert_eq!(odds_to_probability(1.0).unwrap(), 0.5);
    }

    #[test]
    fn test_zero_probability_and_odds() {
        assert_eq!(probability_to_odds(0.0).unwrap(), 0.0);
        assert_eq!(odds_to_probability(0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_certain_probability_rejected() {
        assert_eq!(
            probability_to_odds(1.0),
            Err(DomainError::CertainProbability)
        );
    }

    #[test]
    fn test_out_of_range_probability_rejected() {
        for p in [-0.1, 1.1, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(
                    probability_to_odds(p),
                    Err(DomainError::ProbabilityOutOfRange { .. })
                ),
                "p = {p}"
            );
        }
    }

    #[test]
    fn test_negative_odds_rejected() {
        assert!(matches!(
            odds_to_probability(-0.5),
            Err(DomainError::NegativeOdds { .. })
        ));
        assert!(odds_to_probability(f64::NAN).is_err());
    }

    #[test]
    fn test_infinite_odds_is_certainty() {
        assert_eq!(odds_to_probability(f64::INFINITY).unwrap(), 1.0);
    }

    #[test]
    fn test_three_to_one() {
        let odds = probability_to_odds(0.75).unwrap();
        assert!((odds - 3.0).abs() < 1e-12);
        assert!((odds_to_probability(3.0).unwrap() - 0.75).abs() < 1e-12);
    }
}
