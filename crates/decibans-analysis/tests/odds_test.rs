//! Odds, Bayes factor, and deciban conversions end to end.

use decibans_analysis::{
    decibans, decibans_to_odds, factor, odds_to_probability, posterior_odds,
    probability_to_odds, DomainError,
};
use decibans_core::constants::approx_eq;

#[test]
fn test_even_odds_fixed_points() {
    assert_eq!(probability_to_odds(0.5).unwrap(), 1.0);
    assert_eq!(odds_to_probability(1.0).unwrap(), 0.5);
}

#[test]
fn test_factor_and_posterior() {
    assert!(approx_eq(factor(0.6, 0.5).unwrap(), 1.2));

    let (k, post) = posterior_odds(2.0, 0.6, 0.5).unwrap();
    assert!(approx_eq(k, 1.2));
    assert!(approx_eq(post, 2.4));
}

#[test]
fn test_update_chain_from_probability() {
    // Prior p = 0.2 -> odds 0.25; a factor of 8 gives posterior odds 2 -> p = 2/3.
    let prior = probability_to_odds(0.2).unwrap();
    let (_, post) = posterior_odds(prior, 0.8, 0.1).unwrap();
    assert!(approx_eq(post, 2.0));
    assert!(approx_eq(odds_to_probability(post).unwrap(), 2.0 / 3.0));
}

#[test]
fn test_decibans_add_where_factors_multiply() {
    let (k1, _) = posterior_odds(1.0, 0.9, 0.3).unwrap();
    let (k2, _) = posterior_odds(1.0, 0.5, 0.1).unwrap();
    let combined = decibans(k1 * k2).unwrap();
    let summed = decibans(k1).unwrap() + decibans(k2).unwrap();
    assert!(approx_eq(combined, summed));
    assert!(approx_eq(decibans_to_odds(summed), 15.0));
}

#[test]
fn test_domain_errors() {
    assert_eq!(probability_to_odds(1.0), Err(DomainError::CertainProbability));
    assert!(matches!(
        probability_to_odds(2.0),
        Err(DomainError::ProbabilityOutOfRange { .. })
    ));
    assert!(matches!(
        odds_to_probability(-1.0),
        Err(DomainError::NegativeOdds { .. })
    ));
    assert_eq!(factor(0.5, 0.0), Err(DomainError::ZeroLikelihood));
    assert!(matches!(decibans(0.0), Err(DomainError::NonPositiveOdds { .. })));
}
