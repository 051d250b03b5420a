//! Bayes factor and posterior odds.

use decibans_core::errors::{DomainError, DomainResult};

/// Bayes factor `K = P(obs | H) / P(obs | ¬H)`.
///
/// `p_obs_true`: probability of the observation if the hypothesis is true.
/// `p_obs_false`: probability of the observation if it is false.
///
/// # Errors
/// - `ZeroLikelihood` if `p_obs_false == 0`.
pub fn factor(p_obs_true: f64, p_obs_false: f64) -> DomainResult<f64> {
    if p_obs_false == 0.0 {
        tracing::debug!(p_obs_true, "zero likelihood under the alternative");
        return Err(DomainError::ZeroLikelihood);
    }
    Ok(p_obs_true / p_obs_false)
}

/// Posterior odds from prior odds and the two observation likelihoods.
///
/// Returns `(K, prior_odds * K)` where `K` is the Bayes [`factor`].
/// Only the factor's own validation applies.
///
/// # Examples
/// ```
/// use decibans_analysis::posterior_odds;
/// let (k, post) = posterior_odds(2.0, 0.6, 0.5).unwrap();
/// assert!((k - 1.2).abs() < 1e-12);
/// assert!((post - 2.4).abs() < 1e-12);
/// ```
pub fn posterior_odds(prior_odds: f64, p_obs_true: f64, p_obs_false: f64) -> DomainResult<(f64, f64)> {
    let k = factor(p_obs_true, p_obs_false)?;
    Ok((k, prior_odds * k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor() {
        assert!((factor(0.6, 0.5).unwrap() - 1.2).abs() < 1e-12);
        assert_eq!(factor(0.0, 0.5).unwrap(), 0.0);
    }

    #[test]
    fn test_factor_zero_denominator() {
        assert_eq!(factor(0.6, 0.0), Err(DomainError::ZeroLikelihood));
    }

    #[test]
    fn test_posterior_propagates_factor_error() {
        assert_eq!(
            posterior_odds(2.0, 0.6, 0.0),
            Err(DomainError::ZeroLikelihood)
        );
    }

    #[test]
    fn test_posterior_does_not_validate_prior() {
        // Negative prior odds pass through; only the factor is checked.
        let (k, post) = posterior_odds(-1.0, 0.5, 0.25).unwrap();
        assert_eq!(k, 2.0);
        assert_eq!(post, -2.0);
    }
}
