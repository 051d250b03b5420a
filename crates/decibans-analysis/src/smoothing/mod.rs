//! Additive (Laplace) smoothing of empirical frequencies.
//!
//! `p* = (k + α) / (n + α·K)` for `k` occurrences in `n` trials over `K`
//! possible outcomes. Under a symmetric Dirichlet(α) prior this is the
//! posterior mean of one outcome, whose marginal is
//! `Beta(k + α, n − k + (K − 1)·α)`; [`credible_interval`] reports the
//! equal-tailed interval of that marginal.

pub mod prior;

pub use prior::{Smoother, SmoothingPrior};

use decibans_core::errors::{DomainError, DomainResult};
use statrs::distribution::{Beta, ContinuousCDF};

/// Laplace-smoothed probability of an outcome.
///
/// `alpha`: pseudo-count, e.g. 0.1, 0.5 (Jeffreys) or 1 (Laplace).
/// `occurrences`: trials with the outcome of interest.
/// `trials`: trials in which the occurrences were observed.
/// `cardinality`: number of possible outcomes of the event.
///
/// `occurrences <= trials` is not checked.
///
/// # Errors
/// - `DegenerateSmoothing` if `trials + alpha * cardinality == 0`.
///
/// # Examples
/// ```
/// use decibans_analysis::laplace_smooth;
/// let p = laplace_smooth(1.0, 0, 10, 2).unwrap();
/// assert!((p - 1.0 / 12.0).abs() < 1e-15);
/// ```
pub fn laplace_smooth(alpha: f64, occurrences: u64, trials: u64, cardinality: u64) -> DomainResult<f64> {
    let denominator = trials as f64 + alpha * cardinality as f64;
    if denominator == 0.0 {
        tracing::debug!(alpha, trials, cardinality, "degenerate smoothing denominator");
        return Err(DomainError::DegenerateSmoothing {
            trials,
            alpha,
            cardinality,
        });
    }
    Ok((occurrences as f64 + alpha) / denominator)
}

/// Equal-tailed credible interval around the smoothed estimate.
///
/// Returns `(low, high)` holding `level` posterior mass, e.g. 0.95.
///
/// # Errors
/// - `InvalidPosterior` if `alpha` is not a positive finite number,
///   `level` is outside (0, 1), `cardinality < 2`, or
///   `occurrences > trials`.
pub fn credible_interval(
    alpha: f64,
    occurrences: u64,
    trials: u64,
    cardinality: u64,
    level: f64,
) -> DomainResult<(f64, f64)> {
    if !(alpha.is_finite() && alpha > 0.0) {
        return Err(invalid(format!("alpha must be positive and finite, got {alpha}")));
    }
    if !(level > 0.0 && level < 1.0) {
        return Err(invalid(format!("level must lie in (0, 1), got {level}")));
    }
    if cardinality < 2 {
        return Err(invalid(format!("cardinality must be at least 2, got {cardinality}")));
    }
    if occurrences > trials {
        return Err(invalid(format!(
            "occurrences ({occurrences}) exceed trials ({trials})"
        )));
    }

    let shape_a = occurrences as f64 + alpha;
    let shape_b = (trials - occurrences) as f64 + (cardinality - 1) as f64 * alpha;
    let dist = Beta::new(shape_a, shape_b).map_err(|e| invalid(e.to_string()))?;

    let tail = (1.0 - level) / 2.0;
    let low = dist.inverse_cdf(tail);
    let high = dist.inverse_cdf(1.0 - tail);
    if !(low.is_finite() && high.is_finite()) {
        return Err(invalid(format!(
            "quantiles not finite for Beta({shape_a}, {shape_b})"
        )));
    }

    tracing::trace!(shape_a, shape_b, low, high, "credible interval");
    Ok((low.clamp(0.0, 1.0), high.clamp(0.0, 1.0)))
}

fn invalid(message: String) -> DomainError {
    tracing::debug!(reason = message.as_str(), "invalid smoothing posterior");
    DomainError::InvalidPosterior { message }
}
