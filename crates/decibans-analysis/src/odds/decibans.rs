//! Deciban conversions: `10 · log10(odds)` and back.

use decibans_core::constants::DECIBANS_PER_DECADE;
use decibans_core::errors::{DomainError, DomainResult};

/// Express odds on to one in decibans.
///
/// # Errors
/// - `NonPositiveOdds` if `odds <= 0` or NaN.
///
/// # Examples
/// ```
/// use decibans_analysis::decibans;
/// assert!((decibans(100.0).unwrap() - 20.0).abs() < 1e-12);
/// ```
pub fn decibans(odds: f64) -> DomainResult<f64> {
    if odds.is_nan() || odds <= 0.0 {
        tracing::debug!(odds, "decibans of non-positive odds");
        return Err(DomainError::NonPositiveOdds { odds });
    }
    Ok(DECIBANS_PER_DECADE * odds.log10())
}

/// Convert decibans to odds on to one: `10^(db / 10)`.
///
/// Defined for every real `db`; the result is always positive (it may
/// underflow to 0 or overflow to infinity at the extremes of `f64`).
pub fn decibans_to_odds(db: f64) -> f64 {
    10f64.powf(db / DECIBANS_PER_DECADE)
}
