//! Numeric constants for odds, evidence, and smoothing.

/// Relative tolerance for comparing converted `f64` values.
///
/// Probability/odds/deciban conversions are exact only up to floating-point
/// rounding; round-trips are expected to agree within this bound.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Decibans per factor of ten in the odds.
pub const DECIBANS_PER_DECADE: f64 = 10.0;

/// Additive smoothing pseudo-count for the Laplace (add-one) prior.
pub const LAPLACE_ALPHA: f64 = 1.0;

/// Additive smoothing pseudo-count for the Jeffreys prior.
pub const JEFFREYS_ALPHA: f64 = 0.5;

/// Default number of possible outcomes when smoothing (binary event).
pub const DEFAULT_CARDINALITY: u64 = 2;

/// Default mass of a smoothing credible interval.
pub const DEFAULT_CREDIBLE_LEVEL: f64 = 0.95;

// Jeffreys' scale, upper bounds are inclusive.
pub const BARELY_WORTH_MENTIONING_MAX: f64 = 3.2;
pub const SUBSTANTIAL_MAX: f64 = 10.0;
pub const STRONG_MAX: f64 = 100.0;

/// Returns true when `a` and `b` agree within `DEFAULT_TOLERANCE`, relative
/// to the larger magnitude (absolute near zero).
pub fn approx_eq(a: f64, b: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= DEFAULT_TOLERANCE * scale
}
