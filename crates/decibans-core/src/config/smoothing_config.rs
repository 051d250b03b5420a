//! Additive smoothing configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CARDINALITY, DEFAULT_CREDIBLE_LEVEL, JEFFREYS_ALPHA, LAPLACE_ALPHA,
};

/// Named priors accepted in the `prior` field.
pub const KNOWN_PRIORS: [&str; 2] = ["laplace", "jeffreys"];

/// Configuration for additive smoothing.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SmoothingConfig {
    /// Named prior: "laplace" or "jeffreys". Default: "laplace".
    pub prior: Option<String>,
    /// Explicit pseudo-count. Takes precedence over `prior`.
    pub alpha: Option<f64>,
    /// Number of possible outcomes. Default: 2.
    pub cardinality: Option<u64>,
    /// Mass of the credible interval. Default: 0.95.
    pub credible_level: Option<f64>,
}

impl SmoothingConfig {
    /// Returns the pseudo-count: explicit `alpha`, else the named prior's,
    /// else Laplace.
    pub fn effective_alpha(&self) -> f64 {
        if let Some(alpha) = self.alpha {
            return alpha;
        }
        match self.prior.as_deref().map(str::to_ascii_lowercase).as_deref() {
            Some("jeffreys") => JEFFREYS_ALPHA,
            _ => LAPLACE_ALPHA,
        }
    }

    /// Returns the effective cardinality, defaulting to 2.
    pub fn effective_cardinality(&self) -> u64 {
        self.cardinality.unwrap_or(DEFAULT_CARDINALITY)
    }

    /// Returns the effective credible level, defaulting to 0.95.
    pub fn effective_credible_level(&self) -> f64 {
        self.credible_level.unwrap_or(DEFAULT_CREDIBLE_LEVEL)
    }
}
