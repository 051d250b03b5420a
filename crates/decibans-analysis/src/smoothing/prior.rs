//! Named smoothing priors and a config-driven smoother.

use decibans_core::config::SmoothingConfig;
use decibans_core::constants::{
    DEFAULT_CARDINALITY, DEFAULT_CREDIBLE_LEVEL, JEFFREYS_ALPHA, LAPLACE_ALPHA,
};
use decibans_core::errors::DomainResult;

/// Pseudo-count choice for additive smoothing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SmoothingPrior {
    /// α = 1, add-one smoothing.
    #[default]
    Laplace,
    /// α = 0.5.
    Jeffreys,
    /// Any other pseudo-count.
    Custom(f64),
}

impl SmoothingPrior {
    pub fn alpha(&self) -> f64 {
        match self {
            Self::Laplace => LAPLACE_ALPHA,
            Self::Jeffreys => JEFFREYS_ALPHA,
            Self::Custom(alpha) => *alpha,
        }
    }

    /// Map a pseudo-count back to a named prior where one matches.
    pub fn from_alpha(alpha: f64) -> Self {
        if alpha == LAPLACE_ALPHA {
            Self::Laplace
        } else if alpha == JEFFREYS_ALPHA {
            Self::Jeffreys
        } else {
            Self::Custom(alpha)
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Laplace => "laplace",
            Self::Jeffreys => "jeffreys",
            Self::Custom(_) => "custom",
        }
    }
}

/// Additive smoother bound to a prior, an outcome cardinality, and a
/// credible level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Smoother {
    prior: SmoothingPrior,
    cardinality: u64,
    credible_level: f64,
}

impl Smoother {
    pub fn new(prior: SmoothingPrior, cardinality: u64) -> Self {
        Self {
            prior,
            cardinality,
            credible_level: DEFAULT_CREDIBLE_LEVEL,
        }
    }

    /// Build from resolved configuration.
    pub fn from_config(config: &SmoothingConfig) -> Self {
        let smoother = Self {
            prior: SmoothingPrior::from_alpha(config.effective_alpha()),
            cardinality: config.effective_cardinality(),
            credible_level: config.effective_credible_level(),
        };
        tracing::debug!(
            prior = smoother.prior.name(),
            alpha = smoother.alpha(),
            cardinality = smoother.cardinality,
            "smoother configured"
        );
        smoother
    }

    pub fn with_credible_level(mut self, level: f64) -> Self {
        self.credible_level = level;
        self
    }

    pub fn prior(&self) -> SmoothingPrior {
        self.prior
    }

    pub fn alpha(&self) -> f64 {
        self.prior.alpha()
    }

    pub fn cardinality(&self) -> u64 {
        self.cardinality
    }

    pub fn credible_level(&self) -> f64 {
        self.credible_level
    }

    /// Smoothed probability of `occurrences` in `trials`.
    pub fn probability(&self, occurrences: u64, trials: u64) -> DomainResult<f64> {
        super::laplace_smooth(self.alpha(), occurrences, trials, self.cardinality)
    }

    /// Credible interval around [`Smoother::probability`] at the configured level.
    pub fn interval(&self, occurrences: u64, trials: u64) -> DomainResult<(f64, f64)> {
        super::credible_interval(
            self.alpha(),
            occurrences,
            trials,
            self.cardinality,
            self.credible_level,
        )
    }
}

impl Default for Smoother {
    fn default() -> Self {
        Self::new(SmoothingPrior::Laplace, DEFAULT_CARDINALITY)
    }
}
