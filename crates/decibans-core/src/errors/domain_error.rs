//! Domain errors: an argument lies outside the domain of the function.

use super::error_code::{self, ErrorCode};

/// Raised when an input makes a conversion undefined.
///
/// Every fallible math function returns this one kind; the variant records
/// which argument was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error("probability must lie in [0, 1], got {p}")]
    ProbabilityOutOfRange { p: f64 },

    #[error("probability of 1 has no finite odds")]
    CertainProbability,

    #[error("odds must be non-negative, got {odds}")]
    NegativeOdds { odds: f64 },

    #[error("odds must be positive to express in decibans, got {odds}")]
    NonPositiveOdds { odds: f64 },

    #[error("probability of the observation under the alternative must be non-zero")]
    ZeroLikelihood,

    #[error("factor must be a positive real number, got {factor}")]
    NonPositiveFactor { factor: f64 },

    #[error("smoothing denominator is zero (trials={trials}, alpha={alpha}, cardinality={cardinality})")]
    DegenerateSmoothing {
        trials: u64,
        alpha: f64,
        cardinality: u64,
    },

    #[error("invalid posterior: {message}")]
    InvalidPosterior { message: String },
}

impl ErrorCode for DomainError {
    fn error_code(&self) -> &'static str {
        error_code::DOMAIN_ERROR
    }
}

/// Result alias for the math functions.
pub type DomainResult<T> = Result<T, DomainError>;
