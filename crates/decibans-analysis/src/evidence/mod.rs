//! Jeffreys-scale interpretation of Bayes factors.

pub mod types;

pub use types::EvidenceStrength;

use decibans_core::constants::{BARELY_WORTH_MENTIONING_MAX, STRONG_MAX, SUBSTANTIAL_MAX};
use decibans_core::errors::{DomainError, DomainResult};

use crate::odds::decibans::decibans_to_odds;

/// Interpret the strength of evidence for a Bayes factor.
///
/// Brackets are closed on their upper end: 3.2 is still "barely worth
/// mentioning", 3.3 is "substantial".
///
/// # Errors
/// - `NonPositiveFactor` if `factor <= 0` or NaN.
///
/// # Examples
/// ```
/// use decibans_analysis::{interpret, EvidenceStrength};
/// assert_eq!(interpret(1.0).unwrap(), EvidenceStrength::Equal);
/// assert_eq!(interpret(20.0).unwrap().description(), "Evidence is strong.");
/// ```
pub fn interpret(factor: f64) -> DomainResult<EvidenceStrength> {
    let strength = if factor > 0.0 && factor < 1.0 {
        EvidenceStrength::SupportsAlternative
    } else if factor == 1.0 {
        EvidenceStrength::Equal
    } else if factor > 1.0 && factor <= BARELY_WORTH_MENTIONING_MAX {
        EvidenceStrength::BarelyWorthMentioning
    } else if factor > BARELY_WORTH_MENTIONING_MAX && factor <= SUBSTANTIAL_MAX {
        EvidenceStrength::Substantial
    } else if factor > SUBSTANTIAL_MAX && factor <= STRONG_MAX {
        EvidenceStrength::Strong
    } else if factor > STRONG_MAX {
        EvidenceStrength::Decisive
    } else {
        tracing::debug!(factor, "cannot interpret non-positive factor");
        return Err(DomainError::NonPositiveFactor { factor });
    };
    Ok(strength)
}

/// Interpret evidence expressed in decibans.
///
/// Every real deciban value maps to a positive factor, so this only fails
/// for NaN or for values so negative the factor underflows to zero.
pub fn interpret_decibans(db: f64) -> DomainResult<EvidenceStrength> {
    interpret(decibans_to_odds(db))
}
