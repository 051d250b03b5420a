//! Bayesian evidence utilities.
//!
//! Pure functions over `f64`: probability↔odds, Bayes factors and posterior
//! odds, decibans, additive smoothing, and Jeffreys-scale interpretation,
//! plus a first-occurrence summary over sequences.
//!
//! All arithmetic is native double precision. Conversions are guaranteed
//! only within [`decibans_core::constants::DEFAULT_TOLERANCE`], never bit-exact.

pub mod evidence;
pub mod novelty;
pub mod odds;
pub mod smoothing;

pub use decibans_core::errors::{DomainError, DomainResult};
pub use evidence::{interpret, interpret_decibans, EvidenceStrength};
pub use novelty::{novelty, NoveltyColumn, NoveltyRow, NoveltyTable};
pub use odds::bayes::{factor, posterior_odds};
pub use odds::decibans::{decibans, decibans_to_odds};
pub use odds::{odds_to_probability, probability_to_odds};
pub use smoothing::{credible_interval, laplace_smooth, Smoother, SmoothingPrior};
