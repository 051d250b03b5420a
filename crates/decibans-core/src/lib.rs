//! Core types, errors, config, tracing, and constants shared by the
//! decibans crates.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

pub use errors::{ConfigError, DomainError, DomainResult, ErrorCode};
