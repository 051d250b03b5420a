//! Error handling for decibans.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod domain_error;
pub mod error_code;

pub use config_error::ConfigError;
pub use domain_error::{DomainError, DomainResult};
pub use error_code::ErrorCode;
