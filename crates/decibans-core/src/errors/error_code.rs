//! ErrorCode trait for structured error reporting.

/// Every error enum implements this to expose a stable, machine-readable
/// code alongside its human message.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "DOMAIN_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const DOMAIN_ERROR: &str = "DOMAIN_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
