//! Top-level decibans configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::smoothing_config::KNOWN_PRIORS;
use super::SmoothingConfig;
use crate::errors::ConfigError;

/// Project config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "decibans.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Programmatic overrides (`ConfigOverrides`)
/// 2. Environment variables (`DECIBANS_*`)
/// 3. Project config (`decibans.toml` in project root)
/// 4. User config (`~/.decibans/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct DecibansConfig {
    pub smoothing: SmoothingConfig,
}

/// Caller-supplied overrides, applied last.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub smoothing_prior: Option<String>,
    pub smoothing_alpha: Option<f64>,
    pub smoothing_cardinality: Option<u64>,
    pub smoothing_credible_level: Option<f64>,
}

impl DecibansConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(
                            path = %user_config_path.display(),
                            error = %e,
                            "ignoring unreadable user config"
                        );
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;
        tracing::debug!(
            alpha = config.smoothing.effective_alpha(),
            cardinality = config.smoothing.effective_cardinality(),
            "config resolved"
        );

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &DecibansConfig) -> Result<(), ConfigError> {
        let smoothing = &config.smoothing;
        if let Some(ref prior) = smoothing.prior {
            if !KNOWN_PRIORS.contains(&prior.to_ascii_lowercase().as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: "smoothing.prior".to_string(),
                    message: format!("must be one of {}", KNOWN_PRIORS.join(", ")),
                });
            }
        }
        if let Some(alpha) = smoothing.alpha {
            if !(alpha.is_finite() && alpha > 0.0) {
                return Err(ConfigError::ValidationFailed {
                    field: "smoothing.alpha".to_string(),
                    message: "must be a positive finite number".to_string(),
                });
            }
        }
        if smoothing.cardinality == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "smoothing.cardinality".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if let Some(level) = smoothing.credible_level {
            if !(level > 0.0 && level < 1.0) {
                return Err(ConfigError::ValidationFailed {
                    field: "smoothing.credible_level".to_string(),
                    message: "must be strictly between 0.0 and 1.0".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.decibans/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".decibans").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut DecibansConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: DecibansConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` override.
    fn merge(base: &mut DecibansConfig, other: &DecibansConfig) {
        if other.smoothing.prior.is_some() {
            base.smoothing.prior = other.smoothing.prior.clone();
        }
        if other.smoothing.alpha.is_some() {
            base.smoothing.alpha = other.smoothing.alpha;
        }
        if other.smoothing.cardinality.is_some() {
            base.smoothing.cardinality = other.smoothing.cardinality;
        }
        if other.smoothing.credible_level.is_some() {
            base.smoothing.credible_level = other.smoothing.credible_level;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `DECIBANS_SMOOTHING_ALPHA`, `DECIBANS_SMOOTHING_PRIOR`, etc.
    /// Unparsable values are ignored.
    fn apply_env_overrides(config: &mut DecibansConfig) {
        if let Ok(val) = std::env::var("DECIBANS_SMOOTHING_PRIOR") {
            config.smoothing.prior = Some(val);
        }
        if let Ok(val) = std::env::var("DECIBANS_SMOOTHING_ALPHA") {
            if let Ok(v) = val.parse::<f64>() {
                config.smoothing.alpha = Some(v);
            }
        }
        if let Ok(val) = std::env::var("DECIBANS_SMOOTHING_CARDINALITY") {
            if let Ok(v) = val.parse::<u64>() {
                config.smoothing.cardinality = Some(v);
            }
        }
        if let Ok(val) = std::env::var("DECIBANS_SMOOTHING_CREDIBLE_LEVEL") {
            if let Ok(v) = val.parse::<f64>() {
                config.smoothing.credible_level = Some(v);
            }
        }
    }

    fn apply_overrides(config: &mut DecibansConfig, overrides: &ConfigOverrides) {
        if let Some(ref v) = overrides.smoothing_prior {
            config.smoothing.prior = Some(v.clone());
        }
        if let Some(v) = overrides.smoothing_alpha {
            config.smoothing.alpha = Some(v);
        }
        if let Some(v) = overrides.smoothing_cardinality {
            config.smoothing.cardinality = Some(v);
        }
        if let Some(v) = overrides.smoothing_credible_level {
            config.smoothing.credible_level = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
