//! Configuration system for decibans.
//! TOML-based, layered resolution: overrides > env > project > user > defaults.

pub mod decibans_config;
pub mod smoothing_config;

pub use decibans_config::{ConfigOverrides, DecibansConfig};
pub use smoothing_config::SmoothingConfig;
