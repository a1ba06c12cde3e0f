//! Implementation blocks for configuration types.

/// Configuration loading, saving and default generation.
pub mod configuration;

/// Display implementation for configuration errors.
pub mod configuration_error;

/// Service tier display and iteration helpers.
pub mod service_tier;

/// Store driver display and URL scheme helpers.
pub mod store_driver;

/// Tier limit resolution.
pub mod tiers_config;
