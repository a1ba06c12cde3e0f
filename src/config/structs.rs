//! Configuration data structures.
//!
//! This module contains all the struct definitions for configuration options.
//! Each struct corresponds to a section in the TOML configuration file.

/// Circuit breaker tuning (timeouts, thresholds, rolling window).
pub mod breaker_config;

/// Cache backend configuration (Redis address, prefix, TTL).
pub mod cache_backend_config;

/// Root configuration structure containing all settings.
pub mod configuration;

/// Hotkey detection configuration (window, threshold, sharding).
pub mod hotkey_config;

/// Connection pool tuning (acquire timeout, idle sweep, validation).
pub mod pool_config;

/// Authoritative store connection configuration.
pub mod store_config;

/// Sessions table/column name customization.
pub mod store_structure_config;

/// Per-tier pool bounds, concurrency limits and query timeouts.
pub mod tier_limits;

/// Tier-to-limits mapping resolved once at startup.
pub mod tiers_config;
