//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the session cache
//! configuration from TOML files. It provides configuration options for all
//! subsystems of the lookup cache.
//!
//! # Configuration Structure
//!
//! The main configuration file (`config.toml`) contains sections for:
//! - **cache**: Redis cache backend (address, key prefix, TTL, breaker tuning)
//! - **store**: Authoritative session store (driver, DSN, table/column names, breaker tuning)
//! - **pool**: Connection pool tuning (acquire timeout, idle sweep, validation)
//! - **tiers**: Per-tier pool bounds, concurrency limits and query timeouts
//! - **hotkey**: Hotkey detection window, threshold and sharding
//!
//! # Features
//!
//! - TOML file parsing with detailed error messages
//! - Customizable store table/column names
//! - Default value generation
//!
//! # Example
//!
//! ```rust,ignore
//! use sessiongate::config::structs::configuration::Configuration;
//!
//! // Load configuration from file
//! let config = Configuration::load_file("config.toml")?;
//!
//! // Generate default configuration
//! let default_config = Configuration::init();
//! ```

/// Configuration enumerations (service tiers, store drivers, errors).
pub mod enums;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

/// Configuration data structures.
pub mod structs;
