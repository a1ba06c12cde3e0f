//! Configuration enumerations.

/// Errors raised while loading or saving configuration.
pub mod configuration_error;

/// Service tier classes with distinct resource limits.
pub mod service_tier;

/// Supported authoritative store drivers.
pub mod store_driver;
