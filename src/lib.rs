//! # Sessiongate
//!
//! A resilient session lookup cache for multi-tenant web applications.
//!
//! ## Overview
//!
//! Sessiongate answers "is this token valid, and what does it authorize?"
//! with sub-millisecond cache hits under normal conditions, while surviving
//! backend outages, connection exhaustion and traffic spikes without
//! corrupting data or cascading failures. It is a library consumed by the
//! surrounding request-handling layer, not a network-facing service.
//!
//! ## Features
//!
//! - **Cache-aside session validation**: Redis in front of the authoritative
//!   relational store (PostgreSQL or SQLite), with bounded staleness TTLs
//! - **Per-backend circuit breakers**: rolling-window failure tracking with
//!   CLOSED/OPEN/HALF_OPEN gating and per-backend timeouts
//! - **Tiered connection pools**: bounded per-tier pools with acquire
//!   timeouts, idle sweeping and validation pings
//! - **Hotkey detection**: sharded sliding-window counters feeding
//!   operational alerting
//! - **Health aggregation**: a single JSON-shaped snapshot of breaker
//!   states, pool gauges, hit rates and hot keys
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use sessiongate::config::structs::configuration::Configuration;
//! use sessiongate::config::enums::service_tier::ServiceTier;
//! use sessiongate::session::structs::session_gate::SessionGate;
//!
//! let config = Arc::new(Configuration::load_file("config.toml")?);
//! let gate = SessionGate::new(config).await?;
//!
//! match gate.validate(token, ServiceTier::pro).await? {
//!     Validation::Valid(record) => { /* authorized */ }
//!     Validation::Invalid => { /* reject */ }
//! }
//! ```
//!
//! ## Modules
//!
//! - [`breaker`] - Per-backend circuit breakers
//! - [`cache`] - Redis cache backend adapter
//! - [`common`] - Shared utilities
//! - [`config`] - Configuration management and TOML parsing
//! - [`hotkey`] - Sliding-window hotkey detection
//! - [`pool`] - Tiered bounded connection pools
//! - [`session`] - Cache-aside validation and the session gate
//! - [`stats`] - Statistics counters and the health snapshot
//! - [`store`] - Authoritative session store (PostgreSQL, SQLite)

/// Circuit breaker module gating calls to external backends.
///
/// Tracks rolling failure rates per backend and stops calling a failing
/// backend for a cooldown period to avoid cascading failures.
pub mod breaker;

/// Cache backend adapter module.
///
/// Uniform key-value operations against Redis, routed through the breaker
/// and per-tier connection pools, with hotkey tracking on every touch.
pub mod cache;

/// Common utilities and shared functionality.
///
/// Timestamp helpers used across all modules.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, and validating configuration from TOML files,
/// including per-tier limits and store schema customization.
pub mod config;

/// Hotkey detection module.
///
/// Sliding-window access counting over cache keys with threshold alerting
/// for disproportionately hot keys.
pub mod hotkey;

/// Logging setup built on fern with colored level output.
pub mod logging;

/// Connection pool module.
///
/// Bounded per-backend/per-tier pools with acquire timeouts, idle sweeping
/// and validation pings.
pub mod pool;

/// Session cache module.
///
/// The cache-aside validation layer and the central session gate registry.
pub mod session;

/// Statistics and health aggregation module.
///
/// Atomic counters and the combined health snapshot payload.
pub mod stats;

/// Authoritative session store module.
///
/// The durable source of truth for sessions, over PostgreSQL or SQLite.
pub mod store;
