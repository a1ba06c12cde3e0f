//! Circuit breaker module.
//!
//! Wraps every call to an external backend and gates it through a
//! CLOSED/OPEN/HALF_OPEN state machine driven by a rolling failure window.
//!
//! # Behavior
//!
//! - **CLOSED**: calls run normally; failures are counted per rolling-window
//!   bucket; exceeding the configured failure ratio opens the circuit.
//! - **OPEN**: calls are rejected immediately without touching the backend;
//!   after the reset timeout the circuit moves to HALF_OPEN.
//! - **HALF_OPEN**: a single trial call is admitted; success closes the
//!   circuit, failure reopens it and restarts the timeout.
//!
//! Each breaker is scoped to one backend (cache or authoritative store) and
//! carries its own timeout and threshold configuration. State transitions are
//! atomic with respect to concurrent callers and are logged for operators.

/// Breaker state and error enumerations.
pub mod enums;

/// Implementation blocks for the breaker state machine.
pub mod impls;

/// Breaker data structures (state machine, rolling window, snapshots).
pub mod structs;
