//! Statistics and health aggregation module.
//!
//! Collects counters from every subsystem of the lookup cache into atomic
//! statistics, and assembles the combined health snapshot consumed by the
//! surrounding application's health endpoint.
//!
//! The aggregator is strictly read-only over component state: it polls
//! counters the components already maintain and never blocks the calling
//! path. A degraded component yields a partial snapshot, never a failure.

/// Statistics event enumeration and health status.
pub mod enums;

/// Statistics and health snapshot implementations for the session gate.
pub mod impls;

/// Statistics data structures.
pub mod structs;

#[cfg(test)]
mod tests;
