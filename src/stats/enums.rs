//! Statistics enumerations.

/// Overall health classification for the snapshot payload.
pub mod health_status;

/// Events that mutate the statistics counters.
pub mod stats_event;
