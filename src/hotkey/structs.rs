//! Hotkey data structures.

/// One per-second bucket of sharded access counters.
pub mod hotkey_bucket;

/// The sliding-window hotkey detector.
pub mod hotkey_detector;

/// A key and its access count within the active window.
pub mod hotkey_entry;
