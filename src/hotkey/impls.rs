//! Implementation blocks for hotkey types.

/// Recording, window summation and alerting.
pub mod hotkey_detector;
