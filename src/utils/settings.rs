//! Frame Clock Configuration
//!
//! [`ClockSettings`] controls how [`FrameClock`](crate::FrameClock) turns
//! wall-clock time into animation deltas.
//!
//! ```rust
//! use tweenloop::{ClockSettings, Seconds};
//!
//! // Default: measured deltas, clamped to a quarter second
//! let settings = ClockSettings::default();
//!
//! // Deterministic 60 Hz stepping, e.g. for frame captures
//! let settings = ClockSettings {
//!     fixed_delta: Some(Seconds::new(1.0 / 60.0)),
//!     ..Default::default()
//! };
//! ```

use crate::animation::Seconds;

/// Longest delta a single tick may report by default.
pub const DEFAULT_MAX_DELTA: Seconds = Seconds::new(0.25);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockSettings {
    /// Upper bound applied to each measured delta. `None` disables clamping.
    ///
    /// Keeps a stalled frame (debugger pause, window drag) from skipping a
    /// whole clip in one step.
    pub max_delta: Option<Seconds>,

    /// When set, every tick reports this step instead of the measured delta.
    pub fixed_delta: Option<Seconds>,
}

impl Default for ClockSettings {
    fn default() -> Self {
        Self {
            max_delta: Some(DEFAULT_MAX_DELTA),
            fixed_delta: None,
        }
    }
}
