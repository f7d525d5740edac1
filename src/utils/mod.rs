//! Utility Module
//!
//! - [`FrameClock`]: per-frame delta source for the render loop
//! - [`ClockSettings`]: clamping and fixed-step configuration for the clock

pub mod settings;
pub mod time;

pub use settings::ClockSettings;
pub use time::FrameClock;
