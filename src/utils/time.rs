#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;

#[cfg(target_arch = "wasm32")]
use web_time::Instant;

use crate::animation::Seconds;
use crate::utils::settings::ClockSettings;

/// Per-frame time source for driving animations.
///
/// The animation core has no notion of wall-clock time; the render loop ticks
/// this clock once per frame and passes the returned delta to
/// [`Animation::update`](crate::Animation::update).
#[derive(Debug, Clone)]
pub struct FrameClock {
    settings: ClockSettings,
    last_update: Instant,
    /// Delta reported by the last tick
    pub delta: Seconds,
    /// Sum of every delta reported so far
    pub elapsed: Seconds,
    /// Total number of ticks
    pub frame_count: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(ClockSettings::default())
    }
}

impl FrameClock {
    /// Creates a clock whose first tick measures from now.
    #[must_use]
    pub fn new(settings: ClockSettings) -> Self {
        Self {
            settings,
            last_update: Instant::now(),
            delta: Seconds::ZERO,
            elapsed: Seconds::ZERO,
            frame_count: 0,
        }
    }

    /// A clock that ignores the wall clock and always steps by `step`.
    #[must_use]
    pub fn with_fixed_step(step: Seconds) -> Self {
        Self::new(ClockSettings {
            fixed_delta: Some(step),
            ..ClockSettings::default()
        })
    }

    #[must_use]
    pub fn settings(&self) -> &ClockSettings {
        &self.settings
    }

    /// Advances the clock by one frame and returns the delta to feed into the
    /// animation.
    pub fn tick(&mut self) -> Seconds {
        let now = Instant::now();
        let measured = Seconds::from(now.duration_since(self.last_update));
        self.last_update = now;

        let mut delta = self.settings.fixed_delta.unwrap_or(measured);
        if let Some(max) = self.settings.max_delta
            && delta > max
        {
            log::debug!("Frame delta {delta} clamped to {max}");
            delta = max;
        }

        self.delta = delta;
        self.elapsed += delta;
        self.frame_count += 1;
        delta
    }
}
