use crate::animation::easing;
use crate::animation::frame::AnimationFrame;
use crate::animation::time::Seconds;
use crate::animation::transform::Transform;

/// One [`AnimationFrame`] played over a fixed duration.
///
/// The clip only tracks its own progress. It reports when it is finished but
/// never rewinds itself; looping belongs to the owning [`Animation`].
///
/// [`Animation`]: crate::animation::Animation
#[derive(Debug, Clone)]
pub struct AnimationClip {
    frame: AnimationFrame,
    interpolated: Transform,
    duration: Seconds,
    elapsed: Seconds,
}

impl AnimationClip {
    #[must_use]
    pub fn new(frame: AnimationFrame, duration: Seconds) -> Self {
        Self {
            frame,
            // Identity until the first update, not the start pose.
            interpolated: Transform::default(),
            duration,
            elapsed: Seconds::ZERO,
        }
    }

    /// Core logic: advance time and recompute the pose.
    ///
    /// `elapsed` accumulates without clamping, so overshoot and negative
    /// deltas both show up as alpha outside `[0, 1]`.
    pub fn update(&mut self, delta: Seconds) {
        // 1. Accumulate time
        self.elapsed += delta;

        // 2. Normalize
        let alpha = self.alpha();

        // 3. Ease every channel independently
        let frame = &self.frame;
        let (start, end, kind) = (frame.start(), frame.end(), frame.easing());
        self.interpolated = Transform {
            translation: easing::apply(kind, start.translation, end.translation, alpha),
            scale: easing::apply(kind, start.scale, end.scale, alpha),
            rotation: easing::apply(kind, start.rotation, end.rotation, alpha),
        };
    }

    /// Normalized progress, `elapsed / duration`.
    ///
    /// A duration that is not strictly positive yields `1.0`, which snaps the
    /// pose to the end of the frame.
    #[must_use]
    pub fn alpha(&self) -> Seconds {
        if self.duration.value() > 0.0 {
            self.elapsed / self.duration
        } else {
            Seconds::new(1.0)
        }
    }

    #[inline]
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    #[inline]
    #[must_use]
    pub fn frame(&self) -> &AnimationFrame {
        &self.frame
    }

    /// The pose computed by the last [`update`](Self::update).
    #[inline]
    #[must_use]
    pub fn interpolated(&self) -> &Transform {
        &self.interpolated
    }

    #[inline]
    #[must_use]
    pub fn duration(&self) -> Seconds {
        self.duration
    }

    #[inline]
    #[must_use]
    pub fn elapsed(&self) -> Seconds {
        self.elapsed
    }

    /// Rewinds progress for the next pass through the sequence.
    ///
    /// The cached pose is left untouched.
    pub(crate) fn reset(&mut self) {
        self.elapsed = Seconds::ZERO;
    }
}
