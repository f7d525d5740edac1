use crate::animation::easing::Easing;
use crate::animation::transform::Transform;

/// Immutable keyframe pair: where a clip starts, where it ends, and how it
/// gets there. Holds no progress state.
#[derive(Debug, Clone, Default)]
pub struct AnimationFrame {
    start: Transform,
    end: Transform,
    easing: Easing,
}

impl AnimationFrame {
    #[must_use]
    pub fn new(start: Transform, end: Transform, easing: Easing) -> Self {
        Self { start, end, easing }
    }

    #[must_use]
    pub fn linear(start: Transform, end: Transform) -> Self {
        Self::new(start, end, Easing::Linear)
    }

    #[inline]
    #[must_use]
    pub fn start(&self) -> &Transform {
        &self.start
    }

    #[inline]
    #[must_use]
    pub fn end(&self) -> &Transform {
        &self.end
    }

    #[inline]
    #[must_use]
    pub fn easing(&self) -> &Easing {
        &self.easing
    }
}
