//! Easing strategies.
//!
//! An easing function maps `(start, end, alpha)` to an interpolated scalar.
//! Vector values are eased one component at a time through [`Ease`], so any
//! [`EasingFunction`] composes with every value type without extra work.
//!
//! Alpha is never clamped. Values outside `[0, 1]` extrapolate past the end
//! points.

use std::fmt;
use std::sync::Arc;

use glam::Vec3;

use crate::animation::time::Seconds;

/// A pure interpolation strategy over scalars.
///
/// Implementations must depend on nothing but their three arguments.
pub trait EasingFunction: fmt::Debug + Send + Sync {
    fn evaluate(&self, start: f32, end: f32, alpha: Seconds) -> f32;
}

/// Built-in easing kinds.
#[derive(Clone, Default)]
pub enum Easing {
    /// `start + (end - start) * alpha`
    #[default]
    Linear,
    QuadIn,
    QuadOut,
    QuadInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    /// Hermite `3t² - 2t³`.
    SmoothStep,
    /// Holds `start` until alpha reaches 1.
    Step,
    /// A user supplied strategy.
    Custom(Arc<dyn EasingFunction>),
}

impl Easing {
    #[must_use]
    pub fn linear() -> Self {
        Self::Linear
    }

    pub fn custom(function: impl EasingFunction + 'static) -> Self {
        Self::Custom(Arc::new(function))
    }

    /// The shaping curve of a named kind, evaluated on the raw alpha.
    ///
    /// Returns `None` for [`Easing::Custom`], which is opaque.
    #[must_use]
    pub fn curve(&self, t: f32) -> Option<f32> {
        let shaped = match self {
            Self::Linear => t,
            Self::QuadIn => t * t,
            Self::QuadOut => t * (2.0 - t),
            Self::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u / 2.0
                }
            }
            Self::CubicIn => t * t * t,
            Self::CubicOut => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::Step => {
                if t < 1.0 {
                    0.0
                } else {
                    1.0
                }
            }
            Self::Custom(_) => return None,
        };
        Some(shaped)
    }
}

impl EasingFunction for Easing {
    fn evaluate(&self, start: f32, end: f32, alpha: Seconds) -> f32 {
        match self {
            // Exactly `start + (end - start) * alpha`, no curve indirection.
            Self::Linear => start + (end - start) * alpha.value(),
            Self::Custom(function) => function.evaluate(start, end, alpha),
            named => {
                let t = named.curve(alpha.value()).unwrap_or(alpha.value());
                start + (end - start) * t
            }
        }
    }
}

impl fmt::Debug for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => f.write_str("Linear"),
            Self::QuadIn => f.write_str("QuadIn"),
            Self::QuadOut => f.write_str("QuadOut"),
            Self::QuadInOut => f.write_str("QuadInOut"),
            Self::CubicIn => f.write_str("CubicIn"),
            Self::CubicOut => f.write_str("CubicOut"),
            Self::CubicInOut => f.write_str("CubicInOut"),
            Self::SmoothStep => f.write_str("SmoothStep"),
            Self::Step => f.write_str("Step"),
            Self::Custom(function) => f.debug_tuple("Custom").field(function).finish(),
        }
    }
}

/// Values that can be driven by an [`EasingFunction`].
pub trait Ease: Copy {
    fn ease<E: EasingFunction + ?Sized>(
        easing: &E,
        start: Self,
        end: Self,
        alpha: Seconds,
    ) -> Self;
}

impl Ease for f32 {
    #[inline]
    fn ease<E: EasingFunction + ?Sized>(
        easing: &E,
        start: Self,
        end: Self,
        alpha: Seconds,
    ) -> Self {
        easing.evaluate(start, end, alpha)
    }
}

impl Ease for Vec3 {
    /// Each component is eased independently with the same alpha.
    #[inline]
    fn ease<E: EasingFunction + ?Sized>(
        easing: &E,
        start: Self,
        end: Self,
        alpha: Seconds,
    ) -> Self {
        Vec3::new(
            easing.evaluate(start.x, end.x, alpha),
            easing.evaluate(start.y, end.y, alpha),
            easing.evaluate(start.z, end.z, alpha),
        )
    }
}

/// Eases `start → end` at `alpha` using `easing`.
#[inline]
pub fn apply<T, E>(easing: &E, start: T, end: T, alpha: Seconds) -> T
where
    T: Ease,
    E: EasingFunction + ?Sized,
{
    T::ease(easing, start, end, alpha)
}
