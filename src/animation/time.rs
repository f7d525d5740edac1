use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};
use std::time::Duration;

/// A span or point in animation time, in seconds.
///
/// Arithmetic and ordering act directly on the wrapped `f32`. Negative and
/// NaN values are representable and are not rejected anywhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Seconds(pub f32);

impl Seconds {
    pub const ZERO: Self = Self(0.0);

    #[inline]
    #[must_use]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    #[must_use]
    pub const fn value(self) -> f32 {
        self.0
    }
}

impl From<f32> for Seconds {
    #[inline]
    fn from(value: f32) -> Self {
        Self(value)
    }
}

impl From<Duration> for Seconds {
    #[inline]
    fn from(duration: Duration) -> Self {
        Self(duration.as_secs_f32())
    }
}

impl fmt::Display for Seconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}s", self.0)
    }
}

macro_rules! impl_seconds_op {
    ($op:ident, $method:ident, $assign_op:ident, $assign_method:ident, $sym:tt) => {
        impl $op for Seconds {
            type Output = Seconds;

            #[inline]
            fn $method(self, rhs: Seconds) -> Seconds {
                Seconds(self.0 $sym rhs.0)
            }
        }

        impl $assign_op for Seconds {
            #[inline]
            fn $assign_method(&mut self, rhs: Seconds) {
                self.0 = self.0 $sym rhs.0;
            }
        }
    };
}

impl_seconds_op!(Add, add, AddAssign, add_assign, +);
impl_seconds_op!(Sub, sub, SubAssign, sub_assign, -);
impl_seconds_op!(Mul, mul, MulAssign, mul_assign, *);
impl_seconds_op!(Div, div, DivAssign, div_assign, /);

impl Mul<f32> for Seconds {
    type Output = Seconds;

    #[inline]
    fn mul(self, rhs: f32) -> Seconds {
        Seconds(self.0 * rhs)
    }
}

impl Div<f32> for Seconds {
    type Output = Seconds;

    #[inline]
    fn div(self, rhs: f32) -> Seconds {
        Seconds(self.0 / rhs)
    }
}
