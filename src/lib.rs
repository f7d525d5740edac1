#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

//! Keyframe transform animation.
//!
//! A small animation core for driving a single renderable through a looping
//! sequence of poses:
//!
//! - [`Transform`]: translation / scale / rotation pose, convertible to a matrix
//! - [`Easing`]: interpolation strategy between two poses
//! - [`AnimationFrame`]: immutable start → end description
//! - [`AnimationClip`]: one frame played over a fixed duration
//! - [`Animation`]: an endlessly looping sequence of clips
//!
//! The render loop owns the clock ([`FrameClock`]) and feeds per-frame
//! [`Seconds`] deltas into [`Animation::update`], then reads the current pose
//! back with [`Animation::transform`].
//!
//! ```rust
//! use glam::Vec3;
//! use tweenloop::{Animation, AnimationFrame, Seconds, Transform};
//!
//! # fn main() -> tweenloop::errors::Result<()> {
//! let mut animation = Animation::new();
//! animation.add(
//!     AnimationFrame::linear(Transform::default(), Transform::from_translation(Vec3::X * 10.0)),
//!     Seconds::new(2.0),
//! );
//!
//! animation.update(Seconds::new(1.0))?;
//! assert_eq!(animation.transform()?.translation.x, 5.0);
//! # Ok(())
//! # }
//! ```

pub mod animation;
pub mod errors;
pub mod utils;

pub use animation::{
    Animation, AnimationClip, AnimationFrame, Ease, Easing, EasingFunction, Seconds, Transform,
};
pub use errors::AnimationError;
pub use utils::settings::ClockSettings;
pub use utils::time::FrameClock;
