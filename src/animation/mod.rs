pub mod clip;
pub mod easing;
pub mod frame;
pub mod sequence;
pub mod time;
pub mod transform;

pub use clip::AnimationClip;
pub use easing::{Ease, Easing, EasingFunction};
pub use frame::AnimationFrame;
pub use sequence::Animation;
pub use time::Seconds;
pub use transform::Transform;
