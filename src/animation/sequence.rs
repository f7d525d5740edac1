use glam::Mat4;

use crate::animation::clip::AnimationClip;
use crate::animation::frame::AnimationFrame;
use crate::animation::time::Seconds;
use crate::animation::transform::Transform;
use crate::errors::{AnimationError, Result};

/// An endlessly looping sequence of clips.
///
/// Exactly one clip is active at a time. When the active clip finishes, the
/// sequence moves on to the next clip (wrapping to the first) and rewinds the
/// clip that just finished.
///
/// Only the finishing clip is rewound. The newly active clip resumes from
/// whatever progress it already had, and any overshoot of the finishing clip
/// is dropped rather than carried into its successor.
#[derive(Debug, Clone, Default)]
pub struct Animation {
    clips: Vec<AnimationClip>,
    index: usize,
}

impl Animation {
    #[must_use]
    pub fn new() -> Self {
        Self {
            clips: Vec::new(),
            index: 0,
        }
    }

    /// Builder form of [`add`](Self::add).
    #[must_use]
    pub fn with_clip(mut self, frame: AnimationFrame, duration: Seconds) -> Self {
        self.add(frame, duration);
        self
    }

    /// Appends a clip to the end of the sequence.
    ///
    /// Any duration is accepted. Clips that are not strictly positive finish
    /// on their first update.
    pub fn add(&mut self, frame: AnimationFrame, duration: Seconds) -> &mut Self {
        let usable = duration.value() > 0.0 && duration.value().is_finite();
        if !usable {
            log::warn!(
                "Animation clip {} has degenerate duration {}",
                self.clips.len(),
                duration
            );
        }

        self.clips.push(AnimationClip::new(frame, duration));
        self
    }

    /// Advances the active clip by `delta`, moving to the next clip when it
    /// finishes.
    pub fn update(&mut self, delta: Seconds) -> Result<()> {
        let len = self.clips.len();
        let clip = self
            .clips
            .get_mut(self.index)
            .ok_or(AnimationError::EmptyAnimation)?;

        clip.update(delta);
        log::trace!(
            "Clip {} advanced by {} (elapsed {} / {})",
            self.index,
            delta,
            clip.elapsed(),
            clip.duration()
        );

        if clip.is_finished() {
            clip.reset();

            let finished = self.index;
            self.index = (self.index + 1) % len;
            log::debug!("Clip {finished} finished, clip {} is now active", self.index);
        }

        Ok(())
    }

    /// The pose last computed by the active clip.
    ///
    /// Pure read. Right after a clip change this is whatever the newly active
    /// clip computed on its previous pass (identity if it has never run).
    pub fn transform(&self) -> Result<&Transform> {
        self.clips
            .get(self.index)
            .map(AnimationClip::interpolated)
            .ok_or(AnimationError::EmptyAnimation)
    }

    /// Renderable matrix of the current pose, see [`Transform::to_matrix`].
    pub fn matrix(&self) -> Result<Mat4> {
        Ok(self.transform()?.to_matrix())
    }

    #[inline]
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.index
    }

    pub fn clip(&self, index: usize) -> Result<&AnimationClip> {
        self.clips
            .get(index)
            .ok_or(AnimationError::ClipIndexOutOfBounds {
                index,
                len: self.clips.len(),
            })
    }

    #[inline]
    #[must_use]
    pub fn clips(&self) -> &[AnimationClip] {
        &self.clips
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.clips.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}
