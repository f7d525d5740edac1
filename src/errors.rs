//! Error Types
//!
//! This module defines the error types used by the animation core.
//!
//! # Overview
//!
//! The animation model is deliberately permissive: out-of-range alpha values,
//! negative deltas and degenerate durations are all accepted. The only
//! conditions reported as errors are the ones that would otherwise read past
//! the end of the clip list.
//!
//! # Usage
//!
//! Fallible APIs return [`Result<T>`], an alias for
//! `std::result::Result<T, AnimationError>`.
//!
//! ```rust
//! use tweenloop::{Animation, AnimationError, Seconds};
//!
//! let mut animation = Animation::new();
//! let err = animation.update(Seconds::new(0.016)).unwrap_err();
//! assert!(matches!(err, AnimationError::EmptyAnimation));
//! ```

use thiserror::Error;

/// Errors produced by the animation core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnimationError {
    /// The animation has no clips, so there is no active clip to advance or read.
    #[error("Animation has no clips")]
    EmptyAnimation,

    /// A clip was requested by an index outside the sequence.
    #[error("Clip index out of bounds: {index} (len: {len})")]
    ClipIndexOutOfBounds {
        /// The requested index
        index: usize,
        /// Number of clips in the sequence
        len: usize,
    },
}

/// Alias for `Result<T, AnimationError>`.
pub type Result<T> = std::result::Result<T, AnimationError>;
