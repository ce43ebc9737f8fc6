//! Errors raised while configuring or driving sprite animations.
//!
//! Two families exist:
//! - configuration errors, raised when a sequence or set is built from a
//!   sheet that cannot be sliced as requested;
//! - lookup errors, raised when a sprite is asked to play an animation key
//!   its set does not contain.
//!
//! Per-tick update and draw never fail.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnimationError {
    #[error("animation '{name}' needs at least one frame")]
    ZeroFrameCount { name: String },

    #[error("sheet width {width} is not divisible into {frame_count} frames")]
    UnevenFrameWidth { width: u32, frame_count: u32 },

    #[error("sheet height {height} is not divisible into {rows} rows")]
    UnevenRowHeight { height: u32, rows: u32 },

    #[error("sheet '{tex_key}' has an empty size {width}x{height}")]
    EmptySheet {
        tex_key: String,
        width: u32,
        height: u32,
    },

    #[error("frames per second must be positive")]
    InvalidFramesPerSecond,

    #[error("grid has {rows} rows but {keys} direction keys were given")]
    KeyCountMismatch { rows: u32, keys: usize },

    #[error("direction key '{0}' appears more than once")]
    DuplicateKey(String),

    #[error("undefined animation '{0}'")]
    UnknownAnimation(String),

    #[error("sprite has no animation set attached")]
    NoAnimations,
}

impl AnimationError {
    /// True for errors caused by an invalid sheet/frame setup.
    pub fn is_configuration(&self) -> bool {
        !self.is_lookup()
    }

    /// True for errors caused by asking for an animation that does not exist.
    pub fn is_lookup(&self) -> bool {
        matches!(
            self,
            AnimationError::UnknownAnimation(_) | AnimationError::NoAnimations
        )
    }
}
