//! Sprite-sheet animation playback.
//!
//! - [`FrameClock`] accumulates tick time and says when a frame is due.
//! - [`AnimationSequence`] walks one strip of equal-width frames and yields
//!   the source rectangle to draw.
//! - [`AnimationSet`] holds one sequence per direction key, cut from the rows
//!   of a grid sheet.
//! - [`Animator`] is the per-sprite playback state: the set it owns, the key
//!   currently playing and the last rectangle produced.
//!
//! # Playback
//!
//! `start()` parks the cursor on the last frame of the strip. The first frame
//! advance rolls it over to frame 0, so a freshly started sequence shows its
//! frames in order 0, 1, .. N-1. After that, a looping sequence wraps to 0
//! and a non-looping one holds on its last frame.

use log::debug;
use rustc_hash::FxHashMap;

use crate::components::spritesheet::{SheetStrip, SourceRect, SpriteSheet};
use crate::error::AnimationError;

/// Frames per second used by new sequences.
pub const DEFAULT_FPS: u32 = 5;

/// Decides when an animation should advance one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameClock {
    fps: u32,
    frame_duration: f32,
    elapsed: f32,
}

impl FrameClock {
    pub fn new(fps: u32) -> Result<Self, AnimationError> {
        if fps == 0 {
            return Err(AnimationError::InvalidFramesPerSecond);
        }
        Ok(Self {
            fps,
            frame_duration: 1.0 / fps as f32,
            elapsed: 0.0,
        })
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Seconds a frame stays on screen.
    pub fn frame_duration(&self) -> f32 {
        self.frame_duration
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Add tick time. Negative deltas count as zero.
    pub fn accumulate(&mut self, dt: f32) {
        self.elapsed += dt.max(0.0);
    }

    pub fn is_due(&self) -> bool {
        self.elapsed >= self.frame_duration
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    /// Change the frame rate. Accumulated time is discarded.
    pub fn set_fps(&mut self, fps: u32) -> Result<(), AnimationError> {
        *self = FrameClock::new(fps)?;
        Ok(())
    }
}

/// What the last `update` of a sequence did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    /// Playing, frame time not reached yet.
    Holding,
    /// Playing, moved (or held at the end) on this tick.
    Advancing,
}

/// One named animation: a strip of `frame_count` frames and a cursor.
#[derive(Debug, Clone)]
pub struct AnimationSequence {
    name: String,
    strip: SheetStrip,
    frame_count: u32,
    frame_width: u32,
    frame_height: u32,
    current_frame: u32,
    playing: bool,
    looping: bool,
    pre_roll: bool,
    clock: FrameClock,
    last_rect: SourceRect,
    state: PlaybackState,
}

impl AnimationSequence {
    /// Slice `strip` into `frame_count` frames and start playing at
    /// [`DEFAULT_FPS`], looping.
    pub fn new(
        name: impl Into<String>,
        strip: &SheetStrip,
        frame_count: u32,
    ) -> Result<Self, AnimationError> {
        let name = name.into();
        if frame_count == 0 {
            return Err(AnimationError::ZeroFrameCount { name });
        }
        if strip.width == 0 || strip.height == 0 {
            return Err(AnimationError::EmptySheet {
                tex_key: strip.tex_key.to_string(),
                width: strip.width,
                height: strip.height,
            });
        }
        if strip.width % frame_count != 0 {
            return Err(AnimationError::UnevenFrameWidth {
                width: strip.width,
                frame_count,
            });
        }

        let mut sequence = Self {
            name,
            strip: strip.clone(),
            frame_count,
            frame_width: strip.width / frame_count,
            frame_height: strip.height,
            current_frame: 0,
            playing: false,
            looping: true,
            pre_roll: false,
            clock: FrameClock::new(DEFAULT_FPS)?,
            last_rect: SourceRect::default(),
            state: PlaybackState::Stopped,
        };
        sequence.start();
        Ok(sequence)
    }

    /// Rewind to the pre-roll frame and play.
    pub fn start(&mut self) {
        self.current_frame = self.frame_count - 1;
        self.pre_roll = true;
        self.playing = true;
        self.clock.reset();
        self.last_rect = self.frame_rect(0);
        self.state = PlaybackState::Holding;
    }

    /// Pause on the current frame.
    pub fn stop(&mut self) {
        self.playing = false;
        self.clock.reset();
        self.state = PlaybackState::Stopped;
    }

    /// Advance playback by `dt` seconds and return the rectangle to draw.
    pub fn update(&mut self, dt: f32) -> SourceRect {
        self.clock.accumulate(dt);

        if !self.playing {
            self.state = PlaybackState::Stopped;
            return self.last_rect;
        }
        if !self.clock.is_due() {
            self.state = PlaybackState::Holding;
            return self.last_rect;
        }

        if self.pre_roll {
            self.current_frame = 0;
            self.pre_roll = false;
        } else if self.current_frame < self.frame_count - 1 {
            self.current_frame += 1;
        } else if self.looping {
            self.current_frame = 0;
        }

        self.clock.reset();
        self.last_rect = self.frame_rect(self.current_frame);
        self.state = PlaybackState::Advancing;
        self.last_rect
    }

    /// Source rectangle of frame `index` within the sheet. Indices past the
    /// end clamp to the last frame.
    pub fn frame_rect(&self, index: u32) -> SourceRect {
        debug_assert!(index < self.frame_count, "frame {index} out of range");
        let index = index.min(self.frame_count - 1);
        SourceRect::new(
            (self.strip.x + index * self.frame_width) as f32,
            self.strip.y as f32,
            self.frame_width as f32,
            self.frame_height as f32,
        )
    }

    pub fn set_frames_per_second(&mut self, fps: u32) -> Result<(), AnimationError> {
        self.clock.set_fps(fps)
    }

    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tex_key(&self) -> &str {
        &self.strip.tex_key
    }

    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    pub fn frame_width(&self) -> u32 {
        self.frame_width
    }

    pub fn frame_height(&self) -> u32 {
        self.frame_height
    }

    pub fn current_frame(&self) -> u32 {
        self.current_frame
    }

    /// Rectangle returned by the last `update` (or cached by `start`).
    pub fn current_rect(&self) -> SourceRect {
        self.last_rect
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn frames_per_second(&self) -> u32 {
        self.clock.fps()
    }

    pub fn frame_duration(&self) -> f32 {
        self.clock.frame_duration()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }
}

/// Direction-keyed sequences cut from one grid sheet.
#[derive(Debug, Clone)]
pub struct AnimationSet {
    tex_key: String,
    order: Vec<String>,
    sequences: FxHashMap<String, AnimationSequence>,
}

impl AnimationSet {
    /// Cut `sheet` into `rows` strips of `columns` frames. Row `i` becomes
    /// the sequence named `keys[i]`.
    pub fn build<K: AsRef<str>>(
        sheet: &SpriteSheet,
        columns: u32,
        rows: u32,
        keys: &[K],
    ) -> Result<Self, AnimationError> {
        if rows == 0 || keys.len() != rows as usize {
            return Err(AnimationError::KeyCountMismatch {
                rows,
                keys: keys.len(),
            });
        }
        if sheet.height % rows != 0 {
            return Err(AnimationError::UnevenRowHeight {
                height: sheet.height,
                rows,
            });
        }

        let mut order = Vec::with_capacity(keys.len());
        let mut sequences = FxHashMap::default();
        for (row, key) in keys.iter().enumerate() {
            let key = key.as_ref();
            if sequences.contains_key(key) {
                return Err(AnimationError::DuplicateKey(key.to_string()));
            }
            let strip = sheet.row(row as u32, rows);
            let sequence = AnimationSequence::new(key, &strip, columns)?;
            order.push(key.to_string());
            sequences.insert(key.to_string(), sequence);
        }

        debug!(
            "Built animation set from '{}': {}x{} frames, keys {:?}",
            sheet.tex_key, columns, rows, order
        );

        Ok(Self {
            tex_key: sheet.tex_key.to_string(),
            order,
            sequences,
        })
    }

    /// Build a set holding a single sequence that spans the whole sheet.
    pub fn single(
        sheet: &SpriteSheet,
        key: impl Into<String>,
        frame_count: u32,
    ) -> Result<Self, AnimationError> {
        let key = key.into();
        let sequence = AnimationSequence::new(key.clone(), &sheet.as_strip(), frame_count)?;
        let mut sequences = FxHashMap::default();
        sequences.insert(key.clone(), sequence);
        Ok(Self {
            tex_key: sheet.tex_key.to_string(),
            order: vec![key],
            sequences,
        })
    }

    pub fn tex_key(&self) -> &str {
        &self.tex_key
    }

    /// Keys in the order they were assigned to sheet rows.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.sequences.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Result<&AnimationSequence, AnimationError> {
        self.sequences
            .get(key)
            .ok_or_else(|| AnimationError::UnknownAnimation(key.to_string()))
    }

    pub fn get_mut(&mut self, key: &str) -> Result<&mut AnimationSequence, AnimationError> {
        self.sequences
            .get_mut(key)
            .ok_or_else(|| AnimationError::UnknownAnimation(key.to_string()))
    }

    pub fn set_frames_per_second(&mut self, fps: u32) -> Result<(), AnimationError> {
        for sequence in self.sequences.values_mut() {
            sequence.set_frames_per_second(fps)?;
        }
        Ok(())
    }

    pub fn set_looping(&mut self, looping: bool) {
        for sequence in self.sequences.values_mut() {
            sequence.set_looping(looping);
        }
    }
}

/// Playback state owned by an animated sprite.
#[derive(Debug, Clone)]
pub struct Animator {
    set: AnimationSet,
    active: Option<String>,
    source: SourceRect,
}

impl Animator {
    /// Nothing plays until [`Animator::play`] is called; until then the
    /// first frame of the first key is shown.
    pub fn new(set: AnimationSet) -> Self {
        let source = set
            .keys()
            .next()
            .and_then(|key| set.get(key).ok())
            .map(|sequence| sequence.frame_rect(0))
            .unwrap_or_default();
        Self {
            set,
            active: None,
            source,
        }
    }

    /// Stop the current sequence and start `key` from its pre-roll frame.
    ///
    /// An unknown key leaves the current animation untouched.
    pub fn play(&mut self, key: &str) -> Result<(), AnimationError> {
        if !self.set.contains(key) {
            return Err(AnimationError::UnknownAnimation(key.to_string()));
        }
        if let Some(current) = self.active.take() {
            self.set.get_mut(&current)?.stop();
        }
        let sequence = self.set.get_mut(key)?;
        sequence.start();
        self.source = sequence.current_rect();
        self.active = Some(key.to_string());
        Ok(())
    }

    /// Pause the active sequence on its current frame.
    pub fn stop(&mut self) {
        if let Some(sequence) = self
            .active
            .as_deref()
            .and_then(|key| self.set.sequences.get_mut(key))
        {
            sequence.stop();
        }
    }

    /// Resume the active sequence where it stopped.
    pub fn resume(&mut self) {
        if let Some(sequence) = self
            .active
            .as_deref()
            .and_then(|key| self.set.sequences.get_mut(key))
        {
            if !sequence.playing {
                sequence.playing = true;
                sequence.clock.reset();
            }
        }
    }

    /// Advance the active sequence and cache its rectangle.
    pub fn update(&mut self, dt: f32) -> SourceRect {
        if let Some(sequence) = self
            .active
            .as_deref()
            .and_then(|key| self.set.sequences.get_mut(key))
        {
            self.source = sequence.update(dt);
        }
        self.source
    }

    pub fn active_key(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn active_sequence(&self) -> Option<&AnimationSequence> {
        self.active
            .as_deref()
            .and_then(|key| self.set.sequences.get(key))
    }

    pub fn is_playing(&self) -> bool {
        self.active_sequence().is_some_and(AnimationSequence::is_playing)
    }

    /// Rectangle to draw this tick.
    pub fn source(&self) -> SourceRect {
        self.source
    }

    pub fn set(&self) -> &AnimationSet {
        &self.set
    }

    pub fn set_mut(&mut self) -> &mut AnimationSet {
        &mut self.set
    }
}
