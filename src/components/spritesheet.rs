//! Sprite sheet geometry.
//!
//! A [`SpriteSheet`] only describes a loaded texture: its key in the
//! [`TextureStore`](crate::resources::texturestore::TextureStore) and its
//! pixel size. Slicing a sheet never copies pixels; it only produces
//! rectangles ([`SheetStrip`] for one row, [`SourceRect`] for one frame).

use std::sync::Arc;

use raylib::prelude::{Rectangle, Vector2};

/// A loaded image known by key and dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteSheet {
    pub tex_key: Arc<str>,
    pub width: u32,
    pub height: u32,
}

impl SpriteSheet {
    pub fn new(tex_key: impl Into<Arc<str>>, width: u32, height: u32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
        }
    }

    /// The whole sheet as a single strip.
    pub fn as_strip(&self) -> SheetStrip {
        SheetStrip {
            tex_key: self.tex_key.clone(),
            x: 0,
            y: 0,
            width: self.width,
            height: self.height,
        }
    }

    /// Row `row` of a sheet cut into `rows` equal-height strips.
    ///
    /// Callers must ensure `rows > 0`.
    pub fn row(&self, row: u32, rows: u32) -> SheetStrip {
        let row_height = self.height / rows;
        SheetStrip {
            tex_key: self.tex_key.clone(),
            x: 0,
            y: row * row_height,
            width: self.width,
            height: row_height,
        }
    }

    /// Bounds of the whole texture, used by sprites that draw it unsliced.
    pub fn full_rect(&self) -> SourceRect {
        SourceRect::new(0.0, 0.0, self.width as f32, self.height as f32)
    }
}

/// One horizontal run of equal-width frames inside a sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetStrip {
    pub tex_key: Arc<str>,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Axis-aligned rectangle in pixels, used both for source frames and
/// world-space bounding boxes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SourceRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl SourceRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_position(position: Vector2, width: f32, height: f32) -> Self {
        Self::new(position.x, position.y, width, height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Strict AABB overlap. Rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &SourceRect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

impl From<SourceRect> for Rectangle {
    fn from(rect: SourceRect) -> Self {
        Rectangle {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }
}
