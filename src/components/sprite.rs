//! Sprites of the scene.
//!
//! Every sprite is a [`GameSprite`]: a shared [`SpriteBody`] (motion,
//! flags and collision box) plus a [`SpriteKind`] saying what else it can do.
//! Systems ask [`GameSprite::has_animation`] or
//! [`GameSprite::is_player_controlled`] instead of matching on concrete types.
//!
//! Collision boxes are axis-aligned and ignore rotation: a spinning asteroid
//! still collides with its unrotated frame rectangle.

use std::sync::Arc;

use bevy_ecs::prelude::Component;
use log::{debug, warn};
use raylib::prelude::Vector2;

use crate::components::animation::{AnimationSet, Animator};
use crate::components::playercontrol::{DirectionControl, DirectionInput, PlayerControl};
use crate::components::spritesheet::{SourceRect, SpriteSheet};
use crate::error::AnimationError;

/// Receiver of sprite draw calls. Implemented by the raylib renderer and by
/// recorders in tests.
pub trait DrawTarget {
    /// Draw `source` from texture `tex_key` into `dest`, rotated by
    /// `rotation` degrees around `origin` (relative to `dest`'s top-left).
    fn draw_region(
        &mut self,
        tex_key: &str,
        source: SourceRect,
        dest: SourceRect,
        origin: Vector2,
        rotation: f32,
    );
}

/// Position, motion and lifecycle flags shared by all sprites.
///
/// `position` is the top-left corner of the unrotated frame. `rotation` is
/// in radians and grows without wrapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteBody {
    pub position: Vector2,
    pub direction: Vector2,
    pub speed: f32,
    pub rotation: f32,
    pub rotation_speed: f32,
    pub scale: f32,
    pub is_active: bool,
    pub is_visible: bool,
    pub is_alive: bool,
    frame_width: f32,
    frame_height: f32,
}

impl SpriteBody {
    pub fn new(frame_width: f32, frame_height: f32) -> Self {
        Self {
            position: Vector2::zero(),
            direction: Vector2::zero(),
            speed: 0.0,
            rotation: 0.0,
            rotation_speed: 0.0,
            scale: 1.0,
            is_active: true,
            is_visible: true,
            is_alive: true,
            frame_width,
            frame_height,
        }
    }

    /// Integrate position and rotation over `dt` seconds.
    pub fn update_motion(&mut self, dt: f32) {
        self.position = self.position + self.direction.scale_by(self.speed * dt);
        self.rotation += self.rotation_speed * dt;
    }

    pub fn set_frame_size(&mut self, width: f32, height: f32) {
        self.frame_width = width;
        self.frame_height = height;
    }

    pub fn width(&self) -> f32 {
        self.frame_width * self.scale
    }

    pub fn height(&self) -> f32 {
        self.frame_height * self.scale
    }

    /// World-space AABB from the current position, frame size and scale.
    pub fn bounding_box(&self) -> SourceRect {
        SourceRect::from_position(self.position, self.width(), self.height())
    }

    pub fn center(&self) -> Vector2 {
        Vector2::new(
            self.position.x + self.width() * 0.5,
            self.position.y + self.height() * 0.5,
        )
    }

    /// Strict AABB overlap. Inactive bodies never collide.
    pub fn has_collided(&self, other: &SpriteBody) -> bool {
        if !self.is_active || !other.is_active {
            return false;
        }
        self.bounding_box().overlaps(&other.bounding_box())
    }

    /// Take the body out of play for the rest of the session.
    pub fn kill(&mut self) {
        self.is_active = false;
        self.is_alive = false;
        self.is_visible = false;
    }
}

/// Capabilities a sprite has on top of its body.
#[derive(Debug, Clone)]
pub enum SpriteKind {
    /// Draws its whole texture.
    Static,
    /// Draws the current frame of its animation set.
    Animated(Animator),
    /// Steered by input; animated when it carries an animator.
    Player {
        control: PlayerControl,
        animator: Option<Animator>,
    },
}

#[derive(Component, Debug, Clone)]
pub struct GameSprite {
    pub body: SpriteBody,
    tex_key: Arc<str>,
    texture_rect: SourceRect,
    kind: SpriteKind,
}

impl GameSprite {
    /// A sprite drawing the whole of `sheet`.
    pub fn new_static(sheet: &SpriteSheet) -> Self {
        let texture_rect = sheet.full_rect();
        Self {
            body: SpriteBody::new(texture_rect.width, texture_rect.height),
            tex_key: sheet.tex_key.clone(),
            texture_rect,
            kind: SpriteKind::Static,
        }
    }

    /// A sprite drawing frames of `set`. Nothing plays until
    /// [`GameSprite::play_animation`] is called.
    pub fn new_animated(set: AnimationSet) -> Self {
        let tex_key: Arc<str> = Arc::from(set.tex_key());
        let animator = Animator::new(set);
        let source = animator.source();
        Self {
            body: SpriteBody::new(source.width, source.height),
            tex_key,
            texture_rect: source,
            kind: SpriteKind::Animated(animator),
        }
    }

    /// Hand control of this sprite to the player.
    pub fn into_player(self, control: PlayerControl) -> Self {
        let animator = match self.kind {
            SpriteKind::Static => None,
            SpriteKind::Animated(animator) => Some(animator),
            SpriteKind::Player { animator, .. } => animator,
        };
        Self {
            kind: SpriteKind::Player { control, animator },
            ..self
        }
    }

    /// Give this sprite its animations. A static sprite becomes animated, a
    /// player keeps its controls.
    pub(crate) fn attach_animations(&mut self, set: AnimationSet) {
        self.tex_key = Arc::from(set.tex_key());
        let animator = Animator::new(set);
        let source = animator.source();
        self.body.set_frame_size(source.width, source.height);
        match &mut self.kind {
            SpriteKind::Player { animator: slot, .. } => *slot = Some(animator),
            kind => *kind = SpriteKind::Animated(animator),
        }
    }

    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.body.position = Vector2::new(x, y);
        self
    }

    pub fn with_direction(mut self, x: f32, y: f32) -> Self {
        self.body.direction = Vector2::new(x, y);
        self
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.body.speed = speed;
        self
    }

    /// Initial heading in radians.
    pub fn with_rotation(mut self, radians: f32) -> Self {
        self.body.rotation = radians;
        self
    }

    pub fn with_rotation_speed(mut self, radians_per_second: f32) -> Self {
        self.body.rotation_speed = radians_per_second;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.body.scale = scale;
        self
    }

    pub fn kind(&self) -> &SpriteKind {
        &self.kind
    }

    pub fn tex_key(&self) -> &str {
        &self.tex_key
    }

    pub fn has_animation(&self) -> bool {
        self.animator().is_some()
    }

    pub fn is_player_controlled(&self) -> bool {
        matches!(self.kind, SpriteKind::Player { .. })
    }

    pub fn animator(&self) -> Option<&Animator> {
        match &self.kind {
            SpriteKind::Static => None,
            SpriteKind::Animated(animator) => Some(animator),
            SpriteKind::Player { animator, .. } => animator.as_ref(),
        }
    }

    pub fn animator_mut(&mut self) -> Option<&mut Animator> {
        match &mut self.kind {
            SpriteKind::Static => None,
            SpriteKind::Animated(animator) => Some(animator),
            SpriteKind::Player { animator, .. } => animator.as_mut(),
        }
    }

    pub fn player_control(&self) -> Option<&PlayerControl> {
        match &self.kind {
            SpriteKind::Player { control, .. } => Some(control),
            _ => None,
        }
    }

    /// Key of the animation currently selected, if any.
    pub fn active_animation(&self) -> Option<&str> {
        self.animator().and_then(Animator::active_key)
    }

    /// Switch to animation `key`. Unknown keys are rejected and the current
    /// animation keeps playing.
    pub fn play_animation(&mut self, key: &str) -> Result<(), AnimationError> {
        let animator = self.animator_mut().ok_or(AnimationError::NoAnimations)?;
        animator.play(key)?;
        debug!("Sprite '{}' plays animation '{}'", self.tex_key, key);
        Ok(())
    }

    pub fn stop_animation(&mut self) {
        if let Some(animator) = self.animator_mut() {
            animator.stop();
        }
    }

    /// Source rectangle drawn this tick.
    pub fn source_rect(&self) -> SourceRect {
        self.animator()
            .map(Animator::source)
            .unwrap_or(self.texture_rect)
    }

    /// Motion first, then animation. Inactive sprites are frozen.
    pub fn update(&mut self, dt: f32) {
        if !self.body.is_active {
            return;
        }
        self.body.update_motion(dt);
        let frame = match &mut self.kind {
            SpriteKind::Static => None,
            SpriteKind::Animated(animator) => Some(animator.update(dt)),
            SpriteKind::Player { animator, .. } => animator.as_mut().map(|a| a.update(dt)),
        };
        if let Some(frame) = frame {
            self.body.set_frame_size(frame.width, frame.height);
        }
    }

    pub fn has_collided(&self, other: &GameSprite) -> bool {
        self.body.has_collided(&other.body)
    }

    /// Emit the current frame at the sprite's position, rotation and scale.
    ///
    /// Only `is_visible` gates drawing: a frozen (inactive) sprite stays on
    /// screen until something hides it.
    pub fn draw(&self, target: &mut impl DrawTarget) {
        if !self.body.is_visible {
            return;
        }
        let source = self.source_rect();
        let width = source.width * self.body.scale;
        let height = source.height * self.body.scale;
        let origin = Vector2::new(width * 0.5, height * 0.5);
        // raylib places dest at the rotation origin
        let dest = SourceRect::new(
            self.body.position.x + origin.x,
            self.body.position.y + origin.y,
            width,
            height,
        );
        target.draw_region(
            &self.tex_key,
            source,
            dest,
            origin,
            self.body.rotation.to_degrees(),
        );
    }

    /// Steer a player sprite from this tick's input. No-op for other kinds.
    pub fn apply_input(&mut self, input: DirectionInput, dt: f32) {
        let SpriteKind::Player { control, animator } = &mut self.kind else {
            return;
        };
        if !self.body.is_active {
            return;
        }
        if !control.can_walk {
            self.body.speed = 0.0;
            if let Some(animator) = animator {
                animator.stop();
            }
            return;
        }

        match control.scheme {
            DirectionControl::FourWay => {
                let Some((direction, key)) = input.four_way() else {
                    self.body.speed = 0.0;
                    if let Some(animator) = animator {
                        animator.stop();
                    }
                    return;
                };
                self.body.direction = direction;
                self.body.speed = control.speed;
                if let Some(animator) = animator {
                    if animator.active_key() != Some(key) {
                        if let Err(e) = animator.play(key) {
                            warn!("Player sprite '{}': {}", self.tex_key, e);
                        }
                    } else if !animator.is_playing() {
                        animator.resume();
                    }
                }
            }
            DirectionControl::Rotational => {
                let turn = input.turn();
                self.body.rotation += turn * control.turn_rate * dt;
                self.body.direction =
                    Vector2::new(self.body.rotation.cos(), self.body.rotation.sin());
                self.body.speed = if input.forward { control.speed } else { 0.0 };
            }
        }
    }
}

impl AnimationSet {
    /// Move this set into `sprite`, keyed by direction name.
    pub fn attach_to(self, sprite: &mut GameSprite) {
        sprite.attach_animations(self);
    }
}
