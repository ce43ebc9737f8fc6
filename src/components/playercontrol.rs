//! Player steering.
//!
//! [`PlayerControl`] is carried by player sprites (see
//! [`SpriteKind::Player`](crate::components::sprite::SpriteKind::Player)).
//! [`DirectionInput`] is the per-tick snapshot the
//! [`player_controller`](crate::systems::playercontroller::player_controller)
//! system builds from the keyboard.

use raylib::prelude::Vector2;

/// Keys of a four-direction walk sheet.
pub const ANIM_UP: &str = "Up";
pub const ANIM_DOWN: &str = "Down";
pub const ANIM_LEFT: &str = "Left";
pub const ANIM_RIGHT: &str = "Right";

/// How directional input turns into motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionControl {
    /// Up/down/left/right move directly and pick the matching walk animation.
    FourWay,
    /// Left/right turn the heading, forward thrusts along it.
    Rotational,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerControl {
    pub scheme: DirectionControl,
    /// When false the sprite ignores input and stands still.
    pub can_walk: bool,
    /// Speed applied while input is held.
    pub speed: f32,
    /// Radians per second, rotational scheme only.
    pub turn_rate: f32,
}

impl PlayerControl {
    pub fn four_way(speed: f32) -> Self {
        Self {
            scheme: DirectionControl::FourWay,
            can_walk: true,
            speed,
            turn_rate: 0.0,
        }
    }

    pub fn rotational(speed: f32, turn_rate: f32) -> Self {
        Self {
            scheme: DirectionControl::Rotational,
            can_walk: true,
            speed,
            turn_rate,
        }
    }
}

/// Directional keys held this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectionInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub forward: bool,
}

impl DirectionInput {
    /// Unit direction and walk animation for four-way movement, or `None`
    /// when no direction is held (or opposite keys cancel out).
    ///
    /// On diagonals the horizontal animation wins.
    pub fn four_way(&self) -> Option<(Vector2, &'static str)> {
        let x = self.right as i8 - self.left as i8;
        let y = self.down as i8 - self.up as i8;
        let key = match (x, y) {
            (0, 0) => return None,
            (1, _) => ANIM_RIGHT,
            (-1, _) => ANIM_LEFT,
            (_, 1) => ANIM_DOWN,
            _ => ANIM_UP,
        };
        let mut direction = Vector2::new(x as f32, y as f32);
        if x != 0 && y != 0 {
            direction.x *= std::f32::consts::FRAC_1_SQRT_2;
            direction.y *= std::f32::consts::FRAC_1_SQRT_2;
        }
        Some((direction, key))
    }

    /// -1 for left, 1 for right, 0 for none or both.
    pub fn turn(&self) -> f32 {
        (self.right as i8 - self.left as i8) as f32
    }
}
