//! Per-frame keyboard input resource.
//!
//! Captures the keys the scene cares about. Arrow keys walk the animated
//! player, A/D turn the ship and Space thrusts it, F11 toggles the debug
//! overlay.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::playercontrol::{DirectionControl, DirectionInput};

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is held this frame.
    pub active: bool,
    /// Whether the key went down this frame.
    pub just_pressed: bool,
    pub key_binding: KeyboardKey,
}

impl BoolState {
    pub fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            key_binding,
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub walk_up: BoolState,
    pub walk_down: BoolState,
    pub walk_left: BoolState,
    pub walk_right: BoolState,
    pub turn_left: BoolState,
    pub turn_right: BoolState,
    pub thrust: BoolState,
    pub mode_debug: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            walk_up: BoolState::bound_to(KeyboardKey::KEY_UP),
            walk_down: BoolState::bound_to(KeyboardKey::KEY_DOWN),
            walk_left: BoolState::bound_to(KeyboardKey::KEY_LEFT),
            walk_right: BoolState::bound_to(KeyboardKey::KEY_RIGHT),
            turn_left: BoolState::bound_to(KeyboardKey::KEY_A),
            turn_right: BoolState::bound_to(KeyboardKey::KEY_D),
            thrust: BoolState::bound_to(KeyboardKey::KEY_SPACE),
            mode_debug: BoolState::bound_to(KeyboardKey::KEY_F11),
        }
    }
}

impl InputState {
    /// Snapshot of the keys that steer a sprite using `scheme`.
    pub fn direction_input(&self, scheme: DirectionControl) -> DirectionInput {
        match scheme {
            DirectionControl::FourWay => DirectionInput {
                up: self.walk_up.active,
                down: self.walk_down.active,
                left: self.walk_left.active,
                right: self.walk_right.active,
                forward: false,
            },
            DirectionControl::Rotational => DirectionInput {
                up: false,
                down: false,
                left: self.turn_left.active,
                right: self.turn_right.active,
                forward: self.thrust.active,
            },
        }
    }
}
