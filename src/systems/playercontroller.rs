//! Player controller.
//!
//! Reads the shared [`InputState`] and steers every player-controlled
//! sprite according to its [`DirectionControl`](crate::components::playercontrol::DirectionControl)
//! scheme. Runs before the sprite update so this tick's input moves this
//! tick's position.
use bevy_ecs::prelude::*;

use crate::components::sprite::GameSprite;
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

pub fn player_controller(
    mut query: Query<&mut GameSprite>,
    input_state: Res<InputState>,
    time: Res<WorldTime>,
) {
    for mut sprite in query.iter_mut() {
        let Some(scheme) = sprite.player_control().map(|c| c.scheme) else {
            continue;
        };
        let input = input_state.direction_input(scheme);
        sprite.apply_input(input, time.delta);
    }
}
