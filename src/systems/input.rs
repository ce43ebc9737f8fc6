//! Input system.
//!
//! [`update_input_state`] reads the keyboard from raylib each frame and
//! writes the result into [`InputState`]. F11 triggers
//! [`SwitchDebugEvent`].
use bevy_ecs::prelude::*;
use raylib::ffi::KeyboardKey;

use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::{BoolState, InputState};

/// Poll raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    let poll = |state: &mut BoolState| {
        let key: KeyboardKey = state.key_binding;
        state.active = rl.is_key_down(key);
        state.just_pressed = rl.is_key_pressed(key);
    };

    poll(&mut input.walk_up);
    poll(&mut input.walk_down);
    poll(&mut input.walk_left);
    poll(&mut input.walk_right);
    poll(&mut input.turn_left);
    poll(&mut input.turn_right);
    poll(&mut input.thrust);
    poll(&mut input.mode_debug);

    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
}
