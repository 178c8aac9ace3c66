//! Systems translating host keyboard and focus messages into [`InputState`].
use bevy::{
    ecs::message::{MessageReader, MessageWriter},
    input::{keyboard::KeyboardInput, ButtonState},
    prelude::*,
    window::WindowFocused,
};

use crate::input::components::{key_identifier, InputState, KeyPressed};

/// Records key presses and releases, and forwards fresh presses as
/// [`KeyPressed`] for discrete actions.
pub fn track_keyboard_input(
    mut keyboard: MessageReader<KeyboardInput>,
    mut input: ResMut<InputState>,
    mut pressed: MessageWriter<KeyPressed>,
) {
    for event in keyboard.read() {
        let Some(key) = key_identifier(&event.logical_key) else {
            continue;
        };

        match event.state {
            ButtonState::Pressed => {
                input.key_down(&key);
                if !event.repeat {
                    pressed.write(KeyPressed { key });
                }
            }
            ButtonState::Released => input.key_up(&key),
        }
    }
}

/// Releases every key when the window loses focus; the matching key-up
/// messages never arrive otherwise.
pub fn release_keys_on_focus_loss(
    mut focus: MessageReader<WindowFocused>,
    mut input: ResMut<InputState>,
) {
    if focus.read().any(|event| !event.focused) {
        debug!("Window lost focus, releasing held keys");
        input.release_all();
    }
}
