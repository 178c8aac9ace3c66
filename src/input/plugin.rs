//! Input plugin wiring keyboard tracking.
use bevy::prelude::*;

use crate::input::{
    components::{InputState, KeyPressed},
    systems::{release_keys_on_focus_loss, track_keyboard_input},
};

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputState>()
            .add_message::<KeyPressed>()
            .add_systems(
                PreUpdate,
                (
                    track_keyboard_input,
                    release_keys_on_focus_loss.after(track_keyboard_input),
                ),
            );
    }
}
