// src/ui/photo_modal/plugin.rs
//
// UiPlugin coordinates the photo modal overlay.

use bevy::prelude::*;

use crate::gallery::plugin::GallerySet;

use super::components::PhotoModalSettings;
use super::systems::{apply_modal_signals, handle_modal_buttons, spawn_photo_modal};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        info!("UiPlugin registered");

        app.init_resource::<PhotoModalSettings>()
            .add_systems(Startup, spawn_photo_modal)
            .add_systems(
                Update,
                (
                    handle_modal_buttons.in_set(GallerySet::Commands),
                    apply_modal_signals.after(GallerySet::Apply),
                ),
            );
    }
}
