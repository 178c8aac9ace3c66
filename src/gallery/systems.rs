//! Systems turning key presses into viewer commands and applying them.
use bevy::{
    ecs::message::{MessageReader, MessageWriter},
    prelude::*,
};

use crate::{
    core::config::GallerySettings,
    gallery::{
        components::{GalleryCommand, PhotoModalSignal},
        viewer::PhotoViewer,
    },
    input::components::KeyPressed,
    player::components::NearbyInteraction,
    room::components::RoomLayout,
};

/// Maps interact and cancel key presses to viewer commands. Interact only
/// fires while an interaction point is in range.
pub fn dispatch_key_commands(
    mut pressed: MessageReader<KeyPressed>,
    settings: Res<GallerySettings>,
    nearby: Res<NearbyInteraction>,
    mut commands: MessageWriter<GalleryCommand>,
) {
    for KeyPressed { key } in pressed.read() {
        if settings.bindings.is_interact(key) {
            match nearby.get() {
                Some(interaction) => {
                    commands.write(GalleryCommand::Open(interaction));
                }
                None => debug!("Interact pressed with no panel in range"),
            }
        }
        if settings.bindings.is_cancel(key) {
            commands.write(GalleryCommand::Close);
        }
    }
}

/// Applies queued commands to the viewer and forwards visible changes to
/// the modal display.
pub fn apply_gallery_commands(
    mut commands: MessageReader<GalleryCommand>,
    layout: Res<RoomLayout>,
    mut viewer: ResMut<PhotoViewer>,
    mut signals: MessageWriter<PhotoModalSignal>,
) {
    for command in commands.read() {
        let signal = viewer.apply(*command, &layout);
        match (&signal, command) {
            (Some(PhotoModalSignal::Show { index, count, .. }), GalleryCommand::Open(id)) => {
                let name = layout.point(*id).map_or("?", |point| point.name.as_str());
                info!("Opened photo viewer on '{}' ({} photo(s))", name, count);
                debug!("Showing photo {} of {}", index + 1, count);
            }
            (Some(PhotoModalSignal::Show { index, count, .. }), _) => {
                debug!("Showing photo {} of {}", index + 1, count);
            }
            (Some(PhotoModalSignal::Hide), _) => info!("Closed photo viewer"),
            (None, GalleryCommand::Open(id)) => {
                warn!("Cannot open photo viewer for unknown interaction {}", id);
            }
            (None, _) => {}
        }

        if let Some(signal) = signal {
            signals.write(signal);
        }
    }
}
