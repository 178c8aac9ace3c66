//! RoomPlugin resolves the room layout against the configured viewport.
use bevy::prelude::*;

use crate::{
    core::config::GallerySettings,
    room::{
        components::RoomLayout,
        data::{reference_blueprints, REFERENCE_MARGIN},
        systems::{apply_viewport_size, log_room_layout},
    },
};

pub struct RoomPlugin;

impl Plugin for RoomPlugin {
    fn build(&self, app: &mut App) {
        let settings = app
            .world()
            .get_resource::<GallerySettings>()
            .cloned()
            .unwrap_or_default();

        app.insert_resource(resolve_layout(&settings))
            .add_systems(Startup, (apply_viewport_size, log_room_layout));
    }
}

/// Builds the configured layout, falling back to the reference points (and
/// then the reference margin) when the configuration cannot be resolved.
pub fn resolve_layout(settings: &GallerySettings) -> RoomLayout {
    RoomLayout::build(settings.viewport, settings.margin, &settings.points)
        .or_else(|err| {
            warn!("Invalid room configuration ({}). Using reference points.", err);
            RoomLayout::build(settings.viewport, settings.margin, &reference_blueprints())
        })
        .unwrap_or_else(|err| {
            warn!(
                "Invalid room margin ({}). Using reference margin {}.",
                err, REFERENCE_MARGIN
            );
            RoomLayout::reference(settings.viewport)
        })
}
