//! Gallery plugin wiring the photo viewer and its command flow.
use bevy::prelude::*;

use crate::gallery::{
    components::{GalleryCommand, PhotoModalSignal},
    systems::{apply_gallery_commands, dispatch_key_commands},
    viewer::PhotoViewer,
};

/// Orders command producers before the viewer consumes them.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GallerySet {
    Commands,
    Apply,
}

pub struct GalleryPlugin;

impl Plugin for GalleryPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PhotoViewer>()
            .add_message::<GalleryCommand>()
            .add_message::<PhotoModalSignal>()
            .configure_sets(Update, (GallerySet::Commands, GallerySet::Apply).chain())
            .add_systems(Update, dispatch_key_commands.in_set(GallerySet::Commands))
            .add_systems(Update, apply_gallery_commands.in_set(GallerySet::Apply));
    }
}
