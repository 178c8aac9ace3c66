use bevy::{prelude::*, window::WindowResolution};

mod core;
mod gallery;
mod input;
mod player;
mod render;
mod room;
mod ui;

use crate::{
    core::CorePlugin, gallery::GalleryPlugin, input::InputPlugin, player::PlayerPlugin,
    render::RenderPlugin, room::RoomPlugin, ui::UiPlugin,
};

const WINDOW_TITLE: &str = "Shisa Gallery";

fn main() {
    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: WINDOW_TITLE.to_string(),
                    resolution: WindowResolution::new(800, 600),
                    resizable: false,
                    ..default()
                }),
                ..default()
            }),
            CorePlugin, // Loads GallerySettings; must precede the plugins that read it
            InputPlugin,
            RoomPlugin,
            PlayerPlugin,
            GalleryPlugin,
            RenderPlugin,
            UiPlugin, // After GalleryPlugin to order against GallerySet
        ))
        .run();
}
