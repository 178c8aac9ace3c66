//! RenderPlugin draws the room every frame: backdrop, panels, then the player.
use bevy::prelude::*;

use crate::{
    player::systems::spawn_player,
    render::{
        assets::{load_render_assets, poll_avatar_asset},
        avatar::{attach_player_avatar, sync_player_avatar},
        backdrop::spawn_sand_texture,
        components::BACKGROUND_COLOR,
        panels::{spawn_interaction_panels, sync_panel_visuals},
    },
};

pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(BACKGROUND_COLOR))
            .add_systems(
                Startup,
                (
                    spawn_camera,
                    load_render_assets,
                    spawn_sand_texture,
                    spawn_interaction_panels.after(load_render_assets),
                    attach_player_avatar.after(spawn_player),
                ),
            )
            .add_systems(
                Update,
                (
                    poll_avatar_asset,
                    sync_panel_visuals.after(poll_avatar_asset),
                    sync_player_avatar,
                ),
            );
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((Camera2d, Name::new("Room Camera")));
}
