//! Player plugin wiring spawn, movement, and proximity systems.
use bevy::prelude::*;

use crate::player::{
    components::NearbyInteraction,
    systems::{detect_nearby_interaction, move_player, spawn_player},
};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<NearbyInteraction>()
            .add_systems(Startup, spawn_player)
            .add_systems(
                FixedUpdate,
                (move_player, detect_nearby_interaction).chain(),
            );
    }
}
