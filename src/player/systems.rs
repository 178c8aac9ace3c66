//! Systems for spawning the player, moving it, and tracking nearby points.
use bevy::prelude::*;

use crate::{
    core::config::GallerySettings,
    input::components::InputState,
    player::{
        components::{NearbyInteraction, Player},
        proximity::first_within_radius,
    },
    room::components::RoomLayout,
};

/// Spawns the single player entity at its configured start position.
pub fn spawn_player(
    mut commands: Commands,
    settings: Res<GallerySettings>,
    layout: Res<RoomLayout>,
) {
    let player = Player::new(
        settings.player_start(),
        settings.player_size,
        settings.player_speed,
        &layout.bounds(),
    );
    info!(
        "Player spawned at ({:.0}, {:.0}) with speed {:.1}",
        player.position.x, player.position.y, player.speed
    );
    commands.spawn((
        player,
        Transform::default(),
        Visibility::default(),
        Name::new("Player"),
    ));
}

/// Applies one tick of held directional input to the player.
pub fn move_player(
    input: Res<InputState>,
    settings: Res<GallerySettings>,
    layout: Res<RoomLayout>,
    mut players: Query<&mut Player>,
) {
    let Ok(mut player) = players.single_mut() else {
        return;
    };

    let intent = settings.bindings.intent(&input);
    if intent == Default::default() {
        return;
    }
    player.step(intent, &layout.bounds());
}

/// Recomputes which interaction point the player can use this tick.
pub fn detect_nearby_interaction(
    players: Query<&Player>,
    settings: Res<GallerySettings>,
    layout: Res<RoomLayout>,
    mut nearby: ResMut<NearbyInteraction>,
) {
    let Ok(player) = players.single() else {
        nearby.set_if_neq(NearbyInteraction(None));
        return;
    };

    let current = first_within_radius(&layout, player.position, settings.activation_radius);
    if nearby.set_if_neq(NearbyInteraction(current)) {
        match current.and_then(|id| layout.point(id)) {
            Some(point) => debug!("Player is near '{}'", point.name),
            None => debug!("Player left interaction range"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tall_room_app() -> App {
        let settings = GallerySettings {
            viewport: Vec2::new(800.0, 800.0),
            ..Default::default()
        };
        let layout = RoomLayout::build(settings.viewport, settings.margin, &settings.points)
            .expect("reference layout");

        let mut app = App::new();
        app.insert_resource(settings)
            .insert_resource(layout)
            .init_resource::<InputState>()
            .init_resource::<NearbyInteraction>()
            .add_systems(Startup, spawn_player)
            .add_systems(
                Update,
                (move_player, detect_nearby_interaction.after(move_player)),
            );
        app
    }

    fn player_position(app: &mut App) -> Vec2 {
        app.world_mut()
            .query::<&Player>()
            .single(app.world())
            .expect("one player")
            .position
    }

    #[test]
    fn walking_up_reaches_the_center_point() {
        let mut app = tall_room_app();
        app.world_mut().resource_mut::<InputState>().key_down("arrowup");

        // Start at (400, 700); the center point sits at (400, 400).
        for tick in 1..=100 {
            app.update();
            let position = player_position(&mut app);
            assert_eq!(position, Vec2::new(400.0, 700.0 - 3.0 * tick as f32));

            let nearby = app.world().resource::<NearbyInteraction>().get();
            let center = app.world().resource::<RoomLayout>().find("center");
            if tick <= 80 {
                assert_eq!(nearby, None, "tick {tick}: still 60 or more away");
            } else {
                assert_eq!(nearby, center, "tick {tick}: within radius");
            }
        }

        assert_eq!(player_position(&mut app).y, 400.0);
    }

    #[test]
    fn idle_player_does_not_move() {
        let mut app = tall_room_app();
        app.update();
        app.update();
        assert_eq!(player_position(&mut app), Vec2::new(400.0, 700.0));
        assert_eq!(app.world().resource::<NearbyInteraction>().get(), None);
    }
}
