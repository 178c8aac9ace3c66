//! The player's layered figure and its per-frame placement.
use bevy::prelude::*;

use crate::{
    player::components::Player,
    render::components::{canvas_offset, canvas_to_world, PLAYER_Z},
    room::components::RoomLayout,
};

const SHIRT: Color = Color::srgb_u8(0x34, 0x98, 0xDB);
const SKIN: Color = Color::srgb_u8(0xFD, 0xBC, 0xB4);
const HAIR: Color = Color::srgb_u8(0x8B, 0x45, 0x13);
const TROUSERS: Color = Color::srgb_u8(0x2C, 0x3E, 0x50);

/// Depth step between consecutive layers so later layers draw on top.
const LAYER_STEP: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AvatarShape {
    Rect { size: Vec2 },
    Circle { radius: f32 },
}

/// One shape of the figure, offset from the player's centre in canvas space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AvatarPart {
    pub name: &'static str,
    pub shape: AvatarShape,
    pub offset: Vec2,
    pub color: Color,
}

/// Figure layers in draw order: body, head, hair, face, arms, legs, shoes.
/// The hair circle sits slightly above the head and the face is redrawn on
/// top of it, leaving a ring of hair.
pub fn avatar_parts(size: f32) -> Vec<AvatarPart> {
    let rect = |name, offset: Vec2, w: f32, h: f32, color| AvatarPart {
        name,
        shape: AvatarShape::Rect {
            size: Vec2::new(w, h),
        },
        offset,
        color,
    };
    let circle = |name, offset: Vec2, radius: f32, color| AvatarPart {
        name,
        shape: AvatarShape::Circle { radius },
        offset,
        color,
    };

    let head = Vec2::new(0.0, -size / 2.0);
    let limb_y = size / 2.0;
    let shoe_y = size * 7.0 / 12.0;

    vec![
        rect("body", Vec2::ZERO, size * 2.0 / 3.0, size * 2.0 / 3.0, SHIRT),
        circle("head", head, size / 3.0, SKIN),
        circle("hair", head - Vec2::new(0.0, 2.0), size / 3.0, HAIR),
        circle("face", head, (size / 3.0 - 2.0).max(0.5), SKIN),
        rect("left arm", Vec2::new(-size * 3.0 / 8.0, 0.0), size / 4.0, size / 2.0, SKIN),
        rect("right arm", Vec2::new(size * 3.0 / 8.0, 0.0), size / 4.0, size / 2.0, SKIN),
        rect("left leg", Vec2::new(-size / 6.0, limb_y), size / 6.0, size / 3.0, TROUSERS),
        rect("right leg", Vec2::new(size / 4.0, limb_y), size / 6.0, size / 3.0, TROUSERS),
        rect("left shoe", Vec2::new(-size / 6.0, shoe_y), size / 6.0, size / 6.0, TROUSERS),
        rect("right shoe", Vec2::new(size / 4.0, shoe_y), size / 6.0, size / 6.0, TROUSERS),
    ]
}

/// Attaches the figure layers as children of the player entity.
pub fn attach_player_avatar(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    players: Query<(Entity, &Player)>,
) {
    for (entity, player) in players.iter() {
        let parts = avatar_parts(player.size);
        commands.entity(entity).with_children(|parent| {
            for (layer, part) in parts.into_iter().enumerate() {
                let translation = canvas_offset(part.offset).extend(layer as f32 * LAYER_STEP);
                let transform = Transform::from_translation(translation);
                let name = Name::new(format!("Avatar {}", part.name));
                match part.shape {
                    AvatarShape::Rect { size } => {
                        parent.spawn((
                            Sprite::from_color(part.color, size),
                            transform,
                            name,
                        ));
                    }
                    AvatarShape::Circle { radius } => {
                        parent.spawn((
                            Mesh2d(meshes.add(Circle::new(radius))),
                            MeshMaterial2d(materials.add(part.color)),
                            transform,
                            name,
                        ));
                    }
                }
            }
        });
    }
}

/// Moves the drawn figure to the player's current position.
pub fn sync_player_avatar(
    layout: Res<RoomLayout>,
    mut players: Query<(&Player, &mut Transform)>,
) {
    let viewport = layout.viewport();
    for (player, mut transform) in players.iter_mut() {
        transform.translation = canvas_to_world(player.position, viewport, PLAYER_Z);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn figure_layers_are_stacked_in_order() {
        let names: Vec<&str> = avatar_parts(20.0).iter().map(|part| part.name).collect();
        assert_eq!(
            names,
            [
                "body",
                "head",
                "hair",
                "face",
                "left arm",
                "right arm",
                "left leg",
                "right leg",
                "left shoe",
                "right shoe",
            ]
        );
    }

    #[test]
    fn head_sits_above_body_and_shoes_below() {
        let parts = avatar_parts(24.0);
        let find = |name: &str| {
            parts
                .iter()
                .find(|part| part.name == name)
                .copied()
                .expect("layer exists")
        };

        assert_eq!(find("head").offset, Vec2::new(0.0, -12.0));
        assert_eq!(find("hair").offset, Vec2::new(0.0, -14.0));
        assert_eq!(find("face").shape, AvatarShape::Circle { radius: 6.0 });
        assert_eq!(find("left shoe").offset, Vec2::new(-4.0, 14.0));
        assert_eq!(
            find("body").shape,
            AvatarShape::Rect {
                size: Vec2::splat(16.0)
            }
        );
    }

    #[test]
    fn avatar_follows_player_position() {
        let layout = RoomLayout::build(
            Vec2::new(800.0, 600.0),
            50.0,
            &crate::room::data::reference_blueprints(),
        )
        .expect("reference layout");

        let mut app = App::new();
        app.insert_resource(layout)
            .add_systems(Update, sync_player_avatar);
        let entity = app
            .world_mut()
            .spawn((
                Player {
                    position: Vec2::new(100.0, 550.0),
                    size: 20.0,
                    speed: 3.0,
                },
                Transform::default(),
            ))
            .id();

        app.update();

        let transform = app.world().get::<Transform>(entity).expect("transform");
        assert_eq!(transform.translation, Vec3::new(-300.0, -250.0, PLAYER_Z));
    }
}
