//! Background fill and the procedural sand-wave texture.
use bevy::prelude::*;

use crate::{
    render::components::{canvas_to_world, BACKDROP_Z, SAND_LINE_COLOR},
    room::components::RoomLayout,
};

const ROW_SPACING: f32 = 50.0;
const SAMPLE_STEP: f32 = 25.0;
const WAVE_FREQUENCY: f32 = 0.02;
const WAVE_AMPLITUDE: f32 = 6.0;
const LINE_WIDTH: f32 = 1.0;

/// Polyline vertices for each wave row, top to bottom, in canvas space.
pub fn sand_wave_rows(viewport: Vec2) -> Vec<Vec<Vec2>> {
    let rows = (viewport.y / ROW_SPACING).ceil().max(1.0) as usize;
    let samples = (viewport.x / SAMPLE_STEP).ceil() as usize;

    (0..rows)
        .map(|row| {
            let base = row as f32 * ROW_SPACING;
            (0..=samples)
                .map(|sample| {
                    let x = (sample as f32 * SAMPLE_STEP).min(viewport.x);
                    Vec2::new(x, base + (x * WAVE_FREQUENCY).sin() * WAVE_AMPLITUDE)
                })
                .collect()
        })
        .collect()
}

/// Spawns the texture once as thin line-segment sprites behind everything.
pub fn spawn_sand_texture(mut commands: Commands, layout: Res<RoomLayout>) {
    let viewport = layout.viewport();

    commands
        .spawn((
            Transform::default(),
            Visibility::default(),
            Name::new("Sand Texture"),
        ))
        .with_children(|parent| {
            for row in sand_wave_rows(viewport) {
                for segment in row.windows(2) {
                    let (start, end) = (segment[0], segment[1]);
                    let delta = end - start;
                    let length = delta.length();
                    if length <= f32::EPSILON {
                        continue;
                    }
                    let midpoint = (start + end) / 2.0;
                    // Canvas y points down, so the world angle is mirrored.
                    let angle = -delta.y.atan2(delta.x);
                    parent.spawn((
                        Sprite::from_color(SAND_LINE_COLOR, Vec2::new(length, LINE_WIDTH)),
                        Transform::from_translation(canvas_to_world(midpoint, viewport, BACKDROP_Z))
                            .with_rotation(Quat::from_rotation_z(angle)),
                    ));
                }
            }
        });
}
