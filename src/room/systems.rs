//! Startup systems for the room module.
use bevy::{prelude::*, window::PrimaryWindow};

use crate::room::components::RoomLayout;

/// Sizes the primary window to the room's viewport; the size stays fixed for
/// the session.
pub fn apply_viewport_size(
    layout: Res<RoomLayout>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    let viewport = layout.viewport();
    for mut window in windows.iter_mut() {
        window.resolution.set(viewport.x, viewport.y);
    }
}

pub fn log_room_layout(layout: Res<RoomLayout>) {
    let bounds = layout.bounds();
    info!(
        "Room {}x{} with walkable bounds [{}, {}] x [{}, {}]",
        layout.viewport().x,
        layout.viewport().y,
        bounds.left,
        bounds.right,
        bounds.top,
        bounds.bottom
    );
    for (id, point) in layout.iter() {
        info!(
            "  {} '{}' ({}) at ({:.0}, {:.0}) with {} photo(s)",
            id,
            point.name,
            point.label,
            point.position.x,
            point.position.y,
            point.photo_count()
        );
    }
}
