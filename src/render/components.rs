//! Shared render components, palette, and coordinate conversion.
use bevy::prelude::*;

use crate::room::components::InteractionId;

pub const BACKGROUND_COLOR: Color = Color::srgb_u8(0xFE, 0xF9, 0xE7);
pub const SAND_LINE_COLOR: Color = Color::srgb_u8(0xF7, 0xDC, 0x6F);
pub const PANEL_NEAR_COLOR: Color = Color::srgb_u8(0xFF, 0x8E, 0x53);
pub const PANEL_FAR_COLOR: Color = Color::srgb_u8(0xC0, 0xC0, 0xC0);
pub const LABEL_COLOR: Color = Color::srgb_u8(0x8B, 0x45, 0x13);

pub const BACKDROP_Z: f32 = -10.0;
pub const PANEL_Z: f32 = 0.0;
pub const PLAYER_Z: f32 = 10.0;

/// Child of a panel, tagged with the interaction it belongs to.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelPart {
    pub interaction: InteractionId,
}

/// The panel's main square: the avatar image, or a flat colour fallback.
#[derive(Component, Debug, Default)]
pub struct PanelBody;

/// Panel children that are only shown while the panel is near.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelOverlay {
    Glow,
    Prompt,
}

/// Font used for panel labels and prompts.
#[derive(Resource, Debug, Clone, Default)]
pub struct LabelFont(pub Handle<Font>);

/// Converts a canvas point (origin top-left, y down) into world space for a
/// centred 2D camera.
pub fn canvas_to_world(point: Vec2, viewport: Vec2, z: f32) -> Vec3 {
    Vec3::new(point.x - viewport.x / 2.0, viewport.y / 2.0 - point.y, z)
}

/// Converts a canvas-space offset (y down) into a world-space offset.
pub fn canvas_offset(offset: Vec2) -> Vec2 {
    Vec2::new(offset.x, -offset.y)
}
