//! Interaction panels: one per point, highlighted while the player is near.
use bevy::prelude::*;

use crate::{
    core::config::GallerySettings,
    player::components::NearbyInteraction,
    render::{
        assets::AvatarAsset,
        components::{
            canvas_offset, canvas_to_world, LabelFont, PanelBody, PanelOverlay, PanelPart,
            LABEL_COLOR, PANEL_FAR_COLOR, PANEL_NEAR_COLOR, PANEL_Z,
        },
    },
    room::components::RoomLayout,
};

/// Drawn image edge relative to the point's configured size.
const IMAGE_SCALE: f32 = 1.2;
const GLOW_PADDING: f32 = 8.0;
const GLOW_ALPHA: f32 = 0.45;
const LABEL_GAP: f32 = 15.0;
const PROMPT_GAP: f32 = 10.0;
const TEXT_FONT_SIZE: f32 = 12.0;

/// How a panel's body is filled this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelFill {
    Image { edge: f32 },
    Flat { color: Color, edge: f32 },
}

/// Everything that varies about a panel from frame to frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelAppearance {
    pub fill: PanelFill,
    pub glow: bool,
    pub prompt: bool,
}

/// Chooses the image or flat fallback and the near-only overlays.
pub fn panel_appearance(size: f32, is_near: bool, image_ready: bool) -> PanelAppearance {
    let fill = if image_ready {
        PanelFill::Image {
            edge: size * IMAGE_SCALE,
        }
    } else {
        PanelFill::Flat {
            color: if is_near {
                PANEL_NEAR_COLOR
            } else {
                PANEL_FAR_COLOR
            },
            edge: size,
        }
    };

    PanelAppearance {
        fill,
        glow: is_near && image_ready,
        prompt: is_near,
    }
}

/// Prompt shown above the near panel, naming the first interact key.
pub fn interact_prompt(settings: &GallerySettings) -> String {
    let key = settings
        .bindings
        .interact
        .first()
        .map(|key| key.to_uppercase())
        .unwrap_or_else(|| "?".to_string());
    format!("Press {} to interact", key)
}

/// Spawns every panel with its body, glow, label, and prompt children.
pub fn spawn_interaction_panels(
    mut commands: Commands,
    layout: Res<RoomLayout>,
    settings: Res<GallerySettings>,
    font: Res<LabelFont>,
) {
    let viewport = layout.viewport();
    let prompt = interact_prompt(&settings);
    let text_font = TextFont {
        font: font.0.clone(),
        font_size: TEXT_FONT_SIZE,
        ..default()
    };

    for (interaction, point) in layout.iter() {
        let part = PanelPart { interaction };
        let glow_edge = point.size * IMAGE_SCALE + GLOW_PADDING * 2.0;
        let initial = panel_appearance(point.size, false, false);
        let initial_edge = match initial.fill {
            PanelFill::Image { edge } | PanelFill::Flat { edge, .. } => edge,
        };

        commands
            .spawn((
                Transform::from_translation(canvas_to_world(point.position, viewport, PANEL_Z)),
                Visibility::default(),
                Name::new(format!("Panel '{}'", point.name)),
            ))
            .with_children(|parent| {
                parent.spawn((
                    part,
                    PanelOverlay::Glow,
                    Sprite::from_color(
                        PANEL_NEAR_COLOR.with_alpha(GLOW_ALPHA),
                        Vec2::splat(glow_edge),
                    ),
                    Transform::from_xyz(0.0, 0.0, -0.1),
                    Visibility::Hidden,
                ));

                parent.spawn((
                    part,
                    PanelBody,
                    Sprite::from_color(PANEL_FAR_COLOR, Vec2::splat(initial_edge)),
                    Transform::default(),
                ));

                let label_offset = canvas_offset(Vec2::new(0.0, point.size / 2.0 + LABEL_GAP));
                parent.spawn((
                    part,
                    Text2d::new(point.label.clone()),
                    text_font.clone(),
                    TextColor(LABEL_COLOR),
                    Transform::from_translation(label_offset.extend(0.1)),
                ));

                let prompt_offset =
                    canvas_offset(Vec2::new(0.0, -(point.size / 2.0 + PROMPT_GAP)));
                parent.spawn((
                    part,
                    PanelOverlay::Prompt,
                    Text2d::new(prompt.clone()),
                    text_font.clone(),
                    TextColor(PANEL_NEAR_COLOR),
                    Transform::from_translation(prompt_offset.extend(0.1)),
                    Visibility::Hidden,
                ));
            });
    }
}

/// Refreshes every panel from the current proximity result and avatar
/// readiness.
pub fn sync_panel_visuals(
    layout: Res<RoomLayout>,
    nearby: Res<NearbyInteraction>,
    avatar: Res<AvatarAsset>,
    mut bodies: Query<(&PanelPart, &mut Sprite), With<PanelBody>>,
    mut overlays: Query<(&PanelPart, &PanelOverlay, &mut Visibility)>,
) {
    let image = avatar.ready_image();

    for (part, mut sprite) in bodies.iter_mut() {
        let Some(point) = layout.point(part.interaction) else {
            continue;
        };
        let appearance =
            panel_appearance(point.size, nearby.is(part.interaction), image.is_some());

        let (handle, color, edge) = match (appearance.fill, image) {
            (PanelFill::Image { edge }, Some(handle)) => (handle.clone(), Color::WHITE, edge),
            (PanelFill::Flat { color, edge }, _) => (Handle::default(), color, edge),
            (PanelFill::Image { .. }, None) => continue,
        };
        let size = Some(Vec2::splat(edge));

        if sprite.image != handle {
            sprite.image = handle;
        }
        if sprite.color != color {
            sprite.color = color;
        }
        if sprite.custom_size != size {
            sprite.custom_size = size;
        }
    }

    for (part, overlay, mut visibility) in overlays.iter_mut() {
        let Some(point) = layout.point(part.interaction) else {
            continue;
        };
        let appearance =
            panel_appearance(point.size, nearby.is(part.interaction), image.is_some());
        let shown = match overlay {
            PanelOverlay::Glow => appearance.glow,
            PanelOverlay::Prompt => appearance.prompt,
        };
        visibility.set_if_neq(if shown {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        });
    }
}
