//! Runtime configuration loaded from `config/gallery.toml`.
use std::{fs, path::Path};

use bevy::prelude::*;
use serde::Deserialize;

use crate::{
    input::components::KeyBindings,
    room::{
        components::{AxisPlacement, InteractionBlueprint},
        data::{reference_blueprints, AVATAR_IMAGE_PATH},
    },
};

const CONFIG_PATH: &str = "config/gallery.toml";

const MIN_VIEWPORT_EXTENT: f32 = 200.0;
const MAX_VIEWPORT_EXTENT: f32 = 4096.0;
const MIN_TICK_HZ: f64 = 1.0;
const MAX_TICK_HZ: f64 = 480.0;

#[derive(Debug, Clone, Deserialize, Default)]
struct RawGalleryConfig {
    #[serde(default)]
    viewport: RawViewport,
    #[serde(default)]
    room: RawRoom,
    #[serde(default)]
    player: RawPlayer,
    #[serde(default)]
    core: RawCore,
    #[serde(default)]
    assets: RawAssets,
    #[serde(default)]
    bindings: RawBindings,
    #[serde(default)]
    points: Option<Vec<RawPoint>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawViewport {
    width: f32,
    height: f32,
}

impl Default for RawViewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawRoom {
    margin: f32,
    activation_radius: f32,
}

impl Default for RawRoom {
    fn default() -> Self {
        Self {
            margin: 50.0,
            activation_radius: 60.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawPlayer {
    size: f32,
    speed: f32,
    start_bottom_offset: f32,
}

impl Default for RawPlayer {
    fn default() -> Self {
        Self {
            size: 20.0,
            speed: 3.0,
            start_bottom_offset: 100.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawCore {
    tick_hz: f64,
}

impl Default for RawCore {
    fn default() -> Self {
        Self { tick_hz: 60.0 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawAssets {
    avatar: String,
    label_font: Option<String>,
}

impl Default for RawAssets {
    fn default() -> Self {
        Self {
            avatar: AVATAR_IMAGE_PATH.to_string(),
            label_font: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawBindings {
    up: Vec<String>,
    down: Vec<String>,
    left: Vec<String>,
    right: Vec<String>,
    interact: Vec<String>,
    cancel: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawPoint {
    name: String,
    #[serde(default)]
    label: Option<String>,
    #[serde(default = "default_point_size")]
    size: f32,
    x: AxisPlacement,
    y: AxisPlacement,
    photos: Vec<String>,
}

fn default_point_size() -> f32 {
    30.0
}

/// Tunable parameters for the room, player, tick rate, assets and bindings.
#[derive(Resource, Debug, Clone)]
pub struct GallerySettings {
    pub viewport: Vec2,
    pub margin: f32,
    pub activation_radius: f32,
    pub player_size: f32,
    pub player_speed: f32,
    pub start_bottom_offset: f32,
    pub tick_hz: f64,
    pub avatar_path: String,
    pub label_font: Option<String>,
    pub bindings: KeyBindings,
    pub points: Vec<InteractionBlueprint>,
}

impl GallerySettings {
    pub fn load_or_default() -> Self {
        let path = Path::new(CONFIG_PATH);
        match fs::read_to_string(path) {
            Ok(raw) => Self::from_toml_str(&raw).unwrap_or_else(|err| {
                warn!(
                    "Failed to parse {} ({}). Falling back to defaults.",
                    CONFIG_PATH, err
                );
                RawGalleryConfig::default().into()
            }),
            Err(err) => {
                warn!(
                    "Failed to read {} ({}). Falling back to defaults.",
                    CONFIG_PATH, err
                );
                RawGalleryConfig::default().into()
            }
        }
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<RawGalleryConfig>(raw).map(Into::into)
    }

    /// Where the player appears: horizontally centred, `start_bottom_offset`
    /// above the bottom edge of the viewport.
    pub fn player_start(&self) -> Vec2 {
        Vec2::new(
            self.viewport.x / 2.0,
            self.viewport.y - self.start_bottom_offset,
        )
    }
}

impl Default for GallerySettings {
    fn default() -> Self {
        RawGalleryConfig::default().into()
    }
}

impl From<RawGalleryConfig> for GallerySettings {
    fn from(value: RawGalleryConfig) -> Self {
        let viewport_defaults = RawViewport::default();
        let room_defaults = RawRoom::default();
        let player_defaults = RawPlayer::default();
        let core_defaults = RawCore::default();

        let viewport = Vec2::new(
            finite_or(value.viewport.width, viewport_defaults.width)
                .clamp(MIN_VIEWPORT_EXTENT, MAX_VIEWPORT_EXTENT),
            finite_or(value.viewport.height, viewport_defaults.height)
                .clamp(MIN_VIEWPORT_EXTENT, MAX_VIEWPORT_EXTENT),
        );

        let defaults = KeyBindings::default();
        let bindings = KeyBindings {
            up: normalise_keys(&value.bindings.up, defaults.up),
            down: normalise_keys(&value.bindings.down, defaults.down),
            left: normalise_keys(&value.bindings.left, defaults.left),
            right: normalise_keys(&value.bindings.right, defaults.right),
            interact: normalise_keys(&value.bindings.interact, defaults.interact),
            cancel: normalise_keys(&value.bindings.cancel, defaults.cancel),
        };

        let points = match value.points {
            Some(points) => points
                .into_iter()
                .map(|point| InteractionBlueprint {
                    label: point.label.unwrap_or_else(|| point.name.clone()),
                    name: point.name,
                    size: finite_or(point.size, default_point_size()),
                    x: finite_placement(point.x),
                    y: finite_placement(point.y),
                    photos: point.photos,
                })
                .collect(),
            None => reference_blueprints(),
        };

        let avatar_path = match value.assets.avatar.trim() {
            "" => AVATAR_IMAGE_PATH.to_string(),
            path => path.to_string(),
        };

        Self {
            viewport,
            margin: finite_or(value.room.margin, room_defaults.margin).max(0.0),
            activation_radius: finite_or(
                value.room.activation_radius,
                room_defaults.activation_radius,
            )
            .max(0.0),
            player_size: finite_or(value.player.size, player_defaults.size).max(1.0),
            player_speed: finite_or(value.player.speed, player_defaults.speed).max(0.0),
            start_bottom_offset: finite_or(
                value.player.start_bottom_offset,
                player_defaults.start_bottom_offset,
            )
            .max(0.0),
            tick_hz: finite_or(value.core.tick_hz, core_defaults.tick_hz)
                .clamp(MIN_TICK_HZ, MAX_TICK_HZ),
            avatar_path,
            label_font: value
                .assets
                .label_font
                .filter(|path| !path.trim().is_empty()),
            bindings,
            points,
        }
    }
}

/// `value` unless it is NaN or infinite, in which case `fallback`.
fn finite_or<T: Into<f64> + Copy>(value: T, fallback: T) -> T {
    if value.into().is_finite() {
        value
    } else {
        fallback
    }
}

/// Non-finite offsets collapse to the centre of the axis.
fn finite_placement(placement: AxisPlacement) -> AxisPlacement {
    match placement {
        AxisPlacement::FromStart(offset) | AxisPlacement::FromEnd(offset)
            if !offset.is_finite() =>
        {
            AxisPlacement::Centre
        }
        placement => placement,
    }
}

fn normalise_keys(keys: &[String], fallback: Vec<String>) -> Vec<String> {
    let keys: Vec<String> = keys
        .iter()
        .map(|key| key.trim().to_lowercase())
        .filter(|key| !key.is_empty())
        .collect();
    if keys.is_empty() {
        fallback
    } else {
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_falls_back_to_defaults() {
        let settings = GallerySettings::default();
        assert_eq!(settings.viewport, Vec2::new(800.0, 600.0));
        assert_eq!(settings.activation_radius, 60.0);
        assert_eq!(settings.player_speed, 3.0);
        assert_eq!(settings.player_start(), Vec2::new(400.0, 500.0));
        assert_eq!(settings.points.len(), 4);
        assert_eq!(settings.bindings.up, ["w", "arrowup"]);
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let settings = GallerySettings::from_toml_str(
            r#"
            [viewport]
            width = 1024.0

            [player]
            speed = -4.0

            [bindings]
            interact = [" E ", ""]
            "#,
        )
        .expect("valid toml");

        assert_eq!(settings.viewport, Vec2::new(1024.0, 600.0));
        assert_eq!(settings.player_speed, 0.0);
        assert_eq!(settings.bindings.interact, ["e"]);
        assert_eq!(settings.bindings.cancel, ["escape"]);
        assert_eq!(settings.avatar_path, AVATAR_IMAGE_PATH);
    }

    #[test]
    fn configured_points_replace_reference_set() {
        let settings = GallerySettings::from_toml_str(
            r#"
            [[points]]
            name = "north"
            x = "centre"
            y = { from_start = 120.0 }
            photos = ["imgs/north.png"]
            "#,
        )
        .expect("valid toml");

        assert_eq!(settings.points.len(), 1);
        let point = &settings.points[0];
        assert_eq!(point.label, "north");
        assert_eq!(point.size, 30.0);
        assert_eq!(point.x, AxisPlacement::Centre);
        assert_eq!(point.y, AxisPlacement::FromStart(120.0));
    }

    #[test]
    fn tick_rate_is_clamped() {
        let settings = GallerySettings::from_toml_str("[core]\ntick_hz = 0.0").expect("valid toml");
        assert_eq!(settings.tick_hz, MIN_TICK_HZ);
    }

    #[test]
    fn non_finite_values_use_defaults() {
        let settings = GallerySettings::from_toml_str(
            r#"
            [viewport]
            width = inf
            height = nan

            [room]
            margin = -inf
            activation_radius = nan

            [player]
            speed = inf

            [core]
            tick_hz = nan

            [[points]]
            name = "drifting"
            size = nan
            x = { from_start = inf }
            y = { from_end = nan }
            photos = ["imgs/drift.png"]
            "#,
        )
        .expect("valid toml");

        assert_eq!(settings.viewport, Vec2::new(800.0, 600.0));
        assert_eq!(settings.margin, 50.0);
        assert_eq!(settings.activation_radius, 60.0);
        assert_eq!(settings.player_speed, 3.0);
        assert_eq!(settings.tick_hz, 60.0);

        let point = &settings.points[0];
        assert_eq!(point.size, 30.0);
        assert_eq!(point.x, AxisPlacement::Centre);
        assert_eq!(point.y, AxisPlacement::Centre);
    }

    #[test]
    fn viewport_is_bounded_above() {
        let settings = GallerySettings::from_toml_str("[viewport]\nwidth = 1e9\nheight = 50.0")
            .expect("valid toml");
        assert_eq!(
            settings.viewport,
            Vec2::new(MAX_VIEWPORT_EXTENT, MIN_VIEWPORT_EXTENT)
        );
    }
}
