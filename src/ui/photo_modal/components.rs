// src/ui/photo_modal/components.rs
//
// Components and settings for the photo modal overlay.

use bevy::prelude::*;

use crate::gallery::components::GalleryCommand;

/// Full-screen overlay root. Hidden with `Display::None` while closed.
#[derive(Component, Debug)]
pub struct PhotoModalRoot;

/// Image node showing the current photo.
#[derive(Component, Debug)]
pub struct PhotoModalImage;

/// "n / m" page counter under the photo.
#[derive(Component, Debug)]
pub struct PhotoModalCounter;

/// The three clickable modal controls.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalControl {
    Close,
    Previous,
    Next,
}

impl ModalControl {
    pub fn command(self) -> GalleryCommand {
        match self {
            Self::Close => GalleryCommand::Close,
            Self::Previous => GalleryCommand::Previous,
            Self::Next => GalleryCommand::Next,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Close => "X",
            Self::Previous => "<",
            Self::Next => ">",
        }
    }

    /// Whether the control can change anything at `index` of `count`.
    pub fn enabled(self, index: usize, count: usize) -> bool {
        match self {
            Self::Close => true,
            Self::Previous => index > 0,
            Self::Next => index + 1 < count,
        }
    }
}

/// Resource containing settings for the modal's look.
#[derive(Resource, Debug)]
pub struct PhotoModalSettings {
    /// Photo box size as a percentage of the viewport (width, height).
    pub photo_extent_percent: Vec2,

    /// Side length of each control button (pixels).
    pub button_size: f32,

    /// Offset of the close button from the top-right corner (pixels).
    pub close_offset: f32,

    /// Gap between the photo and the navigation buttons (pixels).
    pub gap: f32,

    /// Font size for button glyphs (points).
    pub button_font_size: f32,

    /// Font size for the page counter (points).
    pub counter_font_size: f32,
}

impl Default for PhotoModalSettings {
    fn default() -> Self {
        Self {
            photo_extent_percent: Vec2::new(70.0, 75.0),
            button_size: 44.0,
            close_offset: 20.0,
            gap: 16.0,
            button_font_size: 24.0,
            counter_font_size: 16.0,
        }
    }
}
