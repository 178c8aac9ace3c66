//! Error types surfaced while resolving the room layout.
use std::{error::Error, fmt};

use bevy::math::Vec2;

/// Reasons a configured room cannot be built.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    ViewportTooSmall { viewport: Vec2, margin: f32 },
    NoInteractionPoints,
    EmptyPhotoList { name: String },
    DuplicateName { name: String },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ViewportTooSmall { viewport, margin } => write!(
                f,
                "viewport {}x{} leaves no walkable area with margin {}",
                viewport.x, viewport.y, margin
            ),
            Self::NoInteractionPoints => write!(f, "room has no interaction points"),
            Self::EmptyPhotoList { name } => {
                write!(f, "interaction point '{}' has no photos", name)
            }
            Self::DuplicateName { name } => {
                write!(f, "interaction point '{}' is defined more than once", name)
            }
        }
    }
}

impl Error for LayoutError {}
