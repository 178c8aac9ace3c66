//! Messages exchanged between input, the photo viewer, and the modal overlay.
use bevy::prelude::*;

use crate::room::components::InteractionId;

/// Discrete viewer actions raised by keys and modal buttons.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryCommand {
    Open(InteractionId),
    Next,
    Previous,
    Close,
}

/// Instruction for the modal display, emitted whenever the visible photo
/// changes or the viewer closes.
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub enum PhotoModalSignal {
    Show {
        photo: String,
        index: usize,
        count: usize,
    },
    Hide,
}
