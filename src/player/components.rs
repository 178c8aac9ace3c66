//! Components and resources for the player and its proximity state.
use bevy::prelude::*;

use crate::{
    input::components::MoveIntent,
    room::components::{InteractionId, RoomBounds},
};

/// The walking player, in canvas coordinates.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Player {
    pub position: Vec2,
    pub size: f32,
    pub speed: f32,
}

impl Player {
    /// Creates a player at `start`, pulled inside `bounds` if necessary.
    pub fn new(start: Vec2, size: f32, speed: f32, bounds: &RoomBounds) -> Self {
        Self {
            position: bounds.clamp(start),
            size,
            speed,
        }
    }

    /// Applies one tick of movement. Directions are applied in the order
    /// up, down, left, right, each clamped to `bounds` on its own axis.
    /// Diagonals are not normalised.
    pub fn step(&mut self, intent: MoveIntent, bounds: &RoomBounds) {
        if intent.up {
            self.position.y = (self.position.y - self.speed).max(bounds.top);
        }
        if intent.down {
            self.position.y = (self.position.y + self.speed).min(bounds.bottom);
        }
        if intent.left {
            self.position.x = (self.position.x - self.speed).max(bounds.left);
        }
        if intent.right {
            self.position.x = (self.position.x + self.speed).min(bounds.right);
        }
    }
}

/// The interaction point the player is currently close enough to use.
/// Recomputed from scratch every tick.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NearbyInteraction(pub Option<InteractionId>);

impl NearbyInteraction {
    pub fn get(&self) -> Option<InteractionId> {
        self.0
    }

    pub fn is(&self, id: InteractionId) -> bool {
        self.0 == Some(id)
    }
}
