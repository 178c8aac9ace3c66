//! Pressed-key tracking and the bindings that map keys to actions.
use std::collections::HashMap;

use bevy::input::keyboard::Key;
use bevy::prelude::*;

/// Fired once per fresh key press (auto-repeat excluded), carrying the
/// normalised key identifier.
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub struct KeyPressed {
    pub key: String,
}

/// Current pressed state per lowercase key identifier.
#[derive(Resource, Debug, Default)]
pub struct InputState {
    keys: HashMap<String, bool>,
}

impl InputState {
    pub fn key_down(&mut self, key: &str) {
        self.keys.insert(key.to_lowercase(), true);
    }

    pub fn key_up(&mut self, key: &str) {
        self.keys.insert(key.to_lowercase(), false);
    }

    pub fn is_pressed(&self, key: &str) -> bool {
        self.keys.get(key).copied().unwrap_or(false)
    }

    pub fn any_pressed(&self, keys: &[String]) -> bool {
        keys.iter().any(|key| self.is_pressed(key))
    }

    pub fn release_all(&mut self) {
        self.keys.values_mut().for_each(|pressed| *pressed = false);
    }
}

/// Directional input sampled for a single tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveIntent {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Key aliases for each action. Identifiers are lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    pub up: Vec<String>,
    pub down: Vec<String>,
    pub left: Vec<String>,
    pub right: Vec<String>,
    pub interact: Vec<String>,
    pub cancel: Vec<String>,
}

impl KeyBindings {
    pub fn intent(&self, input: &InputState) -> MoveIntent {
        MoveIntent {
            up: input.any_pressed(&self.up),
            down: input.any_pressed(&self.down),
            left: input.any_pressed(&self.left),
            right: input.any_pressed(&self.right),
        }
    }

    pub fn is_interact(&self, key: &str) -> bool {
        self.interact.iter().any(|bound| bound == key)
    }

    pub fn is_cancel(&self, key: &str) -> bool {
        self.cancel.iter().any(|bound| bound == key)
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let keys = |names: &[&str]| names.iter().map(|name| name.to_string()).collect();
        Self {
            up: keys(&["w", "arrowup"]),
            down: keys(&["s", "arrowdown"]),
            left: keys(&["a", "arrowleft"]),
            right: keys(&["d", "arrowright"]),
            interact: keys(&["f"]),
            cancel: keys(&["escape"]),
        }
    }
}

/// Lowercase identifier for a logical key, e.g. `"w"`, `"arrowup"`,
/// `"escape"`. Keys without a stable identity yield `None`.
pub fn key_identifier(key: &Key) -> Option<String> {
    match key {
        Key::Character(text) => Some(text.to_lowercase()),
        Key::Unidentified(_) | Key::Dead(_) => None,
        named => Some(format!("{:?}", named).to_lowercase()),
    }
}
