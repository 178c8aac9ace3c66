//! Input module tracking held keys and the key bindings for movement and actions.
pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::InputPlugin;
