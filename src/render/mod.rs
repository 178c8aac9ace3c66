//! Render module: backdrop, interaction panels, and the layered player avatar.
//!
//! Gameplay state lives in canvas coordinates (origin top-left, y down);
//! everything here converts to Bevy's centred, y-up world space on the way
//! out. Draw order is backdrop, then panels, then the player.
pub mod assets;
pub mod avatar;
pub mod backdrop;
pub mod components;
pub mod panels;
pub mod plugin;

pub use plugin::RenderPlugin;
