//! Player module: avatar state, bounded movement, and proximity detection.
pub mod components;
pub mod plugin;
pub mod proximity;
pub mod systems;

pub use plugin::PlayerPlugin;
