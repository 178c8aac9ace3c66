//! Room module: walkable bounds, interaction points, and their static content.
pub mod components;
pub mod data;
pub mod errors;
pub mod plugin;
pub mod systems;

pub use plugin::RoomPlugin;
