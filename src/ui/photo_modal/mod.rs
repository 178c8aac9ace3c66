// src/ui/photo_modal/mod.rs
//
// Photo modal module: the overlay that displays the viewer's current photo.

pub mod components;
pub mod plugin;
pub mod systems;

// Re-export main types
pub use plugin::UiPlugin;
