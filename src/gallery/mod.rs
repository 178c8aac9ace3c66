//! Gallery module: the paged photo viewer and the commands that drive it.
pub mod components;
pub mod plugin;
pub mod systems;
pub mod viewer;

pub use plugin::GalleryPlugin;
