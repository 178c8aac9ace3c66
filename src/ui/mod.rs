// src/ui/mod.rs
//
// UI module providing screen-space overlays.
//
// Current features:
// - Photo modal (paged photo viewer overlay with close/previous/next buttons)

pub mod photo_modal;

// Re-export the main plugin
pub use photo_modal::UiPlugin;
