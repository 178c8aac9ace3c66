//! Core module: configuration, fixed tick accounting, and debug snapshots.
pub mod config;
pub mod plugin;
pub mod snapshot;

pub use plugin::CorePlugin;
