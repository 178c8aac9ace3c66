//! Asynchronously loaded render assets and their readiness tracking.
use bevy::{asset::LoadState, prelude::*};

use crate::{core::config::GallerySettings, render::components::LabelFont};

/// Load state of a fire-and-forget asset, checked every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetStatus {
    Pending,
    Ready,
    Failed,
}

/// The decorative avatar image drawn on every panel. After a failed load the
/// handle is dropped and panels keep their flat fallback.
#[derive(Resource, Debug)]
pub struct AvatarAsset {
    path: String,
    handle: Option<Handle<Image>>,
    status: AssetStatus,
}

impl AvatarAsset {
    pub fn pending(path: impl Into<String>, handle: Handle<Image>) -> Self {
        Self {
            path: path.into(),
            handle: Some(handle),
            status: AssetStatus::Pending,
        }
    }

    pub fn status(&self) -> AssetStatus {
        self.status
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// The image handle, only once it is ready to draw.
    pub fn ready_image(&self) -> Option<&Handle<Image>> {
        match self.status {
            AssetStatus::Ready => self.handle.as_ref(),
            AssetStatus::Pending | AssetStatus::Failed => None,
        }
    }

    pub fn mark_ready(&mut self) {
        if self.status == AssetStatus::Pending && self.handle.is_some() {
            self.status = AssetStatus::Ready;
        }
    }

    pub fn mark_failed(&mut self) {
        self.status = AssetStatus::Failed;
        self.handle = None;
    }
}

/// Kicks off loading of the avatar image and the optional label font.
pub fn load_render_assets(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    settings: Res<GallerySettings>,
) {
    let handle = asset_server.load::<Image>(settings.avatar_path.clone());
    commands.insert_resource(AvatarAsset::pending(settings.avatar_path.clone(), handle));

    let font = settings
        .label_font
        .as_ref()
        .map(|path| asset_server.load::<Font>(path.clone()))
        .unwrap_or_default();
    commands.insert_resource(LabelFont(font));
}

/// Promotes the avatar to ready or failed once the asset server settles.
pub fn poll_avatar_asset(asset_server: Res<AssetServer>, mut avatar: ResMut<AvatarAsset>) {
    if avatar.status() != AssetStatus::Pending {
        return;
    }
    let Some(handle) = avatar.handle.as_ref() else {
        return;
    };

    match asset_server.get_load_state(handle.id()) {
        Some(LoadState::Loaded) => {
            avatar.mark_ready();
            info!("Avatar image '{}' loaded", avatar.path());
        }
        Some(LoadState::Failed(err)) => {
            warn!(
                "Failed to load avatar image '{}' ({}). Panels fall back to flat squares.",
                avatar.path(),
                err
            );
            avatar.mark_failed();
        }
        _ => {}
    }
}
