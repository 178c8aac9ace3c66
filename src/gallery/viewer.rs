//! Photo viewer state machine: `Closed` or `Open` on one interaction's photos.
use bevy::prelude::*;

use crate::{
    gallery::components::{GalleryCommand, PhotoModalSignal},
    room::components::{InteractionId, RoomLayout},
};

/// Paging state. While open, `index` is always a valid photo index for the
/// active interaction.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PhotoViewer {
    #[default]
    Closed,
    Open {
        interaction: InteractionId,
        index: usize,
    },
}

impl PhotoViewer {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn active(&self) -> Option<InteractionId> {
        match *self {
            Self::Open { interaction, .. } => Some(interaction),
            Self::Closed => None,
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn index(&self) -> Option<usize> {
        match *self {
            Self::Open { index, .. } => Some(index),
            Self::Closed => None,
        }
    }

    pub fn apply(
        &mut self,
        command: GalleryCommand,
        layout: &RoomLayout,
    ) -> Option<PhotoModalSignal> {
        match command {
            GalleryCommand::Open(interaction) => self.open(interaction, layout),
            GalleryCommand::Next => self.next(layout),
            GalleryCommand::Previous => self.previous(layout),
            GalleryCommand::Close => self.close(),
        }
    }

    /// Opens `interaction` at its first photo, from any state. Unknown
    /// interactions and empty photo lists leave the viewer untouched.
    pub fn open(
        &mut self,
        interaction: InteractionId,
        layout: &RoomLayout,
    ) -> Option<PhotoModalSignal> {
        let point = layout.point(interaction)?;
        if point.photo_count() == 0 {
            return None;
        }
        *self = Self::Open {
            interaction,
            index: 0,
        };
        self.visible_photo(layout)
    }

    /// Advances one photo; no wraparound past the last.
    pub fn next(&mut self, layout: &RoomLayout) -> Option<PhotoModalSignal> {
        let Self::Open { interaction, index } = self else {
            return None;
        };
        let count = layout.point(*interaction)?.photo_count();
        if *index + 1 >= count {
            return None;
        }
        *index += 1;
        self.visible_photo(layout)
    }

    /// Steps back one photo; no wraparound before the first.
    pub fn previous(&mut self, layout: &RoomLayout) -> Option<PhotoModalSignal> {
        let Self::Open { index, .. } = self else {
            return None;
        };
        if *index == 0 {
            return None;
        }
        *index -= 1;
        self.visible_photo(layout)
    }

    pub fn close(&mut self) -> Option<PhotoModalSignal> {
        if !self.is_open() {
            return None;
        }
        *self = Self::Closed;
        Some(PhotoModalSignal::Hide)
    }

    fn visible_photo(&self, layout: &RoomLayout) -> Option<PhotoModalSignal> {
        let Self::Open { interaction, index } = *self else {
            return None;
        };
        let point = layout.point(interaction)?;
        point.photo(index).map(|photo| PhotoModalSignal::Show {
            photo: photo.to_string(),
            index,
            count: point.photo_count(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::data::reference_blueprints;

    fn layout() -> RoomLayout {
        RoomLayout::build(Vec2::new(800.0, 600.0), 50.0, &reference_blueprints())
            .expect("reference layout")
    }

    fn id(layout: &RoomLayout, name: &str) -> InteractionId {
        layout.find(name).expect("known point")
    }

    #[test]
    fn open_shows_first_photo() {
        let layout = layout();
        let mut viewer = PhotoViewer::default();

        let signal = viewer.open(id(&layout, "center"), &layout);
        assert_eq!(
            signal,
            Some(PhotoModalSignal::Show {
                photo: "imgs/math_main.png".to_string(),
                index: 0,
                count: 3,
            })
        );
        assert_eq!(viewer.index(), Some(0));
    }

    #[test]
    fn next_clamps_at_last_photo() {
        let layout = layout();
        let mut viewer = PhotoViewer::default();
        viewer.open(id(&layout, "center"), &layout);

        let mut indices = Vec::new();
        for _ in 0..3 {
            viewer.next(&layout);
            indices.push(viewer.index().expect("open"));
        }
        assert_eq!(indices, [1, 2, 2]);
        assert_eq!(viewer.next(&layout), None);
    }

    #[test]
    fn previous_at_first_photo_is_noop() {
        let layout = layout();
        let mut viewer = PhotoViewer::default();
        viewer.open(id(&layout, "left"), &layout);

        assert_eq!(viewer.previous(&layout), None);
        assert_eq!(viewer.index(), Some(0));
    }

    #[test]
    fn next_then_previous_restores_mid_range_index() {
        let layout = layout();
        let mut viewer = PhotoViewer::default();
        viewer.open(id(&layout, "left"), &layout);
        viewer.next(&layout);
        viewer.next(&layout);
        let before = viewer;

        viewer.next(&layout);
        let signal = viewer.previous(&layout);
        assert_eq!(viewer, before);
        assert!(matches!(signal, Some(PhotoModalSignal::Show { index: 2, .. })));
    }

    #[test]
    fn reopening_another_point_resets_index() {
        let layout = layout();
        let mut viewer = PhotoViewer::default();
        viewer.open(id(&layout, "right"), &layout);
        viewer.next(&layout);
        viewer.next(&layout);

        viewer.open(id(&layout, "left"), &layout);
        assert_eq!(
            viewer,
            PhotoViewer::Open {
                interaction: id(&layout, "left"),
                index: 0,
            }
        );
    }

    #[test]
    fn close_then_reopen_starts_at_zero() {
        let layout = layout();
        let center = id(&layout, "center");
        let mut viewer = PhotoViewer::default();
        viewer.open(center, &layout);
        viewer.next(&layout);

        assert_eq!(viewer.close(), Some(PhotoModalSignal::Hide));
        assert_eq!(viewer.active(), None);

        viewer.open(center, &layout);
        assert_eq!(viewer.index(), Some(0));
    }

    #[test]
    fn closed_viewer_ignores_everything_but_open() {
        let layout = layout();
        let mut viewer = PhotoViewer::default();

        assert_eq!(viewer.apply(GalleryCommand::Close, &layout), None);
        assert_eq!(viewer.apply(GalleryCommand::Next, &layout), None);
        assert_eq!(viewer.apply(GalleryCommand::Previous, &layout), None);
        assert_eq!(viewer, PhotoViewer::Closed);
    }

    #[test]
    fn single_photo_point_never_pages() {
        let layout = layout();
        let mut viewer = PhotoViewer::default();
        viewer.open(id(&layout, "top"), &layout);

        assert_eq!(viewer.next(&layout), None);
        assert_eq!(viewer.previous(&layout), None);
        assert_eq!(viewer.index(), Some(0));
    }

    #[test]
    fn unknown_interaction_is_ignored() {
        let layout = layout();
        let mut viewer = PhotoViewer::default();
        assert_eq!(viewer.open(InteractionId::new(42), &layout), None);
        assert!(!viewer.is_open());
    }
}
