//! Spatial model: room bounds, interaction points, and the resolved layout.
use std::fmt;

use bevy::prelude::*;
use serde::Deserialize;

use crate::room::{
    data::{reference_blueprints, REFERENCE_MARGIN},
    errors::LayoutError,
};

/// Axis-aligned walkable area in canvas coordinates (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomBounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl RoomBounds {
    /// Insets the viewport rectangle by `margin` on every side.
    pub fn from_viewport(viewport: Vec2, margin: f32) -> Result<Self, LayoutError> {
        let bounds = Self {
            left: margin,
            right: viewport.x - margin,
            top: margin,
            bottom: viewport.y - margin,
        };
        if bounds.left > bounds.right || bounds.top > bounds.bottom {
            return Err(LayoutError::ViewportTooSmall { viewport, margin });
        }
        Ok(bounds)
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.top && point.y <= self.bottom
    }

    pub fn clamp(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x.clamp(self.left, self.right),
            point.y.clamp(self.top, self.bottom),
        )
    }
}

/// Stable index of an interaction point in enumeration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InteractionId(usize);

impl InteractionId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for InteractionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "point-{}", self.0)
    }
}

/// Position of a point along one viewport axis.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisPlacement {
    Centre,
    FromStart(f32),
    FromEnd(f32),
}

impl AxisPlacement {
    pub fn resolve(self, extent: f32) -> f32 {
        match self {
            Self::Centre => extent / 2.0,
            Self::FromStart(offset) => offset,
            Self::FromEnd(offset) => extent - offset,
        }
    }
}

/// Static description of an interaction point before the viewport is known.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionBlueprint {
    pub name: String,
    pub label: String,
    pub size: f32,
    pub x: AxisPlacement,
    pub y: AxisPlacement,
    pub photos: Vec<String>,
}

/// A named location that becomes interactable when the player is close.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionPoint {
    pub name: String,
    pub label: String,
    pub position: Vec2,
    pub size: f32,
    photos: Vec<String>,
}

impl InteractionPoint {
    fn resolve(blueprint: &InteractionBlueprint, viewport: Vec2) -> Self {
        Self {
            name: blueprint.name.clone(),
            label: blueprint.label.clone(),
            position: Vec2::new(
                blueprint.x.resolve(viewport.x),
                blueprint.y.resolve(viewport.y),
            ),
            size: blueprint.size.max(1.0),
            photos: blueprint.photos.clone(),
        }
    }

    pub fn photo(&self, index: usize) -> Option<&str> {
        self.photos.get(index).map(String::as_str)
    }

    pub fn photo_count(&self) -> usize {
        self.photos.len()
    }
}

/// Resolved room: viewport size, walkable bounds, and interaction points in
/// their fixed enumeration order.
#[derive(Resource, Debug, Clone)]
pub struct RoomLayout {
    viewport: Vec2,
    bounds: RoomBounds,
    points: Vec<InteractionPoint>,
}

impl RoomLayout {
    pub fn build(
        viewport: Vec2,
        margin: f32,
        blueprints: &[InteractionBlueprint],
    ) -> Result<Self, LayoutError> {
        let bounds = RoomBounds::from_viewport(viewport, margin)?;
        if blueprints.is_empty() {
            return Err(LayoutError::NoInteractionPoints);
        }

        let mut points: Vec<InteractionPoint> = Vec::with_capacity(blueprints.len());
        for blueprint in blueprints {
            if blueprint.photos.is_empty() {
                return Err(LayoutError::EmptyPhotoList {
                    name: blueprint.name.clone(),
                });
            }
            if points.iter().any(|point| point.name == blueprint.name) {
                return Err(LayoutError::DuplicateName {
                    name: blueprint.name.clone(),
                });
            }
            points.push(InteractionPoint::resolve(blueprint, viewport));
        }

        Ok(Self {
            viewport,
            bounds,
            points,
        })
    }

    /// The reference points with the reference margin, shrunk so the
    /// walkable area never inverts. Always yields a usable layout.
    pub fn reference(viewport: Vec2) -> Self {
        let viewport = viewport.max(Vec2::ZERO);
        let margin = REFERENCE_MARGIN.min(viewport.min_element() / 2.0);
        let bounds = RoomBounds {
            left: margin,
            right: viewport.x - margin,
            top: margin,
            bottom: viewport.y - margin,
        };
        let points = reference_blueprints()
            .iter()
            .map(|blueprint| InteractionPoint::resolve(blueprint, viewport))
            .collect();

        Self {
            viewport,
            bounds,
            points,
        }
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn bounds(&self) -> RoomBounds {
        self.bounds
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn points(&self) -> &[InteractionPoint] {
        &self.points
    }

    pub fn point(&self, id: InteractionId) -> Option<&InteractionPoint> {
        self.points.get(id.index())
    }

    /// Points paired with their ids, in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (InteractionId, &InteractionPoint)> {
        self.points
            .iter()
            .enumerate()
            .map(|(index, point)| (InteractionId::new(index), point))
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn find(&self, name: &str) -> Option<InteractionId> {
        self.iter()
            .find(|(_, point)| point.name == name)
            .map(|(id, _)| id)
    }
}
