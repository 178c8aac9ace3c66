//! Built-in room content used when the configuration does not list points.
use crate::room::components::{AxisPlacement, InteractionBlueprint};

pub const AVATAR_IMAGE_PATH: &str = "imgs/shisa.png";
/// Walkable-area inset used with the reference points.
pub const REFERENCE_MARGIN: f32 = 50.0;

struct PointPrototype {
    name: &'static str,
    label: &'static str,
    size: f32,
    x: AxisPlacement,
    y: AxisPlacement,
    photos: &'static [&'static str],
}

const REFERENCE_POINTS: [PointPrototype; 4] = [
    PointPrototype {
        name: "center",
        label: "答",
        size: 40.0,
        x: AxisPlacement::Centre,
        y: AxisPlacement::Centre,
        photos: &[
            "imgs/math_main.png",
            "imgs/crossword_main.png",
            "imgs/geo_main.png",
        ],
    },
    PointPrototype {
        name: "left",
        label: "壱",
        size: 30.0,
        x: AxisPlacement::FromStart(150.0),
        y: AxisPlacement::Centre,
        photos: &[
            "imgs/math_1.png",
            "imgs/math_2.png",
            "imgs/math_3.png",
            "imgs/math_4.png",
            "imgs/math_5.png",
        ],
    },
    PointPrototype {
        name: "top",
        label: "弐",
        size: 30.0,
        x: AxisPlacement::Centre,
        y: AxisPlacement::FromStart(150.0),
        photos: &["imgs/crossword.png"],
    },
    PointPrototype {
        name: "right",
        label: "参",
        size: 30.0,
        x: AxisPlacement::FromEnd(150.0),
        y: AxisPlacement::Centre,
        photos: &[
            "imgs/geo_1.png",
            "imgs/geo_2.png",
            "imgs/geo_3.png",
            "imgs/geo_4.png",
            "imgs/geo_5.png",
        ],
    },
];

/// The four reference points in enumeration order: center, left, top, right.
pub fn reference_blueprints() -> Vec<InteractionBlueprint> {
    REFERENCE_POINTS
        .iter()
        .map(|prototype| InteractionBlueprint {
            name: prototype.name.to_string(),
            label: prototype.label.to_string(),
            size: prototype.size,
            x: prototype.x,
            y: prototype.y,
            photos: prototype.photos.iter().map(|p| p.to_string()).collect(),
        })
        .collect()
}
