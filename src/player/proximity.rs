//! Proximity engine: which interaction point, if any, the player can use.
use bevy::math::Vec2;

use crate::room::components::{InteractionId, RoomLayout};

/// Returns the first point, in enumeration order, whose centre lies strictly
/// within `radius` of `position`.
///
/// This is a first-match rule, not a nearest-point rule: when two points are
/// both in range the earlier one wins even if it is farther away.
pub fn first_within_radius(
    layout: &RoomLayout,
    position: Vec2,
    radius: f32,
) -> Option<InteractionId> {
    layout
        .iter()
        .find(|(_, point)| position.distance(point.position) < radius)
        .map(|(id, _)| id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::{
        components::{AxisPlacement, InteractionBlueprint},
        data::reference_blueprints,
    };

    const RADIUS: f32 = 60.0;

    fn reference_layout() -> RoomLayout {
        RoomLayout::build(Vec2::new(800.0, 600.0), 50.0, &reference_blueprints())
            .expect("reference layout")
    }

    fn blueprint(name: &str, x: f32, y: f32) -> InteractionBlueprint {
        InteractionBlueprint {
            name: name.to_string(),
            label: name.to_string(),
            size: 30.0,
            x: AxisPlacement::FromStart(x),
            y: AxisPlacement::FromStart(y),
            photos: vec![format!("imgs/{}.png", name)],
        }
    }

    #[test]
    fn none_when_every_point_is_out_of_range() {
        let layout = reference_layout();
        assert_eq!(
            first_within_radius(&layout, Vec2::new(400.0, 500.0), RADIUS),
            None
        );
    }

    #[test]
    fn radius_is_exclusive() {
        let layout = reference_layout();
        let center = layout.find("center").expect("center");

        assert_eq!(
            first_within_radius(&layout, Vec2::new(400.0, 360.0), RADIUS),
            None
        );
        assert_eq!(
            first_within_radius(&layout, Vec2::new(400.0, 359.9), RADIUS),
            Some(center)
        );
    }

    #[test]
    fn earlier_point_wins_even_when_farther() {
        let layout = RoomLayout::build(
            Vec2::new(800.0, 600.0),
            50.0,
            &[blueprint("first", 300.0, 300.0), blueprint("second", 360.0, 300.0)],
        )
        .expect("layout");

        // 50 units from "first", 10 units from "second".
        let hit = first_within_radius(&layout, Vec2::new(350.0, 300.0), RADIUS);
        assert_eq!(hit, layout.find("first"));
    }

    #[test]
    fn matches_brute_force_definition() {
        let layout = reference_layout();
        for x in (0..=800).step_by(20) {
            for y in (0..=600).step_by(20) {
                let position = Vec2::new(x as f32, y as f32);
                let expected = layout
                    .iter()
                    .find(|(_, p)| {
                        let d = ((position.x - p.position.x).powi(2)
                            + (position.y - p.position.y).powi(2))
                        .sqrt();
                        d < RADIUS
                    })
                    .map(|(id, _)| id);
                assert_eq!(first_within_radius(&layout, position, RADIUS), expected);
            }
        }
    }
}
