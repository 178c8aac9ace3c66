//! Serializable session snapshots for debug logging.
#![cfg_attr(not(any(test, feature = "core_debug")), allow(dead_code))]
use serde::Serialize;

#[cfg(feature = "core_debug")]
use bevy::prelude::*;

use crate::{
    gallery::viewer::PhotoViewer,
    player::components::{NearbyInteraction, Player},
    room::components::{InteractionId, RoomLayout},
};
#[cfg(feature = "core_debug")]
use crate::core::plugin::{DebugTickTimer, TickClock};

/// Viewer state as it appears in a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ViewerSnapshot {
    Closed,
    Open {
        interaction: String,
        index: usize,
        count: usize,
    },
}

/// Point-in-time view of the player, proximity result, and viewer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub tick: u64,
    pub player: [f32; 2],
    pub near: Option<String>,
    pub viewer: ViewerSnapshot,
}

impl SessionSnapshot {
    pub fn capture(
        tick: u64,
        player: &Player,
        nearby: &NearbyInteraction,
        viewer: &PhotoViewer,
        layout: &RoomLayout,
    ) -> Self {
        let name_of = |id: InteractionId| layout.point(id).map(|point| point.name.clone());

        let viewer = match *viewer {
            PhotoViewer::Closed => ViewerSnapshot::Closed,
            PhotoViewer::Open { interaction, index } => ViewerSnapshot::Open {
                interaction: name_of(interaction).unwrap_or_else(|| interaction.to_string()),
                index,
                count: layout
                    .point(interaction)
                    .map_or(0, |point| point.photo_count()),
            },
        };

        Self {
            tick,
            player: [player.position.x, player.position.y],
            near: nearby.get().and_then(name_of),
            viewer,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Logs a JSON snapshot of the session once per second of real time.
#[cfg(feature = "core_debug")]
pub fn log_session_snapshot(
    time: Res<Time>,
    mut timer: ResMut<DebugTickTimer>,
    clock: Res<TickClock>,
    players: Query<&Player>,
    nearby: Res<NearbyInteraction>,
    viewer: Res<PhotoViewer>,
    layout: Res<RoomLayout>,
) {
    if !timer.timer.tick(time.delta()).just_finished() {
        return;
    }
    let Ok(player) = players.single() else {
        return;
    };

    let snapshot = SessionSnapshot::capture(clock.ticks(), player, &nearby, &viewer, &layout);
    match snapshot.to_json() {
        Ok(json) => info!(
            target: "core_debug",
            "tick {} ({:.1}s simulated): {}",
            clock.ticks(),
            clock.elapsed().as_secs_f32(),
            json
        ),
        Err(err) => warn!(target: "core_debug", "Failed to serialize snapshot: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::math::Vec2;

    use crate::room::data::reference_blueprints;

    #[test]
    fn snapshot_serializes_viewer_state() {
        let layout = RoomLayout::build(Vec2::new(800.0, 600.0), 50.0, &reference_blueprints())
            .expect("reference layout");
        let left = layout.find("left").expect("left");
        let player = Player {
            position: Vec2::new(150.0, 320.0),
            size: 20.0,
            speed: 3.0,
        };

        let snapshot = SessionSnapshot::capture(
            42,
            &player,
            &NearbyInteraction(Some(left)),
            &PhotoViewer::Open {
                interaction: left,
                index: 1,
            },
            &layout,
        );

        assert_eq!(snapshot.near.as_deref(), Some("left"));
        let json = snapshot.to_json().expect("serializable");
        assert_eq!(
            json,
            r#"{"tick":42,"player":[150.0,320.0],"near":"left","viewer":{"state":"open","interaction":"left","index":1,"count":5}}"#
        );
    }

    #[test]
    fn closed_viewer_snapshot() {
        let layout = RoomLayout::build(Vec2::new(800.0, 600.0), 50.0, &reference_blueprints())
            .expect("reference layout");
        let player = Player {
            position: Vec2::new(400.0, 500.0),
            size: 20.0,
            speed: 3.0,
        };

        let snapshot = SessionSnapshot::capture(
            0,
            &player,
            &NearbyInteraction::default(),
            &PhotoViewer::Closed,
            &layout,
        );
        assert_eq!(snapshot.viewer, ViewerSnapshot::Closed);
        assert_eq!(snapshot.near, None);
    }
}
