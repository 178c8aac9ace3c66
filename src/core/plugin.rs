//! CorePlugin wires configuration, the fixed tick rate, and tick accounting.
use bevy::prelude::*;
#[cfg(feature = "core_debug")]
use bevy::time::TimerMode;
use std::time::Duration;

use crate::core::config::GallerySettings;
#[cfg(feature = "core_debug")]
use crate::core::snapshot::log_session_snapshot;

#[cfg(feature = "core_debug")]
#[derive(Resource)]
pub(crate) struct DebugTickTimer {
    pub(crate) timer: Timer,
}

#[cfg(feature = "core_debug")]
impl Default for DebugTickTimer {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(1.0, TimerMode::Repeating),
        }
    }
}

/// Counts fixed simulation ticks and the simulated time they cover.
#[derive(Resource, Debug, Default)]
pub struct TickClock {
    ticks: u64,
    last_delta: Duration,
    elapsed: Duration,
}

impl TickClock {
    /// Number of fixed ticks run since startup.
    #[cfg_attr(not(any(test, feature = "core_debug")), allow(dead_code))]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Duration covered by the most recent tick.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn last_delta(&self) -> Duration {
        self.last_delta
    }

    /// Total simulated duration since startup.
    #[cfg_attr(not(feature = "core_debug"), allow(dead_code))]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Records one fixed tick of length `delta`.
    pub fn tick(&mut self, delta: Duration) {
        self.ticks = self.ticks.saturating_add(1);
        self.last_delta = delta;
        self.elapsed += delta;
    }
}

/// Loads [`GallerySettings`] and drives the fixed update → render loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        let settings = GallerySettings::load_or_default();
        let tick_hz = settings.tick_hz;

        app.insert_resource(settings)
            .insert_resource(Time::<Fixed>::from_hz(tick_hz))
            .init_resource::<TickClock>()
            .add_systems(Startup, log_startup_tick_rate)
            .add_systems(FixedFirst, advance_tick_clock);

        #[cfg(feature = "core_debug")]
        {
            app.insert_resource(DebugTickTimer::default())
                .add_systems(Update, log_session_snapshot);
        }
    }
}

fn advance_tick_clock(mut clock: ResMut<TickClock>, time: Res<Time<Fixed>>) {
    clock.tick(time.delta());
}

fn log_startup_tick_rate(settings: Res<GallerySettings>) {
    info!(
        "CorePlugin initialised with fixed tick rate: {:.1} Hz",
        settings.tick_hz
    );
}
