#[cfg(feature = "debug")]
use bevy::prelude::*;
#[cfg(feature = "debug")]
use super::stats::FadeDebugStats;

#[cfg(feature = "debug")]
#[derive(Resource, Debug)]
pub struct FadeDebugState {
    pub log_interval: f32,
    pub time_accum: f32,
    pub frame_counter: u64,
}

#[cfg(feature = "debug")]
impl Default for FadeDebugState {
    fn default() -> Self {
        Self {
            log_interval: 1.0,
            time_accum: 0.0,
            frame_counter: 0,
        }
    }
}

#[cfg(feature = "debug")]
pub fn debug_logging_system(time: Res<Time>, mut state: ResMut<FadeDebugState>, stats: Res<FadeDebugStats>) {
    state.frame_counter += 1;
    state.time_accum += time.delta_secs();
    if state.time_accum >= state.log_interval {
        state.time_accum = 0.0;
        // Quiet while nothing is happening.
        if stats.active_graphics + stats.active_groups == 0 {
            return;
        }
        info!(target: "fade", "FADES frame={} t={:.3}s active={}g/{}p completed={} stopped={} replaced={} missing={}",
            state.frame_counter,
            time.elapsed_secs(),
            stats.active_graphics,
            stats.active_groups,
            stats.completed,
            stats.stopped,
            stats.replaced,
            stats.missing);
    }
}
