#[cfg(feature = "debug")]
use bevy::prelude::*;
#[cfg(feature = "debug")]
use crate::fade::{FadeFinished, FadeKind, FadeOutcome, FadeRegistry};

#[cfg(feature = "debug")]
#[derive(Resource, Default, Debug, Clone)]
pub struct FadeDebugStats {
    pub active_graphics: usize,
    pub active_groups: usize,
    pub completed: u64,
    pub stopped: u64,
    pub replaced: u64,
    pub missing: u64,
}

#[cfg(feature = "debug")]
pub fn debug_stats_collect_system(
    registry: Res<FadeRegistry>,
    mut stats: ResMut<FadeDebugStats>,
    mut ev_finished: EventReader<FadeFinished>,
) {
    let (mut graphics, mut groups) = (0, 0);
    for target in registry.targets() {
        match target.kind {
            FadeKind::Graphic => graphics += 1,
            FadeKind::Group => groups += 1,
        }
    }
    stats.active_graphics = graphics;
    stats.active_groups = groups;
    for ev in ev_finished.read() {
        match ev.outcome {
            FadeOutcome::Completed => stats.completed += 1,
            FadeOutcome::Stopped => stats.stopped += 1,
            FadeOutcome::Replaced => stats.replaced += 1,
            FadeOutcome::TargetMissing => stats.missing += 1,
        }
    }
}
