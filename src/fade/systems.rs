use bevy::prelude::*;

use super::events::{FadeFinished, FadeOutcome};
use super::group::{within_group, FadeGroup, GroupBaseAlpha};
use super::registry::FadeRegistry;
use super::target::{FadeKind, GraphicColorTuple, GraphicColors};
use crate::core::config::FadeConfig;

/// The per-frame tick: advances every registered fade, writes alpha values,
/// publishes outcomes and queues completion callbacks.
#[allow(clippy::too_many_arguments)]
pub fn advance_fades(
    time: Res<Time>,
    cfg: Res<FadeConfig>,
    mut registry: ResMut<FadeRegistry>,
    mut q_colors: Query<GraphicColorTuple>,
    mut q_base: Query<&mut GroupBaseAlpha>,
    mut q_groups: Query<&mut FadeGroup>,
    q_parents: Query<&ChildOf>,
    mut ev_finished: EventWriter<FadeFinished>,
    mut commands: Commands,
) {
    if !registry.is_empty() {
        let dt = time.delta_secs();
        let callbacks = registry.tick(dt, cfg.missing_target(), |target, alpha| match target.kind {
            FadeKind::Group => match q_groups.get_mut(target.entity) {
                Ok(mut group) => {
                    if group.alpha != alpha {
                        group.alpha = alpha;
                    }
                    true
                }
                Err(_) => false,
            },
            FadeKind::Graphic => {
                let grouped = within_group(target.entity, |e| q_groups.contains(e), &q_parents);
                if let Ok(mut base) = q_base.get_mut(target.entity) {
                    if base.0 != alpha {
                        base.0 = alpha;
                    }
                    // Under a group propagation recolours; otherwise the base is stale
                    // until propagation drops it, so the colour is written here.
                    if grouped {
                        return true;
                    }
                }
                match q_colors.get_mut(target.entity) {
                    Ok(item) => GraphicColors::new(item).set_alpha(alpha),
                    Err(_) => false,
                }
            }
        });
        for cb in callbacks {
            commands.queue(cb);
        }
    }

    // Outcomes can also come from start/stop calls made since the last tick.
    for finished in registry.drain_finished() {
        if cfg.log_transitions {
            info!(target: "fade", "{} #{} finished: {:?}", finished.handle.target, finished.handle.ticket(), finished.outcome);
        } else if finished.outcome == FadeOutcome::TargetMissing {
            debug!(target: "fade", "{} #{} dropped, target missing", finished.handle.target, finished.handle.ticket());
        }
        ev_finished.write(finished);
    }
}
