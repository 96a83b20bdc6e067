//! Debug module: feature gated fade statistics & periodic logging.
//! Built only when compiled with `--features debug`.

#[cfg(feature = "debug")]
mod logging;
#[cfg(feature = "debug")]
mod stats;

#[cfg(feature = "debug")]
pub use logging::{debug_logging_system, FadeDebugState};
#[cfg(feature = "debug")]
pub use stats::{debug_stats_collect_system, FadeDebugStats};

#[cfg(feature = "debug")]
use bevy::prelude::*;
#[cfg(feature = "debug")]
use crate::core::system::system_order::FadeSet;

#[cfg(feature = "debug")]
pub struct FadeDebugPlugin;
#[cfg(feature = "debug")]
impl Plugin for FadeDebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FadeDebugState>()
            .init_resource::<FadeDebugStats>()
            .add_systems(
                Update,
                (debug_stats_collect_system, debug_logging_system)
                    .chain()
                    .after(FadeSet::Advance),
            );
    }
}
