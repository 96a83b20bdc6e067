use bevy::prelude::*;

use super::events::FadeFinished;
use super::group::{propagate_group_alpha, FadeGroup, GroupBaseAlpha};
use super::registry::FadeRegistry;
use super::systems::advance_fades;
use crate::core::config::FadeConfig;
use crate::core::system::system_order::FadeSet;

/// Registers the fade registry, its events and the per-frame systems.
/// An existing `FadeConfig` resource is kept; otherwise defaults are inserted.
#[derive(Default)]
pub struct FadePlugin;

impl Plugin for FadePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FadeConfig>()
            .init_resource::<FadeRegistry>()
            .add_event::<FadeFinished>()
            .register_type::<FadeGroup>()
            .register_type::<GroupBaseAlpha>()
            .configure_sets(Update, (FadeSet::Advance, FadeSet::Propagate).chain())
            .add_systems(Update, advance_fades.in_set(FadeSet::Advance))
            .add_systems(Update, propagate_group_alpha.in_set(FadeSet::Propagate));
    }
}
