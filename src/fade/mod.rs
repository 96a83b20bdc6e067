//! Alpha fades for sprites, UI images, text and panel groups.
//!
//! A [`FadeRegistry`] resource holds at most one running [`FadeTask`] per target.
//! [`advance_fades`] ticks them once per `Update`, then [`propagate_group_alpha`]
//! pushes [`FadeGroup`] alpha down to the graphics beneath each group.
mod commands;
mod events;
mod group;
mod plugin;
mod registry;
mod systems;
mod target;
mod task;

pub use commands::{FadeCommandsExt, FadeWorldExt};
pub use events::{FadeFinished, FadeOutcome};
pub use group::{propagate_group_alpha, FadeGroup, GroupBaseAlpha};
pub use plugin::FadePlugin;
pub use registry::{FadeHandle, FadeRegistry, FINISHED_BACKLOG};
pub use systems::advance_fades;
pub use target::{read_alpha, FadeKind, FadeTargetId, GraphicColorTuple, GraphicColors};
pub use task::{start_offset, FadeParams, FadeStatus, FadeStep, FadeTask, OnFadeComplete};
