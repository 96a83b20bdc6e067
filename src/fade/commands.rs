//! Start / stop / query entry points on `World` and `Commands`.
use bevy::prelude::*;

use super::registry::{FadeHandle, FadeRegistry};
use super::target::{read_alpha, FadeKind, FadeTargetId};
use super::task::{FadeParams, OnFadeComplete};
use crate::error::FadeError;

pub trait FadeWorldExt {
    /// Starts fading `entity`, replacing any fade already running on it.
    /// The first alpha write happens on the next frame tick.
    fn start_fade(
        &mut self,
        entity: Entity,
        kind: FadeKind,
        params: FadeParams,
        on_complete: Option<OnFadeComplete>,
    ) -> Result<FadeHandle, FadeError>;

    /// Stops the fade on `entity`, leaving its alpha where it is.
    fn stop_fade(&mut self, entity: Entity, kind: FadeKind) -> bool;

    fn is_fading(&self, entity: Entity, kind: FadeKind) -> bool;
}

impl FadeWorldExt for World {
    fn start_fade(
        &mut self,
        entity: Entity,
        kind: FadeKind,
        params: FadeParams,
        on_complete: Option<OnFadeComplete>,
    ) -> Result<FadeHandle, FadeError> {
        if self.get_entity(entity).is_err() {
            return Err(FadeError::NoSuchEntity(entity));
        }
        let target = FadeTargetId { entity, kind };
        let current = read_alpha(self, target).ok_or(FadeError::NoAlphaSource { entity, kind })?;
        let mut registry = self.get_resource_or_init::<FadeRegistry>();
        Ok(registry.start(target, current, params, on_complete))
    }

    fn stop_fade(&mut self, entity: Entity, kind: FadeKind) -> bool {
        self.get_resource_mut::<FadeRegistry>()
            .is_some_and(|mut r| r.stop(FadeTargetId { entity, kind }))
    }

    fn is_fading(&self, entity: Entity, kind: FadeKind) -> bool {
        self.get_resource::<FadeRegistry>()
            .is_some_and(|r| r.is_in_progress(FadeTargetId { entity, kind }))
    }
}

/// Deferred variants for use inside systems. Failures to start are logged.
pub trait FadeCommandsExt {
    fn start_fade(&mut self, entity: Entity, kind: FadeKind, params: FadeParams, on_complete: Option<OnFadeComplete>);
    fn stop_fade(&mut self, entity: Entity, kind: FadeKind);
}

impl FadeCommandsExt for Commands<'_, '_> {
    fn start_fade(&mut self, entity: Entity, kind: FadeKind, params: FadeParams, on_complete: Option<OnFadeComplete>) {
        self.queue(move |world: &mut World| {
            if let Err(e) = world.start_fade(entity, kind, params, on_complete) {
                warn!(target: "fade", "start_fade ignored: {e}");
            }
        });
    }

    fn stop_fade(&mut self, entity: Entity, kind: FadeKind) {
        self.queue(move |world: &mut World| {
            world.stop_fade(entity, kind);
        });
    }
}
