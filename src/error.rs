use bevy::prelude::Entity;
use thiserror::Error;

use crate::fade::FadeKind;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeError {
    /// The entity was never spawned or has already been despawned.
    #[error("entity {0} does not exist")]
    NoSuchEntity(Entity),

    /// The entity exists but carries nothing a `kind` fade can drive.
    #[error("entity {entity} has no {kind:?} alpha to fade")]
    NoAlphaSource { entity: Entity, kind: FadeKind },
}
