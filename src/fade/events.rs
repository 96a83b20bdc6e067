use bevy::prelude::*;

use super::registry::FadeHandle;
use super::task::FadeStatus;

/// Why a fade left the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeOutcome {
    /// Ran to the end; alpha is exactly the target value and the callback ran.
    Completed,
    /// Stopped explicitly. Alpha is left wherever it was.
    Stopped,
    /// A newer fade on the same target took over.
    Replaced,
    /// The target entity (or its alpha source) disappeared mid-fade.
    TargetMissing,
}

/// Emitted once per fade when it leaves the registry, whatever the reason.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeFinished {
    pub handle: FadeHandle,
    pub outcome: FadeOutcome,
}

impl FadeFinished {
    /// Final state of the retired task: `Completed` only for a natural finish.
    pub fn status(&self) -> FadeStatus {
        match self.outcome {
            FadeOutcome::Completed => FadeStatus::Completed,
            FadeOutcome::Stopped | FadeOutcome::Replaced | FadeOutcome::TargetMissing => FadeStatus::Cancelled,
        }
    }
}
