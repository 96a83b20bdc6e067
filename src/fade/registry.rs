use bevy::prelude::*;
use std::collections::{HashMap, VecDeque};

use super::events::{FadeFinished, FadeOutcome};
use super::target::FadeTargetId;
use super::task::{FadeParams, FadeStep, FadeTask, OnFadeComplete};
use crate::core::config::MissingTargetPolicy;

/// Ticket for one started fade. Goes stale as soon as that fade leaves the registry,
/// even if a newer fade is running on the same target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FadeHandle {
    pub target: FadeTargetId,
    pub(crate) ticket: u64,
}

impl FadeHandle {
    #[inline]
    pub fn ticket(&self) -> u64 {
        self.ticket
    }
}

/// Finished records kept when nobody drains them. Oldest go first.
pub const FINISHED_BACKLOG: usize = 256;

/// In-flight fades keyed by target. At most one fade per target.
///
/// Every fade leaving the registry is recorded for [`FadeRegistry::drain_finished`].
/// `FadePlugin` drains once per frame; a registry driven by hand must drain it
/// itself, or only the newest [`FINISHED_BACKLOG`] records are kept.
#[derive(Resource, Debug)]
pub struct FadeRegistry {
    active: HashMap<FadeTargetId, FadeTask>,
    next_ticket: u64,
    finished: VecDeque<FadeFinished>,
}

impl Default for FadeRegistry {
    fn default() -> Self {
        Self {
            active: HashMap::new(),
            next_ticket: 1,
            finished: VecDeque::new(),
        }
    }
}

impl FadeRegistry {
    /// Registers a fade for `target`, replacing any fade already running on it.
    /// `current_alpha` is what the target shows right now; it decides how far
    /// into the fade playback begins.
    pub fn start(
        &mut self,
        target: FadeTargetId,
        current_alpha: f32,
        params: FadeParams,
        on_complete: Option<OnFadeComplete>,
    ) -> FadeHandle {
        self.retire(target, FadeOutcome::Replaced);
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        let task = FadeTask::new(ticket, current_alpha, params, on_complete);
        debug!(
            target: "fade",
            "start {target} #{ticket}: {:.3} -> {:.3} over {:.3}s (offset {:.3})",
            params.from,
            params.to,
            task.duration(),
            task.progress()
        );
        self.active.insert(target, task);
        FadeHandle { target, ticket }
    }

    /// Stops whatever fade runs on `target`. Returns false when nothing was running.
    pub fn stop(&mut self, target: FadeTargetId) -> bool {
        self.retire(target, FadeOutcome::Stopped).is_some()
    }

    /// Like [`stop`](Self::stop), but hands back the retired task. It is left
    /// `Cancelled` with its callback dropped; progress and alpha are as of the stop.
    pub fn take(&mut self, target: FadeTargetId) -> Option<FadeTask> {
        self.retire(target, FadeOutcome::Stopped)
    }

    /// Stops the fade only if `handle` is still the one running on its target.
    pub fn stop_handle(&mut self, handle: FadeHandle) -> bool {
        if !self.is_running(handle) {
            return false;
        }
        self.stop(handle.target)
    }

    pub fn is_in_progress(&self, target: FadeTargetId) -> bool {
        self.active.contains_key(&target)
    }

    pub fn is_running(&self, handle: FadeHandle) -> bool {
        self.active
            .get(&handle.target)
            .is_some_and(|t| t.ticket == handle.ticket)
    }

    /// Handle of the fade currently running on `target`.
    pub fn handle(&self, target: FadeTargetId) -> Option<FadeHandle> {
        self.active
            .get(&target)
            .map(|t| FadeHandle { target, ticket: t.ticket })
    }

    pub fn task(&self, target: FadeTargetId) -> Option<&FadeTask> {
        self.active.get(&target)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn targets(&self) -> impl Iterator<Item = FadeTargetId> + '_ {
        self.active.keys().copied()
    }

    /// Stops every fade. Returns how many were running.
    pub fn stop_all(&mut self) -> usize {
        let targets: Vec<_> = self.active.keys().copied().collect();
        targets
            .into_iter()
            .filter(|t| self.retire(*t, FadeOutcome::Stopped).is_some())
            .count()
    }

    /// Advances every fade by `dt` seconds. `write` applies an alpha to a target
    /// and reports whether the target still exists. Returns the callbacks of
    /// fades that completed during this tick, in no particular order.
    pub fn tick<F>(&mut self, dt: f32, policy: MissingTargetPolicy, mut write: F) -> Vec<OnFadeComplete>
    where
        F: FnMut(FadeTargetId, f32) -> bool,
    {
        let mut retired = Vec::new();
        for (target, task) in self.active.iter_mut() {
            let step = task.advance(dt);
            let alive = write(*target, step.alpha());
            match (alive, step, policy) {
                (true, FadeStep::Write(_), _) => {}
                (true, FadeStep::Finish(_), _) => retired.push((*target, FadeOutcome::Completed)),
                (false, _, MissingTargetPolicy::Cancel) => {
                    warn!(target: "fade", "{target} is gone; cancelling its fade");
                    retired.push((*target, FadeOutcome::TargetMissing));
                }
                (false, FadeStep::Write(_), MissingTargetPolicy::KeepRetrying) => {
                    error!(target: "fade", "still trying to fade {target} even though it is gone");
                }
                (false, FadeStep::Finish(_), MissingTargetPolicy::KeepRetrying) => {
                    retired.push((*target, FadeOutcome::Completed));
                }
            }
        }

        let mut callbacks = Vec::new();
        for (target, outcome) in retired {
            let Some(mut task) = self.active.remove(&target) else { continue };
            if outcome == FadeOutcome::Completed {
                debug!(target: "fade", "complete {target} #{}", task.ticket);
                callbacks.extend(task.take_callback());
            } else {
                drop(task.cancel());
            }
            self.record(FadeFinished {
                handle: FadeHandle { target, ticket: task.ticket },
                outcome,
            });
        }
        callbacks
    }

    /// Outcomes recorded since the last drain, oldest first.
    pub fn drain_finished(&mut self) -> std::collections::vec_deque::Drain<'_, FadeFinished> {
        self.finished.drain(..)
    }

    fn record(&mut self, finished: FadeFinished) {
        if self.finished.len() >= FINISHED_BACKLOG {
            self.finished.pop_front();
        }
        self.finished.push_back(finished);
    }

    fn retire(&mut self, target: FadeTargetId, outcome: FadeOutcome) -> Option<FadeTask> {
        let mut task = self.active.remove(&target)?;
        // A fade that did not run to completion never calls back.
        drop(task.cancel());
        debug!(target: "fade", "{outcome:?} {target} #{}", task.ticket);
        self.record(FadeFinished {
            handle: FadeHandle { target, ticket: task.ticket },
            outcome,
        });
        Some(task)
    }
}
