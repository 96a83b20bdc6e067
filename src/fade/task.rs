//! Per-target fade state machine.
//!
//! A [`FadeTask`] carries everything one in-flight fade needs: the alpha range,
//! the duration, how far along it is and the optional completion callback.
//! It never touches the world itself; [`FadeTask::advance`] is fed the frame
//! delta and answers with the alpha to write.
use bevy::prelude::*;

/// Deferred work run with full world access once a fade completes naturally.
pub type OnFadeComplete = Box<dyn FnOnce(&mut World) + Send + Sync + 'static>;

/// Requested alpha range and duration of a fade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeParams {
    pub from: f32,
    pub to: f32,
    /// Seconds. Non-positive or non-finite values make the fade instant.
    pub duration: f32,
}

impl FadeParams {
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        Self { from, to, duration }
    }

    /// Transparent to opaque.
    pub fn fade_in(duration: f32) -> Self {
        Self::new(0.0, 1.0, duration)
    }

    /// Opaque to transparent.
    pub fn fade_out(duration: f32) -> Self {
        Self::new(1.0, 0.0, duration)
    }
}

/// Lifecycle of a [`FadeTask`]. Retired tasks are observable through
/// [`FadeRegistry::take`](super::FadeRegistry::take) and
/// [`FadeFinished::status`](super::FadeFinished::status).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeStatus {
    Running,
    Completed,
    Cancelled,
}

/// Result of one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FadeStep {
    /// Still running; write this alpha.
    Write(f32),
    /// Duration exceeded; write this (exact end) alpha and retire the task.
    Finish(f32),
}

impl FadeStep {
    #[inline]
    pub fn alpha(self) -> f32 {
        match self {
            FadeStep::Write(a) | FadeStep::Finish(a) => a,
        }
    }
}

pub struct FadeTask {
    pub(crate) ticket: u64,
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
    started: bool,
    status: FadeStatus,
    on_complete: Option<OnFadeComplete>,
}

impl std::fmt::Debug for FadeTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FadeTask")
            .field("ticket", &self.ticket)
            .field("from", &self.from)
            .field("to", &self.to)
            .field("duration", &self.duration)
            .field("elapsed", &self.elapsed)
            .field("started", &self.started)
            .field("status", &self.status)
            .field("has_callback", &self.on_complete.is_some())
            .finish()
    }
}

/// Fraction of the `from -> to` range that `current` already covers, clamped to [0,1].
/// A zero-width range counts as already at target.
pub fn start_offset(current: f32, from: f32, to: f32) -> f32 {
    let range = to - from;
    if range.abs() <= f32::EPSILON {
        return 1.0;
    }
    let state = (current - from) / range;
    if state.is_finite() {
        state.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

fn sanitize_duration(duration: f32) -> f32 {
    if duration.is_finite() && duration > 0.0 {
        duration
    } else {
        0.0
    }
}

impl FadeTask {
    pub fn new(
        ticket: u64,
        current_alpha: f32,
        params: FadeParams,
        on_complete: Option<OnFadeComplete>,
    ) -> Self {
        let duration = sanitize_duration(params.duration);
        let offset = start_offset(current_alpha, params.from, params.to);
        Self {
            ticket,
            from: params.from,
            to: params.to,
            duration,
            elapsed: offset * duration,
            started: false,
            status: FadeStatus::Running,
            on_complete,
        }
    }

    #[inline]
    pub fn status(&self) -> FadeStatus {
        self.status
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    #[inline]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    #[inline]
    pub fn target_alpha(&self) -> f32 {
        self.to
    }

    /// Normalized progress in [0,1].
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    /// Alpha the target should show at the current elapsed time.
    pub fn current_alpha(&self) -> f32 {
        self.from + (self.to - self.from) * self.progress()
    }

    /// Advance by one frame. The first call after construction writes the
    /// starting alpha without consuming `dt`.
    pub fn advance(&mut self, dt: f32) -> FadeStep {
        debug_assert_eq!(self.status, FadeStatus::Running);
        if self.started {
            self.elapsed += dt.max(0.0);
        } else {
            self.started = true;
        }
        if self.elapsed <= self.duration {
            FadeStep::Write(self.current_alpha())
        } else {
            self.status = FadeStatus::Completed;
            FadeStep::Finish(self.to)
        }
    }

    pub(crate) fn cancel(&mut self) -> Option<OnFadeComplete> {
        self.status = FadeStatus::Cancelled;
        self.on_complete.take()
    }

    pub(crate) fn take_callback(&mut self) -> Option<OnFadeComplete> {
        self.on_complete.take()
    }
}
