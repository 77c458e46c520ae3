//! Focus countdown state machine.
//!
//! One `FocusTimer` exists per focus-screen session. It is driven by a
//! shell-owned 1 Hz clock (`tick`) plus user-initiated transitions, all
//! serialized through `App::update`. The timer never owns the clock
//! subscription; the session layer does.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tasks::{Task, TaskId};

/// By-value copy of the task selected for a focus session. Later mutations
/// to the task board are invisible to it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSnapshot {
    pub id: TaskId,
    pub text: String,
}

impl From<&Task> for TaskSnapshot {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            text: task.text.clone(),
        }
    }
}

/// Invalid-transition errors. These are contract violations by the caller,
/// not runtime faults; the app layer surfaces them instead of panicking.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerError {
    #[error("cannot configure a duration while the timer is running")]
    ConfigureWhileRunning,

    #[error("focus duration must be at least one second")]
    ZeroDuration,

    #[error("no duration configured; nothing to start")]
    NothingConfigured,

    #[error("a completion notice is pending acknowledgment")]
    CompletionPending,

    #[error("timer is neither running nor configured; nothing to stop")]
    NothingToStop,

    #[error("no completion notice is pending")]
    NoCompletionPending,
}

/// Derived view of the timer's state, for display gating and tests.
/// The field tuple on `FocusTimer` is the source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Idle,
    Configured,
    Running,
    Expired,
}

/// What a single `tick` did, so the caller can release the clock
/// subscription in the same update when the countdown finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Tick arrived while not running; nothing changed.
    Ignored,
    /// One second elapsed, countdown still running.
    Advanced,
    /// Countdown reached zero; the timer stopped itself.
    Finished,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusTimer {
    remaining_secs: u64,
    running: bool,
    focused_task: Option<TaskSnapshot>,
    completion_pending: bool,
}

impl FocusTimer {
    pub fn new(focused_task: Option<TaskSnapshot>) -> Self {
        Self {
            remaining_secs: 0,
            running: false,
            focused_task,
            completion_pending: false,
        }
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn focused_task(&self) -> Option<&TaskSnapshot> {
        self.focused_task.as_ref()
    }

    pub fn completion_pending(&self) -> bool {
        self.completion_pending
    }

    pub fn phase(&self) -> Phase {
        match (self.remaining_secs, self.running, self.completion_pending) {
            (_, _, true) => Phase::Expired,
            (0, _, false) => Phase::Idle,
            (_, true, false) => Phase::Running,
            (_, false, false) => Phase::Configured,
        }
    }

    /// Load a countdown duration. Only valid while stopped; the caller must
    /// stop or reset first if a countdown is in flight.
    pub fn configure(&mut self, duration_secs: u64) -> Result<(), TimerError> {
        if self.running {
            return Err(TimerError::ConfigureWhileRunning);
        }
        if duration_secs == 0 {
            return Err(TimerError::ZeroDuration);
        }
        self.remaining_secs = duration_secs;
        Ok(())
    }

    /// Begin (or resume) the countdown. Idempotent while already running.
    pub fn start(&mut self) -> Result<(), TimerError> {
        if self.completion_pending {
            return Err(TimerError::CompletionPending);
        }
        if self.running {
            return Ok(());
        }
        if self.remaining_secs == 0 {
            return Err(TimerError::NothingConfigured);
        }
        self.running = true;
        Ok(())
    }

    /// Halt the countdown, preserving the remaining time. No-op while not
    /// running, so a pause racing a natural expiry is harmless.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Advance the countdown by one second. The clock must stop issuing
    /// ticks once this returns `Finished`; a stale tick is ignored here.
    ///
    /// Reaching zero clears `running` and raises the completion notice (iff
    /// a task is focused) within this single call, so no caller can observe
    /// `remaining == 0 && running`.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Ignored;
        }
        self.remaining_secs -= 1;
        if self.remaining_secs > 0 {
            return TickOutcome::Advanced;
        }
        self.running = false;
        if self.focused_task.is_some() {
            self.completion_pending = true;
        }
        TickOutcome::Finished
    }

    /// The manual-complete path. Halts immediately (mid-second, without
    /// zeroing the clock) and raises the completion notice iff a task is
    /// focused. Distinct from natural expiry only in that time remains.
    pub fn stop(&mut self) -> Result<(), TimerError> {
        if self.completion_pending {
            return Err(TimerError::CompletionPending);
        }
        if !self.running && self.remaining_secs == 0 {
            return Err(TimerError::NothingToStop);
        }
        self.running = false;
        if self.focused_task.is_some() {
            self.completion_pending = true;
        }
        Ok(())
    }

    /// Zero the countdown so a new duration can be picked. The focused
    /// snapshot survives; a pending notice must be acknowledged first.
    pub fn reset(&mut self) -> Result<(), TimerError> {
        if self.completion_pending {
            return Err(TimerError::CompletionPending);
        }
        self.remaining_secs = 0;
        self.running = false;
        Ok(())
    }

    /// Dismiss the completion notice, returning the timer to its seeded
    /// state: zero remaining, stopped, no focused task, no notice.
    pub fn acknowledge_completion(&mut self) -> Result<(), TimerError> {
        if !self.completion_pending {
            return Err(TimerError::NoCompletionPending);
        }
        self.remaining_secs = 0;
        self.focused_task = None;
        self.running = false;
        self.completion_pending = false;
        Ok(())
    }
}

/// Display triple for the three timer boxes on the focus screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockFace {
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
}

/// Split a second count into zero-padded hours/minutes/seconds. Components
/// below 10 are padded to width 2; 100+ hours render at natural width.
/// Negative input is unrepresentable by type.
pub fn format_elapsed(total_secs: u64) -> ClockFace {
    ClockFace {
        hours: format!("{:02}", total_secs / 3600),
        minutes: format!("{:02}", (total_secs % 3600) / 60),
        seconds: format!("{:02}", total_secs % 60),
    }
}
