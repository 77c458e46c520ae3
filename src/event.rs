use serde::{Deserialize, Serialize};

use crate::capabilities::TickerId;
use crate::tasks::TaskId;

/// Everything that can happen to the core: user interactions mapped 1:1 to
/// shell controls, plus pulses from the shell-driven clock.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum Event {
    // Onboarding
    GetStartedTapped,
    GuideAdvanced,

    // Task list
    AddTaskSubmitted { text: String },
    TaskToggled { id: TaskId },
    DeleteTaskRequested { id: TaskId },
    DeleteTaskConfirmed,
    DeleteTaskCancelled,

    // Navigation
    FocusOpened { task: Option<TaskId> },
    ListOpened,

    // Focus session
    DurationSelected { secs: u64 },
    StartTapped,
    PauseTapped,
    CompleteTapped,
    ResetTapped,
    CompletionAcknowledged,

    // Clock
    ClockTicked { ticker: TickerId },
}

impl Event {
    /// Stable name for log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::GetStartedTapped => "get_started_tapped",
            Self::GuideAdvanced => "guide_advanced",
            Self::AddTaskSubmitted { .. } => "add_task_submitted",
            Self::TaskToggled { .. } => "task_toggled",
            Self::DeleteTaskRequested { .. } => "delete_task_requested",
            Self::DeleteTaskConfirmed => "delete_task_confirmed",
            Self::DeleteTaskCancelled => "delete_task_cancelled",
            Self::FocusOpened { .. } => "focus_opened",
            Self::ListOpened => "list_opened",
            Self::DurationSelected { .. } => "duration_selected",
            Self::StartTapped => "start_tapped",
            Self::PauseTapped => "pause_tapped",
            Self::CompleteTapped => "complete_tapped",
            Self::ResetTapped => "reset_tapped",
            Self::CompletionAcknowledged => "completion_acknowledged",
            Self::ClockTicked { .. } => "clock_ticked",
        }
    }
}
