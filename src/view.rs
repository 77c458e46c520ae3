//! Serializable view model. The shell re-reads this after every update and
//! renders it verbatim; no formatting or gating logic lives shell-side.

use serde::{Deserialize, Serialize};

use crate::timer::ClockFace;

pub const APP_TITLE: &str = "GetItDone";
pub const WELCOME_HEADLINE: &str = "Welcome to GetItDone";
pub const WELCOME_TAGLINE: &str = "Focus on what matters most. One task at a time.";
pub const WELCOME_CTA: &str = "Get Started";

pub const GUIDE_HEADER: &str = "How to Use";
pub const GUIDE_ADD_TASK_TITLE: &str = "Add a Task";
pub const GUIDE_ADD_TASK_BODY: &str =
    "Tap the '+' button to add a new task to your list.\nKeep it concise and actionable.";
pub const GUIDE_ADD_TASK_CTA: &str = "Next";
pub const GUIDE_FOCUS_TITLE: &str = "Focus Mode";
pub const GUIDE_FOCUS_BODY: &str = "Concentrate on one task at a time with our Focus Mode. \
     Set a timer and eliminate distractions to maximize your productivity.";
pub const GUIDE_FOCUS_CTA: &str = "Start Getting It Done";

pub const TASK_INPUT_PLACEHOLDER: &str = "What do you need to GetItDone?";
pub const EMPTY_LIST_HINT: &str = "No tasks yet! Long press a task to delete it.";

pub const NO_TASK_LABEL: &str = "Select a Task to Focus";
pub const COMPLETION_TITLE: &str = "Task Completed!";
pub const COMPLETION_MESSAGE: &str = "Great job getting it done!";
pub const COMPLETION_DISMISS: &str = "Awesome!";
pub const DURATION_PRESET_LABEL: &str = "Set 1.5h";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskItem {
    pub id: String,
    pub text: String,
    pub completed: bool,
}

/// The "Are you sure?" dialog raised by a long press on a task.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteConfirm {
    pub task_id: String,
    pub message: String,
}

/// Start / Resume / Pause, whichever applies right now.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryAction {
    pub label: String,
    pub enabled: bool,
}

/// The celebration modal. Present only while an acknowledgment is pending;
/// its dismiss control is the sole path to `CompletionAcknowledged`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionNotice {
    pub title: String,
    pub message: String,
    pub task_text: String,
    pub dismiss_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationPreset {
    pub label: String,
    pub secs: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewState {
    Welcome {
        title: String,
        headline: String,
        tagline: String,
        cta: String,
    },
    Guide {
        header: String,
        title: String,
        body: String,
        cta: String,
        page_index: usize,
        page_count: usize,
    },
    TaskList {
        title: String,
        items: Vec<TaskItem>,
        input_placeholder: String,
        empty_hint: Option<String>,
        confirm_delete: Option<DeleteConfirm>,
    },
    Focus {
        task_label: String,
        clock: ClockFace,
        primary: PrimaryAction,
        can_complete: bool,
        can_reset: bool,
        duration_preset: Option<DurationPreset>,
        completion: Option<CompletionNotice>,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewModel {
    pub screen: ViewState,
    pub last_error: Option<String>,
}
