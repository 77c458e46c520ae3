use serde::{Deserialize, Serialize};

use crate::capabilities::TickerId;
use crate::tasks::{TaskBoard, TaskId};
use crate::timer::FocusTimer;

/// Onboarding guide pages, shown once after the welcome screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuidePage {
    AddTask,
    FocusMode,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    Welcome,
    Guide(GuidePage),
    TaskList,
    Focus,
}

impl Default for Screen {
    fn default() -> Self {
        Self::Welcome
    }
}

/// One focus-screen activation: the countdown plus the live clock
/// subscription, if any. Dropped wholesale on teardown, so no timer state
/// outlives its screen.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusSession {
    pub timer: FocusTimer,
    /// The subscription id the shell is currently ticking against. The
    /// session owns the clock, never the timer itself.
    pub ticker: Option<TickerId>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Model {
    pub screen: Screen,
    pub board: TaskBoard,

    /// Task awaiting delete confirmation via the dialog.
    pub pending_delete: Option<TaskId>,

    pub session: Option<FocusSession>,

    /// Most recent rejected operation, surfaced to the shell.
    pub last_error: Option<String>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }
}
