//! Headless core of the GetItDone mobile app.
//!
//! Native shells send an [`Event`] into the app's `update`, re-read the
//! [`ViewModel`] after every update, and service the two capabilities:
//! render and the repeating clock behind the focus countdown.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod capabilities;
pub mod event;
pub mod model;
pub mod tasks;
pub mod timer;
pub mod view;

pub use app::App;
pub use capabilities::{Capabilities, Effect, TickerId};
pub use event::Event;
pub use model::{FocusSession, GuidePage, Model, Screen};
pub use tasks::{Task, TaskBoard, TaskError, TaskId};
pub use timer::{format_elapsed, ClockFace, FocusTimer, Phase, TaskSnapshot, TimerError};
pub use view::{ViewModel, ViewState};

/// The focus screen's one duration preset ("Set 1.5h").
pub const DEFAULT_FOCUS_SECS: u64 = 90 * 60;

/// Nominal cadence of the shell clock. Drift is a product concern, not a
/// correctness requirement; the countdown advances one second per tick.
pub const TICK_PERIOD_MS: u64 = 1000;
