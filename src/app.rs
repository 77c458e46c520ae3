use std::fmt;

use crate::capabilities::{Capabilities, TickerId};
use crate::event::Event;
use crate::model::{FocusSession, GuidePage, Model, Screen};
use crate::tasks::TaskError;
use crate::timer::{format_elapsed, FocusTimer, TaskSnapshot, TickOutcome};
use crate::view::{
    CompletionNotice, DeleteConfirm, DurationPreset, PrimaryAction, TaskItem, ViewModel, ViewState,
    APP_TITLE, COMPLETION_DISMISS, COMPLETION_MESSAGE, COMPLETION_TITLE, DURATION_PRESET_LABEL,
    EMPTY_LIST_HINT, GUIDE_ADD_TASK_BODY, GUIDE_ADD_TASK_CTA, GUIDE_ADD_TASK_TITLE,
    GUIDE_FOCUS_BODY, GUIDE_FOCUS_CTA, GUIDE_FOCUS_TITLE, GUIDE_HEADER, NO_TASK_LABEL,
    TASK_INPUT_PLACEHOLDER, WELCOME_CTA, WELCOME_HEADLINE, WELCOME_TAGLINE,
};
use crate::{DEFAULT_FOCUS_SECS, TICK_PERIOD_MS};

#[derive(Default)]
pub struct App;

impl App {
    /// Record a rejected operation. Contract violations are surfaced, never
    /// swallowed: logged at warn and published in the view model.
    fn reject(slot: &mut Option<String>, err: &dyn fmt::Display) {
        tracing::warn!(error = %err, "operation rejected");
        *slot = Some(err.to_string());
    }

    fn no_session(model: &mut Model) {
        tracing::warn!("focus operation with no active session");
        model.last_error = Some("no active focus session".to_string());
    }

    fn focus_view(model: &Model) -> ViewState {
        // A focus screen without a session only happens if the shell renders
        // ahead of `FocusOpened`; show a blank timer rather than panic.
        let idle = FocusTimer::new(None);
        let timer = model.session.as_ref().map_or(&idle, |s| &s.timer);
        let remaining = timer.remaining_secs();
        let running = timer.is_running();
        let pending = timer.completion_pending();

        let label = if running {
            "Pause"
        } else if remaining > 0 {
            "Resume"
        } else {
            "Start"
        };

        ViewState::Focus {
            task_label: timer
                .focused_task()
                .map_or_else(|| NO_TASK_LABEL.to_string(), |t| t.text.clone()),
            clock: format_elapsed(remaining),
            primary: PrimaryAction {
                label: label.to_string(),
                enabled: !pending && !(remaining == 0 && !running),
            },
            can_complete: running,
            can_reset: !running && remaining > 0 && !pending,
            duration_preset: (!running && remaining == 0 && !pending).then(|| DurationPreset {
                label: DURATION_PRESET_LABEL.to_string(),
                secs: DEFAULT_FOCUS_SECS,
            }),
            completion: pending.then(|| CompletionNotice {
                title: COMPLETION_TITLE.to_string(),
                message: COMPLETION_MESSAGE.to_string(),
                task_text: timer
                    .focused_task()
                    .map(|t| t.text.clone())
                    .unwrap_or_default(),
                dismiss_label: COMPLETION_DISMISS.to_string(),
            }),
        }
    }
}

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = ViewModel;
    type Capabilities = Capabilities;

    fn update(&self, event: Event, model: &mut Model, caps: &Capabilities) {
        tracing::debug!(event = event.name(), "update");

        match event {
            Event::GetStartedTapped => {
                if model.screen == Screen::Welcome {
                    model.screen = Screen::Guide(GuidePage::AddTask);
                } else {
                    tracing::warn!(screen = ?model.screen, "get-started outside welcome ignored");
                }
                caps.render.render();
            }

            Event::GuideAdvanced => {
                match model.screen {
                    Screen::Guide(GuidePage::AddTask) => {
                        model.screen = Screen::Guide(GuidePage::FocusMode);
                    }
                    Screen::Guide(GuidePage::FocusMode) => {
                        model.screen = Screen::TaskList;
                    }
                    _ => {
                        tracing::warn!(screen = ?model.screen, "guide-advance outside guide ignored");
                    }
                }
                caps.render.render();
            }

            Event::AddTaskSubmitted { text } => {
                match model.board.add(&text) {
                    Ok(task) => {
                        tracing::debug!(id = %task.id, "task added");
                        model.last_error = None;
                    }
                    Err(e) => Self::reject(&mut model.last_error, &e),
                }
                caps.render.render();
            }

            Event::TaskToggled { id } => {
                match model.board.toggle(&id) {
                    Ok(task) => {
                        tracing::debug!(id = %task.id, completed = task.completed, "task toggled");
                        model.last_error = None;
                    }
                    Err(e) => Self::reject(&mut model.last_error, &e),
                }
                caps.render.render();
            }

            Event::DeleteTaskRequested { id } => {
                if model.board.get(&id).is_some() {
                    model.pending_delete = Some(id);
                    model.last_error = None;
                } else {
                    Self::reject(&mut model.last_error, &TaskError::UnknownTask(id));
                }
                caps.render.render();
            }

            Event::DeleteTaskConfirmed => {
                match model.pending_delete.take() {
                    Some(id) => match model.board.remove(&id) {
                        Ok(task) => {
                            tracing::debug!(id = %task.id, "task deleted");
                            model.last_error = None;
                        }
                        Err(e) => Self::reject(&mut model.last_error, &e),
                    },
                    None => {
                        tracing::warn!("delete confirmed with no delete pending");
                    }
                }
                caps.render.render();
            }

            Event::DeleteTaskCancelled => {
                model.pending_delete = None;
                caps.render.render();
            }

            Event::FocusOpened { task } => {
                match model.screen {
                    Screen::Focus => {
                        // Nav button for the screen we are already on.
                    }
                    Screen::TaskList => {
                        // Snapshot by value at session start; later board
                        // mutations are invisible to the session.
                        let snapshot = task.and_then(|id| match model.board.get(&id) {
                            Some(t) => Some(TaskSnapshot::from(t)),
                            None => {
                                tracing::warn!(%id, "unknown task at focus open; starting without one");
                                None
                            }
                        });
                        model.session = Some(FocusSession {
                            timer: FocusTimer::new(snapshot),
                            ticker: None,
                        });
                        model.screen = Screen::Focus;
                    }
                    _ => {
                        tracing::warn!(screen = ?model.screen, "focus-open outside tabs ignored");
                    }
                }
                caps.render.render();
            }

            Event::ListOpened => {
                match model.screen {
                    Screen::Focus => {
                        // Screen teardown discards the session; the clock
                        // must die with it.
                        if let Some(mut session) = model.session.take() {
                            if let Some(id) = session.ticker.take() {
                                caps.ticker.cancel(id);
                            }
                        }
                        model.screen = Screen::TaskList;
                    }
                    Screen::TaskList => {}
                    _ => {
                        tracing::warn!(screen = ?model.screen, "list-open outside tabs ignored");
                    }
                }
                caps.render.render();
            }

            Event::DurationSelected { secs } => {
                match model.session.as_mut() {
                    Some(session) => match session.timer.configure(secs) {
                        Ok(()) => model.last_error = None,
                        Err(e) => Self::reject(&mut model.last_error, &e),
                    },
                    None => Self::no_session(model),
                }
                caps.render.render();
            }

            Event::StartTapped => {
                match model.session.as_mut() {
                    Some(session) => {
                        let was_running = session.timer.is_running();
                        match session.timer.start() {
                            Ok(()) => {
                                model.last_error = None;
                                if !was_running {
                                    let id = TickerId::generate();
                                    session.ticker = Some(id.clone());
                                    caps.ticker.start(id, TICK_PERIOD_MS, |ticker| {
                                        Event::ClockTicked { ticker }
                                    });
                                }
                            }
                            Err(e) => Self::reject(&mut model.last_error, &e),
                        }
                    }
                    None => Self::no_session(model),
                }
                caps.render.render();
            }

            Event::PauseTapped => {
                match model.session.as_mut() {
                    Some(session) => {
                        let was_running = session.timer.is_running();
                        session.timer.pause();
                        if was_running {
                            if let Some(id) = session.ticker.take() {
                                caps.ticker.cancel(id);
                            }
                        }
                        model.last_error = None;
                    }
                    None => Self::no_session(model),
                }
                caps.render.render();
            }

            Event::CompleteTapped => {
                match model.session.as_mut() {
                    Some(session) => match session.timer.stop() {
                        Ok(()) => {
                            model.last_error = None;
                            if let Some(id) = session.ticker.take() {
                                caps.ticker.cancel(id);
                            }
                        }
                        Err(e) => Self::reject(&mut model.last_error, &e),
                    },
                    None => Self::no_session(model),
                }
                caps.render.render();
            }

            Event::ResetTapped => {
                match model.session.as_mut() {
                    Some(session) => match session.timer.reset() {
                        Ok(()) => {
                            model.last_error = None;
                            if let Some(id) = session.ticker.take() {
                                caps.ticker.cancel(id);
                            }
                        }
                        Err(e) => Self::reject(&mut model.last_error, &e),
                    },
                    None => Self::no_session(model),
                }
                caps.render.render();
            }

            Event::CompletionAcknowledged => {
                match model.session.as_mut() {
                    Some(session) => match session.timer.acknowledge_completion() {
                        Ok(()) => model.last_error = None,
                        Err(e) => Self::reject(&mut model.last_error, &e),
                    },
                    None => Self::no_session(model),
                }
                caps.render.render();
            }

            Event::ClockTicked { ticker } => {
                let Some(session) = model.session.as_mut() else {
                    tracing::debug!(%ticker, "tick after session teardown ignored");
                    return;
                };
                if session.ticker.as_ref() != Some(&ticker) {
                    tracing::debug!(%ticker, "stale tick ignored");
                    return;
                }
                match session.timer.tick() {
                    TickOutcome::Advanced => caps.render.render(),
                    TickOutcome::Finished => {
                        // Countdown stop and clock release happen inside
                        // this one update, so the shell never sees a
                        // finished timer with a live subscription.
                        if let Some(id) = session.ticker.take() {
                            caps.ticker.cancel(id);
                        }
                        caps.render.render();
                    }
                    TickOutcome::Ignored => {
                        if let Some(id) = session.ticker.take() {
                            caps.ticker.cancel(id);
                        }
                    }
                }
            }
        }
    }

    fn view(&self, model: &Model) -> ViewModel {
        let screen = match model.screen {
            Screen::Welcome => ViewState::Welcome {
                title: APP_TITLE.to_string(),
                headline: WELCOME_HEADLINE.to_string(),
                tagline: WELCOME_TAGLINE.to_string(),
                cta: WELCOME_CTA.to_string(),
            },

            Screen::Guide(page) => {
                let (title, body, cta, page_index) = match page {
                    GuidePage::AddTask => {
                        (GUIDE_ADD_TASK_TITLE, GUIDE_ADD_TASK_BODY, GUIDE_ADD_TASK_CTA, 0)
                    }
                    GuidePage::FocusMode => {
                        (GUIDE_FOCUS_TITLE, GUIDE_FOCUS_BODY, GUIDE_FOCUS_CTA, 1)
                    }
                };
                ViewState::Guide {
                    header: GUIDE_HEADER.to_string(),
                    title: title.to_string(),
                    body: body.to_string(),
                    cta: cta.to_string(),
                    page_index,
                    page_count: 2,
                }
            }

            Screen::TaskList => ViewState::TaskList {
                title: APP_TITLE.to_string(),
                items: model
                    .board
                    .tasks()
                    .iter()
                    .map(|t| TaskItem {
                        id: t.id.as_str().to_string(),
                        text: t.text.clone(),
                        completed: t.completed,
                    })
                    .collect(),
                input_placeholder: TASK_INPUT_PLACEHOLDER.to_string(),
                empty_hint: model
                    .board
                    .is_empty()
                    .then(|| EMPTY_LIST_HINT.to_string()),
                confirm_delete: model
                    .pending_delete
                    .as_ref()
                    .and_then(|id| model.board.get(id))
                    .map(|t| DeleteConfirm {
                        task_id: t.id.as_str().to_string(),
                        message: format!("Are you sure you want to delete \"{}\"?", t.text),
                    }),
            },

            Screen::Focus => Self::focus_view(model),
        };

        ViewModel {
            screen,
            last_error: model.last_error.clone(),
        }
    }
}
