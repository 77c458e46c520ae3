use crux_core::testing::AppTester;
use getitdone_core::{App, Effect, Event, Model, TaskId, ViewState};

fn onboarded() -> (AppTester<App, Effect>, Model) {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();
    app.update(Event::GetStartedTapped, &mut model);
    app.update(Event::GuideAdvanced, &mut model);
    app.update(Event::GuideAdvanced, &mut model);
    (app, model)
}

#[test]
fn added_tasks_appear_in_order_and_clear_the_empty_hint() {
    let (app, mut model) = onboarded();

    let view = app.view(&model);
    match &view.screen {
        ViewState::TaskList { items, empty_hint, .. } => {
            assert!(items.is_empty());
            assert_eq!(
                empty_hint.as_deref(),
                Some("No tasks yet! Long press a task to delete it.")
            );
        }
        other => panic!("expected task list, got {other:?}"),
    }

    app.update(Event::AddTaskSubmitted { text: "  buy milk ".into() }, &mut model);
    app.update(Event::AddTaskSubmitted { text: "write report".into() }, &mut model);

    let view = app.view(&model);
    match &view.screen {
        ViewState::TaskList { items, empty_hint, .. } => {
            let texts: Vec<_> = items.iter().map(|i| i.text.as_str()).collect();
            assert_eq!(texts, ["buy milk", "write report"]);
            assert!(empty_hint.is_none());
        }
        other => panic!("expected task list, got {other:?}"),
    }
}

#[test]
fn whitespace_only_input_is_rejected_and_surfaced() {
    let (app, mut model) = onboarded();

    app.update(Event::AddTaskSubmitted { text: "   ".into() }, &mut model);

    assert!(model.board.is_empty());
    let view = app.view(&model);
    assert_eq!(view.last_error.as_deref(), Some("task text is empty after trimming"));

    // The next valid operation clears the surfaced rejection.
    app.update(Event::AddTaskSubmitted { text: "ok".into() }, &mut model);
    assert!(app.view(&model).last_error.is_none());
}

#[test]
fn toggle_flips_completion_in_the_view() {
    let (app, mut model) = onboarded();
    app.update(Event::AddTaskSubmitted { text: "a".into() }, &mut model);
    let id = model.board.tasks()[0].id.clone();

    app.update(Event::TaskToggled { id: id.clone() }, &mut model);
    match &app.view(&model).screen {
        ViewState::TaskList { items, .. } => assert!(items[0].completed),
        other => panic!("expected task list, got {other:?}"),
    }

    app.update(Event::TaskToggled { id }, &mut model);
    match &app.view(&model).screen {
        ViewState::TaskList { items, .. } => assert!(!items[0].completed),
        other => panic!("expected task list, got {other:?}"),
    }
}

#[test]
fn long_press_delete_goes_through_the_confirm_dialog() {
    let (app, mut model) = onboarded();
    app.update(Event::AddTaskSubmitted { text: "doomed".into() }, &mut model);
    let id = model.board.tasks()[0].id.clone();

    app.update(Event::DeleteTaskRequested { id: id.clone() }, &mut model);
    match &app.view(&model).screen {
        ViewState::TaskList { confirm_delete, .. } => {
            let confirm = confirm_delete.as_ref().expect("dialog raised");
            assert_eq!(confirm.message, "Are you sure you want to delete \"doomed\"?");
            assert_eq!(confirm.task_id, id.as_str());
        }
        other => panic!("expected task list, got {other:?}"),
    }

    app.update(Event::DeleteTaskConfirmed, &mut model);
    assert!(model.board.is_empty());
    assert!(model.pending_delete.is_none());
}

#[test]
fn cancelling_the_dialog_keeps_the_task() {
    let (app, mut model) = onboarded();
    app.update(Event::AddTaskSubmitted { text: "kept".into() }, &mut model);
    let id = model.board.tasks()[0].id.clone();

    app.update(Event::DeleteTaskRequested { id }, &mut model);
    app.update(Event::DeleteTaskCancelled, &mut model);

    assert_eq!(model.board.tasks().len(), 1);
    assert!(model.pending_delete.is_none());
    match &app.view(&model).screen {
        ViewState::TaskList { confirm_delete, .. } => assert!(confirm_delete.is_none()),
        other => panic!("expected task list, got {other:?}"),
    }
}

#[test]
fn deleting_an_unknown_id_is_surfaced() {
    let (app, mut model) = onboarded();

    app.update(
        Event::DeleteTaskRequested { id: TaskId::new("ghost") },
        &mut model,
    );

    assert!(model.pending_delete.is_none());
    assert_eq!(app.view(&model).last_error.as_deref(), Some("no task with id ghost"));
}
