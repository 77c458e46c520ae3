use crux_core::testing::AppTester;
use getitdone_core::{App, Effect, Event, GuidePage, Model, Screen, ViewState};

#[test]
fn onboarding_walks_welcome_guide_pages_then_task_list() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    assert_eq!(model.screen, Screen::Welcome);

    let update = app.update(Event::GetStartedTapped, &mut model);
    assert_eq!(model.screen, Screen::Guide(GuidePage::AddTask));
    assert!(update.effects.iter().any(|e| matches!(e, Effect::Render(_))));

    let update = app.update(Event::GuideAdvanced, &mut model);
    assert_eq!(model.screen, Screen::Guide(GuidePage::FocusMode));
    assert!(update.effects.iter().any(|e| matches!(e, Effect::Render(_))));

    let update = app.update(Event::GuideAdvanced, &mut model);
    assert_eq!(model.screen, Screen::TaskList);
    assert!(update.effects.iter().any(|e| matches!(e, Effect::Render(_))));
}

#[test]
fn guide_pages_carry_copy_and_progress() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    app.update(Event::GetStartedTapped, &mut model);
    let view = app.view(&model);
    match view.screen {
        ViewState::Guide { title, page_index, page_count, .. } => {
            assert_eq!(title, "Add a Task");
            assert_eq!((page_index, page_count), (0, 2));
        }
        other => panic!("expected guide page, got {other:?}"),
    }

    app.update(Event::GuideAdvanced, &mut model);
    let view = app.view(&model);
    match view.screen {
        ViewState::Guide { title, cta, page_index, .. } => {
            assert_eq!(title, "Focus Mode");
            assert_eq!(cta, "Start Getting It Done");
            assert_eq!(page_index, 1);
        }
        other => panic!("expected guide page, got {other:?}"),
    }
}

#[test]
fn get_started_outside_welcome_changes_nothing() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    app.update(Event::GetStartedTapped, &mut model);
    app.update(Event::GuideAdvanced, &mut model);
    app.update(Event::GuideAdvanced, &mut model);
    assert_eq!(model.screen, Screen::TaskList);

    app.update(Event::GetStartedTapped, &mut model);
    assert_eq!(model.screen, Screen::TaskList);
}
