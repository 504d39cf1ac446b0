use dioxus::prelude::{ReadableExt, WritableExt};
use chrono::Duration;
use quiz_core::keyboard::{KeyPress, NavKey};

use crate::vm::QuestionIntent;

use super::question::SUBMIT_FAILED;
use super::test_harness::{HarnessOptions, ViewKind, setup_view_harness, setup_view_harness_with};

#[tokio::test(flavor = "current_thread")]
async fn question_view_smoke_renders_initial_state() {
    let mut harness = setup_view_harness(ViewKind::Question(1));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("0%"), "missing percent in {html}");
    assert!(html.contains("Completed: 0 of 5"), "missing completed count in {html}");
    assert!(html.contains("00:00"), "missing timer in {html}");
    assert!(html.contains("404"), "missing option in {html}");
    assert!(html.contains("Next question"), "missing submit label in {html}");
    assert!(html.contains("Question 1 of 5"), "missing caption in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn question_view_smoke_renders_progress_for_later_question() {
    let mut harness = setup_view_harness(ViewKind::Question(3));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("40%"), "missing percent in {html}");
    assert!(html.contains("Completed: 2 of 5"), "missing completed count in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn question_view_smoke_last_question_finishes() {
    let mut harness = setup_view_harness(ViewKind::Question(5));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Finish test"), "missing finish label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn question_view_smoke_hides_timer_when_disabled() {
    let mut harness = setup_view_harness_with(
        ViewKind::Question(1),
        HarnessOptions {
            show_timer: false,
            ..HarnessOptions::default()
        },
    );
    harness.rebuild();
    let html = harness.render();
    assert!(!html.contains("timeCounter"), "unexpected timer in {html}");
    assert!(html.contains("0%"), "missing percent in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn question_view_smoke_timer_follows_clock() {
    let mut harness = setup_view_harness(ViewKind::Question(1));
    harness.rebuild();
    let engine = harness.handles().engine();

    harness.dom.in_runtime(|| {
        let mut engine = engine;
        let mut guard = engine.write();
        guard.advance_clock(Duration::seconds(65));
        guard.run_due();
    });
    harness.drive();
    let html = harness.render();
    assert!(html.contains("01:05"), "missing elapsed time in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn question_view_smoke_click_selects_option() {
    let mut harness = setup_view_harness(ViewKind::Question(2));
    harness.rebuild();
    let handles = harness.handles();
    let dispatch = handles.dispatch();

    harness.dom.in_runtime(|| {
        dispatch.call(QuestionIntent::ClickOption(0));
        dispatch.call(QuestionIntent::ClickOption(3));
    });
    harness.drive();

    let selected = harness
        .dom
        .in_runtime(|| handles.engine().peek().selection().selected_indices());
    assert_eq!(selected.into_iter().collect::<Vec<_>>(), vec![0, 3]);
    let html = harness.render();
    assert_eq!(html.matches("option-item selected").count(), 2, "in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn question_view_smoke_keyboard_moves_selection() {
    let mut harness = setup_view_harness(ViewKind::Question(1));
    harness.rebuild();
    let handles = harness.handles();
    let dispatch = handles.dispatch();

    let prevented = harness
        .dom
        .in_runtime(|| dispatch.call(QuestionIntent::Key(KeyPress::plain(NavKey::ArrowUp))));
    assert!(prevented);
    harness.drive();

    let selected = harness
        .dom
        .in_runtime(|| handles.engine().peek().selection().selected_position());
    assert_eq!(selected, Some(3));
    let html = harness.render();
    assert!(html.contains("option-item selected"), "missing selection in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn question_view_smoke_blocks_empty_submit() {
    let mut harness = setup_view_harness(ViewKind::Question(1));
    harness.rebuild();
    let dispatch = harness.handles().dispatch();

    harness
        .dom
        .in_runtime(|| dispatch.call(QuestionIntent::Submit));
    harness.drive();

    let html = harness.render();
    assert!(html.contains("Please choose an answer."), "missing notice in {html}");
    assert!(harness.app.submissions().is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn question_view_smoke_failed_submit_shows_error() {
    let mut harness = setup_view_harness_with(
        ViewKind::Question(1),
        HarnessOptions {
            fail_submit: true,
            ..HarnessOptions::default()
        },
    );
    harness.rebuild();
    let dispatch = harness.handles().dispatch();

    harness.dom.in_runtime(|| {
        dispatch.call(QuestionIntent::ClickOption(2));
        dispatch.call(QuestionIntent::Submit);
    });
    harness.drive();
    let html = harness.render();
    assert!(html.contains("Loading..."), "missing busy label in {html}");

    harness.drive_async().await;
    harness.drive_async().await;

    assert_eq!(harness.app.submissions(), vec![(1, vec![2])]);
    let html = harness.render();
    assert!(html.contains(SUBMIT_FAILED), "missing error notice in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn question_view_smoke_previous_shows_notice_after_first() {
    let mut harness = setup_view_harness(ViewKind::Question(2));
    harness.rebuild();
    let dispatch = harness.handles().dispatch();

    harness
        .dom
        .in_runtime(|| dispatch.call(QuestionIntent::Previous));
    harness.drive();

    let html = harness.render();
    assert!(html.contains("not available yet"), "missing notice in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn question_view_smoke_unknown_question() {
    let mut harness = setup_view_harness(ViewKind::Question(9));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Question not found"), "missing fallback in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn start_view_smoke_renders_total() {
    let mut harness = setup_view_harness(ViewKind::Start);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("This test has 5 questions."), "missing total in {html}");
    assert!(html.contains("Start test"), "missing start button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn finished_view_smoke_renders_completion() {
    let mut harness = setup_view_harness(ViewKind::Finished);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Test complete"), "missing title in {html}");
}
