use std::time::Duration;

use dioxus::document::eval;
use dioxus::prelude::*;
use dioxus_router::use_navigator;
use tracing::{debug, warn};

use quiz_core::model::{NoticeKind, SessionContext};
use services::{InteractionEngine, QuestionPage};

use crate::context::{AppContext, SubmitOutcome};
use crate::routes::Route;
use crate::vm::{
    QuestionIntent, build_option_rows, progress_caption, submit_idle_label,
};

use super::components::{ElapsedLabel, NoticeStack, OptionList, ProgressBar};
use super::keys::key_press;
use super::page::{DomPage, PageLayout};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

pub(crate) const SUBMIT_FAILED: &str = "Your answer could not be sent. Please try again.";

/// Longest the driver sleeps between checks of the task queue.
const MAX_IDLE: Duration = Duration::from_millis(250);

type Engine = InteractionEngine<DomPage>;

#[component]
pub fn QuestionView(ordinal: u32) -> Element {
    let ctx = use_context::<AppContext>();
    let sheet = ctx.sheet();
    let Some(question) = sheet.question(ordinal).cloned() else {
        let total = sheet.total();
        return rsx! {
            div { class: "page",
                h2 { "Question not found" }
                p { class: "hint", "This test has {total} questions." }
            }
        };
    };
    rsx! {
        QuestionPanel { key: "{ordinal}", ordinal, question }
    }
}

#[component]
fn QuestionPanel(ordinal: u32, question: QuestionPage) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let app = ctx.app();

    let engine = {
        let ctx = ctx.clone();
        let question = question.clone();
        use_signal(move || {
            let sheet = ctx.sheet();
            let attrs = sheet.attributes(ordinal).unwrap_or_default();
            let layout = PageLayout {
                show_timer: ctx.show_timer(),
            };
            let count = question.options.len();
            Engine::from_attributes(ctx.clock(), &attrs, count, DomPage::new(layout, count))
        })
    };

    use_future(move || async move {
        loop {
            let due = {
                let guard = engine.peek();
                guard.next_due().map(|next| (next, guard.now()))
            };
            let Some((next, now)) = due else {
                break;
            };
            if next <= now {
                let mut engine = engine;
                engine.write().run_due();
                continue;
            }
            let wait = (next - now).to_std().unwrap_or_default().min(MAX_IDLE);
            tokio::time::sleep(wait).await;
        }
        debug!(ordinal, "question driver stopped");
    });

    use_drop(move || {
        let mut engine = engine;
        if let Ok(mut guard) = engine.try_write() {
            guard.teardown();
        }
    });

    use_effect(move || {
        let _ = eval(r#"document.getElementById("question-root")?.focus();"#);
    });

    let dispatch_intent = use_callback(move |intent: QuestionIntent| -> bool {
        let mut engine = engine;
        let (prevent_default, submission) = {
            let mut guard = engine.write();
            let prevent_default = match intent {
                QuestionIntent::ClickOption(index) => {
                    guard.click_option(index);
                    false
                }
                QuestionIntent::Submit => {
                    guard.submit_clicked();
                    false
                }
                QuestionIntent::Previous => {
                    guard.previous_clicked();
                    false
                }
                QuestionIntent::Key(press) => guard.key_down(press),
            };
            (prevent_default, guard.host_mut().take_submission())
        };

        if let Some(selected) = submission {
            let app = app.clone();
            spawn(async move {
                match app.submit_answer(ordinal, selected).await {
                    Ok(SubmitOutcome::Next { ordinal }) => {
                        let _ = navigator.push(Route::Question { ordinal });
                    }
                    Ok(SubmitOutcome::Finished) => {
                        let _ = navigator.push(Route::Finished {});
                    }
                    Err(err) => {
                        warn!(%err, ordinal, "answer was not delivered");
                        engine.write().notify(SUBMIT_FAILED, NoticeKind::Error);
                    }
                }
            });
        }
        prevent_default
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuestionTestHandles>() {
                handles.register(dispatch_intent, engine);
            }
        }
    }

    let guard = engine.read();
    let context: SessionContext = *guard.context();
    let state = guard.host().state().clone();
    drop(guard);

    let rows = build_option_rows(&question, &state.options);
    let caption = progress_caption(&context);
    let submit_label = state.submit.label(submit_idle_label(&context)).to_string();
    let submit_busy = state.submit.is_busy();
    let first = context.is_first_question();
    let question_num = context.question_ordinal();
    let total = context.total_questions();
    let question_type = context.answer_mode().to_string();
    let prompt = question.prompt.clone();

    rsx! {
        div {
            class: "page question-page",
            id: "question-root",
            tabindex: "0",
            "data-question-num": "{question_num}",
            "data-total-questions": "{total}",
            "data-question-type": "{question_type}",
            onkeydown: move |evt: KeyboardEvent| {
                if dispatch_intent.call(QuestionIntent::Key(key_press(&evt))) {
                    evt.prevent_default();
                }
            },
            ProgressBar {
                fill: state.progress_fill,
                percent: state.progress_percent,
                completed: state.completed,
                total,
                caption,
            }
            if let Some(text) = state.elapsed.clone() {
                ElapsedLabel { text }
            }
            h2 { class: "question-prompt", "{prompt}" }
            form {
                id: "answerForm",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                },
                OptionList { rows, on_intent: dispatch_intent }
                div { class: "question-actions",
                    button {
                        class: "btn btn-secondary",
                        id: "prevBtn",
                        r#type: "button",
                        disabled: first,
                        onclick: move |_| {
                            dispatch_intent.call(QuestionIntent::Previous);
                        },
                        "Previous"
                    }
                    button {
                        class: "btn btn-primary",
                        id: "submitBtn",
                        r#type: "button",
                        disabled: submit_busy,
                        onclick: move |_| {
                            dispatch_intent.call(QuestionIntent::Submit);
                        },
                        "{submit_label}"
                    }
                }
            }
            p { class: "hint", "Use the arrow keys or digits to choose, Enter to continue." }
            NoticeStack { notices: state.notices.clone() }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuestionTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuestionIntent, bool>>>>,
    engine: Rc<RefCell<Option<Signal<Engine>>>>,
}

#[cfg(test)]
impl QuestionTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuestionIntent, bool>, engine: Signal<Engine>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.engine.borrow_mut() = Some(engine);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuestionIntent, bool> {
        (*self.dispatch.borrow()).expect("question dispatch registered")
    }

    pub(crate) fn engine(&self) -> Signal<Engine> {
        (*self.engine.borrow()).expect("question engine registered")
    }
}
