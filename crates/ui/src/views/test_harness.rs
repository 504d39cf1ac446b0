use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::time::fixed_now;
use services::{Clock, QuestionSheet};

use crate::context::{SubmitError, SubmitOutcome, UiApp, build_app_context};
use crate::views::question::QuestionTestHandles;
use crate::views::{FinishedView, QuestionView, StartView};

pub struct TestApp {
    sheet: Arc<QuestionSheet>,
    show_timer: bool,
    fail_submit: bool,
    submissions: Mutex<Vec<(u32, Vec<usize>)>>,
}

impl TestApp {
    pub fn submissions(&self) -> Vec<(u32, Vec<usize>)> {
        self.submissions.lock().expect("submissions lock").clone()
    }
}

#[async_trait]
impl UiApp for TestApp {
    fn sheet(&self) -> Arc<QuestionSheet> {
        Arc::clone(&self.sheet)
    }

    fn clock(&self) -> Clock {
        Clock::fixed(fixed_now())
    }

    fn show_timer(&self) -> bool {
        self.show_timer
    }

    async fn submit_answer(
        &self,
        ordinal: u32,
        selected: Vec<usize>,
    ) -> Result<SubmitOutcome, SubmitError> {
        self.submissions
            .lock()
            .expect("submissions lock")
            .push((ordinal, selected));
        if self.fail_submit {
            return Err(SubmitError::Rejected("offline".to_string()));
        }
        if ordinal >= self.sheet.total() {
            Ok(SubmitOutcome::Finished)
        } else {
            Ok(SubmitOutcome::Next {
                ordinal: ordinal + 1,
            })
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Start,
    Question(u32),
    Finished,
}

#[derive(Clone, Copy, Debug)]
pub struct HarnessOptions {
    pub show_timer: bool,
    pub fail_submit: bool,
}

impl Default for HarnessOptions {
    fn default() -> Self {
        Self {
            show_timer: true,
            fail_submit: false,
        }
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    question_handles: Option<QuestionTestHandles>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    if let Some(handles) = props.question_handles.clone() {
        use_context_provider(|| handles);
    }
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Start => rsx! { StartView {} },
        ViewKind::Question(ordinal) => rsx! { QuestionView { ordinal } },
        ViewKind::Finished => rsx! { FinishedView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub app: Arc<TestApp>,
    pub question_handles: Option<QuestionTestHandles>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn drive(&mut self) {
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn handles(&self) -> QuestionTestHandles {
        self.question_handles
            .clone()
            .expect("question view has handles")
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with(view, HarnessOptions::default())
}

pub fn setup_view_harness_with(view: ViewKind, options: HarnessOptions) -> ViewHarness {
    let app = Arc::new(TestApp {
        sheet: Arc::new(QuestionSheet::sample()),
        show_timer: options.show_timer,
        fail_submit: options.fail_submit,
        submissions: Mutex::new(Vec::new()),
    });
    let question_handles = match view {
        ViewKind::Question(_) => Some(QuestionTestHandles::default()),
        _ => None,
    };

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app: Arc::clone(&app),
            view,
            question_handles: question_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        app,
        question_handles,
    }
}
