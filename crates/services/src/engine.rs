use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info, trace, warn};

use quiz_core::keyboard::{KeyCommand, KeyPress, resolve_key};
use quiz_core::model::{
    NOTICE_FADE_MS, NOTICE_VISIBLE_MS, Notice, NoticeBoard, NoticeId, NoticeKind,
    PageAttributes, ProgressState, SelectionModel, SessionContext, SubmitAffordance, SubmitGate,
    TimerState, ValidationResult, validate,
};

use crate::Clock;
use crate::error::MissingHook;
use crate::host::HostPage;
use crate::scheduler::{Task, TaskQueue};

/// Period of the elapsed-time tick.
pub const TICK_MS: i64 = 1_000;
/// Period of one progress animation frame.
pub const FRAME_MS: i64 = 16;

pub const PREVIOUS_UNAVAILABLE: &str = "Going back to the previous question is not available yet.";

/// What happened to a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// The answer was handed to the page's submission action.
    Submitted,
    /// The selection failed validation; a notice explains why.
    Blocked(ValidationResult),
    /// Nothing happened (control busy, view torn down, or nothing to submit to).
    Ignored,
}

/// Interaction state of one question view.
///
/// Created when the view is displayed and torn down explicitly when it goes away. All
/// delayed work lives in an internal [`TaskQueue`] that the owner drains with
/// [`InteractionEngine::run_due`].
pub struct InteractionEngine<H: HostPage> {
    clock: Clock,
    context: SessionContext,
    progress: ProgressState,
    timer: TimerState,
    selection: SelectionModel,
    gate: SubmitGate,
    notices: NoticeBoard,
    tasks: TaskQueue,
    host: H,
    torn_down: bool,
}

impl<H: HostPage> InteractionEngine<H> {
    /// Initialize the view: render progress, start the timer, show the idle submit control.
    #[must_use]
    pub fn start(clock: Clock, context: SessionContext, option_count: usize, host: H) -> Self {
        let now = clock.now();
        let mut engine = Self {
            clock,
            context,
            progress: ProgressState::for_context(&context),
            timer: TimerState::start(now),
            selection: SelectionModel::new(option_count, context.answer_mode()),
            gate: SubmitGate::default(),
            notices: NoticeBoard::default(),
            tasks: TaskQueue::new(),
            host,
            torn_down: false,
        };
        info!(
            ordinal = context.question_ordinal(),
            total = context.total_questions(),
            mode = %context.answer_mode(),
            option_count,
            "question view started"
        );

        let completed = context.completed_questions();
        degrade(engine.host.render_completed(completed));
        let submit = engine.gate.state();
        degrade(engine.host.render_submit(submit));
        engine.render_progress(now);
        engine.tick(now);
        engine
            .tasks
            .schedule(now + Duration::milliseconds(TICK_MS), Task::TimerTick);
        engine
    }

    /// Like [`InteractionEngine::start`], reading the context from declared attributes.
    #[must_use]
    pub fn from_attributes(
        clock: Clock,
        attrs: &PageAttributes,
        option_count: usize,
        host: H,
    ) -> Self {
        Self::start(clock, SessionContext::from_attributes(attrs), option_count, host)
    }

    #[must_use]
    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressState {
        &self.progress
    }

    #[must_use]
    pub fn timer(&self) -> &TimerState {
        &self.timer
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionModel {
        &self.selection
    }

    #[must_use]
    pub fn submit_state(&self) -> SubmitAffordance {
        self.gate.state()
    }

    #[must_use]
    pub fn notices(&self) -> &[Notice] {
        self.notices.notices()
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.torn_down
    }

    #[must_use]
    pub fn pending_tasks(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn next_due(&self) -> Option<DateTime<Utc>> {
        self.tasks.next_due()
    }

    /// Current instant on the engine's clock.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Move a fixed clock forward. Has no effect on a real-time clock.
    pub fn advance_clock(&mut self, delta: Duration) {
        self.clock.advance(delta);
    }

    /// Run every task that is due now. Returns when the next one is due.
    pub fn run_due(&mut self) -> Option<DateTime<Utc>> {
        if self.torn_down {
            return None;
        }
        let now = self.clock.now();
        while let Some((due, task)) = self.tasks.pop_due(now) {
            self.run_task(task, due, now);
        }
        self.tasks.next_due()
    }

    /// A direct click on the option at `index`.
    pub fn click_option(&mut self, index: usize) {
        if self.torn_down {
            return;
        }
        match self.selection.click(index) {
            Ok(mirror) if mirror.is_empty() => {}
            Ok(mirror) => degrade(self.host.mirror_options(&mirror)),
            Err(err) => debug!(%err, "ignoring option click"),
        }
    }

    /// A direct click on the submit control.
    pub fn submit_clicked(&mut self) -> SubmitAttempt {
        if self.torn_down {
            return SubmitAttempt::Ignored;
        }
        if self.gate.state().is_busy() {
            debug!("submit control is busy, ignoring click");
            return SubmitAttempt::Ignored;
        }

        let mode = self.context.answer_mode();
        let selected = self.selection.selected_indices();
        let result = validate(&selected, mode);
        if let Some(message) = result.message(mode) {
            debug!(?result, "submission blocked");
            self.notify(message, NoticeKind::Error);
            return SubmitAttempt::Blocked(result);
        }

        let now = self.clock.now();
        let Some(revert_at) = self.gate.begin(now) else {
            return SubmitAttempt::Ignored;
        };
        // A revert that fires while a slow submission is still in flight re-enables the
        // control, so a second click can submit again.
        self.tasks.schedule(revert_at, Task::BusyRevert);
        degrade(self.host.render_submit(self.gate.state()));

        match self.host.submit_answer(&selected) {
            Ok(()) => {
                info!(?selected, "answer submitted");
                SubmitAttempt::Submitted
            }
            Err(missing) => {
                warn!(%missing, "nothing to submit to, releasing submit control");
                self.tasks.cancel(Task::BusyRevert);
                self.gate.revert();
                degrade(self.host.render_submit(self.gate.state()));
                SubmitAttempt::Ignored
            }
        }
    }

    /// A click on the previous-question control.
    pub fn previous_clicked(&mut self) {
        if self.torn_down || self.context.is_first_question() {
            return;
        }
        self.notify(PREVIOUS_UNAVAILABLE, NoticeKind::Info);
    }

    /// Handle a key press. Returns whether the host should suppress its default action.
    pub fn key_down(&mut self, press: KeyPress) -> bool {
        if self.torn_down {
            return false;
        }
        let outcome = resolve_key(
            press,
            self.selection.selected_position(),
            self.selection.len(),
            self.context.answer_mode(),
        );
        match outcome.command {
            Some(KeyCommand::Submit) => {
                if self.host.hooks().submit_control {
                    self.submit_clicked();
                } else {
                    trace!("enter pressed without a submit control");
                }
            }
            Some(KeyCommand::ClickOption(index)) => self.click_option(index),
            None => {}
        }
        outcome.prevent_default
    }

    /// Show a transient notice. Returns `None` once the view is torn down.
    pub fn notify(&mut self, message: &str, kind: NoticeKind) -> Option<NoticeId> {
        if self.torn_down {
            return None;
        }
        let now = self.clock.now();
        let notice = self.notices.push(message, kind);
        let id = notice.id;
        self.host.show_notice(notice);
        self.tasks.schedule(
            now + Duration::milliseconds(NOTICE_VISIBLE_MS),
            Task::NoticeFade(id),
        );
        Some(id)
    }

    /// Animate the progress bar toward a new target. The newest target wins.
    pub fn animate_progress(&mut self, target: u8) {
        if self.torn_down {
            return;
        }
        self.progress.retarget(target);
        let now = self.clock.now();
        self.render_progress(now);
    }

    /// Stop the timer and drop all pending work. Safe to call more than once.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.timer.stop();
        let cancelled = self.tasks.clear();
        info!(cancelled, "question view torn down");
    }

    fn run_task(&mut self, task: Task, due: DateTime<Utc>, now: DateTime<Utc>) {
        trace!(?task, "running task");
        match task {
            Task::TimerTick => {
                self.tick(now);
                let period = Duration::milliseconds(TICK_MS);
                let mut next = due + period;
                // overdue ticks collapse into the one we just rendered
                while next <= now {
                    next += period;
                }
                self.tasks.schedule(next, Task::TimerTick);
            }
            Task::ProgressFrame => self.step_progress(now),
            Task::BusyRevert => {
                if self.gate.revert() {
                    debug!("submit control released after timeout");
                    degrade(self.host.render_submit(self.gate.state()));
                }
            }
            Task::NoticeFade(id) => {
                if self.notices.begin_fade(id) {
                    self.host.fade_notice(id);
                    self.tasks.schedule(
                        due + Duration::milliseconds(NOTICE_FADE_MS),
                        Task::NoticeRemove(id),
                    );
                }
            }
            Task::NoticeRemove(id) => {
                if self.notices.remove(id).is_some() {
                    self.host.remove_notice(id);
                }
            }
        }
    }

    fn tick(&mut self, now: DateTime<Utc>) {
        if let Some(elapsed) = self.timer.tick(now) {
            degrade(self.host.render_elapsed(elapsed));
        }
    }

    fn render_progress(&mut self, now: DateTime<Utc>) {
        degrade(self.host.render_progress_text(self.progress.target()));
        degrade(self.host.render_progress_fill(self.progress.displayed()));
        if !self.tasks.contains(Task::ProgressFrame) {
            self.step_progress(now);
        }
    }

    fn step_progress(&mut self, now: DateTime<Utc>) {
        if let Some(displayed) = self.progress.step() {
            degrade(self.host.render_progress_fill(displayed));
        }
        if !self.progress.is_settled() {
            self.tasks
                .schedule(now + Duration::milliseconds(FRAME_MS), Task::ProgressFrame);
        }
    }
}

fn degrade(result: Result<(), MissingHook>) {
    if let Err(missing) = result {
        trace!(%missing, "skipping render");
    }
}
