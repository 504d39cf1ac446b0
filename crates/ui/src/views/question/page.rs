use std::collections::BTreeSet;

use quiz_core::model::{
    ElapsedTime, Mirror, Notice, NoticeId, NoticeKind, NoticePhase, SubmitAffordance,
};
use services::{Hook, HostPage, MissingHook, PageHooks};

/// Optional parts of the question view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageLayout {
    pub show_timer: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoticeView {
    pub id: NoticeId,
    pub message: String,
    pub kind: NoticeKind,
    pub fading: bool,
}

/// Snapshot the question view renders from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageState {
    pub progress_fill: u8,
    pub progress_percent: u8,
    pub completed: u32,
    pub elapsed: Option<String>,
    pub options: Vec<bool>,
    pub submit: SubmitAffordance,
    pub notices: Vec<NoticeView>,
}

/// Host page backed by the Dioxus question view.
///
/// The engine writes here; the view re-renders from [`DomPage::state`] whenever the
/// engine signal changes.
pub struct DomPage {
    layout: PageLayout,
    state: PageState,
    submission: Option<Vec<usize>>,
}

impl DomPage {
    #[must_use]
    pub fn new(layout: PageLayout, option_count: usize) -> Self {
        Self {
            layout,
            state: PageState {
                options: vec![false; option_count],
                ..PageState::default()
            },
            submission: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> &PageState {
        &self.state
    }

    /// Answer handed over by the engine, waiting to be sent.
    pub fn take_submission(&mut self) -> Option<Vec<usize>> {
        self.submission.take()
    }
}

impl HostPage for DomPage {
    fn hooks(&self) -> PageHooks {
        PageHooks {
            submit_control: true,
            previous_control: true,
        }
    }

    fn render_progress_fill(&mut self, percent: u8) -> Result<(), MissingHook> {
        self.state.progress_fill = percent;
        Ok(())
    }

    fn render_progress_text(&mut self, percent: u8) -> Result<(), MissingHook> {
        self.state.progress_percent = percent;
        Ok(())
    }

    fn render_completed(&mut self, completed: u32) -> Result<(), MissingHook> {
        self.state.completed = completed;
        Ok(())
    }

    fn render_elapsed(&mut self, elapsed: ElapsedTime) -> Result<(), MissingHook> {
        if !self.layout.show_timer {
            return Err(MissingHook(Hook::ElapsedTime));
        }
        self.state.elapsed = Some(elapsed.to_string());
        Ok(())
    }

    fn mirror_options(&mut self, mirror: &Mirror) -> Result<(), MissingHook> {
        for entry in &mirror.entries {
            if let Some(slot) = self.state.options.get_mut(entry.index) {
                *slot = entry.selected;
            }
        }
        Ok(())
    }

    fn render_submit(&mut self, state: SubmitAffordance) -> Result<(), MissingHook> {
        self.state.submit = state;
        Ok(())
    }

    fn show_notice(&mut self, notice: &Notice) {
        self.state.notices.push(NoticeView {
            id: notice.id,
            message: notice.message.clone(),
            kind: notice.kind,
            fading: notice.phase == NoticePhase::Fading,
        });
    }

    fn fade_notice(&mut self, id: NoticeId) {
        if let Some(notice) = self.state.notices.iter_mut().find(|n| n.id == id) {
            notice.fading = true;
        }
    }

    fn remove_notice(&mut self, id: NoticeId) {
        self.state.notices.retain(|n| n.id != id);
    }

    fn submit_answer(&mut self, selected: &BTreeSet<usize>) -> Result<(), MissingHook> {
        self.submission = Some(selected.iter().copied().collect());
        Ok(())
    }
}
