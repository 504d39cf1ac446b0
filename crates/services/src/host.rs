use std::collections::BTreeSet;

use quiz_core::model::{ElapsedTime, Mirror, Notice, NoticeId, SubmitAffordance};

use crate::error::MissingHook;

/// Which optional elements the host page rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageHooks {
    pub submit_control: bool,
    pub previous_control: bool,
}

impl Default for PageHooks {
    fn default() -> Self {
        Self {
            submit_control: true,
            previous_control: true,
        }
    }
}

/// The page that hosts one question view.
///
/// Everything the engine shows goes through this trait. Methods touching a named hook
/// report `MissingHook` when the element is absent; the engine treats that as a no-op.
/// Notices never fail: the host draws them on a surface of its own.
pub trait HostPage {
    fn hooks(&self) -> PageHooks {
        PageHooks::default()
    }

    /// # Errors
    ///
    /// `MissingHook` if the page has no progress fill.
    fn render_progress_fill(&mut self, percent: u8) -> Result<(), MissingHook>;

    /// # Errors
    ///
    /// `MissingHook` if the page has no progress percent text.
    fn render_progress_text(&mut self, percent: u8) -> Result<(), MissingHook>;

    /// # Errors
    ///
    /// `MissingHook` if the page has no completed-questions counter.
    fn render_completed(&mut self, completed: u32) -> Result<(), MissingHook>;

    /// # Errors
    ///
    /// `MissingHook` if the page has no elapsed time label.
    fn render_elapsed(&mut self, elapsed: ElapsedTime) -> Result<(), MissingHook>;

    /// Apply a batch of option state changes in one visible update.
    ///
    /// # Errors
    ///
    /// `MissingHook` if the page has no option list.
    fn mirror_options(&mut self, mirror: &Mirror) -> Result<(), MissingHook>;

    /// # Errors
    ///
    /// `MissingHook` if the page has no submit control.
    fn render_submit(&mut self, state: SubmitAffordance) -> Result<(), MissingHook>;

    fn show_notice(&mut self, notice: &Notice);

    fn fade_notice(&mut self, id: NoticeId);

    fn remove_notice(&mut self, id: NoticeId);

    /// Hand a validated answer to the page's submission action.
    ///
    /// # Errors
    ///
    /// `MissingHook` if the page has no answer form to submit.
    fn submit_answer(&mut self, selected: &BTreeSet<usize>) -> Result<(), MissingHook>;
}
