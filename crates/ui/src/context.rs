use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use services::{Clock, QuestionSheet};

/// Where the test goes after an answer was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Next { ordinal: u32 },
    Finished,
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SubmitError {
    #[error("question {ordinal} does not exist")]
    UnknownQuestion { ordinal: u32 },
    #[error("answer was rejected: {0}")]
    Rejected(String),
}

/// What the UI needs from the application hosting it.
#[async_trait]
pub trait UiApp: Send + Sync {
    fn sheet(&self) -> Arc<QuestionSheet>;
    fn clock(&self) -> Clock;
    fn show_timer(&self) -> bool;

    fn start_ordinal(&self) -> u32 {
        1
    }

    /// Send a validated answer for the question at `ordinal`.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError` when the answer could not be delivered.
    async fn submit_answer(
        &self,
        ordinal: u32,
        selected: Vec<usize>,
    ) -> Result<SubmitOutcome, SubmitError>;
}

#[derive(Clone)]
pub struct AppContext {
    app: Arc<dyn UiApp>,
    sheet: Arc<QuestionSheet>,
    clock: Clock,
    show_timer: bool,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            app: Arc::clone(app),
            sheet: app.sheet(),
            clock: app.clock(),
            show_timer: app.show_timer(),
        }
    }

    #[must_use]
    pub fn app(&self) -> Arc<dyn UiApp> {
        Arc::clone(&self.app)
    }

    #[must_use]
    pub fn sheet(&self) -> Arc<QuestionSheet> {
        Arc::clone(&self.sheet)
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn show_timer(&self) -> bool {
        self.show_timer
    }

    /// First question to show, clamped into the sheet.
    #[must_use]
    pub fn start_ordinal(&self) -> u32 {
        self.app.start_ordinal().clamp(1, self.sheet.total())
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
