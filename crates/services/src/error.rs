//! Shared error types for the services crate.

use std::fmt;
use thiserror::Error;

/// Named elements of the question view the engine writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hook {
    ProgressFill,
    ProgressPercent,
    CompletedCount,
    ElapsedTime,
    OptionList,
    SubmitControl,
    PreviousControl,
    AnswerForm,
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Hook::ProgressFill => "progress fill",
            Hook::ProgressPercent => "progress percent",
            Hook::CompletedCount => "completed questions",
            Hook::ElapsedTime => "elapsed time",
            Hook::OptionList => "option list",
            Hook::SubmitControl => "submit control",
            Hook::PreviousControl => "previous question control",
            Hook::AnswerForm => "answer form",
        };
        f.write_str(name)
    }
}

/// A hook element is absent from the page. Callers degrade to a no-op.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("page has no {0} element")]
pub struct MissingHook(pub Hook);

/// Errors emitted while loading a `QuestionSheet`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SheetError {
    #[error("question sheet has no questions")]
    Empty,
    #[error("question {ordinal} has no answer options")]
    NoOptions { ordinal: u32 },
    #[error("question sheet is too large: {len} questions")]
    TooLarge { len: usize },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
