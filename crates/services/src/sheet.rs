use serde::{Deserialize, Serialize};

use quiz_core::model::{AnswerMode, PageAttributes};

use crate::error::SheetError;

/// One question as the host page presents it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionPage {
    pub prompt: String,
    #[serde(default)]
    pub mode: AnswerMode,
    pub options: Vec<String>,
}

/// The ordered questions of one test.
///
/// The sheet only feeds the host page; the interaction engine sees a single question's
/// declared attributes and its option count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSheet {
    questions: Vec<QuestionPage>,
}

impl QuestionSheet {
    /// # Errors
    ///
    /// Returns `SheetError::Empty` for an empty sheet, `SheetError::NoOptions` when a
    /// question has nothing to choose from and `SheetError::TooLarge` past `u32::MAX`.
    pub fn new(questions: Vec<QuestionPage>) -> Result<Self, SheetError> {
        if questions.is_empty() {
            return Err(SheetError::Empty);
        }
        if u32::try_from(questions.len()).is_err() {
            return Err(SheetError::TooLarge {
                len: questions.len(),
            });
        }
        if let Some(position) = questions.iter().position(|q| q.options.is_empty()) {
            return Err(SheetError::NoOptions {
                ordinal: ordinal_of(position),
            });
        }
        Ok(Self { questions })
    }

    /// Parse a JSON sheet: `{"questions": [{"prompt": .., "mode": .., "options": [..]}]}`.
    ///
    /// # Errors
    ///
    /// Returns `SheetError::Json` for malformed input, otherwise as [`QuestionSheet::new`].
    pub fn from_json_str(raw: &str) -> Result<Self, SheetError> {
        #[derive(Deserialize)]
        struct Raw {
            questions: Vec<QuestionPage>,
        }
        let raw: Raw = serde_json::from_str(raw)?;
        Self::new(raw.questions)
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        ordinal_of(self.questions.len().saturating_sub(1))
    }

    /// Question at a 1-based position.
    #[must_use]
    pub fn question(&self, ordinal: u32) -> Option<&QuestionPage> {
        let index = usize::try_from(ordinal.checked_sub(1)?).ok()?;
        self.questions.get(index)
    }

    /// Attributes the host page declares for the question at `ordinal`.
    #[must_use]
    pub fn attributes(&self, ordinal: u32) -> Option<PageAttributes> {
        self.question(ordinal)
            .map(|q| PageAttributes::new(ordinal, self.total(), q.mode))
    }

    /// Built-in sheet used when no questions are configured.
    #[must_use]
    pub fn sample() -> Self {
        let page = |prompt: &str, mode, options: &[&str]| QuestionPage {
            prompt: prompt.to_string(),
            mode,
            options: options.iter().map(|o| (*o).to_string()).collect(),
        };
        Self {
            questions: vec![
                page(
                    "Which HTTP status code means the resource was not found?",
                    AnswerMode::Single,
                    &["200", "301", "404", "500"],
                ),
                page(
                    "Which of these are Kubernetes workload resources?",
                    AnswerMode::Multiple,
                    &["Deployment", "StatefulSet", "ConfigMap", "DaemonSet"],
                ),
                page(
                    "Which command shows the logs of a running container?",
                    AnswerMode::Single,
                    &["docker ps", "docker logs", "docker inspect"],
                ),
                page(
                    "Which signals can a process not catch or ignore?",
                    AnswerMode::Multiple,
                    &["SIGTERM", "SIGKILL", "SIGSTOP", "SIGHUP", "SIGINT"],
                ),
                page(
                    "What is the default port of PostgreSQL?",
                    AnswerMode::Single,
                    &["3306", "5432", "6379", "27017"],
                ),
            ],
        }
    }
}

fn ordinal_of(position: usize) -> u32 {
    u32::try_from(position).map_or(u32::MAX, |p| p.saturating_add(1))
}
