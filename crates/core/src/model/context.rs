use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContextError {
    #[error("question ordinal must be at least 1")]
    ZeroOrdinal,

    #[error("total questions must be at least 1")]
    ZeroTotal,

    #[error("question ordinal {ordinal} is past the last question ({total})")]
    OrdinalPastEnd { ordinal: u32, total: u32 },

    #[error("unknown answer mode: {raw}")]
    UnknownMode { raw: String },
}

//
// ─── ANSWER MODE ──────────────────────────────────────────────────────────────
//

/// Whether a question accepts exactly one or any number of selected options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerMode {
    #[default]
    Single,
    Multiple,
}

impl AnswerMode {
    #[must_use]
    pub fn is_single(self) -> bool {
        matches!(self, AnswerMode::Single)
    }
}

impl FromStr for AnswerMode {
    type Err = ContextError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "single" | "single_choice" => Ok(Self::Single),
            "multiple" | "multiple_choice" => Ok(Self::Multiple),
            _ => Err(ContextError::UnknownMode {
                raw: raw.to_string(),
            }),
        }
    }
}

impl fmt::Display for AnswerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerMode::Single => f.write_str("single_choice"),
            AnswerMode::Multiple => f.write_str("multiple_choice"),
        }
    }
}

//
// ─── DECLARED ATTRIBUTES ──────────────────────────────────────────────────────
//

/// Raw attributes as the host page declares them on the question container.
///
/// Values are kept as strings; interpretation (and recovery from garbage) happens in
/// [`SessionContext::from_attributes`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageAttributes {
    #[serde(rename = "data-question-num", default)]
    pub question_num: Option<String>,
    #[serde(rename = "data-total-questions", default)]
    pub total_questions: Option<String>,
    #[serde(rename = "data-question-type", default)]
    pub question_type: Option<String>,
}

impl PageAttributes {
    #[must_use]
    pub fn new(ordinal: u32, total: u32, mode: AnswerMode) -> Self {
        Self {
            question_num: Some(ordinal.to_string()),
            total_questions: Some(total.to_string()),
            question_type: Some(mode.to_string()),
        }
    }
}

//
// ─── SESSION CONTEXT ──────────────────────────────────────────────────────────
//

/// Immutable snapshot of the question currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionContext {
    question_ordinal: u32,
    total_questions: u32,
    answer_mode: AnswerMode,
}

impl SessionContext {
    pub const DEFAULT_ORDINAL: u32 = 1;
    pub const DEFAULT_TOTAL: u32 = 50;

    /// # Errors
    ///
    /// Returns `ContextError::ZeroOrdinal` / `ContextError::ZeroTotal` for zero values and
    /// `ContextError::OrdinalPastEnd` when `ordinal > total`.
    pub fn new(ordinal: u32, total: u32, mode: AnswerMode) -> Result<Self, ContextError> {
        if ordinal == 0 {
            return Err(ContextError::ZeroOrdinal);
        }
        if total == 0 {
            return Err(ContextError::ZeroTotal);
        }
        if ordinal > total {
            return Err(ContextError::OrdinalPastEnd { ordinal, total });
        }
        Ok(Self {
            question_ordinal: ordinal,
            total_questions: total,
            answer_mode: mode,
        })
    }

    /// Read the context from declared page attributes.
    ///
    /// Never fails: absent or malformed values fall back to ordinal 1, 50 questions and
    /// single choice, and an ordinal past the end is clamped to the last question.
    #[must_use]
    pub fn from_attributes(attrs: &PageAttributes) -> Self {
        let total = parse_positive(attrs.total_questions.as_deref(), "data-total-questions")
            .unwrap_or(Self::DEFAULT_TOTAL);
        let ordinal = parse_positive(attrs.question_num.as_deref(), "data-question-num")
            .unwrap_or(Self::DEFAULT_ORDINAL);
        let ordinal = if ordinal > total {
            debug!(ordinal, total, "question ordinal past the end, clamping");
            total
        } else {
            ordinal
        };
        let answer_mode = match attrs.question_type.as_deref().map(str::parse::<AnswerMode>) {
            Some(Ok(mode)) => mode,
            Some(Err(err)) => {
                debug!(%err, "falling back to single choice");
                AnswerMode::Single
            }
            None => AnswerMode::Single,
        };

        Self {
            question_ordinal: ordinal,
            total_questions: total,
            answer_mode,
        }
    }

    #[must_use]
    pub fn question_ordinal(&self) -> u32 {
        self.question_ordinal
    }

    #[must_use]
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    #[must_use]
    pub fn answer_mode(&self) -> AnswerMode {
        self.answer_mode
    }

    /// Questions answered before this one.
    #[must_use]
    pub fn completed_questions(&self) -> u32 {
        self.question_ordinal - 1
    }

    #[must_use]
    pub fn is_first_question(&self) -> bool {
        self.question_ordinal == 1
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.question_ordinal == self.total_questions
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self {
            question_ordinal: Self::DEFAULT_ORDINAL,
            total_questions: Self::DEFAULT_TOTAL,
            answer_mode: AnswerMode::Single,
        }
    }
}

fn parse_positive(raw: Option<&str>, attribute: &'static str) -> Option<u32> {
    let raw = raw?;
    match raw.trim().parse::<u32>() {
        Ok(0) => {
            debug!(attribute, "zero is not a valid value, using default");
            None
        }
        Ok(value) => Some(value),
        Err(_) => {
            debug!(attribute, raw, "non-numeric attribute, using default");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(num: Option<&str>, total: Option<&str>, kind: Option<&str>) -> PageAttributes {
        PageAttributes {
            question_num: num.map(str::to_string),
            total_questions: total.map(str::to_string),
            question_type: kind.map(str::to_string),
        }
    }

    #[test]
    fn reads_declared_attributes() {
        let ctx = SessionContext::from_attributes(&attrs(
            Some("3"),
            Some("10"),
            Some("multiple_choice"),
        ));
        assert_eq!(ctx.question_ordinal(), 3);
        assert_eq!(ctx.total_questions(), 10);
        assert_eq!(ctx.answer_mode(), AnswerMode::Multiple);
        assert_eq!(ctx.completed_questions(), 2);
    }

    #[test]
    fn missing_attributes_fall_back_to_defaults() {
        let ctx = SessionContext::from_attributes(&PageAttributes::default());
        assert_eq!(ctx, SessionContext::default());
        assert_eq!(ctx.total_questions(), 50);
        assert_eq!(ctx.answer_mode(), AnswerMode::Single);
    }

    #[test]
    fn garbage_attributes_fall_back_per_field() {
        let ctx = SessionContext::from_attributes(&attrs(Some("abc"), Some("12"), Some("essay")));
        assert_eq!(ctx.question_ordinal(), 1);
        assert_eq!(ctx.total_questions(), 12);
        assert_eq!(ctx.answer_mode(), AnswerMode::Single);

        let ctx = SessionContext::from_attributes(&attrs(Some("0"), Some("-4"), None));
        assert_eq!(ctx.question_ordinal(), 1);
        assert_eq!(ctx.total_questions(), 50);
    }

    #[test]
    fn ordinal_past_end_is_clamped() {
        let ctx = SessionContext::from_attributes(&attrs(Some("9"), Some("4"), None));
        assert_eq!(ctx.question_ordinal(), 4);
        assert!(ctx.is_last_question());
    }

    #[test]
    fn strict_constructor_rejects_broken_invariants() {
        assert_eq!(
            SessionContext::new(0, 5, AnswerMode::Single),
            Err(ContextError::ZeroOrdinal)
        );
        assert_eq!(
            SessionContext::new(1, 0, AnswerMode::Single),
            Err(ContextError::ZeroTotal)
        );
        assert_eq!(
            SessionContext::new(6, 5, AnswerMode::Single),
            Err(ContextError::OrdinalPastEnd {
                ordinal: 6,
                total: 5
            })
        );
        assert!(SessionContext::new(5, 5, AnswerMode::Multiple).is_ok());
    }

    #[test]
    fn answer_mode_parses_loosely() {
        assert_eq!("SINGLE".parse::<AnswerMode>(), Ok(AnswerMode::Single));
        assert_eq!(" Multiple ".parse::<AnswerMode>(), Ok(AnswerMode::Multiple));
        assert!("text".parse::<AnswerMode>().is_err());
    }
}
