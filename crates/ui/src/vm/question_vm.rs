use quiz_core::keyboard::KeyPress;
use quiz_core::model::{AnswerMode, SessionContext};
use services::QuestionPage;

/// Everything the question view can ask the interaction engine to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionIntent {
    ClickOption(usize),
    Submit,
    Previous,
    Key(KeyPress),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionRowVm {
    pub index: usize,
    pub label: String,
    pub selected: bool,
    /// Digit key that picks this option, when there is one.
    pub shortcut: Option<usize>,
    pub input_type: &'static str,
}

#[must_use]
pub fn build_option_rows(question: &QuestionPage, selected: &[bool]) -> Vec<OptionRowVm> {
    let input_type = match question.mode {
        AnswerMode::Single => "radio",
        AnswerMode::Multiple => "checkbox",
    };
    question
        .options
        .iter()
        .enumerate()
        .map(|(index, label)| OptionRowVm {
            index,
            label: label.clone(),
            selected: selected.get(index).copied().unwrap_or(false),
            shortcut: (index < 9).then_some(index + 1),
            input_type,
        })
        .collect()
}

#[must_use]
pub fn submit_idle_label(ctx: &SessionContext) -> &'static str {
    if ctx.is_last_question() {
        "Finish test"
    } else {
        "Next question"
    }
}

#[must_use]
pub fn progress_caption(ctx: &SessionContext) -> String {
    let mode = match ctx.answer_mode() {
        AnswerMode::Single => "one answer",
        AnswerMode::Multiple => "one or more answers",
    };
    format!(
        "Question {} of {} · {mode}",
        ctx.question_ordinal(),
        ctx.total_questions()
    )
}
