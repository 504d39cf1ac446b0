use std::collections::BTreeSet;

use crate::model::AnswerMode;

/// Outcome of checking a selection before it may be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Empty,
    TooMany,
}

impl ValidationResult {
    #[must_use]
    pub fn is_valid(self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// User-facing explanation of why submission was blocked.
    #[must_use]
    pub fn message(self, mode: AnswerMode) -> Option<&'static str> {
        match (self, mode) {
            (ValidationResult::Valid, _) => None,
            (ValidationResult::Empty, AnswerMode::Single) => Some("Please choose an answer."),
            (ValidationResult::Empty, AnswerMode::Multiple) => {
                Some("Please choose at least one answer.")
            }
            (ValidationResult::TooMany, _) => Some("Please choose only one answer."),
        }
    }
}

#[must_use]
pub fn validate(selected: &BTreeSet<usize>, mode: AnswerMode) -> ValidationResult {
    if selected.is_empty() {
        ValidationResult::Empty
    } else if mode == AnswerMode::Single && selected.len() > 1 {
        ValidationResult::TooMany
    } else {
        ValidationResult::Valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_is_rejected_in_both_modes() {
        let none = BTreeSet::new();
        assert_eq!(validate(&none, AnswerMode::Single), ValidationResult::Empty);
        assert_eq!(validate(&none, AnswerMode::Multiple), ValidationResult::Empty);
    }

    #[test]
    fn single_mode_rejects_two_answers() {
        let two = BTreeSet::from([0, 3]);
        assert_eq!(validate(&two, AnswerMode::Single), ValidationResult::TooMany);
        assert_eq!(validate(&two, AnswerMode::Multiple), ValidationResult::Valid);
    }

    #[test]
    fn one_answer_is_valid_in_both_modes() {
        let one = BTreeSet::from([1]);
        assert!(validate(&one, AnswerMode::Single).is_valid());
        assert!(validate(&one, AnswerMode::Multiple).is_valid());
    }

    #[test]
    fn messages_are_phrased_per_mode() {
        assert_eq!(
            ValidationResult::Empty.message(AnswerMode::Single),
            Some("Please choose an answer.")
        );
        assert_eq!(
            ValidationResult::Empty.message(AnswerMode::Multiple),
            Some("Please choose at least one answer.")
        );
        assert_eq!(
            ValidationResult::TooMany.message(AnswerMode::Single),
            Some("Please choose only one answer.")
        );
        assert_eq!(ValidationResult::Valid.message(AnswerMode::Single), None);
    }
}
