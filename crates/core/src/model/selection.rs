use std::collections::BTreeSet;
use thiserror::Error;

use crate::model::AnswerMode;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SelectionError {
    #[error("option {index} does not exist ({len} options)")]
    OutOfRange { index: usize, len: usize },

    #[error("operation is not valid for {mode:?} answer mode")]
    ModeMismatch { mode: AnswerMode },
}

/// One selectable answer choice of the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionEntry {
    pub index: usize,
    pub selected: bool,
}

/// Entries whose visual state must be updated, in one batch.
///
/// Applying a `Mirror` as a whole keeps the visible list from ever showing two
/// single-choice options selected at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mirror {
    pub entries: Vec<OptionEntry>,
}

impl Mirror {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Source of truth for which options are chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionModel {
    entries: Vec<OptionEntry>,
    mode: AnswerMode,
}

impl SelectionModel {
    #[must_use]
    pub fn new(option_count: usize, mode: AnswerMode) -> Self {
        Self {
            entries: (0..option_count)
                .map(|index| OptionEntry {
                    index,
                    selected: false,
                })
                .collect(),
            mode,
        }
    }

    #[must_use]
    pub fn mode(&self) -> AnswerMode {
        self.mode
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[OptionEntry] {
        &self.entries
    }

    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool {
        self.entries.get(index).is_some_and(|entry| entry.selected)
    }

    #[must_use]
    pub fn selected_indices(&self) -> BTreeSet<usize> {
        self.entries
            .iter()
            .filter(|entry| entry.selected)
            .map(|entry| entry.index)
            .collect()
    }

    /// Position of the first selected entry, if any.
    #[must_use]
    pub fn selected_position(&self) -> Option<usize> {
        self.entries.iter().position(|entry| entry.selected)
    }

    /// Make `index` the only selected entry.
    ///
    /// The returned mirror holds every entry whose state changed.
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::ModeMismatch` in multiple-choice mode and
    /// `SelectionError::OutOfRange` for an unknown index. State is untouched on error.
    pub fn select_single(&mut self, index: usize) -> Result<Mirror, SelectionError> {
        if self.mode != AnswerMode::Single {
            return Err(SelectionError::ModeMismatch { mode: self.mode });
        }
        self.check_index(index)?;

        let mut mirror = Mirror::default();
        for entry in &mut self.entries {
            let selected = entry.index == index;
            if entry.selected != selected {
                entry.selected = selected;
                mirror.entries.push(*entry);
            }
        }
        Ok(mirror)
    }

    /// Flip `index` in multiple-choice mode.
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::ModeMismatch` in single-choice mode and
    /// `SelectionError::OutOfRange` for an unknown index.
    pub fn toggle_multiple(&mut self, index: usize) -> Result<Mirror, SelectionError> {
        if self.mode != AnswerMode::Multiple {
            return Err(SelectionError::ModeMismatch { mode: self.mode });
        }
        self.check_index(index)?;

        let entry = &mut self.entries[index];
        entry.selected = !entry.selected;
        Ok(Mirror {
            entries: vec![*entry],
        })
    }

    /// What a direct click on an option does for the current mode.
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::OutOfRange` for an unknown index.
    pub fn click(&mut self, index: usize) -> Result<Mirror, SelectionError> {
        match self.mode {
            AnswerMode::Single => self.select_single(index),
            AnswerMode::Multiple => self.toggle_multiple(index),
        }
    }

    fn check_index(&self, index: usize) -> Result<(), SelectionError> {
        if index < self.entries.len() {
            Ok(())
        } else {
            Err(SelectionError::OutOfRange {
                index,
                len: self.entries.len(),
            })
        }
    }
}
