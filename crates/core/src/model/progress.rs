use crate::model::SessionContext;

/// Completion percentage for the question at `ordinal` out of `total`.
///
/// Progress reflects questions already answered, so the last question shows less than
/// 100%. Halves round up. A zero `total` yields 0.
#[must_use]
pub fn compute_target_percent(ordinal: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    let completed = u64::from(ordinal.saturating_sub(1));
    let total = u64::from(total);
    let rounded = (completed * 200 + total) / (total * 2);
    u8::try_from(rounded.min(100)).unwrap_or(100)
}

/// Displayed vs. target percentage of the progress bar.
///
/// `displayed` walks toward `target` one unit per animation frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressState {
    target: u8,
    displayed: u8,
}

impl ProgressState {
    /// Starts at 0% displayed, aiming at the context's completion.
    #[must_use]
    pub fn for_context(ctx: &SessionContext) -> Self {
        Self {
            target: compute_target_percent(ctx.question_ordinal(), ctx.total_questions()),
            displayed: 0,
        }
    }

    #[must_use]
    pub fn target(&self) -> u8 {
        self.target
    }

    #[must_use]
    pub fn displayed(&self) -> u8 {
        self.displayed
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.target == self.displayed
    }

    /// Point the animation at a new target. An in-flight animation continues from the
    /// currently displayed value.
    pub fn retarget(&mut self, target: u8) {
        self.target = target.min(100);
    }

    /// One animation frame. Returns the new displayed value, or `None` when already settled.
    pub fn step(&mut self) -> Option<u8> {
        if self.displayed < self.target {
            self.displayed += 1;
        } else if self.displayed > self.target {
            self.displayed -= 1;
        } else {
            return None;
        }
        Some(self.displayed)
    }
}
