use chrono::{DateTime, Duration, Utc};

/// How long the submit control stays busy before it is handed back to the user.
pub const BUSY_REVERT_MS: i64 = 3_000;

pub const BUSY_LABEL: &str = "Loading...";

/// Visible state of the submit control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitAffordance {
    #[default]
    Idle,
    Busy { revert_at: DateTime<Utc> },
}

impl SubmitAffordance {
    #[must_use]
    pub fn is_busy(&self) -> bool {
        matches!(self, SubmitAffordance::Busy { .. })
    }

    #[must_use]
    pub fn label<'a>(&self, idle_label: &'a str) -> &'a str {
        match self {
            SubmitAffordance::Idle => idle_label,
            SubmitAffordance::Busy { .. } => BUSY_LABEL,
        }
    }
}

/// `Idle -> Busy -> Idle` state machine of the submit control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmitGate {
    state: SubmitAffordance,
}

impl SubmitGate {
    #[must_use]
    pub fn state(&self) -> SubmitAffordance {
        self.state
    }

    /// Enter the busy state. Returns the revert deadline, or `None` if already busy
    /// (a disabled control does not accept a second click).
    pub fn begin(&mut self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        if self.state.is_busy() {
            return None;
        }
        let revert_at = now + Duration::milliseconds(BUSY_REVERT_MS);
        self.state = SubmitAffordance::Busy { revert_at };
        Some(revert_at)
    }

    /// Back to idle. Returns `false` if the control was not busy.
    pub fn revert(&mut self) -> bool {
        std::mem::take(&mut self.state).is_busy()
    }
}
