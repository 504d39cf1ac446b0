use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use quiz_core::model::NoticeId;

/// Delayed work owned by one question view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    TimerTick,
    ProgressFrame,
    BusyRevert,
    NoticeFade(NoticeId),
    NoticeRemove(NoticeId),
}

/// Cooperative task queue ordered by due instant, then by scheduling order.
///
/// Nothing here runs on its own: the owner pops due tasks and runs each to completion
/// before looking at the next one.
#[derive(Debug, Default)]
pub struct TaskQueue {
    next_seq: u64,
    tasks: BTreeMap<(DateTime<Utc>, u64), Task>,
}

impl TaskQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due: DateTime<Utc>, task: Task) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.tasks.insert((due, seq), task);
    }

    /// Take the earliest task due at or before `now`.
    pub fn pop_due(&mut self, now: DateTime<Utc>) -> Option<(DateTime<Utc>, Task)> {
        let (&(due, _), _) = self.tasks.first_key_value()?;
        if due > now {
            return None;
        }
        self.tasks.pop_first().map(|((due, _), task)| (due, task))
    }

    #[must_use]
    pub fn next_due(&self) -> Option<DateTime<Utc>> {
        self.tasks.keys().next().map(|(due, _)| *due)
    }

    #[must_use]
    pub fn contains(&self, task: Task) -> bool {
        self.tasks.values().any(|queued| *queued == task)
    }

    /// Drop every queued instance of `task`. Returns how many were removed.
    pub fn cancel(&mut self, task: Task) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|_, queued| *queued != task);
        before - self.tasks.len()
    }

    /// Drop everything. Returns how many tasks were pending.
    pub fn clear(&mut self) -> usize {
        let pending = self.tasks.len();
        self.tasks.clear();
        pending
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
