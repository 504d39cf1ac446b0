use crate::model::NoticeId;

/// Time a notice stays fully visible.
pub const NOTICE_VISIBLE_MS: i64 = 3_000;
/// Duration of the fade-out before the notice is removed.
pub const NOTICE_FADE_MS: i64 = 300;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NoticeKind {
    #[default]
    Info,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticePhase {
    Visible,
    Fading,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: NoticeId,
    pub message: String,
    pub kind: NoticeKind,
    pub phase: NoticePhase,
}

/// Stack of live notices. Duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeBoard {
    next_id: NoticeId,
    notices: Vec<Notice>,
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self {
            next_id: NoticeId::new(1),
            notices: Vec::new(),
        }
    }
}

impl NoticeBoard {
    pub fn push(&mut self, message: impl Into<String>, kind: NoticeKind) -> &Notice {
        let id = self.next_id;
        self.next_id = id.next();
        self.notices.push(Notice {
            id,
            message: message.into(),
            kind,
            phase: NoticePhase::Visible,
        });
        &self.notices[self.notices.len() - 1]
    }

    /// Returns `false` for unknown or already fading notices.
    pub fn begin_fade(&mut self, id: NoticeId) -> bool {
        match self.notices.iter_mut().find(|notice| notice.id == id) {
            Some(notice) if notice.phase == NoticePhase::Visible => {
                notice.phase = NoticePhase::Fading;
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, id: NoticeId) -> Option<Notice> {
        let position = self.notices.iter().position(|notice| notice.id == id)?;
        Some(self.notices.remove(position))
    }

    pub fn clear(&mut self) {
        self.notices.clear();
    }

    #[must_use]
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_stack_and_get_distinct_ids() {
        let mut board = NoticeBoard::default();
        let first = board.push("same", NoticeKind::Error).id;
        let second = board.push("same", NoticeKind::Error).id;
        assert_ne!(first, second);
        assert_eq!(board.notices().len(), 2);
    }

    #[test]
    fn fade_then_remove() {
        let mut board = NoticeBoard::default();
        let id = board.push("hello", NoticeKind::Info).id;
        assert!(board.begin_fade(id));
        assert!(!board.begin_fade(id));
        assert_eq!(board.notices()[0].phase, NoticePhase::Fading);

        let removed = board.remove(id).unwrap();
        assert_eq!(removed.message, "hello");
        assert!(board.notices().is_empty());
        assert!(board.remove(id).is_none());
    }
}
