mod context;
mod ids;
mod notice;
mod progress;
mod selection;
mod submit;
mod timer;
mod validation;

pub use context::{AnswerMode, ContextError, PageAttributes, SessionContext};
pub use ids::NoticeId;
pub use notice::{
    NOTICE_FADE_MS, NOTICE_VISIBLE_MS, Notice, NoticeBoard, NoticeKind, NoticePhase,
};
pub use progress::{ProgressState, compute_target_percent};
pub use selection::{Mirror, OptionEntry, SelectionError, SelectionModel};
pub use submit::{BUSY_LABEL, BUSY_REVERT_MS, SubmitAffordance, SubmitGate};
pub use timer::{ElapsedTime, TimerState};
pub use validation::{ValidationResult, validate};
