#![forbid(unsafe_code)]

pub mod engine;
pub mod error;
pub mod host;
pub mod scheduler;
pub mod sheet;

pub use quiz_core::Clock;

pub use engine::{FRAME_MS, InteractionEngine, PREVIOUS_UNAVAILABLE, SubmitAttempt, TICK_MS};
pub use error::{Hook, MissingHook, SheetError};
pub use host::{HostPage, PageHooks};
pub use scheduler::{Task, TaskQueue};
pub use sheet::{QuestionPage, QuestionSheet};
