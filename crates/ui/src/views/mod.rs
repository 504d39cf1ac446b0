mod finished;
mod question;
mod start;

pub use finished::FinishedView;
pub use question::{DomPage, NoticeView, PageLayout, PageState, QuestionView};
pub use start::StartView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
