mod components;
mod keys;
mod page;
mod view;

pub use page::{DomPage, NoticeView, PageLayout, PageState};
pub use view::QuestionView;

#[cfg(test)]
pub(crate) use view::{QuestionTestHandles, SUBMIT_FAILED};
