mod question_vm;

pub use question_vm::{
    OptionRowVm, QuestionIntent, build_option_rows, progress_caption, submit_idle_label,
};
