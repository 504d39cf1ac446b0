use dioxus::prelude::*;

use quiz_core::model::NoticeKind;

use crate::vm::{OptionRowVm, QuestionIntent};

use super::page::NoticeView;

#[component]
pub(super) fn ProgressBar(fill: u8, percent: u8, completed: u32, total: u32, caption: String) -> Element {
    rsx! {
        div { class: "progress",
            div { class: "progress-header",
                span { class: "progress-caption", "{caption}" }
                span { id: "completedQuestions", "Completed: {completed} of {total}" }
                span { class: "progress-percent", id: "progressPercent", "{percent}%" }
            }
            div { class: "progress-bar",
                div {
                    class: "progress-fill",
                    id: "progressFill",
                    style: "width: {fill}%",
                }
            }
        }
    }
}

#[component]
pub(super) fn ElapsedLabel(text: String) -> Element {
    rsx! {
        p { class: "elapsed",
            "Time: "
            span { id: "timeCounter", "{text}" }
        }
    }
}

#[component]
pub(super) fn OptionList(rows: Vec<OptionRowVm>, on_intent: Callback<QuestionIntent, bool>) -> Element {
    rsx! {
        div { class: "option-list", role: "list",
            for row in rows {
                OptionRow { key: "{row.index}", row: row.clone(), on_intent }
            }
        }
    }
}

#[component]
fn OptionRow(row: OptionRowVm, on_intent: Callback<QuestionIntent, bool>) -> Element {
    let class = if row.selected {
        "option-item selected"
    } else {
        "option-item"
    };
    let index = row.index;
    rsx! {
        div {
            class: "{class}",
            id: "option-{index}",
            role: "listitem",
            onclick: move |_| {
                on_intent.call(QuestionIntent::ClickOption(index));
            },
            input {
                class: "option-input",
                r#type: "{row.input_type}",
                name: "answer",
                value: "{index}",
                tabindex: "-1",
                checked: row.selected,
            }
            span { class: "option-label", "{row.label}" }
            if let Some(shortcut) = row.shortcut {
                span { class: "option-key", "{shortcut}" }
            }
        }
    }
}

#[component]
pub(super) fn NoticeStack(notices: Vec<NoticeView>) -> Element {
    rsx! {
        div { class: "notice-stack", "aria-live": "polite",
            for notice in notices {
                div {
                    key: "{notice.id}",
                    class: notice_class(notice.kind, notice.fading),
                    role: "status",
                    "{notice.message}"
                }
            }
        }
    }
}

fn notice_class(kind: NoticeKind, fading: bool) -> String {
    let kind = match kind {
        NoticeKind::Info => "notice-info",
        NoticeKind::Error => "notice-error",
    };
    if fading {
        format!("notice {kind} fading")
    } else {
        format!("notice {kind}")
    }
}
