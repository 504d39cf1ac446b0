use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn StartView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let total = ctx.sheet().total();
    let first = ctx.start_ordinal();
    let timer_note = if ctx.show_timer() {
        "Your time is measured from the moment each question opens."
    } else {
        "There is no time limit."
    };

    rsx! {
        div { class: "page start-page",
            h2 { "Ready when you are" }
            p { "This test has {total} questions." }
            p { class: "hint", "{timer_note}" }
            button {
                class: "btn btn-primary",
                id: "start-test",
                r#type: "button",
                onclick: move |_| {
                    let _ = navigator.push(Route::Question { ordinal: first });
                },
                if first > 1 { "Resume at question {first}" } else { "Start test" }
            }
        }
    }
}
