use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn FinishedView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let total = ctx.sheet().total();

    rsx! {
        div { class: "page finished-page",
            h2 { "Test complete" }
            p { "You answered all {total} questions." }
            button {
                class: "btn btn-secondary",
                id: "back-to-start",
                r#type: "button",
                onclick: move |_| {
                    let _ = navigator.push(Route::Start {});
                },
                "Back to start"
            }
        }
    }
}
